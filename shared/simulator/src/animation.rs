use crate::graphics::Canvas;
use crate::sprite::Sprite;
use crate::timer::Timer;
use nalgebra::Point2;

/// Timed image sequence: the total runtime is divided evenly across the
/// frames. Used for destruction animations, which run once and report done.
#[derive(Clone, Debug)]
pub struct AnimatedSprite {
    pub sprite: Sprite,
    frames: Vec<String>,
    current: usize,
    runtime_ms: u64,
    repeat: bool,
    done: bool,
    frame_timer: Timer,
}

impl AnimatedSprite {
    pub fn new(
        position: Point2<f64>,
        width: i32,
        height: i32,
        frames: Vec<String>,
        runtime_ms: u64,
        repeat: bool,
    ) -> AnimatedSprite {
        let mut sprite = Sprite::new(position, width, height, "");
        sprite.image = frames.first().cloned();
        sprite.hide();
        AnimatedSprite {
            sprite,
            frames,
            current: 0,
            runtime_ms,
            repeat,
            done: false,
            frame_timer: Timer::default(),
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn current_frame(&self) -> usize {
        self.current
    }

    /// Rewind to frame 0 at the given position and start playing.
    pub fn reset_at(&mut self, position: Point2<f64>, now_ms: u64) {
        self.sprite.position = position;
        self.current = 0;
        self.done = false;
        self.sprite.image = self.frames.first().cloned();
        self.sprite.show();
        self.frame_timer.reset(now_ms);
    }

    pub fn update(&mut self, now_ms: u64) {
        // Zero frames configured is a degraded state, not an error.
        if self.done || !self.sprite.active || self.frames.is_empty() {
            return;
        }
        let per_frame_ms = self.runtime_ms / self.frames.len() as u64;
        if !self.frame_timer.elapsed(now_ms, per_frame_ms) {
            return;
        }
        self.frame_timer.reset(now_ms);
        if self.current + 1 >= self.frames.len() {
            if self.repeat {
                self.current = 0;
            } else {
                self.done = true;
                self.sprite.hide();
                return;
            }
        } else {
            self.current += 1;
        }
        self.sprite.image = Some(self.frames[self.current].clone());
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        self.sprite.draw(canvas);
    }
}
