use crate::rng::SeededRng;
use crate::timer::Timer;
use rand::Rng;

/// Enemy firing policy: wait a uniformly random interval, fire everything,
/// re-roll. Intervals are i.i.d., not periodic.
#[derive(Clone, Debug)]
pub struct Gunner {
    min_interval_ms: u64,
    max_interval_ms: u64,
    threshold_ms: u64,
    timer: Timer,
    armed: bool,
}

impl Gunner {
    pub fn new(min_interval_ms: u64, max_interval_ms: u64) -> Gunner {
        debug_assert!(min_interval_ms <= max_interval_ms);
        Gunner {
            min_interval_ms,
            max_interval_ms,
            threshold_ms: min_interval_ms,
            timer: Timer::default(),
            armed: false,
        }
    }

    /// Returns true when the owning ship should fire all weapons this tick.
    pub fn update(&mut self, now_ms: u64, rng: &mut SeededRng) -> bool {
        if !self.armed {
            // First update after spawn: start the first interval.
            self.armed = true;
            self.timer.reset(now_ms);
            self.threshold_ms = self.roll(rng);
            return false;
        }
        if self.timer.elapsed(now_ms, self.threshold_ms) {
            self.threshold_ms = self.roll(rng);
            self.timer.reset(now_ms);
            true
        } else {
            false
        }
    }

    fn roll(&self, rng: &mut SeededRng) -> u64 {
        rng.gen_range(self.min_interval_ms..=self.max_interval_ms)
    }
}
