use crate::arena::Arena;
use crate::audio::{self, AudioPlayer, NullAudio};
use crate::effect::TouchEffect;
use crate::graphics::Canvas;
use crate::index_set::IndexSet;
use crate::pickable::{PickableData, PickableHandle};
use crate::rng::{new_rng, SeededRng};
use crate::scenery::{Scenery, SceneryDef};
use crate::ship::{PathProgress, ShipData, ShipHandle};
use crate::shot::{self, ShotData, ShotHandle};
use crate::timer::Timer;
use crate::weapon::PendingShot;
use instant::Instant;
use nalgebra::Point2;

/// Fixed update interval of the external tick driver.
pub const TICK_LENGTH_MS: u64 = 34;
/// Continuous all-clear time required before a level reports completion.
pub const GRACE_MS: u64 = 5000;
pub const VIEW_WIDTH: f64 = 640.0;
pub const VIEW_HEIGHT: f64 = 480.0;

#[derive(Clone, Copy, Debug, Default)]
pub struct Timing {
    pub update: f64,
    pub draw: f64,
}

/// Player state cached at the end of each tick for HUD reads.
#[derive(Clone, Copy, Debug, Default)]
pub struct Hud {
    pub health: i32,
    pub lives: i32,
}

/// Owns every live entity and runs the authoritative per-tick update pass:
/// scenery, shot movement and collision, enemy movement and firing,
/// power-ups, and the completion check.
pub struct Level {
    pub name: String,
    pub ships: IndexSet<ShipHandle>,
    pub(crate) ship_data: Arena<ShipData>,
    pub player_shots: IndexSet<ShotHandle>,
    pub enemy_shots: IndexSet<ShotHandle>,
    pub(crate) shot_data: Arena<ShotData>,
    pub pickables: IndexSet<PickableHandle>,
    pub(crate) pickable_data: Arena<PickableData>,
    scenery: Scenery,
    offset: i32,
    scroll_speed: i32,
    clock_ms: u64,
    tick: u32,
    completion_timer: Option<Timer>,
    audio: Box<dyn AudioPlayer>,
    pub(crate) rng: SeededRng,
    timing: Timing,
    hud: Hud,
}

impl Level {
    pub fn new(name: &str, seed: u32) -> Level {
        log::info!("level {:?} seed {}", name, seed);
        Level {
            name: name.to_string(),
            ships: IndexSet::new(),
            ship_data: Arena::new(),
            player_shots: IndexSet::new(),
            enemy_shots: IndexSet::new(),
            shot_data: Arena::new(),
            pickables: IndexSet::new(),
            pickable_data: Arena::new(),
            scenery: Scenery::new(SceneryDef::default(), VIEW_WIDTH, VIEW_HEIGHT),
            offset: 0,
            scroll_speed: 1,
            clock_ms: 0,
            tick: 0,
            completion_timer: None,
            audio: Box::new(NullAudio),
            rng: new_rng(seed),
            timing: Timing::default(),
            hud: Hud::default(),
        }
    }

    pub fn tick(&self) -> u32 {
        self.tick
    }

    pub fn time_ms(&self) -> u64 {
        self.clock_ms
    }

    pub fn offset(&self) -> i32 {
        self.offset
    }

    pub fn scroll_speed(&self) -> i32 {
        self.scroll_speed
    }

    pub fn set_scroll_speed(&mut self, scroll_speed: i32) {
        self.scroll_speed = scroll_speed;
    }

    pub fn scenery(&self) -> &Scenery {
        &self.scenery
    }

    pub fn set_scenery(&mut self, def: SceneryDef) {
        self.scenery = Scenery::new(def, VIEW_WIDTH, VIEW_HEIGHT);
    }

    pub fn timing(&self) -> Timing {
        self.timing
    }

    pub fn hud(&self) -> Hud {
        self.hud
    }

    pub fn set_audio(&mut self, audio: Box<dyn AudioPlayer>) {
        self.audio = audio;
    }

    pub fn ship(&self, handle: ShipHandle) -> &ShipData {
        self.ship_data.get(handle.0).unwrap()
    }

    pub fn ship_mut(&mut self, handle: ShipHandle) -> &mut ShipData {
        self.ship_data.get_mut(handle.0).unwrap()
    }

    pub fn shot(&self, handle: ShotHandle) -> &ShotData {
        self.shot_data.get(handle.0).unwrap()
    }

    pub fn pickable(&self, handle: PickableHandle) -> &PickableData {
        self.pickable_data.get(handle.0).unwrap()
    }

    pub fn add_ship(&mut self, data: ShipData) -> ShipHandle {
        let handle = ShipHandle(self.ship_data.insert(data));
        self.ships.insert(handle);
        handle
    }

    pub fn remove_ship(&mut self, handle: ShipHandle) {
        self.ships.remove(handle);
        self.ship_data.remove(handle.0);
    }

    pub fn add_pickable(&mut self, data: PickableData) -> PickableHandle {
        let handle = PickableHandle(self.pickable_data.insert(data));
        self.pickables.insert(handle);
        handle
    }

    pub fn remove_pickable(&mut self, handle: PickableHandle) {
        self.pickables.remove(handle);
        self.pickable_data.remove(handle.0);
    }

    /// The per-tick update pass. Step order is load-bearing: scenery and
    /// the player, player shots against enemies, enemy shots against the
    /// player, enemy movement/firing/ramming, power-ups, completion.
    pub fn update(&mut self, player: &mut ShipData) {
        let start_time = Instant::now();
        self.tick += 1;
        self.clock_ms += TICK_LENGTH_MS;
        let now = self.clock_ms;

        self.offset += self.scroll_speed;
        self.scenery.update();
        self.update_player(player, now);
        self.update_player_shots(now);
        self.update_enemy_shots(player, now);
        self.update_enemies(player, now);
        self.update_pickables(player, now);
        self.refresh_completion(now);

        self.hud = Hud {
            health: player.health.max(0),
            lives: player.lives(),
        };
        self.timing.update = (Instant::now() - start_time).as_secs_f64();
    }

    fn update_player(&mut self, player: &mut ShipData, now: u64) {
        if player.destroyed {
            player.explosion.update(now);
            player.try_respawn(now);
            return;
        }
        if let crate::ship::ShipControl::Player(control) = &player.control {
            let velocity = control.velocity;
            player.sprite.position += velocity;
        }
        // Keep the ship inside the viewport.
        let width = player.sprite.width as f64;
        let height = player.sprite.height as f64;
        player.sprite.position.x = player.sprite.position.x.clamp(0.0, VIEW_WIDTH - width);
        player.sprite.position.y = player.sprite.position.y.clamp(0.0, VIEW_HEIGHT - height);
    }

    fn update_player_shots(&mut self, now: u64) {
        let shots: Vec<ShotHandle> = self.player_shots.iter().copied().collect();
        for handle in shots {
            let (position, damage) = {
                let shot = self.shot_data.get_mut(handle.0).unwrap();
                shot.sprite.position += shot.velocity;
                (shot.sprite.position, shot.damage)
            };

            // First eligible enemy in insertion order takes the hit; one
            // hit per shot per tick.
            let mut hit = None;
            for &enemy_handle in self.ships.iter() {
                let enemy = self.ship_data.get(enemy_handle.0).unwrap();
                if self.offset >= enemy.offset_gate()
                    && !enemy.destroyed
                    && enemy.sprite.contains(position)
                {
                    hit = Some(enemy_handle);
                    break;
                }
            }
            if let Some(enemy_handle) = hit {
                let destroyed_now = self
                    .ship_data
                    .get_mut(enemy_handle.0)
                    .unwrap()
                    .apply_damage(damage, now);
                if destroyed_now {
                    self.play_sound(audio::SOUND_EXPLOSION);
                }
                self.shot_data.get_mut(handle.0).unwrap().sprite.hide();
            }

            // Off-screen cleanup runs after the hit test.
            let shot = self.shot_data.get_mut(handle.0).unwrap();
            if out_of_view(shot.sprite.position) {
                shot.sprite.hide();
            }
        }
        self.prune_shots();
    }

    fn update_enemy_shots(&mut self, player: &mut ShipData, now: u64) {
        let shots: Vec<ShotHandle> = self.enemy_shots.iter().copied().collect();
        for handle in shots {
            let (position, damage, active) = {
                let shot = self.shot_data.get_mut(handle.0).unwrap();
                shot.sprite.position += shot.velocity;
                (shot.sprite.position, shot.damage, shot.sprite.active)
            };

            if active && !player.destroyed && player.sprite.contains(position) {
                self.apply_effect(TouchEffect::Damage(damage), player, now);
                self.shot_data.get_mut(handle.0).unwrap().sprite.hide();
            }

            let shot = self.shot_data.get_mut(handle.0).unwrap();
            if out_of_view(shot.sprite.position) {
                shot.sprite.hide();
            }
        }
        self.prune_shots();
    }

    fn update_enemies(&mut self, player: &mut ShipData, now: u64) {
        let handles: Vec<ShipHandle> = self.ships.iter().copied().collect();
        let mut removals: Vec<ShipHandle> = Vec::new();
        for handle in handles {
            let eligible = {
                let enemy = self.ship_data.get(handle.0).unwrap();
                self.offset >= enemy.offset_gate()
            };
            if !eligible {
                continue;
            }

            let destroyed = {
                let enemy = self.ship_data.get_mut(handle.0).unwrap();
                if enemy.destroyed {
                    enemy.explosion.update(now);
                    if enemy.explosion.is_done() {
                        removals.push(handle);
                    }
                    true
                } else {
                    false
                }
            };
            if destroyed {
                continue;
            }

            let progress = self.ship_data.get_mut(handle.0).unwrap().advance_enemy();
            if progress == PathProgress::Exhausted {
                log::debug!("enemy {:?} left its path, despawning", handle);
                removals.push(handle);
                continue;
            }

            let wants_fire = {
                let Level { ship_data, rng, .. } = self;
                ship_data.get_mut(handle.0).unwrap().gunner_update(now, rng)
            };
            if wants_fire {
                self.fire_ship(handle);
            }

            // Ship-to-ship collision; first colliding enemy ends the pass.
            if !player.destroyed {
                let rammed = self
                    .ship_data
                    .get(handle.0)
                    .unwrap()
                    .sprite
                    .contains(player.sprite.position);
                if rammed {
                    player.destroy(now);
                    self.play_sound(audio::SOUND_EXPLOSION);
                    break;
                }
            }
        }
        for handle in removals {
            self.remove_ship(handle);
        }
    }

    fn update_pickables(&mut self, player: &mut ShipData, now: u64) {
        let handles: Vec<PickableHandle> = self.pickables.iter().copied().collect();
        for handle in handles {
            let (effect, touched) = {
                let pickable = self.pickable_data.get_mut(handle.0).unwrap();
                let velocity = pickable.velocity;
                pickable.sprite.position += velocity;
                if pickable.sprite.position.x + (pickable.sprite.width as f64) < 0.0 {
                    pickable.sprite.hide();
                }
                let touched = pickable.sprite.active
                    && !player.destroyed
                    && pickable.sprite.contains(player.sprite.position);
                (pickable.effect, touched)
            };
            if touched {
                self.apply_effect(effect, player, now);
                self.pickable_data.get_mut(handle.0).unwrap().sprite.hide();
                self.play_sound(audio::SOUND_PICKUP);
            }
        }
        let dead: Vec<PickableHandle> = self
            .pickables
            .iter()
            .copied()
            .filter(|handle| !self.pickable_data.get(handle.0).unwrap().sprite.active)
            .collect();
        for handle in dead {
            self.remove_pickable(handle);
        }
    }

    fn apply_effect(&mut self, effect: TouchEffect, target: &mut ShipData, now: u64) {
        match effect {
            TouchEffect::Damage(amount) => {
                if target.apply_damage(amount, now) {
                    self.play_sound(audio::SOUND_EXPLOSION);
                }
            }
            TouchEffect::Heal(amount) => target.heal(amount),
            TouchEffect::GrantWeapon(kind) => {
                log::info!("granting {}", kind.name());
                target.grant_weapon(kind);
            }
        }
    }

    /// Fire all weapons of an enemy ship.
    pub fn fire_ship(&mut self, handle: ShipHandle) {
        let mut pending = Vec::new();
        if let Some(ship) = self.ship_data.get_mut(handle.0) {
            ship.fire_all(self.clock_ms, &mut pending);
        }
        self.spawn_pending(pending);
    }

    /// Fire all of the player's weapons. Driven by the input layer.
    pub fn fire_player(&mut self, player: &mut ShipData) {
        if player.destroyed {
            return;
        }
        let mut pending = Vec::new();
        player.fire_all(self.clock_ms, &mut pending);
        self.spawn_pending(pending);
    }

    fn spawn_pending(&mut self, pending: Vec<PendingShot>) {
        let mut cues: Vec<&'static str> = Vec::new();
        for shot in pending {
            if !cues.contains(&shot.sound) {
                cues.push(shot.sound);
            }
            shot::create(self, shot);
        }
        for cue in cues {
            self.play_sound(cue);
        }
    }

    fn prune_shots(&mut self) {
        let dead: Vec<ShotHandle> = self
            .player_shots
            .iter()
            .chain(self.enemy_shots.iter())
            .copied()
            .filter(|handle| !self.shot_data.get(handle.0).unwrap().sprite.active)
            .collect();
        for handle in dead {
            shot::destroy(self, handle);
        }
    }

    /// An enemy is "waiting" while it is eligible by offset and not yet
    /// destroyed with a finished destruction animation. The grace timer
    /// only accumulates across consecutive all-clear ticks; scrolling a
    /// new enemy into eligibility resets it.
    fn refresh_completion(&mut self, now: u64) {
        let waiting = self.ships.iter().any(|&handle| {
            let enemy = self.ship_data.get(handle.0).unwrap();
            self.offset >= enemy.offset_gate()
                && !(enemy.destroyed && enemy.explosion.is_done())
        });
        if waiting {
            self.completion_timer = None;
        } else if self.completion_timer.is_none() {
            self.completion_timer = Some(Timer::new(now));
        }
    }

    pub fn is_completed(&self) -> bool {
        match &self.completion_timer {
            Some(timer) => timer.elapsed(self.clock_ms, GRACE_MS),
            None => false,
        }
    }

    pub fn play_sound(&mut self, name: &str) {
        if let Err(e) = self.audio.play(name) {
            log::warn!("failed to play sound {:?}: {}", name, e);
        }
    }

    pub fn loop_sound(&mut self, name: &str) {
        if let Err(e) = self.audio.loop_sound(name) {
            log::warn!("failed to loop sound {:?}: {}", name, e);
        }
    }

    pub fn stop_sound(&mut self, name: &str) {
        if let Err(e) = self.audio.stop_sound(name) {
            log::warn!("failed to stop sound {:?}: {}", name, e);
        }
    }

    /// The draw pass. Runs under the same lock as `update`; see
    /// `SharedLevel`.
    pub fn draw(&mut self, canvas: &mut dyn Canvas, player: &ShipData) {
        let start_time = Instant::now();
        self.scenery.draw(canvas);
        for &handle in self.pickables.iter() {
            self.pickable_data.get(handle.0).unwrap().sprite.draw(canvas);
        }
        for &handle in self.ships.iter() {
            self.ship_data.get(handle.0).unwrap().draw(canvas);
        }
        for &handle in self.player_shots.iter().chain(self.enemy_shots.iter()) {
            self.shot_data.get(handle.0).unwrap().sprite.draw(canvas);
        }
        player.draw(canvas);
        self.timing.draw = (Instant::now() - start_time).as_secs_f64();
    }
}

fn out_of_view(position: Point2<f64>) -> bool {
    position.x < 0.0 || position.x > VIEW_WIDTH || position.y < 0.0 || position.y > VIEW_HEIGHT
}
