use crate::audio;
use crate::timer::Timer;
use nalgebra::{vector, Point2, Vector2};
use serde::{Deserialize, Serialize};

/// Shot size in pixels.
pub const SHOT_WIDTH: i32 = 8;
pub const SHOT_HEIGHT: i32 = 4;

const LASER_DAMAGE: i32 = 100;
const MISSILE_DAMAGE: i32 = 1000;
const LASER_SPEED: f64 = 8.0;
const MISSILE_SPEED: f64 = 4.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponKind {
    Laser,
    DoubleLaser,
    SpreadGun,
    Missile,
}

impl WeaponKind {
    pub fn name(&self) -> &'static str {
        match self {
            WeaponKind::Laser => "laser",
            WeaponKind::DoubleLaser => "double laser",
            WeaponKind::SpreadGun => "spread gun",
            WeaponKind::Missile => "missile",
        }
    }

    pub fn damage(self) -> i32 {
        match self {
            WeaponKind::Missile => MISSILE_DAMAGE,
            _ => LASER_DAMAGE,
        }
    }

    pub fn cooldown_ms(self) -> Option<u64> {
        match self {
            WeaponKind::Laser | WeaponKind::DoubleLaser => None,
            WeaponKind::SpreadGun => Some(500),
            WeaponKind::Missile => Some(1000),
        }
    }

    pub fn sound(self) -> &'static str {
        match self {
            WeaponKind::Missile => audio::SOUND_MISSILE,
            _ => audio::SOUND_LASER,
        }
    }

    pub fn shot_image(self) -> &'static str {
        match self {
            WeaponKind::Missile => "missile",
            _ => "laser",
        }
    }

    // Spawn offsets and per-tick velocities relative to the firing point.
    // `direction` is +1 for player weapons, -1 for enemy weapons.
    fn pattern(self, direction: f64) -> Vec<(Vector2<f64>, Vector2<f64>)> {
        match self {
            WeaponKind::Laser => vec![(vector![0.0, 0.0], vector![LASER_SPEED * direction, 0.0])],
            WeaponKind::DoubleLaser => vec![
                (vector![0.0, -6.0], vector![LASER_SPEED * direction, 0.0]),
                (vector![0.0, 6.0], vector![LASER_SPEED * direction, 0.0]),
            ],
            WeaponKind::SpreadGun => vec![
                (vector![0.0, 0.0], vector![LASER_SPEED * direction, -2.0]),
                (vector![0.0, 0.0], vector![LASER_SPEED * direction, 0.0]),
                (vector![0.0, 0.0], vector![LASER_SPEED * direction, 2.0]),
            ],
            WeaponKind::Missile => {
                vec![(vector![0.0, 0.0], vector![MISSILE_SPEED * direction, 0.0])]
            }
        }
    }
}

/// Projectile waiting to be registered with the level's shot collections.
#[derive(Clone, Debug)]
pub struct PendingShot {
    pub position: Point2<f64>,
    pub velocity: Vector2<f64>,
    pub damage: i32,
    pub image: String,
    pub from_player: bool,
    pub sound: &'static str,
}

/// Cooldown-gated projectile factory attached to a ship at a fixed mount
/// point relative to the ship's position.
#[derive(Clone, Debug)]
pub struct Weapon {
    pub kind: WeaponKind,
    pub mount: Vector2<f64>,
    pub player_owned: bool,
    last_fired: Option<Timer>,
}

impl Weapon {
    pub fn new(kind: WeaponKind, mount: Vector2<f64>, player_owned: bool) -> Weapon {
        Weapon {
            kind,
            mount,
            player_owned,
            last_fired: None,
        }
    }

    pub fn ready(&self, now_ms: u64) -> bool {
        match (self.kind.cooldown_ms(), &self.last_fired) {
            (None, _) | (_, None) => true,
            (Some(cooldown_ms), Some(last)) => last.elapsed(now_ms, cooldown_ms),
        }
    }

    /// Fire from the given owner position. A no-op while the cooldown is
    /// running; otherwise pushes one pending shot per pattern entry.
    pub fn fire(
        &mut self,
        now_ms: u64,
        owner_position: Point2<f64>,
        out: &mut Vec<PendingShot>,
    ) -> bool {
        if !self.ready(now_ms) {
            return false;
        }
        if self.kind.cooldown_ms().is_some() {
            self.last_fired = Some(Timer::new(now_ms));
        }
        let origin = owner_position + self.mount;
        for (offset, velocity) in self.kind.pattern(if self.player_owned { 1.0 } else { -1.0 }) {
            out.push(PendingShot {
                position: origin + offset,
                velocity,
                damage: self.kind.damage(),
                image: self.kind.shot_image().to_string(),
                from_player: self.player_owned,
                sound: self.kind.sound(),
            });
        }
        true
    }
}

#[cfg(test)]
mod test {
    use super::{Weapon, WeaponKind};
    use nalgebra::{point, vector};

    #[test]
    fn test_cooldown_gating() {
        let mut weapon = Weapon::new(WeaponKind::Missile, vector![20.0, 10.0], true);
        let mut out = Vec::new();

        assert!(weapon.fire(0, point![0.0, 0.0], &mut out));
        assert_eq!(out.len(), 1);

        // 500ms later: still cooling down.
        assert!(!weapon.fire(500, point![0.0, 0.0], &mut out));
        assert_eq!(out.len(), 1);

        // Remaining 500ms elapsed.
        assert!(weapon.fire(1000, point![0.0, 0.0], &mut out));
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_uncooled_weapon_always_fires() {
        let mut weapon = Weapon::new(WeaponKind::Laser, vector![0.0, 0.0], true);
        let mut out = Vec::new();
        assert!(weapon.fire(0, point![0.0, 0.0], &mut out));
        assert!(weapon.fire(0, point![0.0, 0.0], &mut out));
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_enemy_shots_travel_left() {
        let mut weapon = Weapon::new(WeaponKind::Laser, vector![0.0, 0.0], false);
        let mut out = Vec::new();
        weapon.fire(0, point![100.0, 100.0], &mut out);
        assert!(out[0].velocity.x < 0.0);
    }

    #[test]
    fn test_spread_gun_fans() {
        let mut weapon = Weapon::new(WeaponKind::SpreadGun, vector![0.0, 0.0], true);
        let mut out = Vec::new();
        weapon.fire(0, point![0.0, 0.0], &mut out);
        assert_eq!(out.len(), 3);
        let dys: Vec<f64> = out.iter().map(|s| s.velocity.y).collect();
        assert_eq!(dys, vec![-2.0, 0.0, 2.0]);
    }
}
