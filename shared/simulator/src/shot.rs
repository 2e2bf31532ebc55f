use crate::arena::Index;
use crate::index_set::HasIndex;
use crate::level::Level;
use crate::sprite::Sprite;
use crate::weapon::{PendingShot, SHOT_HEIGHT, SHOT_WIDTH};
use nalgebra::Vector2;

#[derive(Hash, PartialEq, Eq, Copy, Clone, Debug)]
pub struct ShotHandle(pub Index);

impl HasIndex for ShotHandle {
    fn index(self) -> Index {
        self.0
    }
}

#[derive(Clone, Debug)]
pub struct ShotData {
    pub sprite: Sprite,
    /// Constant per-tick displacement.
    pub velocity: Vector2<f64>,
    pub damage: i32,
    pub from_player: bool,
}

pub fn create(level: &mut Level, pending: PendingShot) -> ShotHandle {
    let data = ShotData {
        sprite: Sprite::new(pending.position, SHOT_WIDTH, SHOT_HEIGHT, &pending.image),
        velocity: pending.velocity,
        damage: pending.damage,
        from_player: pending.from_player,
    };
    let handle = ShotHandle(level.shot_data.insert(data));
    if pending.from_player {
        level.player_shots.insert(handle);
    } else {
        level.enemy_shots.insert(handle);
    }
    handle
}

pub fn destroy(level: &mut Level, handle: ShotHandle) {
    level.player_shots.remove(handle);
    level.enemy_shots.remove(handle);
    level.shot_data.remove(handle.0);
}
