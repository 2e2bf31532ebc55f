use crate::arena::Index;
use crate::effect::TouchEffect;
use crate::index_set::HasIndex;
use crate::sprite::Sprite;
use nalgebra::{vector, Point2, Vector2};

pub const PICKABLE_SIZE: i32 = 16;

#[derive(Hash, PartialEq, Eq, Copy, Clone, Debug)]
pub struct PickableHandle(pub Index);

impl HasIndex for PickableHandle {
    fn index(self) -> Index {
        self.0
    }
}

/// Single-use power-up: touching it applies its effect to the player and
/// consumes it.
#[derive(Clone, Debug)]
pub struct PickableData {
    pub sprite: Sprite,
    pub effect: TouchEffect,
    pub velocity: Vector2<f64>,
}

pub fn power_up(effect: TouchEffect, position: Point2<f64>) -> PickableData {
    let image = match effect {
        TouchEffect::Heal(_) => "powerup_repair",
        TouchEffect::GrantWeapon(_) => "powerup_weapon",
        TouchEffect::Damage(_) => "powerup_mine",
    };
    PickableData {
        sprite: Sprite::new(position, PICKABLE_SIZE, PICKABLE_SIZE, image),
        effect,
        // Power-ups drift toward the player with the scroll.
        velocity: vector![-1.0, 0.0],
    }
}
