use crate::effect::TouchEffect;
use crate::path::Path;
use crate::pickable::{power_up, PickableData};
use crate::rng::{new_rng, SeededRng};
use crate::ship::{enemy_by_class, ShipClass, ShipData};
use nalgebra::Point2;
use rand::Rng;

/// Template for one kind of enemy spawn.
#[derive(Clone, Debug)]
pub struct EnemyCreator {
    pub class: ShipClass,
    pub path: Path,
    pub offset: i32,
}

/// Produces fully-initialized enemy ships from a creator list. An empty
/// or misconfigured list degrades to producing nothing.
pub struct EnemyFactory {
    creators: Vec<EnemyCreator>,
    rng: SeededRng,
}

impl EnemyFactory {
    pub fn new(creators: Vec<EnemyCreator>, seed: u32) -> EnemyFactory {
        if creators.is_empty() {
            log::warn!("enemy factory configured with no creators");
        }
        EnemyFactory {
            creators,
            rng: new_rng(seed),
        }
    }

    /// Build an enemy from a random creator, or None when the factory is
    /// empty or the chosen creator is invalid.
    pub fn create(&mut self) -> Option<ShipData> {
        if self.creators.is_empty() {
            return None;
        }
        let creator = &self.creators[self.rng.gen_range(0..self.creators.len())];
        build_enemy(creator)
    }
}

pub fn build_enemy(creator: &EnemyCreator) -> Option<ShipData> {
    if creator.path.is_empty() {
        log::warn!(
            "refusing to create {} with an empty path",
            creator.class.name()
        );
        return None;
    }
    let mut path = creator.path.clone();
    path.reset();
    enemy_by_class(creator.class, path, creator.offset)
}

pub fn build_power_up(effect: TouchEffect, position: Point2<f64>) -> PickableData {
    power_up(effect, position)
}
