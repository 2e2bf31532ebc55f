//! Level persistence. The on-disk shape is a plain serde tree; loading
//! always applies the fresh-session normalization: scroll offset zero,
//! completion timer unset, every path cursor before its first waypoint.

use crate::effect::TouchEffect;
use crate::factory::{build_enemy, EnemyCreator};
use crate::level::Level;
use crate::path::Path;
use crate::pickable::power_up;
use crate::scenery::SceneryDef;
use crate::ship::{ShipClass, ShipControl};
use anyhow::Context;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EnemyDef {
    pub class: ShipClass,
    pub path: Path,
    pub offset: i32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PickableDef {
    pub effect: TouchEffect,
    pub position: Point2<f64>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PersistedLevel {
    pub name: String,
    pub scroll_speed: i32,
    pub enemies: Vec<EnemyDef>,
    pub pickables: Vec<PickableDef>,
    pub scenery: SceneryDef,
}

impl PersistedLevel {
    pub fn empty(name: &str) -> PersistedLevel {
        PersistedLevel {
            name: name.to_string(),
            scroll_speed: 1,
            enemies: Vec::new(),
            pickables: Vec::new(),
            scenery: SceneryDef::default(),
        }
    }
}

pub fn save(level: &PersistedLevel, path: &std::path::Path) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(level)?;
    std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

pub fn load(path: &std::path::Path) -> anyhow::Result<PersistedLevel> {
    let json = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let level = serde_json::from_str(&json)?;
    Ok(level)
}

/// Load, logging failures instead of propagating them.
pub fn load_safe(path: &std::path::Path) -> Option<PersistedLevel> {
    match load(path) {
        Ok(level) => Some(level),
        Err(e) => {
            log::warn!("failed to load level {}: {:?}", path.display(), e);
            None
        }
    }
}

impl Level {
    /// Build a live level from a persisted definition. Always a fresh
    /// session: offset 0, completion timer unset, path cursors rewound.
    pub fn from_persisted(def: &PersistedLevel, seed: u32) -> Level {
        let mut level = Level::new(&def.name, seed);
        level.set_scroll_speed(def.scroll_speed);
        level.set_scenery(def.scenery.clone());
        for enemy in def.enemies.iter() {
            let creator = EnemyCreator {
                class: enemy.class,
                path: enemy.path.clone(),
                offset: enemy.offset,
            };
            // Misconfigured entries are skipped, not fatal.
            if let Some(data) = build_enemy(&creator) {
                level.add_ship(data);
            }
        }
        for pickable in def.pickables.iter() {
            level.add_pickable(power_up(pickable.effect, pickable.position));
        }
        level
    }

    /// Snapshot the level back into its persisted shape. Editor save path.
    pub fn to_persisted(&self) -> PersistedLevel {
        let mut def = PersistedLevel::empty(&self.name);
        def.scroll_speed = self.scroll_speed();
        def.scenery = self.scenery().def().clone();
        for &handle in self.ships.iter() {
            let ship = self.ship(handle);
            if let ShipControl::Enemy(enemy) = &ship.control {
                def.enemies.push(EnemyDef {
                    class: ship.class,
                    path: enemy.path.clone(),
                    offset: enemy.offset,
                });
            }
        }
        for &handle in self.pickables.iter() {
            let pickable = self.pickable(handle);
            def.pickables.push(PickableDef {
                effect: pickable.effect,
                position: pickable.sprite.position,
            });
        }
        def
    }
}
