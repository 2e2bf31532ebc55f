//! Line-oriented command interface used by the level editor screen. The
//! editor mutates the persisted level shape; a play session is started by
//! rebuilding the live level with `Level::from_persisted`.

use crate::effect::TouchEffect;
use crate::path::Path;
use crate::persist::{EnemyDef, PersistedLevel, PickableDef};
use crate::ship::ShipClass;
use crate::weapon::WeaponKind;
use anyhow::{anyhow, bail};
use lazy_static::lazy_static;
use nalgebra::{point, vector, Point2};
use regex::Regex;

pub fn apply_command(level: &mut PersistedLevel, command: &str) -> anyhow::Result<()> {
    lazy_static! {
        static ref SPAWN_RE: Regex =
            Regex::new(r"^spawn (\w+) at (\(.+?\)) offset (-?\d+)$").unwrap();
        static ref PATH_ADD_RE: Regex = Regex::new(r"^path (\d+) add (\(.+?\))$").unwrap();
        static ref PATH_CYCLIC_RE: Regex =
            Regex::new(r"^path (\d+) cyclic (true|false)$").unwrap();
        static ref PATH_TRANSLATE_RE: Regex =
            Regex::new(r"^path (\d+) translate (\(.+?\))$").unwrap();
        static ref PATH_POP_RE: Regex = Regex::new(r"^path (\d+) pop$").unwrap();
        static ref REMOVE_RE: Regex = Regex::new(r"^remove enemy (\d+)$").unwrap();
        static ref POWERUP_HEAL_RE: Regex =
            Regex::new(r"^powerup heal (\d+) at (\(.+?\))$").unwrap();
        static ref POWERUP_WEAPON_RE: Regex =
            Regex::new(r"^powerup weapon (\w+) at (\(.+?\))$").unwrap();
        static ref SCROLL_RE: Regex = Regex::new(r"^scroll (\d+)$").unwrap();
    }

    let command = command.trim();
    if let Some(cap) = SPAWN_RE.captures(command) {
        let class: ShipClass = cap.get(1).unwrap().as_str().parse()?;
        let position = parse_point(cap.get(2).unwrap().as_str())?;
        let offset: i32 = cap.get(3).unwrap().as_str().parse()?;
        level.enemies.push(EnemyDef {
            class,
            path: Path::new(vec![position], false),
            offset,
        });
    } else if let Some(cap) = PATH_ADD_RE.captures(command) {
        let point = parse_point(cap.get(2).unwrap().as_str())?;
        enemy_mut(level, cap.get(1).unwrap().as_str())?.path.add_point(point);
    } else if let Some(cap) = PATH_CYCLIC_RE.captures(command) {
        let cyclic = cap.get(2).unwrap().as_str() == "true";
        enemy_mut(level, cap.get(1).unwrap().as_str())?.path.set_cyclic(cyclic);
    } else if let Some(cap) = PATH_TRANSLATE_RE.captures(command) {
        let delta = parse_point(cap.get(2).unwrap().as_str())?;
        enemy_mut(level, cap.get(1).unwrap().as_str())?
            .path
            .translate(vector![delta.x, delta.y]);
    } else if let Some(cap) = PATH_POP_RE.captures(command) {
        enemy_mut(level, cap.get(1).unwrap().as_str())?.path.remove_last();
    } else if let Some(cap) = REMOVE_RE.captures(command) {
        let index: usize = cap.get(1).unwrap().as_str().parse()?;
        if index >= level.enemies.len() {
            bail!("no enemy {}", index);
        }
        level.enemies.remove(index);
    } else if let Some(cap) = POWERUP_HEAL_RE.captures(command) {
        let amount: i32 = cap.get(1).unwrap().as_str().parse()?;
        let position = parse_point(cap.get(2).unwrap().as_str())?;
        level.pickables.push(PickableDef {
            effect: TouchEffect::Heal(amount),
            position,
        });
    } else if let Some(cap) = POWERUP_WEAPON_RE.captures(command) {
        let kind = parse_weapon(cap.get(1).unwrap().as_str())?;
        let position = parse_point(cap.get(2).unwrap().as_str())?;
        level.pickables.push(PickableDef {
            effect: TouchEffect::GrantWeapon(kind),
            position,
        });
    } else if let Some(cap) = SCROLL_RE.captures(command) {
        level.scroll_speed = cap.get(1).unwrap().as_str().parse()?;
    } else {
        bail!("unknown editor command {:?}", command);
    }
    Ok(())
}

fn enemy_mut<'a>(level: &'a mut PersistedLevel, index: &str) -> anyhow::Result<&'a mut EnemyDef> {
    let index: usize = index.parse()?;
    level
        .enemies
        .get_mut(index)
        .ok_or_else(|| anyhow!("no enemy {}", index))
}

fn parse_point(s: &str) -> anyhow::Result<Point2<f64>> {
    let s = s
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .ok_or_else(|| anyhow!("expected (x, y), got {:?}", s))?;
    let mut parts = s.split(',');
    let x: f64 = parts
        .next()
        .ok_or_else(|| anyhow!("missing x"))?
        .trim()
        .parse()?;
    let y: f64 = parts
        .next()
        .ok_or_else(|| anyhow!("missing y"))?
        .trim()
        .parse()?;
    if parts.next().is_some() {
        bail!("too many components in point");
    }
    Ok(point![x, y])
}

fn parse_weapon(s: &str) -> anyhow::Result<WeaponKind> {
    match s {
        "laser" => Ok(WeaponKind::Laser),
        "double_laser" => Ok(WeaponKind::DoubleLaser),
        "spread_gun" => Ok(WeaponKind::SpreadGun),
        "missile" => Ok(WeaponKind::Missile),
        _ => bail!("unknown weapon kind {:?}", s),
    }
}

#[cfg(test)]
mod test {
    use super::apply_command;
    use crate::persist::PersistedLevel;

    #[test]
    fn test_spawn_and_path_commands() {
        let mut level = PersistedLevel::empty("test");
        apply_command(&mut level, "spawn drone at (100, 200) offset 0").unwrap();
        apply_command(&mut level, "path 0 add (300, 200)").unwrap();
        apply_command(&mut level, "path 0 cyclic true").unwrap();
        assert_eq!(level.enemies.len(), 1);
        assert_eq!(level.enemies[0].path.len(), 2);
        assert!(level.enemies[0].path.is_cyclic());
    }

    #[test]
    fn test_unknown_command_is_an_error() {
        let mut level = PersistedLevel::empty("test");
        assert!(apply_command(&mut level, "warp to hyperspace").is_err());
    }
}
