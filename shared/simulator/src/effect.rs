use crate::weapon::WeaponKind;
use serde::{Deserialize, Serialize};

/// Effect applied to a ship when two hit boxes overlap. Shots carry
/// `Damage`; pickables carry `Heal` or `GrantWeapon`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TouchEffect {
    Damage(i32),
    Heal(i32),
    GrantWeapon(WeaponKind),
}
