//! Ash of War compatibility - which weapon/affinity pairings a skill applies to
//!
//! An affinity is allowed when any of these hold:
//! - it is in the basic set every ash supports
//! - it is the ash's default affinity
//! - the ash is explicitly flagged for it
//! - the ash carries no flags for any special affinity at all
//!
//! The last rule is a heuristic for ashes with incomplete affinity flags.

use super::AshOfWar;
use crate::types::{Affinity, WeaponType};
use crate::weapon::WeaponEntry;

/// Affinities every mountable ash supports
const BASIC_AFFINITIES: &[Affinity] = &[Affinity::Standard];

fn is_special(affinity: Affinity) -> bool {
    !BASIC_AFFINITIES.contains(&affinity) && affinity != Affinity::Unique
}

/// Whether the ash allows a weapon class
pub fn supports_weapon_type(ash: &AshOfWar, weapon_type: WeaponType) -> bool {
    ash.weapon_types.contains(&weapon_type)
}

/// Whether the ash allows an affinity
pub fn supports_affinity(ash: &AshOfWar, affinity: Affinity) -> bool {
    BASIC_AFFINITIES.contains(&affinity)
        || ash.default_affinity == Some(affinity)
        || ash.affinities.contains(&affinity)
        || !ash.affinities.iter().any(|&a| is_special(a))
}

/// Whether the skill applies to the weapon infused with `affinity`
pub fn is_compatible(ash: &AshOfWar, weapon: &WeaponEntry, affinity: Affinity) -> bool {
    if weapon.affinity(affinity).is_none() {
        return false;
    }

    let is_default_skill = weapon.default_skill == Some(ash.id);
    if !weapon.can_mount_ash_of_war {
        // Unique weapons only ever perform their own skill
        return is_default_skill;
    }

    (is_default_skill || supports_weapon_type(ash, weapon.weapon_type))
        && supports_affinity(ash, affinity)
}
