//! Effective stats - the two-handing strength adjustment

use crate::types::PlayerStats;
use crate::weapon::WeaponEntry;

/// Two-handing multiplies strength by 3/2, rounded down
const TWO_HANDING_NUMERATOR: u32 = 3;
const TWO_HANDING_DENOMINATOR: u32 = 2;

/// Effective strength never exceeds this while two-handing
pub const MAX_TWO_HANDED_STRENGTH: u32 = 148;

/// Whether the two-handing bonus applies
///
/// Bows and ballistae always get it, fists and paired weapons never do,
/// everything else follows the toggle.
pub fn two_handing_applies(weapon: &WeaponEntry, two_handing: bool) -> bool {
    if weapon.weapon_type.is_always_two_handed() {
        return true;
    }
    if weapon.paired || weapon.weapon_type.is_fist() {
        return false;
    }
    two_handing
}

/// Stats used for scaling and requirements
pub fn effective_stats(weapon: &WeaponEntry, stats: &PlayerStats, two_handing: bool) -> PlayerStats {
    let mut effective = *stats;
    if two_handing_applies(weapon, two_handing) {
        effective.strength = (stats.strength.saturating_mul(TWO_HANDING_NUMERATOR)
            / TWO_HANDING_DENOMINATOR)
            .min(MAX_TWO_HANDED_STRENGTH);
    }
    effective
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WeaponType;
    use std::collections::BTreeMap;

    fn weapon(weapon_type: WeaponType, paired: bool) -> WeaponEntry {
        WeaponEntry {
            name: "Test".to_string(),
            weapon_type,
            attack_attribute: Default::default(),
            paired,
            requirements: Default::default(),
            max_upgrade_level: 25,
            critical: 100.0,
            guard: Default::default(),
            guard_boost: 0.0,
            can_mount_ash_of_war: true,
            default_skill: None,
            affinities: BTreeMap::new(),
        }
    }

    fn stats(strength: u32) -> PlayerStats {
        PlayerStats {
            strength,
            ..PlayerStats::uniform(10)
        }
    }

    #[test]
    fn test_two_handed_strength() {
        let sword = weapon(WeaponType::StraightSword, false);
        assert_eq!(effective_stats(&sword, &stats(40), true).strength, 60);
        assert_eq!(effective_stats(&sword, &stats(41), true).strength, 61);
        assert_eq!(effective_stats(&sword, &stats(40), false).strength, 40);
    }

    #[test]
    fn test_strength_cap() {
        let sword = weapon(WeaponType::Greatsword, false);
        assert_eq!(effective_stats(&sword, &stats(99), true).strength, 148);
        assert_eq!(effective_stats(&sword, &stats(120), true).strength, 148);
    }

    #[test]
    fn test_huge_strength_caps_without_overflow() {
        let bow = weapon(WeaponType::Bow, false);
        assert_eq!(effective_stats(&bow, &stats(2_000_000_000), false).strength, 148);
        assert_eq!(effective_stats(&bow, &stats(u32::MAX), false).strength, 148);
    }

    #[test]
    fn test_fist_and_paired_never_two_hand() {
        let fist = weapon(WeaponType::Fist, false);
        assert_eq!(effective_stats(&fist, &stats(40), true).strength, 40);

        let paired = weapon(WeaponType::Katana, true);
        assert_eq!(effective_stats(&paired, &stats(40), true).strength, 40);
    }

    #[test]
    fn test_bows_always_two_hand() {
        let bow = weapon(WeaponType::Bow, false);
        assert_eq!(effective_stats(&bow, &stats(20), false).strength, 30);

        let crossbow = weapon(WeaponType::Crossbow, false);
        assert_eq!(effective_stats(&crossbow, &stats(20), false).strength, 20);
    }

    #[test]
    fn test_other_stats_untouched() {
        let sword = weapon(WeaponType::StraightSword, false);
        let effective = effective_stats(&sword, &stats(40), true);
        assert_eq!(effective.dexterity, 10);
        assert_eq!(effective.arcane, 10);
    }
}
