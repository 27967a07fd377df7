//! Attack rating calculation - weapon + stats into an ArResult

use super::effective::{effective_stats, two_handing_applies};
use super::result::{ArResult, GuardResult, ScaledValue, SpellScalingResult, StatContribution};
use crate::config::GameData;
use crate::curve::CurveTable;
use crate::types::{
    Affinity, Attribute, AttributeMap, DamageType, DamageTypeMap, PlayerStats, SpellType,
    StatusMap, StatusType,
};
use crate::weapon::{AffinityData, ReinforceRates, ScalingEntry, SpellScalingData, WeaponEntry};
use serde::{Deserialize, Serialize};

/// Spell scaling is expressed against a fixed 100% base
const SPELL_BASE: f64 = 100.0;

/// Wielding options for an attack rating calculation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArOptions {
    pub two_handing: bool,
    pub ignore_requirements: bool,
}

/// Calculate the attack rating of a weapon/affinity/upgrade for a set of stats
///
/// Returns `None` when the weapon has no such affinity or the reinforcement
/// row for the upgrade level is missing. Upgrade levels past the weapon's
/// maximum are clamped.
pub fn compute_ar(
    data: &GameData,
    weapon: &WeaponEntry,
    affinity: Affinity,
    upgrade_level: u32,
    stats: &PlayerStats,
    options: &ArOptions,
) -> Option<ArResult> {
    let affinity_data = weapon.affinity(affinity)?;
    let upgrade_level = weapon.clamp_upgrade_level(upgrade_level);
    let rates = data
        .reinforcements
        .get(affinity_data.reinforce_type_id, upgrade_level)?;

    let effective = effective_stats(weapon, stats, options.two_handing);
    let requirements_met = options.ignore_requirements || weapon.requirements_met(&effective);

    let damage = DamageTypeMap::from_fn(|dt| {
        damage_type_value(&data.curves, weapon, affinity_data, dt, rates, &effective)
    });
    let total: f64 = damage
        .iter()
        .filter_map(|(_, value)| value.as_ref().map(|v| v.total))
        .sum();

    let status = StatusMap::from_fn(|st| {
        status_value(&data.curves, weapon, affinity_data, st, rates, &effective)
    });

    let spell_scaling = affinity_data
        .spell_scaling
        .as_ref()
        .map(|spell| spell_scaling_value(&data.curves, weapon, spell, rates, &effective));

    Some(ArResult {
        weapon: weapon.name.clone(),
        affinity,
        upgrade_level,
        effective_stats: effective,
        two_handed: two_handing_applies(weapon, options.two_handing),
        requirements_met,
        damage,
        total,
        rounded: super::result::round_up(total),
        status,
        spell_scaling,
        guard: guard_at(weapon, rates),
        critical_multiplier: weapon.critical / 100.0,
        stamina: affinity_data.stamina_attack * rates.stamina,
    })
}

/// Look up the weapon by name and calculate its attack rating
pub fn compute_ar_by_name(
    data: &GameData,
    weapon_name: &str,
    affinity: Affinity,
    upgrade_level: u32,
    stats: &PlayerStats,
    options: &ArOptions,
) -> Option<ArResult> {
    let weapon = data.weapons.get(weapon_name)?;
    compute_ar(data, weapon, affinity, upgrade_level, stats, options)
}

/// Guard negation and guard boost at an upgrade level
pub fn compute_guard(
    data: &GameData,
    weapon: &WeaponEntry,
    affinity: Affinity,
    upgrade_level: u32,
) -> Option<GuardResult> {
    let affinity_data = weapon.affinity(affinity)?;
    let rates = data.reinforcements.get(
        affinity_data.reinforce_type_id,
        weapon.clamp_upgrade_level(upgrade_level),
    )?;
    Some(guard_at(weapon, rates))
}

fn guard_at(weapon: &WeaponEntry, rates: &ReinforceRates) -> GuardResult {
    GuardResult {
        negation: DamageTypeMap::from_fn(|dt| weapon.guard.get(dt) * rates.guard.get(dt)),
        guard_boost: weapon.guard_boost * rates.guard_boost,
    }
}

/// Contribution of one attribute: `base × scaling% × saturation`
///
/// `None` when the curve is unknown.
fn stat_contribution(
    curves: &CurveTable,
    entry: &ScalingEntry,
    correct_rate: f64,
    level: u32,
    base: f64,
) -> Option<StatContribution> {
    let saturation = curves.saturation(entry.curve, level)?;
    let raw_scaling = entry.scaled_value(correct_rate);
    Some(StatContribution {
        saturation,
        scaling: base * (raw_scaling / 100.0) * saturation,
        raw_scaling,
    })
}

/// Per-attribute contributions for a scaling map; `None` if any curve is unknown
fn scale_all(
    curves: &CurveTable,
    weapon: &WeaponEntry,
    scaling: &AttributeMap<Option<ScalingEntry>>,
    rates: &ReinforceRates,
    stats: &PlayerStats,
    base: f64,
) -> Option<AttributeMap<Option<StatContribution>>> {
    let mut per_stat = AttributeMap::default();
    for &attribute in Attribute::all() {
        let Some(entry) = scaling.get(attribute) else {
            continue;
        };
        let contribution = stat_contribution(
            curves,
            entry,
            *rates.correct.get(attribute),
            *stats.get(attribute),
            base,
        );
        match contribution {
            Some(c) => *per_stat.get_mut(attribute) = Some(c),
            None => {
                tracing::warn!(
                    weapon = %weapon.name,
                    curve = entry.curve,
                    ?attribute,
                    "scaling references an unknown curve"
                );
                return None;
            }
        }
    }
    Some(per_stat)
}

fn damage_type_value(
    curves: &CurveTable,
    weapon: &WeaponEntry,
    affinity: &AffinityData,
    damage_type: DamageType,
    rates: &ReinforceRates,
    stats: &PlayerStats,
) -> Option<ScaledValue> {
    let element = affinity.attack.get(damage_type).as_ref()?;
    let base = affinity.scaled_attack_base(damage_type, rates)?;
    let per_stat = scale_all(curves, weapon, &element.scaling, rates, stats, base)?;
    Some(ScaledValue::new(base, per_stat))
}

fn status_value(
    curves: &CurveTable,
    weapon: &WeaponEntry,
    affinity: &AffinityData,
    status: StatusType,
    rates: &ReinforceRates,
    stats: &PlayerStats,
) -> Option<ScaledValue> {
    let element = affinity.status_element(status)?;
    let base = element.buildup_at(rates.status_offset)?;

    // Only arcane scales status buildup
    let mut scaling = AttributeMap::default();
    scaling.arcane = element.arcane_scaling;
    let per_stat = scale_all(curves, weapon, &scaling, rates, stats, base)?;
    Some(ScaledValue::new(base, per_stat))
}

fn spell_scaling_value(
    curves: &CurveTable,
    weapon: &WeaponEntry,
    spell: &SpellScalingData,
    rates: &ReinforceRates,
    stats: &PlayerStats,
) -> SpellScalingResult {
    let power = |spell_type: SpellType| {
        if !spell.supports(spell_type) {
            return None;
        }
        scale_all(curves, weapon, &spell.scaling, rates, stats, SPELL_BASE)
            .map(|per_stat| ScaledValue::new(SPELL_BASE, per_stat))
    };

    SpellScalingResult {
        sorcery: power(SpellType::Sorcery),
        incantation: power(SpellType::Incantation),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weapon::{AttackElement, ScalingEntry};

    fn data() -> GameData {
        GameData::sample()
    }

    fn weapon<'a>(data: &'a GameData, name: &str) -> &'a WeaponEntry {
        data.weapons.get(name).unwrap()
    }

    #[test]
    fn test_unscaled_weapon_ignores_stats() {
        let data = data();
        let club = weapon(&data, "Training Club");
        for level in [1, 40, 99] {
            let ar = compute_ar(
                &data,
                club,
                Affinity::Standard,
                0,
                &PlayerStats::uniform(level),
                &ArOptions::default(),
            )
            .unwrap();
            assert!((ar.damage_total(DamageType::Physical) - 100.0).abs() < 1e-9);
            assert_eq!(ar.rounded, 100);
        }
    }

    #[test]
    fn test_strength_scaling_contribution() {
        let data = data();
        let sword = weapon(&data, "Longsword");
        let stats = PlayerStats {
            strength: 60,
            ..PlayerStats::uniform(10)
        };
        let ar = compute_ar(&data, sword, Affinity::Standard, 0, &stats, &ArOptions::default())
            .unwrap();

        let physical = ar.damage.physical.as_ref().unwrap();
        let strength = physical.per_stat.strength.unwrap();
        // Curve 0 reaches 75 at level 60, scaling 50%, base 110
        assert!((strength.saturation - 0.75).abs() < 1e-12);
        assert!((strength.raw_scaling - 50.0).abs() < 1e-12);
        assert!((strength.scaling - 110.0 * 0.5 * 0.75).abs() < 1e-9);
        assert!(physical.per_stat.intelligence.is_none());
    }

    #[test]
    fn test_missing_affinity_is_none() {
        let data = data();
        let sword = weapon(&data, "Longsword");
        let ar = compute_ar(
            &data,
            sword,
            Affinity::Occult,
            0,
            &PlayerStats::uniform(10),
            &ArOptions::default(),
        );
        assert!(ar.is_none());
    }

    #[test]
    fn test_unknown_weapon_is_none() {
        let data = data();
        assert!(compute_ar_by_name(
            &data,
            "Nonexistent Blade",
            Affinity::Standard,
            0,
            &PlayerStats::uniform(10),
            &ArOptions::default()
        )
        .is_none());
    }

    #[test]
    fn test_upgrade_level_is_clamped() {
        let data = data();
        let sword = weapon(&data, "Longsword");
        let stats = PlayerStats::uniform(20);
        let at_max = compute_ar(&data, sword, Affinity::Standard, 25, &stats, &ArOptions::default())
            .unwrap();
        let past_max =
            compute_ar(&data, sword, Affinity::Standard, 40, &stats, &ArOptions::default())
                .unwrap();
        assert_eq!(past_max.upgrade_level, 25);
        assert_eq!(at_max.total, past_max.total);
    }

    #[test]
    fn test_two_handing_raises_strength_weapons() {
        let data = data();
        let sword = weapon(&data, "Longsword");
        let stats = PlayerStats {
            strength: 40,
            ..PlayerStats::uniform(10)
        };
        let one = compute_ar(&data, sword, Affinity::Standard, 0, &stats, &ArOptions::default())
            .unwrap();
        let two = compute_ar(
            &data,
            sword,
            Affinity::Standard,
            0,
            &stats,
            &ArOptions {
                two_handing: true,
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(two.effective_stats.strength, 60);
        assert!(two.two_handed);
        assert!(two.total > one.total);
    }

    #[test]
    fn test_requirements_flag_does_not_change_total() {
        let data = data();
        let sword = weapon(&data, "Longsword");
        let weak = PlayerStats::uniform(5);
        let checked = compute_ar(&data, sword, Affinity::Standard, 0, &weak, &ArOptions::default())
            .unwrap();
        let ignored = compute_ar(
            &data,
            sword,
            Affinity::Standard,
            0,
            &weak,
            &ArOptions {
                ignore_requirements: true,
                ..Default::default()
            },
        )
        .unwrap();
        assert!(!checked.requirements_met);
        assert!(ignored.requirements_met);
        assert_eq!(checked.total, ignored.total);
    }

    #[test]
    fn test_status_scales_with_arcane_only() {
        let data = data();
        let sword = weapon(&data, "Longsword");
        let low = compute_ar(
            &data,
            sword,
            Affinity::Blood,
            0,
            &PlayerStats::uniform(10),
            &ArOptions::default(),
        )
        .unwrap();
        let high_arcane = compute_ar(
            &data,
            sword,
            Affinity::Blood,
            0,
            &PlayerStats {
                arcane: 60,
                ..PlayerStats::uniform(10)
            },
            &ArOptions::default(),
        )
        .unwrap();
        let low_bleed = low.status.blood_loss.as_ref().unwrap();
        let high_bleed = high_arcane.status.blood_loss.as_ref().unwrap();
        assert!((low_bleed.base - high_bleed.base).abs() < f64::EPSILON);
        assert!(high_bleed.total > low_bleed.total);
        assert!(high_bleed.per_stat.strength.is_none());
        assert!(low.status.poison.is_none());
    }

    #[test]
    fn test_catalyst_spell_scaling() {
        let data = data();
        let staff = weapon(&data, "Academy Staff");
        let ar = compute_ar(
            &data,
            staff,
            Affinity::Standard,
            0,
            &PlayerStats {
                intelligence: 60,
                ..PlayerStats::uniform(10)
            },
            &ArOptions::default(),
        )
        .unwrap();
        let spells = ar.spell_scaling.unwrap();
        let sorcery = spells.get(SpellType::Sorcery).unwrap();
        assert!((sorcery.base - 100.0).abs() < f64::EPSILON);
        assert!(sorcery.total > 100.0);
        assert!(spells.get(SpellType::Incantation).is_none());
    }

    #[test]
    fn test_guard_scales_with_upgrade() {
        let data = data();
        let sword = weapon(&data, "Longsword");
        let base = compute_guard(&data, sword, Affinity::Standard, 0).unwrap();
        let upgraded = compute_guard(&data, sword, Affinity::Standard, 25).unwrap();
        assert!(upgraded.negation.physical >= base.negation.physical);
        assert!(upgraded.guard_boost > base.guard_boost);
    }

    #[test]
    fn test_unknown_curve_drops_only_that_damage_type() {
        let mut data = data();
        let mut sword = weapon(&data, "Longsword").clone();
        sword.name = "Longsword (bad curve)".to_string();
        let mut scaling = AttributeMap::default();
        scaling.faith = Some(ScalingEntry {
            value: 30.0,
            curve: 999,
            is_override: false,
        });
        if let Some(standard) = sword.affinities.get_mut(&Affinity::Standard) {
            standard.attack.fire = Some(AttackElement { base: 50.0, scaling });
        }
        data.weapons.register(sword);

        let ar = compute_ar_by_name(
            &data,
            "Longsword (bad curve)",
            Affinity::Standard,
            0,
            &PlayerStats::uniform(30),
            &ArOptions::default(),
        )
        .unwrap();
        assert!(ar.damage.physical.is_some());
        assert!(ar.damage.fire.is_none());
    }
}
