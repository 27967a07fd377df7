//! Objective - what the stat optimizer maximizes

use crate::attack_rating::{compute_ar, ArOptions};
use crate::config::GameData;
use crate::error::CalcError;
use crate::skill::{compute_skill_damage, total_damage};
use crate::types::{Affinity, PlayerStats, SpellType};
use crate::weapon::WeaponEntry;
use serde::{Deserialize, Serialize};

/// A value to maximize over player stats
///
/// Implementations must be deterministic: the same stats always give the
/// same value.
pub trait Objective {
    fn evaluate(&self, stats: &PlayerStats) -> f64;
}

impl<F> Objective for F
where
    F: Fn(&PlayerStats) -> f64,
{
    fn evaluate(&self, stats: &PlayerStats) -> f64 {
        self(stats)
    }
}

/// Which number of a weapon to maximize
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum ObjectiveKind {
    /// Unrounded attack rating total
    AttackRating,
    /// Spell power of a catalyst
    SpellScaling { spell_type: SpellType },
    /// Sum of every attack of a skill
    SkillDamage { skill_id: u32 },
}

/// Objective evaluated on one weapon/affinity/upgrade
///
/// Combinations that are not applicable evaluate to 0.
#[derive(Debug, Clone)]
pub struct WeaponObjective<'a> {
    data: &'a GameData,
    weapon: &'a WeaponEntry,
    affinity: Affinity,
    upgrade_level: u32,
    options: ArOptions,
    kind: ObjectiveKind,
}

impl<'a> WeaponObjective<'a> {
    /// Build the objective, surfacing skill data errors up front
    pub fn new(
        data: &'a GameData,
        weapon: &'a WeaponEntry,
        affinity: Affinity,
        upgrade_level: u32,
        options: ArOptions,
        kind: ObjectiveKind,
    ) -> Result<Self, CalcError> {
        if let ObjectiveKind::SkillDamage { skill_id } = kind {
            compute_skill_damage(
                data,
                skill_id,
                weapon,
                affinity,
                upgrade_level,
                &PlayerStats::uniform(1),
                &options,
            )?;
        }
        Ok(WeaponObjective {
            data,
            weapon,
            affinity,
            upgrade_level,
            options,
            kind,
        })
    }

    pub fn kind(&self) -> ObjectiveKind {
        self.kind
    }
}

impl Objective for WeaponObjective<'_> {
    fn evaluate(&self, stats: &PlayerStats) -> f64 {
        match self.kind {
            ObjectiveKind::AttackRating => compute_ar(
                self.data,
                self.weapon,
                self.affinity,
                self.upgrade_level,
                stats,
                &self.options,
            )
            .map_or(0.0, |ar| ar.total),
            ObjectiveKind::SpellScaling { spell_type } => compute_ar(
                self.data,
                self.weapon,
                self.affinity,
                self.upgrade_level,
                stats,
                &self.options,
            )
            .and_then(|ar| {
                ar.spell_scaling
                    .and_then(|spells| spells.get(spell_type).map(|power| power.total))
            })
            .unwrap_or(0.0),
            // Attack data was checked in `new`, so errors cannot appear here
            ObjectiveKind::SkillDamage { skill_id } => compute_skill_damage(
                self.data,
                skill_id,
                self.weapon,
                self.affinity,
                self.upgrade_level,
                stats,
                &self.options,
            )
            .map_or(0.0, |attacks| total_damage(&attacks)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_objective() {
        let objective = |stats: &PlayerStats| stats.strength as f64 * 2.0;
        assert!((objective.evaluate(&PlayerStats::uniform(10)) - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_attack_rating_objective_matches_ar() {
        let data = GameData::sample();
        let sword = data.weapons.get("Longsword").unwrap();
        let stats = PlayerStats::uniform(25);
        let objective = WeaponObjective::new(
            &data,
            sword,
            Affinity::Standard,
            0,
            ArOptions::default(),
            ObjectiveKind::AttackRating,
        )
        .unwrap();
        let ar = compute_ar(&data, sword, Affinity::Standard, 0, &stats, &ArOptions::default())
            .unwrap();
        assert_eq!(objective.evaluate(&stats), ar.total);
    }

    #[test]
    fn test_spell_objective_on_non_catalyst_is_zero() {
        let data = GameData::sample();
        let sword = data.weapons.get("Longsword").unwrap();
        let objective = WeaponObjective::new(
            &data,
            sword,
            Affinity::Standard,
            0,
            ArOptions::default(),
            ObjectiveKind::SpellScaling {
                spell_type: SpellType::Sorcery,
            },
        )
        .unwrap();
        assert_eq!(objective.evaluate(&PlayerStats::uniform(50)), 0.0);
    }
}
