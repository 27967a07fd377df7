//! ArResult - Attack rating breakdown

use crate::types::{
    Affinity, AttributeMap, DamageType, DamageTypeMap, PlayerStats, SpellType, StatusMap,
};
use serde::{Deserialize, Serialize};

/// Round a displayed value the way the game does (always up)
pub fn round_up(value: f64) -> u32 {
    value.ceil().max(0.0) as u32
}

/// One attribute's share of a scaled value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatContribution {
    /// Curve output at the effective level, 0-1
    pub saturation: f64,
    /// Bonus this attribute adds to the value
    pub scaling: f64,
    /// Scaling percentage after reinforcement
    pub raw_scaling: f64,
}

/// A base value plus attribute scaling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaledValue {
    /// Upgraded base before scaling
    pub base: f64,
    /// Sum of all attribute contributions
    pub scaling: f64,
    pub total: f64,
    pub rounded: u32,
    pub per_stat: AttributeMap<Option<StatContribution>>,
}

impl ScaledValue {
    pub fn new(base: f64, per_stat: AttributeMap<Option<StatContribution>>) -> Self {
        let scaling: f64 = per_stat.iter().filter_map(|(_, c)| c.map(|c| c.scaling)).sum();
        let total = base + scaling;
        ScaledValue {
            base,
            scaling,
            total,
            rounded: round_up(total),
            per_stat,
        }
    }
}

/// Spell power of a catalyst, 100 = unscaled
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpellScalingResult {
    pub sorcery: Option<ScaledValue>,
    pub incantation: Option<ScaledValue>,
}

impl SpellScalingResult {
    pub fn get(&self, spell_type: SpellType) -> Option<&ScaledValue> {
        match spell_type {
            SpellType::Sorcery => self.sorcery.as_ref(),
            SpellType::Incantation => self.incantation.as_ref(),
        }
    }
}

/// Guard stats at an upgrade level
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GuardResult {
    pub negation: DamageTypeMap<f64>,
    pub guard_boost: f64,
}

/// Full attack rating of a weapon for a set of stats
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArResult {
    pub weapon: String,
    pub affinity: Affinity,
    pub upgrade_level: u32,
    /// Stats after the two-handing adjustment
    pub effective_stats: PlayerStats,
    pub two_handed: bool,
    pub requirements_met: bool,
    /// `None` for damage types the weapon does not deal
    pub damage: DamageTypeMap<Option<ScaledValue>>,
    pub total: f64,
    pub rounded: u32,
    pub status: StatusMap<Option<ScaledValue>>,
    pub spell_scaling: Option<SpellScalingResult>,
    pub guard: GuardResult,
    pub critical_multiplier: f64,
    pub stamina: f64,
}

impl ArResult {
    /// Total of one damage type, 0 when the weapon does not deal it
    pub fn damage_total(&self, damage_type: DamageType) -> f64 {
        self.damage
            .get(damage_type)
            .as_ref()
            .map_or(0.0, |value| value.total)
    }

    /// Per-type totals, 0 for absent types
    pub fn damage_totals(&self) -> DamageTypeMap<f64> {
        DamageTypeMap::from_fn(|dt| self.damage_total(dt))
    }

    /// Display summary such as "Physical 312 / Fire 140 (452)"
    pub fn summary(&self) -> String {
        let parts: Vec<String> = self
            .damage
            .iter()
            .filter_map(|(dt, value)| value.as_ref().map(|v| format!("{:?} {}", dt, v.rounded)))
            .collect();

        if parts.is_empty() {
            "No damage".to_string()
        } else {
            format!("{} ({})", parts.join(" / "), self.rounded)
        }
    }
}
