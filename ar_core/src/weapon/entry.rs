//! WeaponEntry - Normalized weapon data with affinity variants

use super::ReinforceRates;
use crate::types::{
    Affinity, Attribute, AttackAttribute, AttributeMap, DamageType, DamageTypeMap, PlayerStats,
    SpellType, StatusMap, StatusType, WeaponType,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A weapon and every affinity it can be infused with
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponEntry {
    /// Display name, also the table key
    pub name: String,
    pub weapon_type: WeaponType,
    /// Physical attack attribute of the weapon's standard moveset
    #[serde(default)]
    pub attack_attribute: AttackAttribute,
    /// Paired weapons are wielded as a set and never get two-handing
    #[serde(default)]
    pub paired: bool,
    /// Attribute requirements
    #[serde(default)]
    pub requirements: PlayerStats,
    /// 25 on the standard upgrade track, 10 on the somber track
    #[serde(default = "default_max_upgrade_level")]
    pub max_upgrade_level: u32,
    /// Critical value (100 = 1x critical multiplier)
    #[serde(default = "default_critical")]
    pub critical: f64,
    /// Guard negation at +0
    #[serde(default)]
    pub guard: DamageTypeMap<f64>,
    #[serde(default)]
    pub guard_boost: f64,
    /// Whether another Ash of War can be mounted
    #[serde(default = "default_true")]
    pub can_mount_ash_of_war: bool,
    /// Skill the weapon carries by default (fixed for unique weapons)
    #[serde(default)]
    pub default_skill: Option<u32>,
    pub affinities: BTreeMap<Affinity, AffinityData>,
}

fn default_max_upgrade_level() -> u32 {
    25
}

fn default_critical() -> f64 {
    100.0
}

fn default_true() -> bool {
    true
}

impl WeaponEntry {
    pub fn affinity(&self, affinity: Affinity) -> Option<&AffinityData> {
        self.affinities.get(&affinity)
    }

    /// Whether the effective stats meet every attribute requirement
    pub fn requirements_met(&self, stats: &PlayerStats) -> bool {
        Attribute::all()
            .iter()
            .all(|&a| stats.get(a) >= self.requirements.get(a))
    }

    /// Fraction of the upgrade track reached (0 at +0, 1 at max)
    pub fn upgrade_progress(&self, upgrade_level: u32) -> f64 {
        if self.max_upgrade_level == 0 {
            return 0.0;
        }
        upgrade_level.min(self.max_upgrade_level) as f64 / self.max_upgrade_level as f64
    }

    pub fn clamp_upgrade_level(&self, upgrade_level: u32) -> u32 {
        upgrade_level.min(self.max_upgrade_level)
    }
}

/// Per-affinity attack, scaling and status data
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AffinityData {
    /// Row family in the reinforcement table
    pub reinforce_type_id: u32,
    #[serde(default)]
    pub attack: DamageTypeMap<Option<AttackElement>>,
    #[serde(default)]
    pub status: StatusMap<Option<StatusElement>>,
    /// Present on catalysts only
    #[serde(default)]
    pub spell_scaling: Option<SpellScalingData>,
    #[serde(default)]
    pub stamina_attack: f64,
}

impl AffinityData {
    /// Base attack of a damage type at an upgrade level
    ///
    /// Attack rating and skill calculations both go through here so the
    /// two never disagree on upgraded base values.
    pub fn scaled_attack_base(&self, damage_type: DamageType, rates: &ReinforceRates) -> Option<f64> {
        self.attack
            .get(damage_type)
            .as_ref()
            .map(|element| element.base * rates.attack.get(damage_type))
    }

    /// Scaling percentage of `attribute` on `damage_type` at an upgrade level
    pub fn scaled_scaling_value(
        &self,
        damage_type: DamageType,
        attribute: Attribute,
        rates: &ReinforceRates,
    ) -> Option<f64> {
        self.attack
            .get(damage_type)
            .as_ref()
            .and_then(|element| element.scaling.get(attribute).as_ref())
            .map(|entry| entry.scaled_value(*rates.correct.get(attribute)))
    }

    pub fn status_element(&self, status: StatusType) -> Option<&StatusElement> {
        self.status.get(status).as_ref()
    }
}

/// Base attack of one damage type plus its attribute scaling
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttackElement {
    pub base: f64,
    #[serde(default)]
    pub scaling: AttributeMap<Option<ScalingEntry>>,
}

/// Scaling of one attribute on one damage type
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScalingEntry {
    /// Scaling percentage at +0 (e.g. 45 = 45%)
    pub value: f64,
    /// Curve id the attribute level is evaluated against
    pub curve: u32,
    /// Fixed scaling that ignores the reinforcement rate
    #[serde(default)]
    pub is_override: bool,
}

impl ScalingEntry {
    /// Scaling percentage after the reinforcement correct rate
    pub fn scaled_value(&self, correct_rate: f64) -> f64 {
        if self.is_override {
            self.value
        } else {
            self.value * correct_rate
        }
    }
}

/// Status buildup by reinforcement offset, optionally scaling with arcane
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusElement {
    /// Buildup indexed by the reinforcement status offset
    pub buildup: Vec<f64>,
    #[serde(default)]
    pub arcane_scaling: Option<ScalingEntry>,
}

impl StatusElement {
    /// Buildup at an offset; offsets past the end use the last entry
    pub fn buildup_at(&self, offset: usize) -> Option<f64> {
        self.buildup
            .get(offset)
            .or_else(|| self.buildup.last())
            .copied()
    }
}

/// Spell power scaling of a catalyst
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpellScalingData {
    #[serde(default)]
    pub sorcery: bool,
    #[serde(default)]
    pub incantation: bool,
    #[serde(default)]
    pub scaling: AttributeMap<Option<ScalingEntry>>,
}

impl SpellScalingData {
    pub fn supports(&self, spell_type: SpellType) -> bool {
        match spell_type {
            SpellType::Sorcery => self.sorcery,
            SpellType::Incantation => self.incantation,
        }
    }
}
