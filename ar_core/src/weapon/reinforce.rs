//! Reinforcement rates - per upgrade level multipliers

use crate::types::{AttributeMap, DamageTypeMap};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Multipliers for one (reinforcement type, upgrade level) row
///
/// Rate maps that are present but partial read missing entries as 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReinforceRates {
    pub type_id: u32,
    pub level: u32,
    /// Base attack multipliers
    #[serde(default = "unit_damage_rates")]
    pub attack: DamageTypeMap<f64>,
    /// Attribute scaling multipliers
    #[serde(default = "unit_attribute_rates")]
    pub correct: AttributeMap<f64>,
    /// Guard negation multipliers
    #[serde(default = "unit_damage_rates")]
    pub guard: DamageTypeMap<f64>,
    #[serde(default = "unit_rate")]
    pub guard_boost: f64,
    #[serde(default = "unit_rate")]
    pub stamina: f64,
    /// Index into status buildup tables
    #[serde(default)]
    pub status_offset: usize,
}

fn unit_rate() -> f64 {
    1.0
}

fn unit_damage_rates() -> DamageTypeMap<f64> {
    DamageTypeMap::from_fn(|_| 1.0)
}

fn unit_attribute_rates() -> AttributeMap<f64> {
    AttributeMap::from_fn(|_| 1.0)
}

impl ReinforceRates {
    /// A row that leaves every value unchanged
    pub fn identity(type_id: u32, level: u32) -> Self {
        ReinforceRates {
            type_id,
            level,
            attack: unit_damage_rates(),
            correct: unit_attribute_rates(),
            guard: unit_damage_rates(),
            guard_boost: 1.0,
            stamina: 1.0,
            status_offset: 0,
        }
    }
}

/// Reinforcement rows keyed by (type id, upgrade level)
#[derive(Debug, Clone, Default)]
pub struct ReinforceTable {
    rows: HashMap<(u32, u32), ReinforceRates>,
}

impl ReinforceTable {
    pub fn new() -> Self {
        ReinforceTable {
            rows: HashMap::new(),
        }
    }

    pub fn from_rows(rows: impl IntoIterator<Item = ReinforceRates>) -> Self {
        let mut table = Self::new();
        for row in rows {
            table.insert(row);
        }
        table
    }

    pub fn insert(&mut self, row: ReinforceRates) {
        self.rows.insert((row.type_id, row.level), row);
    }

    pub fn get(&self, type_id: u32, level: u32) -> Option<&ReinforceRates> {
        self.rows.get(&(type_id, level))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
