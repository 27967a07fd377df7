//! Enemy damage - motion values, defense tiers and negation against a target

use crate::attack_rating::round_up;
use crate::defense::{apply_negation, reduce_by_defense};
use crate::types::{AttackAttribute, DamageType, DamageTypeMap};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Defense or negation values of an enemy
///
/// Physical has three attack-attribute specific variants plus the generic one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DefenseValues {
    #[serde(default)]
    pub physical: f64,
    #[serde(default)]
    pub strike: f64,
    #[serde(default)]
    pub slash: f64,
    #[serde(default)]
    pub pierce: f64,
    #[serde(default)]
    pub magic: f64,
    #[serde(default)]
    pub fire: f64,
    #[serde(default)]
    pub lightning: f64,
    #[serde(default)]
    pub holy: f64,
}

impl DefenseValues {
    /// Value for a damage type; physical routes through the attack attribute
    pub fn for_damage(&self, damage_type: DamageType, attribute: AttackAttribute) -> f64 {
        match damage_type {
            DamageType::Physical => match attribute {
                AttackAttribute::Standard => self.physical,
                AttackAttribute::Strike => self.strike,
                AttackAttribute::Slash => self.slash,
                AttackAttribute::Pierce => self.pierce,
            },
            DamageType::Magic => self.magic,
            DamageType::Fire => self.fire,
            DamageType::Lightning => self.lightning,
            DamageType::Holy => self.holy,
        }
    }
}

/// Defenses of one enemy
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnemyDefenseData {
    /// Table key
    pub key: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub defense: DefenseValues,
    /// Negation percentages; negative values increase damage taken
    #[serde(default)]
    pub negation: DefenseValues,
}

/// Enemy registry keyed by enemy key
#[derive(Debug, Clone, Default)]
pub struct EnemyTable {
    enemies: BTreeMap<String, EnemyDefenseData>,
}

impl EnemyTable {
    pub fn new() -> Self {
        EnemyTable {
            enemies: BTreeMap::new(),
        }
    }

    pub fn from_entries(entries: impl IntoIterator<Item = EnemyDefenseData>) -> Self {
        let mut table = Self::new();
        for entry in entries {
            table.register(entry);
        }
        table
    }

    pub fn register(&mut self, entry: EnemyDefenseData) {
        self.enemies.insert(entry.key.clone(), entry);
    }

    pub fn get(&self, key: &str) -> Option<&EnemyDefenseData> {
        self.enemies.get(key)
    }

    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }
}

/// Damage dealt to an enemy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyDamageResult {
    /// Damage per type after defense and negation, never negative
    pub by_type: DamageTypeMap<f64>,
    pub total: f64,
    pub rounded: u32,
}

/// Apply motion values, defense and negation per damage type
///
/// # Arguments
/// * `base_ar` - Attack rating per damage type
/// * `motion_values` - Motion values in percent (100 = 1x)
/// * `attack_attribute` - Selects the physical defense/negation variant
/// * `enemy` - Target defenses
pub fn compute_enemy_damage(
    base_ar: &DamageTypeMap<f64>,
    motion_values: &DamageTypeMap<f64>,
    attack_attribute: AttackAttribute,
    enemy: &EnemyDefenseData,
) -> EnemyDamageResult {
    let by_type = DamageTypeMap::from_fn(|dt| {
        let attack = base_ar.get(dt) * (motion_values.get(dt) / 100.0);
        let defense = enemy.defense.for_damage(dt, attack_attribute);
        let negation = enemy.negation.for_damage(dt, attack_attribute);
        apply_negation(reduce_by_defense(attack, defense), negation).max(0.0)
    });
    let total: f64 = by_type.iter().map(|(_, v)| *v).sum();

    EnemyDamageResult {
        by_type,
        total,
        rounded: round_up(total),
    }
}

/// Resolve the enemy by key, `None` when it is unknown
pub fn compute_enemy_damage_for(
    enemies: &EnemyTable,
    enemy_key: &str,
    base_ar: &DamageTypeMap<f64>,
    motion_values: &DamageTypeMap<f64>,
    attack_attribute: AttackAttribute,
) -> Option<EnemyDamageResult> {
    let enemy = enemies.get(enemy_key)?;
    Some(compute_enemy_damage(
        base_ar,
        motion_values,
        attack_attribute,
        enemy,
    ))
}
