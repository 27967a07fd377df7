//! AttackResult - Per-attack skill damage breakdown

use crate::attack_rating::round_up;
use crate::enemy::{compute_enemy_damage, EnemyDamageResult, EnemyDefenseData};
use crate::types::{AttackAttribute, DamageTypeMap};
use serde::{Deserialize, Serialize};

/// Damage of one skill attack before enemy defenses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttackResult {
    pub name: String,
    pub attack_attribute: AttackAttribute,
    /// Weapon attack rating scaled by motion values
    pub motion: DamageTypeMap<Option<f64>>,
    /// Flat bullet damage after upgrade and attribute scaling
    pub bullet: DamageTypeMap<Option<f64>>,
    /// Attack rating granted by attribute point bonuses
    pub stat_bonus: DamageTypeMap<Option<f64>>,
    /// Sum of the three components per damage type
    pub by_type: DamageTypeMap<f64>,
    pub total: f64,
    pub rounded: u32,
}

impl AttackResult {
    pub fn new(
        name: String,
        attack_attribute: AttackAttribute,
        motion: DamageTypeMap<Option<f64>>,
        bullet: DamageTypeMap<Option<f64>>,
        stat_bonus: DamageTypeMap<Option<f64>>,
    ) -> Self {
        let by_type = DamageTypeMap::from_fn(|dt| {
            motion.get(dt).unwrap_or(0.0)
                + bullet.get(dt).unwrap_or(0.0)
                + stat_bonus.get(dt).unwrap_or(0.0)
        });
        let total: f64 = by_type.iter().map(|(_, v)| *v).sum();
        AttackResult {
            name,
            attack_attribute,
            motion,
            bullet,
            stat_bonus,
            by_type,
            total,
            rounded: round_up(total),
        }
    }

    /// Damage this attack deals to an enemy
    ///
    /// Motion values are already folded into `by_type`, so the enemy
    /// pipeline runs at 100%.
    pub fn against(&self, enemy: &EnemyDefenseData) -> EnemyDamageResult {
        compute_enemy_damage(
            &self.by_type,
            &DamageTypeMap::from_fn(|_| 100.0),
            self.attack_attribute,
            enemy,
        )
    }
}

/// Sum of every attack's total
pub fn total_damage(attacks: &[AttackResult]) -> f64 {
    attacks.iter().map(|a| a.total).sum()
}
