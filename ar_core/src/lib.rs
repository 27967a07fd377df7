//! ar_core - Attack rating and damage engine for weapon theorycrafting
//!
//! This library provides:
//! - Curves: Five-segment stat saturation curves
//! - Attack rating: Weapon base values scaled by player attributes
//! - Skills: Ash of War motion, bullet and stat bonus damage
//! - Enemy damage: Defense tiers and negation against a target
//! - Optimizer: Greedy stat allocation for any objective
//! - Batch: Parallel evaluation across weapons with stale-result discarding
//!
//! All calculators are pure functions over an immutable [`GameData`].

pub mod attack_rating;
pub mod batch;
pub mod config;
pub mod curve;
pub mod defense;
pub mod enemy;
pub mod error;
pub mod optimizer;
pub mod prelude;
pub mod skill;
pub mod types;
pub mod weapon;

// Re-export core types for convenience
pub use attack_rating::{compute_ar, compute_ar_by_name, compute_guard, ArOptions, ArResult};
pub use batch::{compute_ar_batch, BatchEvaluator, BatchRequest};
pub use config::{ConfigError, GameData};
pub use curve::{CurveDefinition, CurveTable};
pub use enemy::{compute_enemy_damage, EnemyDamageResult, EnemyDefenseData};
pub use error::CalcError;
pub use optimizer::{find_optimal_stats, Objective, OptimizationResult, StatConfig};
pub use skill::{compute_skill_damage, AshOfWar, AttackResult};
pub use types::{
    Affinity, Attribute, AttackAttribute, DamageType, PlayerStats, SpellType, StatusType,
    WeaponType,
};
pub use weapon::WeaponEntry;
