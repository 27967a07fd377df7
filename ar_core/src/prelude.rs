//! Prelude module for convenient imports
//!
//! ```rust
//! use ar_core::prelude::*;
//! ```

// Core types
pub use crate::types::{
    Affinity, Attribute, AttackAttribute, AttributeMap, DamageType, DamageTypeMap, PlayerStats,
    SpellType, StatusMap, StatusType, WeaponType,
};

// Data
pub use crate::config::{ConfigError, GameData};
pub use crate::curve::{CurveDefinition, CurveTable};
pub use crate::weapon::{ReinforceRates, WeaponEntry};

// Calculators
pub use crate::attack_rating::{compute_ar, compute_ar_by_name, ArOptions, ArResult};
pub use crate::enemy::{compute_enemy_damage, EnemyDamageResult, EnemyDefenseData};
pub use crate::skill::{compute_skill_damage, AshOfWar, AttackResult};

// Optimizer
pub use crate::optimizer::{
    find_optimal_stats, Objective, ObjectiveKind, OptimizationResult, StatConfig, WeaponObjective,
};

// Batch
pub use crate::batch::{compute_ar_batch, BatchEvaluator, BatchRequest};

pub use crate::error::CalcError;
