//! Data-integrity errors
//!
//! These indicate a bug in the tables handed to the engine, not a normal
//! domain outcome. Missing weapons, curves or incompatible skills are
//! reported as `None` / empty results instead.

use crate::types::{Attribute, DamageType};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("Malformed curve {id}: {reason}")]
    MalformedCurve { id: u32, reason: String },
    #[error("Skill {skill} attack '{attack}' references unknown element correct row {id}")]
    UnknownElementCorrect { skill: u32, attack: String, id: u32 },
    #[error("Element correct row {id} has invalid rate {value} for {attribute:?} on {damage_type:?}")]
    InvalidElementCorrectRate {
        id: u32,
        attribute: Attribute,
        damage_type: DamageType,
        value: f64,
    },
    #[error("Skill {skill} attack '{attack}' has no curve for {attribute:?} on {damage_type:?}")]
    MissingBulletCurve {
        skill: u32,
        attack: String,
        attribute: Attribute,
        damage_type: DamageType,
    },
    #[error("Invalid bounds for {attribute:?}: min {min} > max {max}")]
    InvalidStatBounds { attribute: Attribute, min: u32, max: u32 },
}
