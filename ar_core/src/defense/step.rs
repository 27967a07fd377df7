//! Defense step function - attack/defense ratio to damage multiplier
//!
//! The ratio `attack / defense` selects one of five tiers:
//!
//! | ratio          | damage multiplier                       |
//! |----------------|-----------------------------------------|
//! | > 8            | 0.9                                     |
//! | 2.5 ..= 8      | -0.8/121 * (ratio - 8)^2 + 0.9          |
//! | 1 ..= 2.5      | -0.4/3 * (ratio - 2.5)^2 + 0.7          |
//! | 0.125 .. 1     | 19.2/49 * (ratio - 0.125)^2 + 0.1       |
//! | < 0.125        | 0.1                                     |
//!
//! Boundary ratios resolve to the higher damage tier.

use super::constants::{
    EVEN_DEFENSE_RATIO, FLOOR_DEFENSE_RATIO, GLANCING_DEFENSE_RATIO, HIGH_DEFENSE_RATIO,
    MAX_DEFENSE_MULTIPLIER, MIN_DEFENSE_MULTIPLIER,
};

/// Damage remaining after the target's flat defense
///
/// # Arguments
/// * `attack` - Incoming attack for one damage type
/// * `defense` - The target's defense against that type
pub fn reduce_by_defense(attack: f64, defense: f64) -> f64 {
    if attack <= 0.0 {
        return 0.0;
    }
    if defense <= 0.0 {
        return MAX_DEFENSE_MULTIPLIER * attack;
    }

    let ratio = attack / defense;

    let multiplier = if defense > FLOOR_DEFENSE_RATIO * attack {
        MIN_DEFENSE_MULTIPLIER
    } else if defense > EVEN_DEFENSE_RATIO * attack {
        (19.2 / 49.0) * (ratio - 0.125).powi(2) + 0.1
    } else if defense > HIGH_DEFENSE_RATIO * attack {
        (-0.4 / 3.0) * (ratio - 2.5).powi(2) + 0.7
    } else if defense > GLANCING_DEFENSE_RATIO * attack {
        (-0.8 / 121.0) * (ratio - 8.0).powi(2) + 0.9
    } else {
        MAX_DEFENSE_MULTIPLIER
    };

    multiplier * attack
}
