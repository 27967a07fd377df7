//! Defense system - Enemy defense tiers and negation

mod negation;
mod step;

pub use negation::apply_negation;
pub use step::reduce_by_defense;

/// Defense calculation constants
pub mod constants {
    /// Highest fraction of attack that survives defense
    pub const MAX_DEFENSE_MULTIPLIER: f64 = 0.9;

    /// Lowest fraction of attack that survives defense
    pub const MIN_DEFENSE_MULTIPLIER: f64 = 0.1;

    /// Defense/attack ratios separating the five tiers, highest damage first
    pub const GLANCING_DEFENSE_RATIO: f64 = 0.125;
    pub const HIGH_DEFENSE_RATIO: f64 = 0.4;
    pub const EVEN_DEFENSE_RATIO: f64 = 1.0;
    pub const FLOOR_DEFENSE_RATIO: f64 = 8.0;
}
