//! Negation - Percentage damage reduction applied after defense

/// Apply a negation percentage to damage
///
/// Negation above 100 drives damage negative and negative negation
/// amplifies it. No clamping happens here; callers clamp final totals.
pub fn apply_negation(damage: f64, negation: f64) -> f64 {
    damage * (1.0 - negation / 100.0)
}
