//! Stat allocation optimizer
//!
//! Greedy marginal-gain hill climb: starting from every attribute's minimum,
//! repeatedly spend one point on the free attribute whose +1 raises the
//! objective the most. Ties go to the earlier attribute in
//! Str, Dex, Int, Fai, Arc order. Stops when the budget is spent, every
//! free attribute is at its maximum, or no +1 improves the objective.
//! Every step spends a point, so the budget bounds the loop.
//!
//! The search can settle in a local optimum because scaling curves are not
//! convex. Results are fully deterministic.

mod objective;

pub use objective::{Objective, ObjectiveKind, WeaponObjective};

use crate::error::CalcError;
use crate::types::{Attribute, AttributeMap, PlayerStats};
use serde::{Deserialize, Serialize};

/// Allowed range of one attribute; `min == max` pins it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatConfig {
    pub min: u32,
    pub max: u32,
}

impl StatConfig {
    pub fn range(min: u32, max: u32) -> Self {
        StatConfig { min, max }
    }

    pub fn pinned(value: u32) -> Self {
        StatConfig {
            min: value,
            max: value,
        }
    }

    pub fn is_pinned(&self) -> bool {
        self.min == self.max
    }
}

impl Default for StatConfig {
    fn default() -> Self {
        StatConfig { min: 1, max: 99 }
    }
}

/// Why the search stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    BudgetExhausted,
    AllSaturated,
    NoPositiveGain,
}

/// Best stats found and the objective value there
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    pub stats: PlayerStats,
    pub value: f64,
    /// Points spent above the minimums
    pub spent: u32,
    pub stop_reason: StopReason,
}

/// Spend up to `budget` points above the minimums to maximize `objective`
///
/// A budget of zero or less returns the minimums unchanged.
pub fn find_optimal_stats(
    objective: &impl Objective,
    configs: &AttributeMap<StatConfig>,
    budget: i64,
) -> Result<OptimizationResult, CalcError> {
    for (attribute, config) in configs.iter() {
        if config.min > config.max {
            return Err(CalcError::InvalidStatBounds {
                attribute,
                min: config.min,
                max: config.max,
            });
        }
    }

    let mut stats: PlayerStats = AttributeMap::from_fn(|a| configs.get(a).min);
    let mut value = objective.evaluate(&stats);
    let free: Vec<Attribute> = Attribute::all()
        .iter()
        .copied()
        .filter(|&a| !configs.get(a).is_pinned())
        .collect();

    let mut remaining = budget.max(0) as u64;

    let stop_reason = loop {
        if remaining == 0 {
            break StopReason::BudgetExhausted;
        }

        let mut best: Option<(Attribute, f64, f64)> = None;
        for &attribute in &free {
            if *stats.get(attribute) >= configs.get(attribute).max {
                continue;
            }
            let mut candidate = stats;
            *candidate.get_mut(attribute) += 1;
            let candidate_value = objective.evaluate(&candidate);
            let gain = candidate_value - value;
            if best.map_or(true, |(_, best_gain, _)| gain > best_gain) {
                best = Some((attribute, gain, candidate_value));
            }
        }

        match best {
            None => break StopReason::AllSaturated,
            Some((_, gain, _)) if gain <= 0.0 => break StopReason::NoPositiveGain,
            Some((attribute, gain, candidate_value)) => {
                tracing::trace!(?attribute, gain, "optimizer step");
                *stats.get_mut(attribute) += 1;
                value = candidate_value;
                remaining -= 1;
            }
        }
    };

    let spent: u32 = Attribute::all()
        .iter()
        .map(|&a| stats.get(a) - configs.get(a).min)
        .sum();
    tracing::debug!(?stop_reason, spent, value, "stat optimization finished");

    Ok(OptimizationResult {
        stats,
        value,
        spent,
        stop_reason,
    })
}
