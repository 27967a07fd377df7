//! Attack rating - weapon base values scaled by player attributes

mod calculation;
mod effective;
mod result;

pub use calculation::{compute_ar, compute_ar_by_name, compute_guard, ArOptions};
pub use effective::{effective_stats, two_handing_applies, MAX_TWO_HANDED_STRENGTH};
pub use result::{
    round_up, ArResult, GuardResult, ScaledValue, SpellScalingResult, StatContribution,
};
