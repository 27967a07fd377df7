//! CurveDefinition - Five-segment stat saturation curve

use crate::error::CalcError;
use serde::{Deserialize, Serialize};

/// Number of breakpoints in every curve
pub const STAGE_COUNT: usize = 5;

/// Piecewise power-interpolated growth curve (CalcCorrectGraph row)
///
/// `stage_max_val[i]` is the stat level at breakpoint `i` and
/// `stage_max_grow_val[i]` the curve output there. The segment ending at
/// breakpoint `s` is shaped by `adj_pt[s - 1]` (segment 0 uses `adj_pt[0]`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveDefinition {
    pub id: u32,
    pub stage_max_val: [f64; STAGE_COUNT],
    pub stage_max_grow_val: [f64; STAGE_COUNT],
    pub adj_pt: [f64; STAGE_COUNT],
}

impl CurveDefinition {
    /// Evaluate the curve at a stat level
    ///
    /// Levels past the last breakpoint plateau at the last growth value.
    pub fn evaluate(&self, level: f64) -> f64 {
        let stage = self
            .stage_max_val
            .iter()
            .position(|&max| level <= max)
            .unwrap_or(STAGE_COUNT - 1);

        let (lower_val, lower_grow) = if stage == 0 {
            (0.0, 0.0)
        } else {
            (self.stage_max_val[stage - 1], self.stage_max_grow_val[stage - 1])
        };
        let upper_val = self.stage_max_val[stage];
        let upper_grow = self.stage_max_grow_val[stage];

        if level >= upper_val {
            return upper_grow;
        }
        if level <= lower_val {
            return lower_grow;
        }

        let ratio = (level - lower_val) / (upper_val - lower_val);
        let exponent = self.adj_pt[stage.saturating_sub(1)];
        let shaped = if exponent > 0.0 {
            ratio.powf(exponent)
        } else if exponent < 0.0 {
            1.0 - (1.0 - ratio).powf(-exponent)
        } else {
            // Zero exponent holds the segment floor until the breakpoint
            0.0
        };

        lower_grow + (upper_grow - lower_grow) * shaped
    }

    /// Curve output as a 0-1 saturation (growth / 100)
    pub fn saturation(&self, level: u32) -> f64 {
        self.evaluate(level as f64) / 100.0
    }

    /// Check breakpoints ascend strictly and growth never decreases
    pub fn validate(&self) -> Result<(), CalcError> {
        if self.stage_max_val[0] < 0.0 {
            return Err(self.malformed("first breakpoint is negative".to_string()));
        }
        for i in 1..STAGE_COUNT {
            if self.stage_max_val[i] <= self.stage_max_val[i - 1] {
                return Err(self.malformed(format!(
                    "breakpoint {} ({}) does not exceed breakpoint {} ({})",
                    i,
                    self.stage_max_val[i],
                    i - 1,
                    self.stage_max_val[i - 1]
                )));
            }
            if self.stage_max_grow_val[i] < self.stage_max_grow_val[i - 1] {
                return Err(self.malformed(format!("growth value decreases at breakpoint {}", i)));
            }
        }
        Ok(())
    }

    fn malformed(&self, reason: String) -> CalcError {
        CalcError::MalformedCurve { id: self.id, reason }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// The common strength/dexterity curve
    fn standard_curve() -> CurveDefinition {
        CurveDefinition {
            id: 0,
            stage_max_val: [1.0, 18.0, 60.0, 80.0, 150.0],
            stage_max_grow_val: [0.0, 25.0, 75.0, 90.0, 110.0],
            adj_pt: [1.2, -1.2, 1.0, 1.0, 1.0],
        }
    }

    #[test]
    fn test_breakpoints_are_exact() {
        let curve = standard_curve();
        for i in 0..STAGE_COUNT {
            let value = curve.evaluate(curve.stage_max_val[i]);
            assert_eq!(value, curve.stage_max_grow_val[i]);
        }
    }

    #[test]
    fn test_zero_level_is_zero() {
        assert_eq!(standard_curve().evaluate(0.0), 0.0);
    }

    #[test]
    fn test_plateau_past_last_breakpoint() {
        assert_eq!(standard_curve().evaluate(200.0), 110.0);
    }

    #[test]
    fn test_uses_previous_breakpoint_exponent() {
        // Segment 18..60 is shaped by adj_pt[1] = -1.2
        let curve = standard_curve();
        let ratio: f64 = (40.0 - 18.0) / (60.0 - 18.0);
        let expected = 25.0 + 50.0 * (1.0 - (1.0 - ratio).powf(1.2));
        assert!((curve.evaluate(40.0) - expected).abs() < 1e-12);

        // Segment 1..18 is shaped by adj_pt[0] = 1.2
        let ratio: f64 = (10.0 - 1.0) / 17.0;
        let expected = 25.0 * ratio.powf(1.2);
        assert!((curve.evaluate(10.0) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_zero_exponent_is_a_step() {
        let mut curve = standard_curve();
        curve.adj_pt[1] = 0.0;
        assert_eq!(curve.evaluate(59.0), 25.0);
        assert_eq!(curve.evaluate(60.0), 75.0);
    }

    #[test]
    fn test_saturation_normalizes() {
        assert!((standard_curve().saturation(60) - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_validate_rejects_non_ascending() {
        let mut curve = standard_curve();
        curve.stage_max_val[2] = 18.0;
        assert!(matches!(
            curve.validate(),
            Err(CalcError::MalformedCurve { id: 0, .. })
        ));
        assert!(standard_curve().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_decreasing_growth() {
        let mut curve = standard_curve();
        curve.stage_max_grow_val[3] = 70.0;
        assert!(curve.validate().is_err());
    }

    proptest! {
        #[test]
        fn prop_monotonic(level in 0u32..200) {
            let curve = standard_curve();
            let here = curve.evaluate(level as f64);
            let next = curve.evaluate(level as f64 + 1.0);
            prop_assert!(next >= here);
        }

        #[test]
        fn prop_within_growth_range(level in 0u32..300) {
            let value = standard_curve().evaluate(level as f64);
            prop_assert!((0.0..=110.0).contains(&value));
        }
    }
}
