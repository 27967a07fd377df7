//! Stat scaling curves

mod definition;

pub use definition::{CurveDefinition, STAGE_COUNT};

use crate::error::CalcError;
use std::collections::HashMap;

/// Curve registry, indexed by curve id
#[derive(Debug, Clone, Default)]
pub struct CurveTable {
    curves: HashMap<u32, CurveDefinition>,
}

impl CurveTable {
    pub fn new() -> Self {
        CurveTable {
            curves: HashMap::new(),
        }
    }

    /// Build a table, validating every curve
    pub fn from_curves(curves: impl IntoIterator<Item = CurveDefinition>) -> Result<Self, CalcError> {
        let mut table = Self::new();
        for curve in curves {
            table.register(curve)?;
        }
        Ok(table)
    }

    /// Register a curve after validating it. A later curve with the same id
    /// replaces the earlier one.
    pub fn register(&mut self, curve: CurveDefinition) -> Result<(), CalcError> {
        curve.validate()?;
        self.curves.insert(curve.id, curve);
        Ok(())
    }

    pub fn get(&self, id: u32) -> Option<&CurveDefinition> {
        self.curves.get(&id)
    }

    /// Saturation (0-1) of curve `id` at `level`, `None` for unknown curves
    pub fn saturation(&self, id: u32, level: u32) -> Option<f64> {
        self.get(id).map(|curve| curve.saturation(level))
    }

    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear(id: u32) -> CurveDefinition {
        CurveDefinition {
            id,
            stage_max_val: [1.0, 20.0, 40.0, 60.0, 99.0],
            stage_max_grow_val: [0.0, 20.0, 40.0, 60.0, 100.0],
            adj_pt: [1.0; 5],
        }
    }

    #[test]
    fn test_unknown_curve_is_none() {
        let table = CurveTable::from_curves([linear(7)]).unwrap();
        assert!(table.saturation(7, 40).is_some());
        assert!(table.saturation(8, 40).is_none());
    }

    #[test]
    fn test_register_rejects_malformed() {
        let mut curve = linear(1);
        curve.stage_max_val[4] = 10.0;
        assert!(CurveTable::from_curves([curve]).is_err());
    }

    #[test]
    fn test_linear_saturation() {
        let table = CurveTable::from_curves([linear(0)]).unwrap();
        assert!((table.saturation(0, 30).unwrap() - 0.30).abs() < 1e-12);
    }
}
