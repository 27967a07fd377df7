//! GameData - every table the calculators read, loaded as one unit

use super::ConfigError;
use crate::curve::{CurveDefinition, CurveTable};
use crate::enemy::{EnemyDefenseData, EnemyTable};
use crate::skill::{AshOfWar, AttackElementCorrect};
use crate::weapon::{ReinforceRates, ReinforceTable, WeaponEntry, WeaponTable};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::path::Path;

/// Immutable game tables shared by every calculation
#[derive(Debug, Clone, Default)]
pub struct GameData {
    pub curves: CurveTable,
    pub weapons: WeaponTable,
    pub reinforcements: ReinforceTable,
    pub skills: HashMap<u32, AshOfWar>,
    pub element_corrects: HashMap<u32, AttackElementCorrect>,
    pub enemies: EnemyTable,
}

/// On-disk layout of a game data file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct GameDataFile {
    #[serde(default)]
    curves: Vec<CurveDefinition>,
    #[serde(default)]
    weapons: Vec<WeaponEntry>,
    #[serde(default)]
    reinforcements: Vec<ReinforceRates>,
    #[serde(default)]
    skills: Vec<AshOfWar>,
    #[serde(default)]
    element_corrects: Vec<AttackElementCorrect>,
    #[serde(default)]
    enemies: Vec<EnemyDefenseData>,
}

impl GameData {
    /// Parse game data from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file: GameDataFile = super::parse_toml(content)?;
        Self::build(file)
    }

    /// Parse game data from a JSON string
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let file: GameDataFile = serde_json::from_str(content)?;
        Self::build(file)
    }

    /// Load game data from a file; `.json` files are read as JSON, anything
    /// else as TOML
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let file: GameDataFile = if is_json {
            super::load_json(path)?
        } else {
            super::load_toml(path)?
        };
        Self::build(file)
    }

    /// Bundled sample data set
    pub fn sample() -> Self {
        let toml = include_str!("../../config/sample_data.toml");
        Self::from_toml_str(toml).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "bundled sample data failed to load");
            GameData::default()
        })
    }

    fn build(file: GameDataFile) -> Result<Self, ConfigError> {
        ensure_unique("curve", file.curves.iter().map(|c| c.id))?;
        ensure_unique("weapon", file.weapons.iter().map(|w| w.name.as_str()))?;
        ensure_unique(
            "reinforcement row",
            file.reinforcements.iter().map(|r| (r.type_id, r.level)),
        )?;
        ensure_unique("skill", file.skills.iter().map(|s| s.id))?;
        ensure_unique(
            "element correct",
            file.element_corrects.iter().map(|c| c.id),
        )?;
        ensure_unique("enemy", file.enemies.iter().map(|e| e.key.as_str()))?;

        for correct in &file.element_corrects {
            correct.validate()?;
        }

        for weapon in &file.weapons {
            if weapon.affinities.is_empty() {
                return Err(ConfigError::ValidationError(format!(
                    "weapon '{}' has no affinities",
                    weapon.name
                )));
            }
        }

        let data = GameData {
            curves: CurveTable::from_curves(file.curves)?,
            weapons: WeaponTable::from_entries(file.weapons),
            reinforcements: ReinforceTable::from_rows(file.reinforcements),
            skills: file.skills.into_iter().map(|s| (s.id, s)).collect(),
            element_corrects: file
                .element_corrects
                .into_iter()
                .map(|c| (c.id, c))
                .collect(),
            enemies: EnemyTable::from_entries(file.enemies),
        };

        tracing::debug!(
            curves = data.curves.len(),
            weapons = data.weapons.len(),
            reinforcements = data.reinforcements.len(),
            skills = data.skills.len(),
            element_corrects = data.element_corrects.len(),
            enemies = data.enemies.len(),
            "game data loaded"
        );

        Ok(data)
    }
}

fn ensure_unique<K>(kind: &str, keys: impl Iterator<Item = K>) -> Result<(), ConfigError>
where
    K: Eq + Hash + std::fmt::Debug,
{
    let mut seen = HashSet::new();
    for key in keys {
        if let Some(duplicate) = seen.replace(key) {
            return Err(ConfigError::ValidationError(format!(
                "duplicate {} {:?}",
                kind, duplicate
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalcError;
    use crate::types::Affinity;

    const CURVE: &str = r#"
[[curves]]
id = 0
stage_max_val = [1, 18, 60, 80, 150]
stage_max_grow_val = [0, 25, 75, 90, 110]
adj_pt = [1.2, -1.2, 1, 1, 1]
"#;

    #[test]
    fn test_sample_loads() {
        let toml = include_str!("../../config/sample_data.toml");
        let data = GameData::from_toml_str(toml).unwrap();
        assert!(data.weapons.get("Longsword").is_some());
        assert!(data.curves.get(0).is_some());
        assert!(!data.skills.is_empty());
        assert!(!data.enemies.is_empty());
        assert!(data.reinforcements.get(0, 25).is_some());
    }

    #[test]
    fn test_duplicate_curve_rejected() {
        let toml = format!("{}{}", CURVE, CURVE);
        let result = GameData::from_toml_str(&toml);
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_malformed_curve_rejected() {
        let toml = r#"
[[curves]]
id = 3
stage_max_val = [1, 18, 10, 80, 150]
stage_max_grow_val = [0, 25, 75, 90, 110]
adj_pt = [1, 1, 1, 1, 1]
"#;
        let result = GameData::from_toml_str(toml);
        assert!(matches!(
            result,
            Err(ConfigError::Calc(CalcError::MalformedCurve { id: 3, .. }))
        ));
    }

    #[test]
    fn test_malformed_element_correct_rejected() {
        let toml = r#"
[[element_corrects]]
id = 5

[element_corrects.rates.faith]
holy = -3
"#;
        assert!(matches!(
            GameData::from_toml_str(toml),
            Err(ConfigError::Calc(CalcError::InvalidElementCorrectRate { id: 5, .. }))
        ));
    }

    #[test]
    fn test_weapon_without_affinities_rejected() {
        let toml = r#"
[[weapons]]
name = "Empty"
weapon_type = "dagger"
affinities = {}
"#;
        assert!(matches!(
            GameData::from_toml_str(toml),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_json_matches_toml() {
        let json = r#"{
            "curves": [{
                "id": 0,
                "stage_max_val": [1, 18, 60, 80, 150],
                "stage_max_grow_val": [0, 25, 75, 90, 110],
                "adj_pt": [1.2, -1.2, 1, 1, 1]
            }],
            "weapons": [{
                "name": "Club",
                "weapon_type": "hammer",
                "affinities": {
                    "standard": {
                        "reinforce_type_id": 0,
                        "attack": { "physical": { "base": 100 } }
                    }
                }
            }],
            "reinforcements": [{ "type_id": 0, "level": 0 }]
        }"#;
        let from_json = GameData::from_json_str(json).unwrap();
        let from_toml = GameData::from_toml_str(CURVE).unwrap();

        assert_eq!(from_json.curves.get(0), from_toml.curves.get(0));
        let club = from_json.weapons.get("Club").unwrap();
        assert!(club.affinity(Affinity::Standard).is_some());
        assert!(from_json.reinforcements.get(0, 0).is_some());
    }

    #[test]
    fn test_empty_file_is_empty_data() {
        let data = GameData::from_toml_str("").unwrap();
        assert!(data.curves.is_empty());
        assert!(data.weapons.is_empty());
        assert!(data.skills.is_empty());
    }
}
