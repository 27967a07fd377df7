//! Ash of War definitions and element correct overrides

use crate::error::CalcError;
use crate::types::{
    Affinity, Attribute, AttackAttribute, AttributeMap, DamageType, DamageTypeMap, WeaponType,
};
use serde::{Deserialize, Serialize};

/// A weapon skill and the attacks it performs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AshOfWar {
    pub id: u32,
    pub name: String,
    /// Affinity the ash grants when mounted
    #[serde(default)]
    pub default_affinity: Option<Affinity>,
    /// Weapon classes the ash is flagged as mountable on
    #[serde(default)]
    pub weapon_types: Vec<WeaponType>,
    /// Affinities the ash is flagged as supporting
    #[serde(default)]
    pub affinities: Vec<Affinity>,
    #[serde(default)]
    pub attacks: Vec<SkillAttack>,
}

/// One hit (or buff) of a skill
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillAttack {
    pub name: String,
    /// Motion values in percent of weapon attack rating (100 = 1x)
    #[serde(default)]
    pub motion: DamageTypeMap<Option<f64>>,
    /// Flat bullet damage at +0 before upgrade and attribute scaling
    #[serde(default)]
    pub bullet: DamageTypeMap<Option<f64>>,
    #[serde(default)]
    pub scaling: Option<BulletScaling>,
    /// Attribute points added as bonus attack rating (self-buffs)
    #[serde(default)]
    pub stat_point_bonus: Option<AttributeMap<f64>>,
    /// Physical attack attribute, defaults to the weapon's
    #[serde(default)]
    pub attack_attribute: Option<AttackAttribute>,
}

/// Attribute scaling applied to bullet damage
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BulletScaling {
    /// Row in the element correct table
    pub element_correct: u32,
    /// Curve for every attribute, otherwise the weapon's curve is used
    #[serde(default)]
    pub curve: Option<u32>,
}

/// How an attribute scales a damage type in an element correct row
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ElementCorrectRate {
    /// Use the weapon's own scaling value
    WeaponScaling,
    /// Fixed scaling percentage, multiplied by the reinforcement rate
    Override(f64),
}

/// Data value meaning "use the weapon's own scaling"
const WEAPON_SCALING_SENTINEL: f64 = -1.0;

/// Which attributes scale which damage types for skill bullets
///
/// A rate of `-1` in the data defers to the weapon's scaling. Any other
/// negative rate is malformed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttackElementCorrect {
    pub id: u32,
    #[serde(default)]
    pub rates: AttributeMap<DamageTypeMap<Option<f64>>>,
}

impl AttackElementCorrect {
    /// Scaling rule for an (attribute, damage type) pair, `None` if it does not apply
    pub fn rate(
        &self,
        attribute: Attribute,
        damage_type: DamageType,
    ) -> Result<Option<ElementCorrectRate>, CalcError> {
        let Some(value) = *self.rates.get(attribute).get(damage_type) else {
            return Ok(None);
        };
        if (value - WEAPON_SCALING_SENTINEL).abs() < f64::EPSILON {
            Ok(Some(ElementCorrectRate::WeaponScaling))
        } else if value >= 0.0 {
            Ok(Some(ElementCorrectRate::Override(value)))
        } else {
            Err(CalcError::InvalidElementCorrectRate {
                id: self.id,
                attribute,
                damage_type,
                value,
            })
        }
    }

    /// Check every rate is either `-1` or non-negative
    pub fn validate(&self) -> Result<(), CalcError> {
        for &attribute in Attribute::all() {
            for &damage_type in DamageType::all() {
                self.rate(attribute, damage_type)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_element_correct() {
        let correct: AttackElementCorrect = toml::from_str(
            r#"
id = 7
[rates.strength]
physical = -1
[rates.faith]
holy = 60
"#,
        )
        .unwrap();

        assert_eq!(
            correct.rate(Attribute::Strength, DamageType::Physical),
            Ok(Some(ElementCorrectRate::WeaponScaling))
        );
        assert_eq!(
            correct.rate(Attribute::Faith, DamageType::Holy),
            Ok(Some(ElementCorrectRate::Override(60.0)))
        );
        assert_eq!(correct.rate(Attribute::Faith, DamageType::Physical), Ok(None));
        assert_eq!(correct.rate(Attribute::Arcane, DamageType::Holy), Ok(None));
        assert!(correct.validate().is_ok());
    }

    #[test]
    fn test_other_negative_rate_is_malformed() {
        let correct: AttackElementCorrect = toml::from_str(
            r#"
id = 8
[rates.dexterity]
fire = -0.5
"#,
        )
        .unwrap();

        assert!(matches!(
            correct.rate(Attribute::Dexterity, DamageType::Fire),
            Err(CalcError::InvalidElementCorrectRate {
                id: 8,
                attribute: Attribute::Dexterity,
                damage_type: DamageType::Fire,
                ..
            })
        ));
        assert!(correct.validate().is_err());
    }

    #[test]
    fn test_parse_skill() {
        let ash: AshOfWar = toml::from_str(
            r#"
id = 1
name = "Lion's Claw"
weapon_types = ["greatsword", "colossal_sword"]

[[attacks]]
name = "Flip"
motion = { physical = 300 }
"#,
        )
        .unwrap();
        assert_eq!(ash.attacks.len(), 1);
        assert_eq!(ash.attacks[0].motion.physical, Some(300.0));
        assert!(ash.default_affinity.is_none());
    }
}
