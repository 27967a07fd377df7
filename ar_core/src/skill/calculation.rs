//! Skill damage calculation - Ash of War attacks on a weapon

use super::compatibility::is_compatible;
use super::definition::{AshOfWar, AttackElementCorrect, ElementCorrectRate, SkillAttack};
use super::result::AttackResult;
use crate::attack_rating::{compute_ar, ArOptions, ArResult};
use crate::config::GameData;
use crate::error::CalcError;
use crate::types::{Affinity, Attribute, DamageType, DamageTypeMap, PlayerStats};
use crate::weapon::{AffinityData, ReinforceRates, WeaponEntry};

/// Bullet damage grows from 1x at +0 to this plus one at max upgrade
const PWU_FACTOR: f64 = 3.0;

/// Resolve every attack of a skill used with a weapon
///
/// Unknown skills, incompatible weapon/affinity pairings and weapons
/// without attack rating at this upgrade level yield an empty list.
/// A skill attack referencing a missing element correct row, or carrying an
/// override rate with no curve to evaluate it on, is an error.
pub fn compute_skill_damage(
    data: &GameData,
    skill_id: u32,
    weapon: &WeaponEntry,
    affinity: Affinity,
    upgrade_level: u32,
    stats: &PlayerStats,
    options: &ArOptions,
) -> Result<Vec<AttackResult>, CalcError> {
    let Some(ash) = data.skills.get(&skill_id) else {
        return Ok(Vec::new());
    };
    if !is_compatible(ash, weapon, affinity) {
        return Ok(Vec::new());
    }
    let Some(ar) = compute_ar(data, weapon, affinity, upgrade_level, stats, options) else {
        return Ok(Vec::new());
    };
    let Some(affinity_data) = weapon.affinity(affinity) else {
        return Ok(Vec::new());
    };
    let Some(rates) = data
        .reinforcements
        .get(affinity_data.reinforce_type_id, ar.upgrade_level)
    else {
        return Ok(Vec::new());
    };

    let context = SkillContext {
        data,
        ash,
        weapon,
        affinity: affinity_data,
        rates,
        ar: &ar,
    };

    ash.attacks.iter().map(|attack| context.resolve(attack)).collect()
}

/// Look up the weapon by name and resolve the skill's attacks
pub fn compute_skill_damage_by_name(
    data: &GameData,
    skill_id: u32,
    weapon_name: &str,
    affinity: Affinity,
    upgrade_level: u32,
    stats: &PlayerStats,
    options: &ArOptions,
) -> Result<Vec<AttackResult>, CalcError> {
    match data.weapons.get(weapon_name) {
        Some(weapon) => compute_skill_damage(
            data,
            skill_id,
            weapon,
            affinity,
            upgrade_level,
            stats,
            options,
        ),
        None => Ok(Vec::new()),
    }
}

/// Upgrade multiplier for bullet damage: 1 + 3 × (level / max level)
pub fn pwu_multiplier(weapon: &WeaponEntry, upgrade_level: u32) -> f64 {
    1.0 + PWU_FACTOR * weapon.upgrade_progress(upgrade_level)
}

struct SkillContext<'a> {
    data: &'a GameData,
    ash: &'a AshOfWar,
    weapon: &'a WeaponEntry,
    affinity: &'a AffinityData,
    rates: &'a ReinforceRates,
    ar: &'a ArResult,
}

impl SkillContext<'_> {
    fn resolve(&self, attack: &SkillAttack) -> Result<AttackResult, CalcError> {
        let motion = DamageTypeMap::from_fn(|dt| self.motion_damage(attack, dt));
        let bullet = self.bullet_damage(attack)?;
        let stat_bonus = DamageTypeMap::from_fn(|dt| self.stat_bonus(attack, dt));

        Ok(AttackResult::new(
            attack.name.clone(),
            attack.attack_attribute.unwrap_or(self.weapon.attack_attribute),
            motion,
            bullet,
            stat_bonus,
        ))
    }

    /// Weapon attack rating of a damage type times the motion value
    fn motion_damage(&self, attack: &SkillAttack, damage_type: DamageType) -> Option<f64> {
        let motion_value = (*attack.motion.get(damage_type))?;
        let weapon_damage = self.ar.damage.get(damage_type).as_ref()?;
        Some(weapon_damage.total * motion_value / 100.0)
    }

    fn bullet_damage(&self, attack: &SkillAttack) -> Result<DamageTypeMap<Option<f64>>, CalcError> {
        if attack.bullet.iter().all(|(_, flat)| flat.is_none()) {
            return Ok(DamageTypeMap::default());
        }

        let correct = match &attack.scaling {
            Some(scaling) => Some(
                self.data
                    .element_corrects
                    .get(&scaling.element_correct)
                    .ok_or_else(|| CalcError::UnknownElementCorrect {
                        skill: self.ash.id,
                        attack: attack.name.clone(),
                        id: scaling.element_correct,
                    })?,
            ),
            None => None,
        };

        let pwu = pwu_multiplier(self.weapon, self.ar.upgrade_level);
        let mut damage = DamageTypeMap::default();
        for &dt in DamageType::all() {
            let Some(flat) = *attack.bullet.get(dt) else {
                continue;
            };
            let scaling = match correct {
                Some(correct) => self.bullet_scaling(attack, correct, dt)?,
                None => 0.0,
            };
            *damage.get_mut(dt) = Some(flat * pwu * (1.0 + scaling));
        }
        Ok(damage)
    }

    /// Σ saturation × effective rate over the attributes the row enables
    ///
    /// An override rate needs a curve, either from the attack or from the
    /// weapon's own scaling of that attribute and damage type.
    fn bullet_scaling(
        &self,
        attack: &SkillAttack,
        correct: &AttackElementCorrect,
        damage_type: DamageType,
    ) -> Result<f64, CalcError> {
        let curve_override = attack.scaling.and_then(|s| s.curve);
        let mut total = 0.0;

        for &attribute in Attribute::all() {
            let Some(rate) = correct.rate(attribute, damage_type)? else {
                continue;
            };
            let effective_rate = match rate {
                ElementCorrectRate::WeaponScaling => {
                    match self.affinity.scaled_scaling_value(damage_type, attribute, self.rates) {
                        Some(value) => value,
                        None => continue,
                    }
                }
                ElementCorrectRate::Override(value) => value * self.rates.correct.get(attribute),
            };
            let curve = curve_override
                .or_else(|| self.weapon_curve(damage_type, attribute))
                .ok_or_else(|| CalcError::MissingBulletCurve {
                    skill: self.ash.id,
                    attack: attack.name.clone(),
                    attribute,
                    damage_type,
                })?;
            let level = *self.ar.effective_stats.get(attribute);
            match self.data.curves.saturation(curve, level) {
                Some(saturation) => total += saturation * effective_rate / 100.0,
                None => {
                    tracing::warn!(
                        skill = self.ash.id,
                        attack = %attack.name,
                        curve,
                        "bullet scaling references an unknown curve"
                    );
                }
            }
        }

        Ok(total)
    }

    /// Bonus attack rating from attribute points, per contributing attribute
    fn stat_bonus(&self, attack: &SkillAttack, damage_type: DamageType) -> Option<f64> {
        let points = attack.stat_point_bonus.as_ref()?;
        let base = self.affinity.scaled_attack_base(damage_type, self.rates)?;

        let mut bonus = None;
        for &attribute in Attribute::all() {
            let bonus_points = *points.get(attribute);
            let Some(curve) = self.weapon_curve(damage_type, attribute) else {
                continue;
            };
            let level = *self.ar.effective_stats.get(attribute);
            let saturation = self.data.curves.saturation(curve, level).unwrap_or(0.0);
            if saturation > 0.0 && bonus_points > 0.0 {
                *bonus.get_or_insert(0.0) += base * saturation * (bonus_points / 100.0);
            }
        }
        bonus
    }

    fn weapon_curve(&self, damage_type: DamageType, attribute: Attribute) -> Option<u32> {
        self.affinity
            .attack
            .get(damage_type)
            .as_ref()
            .and_then(|element| element.scaling.get(attribute).as_ref())
            .map(|entry| entry.curve)
    }
}
