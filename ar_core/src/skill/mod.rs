//! Skills - Ash of War attacks combining motion and bullet damage

mod calculation;
mod compatibility;
mod definition;
mod result;

pub use calculation::{compute_skill_damage, compute_skill_damage_by_name, pwu_multiplier};
pub use compatibility::{is_compatible, supports_affinity, supports_weapon_type};
pub use definition::{
    AshOfWar, AttackElementCorrect, BulletScaling, ElementCorrectRate, SkillAttack,
};
pub use result::{total_damage, AttackResult};
