//! Core types shared by every calculation

use serde::{Deserialize, Serialize};

/// Player attribute that can carry weapon scaling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Strength,
    Dexterity,
    Intelligence,
    Faith,
    Arcane,
}

impl Attribute {
    /// All scaling attributes, in the fixed precedence order used for
    /// enumeration and optimizer tie-breaks
    pub fn all() -> &'static [Attribute] {
        &[
            Attribute::Strength,
            Attribute::Dexterity,
            Attribute::Intelligence,
            Attribute::Faith,
            Attribute::Arcane,
        ]
    }

    /// Short label as shown on the in-game status screen
    pub fn short_name(self) -> &'static str {
        match self {
            Attribute::Strength => "Str",
            Attribute::Dexterity => "Dex",
            Attribute::Intelligence => "Int",
            Attribute::Faith => "Fai",
            Attribute::Arcane => "Arc",
        }
    }
}

/// Attack power damage type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageType {
    Physical,
    Magic,
    Fire,
    Lightning,
    Holy,
}

impl DamageType {
    pub fn all() -> &'static [DamageType] {
        &[
            DamageType::Physical,
            DamageType::Magic,
            DamageType::Fire,
            DamageType::Lightning,
            DamageType::Holy,
        ]
    }
}

/// Status effect buildup type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusType {
    Poison,
    ScarletRot,
    BloodLoss,
    Frostbite,
    Sleep,
    Madness,
}

impl StatusType {
    pub fn all() -> &'static [StatusType] {
        &[
            StatusType::Poison,
            StatusType::ScarletRot,
            StatusType::BloodLoss,
            StatusType::Frostbite,
            StatusType::Sleep,
            StatusType::Madness,
        ]
    }
}

/// Spell school a catalyst can boost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpellType {
    Sorcery,
    Incantation,
}

/// Weapon affinity variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Affinity {
    Standard,
    Heavy,
    Keen,
    Quality,
    Fire,
    FlameArt,
    Lightning,
    Sacred,
    Magic,
    Cold,
    Poison,
    Blood,
    Occult,
    /// Unique weapons that cannot be infused
    Unique,
}

impl Affinity {
    pub fn all() -> &'static [Affinity] {
        &[
            Affinity::Standard,
            Affinity::Heavy,
            Affinity::Keen,
            Affinity::Quality,
            Affinity::Fire,
            Affinity::FlameArt,
            Affinity::Lightning,
            Affinity::Sacred,
            Affinity::Magic,
            Affinity::Cold,
            Affinity::Poison,
            Affinity::Blood,
            Affinity::Occult,
            Affinity::Unique,
        ]
    }
}

/// Weapon class, as used by requirement, two-handing and skill rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponType {
    Dagger,
    StraightSword,
    Greatsword,
    ColossalSword,
    ThrustingSword,
    HeavyThrustingSword,
    CurvedSword,
    CurvedGreatsword,
    Katana,
    Twinblade,
    Axe,
    Greataxe,
    Hammer,
    GreatHammer,
    Flail,
    ColossalWeapon,
    Spear,
    GreatSpear,
    Halberd,
    Reaper,
    Whip,
    Fist,
    Claw,
    LightBow,
    Bow,
    Greatbow,
    Crossbow,
    Ballista,
    GlintstoneStaff,
    SacredSeal,
    SmallShield,
    MediumShield,
    Greatshield,
    Torch,
}

impl WeaponType {
    /// Fist weapons never receive the two-handing strength bonus
    pub fn is_fist(self) -> bool {
        matches!(self, WeaponType::Fist)
    }

    /// Bows and ballistae are always wielded in two hands
    pub fn is_always_two_handed(self) -> bool {
        matches!(
            self,
            WeaponType::LightBow | WeaponType::Bow | WeaponType::Greatbow | WeaponType::Ballista
        )
    }

    pub fn is_catalyst(self) -> bool {
        matches!(self, WeaponType::GlintstoneStaff | WeaponType::SacredSeal)
    }
}

/// Physical attack attribute, selects which physical defense applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttackAttribute {
    #[default]
    Standard,
    Strike,
    Slash,
    Pierce,
}

/// One value per scaling attribute
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AttributeMap<T> {
    #[serde(default)]
    pub strength: T,
    #[serde(default)]
    pub dexterity: T,
    #[serde(default)]
    pub intelligence: T,
    #[serde(default)]
    pub faith: T,
    #[serde(default)]
    pub arcane: T,
}

impl<T> AttributeMap<T> {
    pub fn get(&self, attribute: Attribute) -> &T {
        match attribute {
            Attribute::Strength => &self.strength,
            Attribute::Dexterity => &self.dexterity,
            Attribute::Intelligence => &self.intelligence,
            Attribute::Faith => &self.faith,
            Attribute::Arcane => &self.arcane,
        }
    }

    pub fn get_mut(&mut self, attribute: Attribute) -> &mut T {
        match attribute {
            Attribute::Strength => &mut self.strength,
            Attribute::Dexterity => &mut self.dexterity,
            Attribute::Intelligence => &mut self.intelligence,
            Attribute::Faith => &mut self.faith,
            Attribute::Arcane => &mut self.arcane,
        }
    }

    /// Build a map by evaluating `f` for every attribute
    pub fn from_fn(mut f: impl FnMut(Attribute) -> T) -> Self {
        AttributeMap {
            strength: f(Attribute::Strength),
            dexterity: f(Attribute::Dexterity),
            intelligence: f(Attribute::Intelligence),
            faith: f(Attribute::Faith),
            arcane: f(Attribute::Arcane),
        }
    }

    /// Iterate in attribute precedence order
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, &T)> {
        Attribute::all().iter().map(move |&a| (a, self.get(a)))
    }
}

/// One value per damage type
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DamageTypeMap<T> {
    #[serde(default)]
    pub physical: T,
    #[serde(default)]
    pub magic: T,
    #[serde(default)]
    pub fire: T,
    #[serde(default)]
    pub lightning: T,
    #[serde(default)]
    pub holy: T,
}

impl<T> DamageTypeMap<T> {
    pub fn get(&self, damage_type: DamageType) -> &T {
        match damage_type {
            DamageType::Physical => &self.physical,
            DamageType::Magic => &self.magic,
            DamageType::Fire => &self.fire,
            DamageType::Lightning => &self.lightning,
            DamageType::Holy => &self.holy,
        }
    }

    pub fn get_mut(&mut self, damage_type: DamageType) -> &mut T {
        match damage_type {
            DamageType::Physical => &mut self.physical,
            DamageType::Magic => &mut self.magic,
            DamageType::Fire => &mut self.fire,
            DamageType::Lightning => &mut self.lightning,
            DamageType::Holy => &mut self.holy,
        }
    }

    pub fn from_fn(mut f: impl FnMut(DamageType) -> T) -> Self {
        DamageTypeMap {
            physical: f(DamageType::Physical),
            magic: f(DamageType::Magic),
            fire: f(DamageType::Fire),
            lightning: f(DamageType::Lightning),
            holy: f(DamageType::Holy),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (DamageType, &T)> {
        DamageType::all().iter().map(move |&d| (d, self.get(d)))
    }
}

/// One value per status effect
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StatusMap<T> {
    #[serde(default)]
    pub poison: T,
    #[serde(default)]
    pub scarlet_rot: T,
    #[serde(default)]
    pub blood_loss: T,
    #[serde(default)]
    pub frostbite: T,
    #[serde(default)]
    pub sleep: T,
    #[serde(default)]
    pub madness: T,
}

impl<T> StatusMap<T> {
    pub fn get(&self, status: StatusType) -> &T {
        match status {
            StatusType::Poison => &self.poison,
            StatusType::ScarletRot => &self.scarlet_rot,
            StatusType::BloodLoss => &self.blood_loss,
            StatusType::Frostbite => &self.frostbite,
            StatusType::Sleep => &self.sleep,
            StatusType::Madness => &self.madness,
        }
    }

    pub fn from_fn(mut f: impl FnMut(StatusType) -> T) -> Self {
        StatusMap {
            poison: f(StatusType::Poison),
            scarlet_rot: f(StatusType::ScarletRot),
            blood_loss: f(StatusType::BloodLoss),
            frostbite: f(StatusType::Frostbite),
            sleep: f(StatusType::Sleep),
            madness: f(StatusType::Madness),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (StatusType, &T)> {
        StatusType::all().iter().map(move |&s| (s, self.get(s)))
    }
}

/// Player attribute levels
///
/// Levels are nominally 1-99 but every calculation accepts larger values.
pub type PlayerStats = AttributeMap<u32>;

impl PlayerStats {
    /// All five attributes at the same level
    pub fn uniform(level: u32) -> Self {
        AttributeMap::from_fn(|_| level)
    }

    /// Sum of all five attribute levels
    pub fn total(&self) -> u32 {
        self.iter().map(|(_, v)| *v).sum()
    }
}
