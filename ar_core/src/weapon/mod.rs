//! Weapon data - entries, affinities and reinforcement

mod entry;
mod reinforce;

pub use entry::{
    AffinityData, AttackElement, ScalingEntry, SpellScalingData, StatusElement, WeaponEntry,
};
pub use reinforce::{ReinforceRates, ReinforceTable};

use std::collections::BTreeMap;

/// Weapon registry keyed by name, iterated in name order
#[derive(Debug, Clone, Default)]
pub struct WeaponTable {
    weapons: BTreeMap<String, WeaponEntry>,
}

impl WeaponTable {
    pub fn new() -> Self {
        WeaponTable {
            weapons: BTreeMap::new(),
        }
    }

    pub fn from_entries(entries: impl IntoIterator<Item = WeaponEntry>) -> Self {
        let mut table = Self::new();
        for entry in entries {
            table.register(entry);
        }
        table
    }

    pub fn register(&mut self, entry: WeaponEntry) {
        self.weapons.insert(entry.name.clone(), entry);
    }

    pub fn get(&self, name: &str) -> Option<&WeaponEntry> {
        self.weapons.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &WeaponEntry> {
        self.weapons.values()
    }

    pub fn len(&self) -> usize {
        self.weapons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weapons.is_empty()
    }
}
