//! Specialized catalog tables. Every row is mirrored by an `item` row with the
//! same id while it exists. Ids come from `gear_sequence`, never from the
//! tables themselves, so no two gear rows of any kind share one.

use shared::{Armor, Consumable, Weapon};
use spacetimedb::*;

#[table(name = weapon, public)]
pub struct WeaponRow {
    #[primary_key]
    pub id: u32,
    pub name: String,
    pub attack: u32,
}

#[table(name = armor, public)]
pub struct ArmorRow {
    #[primary_key]
    pub id: u32,
    pub name: String,
    pub defence: u32,
}

/// Consumables (healing, buffs). `value` is the effect magnitude.
#[table(name = consumable, public)]
pub struct ConsumableRow {
    #[primary_key]
    pub id: u32,
    pub name: String,
    pub value: u32,
}

impl From<WeaponRow> for Weapon {
    fn from(row: WeaponRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            attack: row.attack,
        }
    }
}

impl From<Weapon> for WeaponRow {
    fn from(weapon: Weapon) -> Self {
        Self {
            id: weapon.id,
            name: weapon.name,
            attack: weapon.attack,
        }
    }
}

impl From<ArmorRow> for Armor {
    fn from(row: ArmorRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            defence: row.defence,
        }
    }
}

impl From<Armor> for ArmorRow {
    fn from(armor: Armor) -> Self {
        Self {
            id: armor.id,
            name: armor.name,
            defence: armor.defence,
        }
    }
}

impl From<ConsumableRow> for Consumable {
    fn from(row: ConsumableRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            value: row.value,
        }
    }
}

impl From<Consumable> for ConsumableRow {
    fn from(consumable: Consumable) -> Self {
        Self {
            id: consumable.id,
            name: consumable.name,
            value: consumable.value,
        }
    }
}
