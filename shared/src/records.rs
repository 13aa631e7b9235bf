//! Catalog and player records as the core sees them.
//!
//! These are plain values. The module's table rows convert to and from them
//! at the storage boundary, so nothing here depends on the database host.

use crate::{EQUIPPED_QUANTITY, FIRST_HELD_SLOT, NEW_ITEM_QUANTITY, RecordKind};

/// Key shared by catalog items and the specialized records that mirror them.
pub type ItemId = u32;

/// Auto-assigned secondary key of a player record.
pub type PlayerId = u32;

/// A stackable kind of item in the shared catalog.
///
/// `quantity` counts how many logical copies of this kind exist. A stored
/// item always has `quantity >= 1`; reaching zero deletes the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub quantity: u32,
}

impl Item {
    pub fn new(id: ItemId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            quantity: NEW_ITEM_QUANTITY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Weapon {
    pub id: ItemId,
    pub name: String,
    pub attack: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Armor {
    pub id: ItemId,
    pub name: String,
    pub defence: u32,
}

/// Something a player can use up (healing, buffs).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Consumable {
    pub id: ItemId,
    pub name: String,
    pub value: u32,
}

/// A specialized catalog record that is mirrored by a companion [`Item`]
/// with the same id.
///
/// Ids come from the shared gear sequence at registration time; whatever id
/// the caller put on the record is replaced.
pub trait Gear: Clone {
    const KIND: RecordKind;

    fn id(&self) -> ItemId;
    fn name(&self) -> &str;
    fn with_id(self, id: ItemId) -> Self;
}

impl Gear for Weapon {
    const KIND: RecordKind = RecordKind::Weapon;

    fn id(&self) -> ItemId {
        self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn with_id(self, id: ItemId) -> Self {
        Self { id, ..self }
    }
}

impl Gear for Armor {
    const KIND: RecordKind = RecordKind::Armor;

    fn id(&self) -> ItemId {
        self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn with_id(self, id: ItemId) -> Self {
        Self { id, ..self }
    }
}

impl Gear for Consumable {
    const KIND: RecordKind = RecordKind::Consumable;

    fn id(&self) -> ItemId {
        self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn with_id(self, id: ItemId) -> Self {
        Self { id, ..self }
    }
}

/// A value copy of a catalog item held by a player or a station.
///
/// The copy is taken at binding time. Later catalog changes never reach it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeldItem {
    /// Per-holder sequence number, unique within one holder.
    pub slot: u32,
    pub item_id: ItemId,
    pub name: String,
    pub quantity: u32,
}

impl HeldItem {
    pub fn copy_of(item: &Item, slot: u32) -> Self {
        Self {
            slot,
            item_id: item.id,
            name: item.name.clone(),
            quantity: item.quantity,
        }
    }
}

/// What an equipment slot points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemRef {
    pub id: ItemId,
    pub quantity: u32,
}

impl ItemRef {
    pub const fn equipped(id: ItemId) -> Self {
        Self {
            id,
            quantity: EQUIPPED_QUANTITY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    pub id: String,
    pub name: String,
    pub items: Vec<HeldItem>,
}

impl Station {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            items: Vec::new(),
        }
    }
}

/// A train between two stations. Station ids are not checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Train {
    pub id: String,
    pub from_station_id: String,
    pub to_station_id: String,
    pub money: u32,
}

/// Where a player's record currently lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Active,
    LoggedOut,
}

/// A player record, keyed by the caller identity `I`.
///
/// Exactly one record exists per identity once it has connected. Session
/// transitions only flip `status`; they never touch the accumulated state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player<I> {
    pub identity: I,
    /// `0` on insert asks the store to auto-assign.
    pub player_id: PlayerId,
    pub name: String,
    pub money: u32,
    pub status: SessionStatus,
    pub items: Vec<HeldItem>,
    pub consumables: Vec<HeldItem>,
    pub equipped_weapon: Option<ItemRef>,
    pub equipped_armor: Option<ItemRef>,
}

impl<I> Player<I> {
    /// A fresh, active player with no name and an empty inventory.
    pub fn new(identity: I, starting_money: u32) -> Self {
        Self {
            identity,
            player_id: 0,
            name: String::new(),
            money: starting_money,
            status: SessionStatus::Active,
            items: Vec::new(),
            consumables: Vec::new(),
            equipped_weapon: None,
            equipped_armor: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == SessionStatus::Active
    }

    /// Number of copies the player holds across owned items and consumables.
    pub fn held_count(&self) -> usize {
        self.items.len() + self.consumables.len()
    }

    /// Next free slot number, unique across both held lists.
    pub fn next_slot(&self) -> u32 {
        self.items
            .iter()
            .chain(self.consumables.iter())
            .map(|held| held.slot)
            .max()
            .map_or(FIRST_HELD_SLOT, |slot| slot + 1)
    }
}
