//! Inventory consistency and session-transfer core for the station world.
//!
//! Everything in this crate is storage-agnostic: algorithms run against the
//! traits in [`store`], which the SpacetimeDB module implements over its
//! tables and [`memory::MemoryStore`] implements in process.

pub mod binding;
pub mod catalog;
pub mod constants;
pub mod error;
pub mod ledger;
pub mod memory;
pub mod records;
pub mod session;
pub mod store;

pub use binding::{BindingConfig, EquipSlot};
pub use constants::{
    DEFAULT_STARTING_MONEY, EQUIPPED_QUANTITY, FIRST_HELD_SLOT, NEW_ITEM_QUANTITY,
    SETTINGS_ROW_ID, UNLIMITED_OWNED_ITEMS,
};
pub use error::{CoreError, CoreResult, RecordKind};
pub use ledger::ItemRemoval;
pub use memory::MemoryStore;
pub use records::{
    Armor, Consumable, Gear, HeldItem, Item, ItemId, ItemRef, Player, PlayerId, SessionStatus,
    Station, Train, Weapon,
};
pub use session::{SessionConfig, SessionState};
pub use store::{GearIdSource, GearStore, ItemStore, PlayerStore, WorldObjectStore};
