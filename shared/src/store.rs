//! Storage contracts the core runs against.
//!
//! Each operation receives one store value for its whole duration and treats
//! it as a consistent, exclusive snapshot. Atomicity (commit or discard) is the
//! implementor's job, not the core's.

use crate::records::{Gear, Item, ItemId, Player, Station, Train};
use std::fmt;

/// The shared item catalog.
pub trait ItemStore {
    fn find_item(&self, id: ItemId) -> Option<Item>;

    /// Insert a new item under exactly `item.id`; `0` is an ordinary key.
    /// The caller guarantees the id is not in use.
    fn insert_item(&mut self, item: Item) -> Item;

    /// Replace the stored item with the same id.
    fn update_item(&mut self, item: Item) -> Item;

    /// Returns whether a row was removed.
    fn delete_item(&mut self, id: ItemId) -> bool;
}

/// Specialized catalog records (weapons, armor, consumables).
pub trait GearStore<G: Gear> {
    /// Insert `gear` under its own id. The caller guarantees the id is free.
    fn insert_gear(&mut self, gear: G) -> G;

    fn find_gear(&self, id: ItemId) -> Option<G>;

    /// Returns whether a row was removed.
    fn delete_gear(&mut self, id: ItemId) -> bool;
}

/// One id sequence shared by every gear table.
///
/// Gear ids double as companion item ids, so a candidate is only usable when
/// no item row and no gear row of any kind holds it.
pub trait GearIdSource {
    /// Next value of the shared sequence, or `None` once it is exhausted.
    fn next_gear_id(&mut self) -> Option<ItemId>;

    /// Whether `id` is held by an item or by any weapon, armor or consumable.
    fn gear_id_taken(&self, id: ItemId) -> bool;
}

/// Stations and trains, keyed by caller-supplied strings.
pub trait WorldObjectStore {
    fn find_station(&self, id: &str) -> Option<Station>;
    fn insert_station(&mut self, station: Station) -> Station;
    fn delete_station(&mut self, id: &str) -> bool;

    fn find_train(&self, id: &str) -> Option<Train>;
    fn insert_train(&mut self, train: Train) -> Train;
    fn delete_train(&mut self, id: &str) -> bool;
}

/// Player records keyed by caller identity.
pub trait PlayerStore {
    type Identity: Copy + Eq + fmt::Display + fmt::Debug;

    fn find_player(&self, identity: Self::Identity) -> Option<Player<Self::Identity>>;

    /// Insert a new player, auto-assigning `player_id` when it is `0`.
    fn insert_player(&mut self, player: Player<Self::Identity>) -> Player<Self::Identity>;

    /// Replace the stored player with the same identity.
    fn update_player(&mut self, player: Player<Self::Identity>) -> Player<Self::Identity>;
}
