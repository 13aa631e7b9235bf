//! In-process store implementing every storage contract.
//!
//! Used to drive the core without a database host. [`MemoryStore::transact`]
//! gives an operation the same commit-or-discard behavior the module gets
//! from its reducer transaction.

use crate::{
    CoreResult,
    records::{Armor, Consumable, Item, ItemId, Player, Station, Train, Weapon},
    store::{GearIdSource, GearStore, ItemStore, PlayerStore, WorldObjectStore},
};
use std::collections::BTreeMap;

/// Identity type used by [`MemoryStore`].
pub type MemoryIdentity = u64;

/// Auto-increment sequence mirroring a database `auto_inc` column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Sequence(u32);

impl Sequence {
    /// Next value, or `None` once `u32::MAX` has been handed out.
    fn next(&mut self) -> Option<u32> {
        self.0 = self.0.checked_add(1)?;
        Some(self.0)
    }

    /// Returns `requested` if non-zero (advancing past it), else the next value.
    fn assign(&mut self, requested: u32) -> u32 {
        if requested != 0 {
            self.0 = self.0.max(requested);
            return requested;
        }
        self.0 += 1;
        self.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    items: BTreeMap<ItemId, Item>,
    weapons: BTreeMap<ItemId, Weapon>,
    armors: BTreeMap<ItemId, Armor>,
    consumables: BTreeMap<ItemId, Consumable>,
    stations: BTreeMap<String, Station>,
    trains: BTreeMap<String, Train>,
    players: BTreeMap<MemoryIdentity, Player<MemoryIdentity>>,
    gear_ids: Sequence,
    player_ids: Sequence,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `op` as one unit: on `Err` every write it made is discarded.
    pub fn transact<T>(&mut self, op: impl FnOnce(&mut Self) -> CoreResult<T>) -> CoreResult<T> {
        let snapshot = self.clone();
        op(self).inspect_err(|_| *self = snapshot)
    }

    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    pub fn players(&self) -> impl Iterator<Item = &Player<MemoryIdentity>> {
        self.players.values()
    }

    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.stations.values()
    }

    pub fn trains(&self) -> impl Iterator<Item = &Train> {
        self.trains.values()
    }
}

impl ItemStore for MemoryStore {
    fn find_item(&self, id: ItemId) -> Option<Item> {
        self.items.get(&id).cloned()
    }

    fn insert_item(&mut self, item: Item) -> Item {
        self.items.insert(item.id, item.clone());
        item
    }

    fn update_item(&mut self, item: Item) -> Item {
        self.items.insert(item.id, item.clone());
        item
    }

    fn delete_item(&mut self, id: ItemId) -> bool {
        self.items.remove(&id).is_some()
    }
}

macro_rules! gear_table {
    ($gear:ty, $rows:ident) => {
        impl GearStore<$gear> for MemoryStore {
            fn insert_gear(&mut self, gear: $gear) -> $gear {
                self.$rows.insert(gear.id, gear.clone());
                gear
            }

            fn find_gear(&self, id: ItemId) -> Option<$gear> {
                self.$rows.get(&id).cloned()
            }

            fn delete_gear(&mut self, id: ItemId) -> bool {
                self.$rows.remove(&id).is_some()
            }
        }
    };
}

gear_table!(Weapon, weapons);
gear_table!(Armor, armors);
gear_table!(Consumable, consumables);

impl GearIdSource for MemoryStore {
    fn next_gear_id(&mut self) -> Option<ItemId> {
        self.gear_ids.next()
    }

    fn gear_id_taken(&self, id: ItemId) -> bool {
        self.items.contains_key(&id)
            || self.weapons.contains_key(&id)
            || self.armors.contains_key(&id)
            || self.consumables.contains_key(&id)
    }
}

impl WorldObjectStore for MemoryStore {
    fn find_station(&self, id: &str) -> Option<Station> {
        self.stations.get(id).cloned()
    }

    fn insert_station(&mut self, station: Station) -> Station {
        self.stations.insert(station.id.clone(), station.clone());
        station
    }

    fn delete_station(&mut self, id: &str) -> bool {
        self.stations.remove(id).is_some()
    }

    fn find_train(&self, id: &str) -> Option<Train> {
        self.trains.get(id).cloned()
    }

    fn insert_train(&mut self, train: Train) -> Train {
        self.trains.insert(train.id.clone(), train.clone());
        train
    }

    fn delete_train(&mut self, id: &str) -> bool {
        self.trains.remove(id).is_some()
    }
}

impl PlayerStore for MemoryStore {
    type Identity = MemoryIdentity;

    fn find_player(&self, identity: MemoryIdentity) -> Option<Player<MemoryIdentity>> {
        self.players.get(&identity).cloned()
    }

    fn insert_player(&mut self, mut player: Player<MemoryIdentity>) -> Player<MemoryIdentity> {
        player.player_id = self.player_ids.assign(player.player_id);
        self.players.insert(player.identity, player.clone());
        player
    }

    fn update_player(&mut self, player: Player<MemoryIdentity>) -> Player<MemoryIdentity> {
        self.players.insert(player.identity, player.clone());
        player
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CoreError, RecordKind, catalog};

    #[test]
    fn sequence_auto_assigns_and_respects_explicit_ids() {
        let mut seq = Sequence::default();
        assert_eq!(seq.assign(0), 1);
        assert_eq!(seq.assign(0), 2);
        assert_eq!(seq.assign(10), 10);
        assert_eq!(seq.assign(0), 11);
        assert_eq!(seq.assign(3), 3);
        assert_eq!(seq.assign(0), 12);
    }

    #[test]
    fn sequence_stops_at_max() {
        let mut seq = Sequence(u32::MAX - 1);
        assert_eq!(seq.next(), Some(u32::MAX));
        assert_eq!(seq.next(), None);
    }

    #[test]
    fn gear_id_taken_spans_items_and_every_gear_table() {
        let mut store = MemoryStore::new();
        store.insert_item(Item::new(1, "Rope"));
        store.insert_gear(Armor {
            id: 2,
            name: "Mail".into(),
            defence: 4,
        });
        store.insert_gear(Consumable {
            id: 3,
            name: "Potion".into(),
            value: 25,
        });

        assert!(store.gear_id_taken(1));
        assert!(store.gear_id_taken(2));
        assert!(store.gear_id_taken(3));
        assert!(!store.gear_id_taken(4));
    }

    #[test]
    fn exhausted_gear_sequence_rejects_registration() {
        let mut store = MemoryStore {
            gear_ids: Sequence(u32::MAX),
            ..MemoryStore::default()
        };
        let before = store.clone();

        let err = store
            .transact(|tx| {
                catalog::register_gear(
                    tx,
                    Weapon {
                        id: 0,
                        name: "Sword".into(),
                        attack: 10,
                    },
                )
            })
            .unwrap_err();

        assert!(matches!(err, CoreError::InvariantViolation(_)));
        assert_eq!(store, before);
    }

    #[test]
    fn player_ids_are_unique() {
        let mut store = MemoryStore::new();
        let a = store.insert_player(Player::new(1, 0));
        let b = store.insert_player(Player::new(2, 0));
        assert_ne!(a.player_id, b.player_id);
    }

    #[test]
    fn transact_commits_on_ok() {
        let mut store = MemoryStore::new();

        let item = store
            .transact(|tx| Ok(tx.insert_item(Item::new(1, "Rope"))))
            .unwrap();

        assert_eq!(store.find_item(1), Some(item));
    }

    #[test]
    fn transact_discards_writes_on_err() {
        let mut store = MemoryStore::new();

        let result: CoreResult<()> = store.transact(|tx| {
            tx.insert_item(Item::new(1, "Rope"));
            Err(CoreError::not_found(RecordKind::Item, 2))
        });

        assert!(result.is_err());
        assert_eq!(store, MemoryStore::new());
    }
}
