//! Catalog operations for specialized gear and world objects.
//!
//! Gear (weapons, armor, consumables) is registered in two steps: the
//! specialized record is inserted, then its companion [`Item`] is added to
//! the ledger under the same id. Retiring gear runs the same steps in
//! reverse. Both steps belong to one operation, so a failure in the second
//! step discards the first.
//!
//! Gear ids come from one sequence shared by all specialized tables. A
//! candidate already held by an item or by any gear record is skipped, so a
//! freshly registered companion always starts at quantity one under the
//! gear's own name.

use crate::{
    CoreError, CoreResult, RecordKind,
    ledger::{self, ItemRemoval},
    records::{Gear, Item, ItemId, Station, Train},
    store::{GearIdSource, GearStore, ItemStore, WorldObjectStore},
};

/// Insert `gear` under a fresh shared id and register its companion item.
///
/// The id already on `gear` is ignored. Returns the stored gear.
pub fn register_gear<S, G>(store: &mut S, gear: G) -> CoreResult<G>
where
    S: ItemStore + GearStore<G> + GearIdSource,
    G: Gear,
{
    let id = allocate_gear_id(store)?;
    let gear = store.insert_gear(gear.with_id(id));
    log::info!("[Add{}] Inserted {} with ID {id}", G::KIND, gear.name());
    ledger::add_item(store, id, gear.name())?;
    Ok(gear)
}

/// Draw from the shared sequence until an id nobody holds comes up.
fn allocate_gear_id<S>(store: &mut S) -> CoreResult<ItemId>
where
    S: GearIdSource + ?Sized,
{
    loop {
        let Some(id) = store.next_gear_id() else {
            log::error!("[AddGear] Gear id sequence exhausted");
            return Err(CoreError::invariant("Gear id sequence exhausted"));
        };
        if !store.gear_id_taken(id) {
            return Ok(id);
        }
        log::debug!("[AddGear] Skipping ID {id}, already in use");
    }
}

/// Delete the gear with `id` and remove one copy of its companion item.
pub fn retire_gear<S, G>(store: &mut S, id: ItemId) -> CoreResult<(G, ItemRemoval)>
where
    S: ItemStore + GearStore<G>,
    G: Gear,
{
    let Some(gear) = <S as GearStore<G>>::find_gear(store, id) else {
        log::warn!("[Delete{}] {} ID {id} not found!", G::KIND, G::KIND);
        return Err(CoreError::not_found(G::KIND, id));
    };

    <S as GearStore<G>>::delete_gear(store, id);
    let removal = ledger::delete_item(store, id)?;
    log::info!("[Delete{}] Removed {} with ID {id}", G::KIND, gear.name());
    Ok((gear, removal))
}

/// Look up the companion item registered for gear `id`.
pub fn companion_item<S>(store: &S, id: ItemId) -> Option<Item>
where
    S: ItemStore + ?Sized,
{
    store.find_item(id)
}

pub fn add_station<S>(store: &mut S, station: Station) -> CoreResult<Station>
where
    S: WorldObjectStore + ?Sized,
{
    if store.find_station(&station.id).is_some() {
        log::warn!("[AddStation] Station {} already exists!", station.id);
        return Err(CoreError::already_exists(RecordKind::Station, &station.id));
    }

    let station = store.insert_station(Station {
        items: Vec::new(),
        ..station
    });
    log::info!("[AddStation] Inserted station {} ({})", station.id, station.name);
    Ok(station)
}

pub fn delete_station<S>(store: &mut S, id: &str) -> CoreResult<Station>
where
    S: WorldObjectStore + ?Sized,
{
    let Some(station) = store.find_station(id) else {
        log::warn!("[DeleteStation] Station {id} does not exist!");
        return Err(CoreError::not_found(RecordKind::Station, id));
    };
    store.delete_station(id);
    log::info!("[DeleteStation] Station {id} removed");
    Ok(station)
}

/// Insert a train. `from_station_id` and `to_station_id` are not validated.
pub fn add_train<S>(store: &mut S, train: Train) -> CoreResult<Train>
where
    S: WorldObjectStore + ?Sized,
{
    if store.find_train(&train.id).is_some() {
        log::warn!("[AddTrain] Train {} already exists!", train.id);
        return Err(CoreError::already_exists(RecordKind::Train, &train.id));
    }

    let train = store.insert_train(train);
    log::info!(
        "[AddTrain] Inserted train {} from {} to {}",
        train.id,
        train.from_station_id,
        train.to_station_id
    );
    Ok(train)
}

pub fn delete_train<S>(store: &mut S, id: &str) -> CoreResult<Train>
where
    S: WorldObjectStore + ?Sized,
{
    let Some(train) = store.find_train(id) else {
        log::warn!("[DeleteTrain] Train {id} does not exist!");
        return Err(CoreError::not_found(RecordKind::Train, id));
    };
    store.delete_train(id);
    log::info!("[DeleteTrain] Train {id} removed");
    Ok(train)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Armor, Consumable, MemoryStore, Weapon};

    fn sword() -> Weapon {
        Weapon {
            id: 0,
            name: "Sword".into(),
            attack: 10,
        }
    }

    #[test]
    fn register_weapon_creates_companion_item() {
        let mut store = MemoryStore::new();

        let weapon = register_gear(&mut store, sword()).unwrap();

        assert_ne!(weapon.id, 0);
        let item = companion_item(&store, weapon.id).unwrap();
        assert_eq!(item.name, "Sword");
        assert_eq!(item.quantity, 1);
    }

    #[test]
    fn retire_weapon_removes_both_records() {
        let mut store = MemoryStore::new();
        let weapon = register_gear(&mut store, sword()).unwrap();

        let (retired, removal) = retire_gear::<_, Weapon>(&mut store, weapon.id).unwrap();

        assert_eq!(retired, weapon);
        assert!(matches!(removal, ItemRemoval::Removed(_)));
        assert_eq!(GearStore::<Weapon>::find_gear(&store, weapon.id), None);
        assert_eq!(store.find_item(weapon.id), None);
    }

    #[test]
    fn retire_unknown_gear_is_not_found() {
        let mut store = MemoryStore::new();

        let err = retire_gear::<_, Armor>(&mut store, 3).unwrap_err();

        assert_eq!(err, CoreError::not_found(RecordKind::Armor, 3));
    }

    #[test]
    fn retire_with_missing_companion_rolls_back() {
        let mut store = MemoryStore::new();
        let potion = register_gear(
            &mut store,
            Consumable {
                id: 0,
                name: "Potion".into(),
                value: 25,
            },
        )
        .unwrap();
        store.delete_item(potion.id);
        let before = store.clone();

        let err = store
            .transact(|tx| retire_gear::<_, Consumable>(tx, potion.id))
            .unwrap_err();

        assert_eq!(err, CoreError::not_found(RecordKind::Item, potion.id));
        assert_eq!(store, before);
        assert!(GearStore::<Consumable>::find_gear(&store, potion.id).is_some());
    }

    #[test]
    fn gear_kinds_draw_distinct_ids_with_own_companions() {
        let mut store = MemoryStore::new();
        let weapon = register_gear(&mut store, sword()).unwrap();
        let armor = register_gear(
            &mut store,
            Armor {
                id: 0,
                name: "Mail".into(),
                defence: 4,
            },
        )
        .unwrap();

        assert_ne!(weapon.id, armor.id);
        let sword_item = companion_item(&store, weapon.id).unwrap();
        assert_eq!((sword_item.name.as_str(), sword_item.quantity), ("Sword", 1));
        let mail_item = companion_item(&store, armor.id).unwrap();
        assert_eq!((mail_item.name.as_str(), mail_item.quantity), ("Mail", 1));

        retire_gear::<_, Armor>(&mut store, armor.id).unwrap();
        assert_eq!(store.find_item(weapon.id).map(|i| i.quantity), Some(1));
        assert_eq!(store.find_item(armor.id), None);
    }

    #[test]
    fn registration_skips_ids_held_by_plain_items() {
        let mut store = MemoryStore::new();
        ledger::add_item(&mut store, 1, "Rope").unwrap();
        ledger::add_item(&mut store, 2, "Lamp").unwrap();

        let weapon = register_gear(&mut store, sword()).unwrap();

        assert_eq!(weapon.id, 3);
        let item = companion_item(&store, weapon.id).unwrap();
        assert_eq!((item.name.as_str(), item.quantity), ("Sword", 1));
        let rope = store.find_item(1).unwrap();
        assert_eq!((rope.name.as_str(), rope.quantity), ("Rope", 1));
    }

    #[test]
    fn caller_supplied_gear_id_is_replaced() {
        let mut store = MemoryStore::new();
        ledger::add_item(&mut store, 9, "Lantern").unwrap();

        let weapon = register_gear(
            &mut store,
            Weapon {
                id: 9,
                ..sword()
            },
        )
        .unwrap();

        assert_ne!(weapon.id, 9);
        assert_eq!(store.find_item(9).map(|i| i.quantity), Some(1));
    }

    #[test]
    fn station_starts_with_empty_inventory() {
        let mut store = MemoryStore::new();

        let station = add_station(&mut store, Station::new("north", "North Yard")).unwrap();

        assert!(station.items.is_empty());
        assert_eq!(store.find_station("north"), Some(station));
    }

    #[test]
    fn duplicate_station_is_rejected() {
        let mut store = MemoryStore::new();
        add_station(&mut store, Station::new("north", "North Yard")).unwrap();

        let err = add_station(&mut store, Station::new("north", "Other")).unwrap_err();

        assert_eq!(err, CoreError::already_exists(RecordKind::Station, "north"));
        assert_eq!(store.find_station("north").map(|s| s.name), Some("North Yard".into()));
    }

    #[test]
    fn train_ignores_unknown_stations() {
        let mut store = MemoryStore::new();
        let train = Train {
            id: "t1".into(),
            from_station_id: "nowhere".into(),
            to_station_id: "elsewhere".into(),
            money: 50,
        };

        add_train(&mut store, train.clone()).unwrap();
        assert_eq!(delete_train(&mut store, "t1").unwrap(), train);
        assert_eq!(
            delete_train(&mut store, "t1").unwrap_err(),
            CoreError::not_found(RecordKind::Train, "t1")
        );
    }

    #[test]
    fn delete_unknown_station_is_not_found() {
        let mut store = MemoryStore::new();

        let err = delete_station(&mut store, "south").unwrap_err();

        assert_eq!(err, CoreError::not_found(RecordKind::Station, "south"));
    }
}
