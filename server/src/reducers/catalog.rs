//! Catalog reducers: gear (weapons, armor, consumables) and world objects.
//!
//! Gear reducers always touch two tables: the specialized one and `item`.
//! Both writes share the reducer transaction, so a failure in either leaves
//! neither behind.

use crate::store::ModuleStore;
use shared::{catalog, Armor, Consumable, Station, Train, Weapon};
use spacetimedb::ReducerContext;

/// Insert a weapon and register it as an item.
#[spacetimedb::reducer]
pub fn add_weapon(ctx: &ReducerContext, name: String, attack: u32) -> Result<(), String> {
    let weapon = Weapon {
        id: 0,
        name,
        attack,
    };
    catalog::register_gear(&mut ModuleStore::new(ctx), weapon)
        .map(|_| ())
        .map_err(|e| e.to_string())
}

/// Delete a weapon and one copy of its item.
#[spacetimedb::reducer]
pub fn delete_weapon(ctx: &ReducerContext, id: u32) -> Result<(), String> {
    catalog::retire_gear::<_, Weapon>(&mut ModuleStore::new(ctx), id)
        .map(|_| ())
        .map_err(|e| e.to_string())
}

/// Insert an armor piece and register it as an item.
#[spacetimedb::reducer]
pub fn add_armor(ctx: &ReducerContext, name: String, defence: u32) -> Result<(), String> {
    let armor = Armor {
        id: 0,
        name,
        defence,
    };
    catalog::register_gear(&mut ModuleStore::new(ctx), armor)
        .map(|_| ())
        .map_err(|e| e.to_string())
}

#[spacetimedb::reducer]
pub fn delete_armor(ctx: &ReducerContext, id: u32) -> Result<(), String> {
    catalog::retire_gear::<_, Armor>(&mut ModuleStore::new(ctx), id)
        .map(|_| ())
        .map_err(|e| e.to_string())
}

/// Insert a consumable and register it as an item.
#[spacetimedb::reducer]
pub fn add_consumable(ctx: &ReducerContext, name: String, value: u32) -> Result<(), String> {
    let consumable = Consumable {
        id: 0,
        name,
        value,
    };
    catalog::register_gear(&mut ModuleStore::new(ctx), consumable)
        .map(|_| ())
        .map_err(|e| e.to_string())
}

#[spacetimedb::reducer]
pub fn delete_consumable(ctx: &ReducerContext, id: u32) -> Result<(), String> {
    catalog::retire_gear::<_, Consumable>(&mut ModuleStore::new(ctx), id)
        .map(|_| ())
        .map_err(|e| e.to_string())
}

/// Add a train between two stations. Station ids are not checked.
#[spacetimedb::reducer]
pub fn add_train(
    ctx: &ReducerContext,
    id: String,
    from_station_id: String,
    to_station_id: String,
    money: u32,
) -> Result<(), String> {
    let train = Train {
        id,
        from_station_id,
        to_station_id,
        money,
    };
    catalog::add_train(&mut ModuleStore::new(ctx), train)
        .map(|_| ())
        .map_err(|e| e.to_string())
}

#[spacetimedb::reducer]
pub fn delete_train(ctx: &ReducerContext, id: String) -> Result<(), String> {
    catalog::delete_train(&mut ModuleStore::new(ctx), &id)
        .map(|_| ())
        .map_err(|e| e.to_string())
}

/// Add a station with an empty inventory.
#[spacetimedb::reducer]
pub fn add_station(ctx: &ReducerContext, id: String, name: String) -> Result<(), String> {
    catalog::add_station(&mut ModuleStore::new(ctx), Station::new(id, name))
        .map(|_| ())
        .map_err(|e| e.to_string())
}

#[spacetimedb::reducer]
pub fn delete_station(ctx: &ReducerContext, id: String) -> Result<(), String> {
    catalog::delete_station(&mut ModuleStore::new(ctx), &id)
        .map(|_| ())
        .map_err(|e| e.to_string())
}
