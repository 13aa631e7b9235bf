//! Player-facing reducers: naming, inventory binding and equipment.
//!
//! All of these act on an online Player row. A logged-out or unknown
//! identity is rejected before anything is written.

use crate::{schema::ModuleSettings, store::ModuleStore};
use shared::{binding, session, EquipSlot};
use spacetimedb::{Identity, ReducerContext};

/// Set the caller's display name.
#[spacetimedb::reducer]
pub fn enter_game(ctx: &ReducerContext, name: String) -> Result<(), String> {
    session::enter_game(&mut ModuleStore::new(ctx), ctx.sender, name)
        .map(|_| ())
        .map_err(|e| e.to_string())
}

/// Copy a catalog item into `player_identity`'s inventory.
///
/// The catalog quantity is not changed.
#[spacetimedb::reducer]
pub fn add_existing_item_to_player(
    ctx: &ReducerContext,
    player_identity: Identity,
    item_id: u32,
) -> Result<(), String> {
    let config = ModuleSettings::load(ctx).binding_config();
    binding::add_existing_item_to_player(
        &mut ModuleStore::new(ctx),
        player_identity,
        item_id,
        &config,
    )
    .map(|_| ())
    .map_err(|e| e.to_string())
}

/// Copy a catalog item into the caller's consumables.
#[spacetimedb::reducer]
pub fn add_consumable_to_player(ctx: &ReducerContext, item_id: u32) -> Result<(), String> {
    let config = ModuleSettings::load(ctx).binding_config();
    binding::add_consumable_to_player(&mut ModuleStore::new(ctx), ctx.sender, item_id, &config)
        .map(|_| ())
        .map_err(|e| e.to_string())
}

/// Drop the copy held in `slot` from the caller's inventory or consumables.
#[spacetimedb::reducer]
pub fn remove_item_from_player(ctx: &ReducerContext, slot: u32) -> Result<(), String> {
    binding::remove_item_from_player(&mut ModuleStore::new(ctx), ctx.sender, slot)
        .map(|_| ())
        .map_err(|e| e.to_string())
}

/// Replace the caller's equipped weapon.
#[spacetimedb::reducer]
pub fn equip_weapon(ctx: &ReducerContext, item_id: u32) -> Result<(), String> {
    binding::equip_weapon(&mut ModuleStore::new(ctx), ctx.sender, item_id)
        .map(|_| ())
        .map_err(|e| e.to_string())
}

/// Replace the caller's equipped armor.
#[spacetimedb::reducer]
pub fn equip_armor(ctx: &ReducerContext, item_id: u32) -> Result<(), String> {
    binding::equip_armor(&mut ModuleStore::new(ctx), ctx.sender, item_id)
        .map(|_| ())
        .map_err(|e| e.to_string())
}

#[spacetimedb::reducer]
pub fn unequip_weapon(ctx: &ReducerContext) -> Result<(), String> {
    binding::unequip(&mut ModuleStore::new(ctx), ctx.sender, EquipSlot::Weapon)
        .map(|_| ())
        .map_err(|e| e.to_string())
}

#[spacetimedb::reducer]
pub fn unequip_armor(ctx: &ReducerContext) -> Result<(), String> {
    binding::unequip(&mut ModuleStore::new(ctx), ctx.sender, EquipSlot::Armor)
        .map(|_| ())
        .map_err(|e| e.to_string())
}
