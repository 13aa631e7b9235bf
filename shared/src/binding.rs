//! Equipment and ownership binding between catalog items and players.
//!
//! Binding never touches catalog quantities. Owned items and consumables are
//! value copies taken at binding time; equipment slots hold a fresh
//! reference that replaces whatever was there before.

use crate::{
    CoreError, CoreResult, RecordKind, UNLIMITED_OWNED_ITEMS,
    records::{HeldItem, ItemId, ItemRef, Player},
    session::active_player,
    store::{ItemStore, PlayerStore},
};

/// Limits applied when copying items into a player's inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BindingConfig {
    /// Cap on owned items plus consumables. `0` disables the cap.
    pub max_owned_items: u32,
}

impl Default for BindingConfig {
    fn default() -> Self {
        Self {
            max_owned_items: UNLIMITED_OWNED_ITEMS,
        }
    }
}

impl BindingConfig {
    fn check_capacity<I: std::fmt::Display>(&self, player: &Player<I>) -> CoreResult<()> {
        if self.max_owned_items == UNLIMITED_OWNED_ITEMS {
            return Ok(());
        }
        let held = u32::try_from(player.held_count()).unwrap_or(u32::MAX);
        if held >= self.max_owned_items {
            return Err(CoreError::InventoryFull {
                key: player.identity.to_string(),
                limit: self.max_owned_items,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EquipSlot {
    Weapon,
    Armor,
}

impl EquipSlot {
    fn slot_mut<I>(self, player: &mut Player<I>) -> &mut Option<ItemRef> {
        match self {
            EquipSlot::Weapon => &mut player.equipped_weapon,
            EquipSlot::Armor => &mut player.equipped_armor,
        }
    }
}

#[derive(Copy, Clone)]
enum HeldList {
    Items,
    Consumables,
}

/// Copy catalog item `item_id` onto the end of `identity`'s owned items.
pub fn add_existing_item_to_player<S>(
    store: &mut S,
    identity: S::Identity,
    item_id: ItemId,
    config: &BindingConfig,
) -> CoreResult<HeldItem>
where
    S: ItemStore + PlayerStore,
{
    bind_copy(store, identity, item_id, config, HeldList::Items)
}

/// Copy catalog item `item_id` onto the end of `identity`'s consumables.
pub fn add_consumable_to_player<S>(
    store: &mut S,
    identity: S::Identity,
    item_id: ItemId,
    config: &BindingConfig,
) -> CoreResult<HeldItem>
where
    S: ItemStore + PlayerStore,
{
    bind_copy(store, identity, item_id, config, HeldList::Consumables)
}

fn bind_copy<S>(
    store: &mut S,
    identity: S::Identity,
    item_id: ItemId,
    config: &BindingConfig,
    list: HeldList,
) -> CoreResult<HeldItem>
where
    S: ItemStore + PlayerStore,
{
    let mut player = active_player(&*store, identity).inspect_err(|_| {
        log::warn!("[AddItemToPlayer] Player {identity} not found!");
    })?;
    let Some(item) = store.find_item(item_id) else {
        log::warn!("[AddItemToPlayer] Global item {item_id} not found!");
        return Err(CoreError::not_found(RecordKind::Item, item_id));
    };
    config.check_capacity(&player)?;

    let held = HeldItem::copy_of(&item, player.next_slot());
    match list {
        HeldList::Items => player.items.push(held.clone()),
        HeldList::Consumables => player.consumables.push(held.clone()),
    }
    store.update_player(player);
    log::info!(
        "[AddItemToPlayer] Player {identity} received item {item_id} in slot {}",
        held.slot
    );
    Ok(held)
}

/// Remove the copy in `slot` from either of the caller's held lists.
pub fn remove_item_from_player<S>(
    store: &mut S,
    identity: S::Identity,
    slot: u32,
) -> CoreResult<HeldItem>
where
    S: PlayerStore + ?Sized,
{
    let mut player = active_player(&*store, identity)?;

    let removed = [&mut player.items, &mut player.consumables]
        .into_iter()
        .find_map(|list| {
            let index = list.iter().position(|held| held.slot == slot)?;
            Some(list.remove(index))
        });
    let Some(removed) = removed else {
        log::warn!("[RemoveItemFromPlayer] Player {identity} holds nothing in slot {slot}");
        return Err(CoreError::not_found(RecordKind::HeldItem, slot));
    };

    store.update_player(player);
    log::info!("[RemoveItemFromPlayer] Player {identity} dropped slot {slot}");
    Ok(removed)
}

/// Put `item_id` in `identity`'s equipment `slot`. Returns what was replaced.
pub fn equip<S>(
    store: &mut S,
    identity: S::Identity,
    slot: EquipSlot,
    item_id: ItemId,
) -> CoreResult<Option<ItemRef>>
where
    S: PlayerStore + ?Sized,
{
    set_slot(store, identity, slot, Some(ItemRef::equipped(item_id)))
}

/// Clear `identity`'s equipment `slot`. Returns what was removed.
pub fn unequip<S>(
    store: &mut S,
    identity: S::Identity,
    slot: EquipSlot,
) -> CoreResult<Option<ItemRef>>
where
    S: PlayerStore + ?Sized,
{
    set_slot(store, identity, slot, None)
}

pub fn equip_weapon<S>(
    store: &mut S,
    identity: S::Identity,
    item_id: ItemId,
) -> CoreResult<Option<ItemRef>>
where
    S: PlayerStore + ?Sized,
{
    equip(store, identity, EquipSlot::Weapon, item_id)
}

pub fn equip_armor<S>(
    store: &mut S,
    identity: S::Identity,
    item_id: ItemId,
) -> CoreResult<Option<ItemRef>>
where
    S: PlayerStore + ?Sized,
{
    equip(store, identity, EquipSlot::Armor, item_id)
}

fn set_slot<S>(
    store: &mut S,
    identity: S::Identity,
    slot: EquipSlot,
    value: Option<ItemRef>,
) -> CoreResult<Option<ItemRef>>
where
    S: PlayerStore + ?Sized,
{
    let mut player = active_player(&*store, identity).inspect_err(|_| {
        log::warn!("[Equip{slot:?}] Player {identity} not found");
    })?;
    let previous = std::mem::replace(slot.slot_mut(&mut player), value);
    store.update_player(player);
    log::info!("[Equip{slot:?}] Player {identity} slot now {value:?}, was {previous:?}");
    Ok(previous)
}
