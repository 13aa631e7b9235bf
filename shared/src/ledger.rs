//! Inventory ledger: quantity-counted accounting over the shared catalog.
//!
//! Every logical copy of an item kind collapses into one row with a count.
//! Adding increments or creates; deleting decrements or removes. A row is
//! never left at quantity zero.

use crate::{
    CoreError, CoreResult, NEW_ITEM_QUANTITY, RecordKind,
    records::{Item, ItemId},
    store::ItemStore,
};

/// Outcome of [`delete_item`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemRemoval {
    /// The count went down and the row stays, holding the new quantity.
    Decremented(Item),
    /// The last copy was removed together with its row.
    Removed(Item),
}

/// Add one copy of item `id`, creating the row with `name` if it is new.
///
/// `name` is ignored when the item already exists. Returns the stored item.
pub fn add_item<S>(store: &mut S, id: ItemId, name: impl Into<String>) -> CoreResult<Item>
where
    S: ItemStore + ?Sized,
{
    let Some(mut item) = store.find_item(id) else {
        let item = store.insert_item(Item::new(id, name));
        log::info!("[AddItem] Inserted new item with ID {id}");
        return Ok(item);
    };

    item.quantity = item
        .quantity
        .checked_add(NEW_ITEM_QUANTITY)
        .ok_or_else(|| CoreError::invariant(format!("Item {id} quantity overflow")))?;
    let item = store.update_item(item);
    log::info!(
        "[AddItem] Increased quantity of item {id}. Current quantity: {}",
        item.quantity
    );
    Ok(item)
}

/// Remove one copy of item `id`, deleting the row on its last copy.
pub fn delete_item<S>(store: &mut S, id: ItemId) -> CoreResult<ItemRemoval>
where
    S: ItemStore + ?Sized,
{
    let Some(mut item) = store.find_item(id) else {
        log::warn!("[DeleteItem] Item {id} does not exist!");
        return Err(CoreError::not_found(RecordKind::Item, id));
    };

    if item.quantity > NEW_ITEM_QUANTITY {
        item.quantity -= NEW_ITEM_QUANTITY;
        let item = store.update_item(item);
        log::info!(
            "[DeleteItem] Decreased quantity of item {id}. Current quantity: {}",
            item.quantity
        );
        return Ok(ItemRemoval::Decremented(item));
    }

    store.delete_item(id);
    log::info!("[DeleteItem] Item {id} fully removed!");
    Ok(ItemRemoval::Removed(item))
}
