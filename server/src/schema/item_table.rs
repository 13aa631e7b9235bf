use shared::Item;
use spacetimedb::*;

/// The shared item catalog.
///
/// One row per item kind; `quantity` counts its logical copies and is never
/// stored at zero. `id` is always stored as given, `0` included: `add_item`
/// passes the caller's id and gear registration passes its own.
#[table(name = item, public)]
pub struct ItemRow {
    #[primary_key]
    pub id: u32,
    pub name: String,
    pub quantity: u32,
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            quantity: row.quantity,
        }
    }
}

impl From<Item> for ItemRow {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            quantity: item.quantity,
        }
    }
}
