use shared::HeldItem;

/// A value copy of a catalog item stored inside a player or station row.
///
/// Semantics:
/// - `slot` is unique within the holding row.
/// - Copies are detached from the `item` table; catalog edits never reach them.
#[derive(spacetimedb::SpacetimeType, Debug, Clone, PartialEq)]
pub struct DbHeldItem {
    pub slot: u32,
    pub item_id: u32,
    pub name: String,
    pub quantity: u32,
}

impl From<DbHeldItem> for HeldItem {
    fn from(v: DbHeldItem) -> Self {
        Self {
            slot: v.slot,
            item_id: v.item_id,
            name: v.name,
            quantity: v.quantity,
        }
    }
}

impl From<HeldItem> for DbHeldItem {
    fn from(v: HeldItem) -> Self {
        Self {
            slot: v.slot,
            item_id: v.item_id,
            name: v.name,
            quantity: v.quantity,
        }
    }
}
