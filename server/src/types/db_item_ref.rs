use shared::ItemRef;

/// Contents of an equipment slot: an item id with a quantity (always 1 today).
#[derive(spacetimedb::SpacetimeType, Debug, Clone, Copy, PartialEq)]
pub struct DbItemRef {
    pub id: u32,
    pub quantity: u32,
}

impl From<DbItemRef> for ItemRef {
    fn from(v: DbItemRef) -> Self {
        Self {
            id: v.id,
            quantity: v.quantity,
        }
    }
}

impl From<ItemRef> for DbItemRef {
    fn from(v: ItemRef) -> Self {
        Self {
            id: v.id,
            quantity: v.quantity,
        }
    }
}
