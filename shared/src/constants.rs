/// Quantity a catalog item is created with, and the step applied by every
/// add/delete on the ledger.
pub const NEW_ITEM_QUANTITY: u32 = 1;

/// Quantity recorded on an equipped-slot reference.
pub const EQUIPPED_QUANTITY: u32 = 1;

/// Money a brand-new player starts with unless module settings override it.
pub const DEFAULT_STARTING_MONEY: u32 = 0;

/// `max_owned_items` value meaning "no cap".
pub const UNLIMITED_OWNED_ITEMS: u32 = 0;

/// First slot number handed out to a copy held by a player.
pub const FIRST_HELD_SLOT: u32 = 1;

/// Primary key of the single-row module settings table.
pub const SETTINGS_ROW_ID: u32 = 1;
