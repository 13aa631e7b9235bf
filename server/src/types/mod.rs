mod db_held_item;
mod db_item_ref;

pub use db_held_item::DbHeldItem;
pub use db_item_ref::DbItemRef;
