use crate::store::ModuleStore;
use shared::ledger;
use spacetimedb::ReducerContext;

/// Add one copy of item `id`, creating it with `name` if it does not exist.
#[spacetimedb::reducer]
pub fn add_item(ctx: &ReducerContext, id: u32, name: String) -> Result<(), String> {
    ledger::add_item(&mut ModuleStore::new(ctx), id, name)
        .map(|_| ())
        .map_err(|e| e.to_string())
}

/// Remove one copy of item `id`; the row is deleted with its last copy.
#[spacetimedb::reducer]
pub fn delete_item(ctx: &ReducerContext, id: u32) -> Result<(), String> {
    ledger::delete_item(&mut ModuleStore::new(ctx), id)
        .map(|_| ())
        .map_err(|e| e.to_string())
}
