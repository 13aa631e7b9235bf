mod reducers {
    pub mod catalog;
    mod connection;
    pub mod items;
    pub mod player;
}
pub mod schema;
mod store;
pub mod types;
mod views;

use crate::schema::ModuleSettings;
use spacetimedb::{reducer, ReducerContext};

#[reducer(init)]
pub fn init(ctx: &ReducerContext) {
    log::info!("[Init] Initializing...");
    ModuleSettings::seed(ctx);
}
