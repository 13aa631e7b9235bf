//! Connection lifecycle reducers.
//!
//! These reducers move the caller's Player row between the online and
//! logged-out states as clients connect to, and disconnect from, the module.
//!
//! Behavior
//! - On connect:
//!   - First connection for an identity creates a Player row seeded from
//!     `module_settings`.
//!   - A logged-out row is restored as-is (name, money, inventory, equipment).
//! - On disconnect:
//!   - The online row is marked logged out. Nothing else changes.
//!   - A disconnect with no online row is an invariant violation and the
//!     reducer fails, so the host discards the transaction.

use crate::{schema::ModuleSettings, store::ModuleStore};
use shared::session;
use spacetimedb::ReducerContext;

/// Fired when a client connects to the module.
#[spacetimedb::reducer(client_connected)]
pub fn identity_connected(ctx: &ReducerContext) -> Result<(), String> {
    log::info!("[Connect] Client connected: {}", ctx.sender);

    let config = ModuleSettings::load(ctx).session_config();
    session::connect(&mut ModuleStore::new(ctx), ctx.sender, &config)
        .map(|_| ())
        .map_err(|e| e.to_string())
}

/// Fired when a client disconnects from the module.
#[spacetimedb::reducer(client_disconnected)]
pub fn identity_disconnected(ctx: &ReducerContext) -> Result<(), String> {
    log::info!("[Disconnect] Client disconnected: {}", ctx.sender);

    session::disconnect(&mut ModuleStore::new(ctx), ctx.sender)
        .map(|_| ())
        .map_err(|e| e.to_string())
}
