use shared::{
    BindingConfig, SessionConfig, DEFAULT_STARTING_MONEY, SETTINGS_ROW_ID, UNLIMITED_OWNED_ITEMS,
};
use spacetimedb::*;

/// Module-wide tuning shared by server and clients.
///
/// This is intended to be a single-row table (`id = 1`) re-seeded by `init`.
/// Reducers read it once per call and hand the values to the core as plain
/// config structs.
#[table(name = module_settings, public)]
pub struct ModuleSettings {
    /// Unique id (primary key). Use a single row with `id = 1`.
    #[primary_key]
    pub id: u32,

    /// Money granted to a player the first time their identity connects.
    pub starting_money: u32,

    /// Cap on owned items plus consumables per player. `0` means unlimited.
    pub max_owned_items: u32,
}

impl Default for ModuleSettings {
    fn default() -> Self {
        Self {
            id: SETTINGS_ROW_ID,
            starting_money: DEFAULT_STARTING_MONEY,
            max_owned_items: UNLIMITED_OWNED_ITEMS,
        }
    }
}

impl ModuleSettings {
    /// Replace the settings row with defaults.
    pub fn seed(ctx: &ReducerContext) {
        ctx.db.module_settings().id().delete(SETTINGS_ROW_ID);
        ctx.db.module_settings().insert(ModuleSettings::default());
    }

    /// Current settings, falling back to defaults if the row is missing.
    pub fn load(ctx: &ReducerContext) -> Self {
        ctx.db
            .module_settings()
            .id()
            .find(SETTINGS_ROW_ID)
            .unwrap_or_default()
    }

    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            starting_money: self.starting_money,
        }
    }

    pub fn binding_config(&self) -> BindingConfig {
        BindingConfig {
            max_owned_items: self.max_owned_items,
        }
    }
}
