use crate::types::{DbHeldItem, DbItemRef};
use shared::{Player, SessionStatus};
use spacetimedb::*;

/// Player account data persisted across sessions.
///
/// One row per identity, created on first connect and never deleted.
/// `online` is the session tag: connect and disconnect flip it and leave
/// every other column untouched, so a reconnect restores the same record.
///
/// The table is private; clients read it through the `my_player` and
/// `online_player` views.
#[table(name = player)]
pub struct PlayerRow {
    #[primary_key]
    pub identity: Identity,

    #[unique]
    #[auto_inc]
    pub player_id: u32,

    pub name: String,
    pub money: u32,

    /// True while the identity has an open connection.
    #[index(btree)]
    pub online: bool,

    pub items: Vec<DbHeldItem>,
    pub consumables: Vec<DbHeldItem>,
    pub equipped_weapon: Option<DbItemRef>,
    pub equipped_armor: Option<DbItemRef>,
}

impl From<PlayerRow> for Player<Identity> {
    fn from(row: PlayerRow) -> Self {
        Self {
            identity: row.identity,
            player_id: row.player_id,
            name: row.name,
            money: row.money,
            status: if row.online {
                SessionStatus::Active
            } else {
                SessionStatus::LoggedOut
            },
            items: row.items.into_iter().map(Into::into).collect(),
            consumables: row.consumables.into_iter().map(Into::into).collect(),
            equipped_weapon: row.equipped_weapon.map(Into::into),
            equipped_armor: row.equipped_armor.map(Into::into),
        }
    }
}

impl From<Player<Identity>> for PlayerRow {
    fn from(player: Player<Identity>) -> Self {
        Self {
            identity: player.identity,
            player_id: player.player_id,
            name: player.name,
            money: player.money,
            online: player.status == SessionStatus::Active,
            items: player.items.into_iter().map(Into::into).collect(),
            consumables: player.consumables.into_iter().map(Into::into).collect(),
            equipped_weapon: player.equipped_weapon.map(Into::into),
            equipped_armor: player.equipped_armor.map(Into::into),
        }
    }
}
