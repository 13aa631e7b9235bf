//! Session lifecycle: connect, disconnect and in-session identity updates.
//!
//! A player record is created the first time an identity connects and is
//! never deleted afterwards. Connecting and disconnecting only move the
//! record between `Active` and `LoggedOut`; name, money and inventory are
//! carried over verbatim.

use crate::{
    CoreError, CoreResult, DEFAULT_STARTING_MONEY, RecordKind,
    records::{Player, SessionStatus},
    store::PlayerStore,
};

/// Observable session state of an identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// The identity has never connected.
    Unknown,
    Active,
    LoggedOut,
}

impl From<SessionStatus> for SessionState {
    fn from(status: SessionStatus) -> Self {
        match status {
            SessionStatus::Active => SessionState::Active,
            SessionStatus::LoggedOut => SessionState::LoggedOut,
        }
    }
}

/// Settings applied when a player record is first created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub starting_money: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            starting_money: DEFAULT_STARTING_MONEY,
        }
    }
}

pub fn session_state<S>(store: &S, identity: S::Identity) -> SessionState
where
    S: PlayerStore + ?Sized,
{
    store
        .find_player(identity)
        .map_or(SessionState::Unknown, |player| player.status.into())
}

/// Fetch the active record for `identity`, failing if it is absent or logged out.
pub fn active_player<S>(store: &S, identity: S::Identity) -> CoreResult<Player<S::Identity>>
where
    S: PlayerStore + ?Sized,
{
    store
        .find_player(identity)
        .filter(Player::is_active)
        .ok_or_else(|| CoreError::not_found(RecordKind::Player, identity))
}

/// Bring `identity` into the `Active` state.
///
/// - Unknown: a new record is created with an empty name and inventory.
/// - LoggedOut: the stored record is restored unchanged.
/// - Active: nothing changes (a second connection for the same identity).
pub fn connect<S>(
    store: &mut S,
    identity: S::Identity,
    config: &SessionConfig,
) -> CoreResult<Player<S::Identity>>
where
    S: PlayerStore + ?Sized,
{
    let Some(player) = store.find_player(identity) else {
        log::info!("[Connect] No logged out player found, creating new player.");
        return Ok(store.insert_player(Player::new(identity, config.starting_money)));
    };

    match player.status {
        SessionStatus::LoggedOut => {
            log::info!("[Connect] Found logged out player, moving to active players.");
            Ok(store.update_player(Player {
                status: SessionStatus::Active,
                ..player
            }))
        }
        SessionStatus::Active => {
            log::warn!("[Connect] Player {identity} is already active.");
            Ok(player)
        }
    }
}

/// Move the active record for `identity` to `LoggedOut`.
///
/// A disconnect without an active record means the caller's connection
/// bookkeeping is broken, so it is reported as an invariant violation.
pub fn disconnect<S>(store: &mut S, identity: S::Identity) -> CoreResult<Player<S::Identity>>
where
    S: PlayerStore + ?Sized,
{
    let player = match store.find_player(identity) {
        Some(player) if player.is_active() => player,
        _ => {
            log::error!("[Disconnect] Player {identity} not found");
            return Err(CoreError::invariant(format!(
                "disconnect for {identity} without an active player"
            )));
        }
    };

    let player = store.update_player(Player {
        status: SessionStatus::LoggedOut,
        ..player
    });
    log::info!("[Disconnect] Player moved to logged out players.");
    Ok(player)
}

/// Set the display name of the caller's active record.
pub fn enter_game<S>(
    store: &mut S,
    identity: S::Identity,
    name: impl Into<String>,
) -> CoreResult<Player<S::Identity>>
where
    S: PlayerStore + ?Sized,
{
    let player = active_player(&*store, identity).inspect_err(|_| {
        log::warn!("[EnterGame] Player {identity} not found");
    })?;
    let player = store.update_player(Player {
        name: name.into(),
        ..player
    });
    log::info!("[EnterGame] Player {identity} entered as {:?}", player.name);
    Ok(player)
}
