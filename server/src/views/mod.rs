//! Client-facing views over the private `player` table.

use crate::schema::{player__view, PlayerRow};
use spacetimedb::{view, ViewContext};

/// The caller's own Player row, online or not.
#[view(name = my_player, public)]
fn my_player_view(ctx: &ViewContext) -> Vec<PlayerRow> {
    ctx.db
        .player()
        .identity()
        .find(ctx.sender)
        .into_iter()
        .collect()
}

/// Every Player row that currently has an open connection.
#[view(name = online_player, public)]
fn online_player_view(ctx: &ViewContext) -> Vec<PlayerRow> {
    ctx.db.player().online().filter(true).collect()
}
