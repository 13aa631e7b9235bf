use crate::types::DbHeldItem;
use shared::Station;
use spacetimedb::*;

/// A station and the item copies stored at it.
#[table(name = station, public)]
pub struct StationRow {
    #[primary_key]
    pub id: String,
    pub name: String,
    pub items: Vec<DbHeldItem>,
}

impl From<StationRow> for Station {
    fn from(row: StationRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            items: row.items.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<Station> for StationRow {
    fn from(station: Station) -> Self {
        Self {
            id: station.id,
            name: station.name,
            items: station.items.into_iter().map(Into::into).collect(),
        }
    }
}
