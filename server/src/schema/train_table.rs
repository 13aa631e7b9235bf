use shared::Train;
use spacetimedb::*;

/// A train running between two stations.
///
/// Station ids are free-form; nothing checks that they exist.
#[table(name = train, public)]
pub struct TrainRow {
    #[primary_key]
    pub id: String,
    pub from_station_id: String,
    pub to_station_id: String,
    pub money: u32,
}

impl From<TrainRow> for Train {
    fn from(row: TrainRow) -> Self {
        Self {
            id: row.id,
            from_station_id: row.from_station_id,
            to_station_id: row.to_station_id,
            money: row.money,
        }
    }
}

impl From<Train> for TrainRow {
    fn from(train: Train) -> Self {
        Self {
            id: train.id,
            from_station_id: train.from_station_id,
            to_station_id: train.to_station_id,
            money: train.money,
        }
    }
}
