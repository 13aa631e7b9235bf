mod gear_sequence_table;
mod gear_tables;
mod item_table;
mod module_settings_table;
mod player_table;
mod station_table;
mod train_table;

pub use gear_sequence_table::*;
pub use gear_tables::*;
pub use item_table::*;
pub use module_settings_table::*;
pub use player_table::*;
pub use station_table::*;
pub use train_table::*;
