use spacetimedb::*;

const GEAR_SEQUENCE_ROW_ID: u32 = 1;

/// Shared id sequence for weapons, armor and consumables.
///
/// Single-row table (`id = 1`) holding the last id handed out. The row is
/// created on first use and only ever moves forward.
#[table(name = gear_sequence)]
pub struct GearSequence {
    #[primary_key]
    pub id: u32,

    pub last_id: u32,
}

impl GearSequence {
    /// Advance the sequence and return the new value, or `None` past `u32::MAX`.
    pub fn advance(ctx: &ReducerContext) -> Option<u32> {
        let Some(mut row) = ctx.db.gear_sequence().id().find(GEAR_SEQUENCE_ROW_ID) else {
            ctx.db.gear_sequence().insert(GearSequence {
                id: GEAR_SEQUENCE_ROW_ID,
                last_id: 1,
            });
            return Some(1);
        };

        row.last_id = row.last_id.checked_add(1)?;
        let next = row.last_id;
        ctx.db.gear_sequence().id().update(row);
        Some(next)
    }
}
