//! Storage adapter: the core's storage contracts over SpacetimeDB tables.
//!
//! A `ModuleStore` borrows the reducer context for one call. Every write goes
//! straight into the reducer's transaction, which the host commits when the
//! reducer returns `Ok` and rolls back otherwise.

use crate::schema::*;
use shared::{
    Armor, Consumable, GearIdSource, GearStore, Item, ItemId, ItemStore, Player, PlayerStore,
    Station, Train, Weapon, WorldObjectStore,
};
use spacetimedb::{Identity, ReducerContext, Table};

pub struct ModuleStore<'a> {
    ctx: &'a ReducerContext,
}

impl<'a> ModuleStore<'a> {
    pub fn new(ctx: &'a ReducerContext) -> Self {
        Self { ctx }
    }
}

impl ItemStore for ModuleStore<'_> {
    fn find_item(&self, id: ItemId) -> Option<Item> {
        self.ctx.db.item().id().find(id).map(Into::into)
    }

    fn insert_item(&mut self, item: Item) -> Item {
        self.ctx.db.item().insert(item.into()).into()
    }

    fn update_item(&mut self, item: Item) -> Item {
        self.ctx.db.item().id().update(item.into()).into()
    }

    fn delete_item(&mut self, id: ItemId) -> bool {
        self.ctx.db.item().id().delete(id)
    }
}

impl GearStore<Weapon> for ModuleStore<'_> {
    fn insert_gear(&mut self, gear: Weapon) -> Weapon {
        self.ctx.db.weapon().insert(gear.into()).into()
    }

    fn find_gear(&self, id: ItemId) -> Option<Weapon> {
        self.ctx.db.weapon().id().find(id).map(Into::into)
    }

    fn delete_gear(&mut self, id: ItemId) -> bool {
        self.ctx.db.weapon().id().delete(id)
    }
}

impl GearStore<Armor> for ModuleStore<'_> {
    fn insert_gear(&mut self, gear: Armor) -> Armor {
        self.ctx.db.armor().insert(gear.into()).into()
    }

    fn find_gear(&self, id: ItemId) -> Option<Armor> {
        self.ctx.db.armor().id().find(id).map(Into::into)
    }

    fn delete_gear(&mut self, id: ItemId) -> bool {
        self.ctx.db.armor().id().delete(id)
    }
}

impl GearStore<Consumable> for ModuleStore<'_> {
    fn insert_gear(&mut self, gear: Consumable) -> Consumable {
        self.ctx.db.consumable().insert(gear.into()).into()
    }

    fn find_gear(&self, id: ItemId) -> Option<Consumable> {
        self.ctx.db.consumable().id().find(id).map(Into::into)
    }

    fn delete_gear(&mut self, id: ItemId) -> bool {
        self.ctx.db.consumable().id().delete(id)
    }
}

impl GearIdSource for ModuleStore<'_> {
    fn next_gear_id(&mut self) -> Option<ItemId> {
        GearSequence::advance(self.ctx)
    }

    fn gear_id_taken(&self, id: ItemId) -> bool {
        self.ctx.db.item().id().find(id).is_some()
            || self.ctx.db.weapon().id().find(id).is_some()
            || self.ctx.db.armor().id().find(id).is_some()
            || self.ctx.db.consumable().id().find(id).is_some()
    }
}

impl WorldObjectStore for ModuleStore<'_> {
    fn find_station(&self, id: &str) -> Option<Station> {
        self.ctx.db.station().id().find(id.to_string()).map(Into::into)
    }

    fn insert_station(&mut self, station: Station) -> Station {
        self.ctx.db.station().insert(station.into()).into()
    }

    fn delete_station(&mut self, id: &str) -> bool {
        self.ctx.db.station().id().delete(id.to_string())
    }

    fn find_train(&self, id: &str) -> Option<Train> {
        self.ctx.db.train().id().find(id.to_string()).map(Into::into)
    }

    fn insert_train(&mut self, train: Train) -> Train {
        self.ctx.db.train().insert(train.into()).into()
    }

    fn delete_train(&mut self, id: &str) -> bool {
        self.ctx.db.train().id().delete(id.to_string())
    }
}

impl PlayerStore for ModuleStore<'_> {
    type Identity = Identity;

    fn find_player(&self, identity: Identity) -> Option<Player<Identity>> {
        self.ctx.db.player().identity().find(identity).map(Into::into)
    }

    fn insert_player(&mut self, player: Player<Identity>) -> Player<Identity> {
        self.ctx.db.player().insert(player.into()).into()
    }

    fn update_player(&mut self, player: Player<Identity>) -> Player<Identity> {
        self.ctx.db.player().identity().update(player.into()).into()
    }
}
