use shared::{
    Armor, BindingConfig, Consumable, CoreError, GearStore, ItemRef, ItemStore, MemoryStore,
    PlayerStore, RecordKind, SessionConfig, SessionState, Weapon, binding, catalog, ledger,
    session,
};

#[test]
fn sword_stack_scenario() {
    let mut store = MemoryStore::new();

    assert_eq!(ledger::add_item(&mut store, 11, "Sword").unwrap().quantity, 1);
    assert_eq!(ledger::add_item(&mut store, 11, "Sword").unwrap().quantity, 2);
    assert_eq!(store.items().count(), 1);

    ledger::delete_item(&mut store, 11).unwrap();
    assert_eq!(store.find_item(11).map(|i| i.quantity), Some(1));

    ledger::delete_item(&mut store, 11).unwrap();
    assert_eq!(store.find_item(11), None);

    assert_eq!(
        ledger::delete_item(&mut store, 11).unwrap_err(),
        CoreError::not_found(RecordKind::Item, 11)
    );
}

#[test]
fn weapon_registration_and_retirement() {
    let mut store = MemoryStore::new();

    let weapon = store
        .transact(|tx| {
            catalog::register_gear(
                tx,
                Weapon {
                    id: 0,
                    name: "Sword".into(),
                    attack: 10,
                },
            )
        })
        .unwrap();

    let item = store.find_item(weapon.id).unwrap();
    assert_eq!((item.name.as_str(), item.quantity), ("Sword", 1));

    store
        .transact(|tx| catalog::retire_gear::<_, Weapon>(tx, weapon.id))
        .unwrap();
    assert_eq!(GearStore::<Weapon>::find_gear(&store, weapon.id), None);
    assert_eq!(store.find_item(weapon.id), None);
}

#[test]
fn mixed_catalog_keeps_one_companion_per_record() {
    let mut store = MemoryStore::new();
    ledger::add_item(&mut store, 1, "Rope").unwrap();

    let sword = store
        .transact(|tx| {
            catalog::register_gear(
                tx,
                Weapon {
                    id: 0,
                    name: "Sword".into(),
                    attack: 10,
                },
            )
        })
        .unwrap();
    let mail = store
        .transact(|tx| {
            catalog::register_gear(
                tx,
                Armor {
                    id: 0,
                    name: "Mail".into(),
                    defence: 4,
                },
            )
        })
        .unwrap();
    let potion = store
        .transact(|tx| {
            catalog::register_gear(
                tx,
                Consumable {
                    id: 0,
                    name: "Potion".into(),
                    value: 25,
                },
            )
        })
        .unwrap();

    let mut ids = vec![1, sword.id, mail.id, potion.id];
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 4);

    for (id, name) in [(1, "Rope"), (sword.id, "Sword"), (mail.id, "Mail"), (potion.id, "Potion")] {
        let item = store.find_item(id).unwrap();
        assert_eq!((item.name.as_str(), item.quantity), (name, 1));
    }

    store
        .transact(|tx| catalog::retire_gear::<_, Armor>(tx, mail.id))
        .unwrap();
    assert_eq!(store.find_item(mail.id), None);
    assert_eq!(store.items().count(), 3);
}

#[test]
fn session_round_trip_preserves_player_state() {
    let mut store = MemoryStore::new();
    let session_config = SessionConfig::default();
    let binding_config = BindingConfig::default();

    session::connect(&mut store, 42, &session_config).unwrap();
    session::enter_game(&mut store, 42, "Rook").unwrap();
    ledger::add_item(&mut store, 7, "Lantern").unwrap();
    binding::add_existing_item_to_player(&mut store, 42, 7, &binding_config).unwrap();
    binding::add_consumable_to_player(&mut store, 42, 7, &binding_config).unwrap();
    binding::equip_weapon(&mut store, 42, 7).unwrap();
    let before = store.find_player(42).unwrap();

    session::disconnect(&mut store, 42).unwrap();
    session::connect(&mut store, 42, &session_config).unwrap();

    assert_eq!(store.find_player(42).unwrap(), before);
    assert_eq!(session::session_state(&store, 42), SessionState::Active);
}

#[test]
fn interleaved_sessions_keep_one_record_per_identity() {
    let mut store = MemoryStore::new();
    let config = SessionConfig::default();
    let identities = [1u64, 2, 3];

    // Deterministic interleaving of connects and disconnects across identities.
    let script: &[(u64, bool)] = &[
        (1, true),
        (2, true),
        (1, false),
        (3, true),
        (2, false),
        (1, true),
        (3, false),
        (2, true),
        (1, false),
        (3, true),
    ];

    for &(identity, is_connect) in script {
        let result = store.transact(|tx| {
            if is_connect {
                session::connect(tx, identity, &config).map(|_| ())
            } else {
                session::disconnect(tx, identity).map(|_| ())
            }
        });
        assert!(result.is_ok(), "step {identity}/{is_connect} failed: {result:?}");

        for id in identities {
            let records = store.players().filter(|p| p.identity == id).count();
            assert!(records <= 1);
        }
    }

    assert_eq!(store.players().count(), 3);
    assert_eq!(session::session_state(&store, 1), SessionState::LoggedOut);
    assert_eq!(session::session_state(&store, 2), SessionState::Active);
    assert_eq!(session::session_state(&store, 3), SessionState::Active);
}

#[test]
fn failed_disconnect_commits_nothing() {
    let mut store = MemoryStore::new();
    session::connect(&mut store, 8, &SessionConfig::default()).unwrap();
    session::disconnect(&mut store, 8).unwrap();
    let before = store.clone();

    let err = store
        .transact(|tx| session::disconnect(tx, 8))
        .unwrap_err();

    assert!(matches!(err, CoreError::InvariantViolation(_)));
    assert_eq!(store, before);
}

#[test]
fn equip_replaces_without_accumulating() {
    let mut store = MemoryStore::new();
    session::connect(&mut store, 5, &SessionConfig::default()).unwrap();

    binding::equip_weapon(&mut store, 5, 100).unwrap();
    binding::equip_weapon(&mut store, 5, 200).unwrap();

    let player = store.find_player(5).unwrap();
    assert_eq!(player.equipped_weapon, Some(ItemRef::equipped(200)));
    assert!(player.items.is_empty());
}

#[test]
fn world_objects_lifecycle() {
    let mut store = MemoryStore::new();

    catalog::add_station(&mut store, shared::Station::new("a", "Alpha")).unwrap();
    catalog::add_train(
        &mut store,
        shared::Train {
            id: "express".into(),
            from_station_id: "a".into(),
            to_station_id: "b".into(),
            money: 250,
        },
    )
    .unwrap();
    assert_eq!(store.stations().count(), 1);
    assert_eq!(store.trains().count(), 1);

    catalog::delete_station(&mut store, "a").unwrap();
    catalog::delete_train(&mut store, "express").unwrap();
    assert_eq!(store.stations().count(), 0);
    assert_eq!(store.trains().count(), 0);
}
