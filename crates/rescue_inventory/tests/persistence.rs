//! Save/load граница через работающий App
//!
//! Snapshot снимается с живого инвентаря, гоняется через JSON внешнего
//! контракта и восстанавливается intent'ом; malformed вход отклоняется
//! без следов на целевом инвентаре.

use bevy::prelude::*;
use rescue_inventory::*;

#[derive(Resource, Default)]
struct Channel(Vec<InventoryEvent>);

fn collect_channel(mut events: EventReader<InventoryEvent>, mut collected: ResMut<Channel>) {
    collected.0.extend(events.read().cloned());
}

fn create_app() -> App {
    let mut app = create_headless_app();
    app.add_plugins(InventoryCorePlugin)
        .init_resource::<Channel>()
        .add_systems(PostUpdate, collect_channel);
    app
}

fn drain(app: &mut App) -> Vec<InventoryEvent> {
    std::mem::take(&mut app.world_mut().resource_mut::<Channel>().0)
}

fn kinds(events: &[InventoryEvent]) -> Vec<InventoryEventKind> {
    events.iter().map(|e| e.kind).collect()
}

fn spawn_item(app: &mut App, definition: &str) -> ItemInstance {
    let world = app.world_mut();
    let definitions = world.resource::<ItemDefinitions>().clone();
    let mut spawner = world.resource_mut::<ItemSpawner>();
    spawner.spawn(definitions.get(&definition.into()).unwrap())
}

/// Helper: наполненный backpack
fn populated_backpack(app: &mut App) -> Entity {
    let backpack = app
        .world_mut()
        .spawn(Inventory::new("SquadBackpack", InventoryKind::Main, 2, 3))
        .id();
    let medkit = spawn_item(app, "medkit");
    let rifle = spawn_item(app, "assault_rifle");

    app.world_mut().send_event(PickItemIntent {
        inventory: backpack,
        item: medkit,
        quantity: 4,
    });
    app.world_mut().send_event(PickItemIntent {
        inventory: backpack,
        item: rifle,
        quantity: 1,
    });
    app.update();
    drain(app);
    backpack
}

/// Save → JSON → load в свежий инвентарь: содержимое совпадает,
/// instance id свежие, поток — InventoryLoaded затем Redraw
#[test]
fn test_save_load_round_trip_through_app() {
    let mut app = create_app();
    let backpack = populated_backpack(&mut app);

    let (json, old_ids) = {
        let inventory = app.world().get::<Inventory>(backpack).unwrap();
        let ids: Vec<InstanceId> = inventory.occupied().map(|(_, s)| s.item.instance_id).collect();
        (
            SerializedInventory::capture(inventory).to_json().unwrap(),
            ids,
        )
    };

    let snapshot = SerializedInventory::from_json(&json).unwrap();
    let fresh = app
        .world_mut()
        .spawn(Inventory::new("Fresh", InventoryKind::Main, 0, 0))
        .id();
    app.world_mut().send_event(LoadInventoryIntent {
        inventory: fresh,
        snapshot,
    });
    app.update();

    let events = drain(&mut app);
    assert_eq!(
        kinds(&events),
        vec![
            InventoryEventKind::InventoryLoaded,
            InventoryEventKind::Redraw,
        ]
    );
    assert_eq!(events[0].inventory_name, "SquadBackpack");

    let restored = app.world().get::<Inventory>(fresh).unwrap();
    assert_eq!(restored.name, "SquadBackpack");
    assert_eq!(restored.rows, 2);
    assert_eq!(restored.columns, 3);
    assert_eq!(restored.total_quantity(&"medkit".into()), 4);
    assert_eq!(restored.total_quantity(&"assault_rifle".into()), 1);

    // Фабрика выдала свежие instance id при восстановлении
    for (_, stack) in restored.occupied() {
        assert!(!old_ids.contains(&stack.item.instance_id));
    }
}

/// Malformed snapshot (разъехавшиеся массивы): Error broadcast,
/// целевой инвентарь не тронут
#[test]
fn test_malformed_snapshot_rejected_untouched() {
    let mut app = create_app();
    let target = app
        .world_mut()
        .spawn(Inventory::new("Target", InventoryKind::Main, 1, 2))
        .id();

    let snapshot = SerializedInventory {
        number_of_rows: 2,
        number_of_columns: 2,
        inventory_name: "Evil".into(),
        inventory_type: InventoryKind::Equipment,
        draw_content_in_inspector: true,
        content_type: vec!["medkit".into(), "pistol".into()],
        content_quantity: vec![1],
    };
    assert!(snapshot.validate().is_err());

    app.world_mut().send_event(LoadInventoryIntent {
        inventory: target,
        snapshot,
    });
    app.update();

    assert_eq!(kinds(&drain(&mut app)), vec![InventoryEventKind::Error]);

    let inventory = app.world().get::<Inventory>(target).unwrap();
    assert_eq!(inventory.name, "Target");
    assert_eq!(inventory.kind, InventoryKind::Main);
    assert_eq!(inventory.slot_count(), 2);
    assert!(inventory.is_empty());
}

/// Неизвестный template id в валидном по форме snapshot'е — тоже reject
#[test]
fn test_unknown_item_rejected_through_app() {
    let mut app = create_app();
    let target = app
        .world_mut()
        .spawn(Inventory::new("Target", InventoryKind::Main, 2, 2))
        .id();

    let snapshot = SerializedInventory {
        number_of_rows: 2,
        number_of_columns: 2,
        inventory_name: "Modded".into(),
        inventory_type: InventoryKind::Main,
        draw_content_in_inspector: false,
        content_type: vec!["plasma_cannon".into()],
        content_quantity: vec![1],
    };
    assert!(snapshot.validate().is_ok());

    app.world_mut().send_event(LoadInventoryIntent {
        inventory: target,
        snapshot,
    });
    app.update();

    assert_eq!(kinds(&drain(&mut app)), vec![InventoryEventKind::Error]);
    assert!(app.world().get::<Inventory>(target).unwrap().is_empty());
}

/// Внешний JSON-контракт читается и без capture: поля с фиксированными
/// именами
#[test]
fn test_external_json_contract_parses() {
    let json = r#"{
        "NumberOfRows": 1,
        "NumberOfColumns": 2,
        "InventoryName": "HandWritten",
        "InventoryType": "Equipment",
        "DrawContentInInspector": false,
        "ContentType": ["pistol"],
        "ContentQuantity": [1]
    }"#;

    let snapshot = SerializedInventory::from_json(json).unwrap();
    assert_eq!(snapshot.inventory_name, "HandWritten");
    assert_eq!(snapshot.inventory_type, InventoryKind::Equipment);
    assert_eq!(snapshot.content_type, vec![ItemId("pistol".into())]);
    snapshot.validate().unwrap();
}
