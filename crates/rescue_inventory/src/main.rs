//! Headless демо инвентарного ядра
//!
//! Прогоняет сценарий отряда без рендера: pickup → use → equip →
//! unequip → move → drop → save → load, печатая поток событий канала.

use bevy::prelude::*;
use rescue_inventory::*;

/// Подписчик-логгер: печатает каждый broadcast канала
fn print_channel(mut events: EventReader<InventoryEvent>) {
    for event in events.read() {
        let item = event
            .item
            .as_ref()
            .map(|i| i.definition_id.0.as_str())
            .unwrap_or("-");
        println!(
            "  [channel] {:?} inv='{}' item={} qty={} index={:?}",
            event.kind, event.inventory_name, item, event.quantity, event.slot_index
        );
    }
}

fn main() {
    let mut app = create_headless_app();
    app.add_plugins(InventoryCorePlugin)
        .add_systems(PostUpdate, print_channel);

    // Отряд: один боец с backpack'ом и слотом экипировки
    let backpack = app
        .world_mut()
        .spawn(Inventory::new("SquadBackpack", InventoryKind::Main, 3, 4))
        .id();
    let dude = app
        .world_mut()
        .spawn(EquipmentSlot::new("SquadBackpack"))
        .id();

    // Раздать стартовый лут через каталог
    let (rifle, shotgun, medkit, key) = {
        let world = app.world_mut();
        let definitions = world.resource::<ItemDefinitions>().clone();
        let mut spawner = world.resource_mut::<ItemSpawner>();
        (
            spawner.spawn(definitions.get(&"assault_rifle".into()).unwrap()),
            spawner.spawn(definitions.get(&"shotgun".into()).unwrap()),
            spawner.spawn(definitions.get(&"medkit".into()).unwrap()),
            spawner.spawn(definitions.get(&"cell_key".into()).unwrap()),
        )
    };

    println!("== pickup ==");
    app.world_mut().send_event(PickItemIntent {
        inventory: backpack,
        item: rifle.clone(),
        quantity: 1,
    });
    app.world_mut().send_event(PickItemIntent {
        inventory: backpack,
        item: shotgun.clone(),
        quantity: 1,
    });
    app.world_mut().send_event(PickItemIntent {
        inventory: backpack,
        item: medkit,
        quantity: 3,
    });
    app.world_mut().send_event(PickItemIntent {
        inventory: backpack,
        item: key,
        quantity: 1,
    });
    app.update();

    println!("== use medkit (slot 2) ==");
    app.world_mut().send_event(UseItemIntent {
        inventory: backpack,
        slot_index: 2,
        user: dude,
    });
    app.update();

    println!("== use rifle (slot 0) → equip ==");
    app.world_mut().send_event(UseItemIntent {
        inventory: backpack,
        slot_index: 0,
        user: dude,
    });
    app.update();
    app.update(); // интент экипировки обрабатывается следующим кадром

    println!("== equip shotgun поверх rifle ==");
    app.world_mut().send_event(EquipItemIntent {
        entity: dude,
        item: shotgun.clone(),
    });
    app.update();

    println!("== UI: запрос на снятие ==");
    app.world_mut().send_event(
        InventoryEvent::new(InventoryEventKind::UnequipRequest, "SquadBackpack")
            .with_slot(dude)
            .with_item(shotgun.clone()),
    );
    app.world_mut().send_event(UnequipItemIntent {
        entity: dude,
        item: shotgun,
    });
    app.update();

    println!("== move / drop ==");
    app.world_mut().send_event(MoveItemIntent {
        inventory: backpack,
        from: 0,
        to: 5,
    });
    app.world_mut().send_event(DropItemIntent {
        inventory: backpack,
        slot_index: 1,
        quantity: 1,
    });
    app.update();

    println!("== save → load ==");
    let json = {
        let world = app.world_mut();
        let inventory = world.get::<Inventory>(backpack).unwrap();
        let snapshot = SerializedInventory::capture(inventory);
        snapshot.to_json().unwrap()
    };
    println!("{json}");

    let restored = SerializedInventory::from_json(&json).unwrap();
    let fresh = app
        .world_mut()
        .spawn(Inventory::new("Fresh", InventoryKind::Main, 0, 0))
        .id();
    app.world_mut().send_event(LoadInventoryIntent {
        inventory: fresh,
        snapshot: restored,
    });
    app.update();

    let world = app.world();
    let loaded = world.get::<Inventory>(fresh).unwrap();
    println!(
        "Loaded '{}' {}×{}, medkits={}",
        loaded.name,
        loaded.rows,
        loaded.columns,
        loaded.total_quantity(&"medkit".into())
    );
    let slot = world.get::<EquipmentSlot>(dude).unwrap();
    println!("Equipped after scenario: {:?}", slot.current_item());
}
