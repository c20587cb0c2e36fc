//! Inventory system implementations
//!
//! # Systems
//!
//! **Grid mutation:**
//! - `process_pick_item` — stacking add, Pick + ContentChanged
//! - `process_move_item` — move/swap, Move + ContentChanged
//! - `process_use_item` — dispatch по категории (consume / key / equip)
//! - `process_drop_item` — Drop + ContentChanged
//! - `process_destroy_item` — Destroy + ContentChanged
//!
//! **Panel:**
//! - `process_select_slot` / `process_click_slot` — UI-сигналы
//! - `process_open_inventory` / `process_close_inventory`
//!
//! **Save/load boundary:**
//! - `process_load_inventory` — validate + rebuild, InventoryLoaded + Redraw

use bevy::prelude::*;

use crate::{
    components::inventory::Inventory,
    equipment::events::EquipItemIntent,
    events::{InventoryEvent, InventoryEventKind},
    inventory::events::*,
    item_system::{ItemCategory, ItemDefinitions, ItemSpawner},
    logger::{log, log_error, log_warning},
};

// ============================================================================
// Pick
// ============================================================================

/// Process pick intents (stacking add)
pub fn process_pick_item(
    mut events: EventReader<PickItemIntent>,
    mut inventories: Query<&mut Inventory>,
    definitions: Res<ItemDefinitions>,
    mut channel: EventWriter<InventoryEvent>,
) {
    for intent in events.read() {
        if intent.quantity == 0 {
            continue;
        }
        let Ok(mut inventory) = inventories.get_mut(intent.inventory) else {
            log_error(&format!("Entity {:?} missing Inventory", intent.inventory));
            continue;
        };

        let max_stack = definitions
            .get(&intent.item.definition_id)
            .map(|def| def.max_stack)
            .unwrap_or(1);

        let leftover = inventory.add(intent.item.clone(), intent.quantity, max_stack);
        let added = intent.quantity - leftover;

        if added > 0 {
            channel.write(
                InventoryEvent::new(InventoryEventKind::Pick, inventory.name.clone())
                    .with_item(intent.item.clone())
                    .with_quantity(added),
            );
            channel.write(InventoryEvent::new(
                InventoryEventKind::ContentChanged,
                inventory.name.clone(),
            ));
            log(&format!(
                "Picked {:?} ×{} into '{}'",
                intent.item.definition_id, added, inventory.name
            ));
        }

        if leftover > 0 {
            log_warning(&format!(
                "⚠️ '{}' full, {:?} ×{} not picked",
                inventory.name, intent.item.definition_id, leftover
            ));
            channel.write(
                InventoryEvent::new(InventoryEventKind::Error, inventory.name.clone())
                    .with_item(intent.item.clone())
                    .with_quantity(leftover),
            );
        }
    }
}

// ============================================================================
// Move
// ============================================================================

/// Process move intents (занятая цель — swap)
pub fn process_move_item(
    mut events: EventReader<MoveItemIntent>,
    mut inventories: Query<&mut Inventory>,
    mut channel: EventWriter<InventoryEvent>,
) {
    for intent in events.read() {
        let Ok(mut inventory) = inventories.get_mut(intent.inventory) else {
            log_error(&format!("Entity {:?} missing Inventory", intent.inventory));
            continue;
        };

        if !inventory.move_stack(intent.from, intent.to) {
            log_warning(&format!(
                "Move {} → {} rejected in '{}'",
                intent.from, intent.to, inventory.name
            ));
            channel.write(
                InventoryEvent::new(InventoryEventKind::Error, inventory.name.clone())
                    .at_index(intent.from),
            );
            continue;
        }

        let moved = inventory.stack_at(intent.to).map(|s| s.item.clone());
        let mut event = InventoryEvent::new(InventoryEventKind::Move, inventory.name.clone())
            .at_index(intent.to);
        if let Some(item) = moved {
            event = event.with_item(item);
        }
        channel.write(event);
        channel.write(InventoryEvent::new(
            InventoryEventKind::ContentChanged,
            inventory.name.clone(),
        ));
    }
}

// ============================================================================
// Use
// ============================================================================

/// Process use intents
///
/// UseRequest эхо-broadcast для пассивных слушателей (audio, UI), затем
/// dispatch по категории предмета.
pub fn process_use_item(
    mut events: EventReader<UseItemIntent>,
    mut inventories: Query<&mut Inventory>,
    mut channel: EventWriter<InventoryEvent>,
    mut equip_intents: EventWriter<EquipItemIntent>,
) {
    for intent in events.read() {
        let Ok(mut inventory) = inventories.get_mut(intent.inventory) else {
            log_error(&format!("Entity {:?} missing Inventory", intent.inventory));
            continue;
        };

        let Some(stack) = inventory.stack_at(intent.slot_index) else {
            log_warning(&format!(
                "Use rejected: slot {} empty in '{}'",
                intent.slot_index, inventory.name
            ));
            channel.write(
                InventoryEvent::new(InventoryEventKind::Error, inventory.name.clone())
                    .at_index(intent.slot_index),
            );
            continue;
        };
        let item = stack.item.clone();

        channel.write(
            InventoryEvent::new(InventoryEventKind::UseRequest, inventory.name.clone())
                .with_item(item.clone())
                .at_index(intent.slot_index),
        );

        match item.category {
            // Расходник: -1 из стека
            ItemCategory::Resource => {
                inventory.remove(intent.slot_index, 1);
                channel.write(
                    InventoryEvent::new(InventoryEventKind::ItemUsed, inventory.name.clone())
                        .with_item(item.clone())
                        .with_quantity(1)
                        .at_index(intent.slot_index),
                );
                channel.write(InventoryEvent::new(
                    InventoryEventKind::ContentChanged,
                    inventory.name.clone(),
                ));
                log(&format!("Used {:?}", item.definition_id));
            }
            // Ключ: used, но остаётся в инвентаре
            ItemCategory::Key => {
                channel.write(
                    InventoryEvent::new(InventoryEventKind::ItemUsed, inventory.name.clone())
                        .with_item(item.clone())
                        .with_quantity(1)
                        .at_index(intent.slot_index),
                );
                log(&format!("Used key {:?}", item.definition_id));
            }
            // Оружие: route в EquipmentSlot; предмет остаётся в storage,
            // слот получает копию
            ItemCategory::Weapon => {
                channel.write(
                    InventoryEvent::new(InventoryEventKind::EquipRequest, inventory.name.clone())
                        .with_slot(intent.user)
                        .with_item(item.clone())
                        .at_index(intent.slot_index),
                );
                equip_intents.write(EquipItemIntent {
                    entity: intent.user,
                    item,
                });
            }
            ItemCategory::None => {
                log_warning(&format!("{:?} cannot be used", item.definition_id));
                channel.write(
                    InventoryEvent::new(InventoryEventKind::Error, inventory.name.clone())
                        .with_item(item)
                        .at_index(intent.slot_index),
                );
            }
        }
    }
}

// ============================================================================
// Drop
// ============================================================================

/// Process drop intents
pub fn process_drop_item(
    mut events: EventReader<DropItemIntent>,
    mut inventories: Query<&mut Inventory>,
    mut channel: EventWriter<InventoryEvent>,
) {
    for intent in events.read() {
        let Ok(mut inventory) = inventories.get_mut(intent.inventory) else {
            log_error(&format!("Entity {:?} missing Inventory", intent.inventory));
            continue;
        };

        let Some((item, removed)) = inventory.remove(intent.slot_index, intent.quantity) else {
            channel.write(
                InventoryEvent::new(InventoryEventKind::Error, inventory.name.clone())
                    .at_index(intent.slot_index),
            );
            continue;
        };

        channel.write(
            InventoryEvent::new(InventoryEventKind::Drop, inventory.name.clone())
                .with_item(item.clone())
                .with_quantity(removed)
                .at_index(intent.slot_index),
        );
        channel.write(InventoryEvent::new(
            InventoryEventKind::ContentChanged,
            inventory.name.clone(),
        ));
        log(&format!(
            "Dropped {:?} ×{} from '{}'",
            item.definition_id, removed, inventory.name
        ));
    }
}

// ============================================================================
// Destroy
// ============================================================================

/// Process destroy intents (слот целиком, без спавна в мир)
pub fn process_destroy_item(
    mut events: EventReader<DestroyItemIntent>,
    mut inventories: Query<&mut Inventory>,
    mut channel: EventWriter<InventoryEvent>,
) {
    for intent in events.read() {
        let Ok(mut inventory) = inventories.get_mut(intent.inventory) else {
            log_error(&format!("Entity {:?} missing Inventory", intent.inventory));
            continue;
        };

        let Some(stack) = inventory.take_slot(intent.slot_index) else {
            channel.write(
                InventoryEvent::new(InventoryEventKind::Error, inventory.name.clone())
                    .at_index(intent.slot_index),
            );
            continue;
        };

        channel.write(
            InventoryEvent::new(InventoryEventKind::Destroy, inventory.name.clone())
                .with_item(stack.item)
                .with_quantity(stack.quantity)
                .at_index(intent.slot_index),
        );
        channel.write(InventoryEvent::new(
            InventoryEventKind::ContentChanged,
            inventory.name.clone(),
        ));
    }
}

// ============================================================================
// Select / Click
// ============================================================================

/// Process select intents (UI)
pub fn process_select_slot(
    mut events: EventReader<SelectSlotIntent>,
    inventories: Query<&Inventory>,
    mut channel: EventWriter<InventoryEvent>,
) {
    for intent in events.read() {
        let Ok(inventory) = inventories.get(intent.inventory) else {
            continue;
        };
        if intent.slot_index >= inventory.slot_count() {
            channel.write(
                InventoryEvent::new(InventoryEventKind::Error, inventory.name.clone())
                    .at_index(intent.slot_index),
            );
            continue;
        }

        let mut event = InventoryEvent::new(InventoryEventKind::Select, inventory.name.clone())
            .at_index(intent.slot_index);
        if let Some(stack) = inventory.stack_at(intent.slot_index) {
            event = event.with_item(stack.item.clone()).with_quantity(stack.quantity);
        }
        channel.write(event);
    }
}

/// Process click intents (UI)
pub fn process_click_slot(
    mut events: EventReader<ClickSlotIntent>,
    inventories: Query<&Inventory>,
    mut channel: EventWriter<InventoryEvent>,
) {
    for intent in events.read() {
        let Ok(inventory) = inventories.get(intent.inventory) else {
            continue;
        };
        if intent.slot_index >= inventory.slot_count() {
            channel.write(
                InventoryEvent::new(InventoryEventKind::Error, inventory.name.clone())
                    .at_index(intent.slot_index),
            );
            continue;
        }

        let mut event = InventoryEvent::new(InventoryEventKind::Click, inventory.name.clone())
            .at_index(intent.slot_index);
        if let Some(stack) = inventory.stack_at(intent.slot_index) {
            event = event.with_item(stack.item.clone()).with_quantity(stack.quantity);
        }
        channel.write(event);
    }
}

// ============================================================================
// Open / Close
// ============================================================================

/// Process open intents
pub fn process_open_inventory(
    mut events: EventReader<OpenInventoryIntent>,
    mut inventories: Query<&mut Inventory>,
    mut channel: EventWriter<InventoryEvent>,
) {
    for intent in events.read() {
        let Ok(mut inventory) = inventories.get_mut(intent.inventory) else {
            continue;
        };
        inventory.is_open = true;
        channel.write(InventoryEvent::new(
            InventoryEventKind::InventoryOpens,
            inventory.name.clone(),
        ));
    }
}

/// Process close intents
///
/// Порядок фиксирован: InventoryCloseRequest, затем InventoryCloses.
pub fn process_close_inventory(
    mut events: EventReader<CloseInventoryIntent>,
    mut inventories: Query<&mut Inventory>,
    mut channel: EventWriter<InventoryEvent>,
) {
    for intent in events.read() {
        let Ok(mut inventory) = inventories.get_mut(intent.inventory) else {
            continue;
        };
        channel.write(InventoryEvent::new(
            InventoryEventKind::InventoryCloseRequest,
            inventory.name.clone(),
        ));
        inventory.is_open = false;
        channel.write(InventoryEvent::new(
            InventoryEventKind::InventoryCloses,
            inventory.name.clone(),
        ));
    }
}

// ============================================================================
// Load
// ============================================================================

/// Process load intents (save/load boundary)
///
/// Malformed snapshot: инвентарь не трогаем, Error broadcast + лог.
pub fn process_load_inventory(
    mut events: EventReader<LoadInventoryIntent>,
    mut inventories: Query<&mut Inventory>,
    definitions: Res<ItemDefinitions>,
    mut spawner: ResMut<ItemSpawner>,
    mut channel: EventWriter<InventoryEvent>,
) {
    for intent in events.read() {
        let Ok(mut inventory) = inventories.get_mut(intent.inventory) else {
            log_error(&format!("Entity {:?} missing Inventory", intent.inventory));
            continue;
        };

        match intent
            .snapshot
            .apply_to(&mut inventory, &definitions, &mut spawner)
        {
            Ok(()) => {
                channel.write(InventoryEvent::new(
                    InventoryEventKind::InventoryLoaded,
                    inventory.name.clone(),
                ));
                channel.write(InventoryEvent::new(
                    InventoryEventKind::Redraw,
                    inventory.name.clone(),
                ));
                log(&format!("✅ Loaded inventory '{}'", inventory.name));
            }
            Err(err) => {
                log_error(&format!(
                    "Rejected snapshot for '{}': {}",
                    inventory.name, err
                ));
                channel.write(InventoryEvent::new(
                    InventoryEventKind::Error,
                    inventory.name.clone(),
                ));
            }
        }
    }
}
