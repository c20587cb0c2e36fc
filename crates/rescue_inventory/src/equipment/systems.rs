//! Equipment system implementations
//!
//! # Systems
//!
//! - `process_equip_item` — equip в слот (с вытеснением старого)
//! - `process_unequip_item` — безусловный unequip

use bevy::prelude::*;

use crate::{
    components::equipment::EquipmentSlot,
    equipment::events::*,
    events::{InventoryEvent, InventoryEventKind},
    logger::{log, log_error},
};

// ============================================================================
// Equip
// ============================================================================

/// Process equip intents
///
/// Занятый слот: ровно два broadcast'а — ItemUnequipped(старый),
/// ItemEquipped(новый), в этом порядке. Пустой: ровно один ItemEquipped.
pub fn process_equip_item(
    mut events: EventReader<EquipItemIntent>,
    mut slots: Query<&mut EquipmentSlot>,
    mut channel: EventWriter<InventoryEvent>,
) {
    for intent in events.read() {
        let Ok(mut slot) = slots.get_mut(intent.entity) else {
            log_error(&format!("Entity {:?} missing EquipmentSlot", intent.entity));
            continue;
        };

        // 1. Вытеснить старый предмет (если был)
        if let Some(old_item) = slot.equip(intent.item.clone()) {
            channel.write(
                InventoryEvent::new(InventoryEventKind::ItemUnequipped, slot.inventory_name.clone())
                    .with_slot(intent.entity)
                    .with_item(old_item)
                    .with_quantity(1),
            );
        }

        // 2. Факт экипировки нового
        channel.write(
            InventoryEvent::new(InventoryEventKind::ItemEquipped, slot.inventory_name.clone())
                .with_slot(intent.entity)
                .with_item(intent.item.clone())
                .with_quantity(1),
        );

        log(&format!(
            "✅ Equipped {:?} on {:?}",
            intent.item.definition_id, intent.entity
        ));
    }
}

// ============================================================================
// Unequip
// ============================================================================

/// Process unequip intents
///
/// Слот очищается безусловно; broadcast несёт предмет из intent, даже если
/// слот уже был пуст.
pub fn process_unequip_item(
    mut events: EventReader<UnequipItemIntent>,
    mut slots: Query<&mut EquipmentSlot>,
    mut channel: EventWriter<InventoryEvent>,
) {
    for intent in events.read() {
        let Ok(mut slot) = slots.get_mut(intent.entity) else {
            log_error(&format!("Entity {:?} missing EquipmentSlot", intent.entity));
            continue;
        };

        slot.unequip();

        channel.write(
            InventoryEvent::new(InventoryEventKind::ItemUnequipped, slot.inventory_name.clone())
                .with_slot(intent.entity)
                .with_item(intent.item.clone())
                .with_quantity(1),
        );

        log(&format!(
            "🗑️ Unequipped {:?} from {:?}",
            intent.item.definition_id, intent.entity
        ));
    }
}
