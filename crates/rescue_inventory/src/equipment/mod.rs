//! Equipment module — slot lifecycle
//!
//! # Architecture
//!
//! **Events → Systems flow:**
//! - Gameplay/UI пишет intent events
//! - Системы мутируют `EquipmentSlot` и публикуют факты на канал
//!
//! **Equip:**
//! - Занятый слот → ItemUnequipped(старый), затем ItemEquipped(новый)
//! - Пустой слот → ровно один ItemEquipped
//!
//! **Unequip:**
//! - Слот очищается безусловно, ровно один ItemUnequipped с предметом
//!   из intent

use bevy::prelude::*;

pub mod events;
pub mod systems;

// Re-exports
pub use events::*;
pub use systems::*;

/// Equipment plugin (slot lifecycle)
pub struct EquipmentPlugin;

impl Plugin for EquipmentPlugin {
    fn build(&self, app: &mut App) {
        app
            // Events
            .add_event::<EquipItemIntent>()
            .add_event::<UnequipItemIntent>()
            // Фиксированный порядок — поток broadcast'ов детерминирован в кадре
            .add_systems(
                Update,
                (process_equip_item, process_unequip_item).chain(),
            );
    }
}
