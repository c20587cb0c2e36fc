//! Inventory module — grid operations
//!
//! # Architecture
//!
//! **Events → Systems flow:**
//! - Gameplay/UI пишет intent events (pick, move, use, drop, …)
//! - Системы мутируют `Inventory` и публикуют факты на канал
//! - Ошибки (bad index, full grid, malformed snapshot) не паникуют:
//!   warning в лог + Error broadcast
//!
//! **Use dispatch по категории:**
//! - Resource → consumed, ItemUsed + ContentChanged
//! - Key → ItemUsed, не consumed
//! - Weapon → EquipRequest broadcast + EquipItemIntent владельцу
//!   (предмет остаётся в inventory storage, слот держит копию)
//! - None → Error

use bevy::prelude::*;

pub mod events;
pub mod systems;

// Re-exports
pub use events::*;
pub use systems::*;

/// Inventory plugin (grid operations)
pub struct InventoryPlugin;

impl Plugin for InventoryPlugin {
    fn build(&self, app: &mut App) {
        app
            // Events
            .add_event::<PickItemIntent>()
            .add_event::<MoveItemIntent>()
            .add_event::<UseItemIntent>()
            .add_event::<DropItemIntent>()
            .add_event::<DestroyItemIntent>()
            .add_event::<SelectSlotIntent>()
            .add_event::<ClickSlotIntent>()
            .add_event::<OpenInventoryIntent>()
            .add_event::<CloseInventoryIntent>()
            .add_event::<LoadInventoryIntent>()
            // Фиксированный порядок — поток broadcast'ов детерминирован в кадре
            .add_systems(
                Update,
                (
                    process_pick_item,
                    process_move_item,
                    process_use_item,
                    process_drop_item,
                    process_destroy_item,
                    process_select_slot,
                    process_click_slot,
                    process_open_inventory,
                    process_close_inventory,
                    process_load_inventory,
                )
                    .chain(),
            );
    }
}
