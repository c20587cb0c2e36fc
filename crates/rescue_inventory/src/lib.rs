//! Dude Rescue Squad — Inventory Core
//!
//! ECS-ядро инвентаря/экипировки на Bevy 0.16 (headless, без рендера):
//! - `item_system` — identity предметов + каталог + фабрика
//! - `components` — `EquipmentSlot` и `Inventory` (сетка)
//! - `events` — единый broadcast-канал `InventoryEvent`
//! - `equipment` / `inventory` — intent events + системы
//! - `snapshot` — плоский snapshot для save/load границы
//!
//! Host-слой (рендер, UI, звук) подписывается на канал через
//! `EventReader<InventoryEvent>` и пишет intent events; ядро не зависит от
//! объектной модели конкретного движка.

use bevy::prelude::*;

// Публичные модули
pub mod components;
pub mod equipment;
pub mod events;
pub mod inventory;
pub mod item_system;
pub mod logger;
pub mod snapshot;

// Re-export базовых типов для удобства
pub use components::*;
pub use equipment::{EquipItemIntent, EquipmentPlugin, UnequipItemIntent};
pub use events::{InventoryEvent, InventoryEventKind};
pub use inventory::{
    ClickSlotIntent, CloseInventoryIntent, DestroyItemIntent, DropItemIntent, InventoryPlugin,
    LoadInventoryIntent, MoveItemIntent, OpenInventoryIntent, PickItemIntent, SelectSlotIntent,
    UseItemIntent,
};
pub use item_system::{
    InstanceId, ItemCategory, ItemDefinition, ItemDefinitions, ItemId, ItemInstance, ItemSpawner,
};
pub use snapshot::{SerializedInventory, SnapshotError};

/// Главный plugin ядра (канал + подсистемы + ресурсы)
pub struct InventoryCorePlugin;

impl Plugin for InventoryCorePlugin {
    fn build(&self, app: &mut App) {
        app
            // Единый broadcast-канал
            .add_event::<InventoryEvent>()
            // Каталог + фабрика instance id
            .init_resource::<ItemDefinitions>()
            .init_resource::<ItemSpawner>()
            // Подсистемы
            .add_plugins((EquipmentPlugin, InventoryPlugin));
    }
}

/// Создаёт minimal Bevy App для headless работы ядра
pub fn create_headless_app() -> App {
    let mut app = App::new();
    logger::init_logger();
    app.add_plugins(MinimalPlugins);
    app
}
