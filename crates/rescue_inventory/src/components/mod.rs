//! ECS components ядра
//!
//! Организация по доменам:
//! - equipment: слот экипировки персонажа (EquipmentSlot)
//! - inventory: сетка инвентаря (Inventory, ItemStack, InventoryKind)

pub mod equipment;
pub mod inventory;

// Re-exports для удобного импорта
pub use equipment::*;
pub use inventory::*;
