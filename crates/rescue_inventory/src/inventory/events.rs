//! Inventory intent events
//!
//! # Flow
//!
//! - `PickItemIntent` → добавить предмет в сетку (stacking)
//! - `MoveItemIntent` → переместить/swap между слотами
//! - `UseItemIntent` → использовать предмет слота (dispatch по категории)
//! - `DropItemIntent` → выбросить часть/весь стек
//! - `DestroyItemIntent` → уничтожить слот целиком
//! - `SelectSlotIntent` / `ClickSlotIntent` → UI-сигналы по слоту
//! - `OpenInventoryIntent` / `CloseInventoryIntent` → панель открыта/закрыта
//! - `LoadInventoryIntent` → восстановить сетку из snapshot

use bevy::prelude::*;

use crate::item_system::ItemInstance;
use crate::snapshot::SerializedInventory;

/// Подобрать предмет в инвентарь
#[derive(Event, Clone, Debug)]
pub struct PickItemIntent {
    pub inventory: Entity,
    pub item: ItemInstance,
    pub quantity: u32,
}

/// Переместить содержимое слота `from` в слот `to` (занятая цель — swap)
#[derive(Event, Clone, Debug)]
pub struct MoveItemIntent {
    pub inventory: Entity,
    pub from: usize,
    pub to: usize,
}

/// Использовать предмет слота; `user` — персонаж, получающий эффект
/// (для оружия — владелец `EquipmentSlot`)
#[derive(Event, Clone, Debug)]
pub struct UseItemIntent {
    pub inventory: Entity,
    pub slot_index: usize,
    pub user: Entity,
}

/// Выбросить до `quantity` предметов из слота
#[derive(Event, Clone, Debug)]
pub struct DropItemIntent {
    pub inventory: Entity,
    pub slot_index: usize,
    pub quantity: u32,
}

/// Уничтожить содержимое слота
#[derive(Event, Clone, Debug)]
pub struct DestroyItemIntent {
    pub inventory: Entity,
    pub slot_index: usize,
}

/// UI: слот выделен
#[derive(Event, Clone, Debug)]
pub struct SelectSlotIntent {
    pub inventory: Entity,
    pub slot_index: usize,
}

/// UI: слот кликнут
#[derive(Event, Clone, Debug)]
pub struct ClickSlotIntent {
    pub inventory: Entity,
    pub slot_index: usize,
}

/// Открыть панель инвентаря
#[derive(Event, Clone, Debug)]
pub struct OpenInventoryIntent {
    pub inventory: Entity,
}

/// Закрыть панель инвентаря
#[derive(Event, Clone, Debug)]
pub struct CloseInventoryIntent {
    pub inventory: Entity,
}

/// Восстановить инвентарь из snapshot (save/load boundary)
#[derive(Event, Clone, Debug)]
pub struct LoadInventoryIntent {
    pub inventory: Entity,
    pub snapshot: SerializedInventory,
}
