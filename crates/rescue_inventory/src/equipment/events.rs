//! Equipment intent events
//!
//! # Flow
//!
//! - `EquipItemIntent` → положить предмет в слот персонажа
//!   (занятый слот сначала вытесняет старый предмет)
//! - `UnequipItemIntent` → безусловно очистить слот
//!
//! Intent несёт `ItemInstance` по значению: «экипировать ничего» в типах
//! невыразимо, guard на null не нужен.

use bevy::prelude::*;

use crate::item_system::ItemInstance;

/// Equip предмета в слот персонажа
#[derive(Event, Clone, Debug)]
pub struct EquipItemIntent {
    pub entity: Entity,
    pub item: ItemInstance,
}

/// Unequip предмета из слота персонажа
///
/// `item` уходит в broadcast как payload уведомления; вызывающий обязан
/// передать тот же предмет, что снимается — слот это не перепроверяет.
#[derive(Event, Clone, Debug)]
pub struct UnequipItemIntent {
    pub entity: Entity,
    pub item: ItemInstance,
}
