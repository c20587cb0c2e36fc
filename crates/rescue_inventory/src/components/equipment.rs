//! Equipment slot component
//!
//! # Архитектура
//!
//! **EquipmentSlot** — держатель «ноль-или-один экипированный предмет» на
//! персонажа:
//! - Чистое состояние, без валидации и без ошибок
//! - Слот хранит копию `ItemInstance`; владелец данных — inventory storage
//! - Переход equip-поверх-equip: старый предмет вытесняется (implicit swap),
//!   системы публикуют ItemUnequipped(старый) → ItemEquipped(новый)
//! - Все broadcast'ы делают системы (`equipment::systems`), не компонент

use bevy::prelude::*;

use crate::item_system::ItemInstance;

/// Слот экипировки персонажа (максимум один предмет)
///
/// Инвариант: `has_item_equipped()` истинно ровно тогда, когда слот держит
/// предмет — флаг выводится из состояния, рассинхронизация невозможна.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct EquipmentSlot {
    current: Option<ItemInstance>,
    /// Имя инвентаря, от которого слот получает предметы (ключ канала)
    pub inventory_name: String,
}

impl Default for EquipmentSlot {
    fn default() -> Self {
        Self::new("Main")
    }
}

impl EquipmentSlot {
    /// Пустой слот, привязанный к инвентарю по имени
    pub fn new(inventory_name: impl Into<String>) -> Self {
        Self {
            current: None,
            inventory_name: inventory_name.into(),
        }
    }

    /// Текущий экипированный предмет (без side effects)
    pub fn current_item(&self) -> Option<&ItemInstance> {
        self.current.as_ref()
    }

    /// Есть ли экипированный предмет
    pub fn has_item_equipped(&self) -> bool {
        self.current.is_some()
    }

    /// Положить предмет в слот, вернуть вытесненный (если был)
    pub fn equip(&mut self, item: ItemInstance) -> Option<ItemInstance> {
        self.current.replace(item)
    }

    /// Безусловно очистить слот, вернуть что лежало
    pub fn unequip(&mut self) -> Option<ItemInstance> {
        self.current.take()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item_system::{InstanceId, ItemCategory, ItemId};

    fn weapon(id: u64, def: &str) -> ItemInstance {
        ItemInstance {
            instance_id: InstanceId(id),
            definition_id: ItemId(def.to_string()),
            category: ItemCategory::Weapon,
        }
    }

    #[test]
    fn test_empty_slot() {
        let slot = EquipmentSlot::new("Backpack");
        assert!(!slot.has_item_equipped());
        assert!(slot.current_item().is_none());
        assert_eq!(slot.inventory_name, "Backpack");
    }

    #[test]
    fn test_equip_then_unequip() {
        let mut slot = EquipmentSlot::default();

        let displaced = slot.equip(weapon(1, "assault_rifle"));
        assert!(displaced.is_none());
        assert!(slot.has_item_equipped());
        assert_eq!(slot.current_item().unwrap().instance_id, InstanceId(1));

        let removed = slot.unequip();
        assert_eq!(removed.unwrap().instance_id, InstanceId(1));
        assert!(!slot.has_item_equipped());
    }

    #[test]
    fn test_equip_over_equip_displaces_old() {
        let mut slot = EquipmentSlot::default();
        slot.equip(weapon(1, "assault_rifle"));

        let displaced = slot.equip(weapon(2, "shotgun"));
        assert_eq!(displaced.unwrap().instance_id, InstanceId(1));
        assert_eq!(slot.current_item().unwrap().instance_id, InstanceId(2));
    }

    #[test]
    fn test_unequip_empty_is_noop_on_state() {
        let mut slot = EquipmentSlot::default();
        assert!(slot.unequip().is_none());
        assert!(!slot.has_item_equipped());
    }
}
