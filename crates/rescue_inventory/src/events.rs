//! Inventory event channel
//!
//! # Architecture
//!
//! Один broadcast-тип `InventoryEvent` на всё ядро: equipment и inventory
//! системы пишут в него, любое число подписчиков читает через
//! `EventReader<InventoryEvent>`.
//!
//! Каждый broadcast — полностью заполненное immutable значение, собранное
//! заново на месте вызова. Ничего не переиспользуется между triggers, поэтому
//! подписчик никогда не видит поля от чужого события, а вложенный trigger из
//! обработчика не может ничего испортить.
//!
//! Contract для подписчиков: получаете копию записи синхронно в рамках
//! кадра, не мутируете её и не держите дольше окна доставки.

use bevy::prelude::*;

use crate::item_system::ItemInstance;

// ============================================================================
// InventoryEventKind
// ============================================================================

/// Вид события на канале
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InventoryEventKind {
    /// Предмет подобран в инвентарь
    Pick,
    /// Слот выделен (UI)
    Select,
    /// Слот кликнут (UI)
    Click,
    /// Содержимое перемещено между слотами
    Move,
    /// Запрос на использование предмета
    UseRequest,
    /// Предмет использован
    ItemUsed,
    /// Запрос на экипировку
    EquipRequest,
    /// Предмет экипирован
    ItemEquipped,
    /// Запрос на снятие (публикуется UI-слоем перед intent)
    UnequipRequest,
    /// Предмет снят
    ItemUnequipped,
    /// Предмет выброшен
    Drop,
    /// Предмет уничтожен
    Destroy,
    /// Операция отклонена (bad index, full grid, malformed snapshot, …)
    Error,
    /// Полная перерисовка UI (после load)
    Redraw,
    /// Содержимое инвентаря изменилось
    ContentChanged,
    /// Инвентарь открыт
    InventoryOpens,
    /// Запрос на закрытие инвентаря
    InventoryCloseRequest,
    /// Инвентарь закрыт
    InventoryCloses,
    /// Инвентарь загружен из snapshot
    InventoryLoaded,
}

// ============================================================================
// InventoryEvent
// ============================================================================

/// Broadcast record канала
///
/// Поля, не относящиеся к событию, несут явные пустые значения
/// (None / 0), а не остатки предыдущего broadcast.
#[derive(Event, Clone, Debug, PartialEq)]
pub struct InventoryEvent {
    /// Вид события
    pub kind: InventoryEventKind,
    /// Entity слота/владельца, если событие про equipment slot
    pub slot: Option<Entity>,
    /// Имя целевого инвентаря (string key, уникальность не гарантируется)
    pub inventory_name: String,
    /// Предмет, если событие про конкретный предмет
    pub item: Option<ItemInstance>,
    /// Количество
    pub quantity: u32,
    /// Индекс слота в сетке, если применим
    pub slot_index: Option<usize>,
}

impl InventoryEvent {
    /// Новое событие: все опциональные поля пустые
    pub fn new(kind: InventoryEventKind, inventory_name: impl Into<String>) -> Self {
        Self {
            kind,
            slot: None,
            inventory_name: inventory_name.into(),
            item: None,
            quantity: 0,
            slot_index: None,
        }
    }

    pub fn with_slot(mut self, slot: Entity) -> Self {
        self.slot = Some(slot);
        self
    }

    pub fn with_item(mut self, item: ItemInstance) -> Self {
        self.item = Some(item);
        self
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn at_index(mut self, index: usize) -> Self {
        self.slot_index = Some(index);
        self
    }
}
