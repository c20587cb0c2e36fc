//! Inventory grid component
//!
//! # Архитектура
//!
//! **Inventory** — именованная сетка rows × columns:
//! - Каждый слот: `Option<ItemStack>` (предмет + количество)
//! - Инвариант: `slots.len() == rows * columns` всегда
//! - Stacking: предметы одного definition складываются до `max_stack`
//! - Используется для: loot pickup, расходники, ключи, снятое оружие
//!
//! **InventoryKind** — тег инвентаря (Main / Equipment), уходит в snapshot.
//!
//! Мутации идут через системы (`inventory::systems`), которые публикуют
//! события канала; компонент сам ничего не публикует.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::item_system::{ItemId, ItemInstance};

// ============================================================================
// InventoryKind
// ============================================================================

/// Тег инвентаря (уходит в snapshot как `InventoryType`)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Reflect, Serialize, Deserialize)]
pub enum InventoryKind {
    #[default]
    Main,
    Equipment,
}

// ============================================================================
// ItemStack
// ============================================================================

/// Слот-содержимое: предмет + количество
#[derive(Clone, Debug, PartialEq, Reflect)]
pub struct ItemStack {
    pub item: ItemInstance,
    pub quantity: u32,
}

// ============================================================================
// Inventory
// ============================================================================

/// Инвентарь — сетка слотов с именем и тегом
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct Inventory {
    /// Имя (ключ канала, уникальность не гарантируется)
    pub name: String,
    /// Тег
    pub kind: InventoryKind,
    /// Размер сетки
    pub rows: usize,
    pub columns: usize,
    /// Диагностический флаг, сохраняется в snapshot
    pub debug_draw: bool,
    /// Открыт ли инвентарь (transient, в snapshot не попадает)
    pub is_open: bool,
    slots: Vec<Option<ItemStack>>,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new("Main", InventoryKind::Main, 0, 0)
    }
}

impl Inventory {
    /// Пустая сетка rows × columns
    pub fn new(name: impl Into<String>, kind: InventoryKind, rows: usize, columns: usize) -> Self {
        Self {
            name: name.into(),
            kind,
            rows,
            columns,
            debug_draw: false,
            is_open: false,
            slots: vec![None; rows * columns],
        }
    }

    /// Количество слотов в сетке
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Содержимое слота (immutable)
    pub fn stack_at(&self, index: usize) -> Option<&ItemStack> {
        self.slots.get(index)?.as_ref()
    }

    /// Содержимое слота (mutable)
    pub fn stack_at_mut(&mut self, index: usize) -> Option<&mut ItemStack> {
        self.slots.get_mut(index)?.as_mut()
    }

    /// Слот существует и пуст
    pub fn is_slot_free(&self, index: usize) -> bool {
        matches!(self.slots.get(index), Some(None))
    }

    /// Занятые слоты в порядке сетки
    pub fn occupied(&self) -> impl Iterator<Item = (usize, &ItemStack)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_ref().map(|stack| (i, stack)))
    }

    /// Инвентарь пуст
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|s| s.is_none())
    }

    /// Суммарное количество предметов данного definition
    pub fn total_quantity(&self, definition_id: &ItemId) -> u32 {
        self.occupied()
            .filter(|(_, s)| s.item.definition_id == *definition_id)
            .map(|(_, s)| s.quantity)
            .sum()
    }

    /// Добавить `quantity` предметов, стекая по definition
    ///
    /// Сначала доливаем существующие стеки того же definition до `max_stack`,
    /// затем один свободный слот. Возвращает сколько не влезло; один вызов
    /// занимает максимум один новый слот (instance id не клонируются по
    /// нескольким слотам).
    pub fn add(&mut self, item: ItemInstance, quantity: u32, max_stack: u32) -> u32 {
        let mut remaining = quantity;

        // 1. Долить существующие стеки
        for slot in self.slots.iter_mut().flatten() {
            if remaining == 0 {
                break;
            }
            if slot.item.definition_id == item.definition_id && slot.quantity < max_stack {
                let space = max_stack - slot.quantity;
                let moved = space.min(remaining);
                slot.quantity += moved;
                remaining -= moved;
            }
        }

        // 2. Один свободный слот под остаток
        if remaining > 0 {
            if let Some(free) = self.slots.iter_mut().find(|s| s.is_none()) {
                let placed = remaining.min(max_stack);
                *free = Some(ItemStack {
                    item,
                    quantity: placed,
                });
                remaining -= placed;
            }
        }

        remaining
    }

    /// Убрать до `quantity` предметов из слота; при нуле слот очищается
    ///
    /// Возвращает (предмет, сколько реально убрано).
    pub fn remove(&mut self, index: usize, quantity: u32) -> Option<(ItemInstance, u32)> {
        let slot = self.slots.get_mut(index)?;
        let stack = slot.as_mut()?;

        let removed = stack.quantity.min(quantity);
        stack.quantity -= removed;

        let item = stack.item.clone();
        if stack.quantity == 0 {
            *slot = None;
        }
        Some((item, removed))
    }

    /// Забрать слот целиком
    pub fn take_slot(&mut self, index: usize) -> Option<ItemStack> {
        self.slots.get_mut(index)?.take()
    }

    /// Переместить содержимое между слотами (занятая цель — swap)
    ///
    /// false если индексы вне сетки или источник пуст.
    pub fn move_stack(&mut self, from: usize, to: usize) -> bool {
        if from >= self.slots.len() || to >= self.slots.len() {
            return false;
        }
        if self.slots[from].is_none() {
            return false;
        }
        if from != to {
            self.slots.swap(from, to);
        }
        true
    }

    /// Полностью заменить сетку (load path)
    ///
    /// Инвариант `slots.len() == rows * columns` обязан соблюдаться
    /// вызывающим; нарушение — это баг, поэтому debug_assert.
    pub fn replace_grid(&mut self, rows: usize, columns: usize, slots: Vec<Option<ItemStack>>) {
        debug_assert_eq!(slots.len(), rows * columns);
        self.rows = rows;
        self.columns = columns;
        self.slots = slots;
    }
}

// ============================================================================
// Tests
// ============================================================================
