//! Serialized inventory snapshot
//!
//! # Архитектура
//!
//! **SerializedInventory** — плоский DTO для save/load границы:
//! - Размер сетки + имя + тег + diagnostic flag
//! - Параллельные массивы: definition id и количество, по одной записи на
//!   занятый слот, в порядке сетки
//! - Инварианты: длины массивов равны, длина ≤ rows × columns,
//!   каждое количество > 0
//!
//! Внешний формат фиксирован: `NumberOfRows`, `NumberOfColumns`,
//! `InventoryName`, `InventoryType`, `DrawContentInInspector`,
//! `ContentType[]`, `ContentQuantity[]`. Durable storage — забота
//! внешнего слоя; здесь только capture/apply и JSON helpers.
//!
//! Load path — fail fast: malformed snapshot не трогает целевой инвентарь.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::components::inventory::{Inventory, InventoryKind, ItemStack};
use crate::item_system::{ItemDefinitions, ItemId, ItemSpawner};

// ============================================================================
// SnapshotError
// ============================================================================

/// Ошибки load path
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("content arrays diverge: {types} item kinds vs {quantities} quantities")]
    ContentLengthMismatch { types: usize, quantities: usize },

    #[error("{entries} content entries exceed grid capacity {capacity}")]
    CapacityExceeded { entries: usize, capacity: usize },

    #[error("content entry {index} has zero quantity")]
    EmptyContentEntry { index: usize },

    #[error("unknown item id in snapshot: {0:?}")]
    UnknownItem(ItemId),

    #[error("snapshot JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// SerializedInventory
// ============================================================================

/// Плоский snapshot инвентаря (pure data-transfer value)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SerializedInventory {
    pub number_of_rows: usize,
    pub number_of_columns: usize,
    pub inventory_name: String,
    pub inventory_type: InventoryKind,
    pub draw_content_in_inspector: bool,
    pub content_type: Vec<ItemId>,
    pub content_quantity: Vec<u32>,
}

impl SerializedInventory {
    /// Снять snapshot с инвентаря (save boundary)
    pub fn capture(inventory: &Inventory) -> Self {
        let mut content_type = Vec::new();
        let mut content_quantity = Vec::new();

        for (_, stack) in inventory.occupied() {
            content_type.push(stack.item.definition_id.clone());
            content_quantity.push(stack.quantity);
        }

        Self {
            number_of_rows: inventory.rows,
            number_of_columns: inventory.columns,
            inventory_name: inventory.name.clone(),
            inventory_type: inventory.kind,
            draw_content_in_inspector: inventory.debug_draw,
            content_type,
            content_quantity,
        }
    }

    /// Проверить инварианты формы
    pub fn validate(&self) -> Result<(), SnapshotError> {
        if self.content_type.len() != self.content_quantity.len() {
            return Err(SnapshotError::ContentLengthMismatch {
                types: self.content_type.len(),
                quantities: self.content_quantity.len(),
            });
        }

        let capacity = self.number_of_rows * self.number_of_columns;
        if self.content_type.len() > capacity {
            return Err(SnapshotError::CapacityExceeded {
                entries: self.content_type.len(),
                capacity,
            });
        }

        if let Some(index) = self.content_quantity.iter().position(|&q| q == 0) {
            return Err(SnapshotError::EmptyContentEntry { index });
        }

        Ok(())
    }

    /// Восстановить инвентарь (load boundary)
    ///
    /// Fail fast: при любой ошибке `inventory` остаётся нетронутым.
    /// Предметы пересоздаются фабрикой — instance id свежие.
    pub fn apply_to(
        &self,
        inventory: &mut Inventory,
        definitions: &ItemDefinitions,
        spawner: &mut ItemSpawner,
    ) -> Result<(), SnapshotError> {
        self.validate()?;

        // Все template id должны быть известны каталогу до каких-либо мутаций
        let mut resolved = Vec::with_capacity(self.content_type.len());
        for id in &self.content_type {
            let definition = definitions
                .get(id)
                .ok_or_else(|| SnapshotError::UnknownItem(id.clone()))?;
            resolved.push(definition);
        }

        let capacity = self.number_of_rows * self.number_of_columns;
        let mut slots: Vec<Option<ItemStack>> = vec![None; capacity];

        // Записи идут подряд с нулевого слота (позиции компактуются)
        for (slot, (definition, &quantity)) in slots
            .iter_mut()
            .zip(resolved.iter().zip(self.content_quantity.iter()))
        {
            *slot = Some(ItemStack {
                item: spawner.spawn(definition),
                quantity,
            });
        }

        inventory.name = self.inventory_name.clone();
        inventory.kind = self.inventory_type;
        inventory.debug_draw = self.draw_content_in_inspector;
        inventory.replace_grid(self.number_of_rows, self.number_of_columns, slots);
        Ok(())
    }

    /// В JSON внешнего контракта
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Из JSON внешнего контракта
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_inventory() -> (Inventory, ItemDefinitions, ItemSpawner) {
        let defs = ItemDefinitions::default();
        let mut spawner = ItemSpawner::default();
        let mut inv = Inventory::new("SquadBackpack", InventoryKind::Main, 2, 3);

        let medkit = spawner.spawn(defs.get(&"medkit".into()).unwrap());
        let rifle = spawner.spawn(defs.get(&"assault_rifle".into()).unwrap());
        inv.add(medkit, 3, 5);
        inv.add(rifle, 1, 1);

        (inv, defs, spawner)
    }

    #[test]
    fn test_capture_records_populated_slots_only() {
        let (inv, _, _) = sample_inventory();
        let snap = SerializedInventory::capture(&inv);

        assert_eq!(snap.number_of_rows, 2);
        assert_eq!(snap.number_of_columns, 3);
        assert_eq!(snap.inventory_name, "SquadBackpack");
        assert_eq!(snap.content_type.len(), 2);
        assert_eq!(snap.content_quantity, vec![3, 1]);
        snap.validate().unwrap();
    }

    #[test]
    fn test_json_uses_external_field_names() {
        let (inv, _, _) = sample_inventory();
        let json = SerializedInventory::capture(&inv).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        for key in [
            "NumberOfRows",
            "NumberOfColumns",
            "InventoryName",
            "InventoryType",
            "DrawContentInInspector",
            "ContentType",
            "ContentQuantity",
        ] {
            assert!(value.get(key).is_some(), "missing field {key}");
        }
        assert_eq!(value["InventoryType"], "Main");
        assert_eq!(value["ContentType"][0], "medkit");
    }

    #[test]
    fn test_validate_rejects_length_mismatch() {
        let snap = SerializedInventory {
            number_of_rows: 2,
            number_of_columns: 2,
            inventory_name: "Broken".into(),
            inventory_type: InventoryKind::Main,
            draw_content_in_inspector: false,
            content_type: vec!["medkit".into(), "pistol".into()],
            content_quantity: vec![1],
        };
        assert!(matches!(
            snap.validate(),
            Err(SnapshotError::ContentLengthMismatch { types: 2, quantities: 1 })
        ));
    }

    #[test]
    fn test_validate_rejects_capacity_overflow() {
        let snap = SerializedInventory {
            number_of_rows: 1,
            number_of_columns: 1,
            inventory_name: "Tiny".into(),
            inventory_type: InventoryKind::Main,
            draw_content_in_inspector: false,
            content_type: vec!["medkit".into(), "pistol".into()],
            content_quantity: vec![1, 1],
        };
        assert!(matches!(
            snap.validate(),
            Err(SnapshotError::CapacityExceeded { entries: 2, capacity: 1 })
        ));
    }

    #[test]
    fn test_validate_rejects_zero_quantity() {
        let snap = SerializedInventory {
            number_of_rows: 2,
            number_of_columns: 2,
            inventory_name: "Zeroed".into(),
            inventory_type: InventoryKind::Main,
            draw_content_in_inspector: false,
            content_type: vec!["medkit".into()],
            content_quantity: vec![0],
        };
        assert!(matches!(
            snap.validate(),
            Err(SnapshotError::EmptyContentEntry { index: 0 })
        ));
    }

    #[test]
    fn test_apply_rejects_unknown_item_untouched() {
        let defs = ItemDefinitions::default();
        let mut spawner = ItemSpawner::default();
        let mut inv = Inventory::new("Target", InventoryKind::Main, 1, 1);

        let snap = SerializedInventory {
            number_of_rows: 2,
            number_of_columns: 2,
            inventory_name: "Incoming".into(),
            inventory_type: InventoryKind::Equipment,
            draw_content_in_inspector: true,
            content_type: vec!["plasma_cannon".into()],
            content_quantity: vec![1],
        };

        assert!(matches!(
            snap.apply_to(&mut inv, &defs, &mut spawner),
            Err(SnapshotError::UnknownItem(_))
        ));
        // Цель не тронута
        assert_eq!(inv.name, "Target");
        assert_eq!(inv.slot_count(), 1);
    }

    #[test]
    fn test_capture_apply_round_trip_fresh_ids() {
        let (inv, defs, mut spawner) = sample_inventory();
        let snap = SerializedInventory::capture(&inv);

        let mut restored = Inventory::new("Empty", InventoryKind::Main, 0, 0);
        snap.apply_to(&mut restored, &defs, &mut spawner).unwrap();

        assert_eq!(restored.name, "SquadBackpack");
        assert_eq!(restored.slot_count(), 6);
        assert_eq!(restored.total_quantity(&"medkit".into()), 3);
        assert_eq!(restored.total_quantity(&"assault_rifle".into()), 1);

        // Фабрика выдала свежие instance id
        let old_ids: Vec<_> = inv.occupied().map(|(_, s)| s.item.instance_id).collect();
        let new_ids: Vec<_> = restored
            .occupied()
            .map(|(_, s)| s.item.instance_id)
            .collect();
        for id in &new_ids {
            assert!(!old_ids.contains(id));
        }
    }
}
