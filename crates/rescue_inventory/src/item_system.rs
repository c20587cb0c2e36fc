//! Item System — базовая инфраструктура для предметов
//!
//! # Архитектура
//!
//! **ItemDefinition** — статический blueprint (id + category + stack rules):
//! - Хранится в `ItemDefinitions` resource (HashMap lookup)
//! - Immutable данные (name, category, max_stack)
//! - Создаются hardcoded в `ItemDefinitions::default()` (позже из data files)
//!
//! **ItemInstance** — runtime конкретный предмет:
//! - `instance_id` уникален для каждого заспавненного предмета, не меняется
//! - `definition_id` ссылается на `ItemDefinition` (shared по каталогу)
//! - Хранится в `Inventory` слотах и в `EquipmentSlot`
//!
//! **ItemSpawner** — фабрика instance id:
//! - Counter resource, id выдаются монотонно (детерминизм без RNG)
//!
//! # Пример использования
//!
//! ```rust
//! use rescue_inventory::{ItemDefinitions, ItemSpawner};
//!
//! let defs = ItemDefinitions::default();
//! let mut spawner = ItemSpawner::default();
//!
//! let def = defs.get(&"medkit".into()).unwrap();
//! let medkit = spawner.spawn(def);
//! assert_eq!(medkit.definition_id, "medkit".into());
//! ```

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// ItemId
// ============================================================================

/// Template identifier (shared by all instances of one catalog entry)
///
/// # Examples
/// - "assault_rifle"
/// - "medkit"
/// - "cell_key"
#[derive(Clone, Debug, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
pub struct ItemId(pub String);

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

// ============================================================================
// InstanceId
// ============================================================================

/// Per-spawn identifier, assigned once by `ItemSpawner` and never changed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Reflect)]
pub struct InstanceId(pub u64);

// ============================================================================
// ItemCategory
// ============================================================================

/// Категория предмета (управляет use/equip поведением)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Reflect)]
pub enum ItemCategory {
    /// Без категории — нельзя использовать и экипировать
    #[default]
    None,
    /// Weapon → routed в EquipmentSlot при use
    Weapon,
    /// Resource (medkit, ammo) → consumed при use
    Resource,
    /// Key → used но не consumed (двери, клетки)
    Key,
}

// ============================================================================
// ItemDefinition (статические данные)
// ============================================================================

/// Static item definition (blueprint)
///
/// Immutable данные, хранятся в `ItemDefinitions` resource.
#[derive(Clone, Debug, Reflect)]
pub struct ItemDefinition {
    /// Unique catalog ID
    pub id: ItemId,
    /// Display name
    pub name: String,
    /// Категория
    pub category: ItemCategory,
    /// Максимум в одном слоте (1 = не стекается)
    pub max_stack: u32,
}

// ============================================================================
// ItemInstance (runtime данные)
// ============================================================================

/// Runtime item instance (конкретный предмет)
///
/// Хранится в `Inventory` слотах и `EquipmentSlot`.
#[derive(Clone, Debug, PartialEq, Reflect)]
pub struct ItemInstance {
    /// Уникальный id этого экземпляра
    pub instance_id: InstanceId,
    /// Ссылка на definition
    pub definition_id: ItemId,
    /// Категория (копируется из definition при spawn)
    pub category: ItemCategory,
}

// ============================================================================
// ItemSpawner (Resource)
// ============================================================================

/// Factory для item instances — единственный источник instance id
#[derive(Resource, Debug)]
pub struct ItemSpawner {
    next_id: u64,
}

impl Default for ItemSpawner {
    fn default() -> Self {
        Self { next_id: 1 }
    }
}

impl ItemSpawner {
    /// Создать instance по definition, выдав свежий instance id
    pub fn spawn(&mut self, definition: &ItemDefinition) -> ItemInstance {
        let id = InstanceId(self.next_id);
        self.next_id += 1;
        ItemInstance {
            instance_id: id,
            definition_id: definition.id.clone(),
            category: definition.category,
        }
    }
}

// ============================================================================
// ItemDefinitions (Resource)
// ============================================================================

/// Item definitions lookup table (resource)
///
/// Хранит все статические данные предметов.
/// Создаётся один раз при запуске (hardcoded каталог).
#[derive(Resource, Clone, Debug)]
pub struct ItemDefinitions {
    definitions: HashMap<ItemId, ItemDefinition>,
}

impl ItemDefinitions {
    /// Создать пустой каталог
    pub fn new() -> Self {
        Self {
            definitions: HashMap::new(),
        }
    }

    /// Получить definition по ID
    pub fn get(&self, id: &ItemId) -> Option<&ItemDefinition> {
        self.definitions.get(id)
    }

    /// Добавить definition
    pub fn add(&mut self, definition: ItemDefinition) {
        self.definitions.insert(definition.id.clone(), definition);
    }

    /// Все известные IDs
    pub fn all_ids(&self) -> Vec<&ItemId> {
        self.definitions.keys().collect()
    }
}

impl Default for ItemDefinitions {
    /// Hardcoded definitions (базовый каталог отряда)
    fn default() -> Self {
        let mut defs = Self::new();

        // === WEAPONS ===

        defs.add(ItemDefinition {
            id: "assault_rifle".into(),
            name: "Assault Rifle".to_string(),
            category: ItemCategory::Weapon,
            max_stack: 1,
        });

        defs.add(ItemDefinition {
            id: "shotgun".into(),
            name: "Pump Shotgun".to_string(),
            category: ItemCategory::Weapon,
            max_stack: 1,
        });

        defs.add(ItemDefinition {
            id: "pistol".into(),
            name: "Sidearm Pistol".to_string(),
            category: ItemCategory::Weapon,
            max_stack: 1,
        });

        defs.add(ItemDefinition {
            id: "combat_bow".into(),
            name: "Combat Bow".to_string(),
            category: ItemCategory::Weapon,
            max_stack: 1,
        });

        // === RESOURCES ===

        defs.add(ItemDefinition {
            id: "medkit".into(),
            name: "Field Medkit".to_string(),
            category: ItemCategory::Resource,
            max_stack: 5,
        });

        defs.add(ItemDefinition {
            id: "ammo_pack".into(),
            name: "Ammo Pack".to_string(),
            category: ItemCategory::Resource,
            max_stack: 10,
        });

        defs.add(ItemDefinition {
            id: "energy_bar".into(),
            name: "Energy Bar".to_string(),
            category: ItemCategory::Resource,
            max_stack: 8,
        });

        // === KEYS ===

        // Ключи от клеток с заложниками — used, но не consumed
        defs.add(ItemDefinition {
            id: "cell_key".into(),
            name: "Cell Key".to_string(),
            category: ItemCategory::Key,
            max_stack: 1,
        });

        defs.add(ItemDefinition {
            id: "vault_keycard".into(),
            name: "Vault Keycard".to_string(),
            category: ItemCategory::Key,
            max_stack: 1,
        });

        defs
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_definitions_default() {
        let defs = ItemDefinitions::default();

        // Weapons
        assert!(defs.get(&"assault_rifle".into()).is_some());
        assert!(defs.get(&"shotgun".into()).is_some());
        assert!(defs.get(&"pistol".into()).is_some());

        // Resources
        assert!(defs.get(&"medkit".into()).is_some());
        assert!(defs.get(&"ammo_pack".into()).is_some());

        // Keys
        assert!(defs.get(&"cell_key".into()).is_some());

        assert!(defs.get(&"plasma_cannon".into()).is_none());
    }

    #[test]
    fn test_spawner_ids_unique_and_monotonic() {
        let defs = ItemDefinitions::default();
        let mut spawner = ItemSpawner::default();

        let rifle_def = defs.get(&"assault_rifle".into()).unwrap();
        let a = spawner.spawn(rifle_def);
        let b = spawner.spawn(rifle_def);

        // Один definition, разные instance id
        assert_eq!(a.definition_id, b.definition_id);
        assert_ne!(a.instance_id, b.instance_id);
        assert!(a.instance_id.0 < b.instance_id.0);
    }

    #[test]
    fn test_spawn_copies_category() {
        let defs = ItemDefinitions::default();
        let mut spawner = ItemSpawner::default();

        let key = spawner.spawn(defs.get(&"cell_key".into()).unwrap());
        assert_eq!(key.category, ItemCategory::Key);

        let medkit = spawner.spawn(defs.get(&"medkit".into()).unwrap());
        assert_eq!(medkit.category, ItemCategory::Resource);
    }
}
