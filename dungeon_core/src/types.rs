//! Core types shared across the dungeon modules

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a piece of equipment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemType {
    Weapon,
    Armor,
}

impl ItemType {
    /// Slot this kind of item occupies when equipped
    pub fn slot(self) -> EquipmentSlot {
        match self {
            ItemType::Weapon => EquipmentSlot::Weapon,
            ItemType::Armor => EquipmentSlot::Armor,
        }
    }
}

/// Equipment slot on a character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentSlot {
    Weapon,
    Armor,
}

impl EquipmentSlot {
    /// Get all equipment slots
    pub fn all() -> &'static [EquipmentSlot] {
        &[EquipmentSlot::Weapon, EquipmentSlot::Armor]
    }
}

impl fmt::Display for EquipmentSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EquipmentSlot::Weapon => f.write_str("weapon"),
            EquipmentSlot::Armor => f.write_str("armor"),
        }
    }
}

/// Stable handle to an inventory entry
///
/// Inventories are append-only and never reordered, so the position an item
/// was stored at identifies it for the lifetime of its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub usize);

impl ItemId {
    /// Convert a 1-based menu number into a handle
    pub fn from_menu_number(number: usize) -> Option<Self> {
        number.checked_sub(1).map(ItemId)
    }

    /// 1-based number shown in menus
    pub fn menu_number(self) -> usize {
        self.0 + 1
    }
}
