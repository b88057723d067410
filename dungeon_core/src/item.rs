//! Item - Equipment carried in a character's inventory

use crate::types::{EquipmentSlot, ItemType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stat bonus carried by an item, tagged by kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ItemKind {
    Weapon { bonus_attack: u32 },
    Armor { bonus_defense: u32 },
}

/// A piece of equipment. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    name: String,
    kind: ItemKind,
}

impl Item {
    /// Create an item from a name and kind
    pub fn new(name: impl Into<String>, kind: ItemKind) -> Self {
        Item {
            name: name.into(),
            kind,
        }
    }

    /// Create a weapon granting `bonus_attack`
    pub fn weapon(name: impl Into<String>, bonus_attack: u32) -> Self {
        Self::new(name, ItemKind::Weapon { bonus_attack })
    }

    /// Create an armor piece granting `bonus_defense`
    pub fn armor(name: impl Into<String>, bonus_defense: u32) -> Self {
        Self::new(name, ItemKind::Armor { bonus_defense })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    pub fn item_type(&self) -> ItemType {
        match self.kind {
            ItemKind::Weapon { .. } => ItemType::Weapon,
            ItemKind::Armor { .. } => ItemType::Armor,
        }
    }

    /// Slot this item equips into
    pub fn slot(&self) -> EquipmentSlot {
        self.item_type().slot()
    }

    /// Attack bonus (0 for armor)
    pub fn bonus_attack(&self) -> u32 {
        match self.kind {
            ItemKind::Weapon { bonus_attack } => bonus_attack,
            ItemKind::Armor { .. } => 0,
        }
    }

    /// Defense bonus (0 for weapons)
    pub fn bonus_defense(&self) -> u32 {
        match self.kind {
            ItemKind::Armor { bonus_defense } => bonus_defense,
            ItemKind::Weapon { .. } => 0,
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ItemKind::Weapon { bonus_attack } => write!(f, "{} (+{} ATK)", self.name, bonus_attack),
            ItemKind::Armor { bonus_defense } => write!(f, "{} (+{} DEF)", self.name, bonus_defense),
        }
    }
}
