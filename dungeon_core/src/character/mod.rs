//! Character - A combatant with vitals, progression, gold and equipment
//!
//! The hero and every enemy are the same type. Behavior is split by concern:
//! - `combat`: attack rolls, damage and aliveness
//! - `progression`: XP, level-ups and potions
//! - `economy`: gold, stat purchases, inventory and equipment

mod combat;
mod economy;
mod progression;

pub use combat::{AttackOutcome, AttackRoll};
pub use economy::Equipped;
pub use progression::LevelUp;

use crate::config::CharacterRules;
use crate::item::Item;
use crate::types::{EquipmentSlot, ItemId};
use std::fmt;
use thiserror::Error;

/// An action a character declined to perform
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CharacterError {
    #[error("Not enough gold!")]
    InsufficientGold { needed: u32, available: u32 },
    #[error("{name} has no potions left.")]
    NoPotions { name: String },
    #[error("{name} is already at full health.")]
    FullHealth { name: String },
    #[error("Invalid selection.")]
    InvalidItemIndex { index: usize, inventory_size: usize },
}

/// A combatant: the hero or an enemy
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    name: String,
    health: i32,
    attack_power: i32,
    defense: i32,
    xp: u32,
    level: u32,
    potions: u32,
    gold: u32,

    /// Append-only; `ItemId`s index into it
    inventory: Vec<Item>,
    equipped_weapon: Option<ItemId>,
    equipped_armor: Option<ItemId>,

    rules: CharacterRules,
}

impl Character {
    /// Create a level 1 character using the default rules
    pub fn new(name: impl Into<String>, attack_power: i32, defense: i32, health: i32) -> Self {
        Self::with_rules(name, attack_power, defense, health, CharacterRules::default())
    }

    /// Create a level 1 character following the given rules
    pub fn with_rules(
        name: impl Into<String>,
        attack_power: i32,
        defense: i32,
        health: i32,
        rules: CharacterRules,
    ) -> Self {
        Character {
            name: name.into(),
            health: health.max(0),
            attack_power,
            defense,
            xp: 0,
            level: 1,
            potions: rules.progression.starting_potions,
            gold: 0,
            inventory: Vec::new(),
            equipped_weapon: None,
            equipped_armor: None,
            rules,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    /// Base attack, without equipment
    pub fn attack_power(&self) -> i32 {
        self.attack_power
    }

    /// Base defense, without equipment
    pub fn defense(&self) -> i32 {
        self.defense
    }

    pub fn xp(&self) -> u32 {
        self.xp
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn potions(&self) -> u32 {
        self.potions
    }

    pub fn gold(&self) -> u32 {
        self.gold
    }

    pub fn rules(&self) -> &CharacterRules {
        &self.rules
    }

    pub fn inventory(&self) -> &[Item] {
        &self.inventory
    }

    /// Look up an inventory entry by handle
    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.inventory.get(id.0)
    }

    /// Handle of the item in `slot`, if any
    pub fn equipped_id(&self, slot: EquipmentSlot) -> Option<ItemId> {
        match slot {
            EquipmentSlot::Weapon => self.equipped_weapon,
            EquipmentSlot::Armor => self.equipped_armor,
        }
    }

    /// The item in `slot`, if any
    pub fn equipped(&self, slot: EquipmentSlot) -> Option<&Item> {
        self.equipped_id(slot).and_then(|id| self.item(id))
    }

    /// Full stat sheet for display
    pub fn stat_sheet(&self) -> StatSheet<'_> {
        StatSheet(self)
    }

    /// One-line health summary for display
    pub fn health_line(&self) -> HealthLine<'_> {
        HealthLine(self)
    }

    /// Numbered inventory list for display
    pub fn inventory_listing(&self) -> InventoryListing<'_> {
        InventoryListing(self)
    }
}

/// Display adapter: `Knight's Stats:` followed by every counter
pub struct StatSheet<'a>(&'a Character);

impl fmt::Display for StatSheet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.0;
        writeln!(f, "{}'s Stats:", c.name)?;
        writeln!(f, "Health: {}", c.health)?;
        write_stat(f, "Attack", c.attack_power, c.total_attack())?;
        write_stat(f, "Defense", c.defense, c.total_defense())?;
        writeln!(f, "Level: {}", c.level)?;
        writeln!(f, "XP: {}/{}", c.xp, c.rules.progression.xp_per_level)?;
        writeln!(f, "Potions: {}", c.potions)?;
        write!(f, "Gold: {}", c.gold)?;
        for slot in EquipmentSlot::all() {
            if let Some(item) = c.equipped(*slot) {
                write!(f, "\nEquipped {}: {}", slot, item)?;
            }
        }
        Ok(())
    }
}

fn write_stat(f: &mut fmt::Formatter<'_>, label: &str, base: i32, total: i32) -> fmt::Result {
    if base == total {
        writeln!(f, "{}: {}", label, base)
    } else {
        writeln!(f, "{}: {} ({} with equipment)", label, base, total)
    }
}

/// Display adapter: `Knight's health: 87`
pub struct HealthLine<'a>(&'a Character);

impl fmt::Display for HealthLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}'s health: {}", self.0.name, self.0.health)
    }
}

/// Display adapter: numbered inventory, equipped entries marked
pub struct InventoryListing<'a>(&'a Character);

impl fmt::Display for InventoryListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.0;
        write!(f, "Inventory:")?;
        if c.inventory.is_empty() {
            return write!(f, "\n  (empty)");
        }
        for (index, item) in c.inventory.iter().enumerate() {
            let id = ItemId(index);
            let marker = if c.equipped_id(item.slot()) == Some(id) {
                " [equipped]"
            } else {
                ""
            };
            write!(f, "\n{}. {}{}", id.menu_number(), item, marker)?;
        }
        Ok(())
    }
}
