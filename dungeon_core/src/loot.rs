//! Loot - post-victory rewards decided by a single roll

use crate::character::Character;
use crate::config::LootConstants;
use crate::item::Item;
use crate::types::{ItemId, ItemType};
use rand::Rng;
use std::fmt;

/// Reward category picked by a loot roll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LootCategory {
    Gold,
    Potion,
    Item,
    Nothing,
}

impl LootCategory {
    /// Classify a roll in [0, 1) against the half-open threshold bands
    pub fn from_roll(roll: f64, loot: &LootConstants) -> Self {
        if roll < loot.gold_below {
            LootCategory::Gold
        } else if roll < loot.potion_below {
            LootCategory::Potion
        } else if roll < loot.item_below {
            LootCategory::Item
        } else {
            LootCategory::Nothing
        }
    }
}

/// Reward applied to the hero
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LootOutcome {
    Gold(u32),
    Potion,
    Item { id: ItemId, item: Item },
    Nothing,
}

impl LootOutcome {
    pub fn category(&self) -> LootCategory {
        match self {
            LootOutcome::Gold(_) => LootCategory::Gold,
            LootOutcome::Potion => LootCategory::Potion,
            LootOutcome::Item { .. } => LootCategory::Item,
            LootOutcome::Nothing => LootCategory::Nothing,
        }
    }
}

/// A loot drop and who received it
#[derive(Debug, Clone, PartialEq)]
pub struct LootDrop {
    pub recipient: String,
    pub roll: f64,
    pub outcome: LootOutcome,
}

impl fmt::Display for LootDrop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            LootOutcome::Gold(amount) => write!(f, "{} picked up {} gold!", self.recipient, amount),
            LootOutcome::Potion => write!(f, "{} found a potion.", self.recipient),
            LootOutcome::Item { item, .. } => write!(f, "{} picked up {}", self.recipient, item.name()),
            LootOutcome::Nothing => write!(f, "No loot dropped this time."),
        }
    }
}

/// Roll once and apply the resulting reward to `hero`
pub fn loot_drop(hero: &mut Character, loot: &LootConstants, rng: &mut impl Rng) -> LootDrop {
    let roll: f64 = rng.gen();

    let outcome = match LootCategory::from_roll(roll, loot) {
        LootCategory::Gold => {
            let amount = rng.gen_range(loot.gold_min..=loot.gold_max);
            hero.gain_gold(amount);
            LootOutcome::Gold(amount)
        }
        LootCategory::Potion => {
            hero.add_potion();
            LootOutcome::Potion
        }
        LootCategory::Item => {
            let item = generate_item(loot, rng);
            let id = hero.add_item(item.clone());
            LootOutcome::Item { id, item }
        }
        LootCategory::Nothing => LootOutcome::Nothing,
    };

    tracing::debug!(hero = %hero.name(), roll, category = ?outcome.category(), "loot rolled");
    LootDrop {
        recipient: hero.name().to_string(),
        roll,
        outcome,
    }
}

/// Random weapon or armor with a bonus in the configured range
pub fn generate_item(loot: &LootConstants, rng: &mut impl Rng) -> Item {
    let item_type = if rng.gen_bool(0.5) {
        ItemType::Weapon
    } else {
        ItemType::Armor
    };
    let bonus = rng.gen_range(loot.bonus_min..=loot.bonus_max);

    match item_type {
        ItemType::Weapon => Item::weapon(format!("Sword +{}", bonus), bonus),
        ItemType::Armor => Item::armor(format!("Armor +{}", bonus), bonus),
    }
}
