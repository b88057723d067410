//! Shop - trade gold for potions and permanent stat increases

use crate::character::{Character, CharacterError};
use crate::config::ShopConstants;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Shop failure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShopError {
    #[error("Invalid choice!")]
    InvalidChoice { input: String },
    #[error(transparent)]
    Character(#[from] CharacterError),
}

/// A shop menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopChoice {
    BuyPotion,
    IncreaseAttack,
    IncreaseDefense,
    Exit,
}

impl ShopChoice {
    /// All entries, in menu order
    pub fn all() -> &'static [ShopChoice] {
        &[
            ShopChoice::BuyPotion,
            ShopChoice::IncreaseAttack,
            ShopChoice::IncreaseDefense,
            ShopChoice::Exit,
        ]
    }

    /// Map a 1-based menu number to an entry
    pub fn from_menu_number(number: i64) -> Option<Self> {
        let index = usize::try_from(number).ok()?.checked_sub(1)?;
        Self::all().get(index).copied()
    }
}

impl FromStr for ShopChoice {
    type Err = ShopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .ok()
            .and_then(ShopChoice::from_menu_number)
            .ok_or_else(|| ShopError::InvalidChoice {
                input: s.trim().to_string(),
            })
    }
}

/// A completed shop transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Purchase {
    Potion,
    Attack(i32),
    Defense(i32),
    Left,
}

impl fmt::Display for Purchase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Purchase::Potion => f.write_str("You bought a potion."),
            Purchase::Attack(_) => f.write_str("Attack increased!"),
            Purchase::Defense(_) => f.write_str("Defense increased!"),
            Purchase::Left => f.write_str("Leaving the shop!"),
        }
    }
}

/// Carry out one menu entry. Each entry pays only its own price; nothing
/// is bought when the hero cannot afford it.
pub fn purchase(
    hero: &mut Character,
    choice: ShopChoice,
    shop: &ShopConstants,
) -> Result<Purchase, ShopError> {
    let purchase = match choice {
        ShopChoice::Exit => return Ok(Purchase::Left),
        ShopChoice::BuyPotion => {
            hero.spend_gold(shop.potion_price)?;
            hero.add_potion();
            Purchase::Potion
        }
        ShopChoice::IncreaseAttack => {
            hero.spend_gold(shop.attack_price)?;
            hero.increase_attack(shop.stat_increase);
            Purchase::Attack(shop.stat_increase)
        }
        ShopChoice::IncreaseDefense => {
            hero.spend_gold(shop.defense_price)?;
            hero.increase_defense(shop.stat_increase);
            Purchase::Defense(shop.stat_increase)
        }
    };

    tracing::debug!(hero = %hero.name(), ?purchase, gold = hero.gold(), "shop purchase");
    Ok(purchase)
}

/// Menu text for `hero`'s visit
pub fn menu<'a>(hero: &'a Character, shop: &'a ShopConstants) -> ShopMenu<'a> {
    ShopMenu { hero, shop }
}

/// Display adapter for the shop greeting and price list
pub struct ShopMenu<'a> {
    hero: &'a Character,
    shop: &'a ShopConstants,
}

impl fmt::Display for ShopMenu<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shop = self.shop;
        writeln!(f, "Welcome to the shop!")?;
        writeln!(f, "Your gold: {}", self.hero.gold())?;
        writeln!(f, "1. Buy Potion ({} gold)", shop.potion_price)?;
        writeln!(
            f,
            "2. Increase Attack (+{}) ({} gold)",
            shop.stat_increase, shop.attack_price
        )?;
        writeln!(
            f,
            "3. Increase Defense (+{}) ({} gold)",
            shop.stat_increase, shop.defense_price
        )?;
        write!(f, "4. Exit shop")
    }
}
