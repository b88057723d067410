//! dungeon_core - Characters, combat and progression for a text dungeon crawler
//!
//! This library provides:
//! - Item / Character: equipment, vitals, combat, XP and gold
//! - Encounter generation: random enemies scaled by difficulty
//! - Loot and Shop: post-victory rewards and gold sinks
//! - Game: the encounter loop as a state machine over a Console
//!
//! All randomness is drawn from a caller-supplied `rand::Rng`, so a seeded
//! generator reproduces a whole run.

pub mod character;
pub mod config;
pub mod console;
pub mod encounter;
pub mod game;
pub mod item;
pub mod loot;
pub mod prelude;
pub mod shop;
pub mod types;

// Re-export core types for convenience
pub use character::{AttackOutcome, AttackRoll, Character, CharacterError, Equipped, LevelUp};
pub use config::{default_constants, ConfigError, GameConstants};
pub use console::{Console, NumberInput};
pub use encounter::generate_random_enemy;
pub use game::{Game, GameState, RunOutcome};
pub use item::{Item, ItemKind};
pub use loot::{loot_drop, LootCategory, LootDrop, LootOutcome};
pub use shop::{Purchase, ShopChoice, ShopError};
pub use types::{EquipmentSlot, ItemId, ItemType};
