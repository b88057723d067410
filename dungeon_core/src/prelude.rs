//! Prelude module for convenient imports
//!
//! ```rust
//! use dungeon_core::prelude::*;
//! ```

// Core types
pub use crate::item::{Item, ItemKind};
pub use crate::types::{EquipmentSlot, ItemId, ItemType};

// Characters
pub use crate::character::{AttackOutcome, AttackRoll, Character, CharacterError};

// Encounters, loot, shop
pub use crate::encounter::generate_random_enemy;
pub use crate::loot::{loot_drop, LootDrop, LootOutcome};
pub use crate::shop::{purchase, Purchase, ShopChoice, ShopError};

// Game loop
pub use crate::console::Console;
pub use crate::game::{Game, GameState, RunOutcome};

// Config
pub use crate::config::{default_constants, GameConstants};
