//! Experience, level-ups and healing potions

use super::{Character, CharacterError};
use std::fmt;

/// A level gained from experience
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelUp {
    pub name: String,
    pub level: u32,
    pub attack_power: i32,
    pub defense: i32,
}

impl fmt::Display for LevelUp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} leveled up to level {}!", self.name, self.level)
    }
}

impl Character {
    /// Add experience. Reaching the threshold grants at most one level per
    /// call; any surplus stays in `xp`, even if it is still above the
    /// threshold.
    pub fn gain_xp(&mut self, amount: u32) -> Option<LevelUp> {
        let progression = self.rules.progression;
        self.xp = self.xp.saturating_add(amount);

        if self.xp < progression.xp_per_level {
            tracing::debug!(character = %self.name, amount, xp = self.xp, "xp gained");
            return None;
        }

        self.level += 1;
        self.attack_power += progression.level_up_attack;
        self.defense += progression.level_up_defense;
        self.health = progression.max_health;
        self.xp -= progression.xp_per_level;

        tracing::debug!(
            character = %self.name,
            level = self.level,
            attack_power = self.attack_power,
            defense = self.defense,
            xp = self.xp,
            "level up"
        );

        Some(LevelUp {
            name: self.name.clone(),
            level: self.level,
            attack_power: self.attack_power,
            defense: self.defense,
        })
    }

    /// Drink a potion, restoring health up to the cap. Returns the new health.
    ///
    /// Declines without changing anything when there are no potions or
    /// health is already full.
    pub fn use_potion(&mut self) -> Result<i32, CharacterError> {
        let progression = self.rules.progression;

        if self.potions == 0 {
            return Err(CharacterError::NoPotions {
                name: self.name.clone(),
            });
        }
        if self.health >= progression.max_health {
            return Err(CharacterError::FullHealth {
                name: self.name.clone(),
            });
        }

        self.health = (self.health + progression.potion_heal).min(progression.max_health);
        self.potions -= 1;

        tracing::debug!(
            character = %self.name,
            health = self.health,
            potions = self.potions,
            "potion used"
        );
        Ok(self.health)
    }

    pub fn add_potion(&mut self) {
        self.potions += 1;
        tracing::debug!(character = %self.name, potions = self.potions, "potion added");
    }
}
