//! Game constants configuration

use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Tunable game constants
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameConstants {
    #[serde(default)]
    pub hero: HeroConstants,
    #[serde(default)]
    pub combat: CombatConstants,
    #[serde(default)]
    pub progression: ProgressionConstants,
    #[serde(default)]
    pub encounter: EncounterConstants,
    #[serde(default)]
    pub loot: LootConstants,
    #[serde(default)]
    pub shop: ShopConstants,
    #[serde(default)]
    pub pacing: PacingConstants,
}

impl GameConstants {
    /// Rules every character in a run follows
    pub fn character_rules(&self) -> CharacterRules {
        CharacterRules {
            combat: self.combat,
            progression: self.progression,
        }
    }

    /// Check ranges and probabilities for consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        let c = &self.combat;
        if !(0.0..=1.0).contains(&c.crit_chance) {
            return Err(invalid(format!("combat.crit_chance {} outside [0, 1]", c.crit_chance)));
        }
        if c.damage_spread < 0 {
            return Err(invalid("combat.damage_spread must not be negative"));
        }
        if c.crit_multiplier < 1 {
            return Err(invalid("combat.crit_multiplier must be at least 1"));
        }
        // A zero floor lets two armoured fighters stall forever
        if c.min_damage < 1 {
            return Err(invalid("combat.min_damage must be at least 1"));
        }

        let p = &self.progression;
        if p.xp_per_level == 0 {
            return Err(invalid("progression.xp_per_level must be positive"));
        }
        if p.max_health <= 0 {
            return Err(invalid("progression.max_health must be positive"));
        }
        if p.potion_heal < 0 {
            return Err(invalid("progression.potion_heal must not be negative"));
        }

        let e = &self.encounter;
        check_range("encounter.attack", e.attack_min, e.attack_max)?;
        check_range("encounter.defense", e.defense_min, e.defense_max)?;
        check_range("encounter.health", e.health_min, e.health_max)?;
        if e.health_min <= 0 {
            return Err(invalid("encounter.health_min must be positive"));
        }
        if e.archetypes.is_empty() {
            return Err(invalid("encounter.archetypes must not be empty"));
        }

        let l = &self.loot;
        let thresholds = [l.gold_below, l.potion_below, l.item_below];
        if thresholds.iter().any(|t| !(0.0..=1.0).contains(t)) {
            return Err(invalid("loot thresholds must lie in [0, 1]"));
        }
        if thresholds.windows(2).any(|w| w[0] > w[1]) {
            return Err(invalid("loot thresholds must be non-decreasing"));
        }
        check_range("loot.gold", l.gold_min, l.gold_max)?;
        check_range("loot.bonus", l.bonus_min, l.bonus_max)?;

        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> ConfigError {
    ConfigError::ValidationError(message.into())
}

fn check_range<T: PartialOrd + std::fmt::Display>(name: &str, min: T, max: T) -> Result<(), ConfigError> {
    if min > max {
        return Err(invalid(format!("{name}: min {min} exceeds max {max}")));
    }
    Ok(())
}

/// The player character at the start of a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroConstants {
    pub name: String,
    pub attack_power: i32,
    pub defense: i32,
    pub health: i32,
}

impl Default for HeroConstants {
    fn default() -> Self {
        HeroConstants {
            name: "Knight".to_string(),
            attack_power: 20,
            defense: 10,
            health: 100,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CombatConstants {
    /// Probability that an attack is a critical hit
    #[serde(default = "default_crit_chance")]
    pub crit_chance: f64,
    /// Damage multiplier applied on a critical hit
    #[serde(default = "default_crit_multiplier")]
    pub crit_multiplier: i32,
    /// Base damage is rolled in `total_attack ± damage_spread`
    #[serde(default = "default_damage_spread")]
    pub damage_spread: i32,
    /// Floor on damage after defense
    #[serde(default = "default_min_damage")]
    pub min_damage: i32,
}

impl Default for CombatConstants {
    fn default() -> Self {
        CombatConstants {
            crit_chance: 0.20,
            crit_multiplier: 2,
            damage_spread: 5,
            min_damage: 1,
        }
    }
}

fn default_crit_chance() -> f64 {
    0.20
}
fn default_crit_multiplier() -> i32 {
    2
}
fn default_damage_spread() -> i32 {
    5
}
fn default_min_damage() -> i32 {
    1
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressionConstants {
    /// XP needed for one level-up
    pub xp_per_level: u32,
    pub level_up_attack: i32,
    pub level_up_defense: i32,
    /// Health cap for potions, restored in full on level-up
    pub max_health: i32,
    pub potion_heal: i32,
    pub starting_potions: u32,
    /// XP granted for winning an encounter
    pub victory_xp: u32,
}

impl Default for ProgressionConstants {
    fn default() -> Self {
        ProgressionConstants {
            xp_per_level: 100,
            level_up_attack: 5,
            level_up_defense: 5,
            max_health: 100,
            potion_heal: 30,
            starting_potions: 2,
            victory_xp: 100,
        }
    }
}

/// Combat and progression rules carried by each character
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CharacterRules {
    pub combat: CombatConstants,
    pub progression: ProgressionConstants,
}

/// Enemy stat ranges. Attack and defense ranges shift up with difficulty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncounterConstants {
    /// Number of encounters in a run
    pub count: u32,
    pub attack_min: i32,
    pub attack_max: i32,
    pub attack_per_level: i32,
    pub defense_min: i32,
    pub defense_max: i32,
    pub defense_per_level: i32,
    pub health_min: i32,
    pub health_max: i32,
    pub archetypes: Vec<String>,
}

impl Default for EncounterConstants {
    fn default() -> Self {
        EncounterConstants {
            count: 3,
            attack_min: 10,
            attack_max: 20,
            attack_per_level: 2,
            defense_min: 5,
            defense_max: 10,
            defense_per_level: 1,
            health_min: 80,
            health_max: 120,
            archetypes: ["Goblin", "Skeleton", "Bandit", "Zombie", "Dark Elf", "Orc Warrior"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Loot roll partition. A roll `r` in [0, 1) yields gold below `gold_below`,
/// a potion below `potion_below`, an item below `item_below`, else nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LootConstants {
    pub gold_below: f64,
    pub potion_below: f64,
    pub item_below: f64,
    pub gold_min: u32,
    pub gold_max: u32,
    pub bonus_min: u32,
    pub bonus_max: u32,
}

impl Default for LootConstants {
    fn default() -> Self {
        LootConstants {
            gold_below: 0.4,
            potion_below: 0.7,
            item_below: 0.95,
            gold_min: 10,
            gold_max: 50,
            bonus_min: 3,
            bonus_max: 10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopConstants {
    pub potion_price: u32,
    pub attack_price: u32,
    pub defense_price: u32,
    /// Stat points gained per attack/defense purchase
    pub stat_increase: i32,
}

impl Default for ShopConstants {
    fn default() -> Self {
        ShopConstants {
            potion_price: 30,
            attack_price: 50,
            defense_price: 50,
            stat_increase: 1,
        }
    }
}

/// Artificial delays between messages, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PacingConstants {
    pub encounter_intro_ms: u64,
    pub turn_ms: u64,
    pub post_victory_ms: u64,
}

impl Default for PacingConstants {
    fn default() -> Self {
        PacingConstants {
            encounter_intro_ms: 1500,
            turn_ms: 1000,
            post_victory_ms: 1500,
        }
    }
}

impl PacingConstants {
    /// No delays at all
    pub fn instant() -> Self {
        PacingConstants {
            encounter_intro_ms: 0,
            turn_ms: 0,
            post_victory_ms: 0,
        }
    }

    pub fn encounter_intro(&self) -> Duration {
        Duration::from_millis(self.encounter_intro_ms)
    }

    pub fn turn(&self) -> Duration {
        Duration::from_millis(self.turn_ms)
    }

    pub fn post_victory(&self) -> Duration {
        Duration::from_millis(self.post_victory_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constants() {
        let constants = GameConstants::default();
        assert!((constants.combat.crit_chance - 0.20).abs() < f64::EPSILON);
        assert_eq!(constants.combat.crit_multiplier, 2);
        assert_eq!(constants.progression.xp_per_level, 100);
        assert_eq!(constants.encounter.count, 3);
        assert_eq!(constants.encounter.archetypes.len(), 6);
        assert!(constants.validate().is_ok());
    }

    #[test]
    fn test_parse_constants() {
        let toml = r#"
[combat]
crit_chance = 0.5

[progression]
potion_heal = 40

[pacing]
turn_ms = 0
"#;

        let constants: GameConstants = toml::from_str(toml).unwrap();
        assert!((constants.combat.crit_chance - 0.5).abs() < f64::EPSILON);
        assert_eq!(constants.combat.damage_spread, 5);
        assert_eq!(constants.progression.potion_heal, 40);
        assert_eq!(constants.progression.max_health, 100);
        assert_eq!(constants.pacing.turn_ms, 0);
        assert_eq!(constants.pacing.encounter_intro_ms, 1500);
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        let mut constants = GameConstants::default();
        constants.encounter.health_min = 200;
        assert!(matches!(constants.validate(), Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_validate_rejects_unordered_loot_thresholds() {
        let mut constants = GameConstants::default();
        constants.loot.potion_below = 0.3;
        assert!(constants.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_crit_chance() {
        let mut constants = GameConstants::default();
        constants.combat.crit_chance = 1.5;
        assert!(constants.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_damage_floor_below_one() {
        for floor in [0, -5] {
            let text = format!("[combat]\nmin_damage = {floor}");
            let constants: GameConstants = toml::from_str(&text).unwrap();
            assert!(matches!(constants.validate(), Err(ConfigError::ValidationError(_))));
        }
    }

    #[test]
    fn test_validate_rejects_weak_crit_and_negative_heal() {
        let mut constants = GameConstants::default();
        constants.combat.crit_multiplier = 0;
        assert!(constants.validate().is_err());

        let mut constants = GameConstants::default();
        constants.progression.potion_heal = -10;
        assert!(constants.validate().is_err());
    }

    #[test]
    fn test_instant_pacing() {
        let pacing = PacingConstants::instant();
        assert!(pacing.turn().is_zero());
        assert!(pacing.encounter_intro().is_zero());
        assert!(pacing.post_victory().is_zero());
    }
}
