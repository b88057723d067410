//! Attacks, damage and aliveness

use super::Character;
use crate::config::CombatConstants;
use crate::types::EquipmentSlot;
use rand::Rng;
use std::fmt;

/// The random part of an attack: rolled damage and whether it crit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackRoll {
    /// Damage before the target's defense, crit multiplier included
    pub damage: i32,
    pub is_critical: bool,
}

impl AttackRoll {
    /// Roll base damage in `total_attack ± spread`, then roll for a crit
    pub fn roll(total_attack: i32, combat: &CombatConstants, rng: &mut impl Rng) -> Self {
        let spread = combat.damage_spread.max(0);
        let base_damage = rng.gen_range(total_attack - spread..=total_attack + spread);
        let is_critical = rng.gen::<f64>() < combat.crit_chance;

        if is_critical {
            AttackRoll::critical(base_damage, combat.crit_multiplier)
        } else {
            AttackRoll::normal(base_damage)
        }
    }

    /// A non-critical roll of exactly `damage`
    pub fn normal(damage: i32) -> Self {
        AttackRoll {
            damage,
            is_critical: false,
        }
    }

    /// A critical roll of `base_damage * multiplier`
    pub fn critical(base_damage: i32, multiplier: i32) -> Self {
        AttackRoll {
            damage: base_damage.saturating_mul(multiplier),
            is_critical: true,
        }
    }
}

/// What happened when one character attacked another
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttackOutcome {
    pub attacker: String,
    pub target: String,
    /// Damage dealt before the target's defense
    pub damage: i32,
    pub is_critical: bool,
    pub target_health_before: i32,
    pub target_health_after: i32,
}

impl AttackOutcome {
    /// Health actually removed from the target
    pub fn health_lost(&self) -> i32 {
        self.target_health_before - self.target_health_after
    }

    pub fn is_killing_blow(&self) -> bool {
        self.target_health_after == 0
    }
}

impl fmt::Display for AttackOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_critical {
            writeln!(f, "CRITICAL HIT by {}!", self.attacker)?;
        }
        write!(
            f,
            "{} attacks {} for {} damage!",
            self.attacker, self.target, self.damage
        )
    }
}

impl Character {
    /// Base attack plus the equipped weapon's bonus
    pub fn total_attack(&self) -> i32 {
        let bonus = self
            .equipped(EquipmentSlot::Weapon)
            .map_or(0, |item| item.bonus_attack());
        self.attack_power + bonus as i32
    }

    /// Base defense plus the equipped armor's bonus
    pub fn total_defense(&self) -> i32 {
        let bonus = self
            .equipped(EquipmentSlot::Armor)
            .map_or(0, |item| item.bonus_defense());
        self.defense + bonus as i32
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Reduce health by `amount - total_defense`, never less than the
    /// minimum damage. Health stops at 0.
    pub fn take_damage(&mut self, amount: i32) {
        let effective = amount
            .saturating_sub(self.total_defense())
            .max(self.rules.combat.min_damage);
        self.health = self.health.saturating_sub(effective).max(0);

        tracing::debug!(
            character = %self.name,
            amount,
            effective,
            health = self.health,
            "damage taken"
        );
    }

    /// Roll an attack and apply it to `target`
    pub fn attack(&self, target: &mut Character, rng: &mut impl Rng) -> AttackOutcome {
        let roll = AttackRoll::roll(self.total_attack(), &self.rules.combat, rng);
        self.strike(target, roll)
    }

    /// Apply an already rolled attack to `target`
    pub fn strike(&self, target: &mut Character, roll: AttackRoll) -> AttackOutcome {
        let target_health_before = target.health;
        target.take_damage(roll.damage);

        if roll.is_critical {
            tracing::debug!(attacker = %self.name, damage = roll.damage, "critical hit");
        }

        AttackOutcome {
            attacker: self.name.clone(),
            target: target.name.clone(),
            damage: roll.damage,
            is_critical: roll.is_critical,
            target_health_before,
            target_health_after: target.health,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Item;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_take_damage_subtracts_defense() {
        let mut target = Character::new("Goblin", 15, 5, 100);
        target.take_damage(18);
        assert_eq!(target.health(), 87);
    }

    #[test]
    fn test_take_damage_minimum_one() {
        let mut target = Character::new("Golem", 10, 50, 100);
        target.take_damage(3);
        assert_eq!(target.health(), 99);
    }

    #[test]
    fn test_take_damage_floors_at_zero() {
        let mut target = Character::new("Zombie", 10, 0, 10);
        target.take_damage(500);
        assert_eq!(target.health(), 0);
        assert!(!target.is_alive());
    }

    #[test]
    fn test_armor_counts_toward_defense() {
        let mut target = Character::new("Knight", 20, 10, 100);
        target.add_item(Item::armor("Armor +5", 5));
        target.equip_item(1).unwrap();
        assert_eq!(target.total_defense(), 15);

        target.take_damage(20);
        assert_eq!(target.health(), 95);
    }

    #[test]
    fn test_fixed_roll_scenario() {
        let hero = Character::new("Knight", 20, 10, 100);
        let mut goblin = Character::new("Goblin Lv1", 12, 5, 100);

        let outcome = hero.strike(&mut goblin, AttackRoll::normal(18));

        assert_eq!(goblin.health(), 87);
        assert_eq!(outcome.damage, 18);
        assert_eq!(outcome.health_lost(), 13);
        assert!(!outcome.is_critical);
        assert!(!outcome.is_killing_blow());
        assert_eq!(outcome.to_string(), "Knight attacks Goblin Lv1 for 18 damage!");
    }

    #[test]
    fn test_critical_display() {
        let hero = Character::new("Knight", 20, 10, 100);
        let mut bandit = Character::new("Bandit Lv2", 14, 7, 30);

        let outcome = hero.strike(&mut bandit, AttackRoll::critical(20, 2));

        assert_eq!(outcome.damage, 40);
        assert!(outcome.is_killing_blow());
        assert_eq!(
            outcome.to_string(),
            "CRITICAL HIT by Knight!\nKnight attacks Bandit Lv2 for 40 damage!"
        );
    }

    #[test]
    fn test_weapon_raises_attack_range() {
        let mut hero = Character::new("Knight", 20, 10, 100);
        hero.add_item(Item::weapon("Sword +10", 10));
        hero.equip_item(1).unwrap();
        assert_eq!(hero.total_attack(), 30);

        let combat = CombatConstants {
            crit_chance: 0.0,
            ..CombatConstants::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            let roll = AttackRoll::roll(hero.total_attack(), &combat, &mut rng);
            assert!((25..=35).contains(&roll.damage));
            assert!(!roll.is_critical);
        }
    }

    #[test]
    fn test_crit_rate_near_configured_chance() {
        let combat = CombatConstants::default();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let crits = (0..10_000)
            .filter(|_| AttackRoll::roll(20, &combat, &mut rng).is_critical)
            .count();
        assert!((1_700..2_300).contains(&crits), "crits: {}", crits);
    }

    #[test]
    fn test_attack_is_deterministic_for_seed() {
        let hero = Character::new("Knight", 20, 10, 100);
        let mut a = Character::new("Orc", 15, 5, 100);
        let mut b = a.clone();

        let first = hero.attack(&mut a, &mut ChaCha8Rng::seed_from_u64(3));
        let second = hero.attack(&mut b, &mut ChaCha8Rng::seed_from_u64(3));
        assert_eq!(first, second);
        assert_eq!(a.health(), b.health());
    }

    proptest! {
        #[test]
        fn prop_damage_floor_and_zero_clamp(
            damage in -50i32..500,
            defense in 0i32..100,
            health in 1i32..=100,
        ) {
            let mut target = Character::new("Target", 10, defense, health);
            target.take_damage(damage);

            let expected_loss = (damage - defense).max(1);
            prop_assert_eq!(target.health(), (health - expected_loss).max(0));
            prop_assert!(target.health() >= 0);
            prop_assert!(target.health() < health);
        }

        #[test]
        fn prop_roll_within_spread(total_attack in 0i32..200, seed in any::<u64>()) {
            let combat = CombatConstants::default();
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let roll = AttackRoll::roll(total_attack, &combat, &mut rng);
            let base = if roll.is_critical { roll.damage / 2 } else { roll.damage };
            prop_assert!(base >= total_attack - 5 && base <= total_attack + 5);
        }
    }
}
