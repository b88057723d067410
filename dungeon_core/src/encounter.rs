//! Encounter generation - random enemies scaled by difficulty

use crate::character::Character;
use crate::config::{CharacterRules, EncounterConstants};
use rand::seq::SliceRandom;
use rand::Rng;

/// Fallback archetype if the configured list is empty
const UNKNOWN_ARCHETYPE: &str = "Monster";

/// Build a random enemy for `difficulty_level`
///
/// Draw order is archetype, attack, defense, health:
/// - attack in `[attack_min + level·attack_per_level, attack_max + level·attack_per_level]`
/// - defense in `[defense_min + level·defense_per_level, defense_max + level·defense_per_level]`
/// - health in `[health_min, health_max]`
pub fn generate_random_enemy(
    difficulty_level: u32,
    encounter: &EncounterConstants,
    rules: CharacterRules,
    rng: &mut impl Rng,
) -> Character {
    let level = difficulty_level as i32;

    let archetype = encounter
        .archetypes
        .choose(rng)
        .map_or(UNKNOWN_ARCHETYPE, String::as_str);
    let name = format!("{} Lv{}", archetype, difficulty_level);

    let attack_shift = level * encounter.attack_per_level;
    let attack = rng.gen_range(encounter.attack_min + attack_shift..=encounter.attack_max + attack_shift);

    let defense_shift = level * encounter.defense_per_level;
    let defense =
        rng.gen_range(encounter.defense_min + defense_shift..=encounter.defense_max + defense_shift);

    let health = rng.gen_range(encounter.health_min..=encounter.health_max);

    tracing::debug!(%name, attack, defense, health, difficulty_level, "enemy generated");
    Character::with_rules(name, attack, defense, health, rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn spawn(level: u32, rng: &mut ChaCha8Rng) -> Character {
        generate_random_enemy(level, &EncounterConstants::default(), CharacterRules::default(), rng)
    }

    #[test]
    fn test_level_one_ranges() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..3 {
            let enemy = spawn(1, &mut rng);
            assert!((12..=22).contains(&enemy.attack_power()), "attack {}", enemy.attack_power());
            assert!((6..=11).contains(&enemy.defense()), "defense {}", enemy.defense());
            assert!((80..=120).contains(&enemy.health()), "health {}", enemy.health());
        }
    }

    #[test]
    fn test_name_carries_level() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let enemy = spawn(3, &mut rng);
        let archetypes = EncounterConstants::default().archetypes;

        assert!(enemy.name().ends_with(" Lv3"));
        let archetype = enemy.name().trim_end_matches(" Lv3");
        assert!(archetypes.iter().any(|a| a == archetype));
    }

    #[test]
    fn test_fresh_enemy_state() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let enemy = spawn(2, &mut rng);
        assert_eq!(enemy.level(), 1);
        assert_eq!(enemy.gold(), 0);
        assert!(enemy.inventory().is_empty());
        assert!(enemy.is_alive());
    }

    #[test]
    fn test_same_seed_same_enemy() {
        let a = spawn(2, &mut ChaCha8Rng::seed_from_u64(99));
        let b = spawn(2, &mut ChaCha8Rng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_every_archetype_appears() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let archetypes = EncounterConstants::default().archetypes;
        let names: Vec<String> = (0..300).map(|_| spawn(1, &mut rng).name().to_string()).collect();
        for archetype in &archetypes {
            let expected = format!("{} Lv1", archetype);
            assert!(names.contains(&expected), "never rolled {}", archetype);
        }
    }

    #[test]
    fn test_empty_archetypes_fallback() {
        let encounter = EncounterConstants {
            archetypes: vec![],
            ..EncounterConstants::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let enemy = generate_random_enemy(1, &encounter, CharacterRules::default(), &mut rng);
        assert_eq!(enemy.name(), "Monster Lv1");
    }

    proptest! {
        #[test]
        fn prop_stats_scale_with_level(level in 1u32..20, seed in any::<u64>()) {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let enemy = spawn(level, &mut rng);
            let l = level as i32;
            prop_assert!(enemy.attack_power() >= 10 + 2 * l && enemy.attack_power() <= 20 + 2 * l);
            prop_assert!(enemy.defense() >= 5 + l && enemy.defense() <= 10 + l);
            prop_assert!(enemy.health() >= 80 && enemy.health() <= 120);
        }
    }
}
