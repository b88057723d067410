//! Game loop - a fixed run of encounters driven as a state machine
//!
//! ```text
//! EncounterStart ─► Battle ─┬─► PostVictory ─► EncounterStart (next) ... ─► End(Cleared)
//!                           └─► Defeat ─► End(Slain)
//! ```

use crate::character::Character;
use crate::config::GameConstants;
use crate::console::{Console, NumberInput};
use crate::encounter::generate_random_enemy;
use crate::loot::loot_drop;
use crate::shop::{self, ShopChoice};
use rand::Rng;
use std::io::{self, BufRead, Write};

const SEPARATOR: &str = "==============================";

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every encounter was won
    Cleared,
    /// The hero died during `encounter` (1-based)
    Slain { encounter: u32 },
}

/// Position in the run
#[derive(Debug, Clone, PartialEq)]
pub enum GameState {
    EncounterStart { encounter: u32 },
    Battle { encounter: u32, enemy: Character },
    PostVictory { encounter: u32 },
    Defeat { encounter: u32 },
    End(RunOutcome),
}

impl GameState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameState::End(_))
    }
}

/// One run: the hero, the shared RNG and the console
pub struct Game<G, R, W> {
    constants: GameConstants,
    hero: Character,
    rng: G,
    console: Console<R, W>,
}

impl<G: Rng, R: BufRead, W: Write> Game<G, R, W> {
    /// Create the hero described by `constants`
    pub fn new(constants: GameConstants, rng: G, console: Console<R, W>) -> Self {
        let hero_config = &constants.hero;
        let hero = Character::with_rules(
            hero_config.name.clone(),
            hero_config.attack_power,
            hero_config.defense,
            hero_config.health,
            constants.character_rules(),
        );

        Game {
            constants,
            hero,
            rng,
            console,
        }
    }

    pub fn hero(&self) -> &Character {
        &self.hero
    }

    pub fn constants(&self) -> &GameConstants {
        &self.constants
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Play from the first encounter until the run ends
    pub fn run(&mut self) -> io::Result<RunOutcome> {
        tracing::info!(
            hero = %self.hero.name(),
            encounters = self.constants.encounter.count,
            "run started"
        );

        let mut state = GameState::EncounterStart { encounter: 1 };
        loop {
            state = self.step(state)?;
            if let GameState::End(outcome) = state {
                tracing::info!(?outcome, level = self.hero.level(), "run finished");
                return Ok(outcome);
            }
        }
    }

    /// Perform one transition
    pub fn step(&mut self, state: GameState) -> io::Result<GameState> {
        match state {
            GameState::EncounterStart { encounter } => {
                if encounter > self.constants.encounter.count {
                    return self.finish(RunOutcome::Cleared);
                }
                let enemy = self.start_encounter(encounter)?;
                Ok(GameState::Battle { encounter, enemy })
            }
            GameState::Battle {
                encounter,
                mut enemy,
            } => {
                self.battle(&mut enemy)?;
                if self.hero.is_alive() {
                    self.console
                        .say(format_args!("{} defeated {}!", self.hero.name(), enemy.name()))?;
                    Ok(GameState::PostVictory { encounter })
                } else {
                    Ok(GameState::Defeat { encounter })
                }
            }
            GameState::PostVictory { encounter } => {
                self.post_victory()?;
                Ok(GameState::EncounterStart {
                    encounter: encounter + 1,
                })
            }
            GameState::Defeat { encounter } => {
                self.console
                    .say(format_args!("{} was slain in battle...", self.hero.name()))?;
                self.finish(RunOutcome::Slain { encounter })
            }
            GameState::End(outcome) => Ok(GameState::End(outcome)),
        }
    }

    fn start_encounter(&mut self, encounter: u32) -> io::Result<Character> {
        tracing::info!(encounter, "encounter started");
        self.console.say(format_args!("=== ENCOUNTER {} ===", encounter))?;

        let enemy = generate_random_enemy(
            encounter,
            &self.constants.encounter,
            self.constants.character_rules(),
            &mut self.rng,
        );
        self.console.say(enemy.stat_sheet())?;
        self.console.pause(self.constants.pacing.encounter_intro())?;
        Ok(enemy)
    }

    /// Alternate attacks, hero first, until one side falls
    fn battle(&mut self, enemy: &mut Character) -> io::Result<()> {
        let turn = self.constants.pacing.turn();

        while self.hero.is_alive() && enemy.is_alive() {
            let outcome = self.hero.attack(enemy, &mut self.rng);
            self.console.say(&outcome)?;
            self.console.say(enemy.health_line())?;
            if !enemy.is_alive() {
                break;
            }
            self.console.pause(turn)?;
            self.console.say("\n")?;

            let outcome = enemy.attack(&mut self.hero, &mut self.rng);
            self.console.say(&outcome)?;
            self.console.say(self.hero.health_line())?;
            if !self.hero.is_alive() {
                break;
            }
            self.console.pause(turn)?;
            self.console.say("\n")?;
        }
        Ok(())
    }

    fn post_victory(&mut self) -> io::Result<()> {
        if let Some(level_up) = self.hero.gain_xp(self.constants.progression.victory_xp) {
            self.console.say(level_up)?;
        }

        let reward = loot_drop(&mut self.hero, &self.constants.loot, &mut self.rng);
        self.console.say(reward)?;

        self.offer_equipment()?;

        if self
            .console
            .prompt_yes_no("Would you like to use a potion to heal? (y/n): ")?
        {
            match self.hero.use_potion() {
                Ok(health) => self.console.say(format_args!(
                    "{} used a healing potion! Health restored to {}.",
                    self.hero.name(),
                    health
                ))?,
                Err(declined) => self.console.say(declined)?,
            }
        }

        self.console.blank_line()?;
        if self
            .console
            .prompt_yes_no("Enter shop before next battle? (y/n): ")?
        {
            self.visit_shop()?;
        }

        self.console.pause(self.constants.pacing.post_victory())?;
        self.console.blank_line()?;
        self.console.say(SEPARATOR)?;
        self.console.blank_line()
    }

    fn offer_equipment(&mut self) -> io::Result<()> {
        if !self
            .console
            .prompt_yes_no("Do you want to view inventory and equip items? (y/n): ")?
        {
            return Ok(());
        }

        self.console.blank_line()?;
        self.console.say(self.hero.inventory_listing())?;

        match self
            .console
            .prompt_number("Enter the item number to equip (0 to skip): ")?
        {
            NumberInput::Value(0) | NumberInput::Closed => Ok(()),
            NumberInput::Value(index) if index < 0 => self.console.say("Invalid input. Skipping."),
            NumberInput::Malformed(input) => {
                tracing::debug!(%input, "malformed item number");
                self.console.say("Invalid input. Skipping.")
            }
            NumberInput::Value(index) => {
                let index = usize::try_from(index).unwrap_or(usize::MAX);
                match self.hero.equip_item(index) {
                    Ok(equipped) => self.console.say(equipped),
                    Err(rejected) => self.console.say(rejected),
                }
            }
        }
    }

    /// One selection per visit
    fn visit_shop(&mut self) -> io::Result<()> {
        self.console.blank_line()?;
        self.console.say(shop::menu(&self.hero, &self.constants.shop))?;

        let Some(answer) = self.console.prompt("Choose an option: ")? else {
            return Ok(());
        };

        let result = answer
            .parse::<ShopChoice>()
            .and_then(|choice| shop::purchase(&mut self.hero, choice, &self.constants.shop));

        match result {
            Ok(purchase) => self.console.say(purchase),
            Err(failed) => {
                tracing::debug!(%answer, error = %failed, "shop request refused");
                self.console.say(failed)
            }
        }
    }

    fn finish(&mut self, outcome: RunOutcome) -> io::Result<GameState> {
        match outcome {
            RunOutcome::Cleared => {
                self.console
                    .say(format_args!("{} has cleared the dungeon!", self.hero.name()))?;
                self.console.say(self.hero.stat_sheet())?;
            }
            RunOutcome::Slain { .. } => self.console.say("Game over!")?,
        }
        Ok(GameState::End(outcome))
    }
}
