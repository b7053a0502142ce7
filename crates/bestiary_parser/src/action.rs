//! Action dispatch.
//!
//! Executes typed commands against the world and renders the one-line
//! reply each command produces.

use bestiary_foundation::{ItemCount, join_counts};
use bestiary_storage::{
    BrewOutcome, EncounterOutcome, FormulaOutcome, LearnOutcome, TradeOutcome, World,
};
use log::debug;

use crate::command::Command;

/// Placeholder printed for an empty aggregate listing.
pub const NONE: &str = "None";

/// What dispatching a command produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A line to print.
    Reply(String),
    /// The session should end.
    Exit,
}

impl Outcome {
    fn reply(text: impl Into<String>) -> Self {
        Self::Reply(text.into())
    }
}

/// Executes commands against a world.
pub struct Dispatcher;

impl Dispatcher {
    /// Executes a command and returns its reply.
    pub fn dispatch(world: &mut World, command: &Command) -> Outcome {
        debug!("dispatching {command:?}");
        match command {
            Command::Loot { ingredients } => {
                world.loot(ingredients);
                Outcome::reply("Alchemy ingredients obtained")
            }
            Command::Trade {
                trophies,
                ingredients,
            } => match world.trade(trophies, ingredients) {
                TradeOutcome::Traded => Outcome::reply("Trade successful"),
                TradeOutcome::NotEnoughTrophies => Outcome::reply("Not enough trophies"),
            },
            Command::Brew { potion } => match world.brew(potion) {
                BrewOutcome::Brewed => Outcome::reply(format!("Alchemy item created: {potion}")),
                BrewOutcome::NoFormula => Outcome::reply(format!("No formula for {potion}")),
                BrewOutcome::NotEnoughIngredients => Outcome::reply("Not enough ingredients"),
            },
            Command::LearnSign { sign, monster } => {
                Self::learned(world.learn_sign(sign, monster), monster)
            }
            Command::LearnPotion { potion, monster } => {
                Self::learned(world.learn_potion(potion, monster), monster)
            }
            Command::LearnFormula {
                potion,
                ingredients,
            } => match world.learn_formula(potion, ingredients) {
                FormulaOutcome::Learned => {
                    Outcome::reply(format!("New alchemy formula obtained: {potion}"))
                }
                FormulaOutcome::AlreadyKnown => Outcome::reply("Already known formula"),
            },
            Command::Encounter { monster } => match world.encounter(monster) {
                EncounterOutcome::Defeated => Outcome::reply(format!("Geralt defeats {monster}")),
                EncounterOutcome::Escaped => {
                    Outcome::reply("Geralt is unprepared and barely escapes with his life")
                }
            },
            Command::TotalIngredients => Self::listing(&world.ingredients()),
            Command::TotalPotions => Self::listing(&world.potions()),
            Command::TotalTrophies => Self::listing(&world.trophies()),
            Command::TotalIngredient { ingredient } => {
                Outcome::Reply(world.ingredient_count(ingredient).to_string())
            }
            Command::TotalPotion { potion } => {
                Outcome::Reply(world.potion_count(potion).to_string())
            }
            Command::TotalTrophy { monster } => {
                Outcome::Reply(world.trophy_count(monster).to_string())
            }
            Command::EffectivenessQuery { monster } => match world.effective_against(monster) {
                Some(weaknesses) => Outcome::Reply(weaknesses.join(", ")),
                None => Outcome::reply(format!("No knowledge of {monster}")),
            },
            Command::FormulaQuery { potion } => match world.formula_of(potion) {
                Some(formula) => Outcome::Reply(
                    join_counts(&formula).unwrap_or_else(|| format!("No formula for {potion}")),
                ),
                None => Outcome::reply(format!("No formula for {potion}")),
            },
            Command::Exit => Outcome::Exit,
        }
    }

    fn learned(outcome: LearnOutcome, monster: &str) -> Outcome {
        match outcome {
            LearnOutcome::NewEntry => Outcome::reply(format!("New bestiary entry added: {monster}")),
            LearnOutcome::Updated => Outcome::reply(format!("Bestiary entry updated: {monster}")),
            LearnOutcome::AlreadyKnown => Outcome::reply("Already known effectiveness"),
        }
    }

    fn listing(items: &[ItemCount]) -> Outcome {
        Outcome::Reply(join_counts(items).unwrap_or_else(|| NONE.to_string()))
    }
}
