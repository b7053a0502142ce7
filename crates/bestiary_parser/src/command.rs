//! Typed commands.
//!
//! A [`Command`] is what a matched sentence means, with every slot already
//! extracted. Actions take commands, never tokens.

use bestiary_foundation::{Error, ItemCount, Result};

use crate::pattern::{PatternId, Slot};
use crate::syntax::SyntaxMatch;

/// A parsed command ready to be dispatched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Add ingredients to the inventory.
    Loot {
        /// Ingredients obtained.
        ingredients: Vec<ItemCount>,
    },
    /// Exchange trophies for ingredients.
    Trade {
        /// Trophies given up.
        trophies: Vec<ItemCount>,
        /// Ingredients received.
        ingredients: Vec<ItemCount>,
    },
    /// Brew one potion from its formula.
    Brew {
        /// Potion to brew.
        potion: String,
    },
    /// Record that a sign works against a monster.
    LearnSign {
        /// The sign.
        sign: String,
        /// The monster.
        monster: String,
    },
    /// Record that a potion works against a monster.
    LearnPotion {
        /// The potion.
        potion: String,
        /// The monster.
        monster: String,
    },
    /// Record a potion formula.
    LearnFormula {
        /// The potion.
        potion: String,
        /// Ingredients one brew consumes.
        ingredients: Vec<ItemCount>,
    },
    /// Fight a monster.
    Encounter {
        /// The monster.
        monster: String,
    },
    /// List all ingredients in stock.
    TotalIngredients,
    /// List all potions in stock.
    TotalPotions,
    /// List all trophies in stock.
    TotalTrophies,
    /// Count one ingredient.
    TotalIngredient {
        /// The ingredient.
        ingredient: String,
    },
    /// Count one potion.
    TotalPotion {
        /// The potion.
        potion: String,
    },
    /// Count trophies of one monster.
    TotalTrophy {
        /// The monster.
        monster: String,
    },
    /// Ask what works against a monster.
    EffectivenessQuery {
        /// The monster.
        monster: String,
    },
    /// Ask for a potion formula.
    FormulaQuery {
        /// The potion.
        potion: String,
    },
    /// End the session.
    Exit,
}

impl Command {
    /// Builds a command from a syntax match.
    ///
    /// # Errors
    ///
    /// Returns an internal error if the match lacks a slot its pattern
    /// binds, which only happens if the catalog and this function disagree.
    pub fn from_match(m: &SyntaxMatch) -> Result<Self> {
        let name = |slot: Slot| {
            m.name(slot)
                .map(ToString::to_string)
                .ok_or_else(|| missing_slot(m.pattern, slot))
        };
        let list = |slot: Slot| {
            m.list(slot)
                .map(<[ItemCount]>::to_vec)
                .ok_or_else(|| missing_slot(m.pattern, slot))
        };

        let command = match m.pattern {
            PatternId::Loot => Self::Loot {
                ingredients: list(Slot::Ingredients)?,
            },
            PatternId::Trade => Self::Trade {
                trophies: list(Slot::Trophies)?,
                ingredients: list(Slot::Ingredients)?,
            },
            PatternId::Brew => Self::Brew {
                potion: name(Slot::Potion)?,
            },
            PatternId::LearnSignEffectiveness => Self::LearnSign {
                sign: name(Slot::Sign)?,
                monster: name(Slot::Monster)?,
            },
            PatternId::LearnPotionEffectiveness => Self::LearnPotion {
                potion: name(Slot::Potion)?,
                monster: name(Slot::Monster)?,
            },
            PatternId::LearnFormula => Self::LearnFormula {
                potion: name(Slot::Potion)?,
                ingredients: list(Slot::Ingredients)?,
            },
            PatternId::Encounter => Self::Encounter {
                monster: name(Slot::Monster)?,
            },
            PatternId::TotalIngredients => Self::TotalIngredients,
            PatternId::TotalPotions => Self::TotalPotions,
            PatternId::TotalTrophies => Self::TotalTrophies,
            PatternId::TotalIngredient => Self::TotalIngredient {
                ingredient: name(Slot::Ingredient)?,
            },
            PatternId::TotalPotion => Self::TotalPotion {
                potion: name(Slot::Potion)?,
            },
            PatternId::TotalTrophy => Self::TotalTrophy {
                monster: name(Slot::Monster)?,
            },
            PatternId::EffectivenessQuery => Self::EffectivenessQuery {
                monster: name(Slot::Monster)?,
            },
            PatternId::FormulaQuery => Self::FormulaQuery {
                potion: name(Slot::Potion)?,
            },
            PatternId::Exit => Self::Exit,
        };
        Ok(command)
    }
}

fn missing_slot(pattern: PatternId, slot: Slot) -> Error {
    Error::internal(format!("pattern {pattern} matched without a {slot:?} binding"))
}
