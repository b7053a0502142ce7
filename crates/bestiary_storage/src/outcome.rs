//! What a world operation did.
//!
//! Operations return these instead of text so the caller decides how to
//! report them.

/// Result of learning that a sign or potion is effective against a monster.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LearnOutcome {
    /// The monster had no bestiary entry before.
    NewEntry,
    /// The monster was known and gained a new weakness.
    Updated,
    /// The weakness was already recorded.
    AlreadyKnown,
}

/// Result of learning a potion formula.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormulaOutcome {
    /// The formula was recorded.
    Learned,
    /// A formula for this potion already exists and was kept.
    AlreadyKnown,
}

/// Result of brewing a potion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BrewOutcome {
    /// Ingredients were consumed and one potion was added.
    Brewed,
    /// The potion is unknown or has no formula.
    NoFormula,
    /// At least one ingredient is missing or short.
    NotEnoughIngredients,
}

/// Result of trading trophies for ingredients.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TradeOutcome {
    /// Trophies were given up and ingredients received.
    Traded,
    /// Some requested trophy is missing or short; nothing changed.
    NotEnoughTrophies,
}

/// Result of encountering a monster.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncounterOutcome {
    /// Geralt won and took a trophy.
    Defeated,
    /// Geralt had no usable weakness and fled.
    Escaped,
}
