//! The sentence pattern catalog.
//!
//! Each pattern is a fixed sequence of elements. The catalog order is the
//! match priority: the first pattern that consumes the whole line wins.

use std::fmt;

use bestiary_language::Keyword;

use self::PatternElement::Keyword as Kw;
use self::PatternElement::{Action, AnyName, Article, List, Name, QuestionMark};

/// A named slot a pattern binds a value into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    /// A single ingredient name.
    Ingredient,
    /// A potion name (may be multi-word).
    Potion,
    /// A sign name.
    Sign,
    /// A monster name.
    Monster,
    /// A list of ingredient counts.
    Ingredients,
    /// A list of trophy counts.
    Trophies,
}

/// One element of a sentence pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatternElement {
    /// A specific keyword.
    Keyword(Keyword),
    /// The action keyword spelled exactly as the given verb.
    Action(&'static str),
    /// The article `a`.
    Article,
    /// A single-word name.
    Name(Slot),
    /// A single- or multi-word name.
    AnyName(Slot),
    /// `Quantity Word (, Quantity Word)*`.
    List(Slot),
    /// `?`
    QuestionMark,
}

/// Identifies a catalog pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PatternId {
    /// `Geralt loots <ingredients>`
    Loot,
    /// `Geralt trades <trophies> trophy for <ingredients>`
    Trade,
    /// `Geralt brews <potion>`
    Brew,
    /// `Geralt learns <sign> sign is effective against <monster>`
    LearnSignEffectiveness,
    /// `Geralt learns <potion> potion is effective against <monster>`
    LearnPotionEffectiveness,
    /// `Geralt learns <potion> potion consists of <ingredients>`
    LearnFormula,
    /// `Geralt encounters a <monster>`
    Encounter,
    /// `Total ingredient ?`
    TotalIngredients,
    /// `Total potion ?`
    TotalPotions,
    /// `Total trophy ?`
    TotalTrophies,
    /// `Total ingredient <ingredient> ?`
    TotalIngredient,
    /// `Total potion <potion> ?`
    TotalPotion,
    /// `Total trophy <monster> ?`
    TotalTrophy,
    /// `What is effective against <monster> ?`
    EffectivenessQuery,
    /// `What is in <potion> ?`
    FormulaQuery,
    /// `Exit`
    Exit,
}

impl fmt::Display for PatternId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A sentence pattern.
#[derive(Clone, Copy, Debug)]
pub struct Pattern {
    /// Which pattern this is.
    pub id: PatternId,
    /// Elements in sentence order.
    pub elements: &'static [PatternElement],
}

/// Every sentence pattern, in match-priority order.
pub static CATALOG: &[Pattern] = &[
    Pattern {
        id: PatternId::Loot,
        elements: &[Kw(Keyword::Geralt), Action("loots"), List(Slot::Ingredients)],
    },
    Pattern {
        id: PatternId::Trade,
        elements: &[
            Kw(Keyword::Geralt),
            Action("trades"),
            List(Slot::Trophies),
            Kw(Keyword::Trophy),
            Kw(Keyword::For),
            List(Slot::Ingredients),
        ],
    },
    Pattern {
        id: PatternId::Brew,
        elements: &[Kw(Keyword::Geralt), Action("brews"), AnyName(Slot::Potion)],
    },
    Pattern {
        id: PatternId::LearnSignEffectiveness,
        elements: &[
            Kw(Keyword::Geralt),
            Kw(Keyword::Learns),
            Name(Slot::Sign),
            Kw(Keyword::Sign),
            Kw(Keyword::Is),
            Kw(Keyword::Effective),
            Kw(Keyword::Against),
            Name(Slot::Monster),
        ],
    },
    Pattern {
        id: PatternId::LearnPotionEffectiveness,
        elements: &[
            Kw(Keyword::Geralt),
            Kw(Keyword::Learns),
            AnyName(Slot::Potion),
            Kw(Keyword::Potion),
            Kw(Keyword::Is),
            Kw(Keyword::Effective),
            Kw(Keyword::Against),
            Name(Slot::Monster),
        ],
    },
    Pattern {
        id: PatternId::LearnFormula,
        elements: &[
            Kw(Keyword::Geralt),
            Kw(Keyword::Learns),
            AnyName(Slot::Potion),
            Kw(Keyword::Potion),
            Kw(Keyword::Consists),
            Kw(Keyword::Of),
            List(Slot::Ingredients),
        ],
    },
    Pattern {
        id: PatternId::Encounter,
        elements: &[Kw(Keyword::Geralt), Kw(Keyword::Encounters), Article, Name(Slot::Monster)],
    },
    Pattern {
        id: PatternId::TotalIngredients,
        elements: &[Kw(Keyword::Total), Kw(Keyword::Ingredient), QuestionMark],
    },
    Pattern {
        id: PatternId::TotalPotions,
        elements: &[Kw(Keyword::Total), Kw(Keyword::Potion), QuestionMark],
    },
    Pattern {
        id: PatternId::TotalTrophies,
        elements: &[Kw(Keyword::Total), Kw(Keyword::Trophy), QuestionMark],
    },
    Pattern {
        id: PatternId::TotalIngredient,
        elements: &[
            Kw(Keyword::Total),
            Kw(Keyword::Ingredient),
            Name(Slot::Ingredient),
            QuestionMark,
        ],
    },
    Pattern {
        id: PatternId::TotalPotion,
        elements: &[
            Kw(Keyword::Total),
            Kw(Keyword::Potion),
            AnyName(Slot::Potion),
            QuestionMark,
        ],
    },
    Pattern {
        id: PatternId::TotalTrophy,
        elements: &[
            Kw(Keyword::Total),
            Kw(Keyword::Trophy),
            Name(Slot::Monster),
            QuestionMark,
        ],
    },
    Pattern {
        id: PatternId::EffectivenessQuery,
        elements: &[
            Kw(Keyword::What),
            Kw(Keyword::Is),
            Kw(Keyword::Effective),
            Kw(Keyword::Against),
            Name(Slot::Monster),
            QuestionMark,
        ],
    },
    Pattern {
        id: PatternId::FormulaQuery,
        elements: &[
            Kw(Keyword::What),
            Kw(Keyword::Is),
            Kw(Keyword::In),
            AnyName(Slot::Potion),
            QuestionMark,
        ],
    },
    Pattern {
        id: PatternId::Exit,
        elements: &[Kw(Keyword::Exit)],
    },
];
