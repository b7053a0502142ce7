//! The keyword table.
//!
//! Words are matched exactly and case-sensitively: `Total` is a keyword,
//! `total` is an ordinary word.

use std::fmt;

/// A reserved word of the command language.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// `Geralt`
    Geralt,
    /// `loots`, `trades` or `brews`; the matcher tells them apart by text.
    Action,
    /// `learns`
    Learns,
    /// `encounters`
    Encounters,
    /// `trophy`
    Trophy,
    /// `sign`
    Sign,
    /// `potion`
    Potion,
    /// `for`
    For,
    /// `is`
    Is,
    /// `effective`
    Effective,
    /// `against`
    Against,
    /// `consists`
    Consists,
    /// `of`
    Of,
    /// `What`
    What,
    /// `in`
    In,
    /// `Total`
    Total,
    /// `ingredient`
    Ingredient,
    /// `Exit`
    Exit,
}

/// Every keyword spelling and the keyword it resolves to.
pub const KEYWORDS: &[(&str, Keyword)] = &[
    ("Geralt", Keyword::Geralt),
    ("loots", Keyword::Action),
    ("trades", Keyword::Action),
    ("brews", Keyword::Action),
    ("learns", Keyword::Learns),
    ("encounters", Keyword::Encounters),
    ("trophy", Keyword::Trophy),
    ("sign", Keyword::Sign),
    ("potion", Keyword::Potion),
    ("for", Keyword::For),
    ("is", Keyword::Is),
    ("effective", Keyword::Effective),
    ("against", Keyword::Against),
    ("consists", Keyword::Consists),
    ("of", Keyword::Of),
    ("What", Keyword::What),
    ("in", Keyword::In),
    ("Total", Keyword::Total),
    ("ingredient", Keyword::Ingredient),
    ("Exit", Keyword::Exit),
];

impl Keyword {
    /// Resolves a word against the keyword table.
    #[must_use]
    pub fn lookup(word: &str) -> Option<Self> {
        KEYWORDS
            .iter()
            .find(|(spelling, _)| *spelling == word)
            .map(|&(_, keyword)| keyword)
    }

    /// Returns true if `word` is any keyword spelling.
    #[must_use]
    pub fn is_keyword(word: &str) -> bool {
        Self::lookup(word).is_some()
    }

    /// Returns a human-readable name for this keyword.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Geralt => "Geralt",
            Self::Action => "action verb",
            Self::Learns => "learns",
            Self::Encounters => "encounters",
            Self::Trophy => "trophy",
            Self::Sign => "sign",
            Self::Potion => "potion",
            Self::For => "for",
            Self::Is => "is",
            Self::Effective => "effective",
            Self::Against => "against",
            Self::Consists => "consists",
            Self::Of => "of",
            Self::What => "What",
            Self::In => "in",
            Self::Total => "Total",
            Self::Ingredient => "ingredient",
            Self::Exit => "Exit",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
