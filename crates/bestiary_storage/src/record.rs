//! Records stored in the world tables.

use std::cmp::Ordering;

use bestiary_foundation::{ItemCount, Quantity};

/// A potion known to Geralt: how many he carries and, once learned, how to
/// brew it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PotionRecord {
    /// Potions in stock.
    pub quantity: Quantity,
    /// Ingredients needed for one brew, in the order they were learned.
    pub formula: Option<Vec<ItemCount>>,
}

impl PotionRecord {
    /// Creates a potion with no stock and no formula.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true once a formula has been learned.
    #[must_use]
    pub fn has_formula(&self) -> bool {
        self.formula.is_some()
    }

    /// Returns the formula ordered for display: larger quantities first,
    /// ties broken by ingredient name.
    #[must_use]
    pub fn sorted_formula(&self) -> Option<Vec<ItemCount>> {
        let mut formula = self.formula.clone()?;
        formula.sort_by(formula_order);
        Some(formula)
    }
}

fn formula_order(a: &ItemCount, b: &ItemCount) -> Ordering {
    b.quantity
        .cmp(&a.quantity)
        .then_with(|| a.name.cmp(&b.name))
}

/// A bestiary entry: what is known to work against a monster.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MonsterRecord {
    /// Signs effective against the monster, in learning order.
    pub signs: Vec<String>,
    /// Potions effective against the monster, in learning order.
    pub potions: Vec<String>,
}

impl MonsterRecord {
    /// Creates an entry with no known weaknesses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a sign. Returns false if it was already known.
    pub fn add_sign(&mut self, sign: &str) -> bool {
        add_unique(&mut self.signs, sign)
    }

    /// Records a potion. Returns false if it was already known.
    pub fn add_potion(&mut self, potion: &str) -> bool {
        add_unique(&mut self.potions, potion)
    }

    /// All known weaknesses (signs and potions) sorted by name.
    #[must_use]
    pub fn weaknesses(&self) -> Vec<String> {
        let mut all: Vec<String> = self.signs.iter().chain(&self.potions).cloned().collect();
        all.sort();
        all
    }
}

fn add_unique(list: &mut Vec<String>, name: &str) -> bool {
    if list.iter().any(|known| known == name) {
        false
    } else {
        list.push(name.to_string());
        true
    }
}
