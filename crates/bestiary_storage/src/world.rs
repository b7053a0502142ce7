//! World state.
//!
//! The `World` is the one object every action reads or mutates. It is
//! created once per session and passed by reference into each action.
//! Tables are persistent ordered maps, so listings come out sorted by name
//! and cloning a world for inspection is O(1).

use std::collections::BTreeMap;

use bestiary_foundation::{ItemCount, Quantity};
use im::OrdMap;
use log::trace;

use crate::outcome::{BrewOutcome, EncounterOutcome, FormulaOutcome, LearnOutcome, TradeOutcome};
use crate::record::{MonsterRecord, PotionRecord};

/// Geralt's inventory and knowledge.
#[derive(Clone, Debug, Default)]
pub struct World {
    /// Ingredient name -> count.
    ingredients: OrdMap<String, Quantity>,
    /// Potion name -> stock and formula.
    potions: OrdMap<String, PotionRecord>,
    /// Monster name -> known weaknesses.
    monsters: OrdMap<String, MonsterRecord>,
    /// Monster name -> trophies collected.
    trophies: OrdMap<String, Quantity>,
}

impl World {
    /// Creates an empty world.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Actions ---

    /// Adds every listed ingredient to the inventory.
    pub fn loot(&mut self, items: &[ItemCount]) {
        for item in items {
            add_to(&mut self.ingredients, &item.name, item.quantity);
        }
        trace!("looted {} ingredient stacks", items.len());
    }

    /// Gives up trophies in exchange for ingredients.
    ///
    /// Every trophy requirement is checked before anything changes; repeated
    /// names in `trophies` are summed.
    pub fn trade(&mut self, trophies: &[ItemCount], ingredients: &[ItemCount]) -> TradeOutcome {
        let needed = totals(trophies);
        let enough = needed
            .iter()
            .all(|(name, &qty)| self.trophy_count(name) >= qty);
        if !enough {
            return TradeOutcome::NotEnoughTrophies;
        }

        for (name, qty) in needed {
            take_from(&mut self.trophies, name, qty);
        }
        self.loot(ingredients);
        TradeOutcome::Traded
    }

    /// Brews one potion from its formula.
    pub fn brew(&mut self, potion: &str) -> BrewOutcome {
        let Some(formula) = self.potions.get(potion).and_then(|p| p.formula.clone()) else {
            return BrewOutcome::NoFormula;
        };

        let needed = totals(&formula);
        let enough = needed
            .iter()
            .all(|(name, &qty)| self.ingredient_count(name) >= qty);
        if !enough {
            return BrewOutcome::NotEnoughIngredients;
        }

        for (name, qty) in needed {
            take_from(&mut self.ingredients, name, qty);
        }
        if let Some(record) = self.potions.get_mut(potion) {
            record.quantity = record.quantity.saturating_add(1);
        }
        BrewOutcome::Brewed
    }

    /// Records that a sign is effective against a monster.
    pub fn learn_sign(&mut self, sign: &str, monster: &str) -> LearnOutcome {
        self.learn(monster, |record| record.add_sign(sign))
    }

    /// Records that a potion is effective against a monster.
    ///
    /// The potion itself becomes known (with no stock) if it was not.
    pub fn learn_potion(&mut self, potion: &str, monster: &str) -> LearnOutcome {
        self.ensure_potion(potion);
        self.learn(monster, |record| record.add_potion(potion))
    }

    /// Records the formula of a potion. An existing formula is never
    /// replaced.
    ///
    /// Every ingredient of the formula becomes known (with a zero count).
    pub fn learn_formula(&mut self, potion: &str, formula: &[ItemCount]) -> FormulaOutcome {
        self.ensure_potion(potion);
        if self.potions.get(potion).is_some_and(PotionRecord::has_formula) {
            return FormulaOutcome::AlreadyKnown;
        }

        for item in formula {
            if !self.ingredients.contains_key(item.name.as_str()) {
                self.ingredients.insert(item.name.clone(), 0);
            }
        }
        if let Some(record) = self.potions.get_mut(potion) {
            record.formula = Some(formula.to_vec());
        }
        FormulaOutcome::Learned
    }

    /// Fights a monster.
    ///
    /// Geralt wins if any sign works against it, or if he carries any potion
    /// that does. Winning uses up one of each carried effective potion and
    /// yields one trophy.
    pub fn encounter(&mut self, monster: &str) -> EncounterOutcome {
        let Some(record) = self.monsters.get(monster).cloned() else {
            return EncounterOutcome::Escaped;
        };

        let has_sign = !record.signs.is_empty();
        let has_potion = record.potions.iter().any(|p| self.potion_count(p) > 0);
        if !has_sign && !has_potion {
            return EncounterOutcome::Escaped;
        }

        for potion in &record.potions {
            if let Some(stock) = self.potions.get_mut(potion.as_str()) {
                if stock.quantity > 0 {
                    stock.quantity -= 1;
                }
            }
        }
        add_to(&mut self.trophies, monster, 1);
        EncounterOutcome::Defeated
    }

    // --- Queries ---

    /// Count of one ingredient (0 if unknown).
    #[must_use]
    pub fn ingredient_count(&self, name: &str) -> Quantity {
        self.ingredients.get(name).copied().unwrap_or(0)
    }

    /// Count of one potion (0 if unknown).
    #[must_use]
    pub fn potion_count(&self, name: &str) -> Quantity {
        self.potions.get(name).map_or(0, |p| p.quantity)
    }

    /// Count of one trophy (0 if unknown).
    #[must_use]
    pub fn trophy_count(&self, name: &str) -> Quantity {
        self.trophies.get(name).copied().unwrap_or(0)
    }

    /// Ingredients in stock, sorted by name.
    #[must_use]
    pub fn ingredients(&self) -> Vec<ItemCount> {
        in_stock(self.ingredients.iter().map(|(k, v)| (k, *v)))
    }

    /// Potions in stock, sorted by name.
    #[must_use]
    pub fn potions(&self) -> Vec<ItemCount> {
        in_stock(self.potions.iter().map(|(k, v)| (k, v.quantity)))
    }

    /// Trophies in stock, sorted by name.
    #[must_use]
    pub fn trophies(&self) -> Vec<ItemCount> {
        in_stock(self.trophies.iter().map(|(k, v)| (k, *v)))
    }

    /// Everything known to work against a monster, sorted by name.
    ///
    /// Returns `None` when nothing is known.
    #[must_use]
    pub fn effective_against(&self, monster: &str) -> Option<Vec<String>> {
        let weaknesses = self.monsters.get(monster)?.weaknesses();
        if weaknesses.is_empty() {
            None
        } else {
            Some(weaknesses)
        }
    }

    /// The formula of a potion in display order, if one was learned.
    #[must_use]
    pub fn formula_of(&self, potion: &str) -> Option<Vec<ItemCount>> {
        self.potions.get(potion)?.sorted_formula()
    }

    // --- Helpers ---

    fn ensure_potion(&mut self, potion: &str) {
        if !self.potions.contains_key(potion) {
            self.potions.insert(potion.to_string(), PotionRecord::new());
        }
    }

    fn learn(&mut self, monster: &str, add: impl FnOnce(&mut MonsterRecord) -> bool) -> LearnOutcome {
        match self.monsters.get_mut(monster) {
            Some(record) => {
                if add(record) {
                    LearnOutcome::Updated
                } else {
                    LearnOutcome::AlreadyKnown
                }
            }
            None => {
                let mut record = MonsterRecord::new();
                add(&mut record);
                self.monsters.insert(monster.to_string(), record);
                LearnOutcome::NewEntry
            }
        }
    }
}

/// Sums quantities per name.
fn totals(items: &[ItemCount]) -> BTreeMap<&str, Quantity> {
    let mut sums = BTreeMap::new();
    for item in items {
        let entry = sums.entry(item.name.as_str()).or_insert(0u32);
        *entry = entry.saturating_add(item.quantity);
    }
    sums
}

fn add_to(table: &mut OrdMap<String, Quantity>, name: &str, qty: Quantity) {
    match table.get_mut(name) {
        Some(count) => *count = count.saturating_add(qty),
        None => {
            table.insert(name.to_string(), qty);
        }
    }
}

fn take_from(table: &mut OrdMap<String, Quantity>, name: &str, qty: Quantity) {
    if let Some(count) = table.get_mut(name) {
        *count = count.saturating_sub(qty);
    }
}

fn in_stock<'a>(entries: impl Iterator<Item = (&'a String, Quantity)>) -> Vec<ItemCount> {
    entries
        .filter(|(_, qty)| *qty > 0)
        .map(|(name, qty)| ItemCount::new(qty, name.clone()))
        .collect()
}
