//! Integration tests for looting, trading, and brewing

use bestiary_foundation::ItemCount;
use bestiary_storage::{BrewOutcome, EncounterOutcome, FormulaOutcome, TradeOutcome, World};

fn items(pairs: &[(u32, &str)]) -> Vec<ItemCount> {
    pairs.iter().map(|&(q, n)| ItemCount::new(q, n)).collect()
}

#[test]
fn brew_twice_then_run_short() {
    let mut world = World::new();
    world.loot(&items(&[(5, "Vitriol"), (2, "Rebis")]));
    assert_eq!(
        world.learn_formula("Swallow", &items(&[(2, "Vitriol"), (1, "Rebis")])),
        FormulaOutcome::Learned
    );

    assert_eq!(world.brew("Swallow"), BrewOutcome::Brewed);
    assert_eq!(world.brew("Swallow"), BrewOutcome::Brewed);
    assert_eq!(world.brew("Swallow"), BrewOutcome::NotEnoughIngredients);

    assert_eq!(world.potion_count("Swallow"), 2);
    assert_eq!(world.ingredient_count("Vitriol"), 1);
    assert_eq!(world.ingredient_count("Rebis"), 0);
}

#[test]
fn failed_brew_changes_nothing() {
    let mut world = World::new();
    world.loot(&items(&[(1, "Vitriol")]));
    world.learn_formula("Swallow", &items(&[(1, "Vitriol"), (1, "Rebis")]));

    let before = world.ingredients();
    assert_eq!(world.brew("Swallow"), BrewOutcome::NotEnoughIngredients);
    assert_eq!(world.ingredients(), before);
    assert_eq!(world.potion_count("Swallow"), 0);
}

#[test]
fn formula_ingredients_become_known_with_zero_stock() {
    let mut world = World::new();
    world.learn_formula("Thunderbolt", &items(&[(3, "Aether")]));
    assert_eq!(world.ingredient_count("Aether"), 0);
    assert!(world.ingredients().is_empty());
    assert!(world.potions().is_empty());
}

#[test]
fn trophies_from_encounters_can_be_traded() {
    let mut world = World::new();
    world.learn_sign("Igni", "Nekker");
    assert_eq!(world.encounter("Nekker"), EncounterOutcome::Defeated);
    assert_eq!(world.encounter("Nekker"), EncounterOutcome::Defeated);
    assert_eq!(world.trophy_count("Nekker"), 2);

    let trophies = items(&[(2, "Nekker")]);
    let ingredients = items(&[(4, "Quebrith")]);
    assert_eq!(world.trade(&trophies, &ingredients), TradeOutcome::Traded);
    assert_eq!(world.trophy_count("Nekker"), 0);
    assert_eq!(world.ingredient_count("Quebrith"), 4);
    assert!(world.trophies().is_empty());

    assert_eq!(world.trade(&trophies, &ingredients), TradeOutcome::NotEnoughTrophies);
    assert_eq!(world.ingredient_count("Quebrith"), 4);
}

#[test]
fn listings_are_sorted_by_name() {
    let mut world = World::new();
    world.loot(&items(&[(1, "Vitriol"), (4, "Aether"), (2, "Rebis")]));
    let names: Vec<_> = world.ingredients().into_iter().map(|i| i.name).collect();
    assert_eq!(names, vec!["Aether", "Rebis", "Vitriol"]);
}

#[test]
fn loot_saturates() {
    let mut world = World::new();
    world.loot(&items(&[(u32::MAX, "Vitriol")]));
    world.loot(&items(&[(5, "Vitriol")]));
    assert_eq!(world.ingredient_count("Vitriol"), u32::MAX);
}
