//! Integration tests for sentence matching

use bestiary_foundation::{ErrorKind, ItemCount};
use bestiary_language::tokenize;
use bestiary_parser::{CATALOG, Command, PatternId, Slot, SyntaxMatcher, parse_line};

fn matched(line: &str) -> Option<PatternId> {
    SyntaxMatcher::match_tokens(&tokenize(line).ok()?).map(|m| m.pattern)
}

#[test]
fn every_catalog_pattern_is_reachable() {
    let samples = [
        "Geralt loots 1 Rebis",
        "Geralt trades 1 Ghoul trophy for 1 Rebis",
        "Geralt brews Swallow",
        "Geralt learns Igni sign is effective against Ghoul",
        "Geralt learns Swallow potion is effective against Ghoul",
        "Geralt learns Swallow potion consists of 1 Rebis",
        "Geralt encounters a Ghoul",
        "Total ingredient ?",
        "Total potion ?",
        "Total trophy ?",
        "Total ingredient Rebis ?",
        "Total potion Swallow ?",
        "Total trophy Ghoul ?",
        "What is effective against Ghoul ?",
        "What is in Swallow ?",
        "Exit",
    ];
    let found: Vec<_> = samples.iter().filter_map(|s| matched(s)).collect();
    let expected: Vec<_> = CATALOG.iter().map(|p| p.id).collect();
    assert_eq!(found, expected);
}

#[test]
fn list_matching_is_maximal() {
    let m = SyntaxMatcher::match_tokens(&tokenize("Geralt loots 3 Vitriol, 2 Rebis").unwrap())
        .unwrap();
    assert_eq!(m.pattern, PatternId::Loot);
    assert_eq!(m.bindings.len(), 1);
    assert_eq!(
        m.list(Slot::Ingredients).unwrap(),
        &[ItemCount::new(3, "Vitriol"), ItemCount::new(2, "Rebis")]
    );
}

#[test]
fn long_trade_lists() {
    let cmd = parse_line("Geralt trades 1 Ghoul, 2 Nekker, 3 Drowner trophy for 1 Rebis, 2 Aether")
        .unwrap();
    let Command::Trade {
        trophies,
        ingredients,
    } = cmd
    else {
        panic!("expected a trade");
    };
    assert_eq!(trophies.len(), 3);
    assert_eq!(ingredients.len(), 2);
}

#[test]
fn monster_names_are_single_words() {
    assert_eq!(matched("Geralt encounters a Lesser Wraith"), None);
    assert_eq!(matched("What is effective against Lesser Wraith ?"), None);
    assert_eq!(matched("Total trophy Lesser Wraith ?"), None);
}

#[test]
fn potion_names_may_be_multi_word() {
    assert_eq!(matched("Total potion Black Blood ?"), Some(PatternId::TotalPotion));
    assert_eq!(matched("What is in Black Blood ?"), Some(PatternId::FormulaQuery));
    assert_eq!(
        matched("Geralt learns Black Blood potion is effective against Vampire"),
        Some(PatternId::LearnPotionEffectiveness)
    );
}

#[test]
fn ingredient_names_are_single_words() {
    assert_eq!(matched("Total ingredient Dog Tallow ?"), None);
}

#[test]
fn verbs_are_not_interchangeable() {
    assert_eq!(matched("Geralt trades 1 Rebis"), None);
    assert_eq!(matched("Geralt brews 1 Rebis"), None);
    assert_eq!(matched("Geralt loots 1 Ghoul trophy for 1 Rebis"), None);
}

#[test]
fn missing_question_mark_rejects() {
    assert_eq!(matched("Total potion"), None);
    assert_eq!(matched("What is in Swallow"), None);
}

#[test]
fn no_match_error_kind() {
    let err = parse_line("Geralt sleeps").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::NoMatch));
}
