//! Integration tests for the token refiner
//!
//! Tests validation and multi-word name merging through `tokenize`.

use bestiary_foundation::{ErrorKind, Stage};
use bestiary_language::{Refiner, TokenKind, tokenize};
use proptest::prelude::*;

fn texts(line: &str) -> Vec<String> {
    tokenize(line).unwrap().into_iter().map(|t| t.text).collect()
}

#[test]
fn black_blood_is_one_name() {
    let tokens = tokenize("Black Blood").unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::MultiWordName);
    assert_eq!(tokens[0].text, "Black Blood");
}

#[test]
fn encounter_keeps_article_separate() {
    assert_eq!(
        texts("Geralt encounters a Black Blood"),
        vec!["Geralt", "encounters", "a", "Black Blood"]
    );
}

#[test]
fn merging_preserves_order() {
    assert_eq!(
        texts("Geralt learns Tawny Owl potion consists of 1 Rebis"),
        vec!["Geralt", "learns", "Tawny Owl", "potion", "consists", "of", "1", "Rebis"]
    );
}

#[test]
fn names_in_queries_merge() {
    assert_eq!(texts("What is in Full Moon?"), vec!["What", "is", "in", "Full Moon", "?"]);
}

#[test]
fn rejection_stages() {
    assert_eq!(tokenize("Rebis #").unwrap_err().stage(), Stage::Lex);
    assert_eq!(tokenize("Geralt loots -1 Rebis").unwrap_err().stage(), Stage::Lex);
    assert_eq!(tokenize("Geralt loots 0 Rebis").unwrap_err().stage(), Stage::Refine);
    assert_eq!(tokenize("Geralt loots 1Rebis").unwrap_err().stage(), Stage::Refine);
}

#[test]
fn only_names_need_a_separator() {
    assert!(tokenize("Geralt loots3 Rebis").is_ok());
    assert!(tokenize("Total ingredient?").is_ok());
    assert!(matches!(
        tokenize("Geralt loots 3Rebis").unwrap_err().kind,
        ErrorKind::MissingSeparator { .. }
    ));
    assert!(matches!(
        tokenize("Geralt brews Black Blood7").unwrap_err().kind,
        ErrorKind::MissingSeparator { .. }
    ));
}

#[test]
fn quantity_one_is_accepted() {
    let tokens = tokenize("Geralt loots 1 Rebis").unwrap();
    assert_eq!(tokens[2].quantity(), Some(1));
}

#[test]
fn quantity_at_limit() {
    assert!(tokenize("Geralt loots 4294967295 Rebis").is_ok());
    let err = tokenize("Geralt loots 4294967296 Rebis").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::QuantityOutOfRange(_)));
}

proptest! {
    #[test]
    fn foreign_characters_reject(
        prefix in "[a-zA-Z ]{0,10}",
        bad in "[^a-zA-Z0-9 \t\n\r\x0b\x0c,?\\-]",
        suffix in "[a-zA-Z ]{0,10}",
    ) {
        let line = format!("{prefix}{bad}{suffix}");
        prop_assert!(tokenize(&line).is_err());
    }

    #[test]
    fn positive_quantities_accepted(n in 1u32..) {
        let line = format!("Geralt loots {n} Rebis");
        let tokens = tokenize(&line).unwrap();
        prop_assert_eq!(tokens[2].quantity(), Some(n));
    }

    #[test]
    fn refinement_is_idempotent(line in "[A-Za-z]{1,6}( {1,2}[A-Za-z0-9]{1,6}){0,6}") {
        if let Ok(tokens) = tokenize(&line) {
            prop_assert_eq!(Refiner::refine_tokens(&tokens).unwrap(), tokens);
        }
    }
}
