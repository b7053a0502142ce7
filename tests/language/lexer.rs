//! Integration tests for the lexer
//!
//! Tests character-class scanning of command lines.

use bestiary_foundation::ErrorKind;
use bestiary_language::{Keyword, Lexer, LexemeKind};
use proptest::prelude::*;

fn kinds(line: &str) -> Vec<LexemeKind> {
    Lexer::tokenize(line)
        .unwrap()
        .into_iter()
        .map(|l| l.kind)
        .collect()
}

// =============================================================================
// Keywords
// =============================================================================

#[test]
fn every_action_verb_is_the_action_keyword() {
    for verb in ["loots", "trades", "brews"] {
        assert_eq!(kinds(verb), vec![LexemeKind::Keyword(Keyword::Action)]);
    }
}

#[test]
fn query_keywords() {
    assert_eq!(
        kinds("What is in"),
        vec![
            LexemeKind::Keyword(Keyword::What),
            LexemeKind::SingleSpace,
            LexemeKind::Keyword(Keyword::Is),
            LexemeKind::SingleSpace,
            LexemeKind::Keyword(Keyword::In),
        ]
    );
}

#[test]
fn keyword_prefixes_are_words() {
    assert_eq!(kinds("Geral"), vec![LexemeKind::Word]);
    assert_eq!(kinds("lootss"), vec![LexemeKind::Word]);
    assert_eq!(kinds("Potion"), vec![LexemeKind::Word]);
}

// =============================================================================
// Numbers
// =============================================================================

#[test]
fn digits_form_one_quantity() {
    let lexemes = Lexer::tokenize("1234").unwrap();
    assert_eq!(lexemes.len(), 1);
    assert_eq!(lexemes[0].kind, LexemeKind::Quantity);
    assert_eq!(lexemes[0].text, "1234");
}

#[test]
fn minus_before_digit_rejects() {
    for line in ["-1", "Geralt loots -12 Rebis", "Total potion -0"] {
        let err = Lexer::tokenize(line).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::NegativeQuantity(_)), "{line}");
    }
}

#[test]
fn lone_minus_is_undefined() {
    assert_eq!(kinds("-a"), vec![LexemeKind::Undefined, LexemeKind::Word]);
}

// =============================================================================
// Whitespace
// =============================================================================

#[test]
fn newline_and_tab_are_multi_space() {
    assert_eq!(
        kinds("a\nb\tc"),
        vec![
            LexemeKind::Word,
            LexemeKind::MultiSpace,
            LexemeKind::Word,
            LexemeKind::MultiSpace,
            LexemeKind::Word,
        ]
    );
}

proptest! {
    #[test]
    fn lexemes_cover_the_line(line in "[a-zA-Z0-9 ,?\t]{0,40}") {
        let lexemes = Lexer::tokenize(&line).unwrap();
        let joined: String = lexemes.iter().map(|l| l.text.as_str()).collect();
        prop_assert_eq!(joined, line);
    }

    #[test]
    fn adjacent_lexemes_differ_in_class(line in "[a-z0-9 ]{0,40}") {
        let lexemes = Lexer::tokenize(&line).unwrap();
        for pair in lexemes.windows(2) {
            prop_assert!(pair[0].span.touches(&pair[1].span));
            let space = |kind| matches!(kind, LexemeKind::SingleSpace | LexemeKind::MultiSpace);
            prop_assert!(!(space(pair[0].kind) && space(pair[1].kind)));
            prop_assert!(!(pair[0].kind == LexemeKind::Quantity && pair[1].kind == LexemeKind::Quantity));
        }
    }
}
