//! Longer sessions, checked line by line

use bestiary_parser::Outcome;
use bestiary_runtime::{INVALID, Session};

/// Feeds a transcript of `(input, expected reply)` pairs to one session.
fn check(transcript: &[(&str, &str)]) {
    let mut session = Session::new();
    for (i, (input, expected)) in transcript.iter().enumerate() {
        let got = match session.execute(input).unwrap() {
            Outcome::Reply(text) => text,
            Outcome::Exit => "<exit>".to_string(),
        };
        assert_eq!(got, *expected, "line {} ({input:?})", i + 1);
    }
}

#[test]
fn full_hunt() {
    check(&[
        ("Geralt loots 5 Vitriol, 3 Rebis, 2 Aether", "Alchemy ingredients obtained"),
        (
            "Geralt learns Black Blood potion consists of 2 Vitriol, 1 Aether",
            "New alchemy formula obtained: Black Blood",
        ),
        ("Geralt brews Black Blood", "Alchemy item created: Black Blood"),
        ("Geralt brews Black Blood", "Alchemy item created: Black Blood"),
        ("Geralt brews Black Blood", "Not enough ingredients"),
        ("Total potion ?", "2 Black Blood"),
        (
            "Geralt learns Black Blood potion is effective against Bruxa",
            "New bestiary entry added: Bruxa",
        ),
        ("Geralt encounters a Bruxa", "Geralt defeats Bruxa"),
        ("Geralt encounters a Bruxa", "Geralt defeats Bruxa"),
        (
            "Geralt encounters a Bruxa",
            "Geralt is unprepared and barely escapes with his life",
        ),
        ("Total potion Black Blood ?", "0"),
        ("Total trophy ?", "2 Bruxa"),
        ("Geralt trades 2 Bruxa trophy for 4 Vitriol", "Trade successful"),
        ("Total ingredient ?", "3 Rebis, 5 Vitriol"),
        ("What is effective against Bruxa ?", "Black Blood"),
        ("What is in Black Blood ?", "2 Vitriol, 1 Aether"),
        ("Exit", "<exit>"),
    ]);
}

#[test]
fn malformed_lines_are_invalid() {
    check(&[
        ("", INVALID),
        ("   ", INVALID),
        ("Geralt", INVALID),
        ("geralt loots 1 Rebis", INVALID),
        ("Geralt loots 1 Rebis,", INVALID),
        ("Geralt loots 1 Rebis 2 Aether", INVALID),
        ("Geralt loots 1Rebis", INVALID),
        ("Geralt loots 1 Rebis!", INVALID),
        ("Geralt encounters Drowner", INVALID),
        ("Total potion", INVALID),
        ("Exit now", INVALID),
        ("Total ingredient ?", "None"),
    ]);
}

#[test]
fn whitespace_tolerance() {
    check(&[
        ("  Geralt   loots\t2   Rebis  ", "Alchemy ingredients obtained"),
        (r"Total\tingredient\nRebis ?", "2"),
        ("Geralt brews Black  Blood", INVALID),
        ("Total ingredient?", "2 Rebis"),
    ]);
}

#[test]
fn keywords_may_touch_numbers() {
    check(&[
        ("Geralt loots3 Vitriol", "Alchemy ingredients obtained"),
        ("Total ingredient Vitriol ?", "3"),
        (
            "Geralt learns Swallow potion consists of2 Vitriol",
            "New alchemy formula obtained: Swallow",
        ),
        ("What is in Swallow ?", "2 Vitriol"),
        ("Geralt loots 3Vitriol", INVALID),
        ("Geralt loots Vitriol 3", INVALID),
        ("Total ingredient Vitriol ?", "3"),
    ]);
}

#[test]
fn repeated_names_are_summed_before_stock_checks() {
    check(&[
        (
            "Geralt learns Igni sign is effective against Wyvern",
            "New bestiary entry added: Wyvern",
        ),
        ("Geralt encounters a Wyvern", "Geralt defeats Wyvern"),
        ("Geralt encounters a Wyvern", "Geralt defeats Wyvern"),
        ("Geralt encounters a Wyvern", "Geralt defeats Wyvern"),
        ("Geralt trades 2 Wyvern, 2 Wyvern trophy for 1 Rebis", "Not enough trophies"),
        ("Total trophy Wyvern ?", "3"),
        ("Geralt trades 2 Wyvern, 1 Wyvern trophy for 1 Rebis", "Trade successful"),
        ("Total trophy Wyvern ?", "0"),
        ("Geralt loots 3 Vitriol", "Alchemy ingredients obtained"),
        (
            "Geralt learns Swallow potion consists of 2 Vitriol, 2 Vitriol",
            "New alchemy formula obtained: Swallow",
        ),
        ("Geralt brews Swallow", "Not enough ingredients"),
        ("Total ingredient Vitriol ?", "3"),
        ("Geralt loots 1 Vitriol", "Alchemy ingredients obtained"),
        ("Geralt brews Swallow", "Alchemy item created: Swallow"),
        ("Total ingredient Vitriol ?", "0"),
        ("Total potion Swallow ?", "1"),
    ]);
}
