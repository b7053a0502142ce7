//! Integration tests for dispatching parsed commands

use bestiary_parser::{Dispatcher, Outcome, parse_line};
use bestiary_storage::World;

/// Runs lines against one world, returning each reply.
fn run(world: &mut World, lines: &[&str]) -> Vec<String> {
    lines
        .iter()
        .map(|line| {
            let command = parse_line(line).unwrap();
            match Dispatcher::dispatch(world, &command) {
                Outcome::Reply(text) => text,
                Outcome::Exit => "<exit>".to_string(),
            }
        })
        .collect()
}

#[test]
fn alchemy_round() {
    let mut world = World::new();
    let replies = run(
        &mut world,
        &[
            "Geralt learns Black Blood potion consists of 2 Vitriol, 1 Rebis",
            "Geralt learns Black Blood potion consists of 1 Vitriol",
            "Geralt brews Black Blood",
            "Geralt loots 4 Vitriol, 1 Rebis",
            "Geralt brews Black Blood",
            "Geralt brews Black Blood",
            "Total potion Black Blood ?",
            "Total ingredient ?",
            "What is in Black Blood ?",
        ],
    );
    assert_eq!(
        replies,
        vec![
            "New alchemy formula obtained: Black Blood",
            "Already known formula",
            "Not enough ingredients",
            "Alchemy ingredients obtained",
            "Alchemy item created: Black Blood",
            "Not enough ingredients",
            "1",
            "2 Vitriol",
            "2 Vitriol, 1 Rebis",
        ]
    );
}

#[test]
fn hunting_round() {
    let mut world = World::new();
    let replies = run(
        &mut world,
        &[
            "What is effective against Griffin ?",
            "Geralt learns Aard sign is effective against Griffin",
            "Geralt learns Igni sign is effective against Griffin",
            "What is effective against Griffin ?",
            "Geralt encounters a Griffin",
            "Total trophy ?",
            "Geralt trades 2 Griffin trophy for 1 Aether",
            "Geralt trades 1 Griffin trophy for 1 Aether",
            "Total trophy Griffin ?",
            "Total trophy ?",
            "Total ingredient Aether ?",
        ],
    );
    assert_eq!(
        replies,
        vec![
            "No knowledge of Griffin",
            "New bestiary entry added: Griffin",
            "Bestiary entry updated: Griffin",
            "Aard, Igni",
            "Geralt defeats Griffin",
            "1 Griffin",
            "Not enough trophies",
            "Trade successful",
            "0",
            "None",
            "1",
        ]
    );
}

#[test]
fn formula_query_without_formula() {
    let mut world = World::new();
    let replies = run(
        &mut world,
        &[
            "What is in Swallow ?",
            "Geralt learns Swallow potion is effective against Ghoul",
            "What is in Swallow ?",
            "Geralt brews Swallow",
        ],
    );
    assert_eq!(
        replies,
        vec![
            "No formula for Swallow",
            "New bestiary entry added: Ghoul",
            "No formula for Swallow",
            "No formula for Swallow",
        ]
    );
}

#[test]
fn exit_command() {
    let mut world = World::new();
    assert_eq!(run(&mut world, &["Exit"]), vec!["<exit>"]);
}
