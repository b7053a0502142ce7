//! World state for Bestiary.
//!
//! This crate provides:
//! - [`World`] - The explicit world object every action mutates or queries
//! - [`PotionRecord`] / [`MonsterRecord`] - Per-name records in the world tables
//! - Outcome enums describing what each world operation did

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod outcome;
pub mod record;
pub mod world;

pub use outcome::{BrewOutcome, EncounterOutcome, FormulaOutcome, LearnOutcome, TradeOutcome};
pub use record::{MonsterRecord, PotionRecord};
pub use world::World;
