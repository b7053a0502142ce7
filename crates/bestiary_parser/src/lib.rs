//! Sentence grammar and action dispatch for Bestiary.
//!
//! This crate turns refined tokens into typed commands and runs them
//! against the world.
//!
//! # Architecture
//!
//! ```text
//! [Geralt, brews, "Black Blood"]
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ SYNTAX          │  → Brew { Potion: "Black Blood" }
//! │ MATCHING        │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ COMMAND         │  → Command::Brew { potion: "Black Blood" }
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ DISPATCH        │  → "No formula for Black Blood"
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`pattern`] - The sentence catalog, in match-priority order
//! - [`syntax`] - Matching tokens against the catalog
//! - [`command`] - Typed commands built from matches
//! - [`action`] - Executing commands against the world

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod action;
pub mod command;
pub mod pattern;
pub mod syntax;

// Re-export main types for convenience
pub use action::{Dispatcher, Outcome};
pub use command::Command;
pub use pattern::{CATALOG, Pattern, PatternElement, PatternId, Slot};
pub use syntax::{Binding, SyntaxMatch, SyntaxMatcher};

use bestiary_foundation::{Error, Result};
use log::debug;

/// Parses a command line into a typed command.
///
/// # Errors
///
/// Returns a lexical or refinement error from tokenization, or
/// [`ErrorKind::NoMatch`](bestiary_foundation::ErrorKind::NoMatch) if no
/// sentence pattern matches. Either way the error's context carries the
/// offending line.
pub fn parse_line(line: &str) -> Result<Command> {
    let tokens = bestiary_language::tokenize(line).map_err(|e| in_line(e, line))?;
    let Some(m) = SyntaxMatcher::match_tokens(&tokens) else {
        debug!("no pattern matches {line:?}");
        return Err(in_line(Error::no_match(), line));
    };
    Command::from_match(&m)
}

/// Records `line` in the error's context, keeping any column already set.
fn in_line(mut err: Error, line: &str) -> Error {
    let context = err.context.take().unwrap_or_default().with_line(line);
    err.with_context(context)
}
