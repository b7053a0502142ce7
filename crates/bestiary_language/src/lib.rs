//! Lexer and token refiner for Bestiary command sentences.
//!
//! A command line goes through two stages here:
//!
//! ```text
//! "Geralt loots 3 Black Blood"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   LEXER         │  → [Geralt, ' ', loots, ' ', 3, ' ', Black, ' ', Blood]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   REFINER       │  → [Geralt, loots, 3, "Black Blood"]
//! └─────────────────┘
//! ```
//!
//! - [`Lexer`] - Character-class scan into [`Lexeme`]s, keyword lookup
//! - [`Refiner`] - Validation, whitespace removal, multi-word name merging
//! - [`tokenize`] - Both stages in one call

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod keyword;
pub mod lexer;
pub mod refiner;
pub mod span;
pub mod token;

pub use keyword::Keyword;
pub use lexer::Lexer;
pub use refiner::Refiner;
pub use span::Span;
pub use token::{Lexeme, LexemeKind, Token, TokenKind};

use bestiary_foundation::Result;

/// Lexes and refines a command line into validated tokens.
///
/// # Errors
///
/// Returns an error if the line contains an unrecognized character, a
/// negative or zero quantity, or a name written directly against a number.
pub fn tokenize(line: &str) -> Result<Vec<Token>> {
    let lexemes = Lexer::tokenize(line)?;
    Refiner::refine(&lexemes)
}
