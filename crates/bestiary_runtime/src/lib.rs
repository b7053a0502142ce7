//! REPL and CLI for Bestiary.
//!
//! This crate provides:
//! - [`Session`] - World ownership and the per-line pipeline
//! - [`Repl`] - Prompt, read, execute, print loop
//! - [`LineEditor`] - Terminal (rustyline) and plain stdin input

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod editor;
pub mod escape;
pub mod highlight;
pub mod repl;
pub mod session;

pub use editor::{LineEditor, ReadResult, RustylineEditor, StdinEditor};
pub use escape::expand_escapes;
pub use highlight::BestiaryHighlighter;
pub use repl::{DEFAULT_PROMPT, Repl};
pub use session::{INVALID, Session, SessionStats};
