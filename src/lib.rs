//! Bestiary - Line command interpreter for Geralt's alchemy and bestiary
//!
//! This crate re-exports all layers of the Bestiary system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: bestiary_runtime    — Session, REPL, CLI
//! Layer 3: bestiary_parser     — Pattern catalog, grammar matcher, dispatch
//! Layer 2: bestiary_language   — Lexer, token refiner
//! Layer 1: bestiary_storage    — World state (inventory, bestiary, trophies)
//! Layer 0: bestiary_foundation — Core types (ItemCount, Error)
//! ```

pub use bestiary_foundation as foundation;
pub use bestiary_language as language;
pub use bestiary_parser as parser;
pub use bestiary_runtime as runtime;
pub use bestiary_storage as storage;
