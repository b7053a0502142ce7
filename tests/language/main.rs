//! Integration tests for Layer 2: Language
//!
//! Tests for lexing and refining command sentences.

mod lexer;
mod refiner;
