//! Integration tests for Layer 1: Storage
//!
//! Tests for world state across sequences of actions.

mod alchemy;
