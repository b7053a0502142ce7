//! Integration tests for Layer 3: Parser
//!
//! Tests for sentence matching, command building, and dispatch.

mod dispatch_tests;
mod syntax_matching_tests;
