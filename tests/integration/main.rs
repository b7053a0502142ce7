//! End-to-end integration tests
//!
//! Tests that drive whole command lines through a session, the way the
//! interpreter does.

mod transcripts;
