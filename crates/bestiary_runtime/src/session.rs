//! Session state.
//!
//! The session owns the world and runs each line through the pipeline:
//! escape expansion, tokenization, grammar matching, dispatch.

use bestiary_foundation::Result;
use bestiary_parser::{Dispatcher, Outcome, parse_line};
use bestiary_storage::World;
use log::debug;

use crate::escape::expand_escapes;

/// Reply printed for any rejected line.
pub const INVALID: &str = "INVALID";

/// Counters for one session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Lines that matched a sentence and were executed.
    pub accepted: usize,
    /// Lines rejected at any pipeline stage.
    pub rejected: usize,
}

/// Session state for one run of the interpreter.
#[derive(Debug, Default)]
pub struct Session {
    /// The current world state.
    world: World,
    /// Line counters.
    stats: SessionStats,
}

impl Session {
    /// Creates a new session with an empty world.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new session with the given world.
    #[must_use]
    pub fn with_world(world: World) -> Self {
        Self {
            world,
            stats: SessionStats::default(),
        }
    }

    /// Returns the world.
    #[must_use]
    pub const fn world(&self) -> &World {
        &self.world
    }

    /// Returns the line counters.
    #[must_use]
    pub const fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Executes one input line.
    ///
    /// A rejected line leaves the world untouched and yields the
    /// [`INVALID`] reply.
    ///
    /// # Errors
    ///
    /// Returns an error only for failures that are not line rejections.
    pub fn execute(&mut self, line: &str) -> Result<Outcome> {
        let line = expand_escapes(line);
        match parse_line(&line) {
            Ok(command) => {
                self.stats.accepted += 1;
                Ok(Dispatcher::dispatch(&mut self.world, &command))
            }
            Err(e) if e.is_rejection() => {
                match &e.context {
                    Some(ctx) => debug!("rejected at {} stage: {e} {ctx}", e.stage()),
                    None => debug!("rejected at {} stage: {e} in {line:?}", e.stage()),
                }
                self.stats.rejected += 1;
                Ok(Outcome::Reply(INVALID.to_string()))
            }
            Err(e) => Err(e),
        }
    }
}
