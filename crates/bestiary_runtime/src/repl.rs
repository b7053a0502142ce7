//! The main REPL implementation.

use std::fs;
use std::path::Path;

use bestiary_foundation::Result;
use bestiary_parser::Outcome;
use log::{debug, info};

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::session::Session;

/// Prompt written before each line is read.
pub const DEFAULT_PROMPT: &str = ">> ";

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Session state (world, counters).
    session: Session,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new() -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(editor: E) -> Self {
        Self {
            editor,
            session: Session::new(),
            show_banner: false,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }

    /// Sets the session for this REPL.
    #[must_use]
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self
    }

    /// Enables the welcome banner.
    #[must_use]
    pub const fn with_banner(mut self) -> Self {
        self.show_banner = true;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Runs the REPL loop until `Exit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            Self::print_banner();
        }

        while self.read_eval_print()? {}

        let stats = self.session.stats();
        info!(
            "session finished: {} accepted, {} rejected",
            stats.accepted, stats.rejected
        );
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        let line = match self.editor.read_line(&self.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => return Ok(true),
            ReadResult::Eof => return Ok(false),
        };

        if !line.trim().is_empty() {
            self.editor.add_history(&line);
        }

        self.eval_print(&line)
    }

    /// Evaluates one line and prints its reply.
    ///
    /// Returns `Ok(false)` if the line ended the session.
    fn eval_print(&mut self, line: &str) -> Result<bool> {
        match self.session.execute(line)? {
            Outcome::Reply(text) => {
                println!("{text}");
                Ok(true)
            }
            Outcome::Exit => Ok(false),
        }
    }

    /// Runs every line of a command file.
    ///
    /// Returns `Ok(false)` if the file ended the session with `Exit`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn eval_file(&mut self, path: &Path) -> Result<bool> {
        debug!("running command file {}", path.display());
        let contents = fs::read_to_string(path)?;
        for line in contents.lines() {
            if !self.eval_print(line)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn print_banner() {
        println!("Bestiary {}", env!("CARGO_PKG_VERSION"));
        println!("Type sentences like \"Geralt loots 3 Vitriol\"; \"Exit\" or Ctrl+D quits.");
    }
}
