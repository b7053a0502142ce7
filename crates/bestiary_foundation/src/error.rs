//! Error types for the Bestiary system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//!
//! Every way a command line can be rejected (lexical, refinement, grammar)
//! is an [`ErrorKind`] variant. The REPL collapses all of them into the
//! same `INVALID` response; the kind only shows up in debug logs.

use std::fmt;

use thiserror::Error;

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Bestiary operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an unrecognized character error.
    #[must_use]
    pub fn unrecognized_character(ch: char, column: usize) -> Self {
        Self::new(ErrorKind::UnrecognizedCharacter(ch))
            .with_context(ErrorContext::new().with_column(column))
    }

    /// Creates a negative quantity error.
    #[must_use]
    pub fn negative_quantity(text: impl Into<String>, column: usize) -> Self {
        Self::new(ErrorKind::NegativeQuantity(text.into()))
            .with_context(ErrorContext::new().with_column(column))
    }

    /// Creates a missing separator error for a word/quantity pair.
    #[must_use]
    pub fn missing_separator(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingSeparator {
            left: left.into(),
            right: right.into(),
        })
    }

    /// Creates the "no pattern matched" error.
    #[must_use]
    pub fn no_match() -> Self {
        Self::new(ErrorKind::NoMatch)
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }

    /// Returns the pipeline stage that produced this error.
    #[must_use]
    pub const fn stage(&self) -> Stage {
        self.kind.stage()
    }

    /// Returns true if this error rejects a command line (as opposed to a
    /// runtime failure of the interpreter itself).
    #[must_use]
    pub const fn is_rejection(&self) -> bool {
        !matches!(self.stage(), Stage::Runtime)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::new(ErrorKind::Io(err))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A character outside the input alphabet.
    #[error("unrecognized character: {0:?}")]
    UnrecognizedCharacter(char),

    /// A `-` immediately followed by digits.
    #[error("negative quantity: {0}")]
    NegativeQuantity(String),

    /// A quantity literal equal to zero.
    #[error("quantity must be positive: {0}")]
    NonPositiveQuantity(String),

    /// A quantity literal too large to represent.
    #[error("quantity out of range: {0}")]
    QuantityOutOfRange(String),

    /// A name and a quantity written without whitespace between them.
    #[error("missing separator between {left:?} and {right:?}")]
    MissingSeparator {
        /// Text of the left-hand lexeme.
        left: String,
        /// Text of the right-hand lexeme.
        right: String,
    },

    /// No sentence pattern consumed the whole token sequence.
    #[error("no sentence pattern matches the input")]
    NoMatch,

    /// Reading input or writing output failed.
    #[error("i/o error: {0}")]
    Io(std::io::Error),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

impl ErrorKind {
    /// Returns the pipeline stage this kind of error belongs to.
    #[must_use]
    pub const fn stage(&self) -> Stage {
        match self {
            Self::UnrecognizedCharacter(_) | Self::NegativeQuantity(_) => Stage::Lex,
            Self::NonPositiveQuantity(_)
            | Self::QuantityOutOfRange(_)
            | Self::MissingSeparator { .. } => Stage::Refine,
            Self::NoMatch => Stage::Grammar,
            Self::Io(_) | Self::Internal(_) => Stage::Runtime,
        }
    }
}

/// The pipeline stage an error was raised in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    /// Character scanning.
    Lex,
    /// Lexeme validation and name merging.
    Refine,
    /// Pattern matching against the sentence catalog.
    Grammar,
    /// Everything outside the line pipeline (I/O, editor, invariants).
    Runtime,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Lex => "lex",
            Self::Refine => "refine",
            Self::Grammar => "grammar",
            Self::Runtime => "runtime",
        };
        f.write_str(name)
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// The input line being processed.
    pub line: Option<String>,
    /// 1-based column in the line.
    pub column: Option<usize>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the input line.
    #[must_use]
    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.line = Some(line.into());
        self
    }

    /// Sets the column.
    #[must_use]
    pub fn with_column(mut self, column: usize) -> Self {
        self.column = Some(column);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(column) = self.column {
            write!(f, "at column {column}")?;
        }
        if let Some(line) = &self.line {
            if self.column.is_some() {
                f.write_str(" ")?;
            }
            write!(f, "in {line:?}")?;
        }
        Ok(())
    }
}
