//! Line editor abstraction for the REPL.
//!
//! This module provides a trait-based abstraction over line editing,
//! allowing the REPL to use rustyline on a terminal and plain buffered
//! reads when input is piped.

use std::borrow::Cow;
use std::io::{self, BufRead, Write};

use bestiary_foundation::{Error, Result};
use bestiary_language::keyword::KEYWORDS;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::{Completer, Config, Context, Editor, Helper, Hinter, Validator};

use crate::highlight::BestiaryHighlighter;

/// Result of reading a line from the editor.
#[derive(Debug)]
pub enum ReadResult {
    /// A line was successfully read.
    Line(String),
    /// User pressed Ctrl+C.
    Interrupted,
    /// User pressed Ctrl+D, or input ran out.
    Eof,
}

/// Abstraction over line editing functionality.
pub trait LineEditor {
    /// Read a line with the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Add a line to history.
    fn add_history(&mut self, line: &str);
}

/// Helper for rustyline that provides completion, hints, and highlighting.
#[derive(Helper, Completer, Hinter, Validator)]
struct BestiaryHelper {
    #[rustyline(Completer)]
    completer: KeywordCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
    highlighter: BestiaryHighlighter,
}

impl Highlighter for BestiaryHelper {
    fn highlight<'l>(&self, line: &'l str, pos: usize) -> Cow<'l, str> {
        self.highlighter.highlight(line, pos)
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Cow::Owned(format!("\x1b[1;32m{prompt}\x1b[0m"))
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2m{hint}\x1b[0m"))
    }
}

/// Completer for keyword spellings.
struct KeywordCompleter {
    keywords: Vec<&'static str>,
}

impl KeywordCompleter {
    fn new() -> Self {
        let mut keywords: Vec<_> = KEYWORDS.iter().map(|&(spelling, _)| spelling).collect();
        keywords.sort_unstable();
        Self { keywords }
    }

    fn candidates(&self, word: &str) -> Vec<Pair> {
        if word.is_empty() {
            return Vec::new();
        }
        self.keywords
            .iter()
            .filter(|kw| kw.starts_with(word))
            .map(|kw| Pair {
                display: (*kw).to_string(),
                replacement: (*kw).to_string(),
            })
            .collect()
    }
}

impl Completer for KeywordCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        // Find the start of the current word
        let start = line[..pos]
            .rfind(|c: char| !c.is_ascii_alphabetic())
            .map_or(0, |i| i + 1);

        Ok((start, self.candidates(&line[start..pos])))
    }
}

/// Line editor implementation using rustyline.
pub struct RustylineEditor {
    editor: Editor<BestiaryHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Creates a new rustyline-based editor.
    ///
    /// # Errors
    ///
    /// Returns an error if rustyline initialization fails.
    pub fn new() -> Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(1000)
            .map_err(|e| Error::internal(e.to_string()))?
            .build();

        let helper = BestiaryHelper {
            completer: KeywordCompleter::new(),
            hinter: HistoryHinter::new(),
            highlighter: BestiaryHighlighter::new(),
        };

        let mut editor =
            Editor::with_config(config).map_err(|e| Error::internal(e.to_string()))?;
        editor.set_helper(Some(helper));

        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(ReadlineError::Io(e)) => Err(e.into()),
            Err(e) => Err(Error::internal(e.to_string())),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }
}

/// Line editor over plain buffered input.
///
/// Writes the prompt to stdout and reads up to the next `\n`. Used when
/// input is not a terminal, so a driver reading the prompt sees it exactly.
pub struct StdinEditor<R = io::StdinLock<'static>> {
    reader: R,
}

impl StdinEditor {
    /// Creates an editor over standard input.
    #[must_use]
    pub fn new() -> Self {
        Self::from_reader(io::stdin().lock())
    }
}

impl Default for StdinEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead> StdinEditor<R> {
    /// Creates an editor over any buffered reader.
    pub const fn from_reader(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineEditor for StdinEditor<R> {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(prompt.as_bytes())?;
        stdout.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(ReadResult::Eof);
        }
        if line.ends_with('\n') {
            line.pop();
        }
        Ok(ReadResult::Line(line))
    }

    fn add_history(&mut self, _line: &str) {}
}
