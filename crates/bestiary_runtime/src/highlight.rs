//! Syntax highlighting for the REPL.

use std::borrow::Cow;

use bestiary_language::Keyword;

const KEYWORD: &str = "\x1b[36m"; // cyan
const NUMBER: &str = "\x1b[35m"; // magenta
const PUNCT: &str = "\x1b[1m"; // bold
const INVALID: &str = "\x1b[31m"; // red
const RESET: &str = "\x1b[0m";

/// Highlighter for command sentences.
pub struct BestiaryHighlighter;

impl BestiaryHighlighter {
    /// Creates a new highlighter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Highlights a line of input.
    ///
    /// Keywords, numbers, and punctuation are colored; characters the lexer
    /// would reject are shown in red. Plain names are left as typed.
    #[allow(clippy::unused_self)]
    #[must_use]
    pub fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let mut result = String::with_capacity(line.len() * 2);
        let mut rest = line;

        while let Some(c) = rest.chars().next() {
            let len = if c.is_ascii_alphabetic() {
                let len = run_len(rest, |c| c.is_ascii_alphabetic());
                let word = &rest[..len];
                if Keyword::is_keyword(word) {
                    paint(&mut result, KEYWORD, word);
                } else {
                    result.push_str(word);
                }
                len
            } else if c.is_ascii_digit() {
                let len = run_len(rest, |c| c.is_ascii_digit());
                paint(&mut result, NUMBER, &rest[..len]);
                len
            } else if c.is_ascii_whitespace() {
                result.push(c);
                1
            } else {
                let color = if c == ',' || c == '?' { PUNCT } else { INVALID };
                let len = c.len_utf8();
                paint(&mut result, color, &rest[..len]);
                len
            };
            rest = &rest[len..];
        }

        Cow::Owned(result)
    }
}

impl Default for BestiaryHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

fn run_len(s: &str, pred: impl Fn(char) -> bool) -> usize {
    s.find(|c: char| !pred(c)).unwrap_or(s.len())
}

fn paint(out: &mut String, color: &str, text: &str) {
    out.push_str(color);
    out.push_str(text);
    out.push_str(RESET);
}
