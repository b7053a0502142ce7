//! Lexer for command sentences.
//!
//! The lexer splits a line into maximal runs of one character class. It
//! never backtracks; the only error it raises itself is a negative number,
//! everything else questionable is left to the refiner.

use bestiary_foundation::{Error, Result};
use log::trace;

use crate::keyword::Keyword;
use crate::span::Span;
use crate::token::{Lexeme, LexemeKind};

/// Lexer for one command line.
pub struct Lexer<'src> {
    /// Line being tokenized.
    source: &'src str,
    /// Remaining text.
    rest: &'src str,
    /// Current byte offset in source.
    position: usize,
    /// Current 1-based character column.
    column: usize,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given line.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            rest: source,
            position: 0,
            column: 1,
        }
    }

    /// Returns the next lexeme, or `None` at the end of the line.
    ///
    /// # Errors
    ///
    /// Returns an error if a `-` is immediately followed by a digit.
    pub fn next_lexeme(&mut self) -> Result<Option<Lexeme>> {
        let start = self.position;
        let start_column = self.column;

        let Some(c) = self.peek_char() else {
            return Ok(None);
        };

        let kind = match c {
            c if c.is_ascii_whitespace() => self.scan_space(),
            c if c.is_ascii_digit() => self.scan_digits(),
            c if c.is_ascii_alphabetic() => self.scan_word(),
            '-' if self.peek_char_n(1).is_some_and(|d| d.is_ascii_digit()) => {
                self.advance();
                self.scan_digits();
                let text = &self.source[start..self.position];
                return Err(Error::negative_quantity(text, start_column));
            }
            ',' => {
                self.advance();
                LexemeKind::Comma
            }
            '?' => {
                self.advance();
                LexemeKind::QuestionMark
            }
            _ => {
                self.advance();
                LexemeKind::Undefined
            }
        };

        let span = Span::new(start, self.position, start_column);
        Ok(Some(Lexeme::new(kind, span.text(self.source), span)))
    }

    /// Tokenizes a whole line into lexemes.
    ///
    /// # Errors
    ///
    /// Returns an error if the line contains a negative number.
    pub fn tokenize(source: &str) -> Result<Vec<Lexeme>> {
        let mut lexer = Lexer::new(source);
        let mut lexemes = Vec::new();
        while let Some(lexeme) = lexer.next_lexeme()? {
            lexemes.push(lexeme);
        }
        trace!("lexed {} lexemes from {source:?}", lexemes.len());
        Ok(lexemes)
    }

    /// Peeks at the next character without consuming it.
    fn peek_char(&self) -> Option<char> {
        self.rest.chars().next()
    }

    /// Peeks at the character `n` positions ahead.
    fn peek_char_n(&self, n: usize) -> Option<char> {
        self.rest.chars().nth(n)
    }

    /// Advances past the next character.
    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            let len = c.len_utf8();
            self.rest = &self.rest[len..];
            self.position += len;
            self.column += 1;
        }
    }

    /// Advances while `pred` holds.
    fn advance_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.peek_char().is_some_and(&pred) {
            self.advance();
        }
    }

    /// Scans a whitespace run.
    fn scan_space(&mut self) -> LexemeKind {
        let start = self.position;
        self.advance_while(|c| c.is_ascii_whitespace());
        if &self.source[start..self.position] == " " {
            LexemeKind::SingleSpace
        } else {
            LexemeKind::MultiSpace
        }
    }

    /// Scans a digit run.
    fn scan_digits(&mut self) -> LexemeKind {
        self.advance_while(|c| c.is_ascii_digit());
        LexemeKind::Quantity
    }

    /// Scans a word and resolves it against the keyword table.
    fn scan_word(&mut self) -> LexemeKind {
        let start = self.position;
        self.advance_while(|c| c.is_ascii_alphabetic());
        match Keyword::lookup(&self.source[start..self.position]) {
            Some(keyword) => LexemeKind::Keyword(keyword),
            None => LexemeKind::Word,
        }
    }
}
