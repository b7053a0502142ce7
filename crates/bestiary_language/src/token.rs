//! Lexeme and token types.
//!
//! Lexemes are the raw output of the lexer, whitespace runs included.
//! Tokens are what survives refinement: whitespace is gone and nothing is
//! left unrecognized, which the [`TokenKind`] type itself guarantees.

use std::fmt;

use bestiary_foundation::Quantity;

use crate::keyword::Keyword;
use crate::span::Span;

/// The character class of a lexeme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LexemeKind {
    /// An alphabetic word that is not a keyword.
    Word,
    /// An alphabetic word found in the keyword table.
    Keyword(Keyword),
    /// A run of ASCII digits.
    Quantity,
    /// `,`
    Comma,
    /// `?`
    QuestionMark,
    /// Exactly one `' '`.
    SingleSpace,
    /// Any other whitespace run.
    MultiSpace,
    /// A character outside the input alphabet.
    Undefined,
}

/// A raw lexeme from the lexer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lexeme {
    /// Character class.
    pub kind: LexemeKind,
    /// Text as written.
    pub text: String,
    /// Location in the line.
    pub span: Span,
}

impl Lexeme {
    /// Creates a new lexeme.
    #[must_use]
    pub fn new(kind: LexemeKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    /// Converts this lexeme into a token, if it survives refinement as-is.
    ///
    /// Whitespace and undefined lexemes have no token form.
    #[must_use]
    pub fn into_token(self) -> Option<Token> {
        let kind = match self.kind {
            LexemeKind::Word => TokenKind::Word,
            LexemeKind::Keyword(k) => TokenKind::Keyword(k),
            LexemeKind::Quantity => TokenKind::Quantity,
            LexemeKind::Comma => TokenKind::Comma,
            LexemeKind::QuestionMark => TokenKind::QuestionMark,
            LexemeKind::SingleSpace | LexemeKind::MultiSpace | LexemeKind::Undefined => {
                return None;
            }
        };
        Some(Token::new(kind, self.text, self.span))
    }
}

/// The kind of a validated token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A single non-keyword word.
    Word,
    /// A keyword.
    Keyword(Keyword),
    /// A strictly positive quantity.
    Quantity,
    /// `,`
    Comma,
    /// `?`
    QuestionMark,
    /// Several words joined by single spaces, e.g. `Black Blood`.
    MultiWordName,
}

impl TokenKind {
    /// Returns a human-readable name for this token kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Word => "word",
            Self::Keyword(k) => k.name(),
            Self::Quantity => "quantity",
            Self::Comma => "','",
            Self::QuestionMark => "'?'",
            Self::MultiWordName => "multi-word name",
        }
    }

    /// Returns true for kinds that can name something (`Word` or
    /// `MultiWordName`).
    #[must_use]
    pub const fn is_name(self) -> bool {
        matches!(self, Self::Word | Self::MultiWordName)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A validated token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// Kind of token.
    pub kind: TokenKind,
    /// Text as written (multi-word names joined by one space).
    pub text: String,
    /// Location in the line.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    /// Returns true if this token is the given keyword.
    #[must_use]
    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.kind == TokenKind::Keyword(keyword)
    }

    /// Returns the numeric value of a quantity token.
    ///
    /// `None` for other kinds, or if the text does not fit a [`Quantity`].
    #[must_use]
    pub fn quantity(&self) -> Option<Quantity> {
        if self.kind == TokenKind::Quantity {
            self.text.parse().ok()
        } else {
            None
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.text)
    }
}
