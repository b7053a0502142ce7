//! Token refinement.
//!
//! The refiner turns raw lexemes into validated tokens. It rejects
//! malformed lines, drops whitespace, and merges runs of plain words
//! separated by single spaces into one multi-word name:
//!
//! ```text
//! Geralt ' ' brews ' ' Black ' ' Blood   →   Geralt brews "Black Blood"
//! ```
//!
//! The article in `Geralt encounters a Wyvern` is never merged with the
//! monster name that follows it.
//!
//! The same pass runs over lexemes and over tokens it already produced, so
//! refining a refined sequence gives it back unchanged.

use bestiary_foundation::{Error, ErrorKind, Quantity, Result};
use log::trace;

use crate::keyword::Keyword;
use crate::span::Span;
use crate::token::{Lexeme, LexemeKind, Token, TokenKind};

/// The article accepted by the encounter sentence.
pub const ARTICLE: &str = "a";

/// Validates lexemes and produces the token sequence the grammar sees.
pub struct Refiner;

impl Refiner {
    /// Refines a lexeme sequence into tokens.
    ///
    /// # Errors
    ///
    /// Returns an error for undefined characters, zero or oversized
    /// quantities, and names written directly against numbers.
    pub fn refine(lexemes: &[Lexeme]) -> Result<Vec<Token>> {
        let tokens = Self::run(lexemes)?;
        trace!("refined {} lexemes into {} tokens", lexemes.len(), tokens.len());
        Ok(tokens)
    }

    /// Refines an already refined token sequence.
    ///
    /// A valid sequence comes back unchanged: it holds no whitespace, so no
    /// names merge, and every rule it passed once it passes again.
    ///
    /// # Errors
    ///
    /// Returns an error if a quantity is not strictly positive or a name
    /// touches a quantity.
    pub fn refine_tokens(tokens: &[Token]) -> Result<Vec<Token>> {
        Self::run(tokens)
    }

    /// Validates, then merges names and drops whitespace.
    fn run<P: Piece>(pieces: &[P]) -> Result<Vec<Token>> {
        Self::validate(pieces)?;

        let mut tokens = Vec::with_capacity(pieces.len());
        let mut i = 0;
        while i < pieces.len() {
            let piece = &pieces[i];
            match piece.class() {
                Class::SingleSpace | Class::MultiSpace => i += 1,
                _ if Self::starts_name_run(pieces, i) => {
                    let (token, next) = Self::merge_name_run(pieces, i);
                    trace!("merged {:?}", token.text);
                    tokens.push(token);
                    i = next;
                }
                _ => {
                    let token = piece.to_token().ok_or_else(|| {
                        Error::internal(format!(
                            "{:?} survived validation without a token form",
                            piece.text()
                        ))
                    })?;
                    tokens.push(token);
                    i += 1;
                }
            }
        }
        Ok(tokens)
    }

    /// Applies the per-position rejection rules, left to right.
    fn validate<P: Piece>(pieces: &[P]) -> Result<()> {
        for (i, piece) in pieces.iter().enumerate() {
            match piece.class() {
                Class::Undefined => {
                    let ch = piece.text().chars().next().unwrap_or_default();
                    return Err(Error::unrecognized_character(ch, piece.span().column));
                }
                Class::Quantity => {
                    check_quantity(piece.text())?;
                }
                _ => {}
            }

            let Some(next) = pieces.get(i + 1) else {
                continue;
            };
            if piece.span().touches(&next.span())
                && is_separator_violation(piece.class(), next.class())
            {
                return Err(Error::missing_separator(piece.text(), next.text()));
            }
        }
        Ok(())
    }

    /// Returns true if a multi-word name starts at `i`.
    fn starts_name_run<P: Piece>(pieces: &[P], i: usize) -> bool {
        let is_name = |j: usize| pieces.get(j).is_some_and(|p| p.class() == Class::Name);
        let is_single_space =
            |j: usize| pieces.get(j).is_some_and(|p| p.class() == Class::SingleSpace);

        if !(is_name(i) && is_single_space(i + 1) && is_name(i + 2)) {
            return false;
        }
        !Self::is_encounter_article(pieces, i)
    }

    /// Returns true if the word at `i` is the article of an encounter.
    fn is_encounter_article<P: Piece>(pieces: &[P], i: usize) -> bool {
        pieces[i].text() == ARTICLE
            && i >= 2
            && pieces[i - 2].class() == Class::Keyword(Keyword::Encounters)
    }

    /// Greedily merges `Name (SingleSpace Name)+` starting at `start`.
    ///
    /// Returns the merged token and the index just past the run.
    fn merge_name_run<P: Piece>(pieces: &[P], start: usize) -> (Token, usize) {
        let first = &pieces[start];
        let mut text = first.text().to_string();
        let mut last = first;
        let mut i = start + 1;

        while let (Some(space), Some(name)) = (pieces.get(i), pieces.get(i + 1)) {
            if space.class() != Class::SingleSpace || name.class() != Class::Name {
                break;
            }
            text.push(' ');
            text.push_str(name.text());
            last = name;
            i += 2;
        }

        let span = first.span().to(last.span());
        (Token::new(TokenKind::MultiWordName, text, span), i)
    }
}

/// What the refinement rules see of a lexeme or token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Class {
    /// A plain word, or a name already merged from several.
    Name,
    Keyword(Keyword),
    Quantity,
    Punctuation,
    SingleSpace,
    MultiSpace,
    Undefined,
}

/// Input the refiner runs over.
trait Piece {
    fn class(&self) -> Class;
    fn text(&self) -> &str;
    fn span(&self) -> Span;
    /// The token this piece stands for on its own, if it has one.
    fn to_token(&self) -> Option<Token>;
}

impl Piece for Lexeme {
    fn class(&self) -> Class {
        match self.kind {
            LexemeKind::Word => Class::Name,
            LexemeKind::Keyword(k) => Class::Keyword(k),
            LexemeKind::Quantity => Class::Quantity,
            LexemeKind::Comma | LexemeKind::QuestionMark => Class::Punctuation,
            LexemeKind::SingleSpace => Class::SingleSpace,
            LexemeKind::MultiSpace => Class::MultiSpace,
            LexemeKind::Undefined => Class::Undefined,
        }
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn span(&self) -> Span {
        self.span
    }

    fn to_token(&self) -> Option<Token> {
        self.clone().into_token()
    }
}

impl Piece for Token {
    fn class(&self) -> Class {
        match self.kind {
            TokenKind::Word | TokenKind::MultiWordName => Class::Name,
            TokenKind::Keyword(k) => Class::Keyword(k),
            TokenKind::Quantity => Class::Quantity,
            TokenKind::Comma | TokenKind::QuestionMark => Class::Punctuation,
        }
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn span(&self) -> Span {
        self.span
    }

    fn to_token(&self) -> Option<Token> {
        Some(self.clone())
    }
}

/// Parses a quantity literal, rejecting zero and values that do not fit.
fn check_quantity(text: &str) -> Result<Quantity> {
    match text.parse::<Quantity>() {
        Ok(0) => Err(Error::new(ErrorKind::NonPositiveQuantity(text.to_string()))),
        Ok(value) => Ok(value),
        Err(_) => Err(Error::new(ErrorKind::QuantityOutOfRange(text.to_string()))),
    }
}

/// A name directly against a quantity, in either order. Keywords may touch
/// numbers.
fn is_separator_violation(left: Class, right: Class) -> bool {
    matches!(
        (left, right),
        (Class::Name, Class::Quantity) | (Class::Quantity, Class::Name)
    )
}
