//! Syntax pattern matching.
//!
//! Matches refined token streams against the sentence catalog. A pattern
//! matches only if its elements and the tokens run out together.

use bestiary_foundation::ItemCount;
use bestiary_language::refiner::ARTICLE;
use bestiary_language::{Keyword, Token, TokenKind};
use log::{debug, trace};

use crate::pattern::{CATALOG, Pattern, PatternElement, PatternId, Slot};

/// A value bound to a slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Binding {
    /// A name.
    Name(String),
    /// A list of item counts.
    List(Vec<ItemCount>),
}

/// A successful syntax match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyntaxMatch {
    /// The matched pattern.
    pub pattern: PatternId,
    /// Number of tokens consumed (always the whole line).
    pub consumed: usize,
    /// Slot bindings in sentence order.
    pub bindings: Vec<(Slot, Binding)>,
}

impl SyntaxMatch {
    /// Returns the name bound to `slot`.
    #[must_use]
    pub fn name(&self, slot: Slot) -> Option<&str> {
        self.bindings.iter().find_map(|(s, b)| match b {
            Binding::Name(name) if *s == slot => Some(name.as_str()),
            _ => None,
        })
    }

    /// Returns the list bound to `slot`.
    #[must_use]
    pub fn list(&self, slot: Slot) -> Option<&[ItemCount]> {
        self.bindings.iter().find_map(|(s, b)| match b {
            Binding::List(items) if *s == slot => Some(items.as_slice()),
            _ => None,
        })
    }
}

/// Matches token streams against the sentence catalog.
pub struct SyntaxMatcher;

impl SyntaxMatcher {
    /// Matches tokens against the catalog; the first full match wins.
    #[must_use]
    pub fn match_tokens(tokens: &[Token]) -> Option<SyntaxMatch> {
        Self::match_with(tokens, CATALOG)
    }

    /// Matches tokens against the given patterns, in order.
    #[must_use]
    pub fn match_with(tokens: &[Token], patterns: &[Pattern]) -> Option<SyntaxMatch> {
        for pattern in patterns {
            trace!("trying pattern {}", pattern.id);
            if let Some(m) = Self::try_match(tokens, pattern) {
                debug!("matched pattern {}", m.pattern);
                return Some(m);
            }
        }
        None
    }

    /// Tries to match tokens against a single pattern.
    fn try_match(tokens: &[Token], pattern: &Pattern) -> Option<SyntaxMatch> {
        let mut idx = 0;
        let mut bindings = Vec::new();

        for element in pattern.elements {
            let token = tokens.get(idx)?;
            match *element {
                PatternElement::Keyword(keyword) => {
                    if !token.is_keyword(keyword) {
                        return None;
                    }
                    idx += 1;
                }
                PatternElement::Action(verb) => {
                    if !token.is_keyword(Keyword::Action) || token.text != verb {
                        return None;
                    }
                    idx += 1;
                }
                PatternElement::Article => {
                    if token.kind != TokenKind::Word || token.text != ARTICLE {
                        return None;
                    }
                    idx += 1;
                }
                PatternElement::Name(slot) => {
                    if token.kind != TokenKind::Word {
                        return None;
                    }
                    bindings.push((slot, Binding::Name(token.text.clone())));
                    idx += 1;
                }
                PatternElement::AnyName(slot) => {
                    if !token.kind.is_name() {
                        return None;
                    }
                    bindings.push((slot, Binding::Name(token.text.clone())));
                    idx += 1;
                }
                PatternElement::List(slot) => {
                    let (items, consumed) = Self::collect_list(tokens, idx)?;
                    bindings.push((slot, Binding::List(items)));
                    idx += consumed;
                }
                PatternElement::QuestionMark => {
                    if token.kind != TokenKind::QuestionMark {
                        return None;
                    }
                    idx += 1;
                }
            }
        }

        if idx != tokens.len() {
            return None;
        }

        Some(SyntaxMatch {
            pattern: pattern.id,
            consumed: idx,
            bindings,
        })
    }

    /// Collects a greedy `Quantity Word (, Quantity Word)*` list.
    ///
    /// Returns the items and number of tokens consumed. A trailing comma
    /// without a full pair after it is left unconsumed.
    fn collect_list(tokens: &[Token], start: usize) -> Option<(Vec<ItemCount>, usize)> {
        let mut items = Vec::new();
        let mut idx = start;

        while let Some(item) = Self::pair_at(tokens, idx) {
            items.push(item);
            idx += 2;

            let comma = tokens.get(idx).is_some_and(|t| t.kind == TokenKind::Comma);
            if !comma || Self::pair_at(tokens, idx + 1).is_none() {
                break;
            }
            idx += 1;
        }

        if items.is_empty() {
            None
        } else {
            Some((items, idx - start))
        }
    }

    /// Reads a `Quantity Word` pair at `idx`.
    fn pair_at(tokens: &[Token], idx: usize) -> Option<ItemCount> {
        let quantity = tokens.get(idx)?.quantity()?;
        let name = tokens.get(idx + 1).filter(|t| t.kind == TokenKind::Word)?;
        Some(ItemCount::new(quantity, name.text.clone()))
    }
}
