//! Counted item references.

use std::fmt;

/// A strictly positive item count as written in a command.
///
/// Inventory counters use the same type but may be zero.
pub type Quantity = u32;

/// A quantity paired with an item name, e.g. `3 Vitriol`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ItemCount {
    /// How many.
    pub quantity: Quantity,
    /// Item name (ingredient, trophy, ...).
    pub name: String,
}

impl ItemCount {
    /// Creates a new item count.
    #[must_use]
    pub fn new(quantity: Quantity, name: impl Into<String>) -> Self {
        Self {
            quantity,
            name: name.into(),
        }
    }
}

impl fmt::Display for ItemCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.quantity, self.name)
    }
}

/// Joins item counts as `3 Vitriol, 2 Rebis`.
///
/// Returns `None` for an empty iterator so callers can pick their own
/// placeholder.
#[must_use]
pub fn join_counts<'a, I>(items: I) -> Option<String>
where
    I: IntoIterator<Item = &'a ItemCount>,
{
    let parts: Vec<String> = items.into_iter().map(ToString::to_string).collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}
