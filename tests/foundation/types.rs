//! Integration tests for item counts

use bestiary_foundation::{ItemCount, join_counts};

#[test]
fn join_counts_in_given_order() {
    let items = vec![ItemCount::new(2, "Vitriol"), ItemCount::new(1, "Aether")];
    assert_eq!(join_counts(&items).as_deref(), Some("2 Vitriol, 1 Aether"));
}

#[test]
fn join_single_count() {
    let items = [ItemCount::new(7, "Rebis")];
    assert_eq!(join_counts(&items).as_deref(), Some("7 Rebis"));
}

#[test]
fn join_nothing() {
    let items: Vec<ItemCount> = Vec::new();
    assert_eq!(join_counts(&items), None);
}
