//! Integration tests for cart totals and quantity bounds.

use std::str::FromStr;

use proptest::prelude::*;
use rust_decimal::Decimal;

use aura_scents_integration_tests::{cart, catalog, catalog_ids};
use aura_scents_storefront::cart::LineUpdate;

#[derive(Debug, Clone)]
enum Op {
    Add(String, u32),
    Set(String, i64),
    Remove(String),
}

fn op() -> impl Strategy<Value = Op> {
    let id = proptest::sample::select(catalog_ids());
    prop_oneof![
        (id.clone(), 0u32..150).prop_map(|(id, q)| Op::Add(id, q)),
        (id.clone(), -5i64..150).prop_map(|(id, q)| Op::Set(id, q)),
        id.prop_map(Op::Remove),
    ]
}

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap_or_default()
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn total_is_exact_sum_of_lines(
        ops in proptest::collection::vec(op(), 0..40),
        max in 1u32..120,
    ) {
        let catalog = catalog();
        let mut cart = cart(max);
        for op in ops {
            match op {
                Op::Add(id, q) => { cart.add_or_increment(&id, q); }
                Op::Set(id, q) => { cart.set_quantity(&id, q); }
                Op::Remove(id) => { cart.remove_line(&id); }
            }
        }

        let mut expected = Decimal::ZERO;
        for line in cart.lines() {
            prop_assert!(line.quantity >= 1);
            prop_assert!(line.quantity <= max);
            let product = catalog.find_by_id(line.product_id.as_str());
            prop_assert!(product.is_some());
            if let Some(product) = product {
                expected += product.price.amount * Decimal::from(line.quantity);
            }
        }
        prop_assert_eq!(cart.total(), expected);
        prop_assert_eq!(
            cart.item_count(),
            cart.lines().map(|line| line.quantity).sum::<u32>()
        );
    }

    #[test]
    fn non_positive_set_removes_line(
        id in proptest::sample::select(catalog_ids()),
        q in -100i64..=0,
    ) {
        let mut cart = cart(99);
        cart.add_or_increment(&id, 3);
        prop_assert_eq!(cart.set_quantity(&id, q), LineUpdate::Removed);
        prop_assert_eq!(cart.quantity_of(&id), 0);
        prop_assert!(cart.is_empty());
        prop_assert_eq!(cart.total(), Decimal::ZERO);
    }
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_three_lines_total_exactly() {
    let mut cart = cart(99);
    cart.add_or_increment("9", 1);
    cart.add_or_increment("2", 1);
    cart.add_or_increment("5", 1);
    assert_eq!(cart.total(), dec("65500.00"));
}

#[test]
fn test_add_increment_then_zero() {
    let mut cart = cart(99);
    assert!(cart.is_empty());

    cart.add_or_increment("2", 1);
    cart.add_or_increment("2", 2);
    assert_eq!(cart.quantity_of("2"), 3);
    assert_eq!(cart.total(), dec("64500.00"));

    cart.set_quantity("2", 0);
    assert!(cart.is_empty());
    assert_eq!(cart.total(), dec("0.00"));
}

#[test]
fn test_unknown_product_never_enters_cart() {
    let mut cart = cart(99);
    assert_eq!(cart.add_or_increment("13", 1), LineUpdate::UnknownProduct);
    assert_eq!(cart.set_quantity("", 2), LineUpdate::UnknownProduct);
    assert!(cart.is_empty());
}
