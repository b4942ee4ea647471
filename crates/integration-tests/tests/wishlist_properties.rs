//! Integration tests for wishlist membership.
//!
//! Toggling is its own inverse for catalog products and a no-op for
//! anything else, whatever happened before.

use proptest::prelude::*;

use aura_scents_integration_tests::{catalog_ids, wishlist};
use aura_scents_storefront::wishlist::Toggle;

fn known_id() -> impl Strategy<Value = String> {
    proptest::sample::select(catalog_ids())
}

fn unknown_id() -> impl Strategy<Value = String> {
    "[a-z]{1,6}|1[3-9][0-9]|0"
}

// =============================================================================
// Toggle Laws
// =============================================================================

proptest! {
    #[test]
    fn toggle_twice_restores_membership(
        history in proptest::collection::vec(known_id(), 0..20),
        id in known_id(),
    ) {
        let mut wishlist = wishlist();
        for earlier in &history {
            wishlist.toggle(earlier);
        }
        let before = wishlist.is_wishlisted(&id);
        let len_before = wishlist.len();

        let first = wishlist.toggle(&id);
        prop_assert_eq!(wishlist.is_wishlisted(&id), !before);
        prop_assert_eq!(first, if before { Toggle::Removed } else { Toggle::Added });

        wishlist.toggle(&id);
        prop_assert_eq!(wishlist.is_wishlisted(&id), before);
        prop_assert_eq!(wishlist.len(), len_before);
    }

    #[test]
    fn unknown_ids_leave_wishlist_unchanged(
        history in proptest::collection::vec(known_id(), 0..20),
        id in unknown_id(),
    ) {
        let mut wishlist = wishlist();
        for earlier in &history {
            wishlist.toggle(earlier);
        }
        let before: Vec<String> = wishlist.entries().map(|e| e.product_id.to_string()).collect();

        prop_assert_eq!(wishlist.toggle(&id), Toggle::Unknown);
        prop_assert!(!wishlist.remove(&id));

        let after: Vec<String> = wishlist.entries().map(|e| e.product_id.to_string()).collect();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn entries_are_unique(ops in proptest::collection::vec(known_id(), 0..40)) {
        let mut wishlist = wishlist();
        for id in &ops {
            wishlist.toggle(id);
        }
        let mut ids: Vec<String> = wishlist.entries().map(|e| e.product_id.to_string()).collect();
        let len = ids.len();
        ids.sort();
        ids.dedup();
        prop_assert_eq!(ids.len(), len);
    }
}

// =============================================================================
// Remove
// =============================================================================

#[test]
fn test_remove_after_toggle() {
    let mut wishlist = wishlist();
    assert_eq!(wishlist.toggle("7"), Toggle::Added);
    assert!(wishlist.is_wishlisted("7"));
    assert!(wishlist.remove("7"));
    assert!(!wishlist.is_wishlisted("7"));
    assert!(!wishlist.remove("7"));
}
