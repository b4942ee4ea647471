//! Integration tests for Aura Scents.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p aura-scents-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `wishlist_properties` - Toggle and remove laws over the whole catalog
//! - `cart_totals` - Exact totals and quantity bounds under random operations
//! - `checkout_flow` - Validation, placement and order history end to end
//!
//! The helpers below build stores against the sample catalog with no
//! placement delay, so async tests finish immediately.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;
use std::time::Duration;

use aura_scents_core::PaymentMethod;
use aura_scents_storefront::cart::CartStore;
use aura_scents_storefront::catalog::ProductCatalog;
use aura_scents_storefront::checkout::CheckoutForm;
use aura_scents_storefront::config::StoreConfig;
use aura_scents_storefront::events::EventBus;
use aura_scents_storefront::wishlist::WishlistStore;

/// The shared sample catalog.
#[must_use]
pub fn catalog() -> Arc<ProductCatalog> {
    Arc::new(ProductCatalog::sample())
}

/// IDs of every product in the sample catalog.
#[must_use]
pub fn catalog_ids() -> Vec<String> {
    ProductCatalog::sample()
        .all()
        .iter()
        .map(|p| p.id.to_string())
        .collect()
}

/// An empty wishlist over the sample catalog.
#[must_use]
pub fn wishlist() -> WishlistStore {
    WishlistStore::new(catalog(), EventBus::default())
}

/// An empty cart over the sample catalog with the given quantity ceiling.
#[must_use]
pub fn cart(max_quantity: u32) -> CartStore {
    CartStore::new(catalog(), max_quantity, EventBus::default())
}

/// Configuration with no delays, optionally seeded.
#[must_use]
pub fn instant_config(seed_sample_data: bool) -> StoreConfig {
    StoreConfig {
        placing_delay: Duration::ZERO,
        splash_delay: Duration::ZERO,
        seed_sample_data,
        ..StoreConfig::default()
    }
}

/// A checkout form with every field filled and a payment method chosen.
#[must_use]
pub fn complete_form() -> CheckoutForm {
    CheckoutForm {
        full_name: "Kasun Silva".to_owned(),
        email: "kasun@example.lk".to_owned(),
        phone: "+94 76 000 1234".to_owned(),
        address: "12 Temple Lane".to_owned(),
        city: "Galle".to_owned(),
        zip_code: "80000".to_owned(),
        payment_method: Some(PaymentMethod::DebitCard),
    }
}
