//! Wishlist store.
//!
//! Single source of truth for "is product X wishlisted". Entries are keyed
//! by product ID, so a product can never appear twice, and keep the order in
//! which they were added.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Serialize;

use aura_scents_core::ProductId;

use crate::catalog::ProductCatalog;
use crate::events::{EventBus, StoreEvent};
use crate::models::Product;

/// A wishlisted product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WishlistEntry {
    pub product_id: ProductId,
    pub added_at: DateTime<Utc>,
}

/// What a [`WishlistStore::toggle`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// The product was added.
    Added,
    /// The product was removed.
    Removed,
    /// The product is not in the catalog; nothing changed.
    Unknown,
}

/// The set of wishlisted products for the local user.
#[derive(Debug)]
pub struct WishlistStore {
    catalog: Arc<ProductCatalog>,
    entries: IndexMap<ProductId, WishlistEntry>,
    events: EventBus,
}

impl WishlistStore {
    /// Create an empty wishlist backed by `catalog`.
    #[must_use]
    pub fn new(catalog: Arc<ProductCatalog>, events: EventBus) -> Self {
        Self {
            catalog,
            entries: IndexMap::new(),
            events,
        }
    }

    /// Whether the product is wishlisted.
    #[must_use]
    pub fn is_wishlisted(&self, product_id: &str) -> bool {
        self.entries.contains_key(product_id)
    }

    /// Add the product if absent, remove it if present.
    ///
    /// IDs missing from the catalog are ignored and reported as
    /// [`Toggle::Unknown`].
    pub fn toggle(&mut self, product_id: &str) -> Toggle {
        if self.entries.shift_remove(product_id).is_some() {
            tracing::debug!(product_id, "removed from wishlist");
            self.events.publish(StoreEvent::WishlistRemoved {
                product_id: ProductId::new(product_id),
            });
            return Toggle::Removed;
        }

        let Some(product) = self.catalog.find_by_id(product_id) else {
            tracing::debug!(product_id, "ignoring wishlist toggle for unknown product");
            return Toggle::Unknown;
        };

        let id = product.id.clone();
        self.entries.insert(
            id.clone(),
            WishlistEntry {
                product_id: id.clone(),
                added_at: Utc::now(),
            },
        );
        tracing::debug!(product_id, "added to wishlist");
        self.events
            .publish(StoreEvent::WishlistAdded { product_id: id });
        Toggle::Added
    }

    /// Remove the product if present. Returns whether anything was removed.
    pub fn remove(&mut self, product_id: &str) -> bool {
        let removed = self.entries.shift_remove(product_id).is_some();
        if removed {
            tracing::debug!(product_id, "removed from wishlist");
            self.events.publish(StoreEvent::WishlistRemoved {
                product_id: ProductId::new(product_id),
            });
        }
        removed
    }

    /// Entries in the order they were added.
    pub fn entries(&self) -> impl Iterator<Item = &WishlistEntry> {
        self.entries.values()
    }

    /// Wishlisted products, resolved against the catalog, in the order added.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.entries
            .keys()
            .filter_map(move |id| self.catalog.find_by_id(id.as_str()))
    }

    /// Number of wishlisted products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is wishlisted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
