//! Cart store.
//!
//! Holds the active cart for the local session. Quantities are always in
//! `1..=max_quantity`; writing zero or less removes the line instead of
//! storing an empty one. Line totals and the cart total are derived from
//! catalog prices on every read and never cached.

use std::sync::Arc;

use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::Serialize;

use aura_scents_core::{Price, ProductId};

use crate::catalog::ProductCatalog;
use crate::events::{EventBus, StoreEvent};
use crate::models::{OrderLine, Product};

/// Quantity ceiling used when none is configured.
pub const DEFAULT_MAX_QUANTITY: u32 = 99;

/// A product and how many of it are in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Result of a cart write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineUpdate {
    /// The line now holds this quantity.
    Set(u32),
    /// The line is gone (or was never there).
    Removed,
    /// The product is not in the catalog; nothing changed.
    UnknownProduct,
}

/// The cart for the local session.
#[derive(Debug)]
pub struct CartStore {
    catalog: Arc<ProductCatalog>,
    lines: IndexMap<ProductId, CartLine>,
    max_quantity: u32,
    events: EventBus,
}

impl CartStore {
    /// Create an empty cart. `max_quantity` is raised to 1 if given as 0.
    #[must_use]
    pub fn new(catalog: Arc<ProductCatalog>, max_quantity: u32, events: EventBus) -> Self {
        Self {
            catalog,
            lines: IndexMap::new(),
            max_quantity: max_quantity.max(1),
            events,
        }
    }

    /// Largest quantity a single line may hold.
    #[must_use]
    pub const fn max_quantity(&self) -> u32 {
        self.max_quantity
    }

    /// Add `quantity` units, creating the line if needed.
    ///
    /// The resulting quantity is clamped to `1..=max_quantity`.
    pub fn add_or_increment(&mut self, product_id: &str, quantity: u32) -> LineUpdate {
        let current = self.quantity_of(product_id);
        self.write(product_id, u64::from(current) + u64::from(quantity))
    }

    /// Set the line to exactly `quantity` units.
    ///
    /// Zero or negative removes the line; larger values are clamped to
    /// `max_quantity`.
    pub fn set_quantity(&mut self, product_id: &str, quantity: i64) -> LineUpdate {
        match u64::try_from(quantity) {
            Ok(q) if q > 0 => self.write(product_id, q),
            _ => {
                self.remove_line(product_id);
                LineUpdate::Removed
            }
        }
    }

    /// Remove the line if present. Returns whether anything was removed.
    pub fn remove_line(&mut self, product_id: &str) -> bool {
        let removed = self.lines.shift_remove(product_id).is_some();
        if removed {
            tracing::debug!(product_id, "removed cart line");
            self.events.publish(StoreEvent::CartLineRemoved {
                product_id: ProductId::new(product_id),
            });
        }
        removed
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        if self.lines.is_empty() {
            return;
        }
        self.lines.clear();
        tracing::debug!("cart cleared");
        self.events.publish(StoreEvent::CartCleared);
    }

    /// Store a clamped quantity for a catalog product.
    fn write(&mut self, product_id: &str, requested: u64) -> LineUpdate {
        let Some(product) = self.catalog.find_by_id(product_id) else {
            tracing::debug!(product_id, "ignoring cart write for unknown product");
            return LineUpdate::UnknownProduct;
        };

        let quantity = u32::try_from(requested)
            .unwrap_or(u32::MAX)
            .clamp(1, self.max_quantity);
        if u64::from(quantity) != requested {
            tracing::debug!(product_id, requested, quantity, "clamped cart quantity");
        }

        let id = product.id.clone();
        self.lines
            .entry(id.clone())
            .and_modify(|line| line.quantity = quantity)
            .or_insert_with(|| CartLine {
                product_id: id.clone(),
                quantity,
            });
        self.events.publish(StoreEvent::CartLineChanged {
            product_id: id,
            quantity,
        });
        LineUpdate::Set(quantity)
    }

    /// Quantity of the product in the cart, 0 if absent.
    #[must_use]
    pub fn quantity_of(&self, product_id: &str) -> u32 {
        self.lines.get(product_id).map_or(0, |line| line.quantity)
    }

    /// Lines in the order they were first added.
    pub fn lines(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.values()
    }

    /// Lines paired with their catalog products.
    pub fn lines_with_products(&self) -> impl Iterator<Item = (&CartLine, &Product)> {
        self.lines.values().filter_map(move |line| {
            self.catalog
                .find_by_id(line.product_id.as_str())
                .map(|product| (line, product))
        })
    }

    /// Unit price times quantity for one line.
    #[must_use]
    pub fn line_total(&self, product_id: &str) -> Option<Price> {
        let line = self.lines.get(product_id)?;
        let product = self.catalog.find_by_id(product_id)?;
        Some(product.price.times(line.quantity))
    }

    /// Exact sum of all line totals.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.lines_with_products()
            .map(|(line, product)| product.price.times(line.quantity).amount)
            .sum()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.values().map(|line| line.quantity).sum()
    }

    /// Number of distinct products.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Copy the lines by value for an order snapshot.
    #[must_use]
    pub fn snapshot_lines(&self) -> Vec<OrderLine> {
        self.lines_with_products()
            .map(|(line, product)| OrderLine {
                product_id: product.id.clone(),
                name: product.name.clone(),
                unit_price: product.price,
                quantity: line.quantity,
            })
            .collect()
    }
}
