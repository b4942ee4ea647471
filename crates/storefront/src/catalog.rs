//! Read-only product catalog.
//!
//! Loaded once at startup and shared by every store through an `Arc`.
//! Lookups by ID are O(1); iteration follows definition order.

use std::collections::HashMap;

use aura_scents_core::{Category, ProductId};

use crate::models::Product;
use crate::seed;

/// The fixed set of products the store sells.
#[derive(Debug, Clone)]
pub struct ProductCatalog {
    products: Vec<Product>,
    index: HashMap<ProductId, usize>,
}

impl ProductCatalog {
    /// Build a catalog from products in display order.
    ///
    /// If two products share an ID the first one wins.
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        let mut index = HashMap::with_capacity(products.len());
        let mut unique = Vec::with_capacity(products.len());
        for product in products {
            if index.contains_key(&product.id) {
                tracing::warn!(
                    product_id = %product.id,
                    "duplicate product id dropped from catalog"
                );
                continue;
            }
            index.insert(product.id.clone(), unique.len());
            unique.push(product);
        }
        Self {
            products: unique,
            index,
        }
    }

    /// The built-in sample catalog.
    #[must_use]
    pub fn sample() -> Self {
        Self::new(seed::sample_products())
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&Product> {
        self.index.get(id).and_then(|&i| self.products.get(i))
    }

    /// Whether the catalog has a product with this ID.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// All products in definition order.
    #[must_use]
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Products in one category, in definition order.
    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(move |p| p.category == category)
    }

    /// Case-insensitive search over product names and notes.
    pub fn search<'a>(&'a self, query: &'a str) -> impl Iterator<Item = &'a Product> + 'a {
        self.products.iter().filter(move |p| p.matches(query))
    }

    /// The `limit` best-rated products; ties keep definition order.
    #[must_use]
    pub fn featured(&self, limit: usize) -> Vec<&Product> {
        let mut ranked: Vec<&Product> = self.products.iter().collect();
        ranked.sort_by(|a, b| b.rating.total_cmp(&a.rating));
        ranked.truncate(limit);
        ranked
    }

    /// Number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
