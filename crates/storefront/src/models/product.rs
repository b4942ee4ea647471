//! Product domain type.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use aura_scents_core::{Category, Price, ProductId};

/// A fragrance in the catalog.
///
/// Immutable once the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Current unit price.
    pub price: Price,
    /// List price before discount, if the product is on sale.
    pub original_price: Option<Price>,
    /// Short marketing description.
    pub description: String,
    /// Target audience.
    pub category: Category,
    /// Whether the product can be added to the cart.
    pub is_available: bool,
    /// Average rating, 0.0 to 5.0.
    pub rating: f32,
    /// Number of reviews behind the rating.
    pub review_count: u32,
    /// Fragrance notes, comma separated.
    pub notes: String,
    /// Bottle size label.
    pub size: String,
}

impl Product {
    /// Bottle size used when none is given.
    pub const DEFAULT_SIZE: &'static str = "50ml";

    /// Whole-number percentage saved against the original price.
    ///
    /// `None` when there is no original price or it is not above the current price.
    #[must_use]
    pub fn discount_percent(&self) -> Option<u32> {
        let original = self.original_price?.amount;
        if original <= self.price.amount || original.is_zero() {
            return None;
        }
        let saved = (original - self.price.amount) / original * Decimal::ONE_HUNDRED;
        saved.round().to_u32()
    }

    /// Case-insensitive match against the name and notes.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&query) || self.notes.to_lowercase().contains(&query)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::seed;

    fn product(id: &str) -> Product {
        seed::sample_products()
            .into_iter()
            .find(|p| p.id.as_str() == id)
            .unwrap()
    }

    #[test]
    fn test_discount_percent() {
        // 24,500 against 26,900 saves 8.92%
        assert_eq!(product("1").discount_percent(), Some(9));
        assert_eq!(product("3").discount_percent(), None);
    }

    #[test]
    fn test_discount_ignores_higher_price() {
        let mut p = product("1");
        p.original_price = Some(Price::lkr(Decimal::new(100, 0)));
        assert_eq!(p.discount_percent(), None);
    }

    #[test]
    fn test_matches_name_and_notes() {
        let sauvage = product("2");
        assert!(sauvage.matches("sauvage"));
        assert!(sauvage.matches("AMBROX"));
        assert!(sauvage.matches("  "));
        assert!(!sauvage.matches("vanilla"));
    }
}
