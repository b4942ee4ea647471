//! Order snapshot types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use aura_scents_core::{OrderId, OrderStatus, PaymentMethod, Price, ProductId, UserId};

/// A shipping address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub zip_code: String,
    pub country: String,
}

impl Address {
    /// Country used when none is given.
    pub const DEFAULT_COUNTRY: &'static str = "Sri Lanka";

    /// Create an address in the default country.
    #[must_use]
    pub fn new(
        street: impl Into<String>,
        city: impl Into<String>,
        zip_code: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            city: city.into(),
            zip_code: zip_code.into(),
            country: Self::DEFAULT_COUNTRY.to_owned(),
        }
    }
}

/// One purchased product, copied by value at checkout.
///
/// Name and unit price are frozen here so later catalog changes never
/// rewrite history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Price,
    pub quantity: u32,
}

impl OrderLine {
    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.unit_price.times(self.quantity)
    }
}

/// An immutable record of a placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub lines: Vec<OrderLine>,
    pub total: Price,
    pub placed_at: DateTime<Utc>,
    pub status: OrderStatus,
    pub shipping_address: Address,
    pub payment_method: PaymentMethod,
}

impl Order {
    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }
}
