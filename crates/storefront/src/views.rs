//! Display projections of store state.
//!
//! Views are plain serializable structs with every amount already formatted,
//! so a presentation layer can print or template them without touching
//! `Decimal`.

use rust_decimal::Decimal;
use serde::Serialize;

use aura_scents_core::format_lkr;

use crate::cart::CartStore;
use crate::models::{Order, OrderLine, Product};
use crate::wishlist::WishlistStore;

/// Product display data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductView {
    pub id: String,
    pub name: String,
    pub category: String,
    pub notes: String,
    pub size: String,
    pub price: String,
    pub original_price: Option<String>,
    pub discount_percent: Option<u32>,
    pub rating: f32,
    pub review_count: u32,
    pub is_available: bool,
    pub is_wishlisted: bool,
}

impl ProductView {
    /// Project a product, marking it if it is on the wishlist.
    #[must_use]
    pub fn new(product: &Product, wishlist: &WishlistStore) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            category: product.category.label().to_owned(),
            notes: product.notes.clone(),
            size: product.size.clone(),
            price: product.price.display(),
            original_price: product.original_price.map(|p| p.display()),
            discount_percent: product.discount_percent(),
            rating: product.rating,
            review_count: product.review_count,
            is_available: product.is_available,
            is_wishlisted: wishlist.is_wishlisted(product.id.as_str()),
        }
    }
}

/// Cart item display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartItemView {
    pub product_id: String,
    pub name: String,
    pub size: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
}

/// Cart display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub item_count: u32,
    pub subtotal: String,
    pub shipping: String,
    pub total: String,
}

impl CartView {
    /// Create an empty cart view.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            item_count: 0,
            subtotal: format_lkr(Decimal::ZERO),
            shipping: FREE_SHIPPING.to_owned(),
            total: format_lkr(Decimal::ZERO),
        }
    }
}

impl From<&CartStore> for CartView {
    fn from(cart: &CartStore) -> Self {
        let items = cart
            .lines_with_products()
            .map(|(line, product)| CartItemView {
                product_id: product.id.to_string(),
                name: product.name.clone(),
                size: product.size.clone(),
                quantity: line.quantity,
                price: product.price.display(),
                line_price: product.price.times(line.quantity).display(),
            })
            .collect();

        let subtotal = cart.total();
        Self {
            items,
            item_count: cart.item_count(),
            subtotal: format_lkr(subtotal),
            shipping: FREE_SHIPPING.to_owned(),
            total: format_lkr(subtotal + SHIPPING_COST),
        }
    }
}

/// Shipping is free on every order.
const SHIPPING_COST: Decimal = Decimal::ZERO;
const FREE_SHIPPING: &str = "Free";

/// Wishlist display data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WishlistView {
    pub items: Vec<ProductView>,
    pub count: usize,
}

impl From<&WishlistStore> for WishlistView {
    fn from(wishlist: &WishlistStore) -> Self {
        let items: Vec<ProductView> = wishlist
            .products()
            .map(|product| ProductView::new(product, wishlist))
            .collect();
        Self {
            count: items.len(),
            items,
        }
    }
}

/// Order line display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderLineView {
    pub name: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
}

impl From<&OrderLine> for OrderLineView {
    fn from(line: &OrderLine) -> Self {
        Self {
            name: line.name.clone(),
            quantity: line.quantity,
            price: line.unit_price.display(),
            line_price: line.line_total().display(),
        }
    }
}

/// Order display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderView {
    pub id: String,
    pub placed_on: String,
    pub status: String,
    pub item_count: u32,
    pub items: Vec<OrderLineView>,
    pub total: String,
    pub shipping_address: String,
    pub payment_method: String,
}

impl From<&Order> for OrderView {
    fn from(order: &Order) -> Self {
        let address = &order.shipping_address;
        Self {
            id: order.id.to_string(),
            placed_on: order.placed_at.format("%b %-d, %Y").to_string(),
            status: order.status.label().to_owned(),
            item_count: order.item_count(),
            items: order.lines.iter().map(OrderLineView::from).collect(),
            total: order.total.display(),
            shipping_address: format!(
                "{}, {} {}, {}",
                address.street, address.city, address.zip_code, address.country
            ),
            payment_method: order.payment_method.label().to_owned(),
        }
    }
}
