//! Domain models for the storefront.
//!
//! These types are plain data. Behaviour that mutates them lives in the
//! stores ([`crate::wishlist`], [`crate::cart`], [`crate::orders`]).

pub mod order;
pub mod product;
pub mod user;

pub use order::{Address, Order, OrderLine};
pub use product::Product;
pub use user::UserProfile;
