//! Aura Scents Storefront library.
//!
//! In-memory state core of the store: the fixed product catalog, the
//! wishlist and cart stores, the checkout flow and the order history.
//! Everything lives in one [`state::AppState`] created at startup and
//! handed to whatever presentation layer drives it.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod events;
pub mod models;
pub mod orders;
pub mod seed;
pub mod state;
pub mod views;
pub mod wishlist;
