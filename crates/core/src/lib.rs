//! Aura Scents Core - Shared types library.
//!
//! This crate provides common types used across all Aura Scents components:
//! - `storefront` - In-memory catalog, wishlist, cart, checkout and order history
//! - `cli` - Command-line driver for browsing and placing orders
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no clocks,
//! no async runtime. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
