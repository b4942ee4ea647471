//! Unified error handling for the store.
//!
//! Expected outcomes such as an unknown product ID or a rejected checkout
//! are not errors; they come back as ordinary values. `StoreError` covers
//! misuse of the API and startup failures.

use thiserror::Error;

use aura_scents_core::{EmailError, OrderId, StatusTransitionError};

use crate::config::ConfigError;

/// Application-level error type for the store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// The seeded user profile is invalid.
    #[error("Profile error: {0}")]
    Profile(#[from] EmailError),

    /// No order has this ID.
    #[error("Order not found: {0}")]
    OrderNotFound(OrderId),

    /// An order status change broke the status state machine.
    #[error("Invalid status change: {0}")]
    StatusTransition(#[from] StatusTransitionError),

    /// A checkout operation was called in the wrong state.
    #[error("Checkout is {state}, cannot {action}")]
    CheckoutState {
        /// Current checkout state.
        state: &'static str,
        /// What the caller attempted.
        action: &'static str,
    },

    /// The cart was emptied between validation and placement.
    #[error("Cart is empty, nothing to place")]
    EmptyCart,
}

/// Result type alias for `StoreError`.
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use aura_scents_core::OrderStatus;

    use super::*;

    #[test]
    fn test_store_error_display() {
        let err = StoreError::OrderNotFound(OrderId::new("ORD999"));
        assert_eq!(err.to_string(), "Order not found: ORD999");

        let err = StoreError::CheckoutState {
            state: "placed",
            action: "submit",
        };
        assert_eq!(err.to_string(), "Checkout is placed, cannot submit");

        assert_eq!(
            StoreError::EmptyCart.to_string(),
            "Cart is empty, nothing to place"
        );
    }

    #[test]
    fn test_from_status_transition() {
        let err: StoreError = StatusTransitionError {
            from: OrderStatus::Delivered,
            to: OrderStatus::Pending,
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Invalid status change: order cannot move from Delivered to Pending"
        );
    }
}
