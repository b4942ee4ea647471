//! Scripted checkout command.
//!
//! Fills the cart from `--add` items, prefills the form from the profile,
//! applies any overrides given on the command line, then submits and places
//! the order.
//!
//! # Usage
//!
//! ```bash
//! aura-cli checkout --add 2:3 --add 9 --payment credit-card
//! ```

use std::io::Write;

use serde::Serialize;

use aura_scents_core::PaymentMethod;
use aura_scents_storefront::checkout::{CheckoutForm, CheckoutState, RejectReason};
use aura_scents_storefront::error::StoreError;
use aura_scents_storefront::state::AppState;
use aura_scents_storefront::views::{CartView, OrderView};

use super::orders::write_order;
use super::{CliError, Output};

/// Form fields supplied on the command line.
#[derive(Debug, Default)]
pub struct FormOverrides {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub zip_code: Option<String>,
    pub payment_method: Option<PaymentMethod>,
}

impl FormOverrides {
    fn apply(self, form: &mut CheckoutForm) {
        let fields = [
            (self.full_name, &mut form.full_name),
            (self.email, &mut form.email),
            (self.phone, &mut form.phone),
            (self.address, &mut form.address),
            (self.city, &mut form.city),
            (self.zip_code, &mut form.zip_code),
        ];
        for (value, field) in fields {
            if let Some(value) = value {
                *field = value;
            }
        }
        if self.payment_method.is_some() {
            form.payment_method = self.payment_method;
        }
    }
}

/// How the checkout ended.
#[derive(Debug, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
enum Outcome {
    Placed {
        order: OrderView,
    },
    Rejected {
        reason: RejectReason,
        message: &'static str,
        cart: CartView,
    },
}

/// Parse `ID` or `ID:QUANTITY`.
fn parse_item(item: &str) -> Result<(&str, i64), CliError> {
    let invalid = || CliError::InvalidItem(item.to_owned());
    let (id, quantity) = match item.split_once(':') {
        Some((id, quantity)) => (
            id.trim(),
            quantity.trim().parse::<i64>().map_err(|_| invalid())?,
        ),
        None => (item.trim(), 1),
    };
    if id.is_empty() {
        return Err(invalid());
    }
    Ok((id, quantity))
}

/// Apply `--add` items to the cart, checking each ID against the catalog
/// before any quantity change.
fn fill_cart(state: &mut AppState, items: &[String]) -> Result<(), CliError> {
    for item in items {
        let (id, quantity) = parse_item(item)?;
        if !state.catalog().contains(id) {
            return Err(CliError::ProductNotFound(id.to_owned()));
        }
        let cart = state.cart_mut();
        let target = i64::from(cart.quantity_of(id)).saturating_add(quantity);
        cart.set_quantity(id, target);
    }
    Ok(())
}

/// Fill the cart, submit the checkout and place the order.
///
/// A rejected checkout is reported as a normal result, not an error.
///
/// # Errors
///
/// Returns [`CliError::InvalidItem`] or [`CliError::ProductNotFound`] for bad
/// `--add` items, and [`CliError::Store`] if the checkout is misused.
pub async fn run(
    state: &mut AppState,
    items: &[String],
    overrides: FormOverrides,
    out: Output,
) -> Result<(), CliError> {
    fill_cart(state, items)?;

    let mut form = state.begin_checkout().form().clone();
    overrides.apply(&mut form);

    tracing::info!(
        items = state.cart().item_count(),
        total = %state.cart().total(),
        "placing order"
    );

    let outcome = match state.checkout_with(form).await? {
        Ok(order) => Outcome::Placed {
            order: OrderView::from(&order),
        },
        Err(CheckoutState::Rejected { reason }) => Outcome::Rejected {
            reason,
            message: reason.message(),
            cart: CartView::from(state.cart()),
        },
        Err(other) => {
            return Err(CliError::Store(StoreError::CheckoutState {
                state: other.name(),
                action: "place the order",
            }));
        }
    };

    out.emit(&outcome, |w| match &outcome {
        Outcome::Placed { order } => {
            writeln!(w, "Order placed!")?;
            write_order(w, order)
        }
        Outcome::Rejected { message, cart, .. } => {
            writeln!(w, "Checkout rejected: {message}")?;
            writeln!(w, "Cart: {} items, {}", cart.item_count, cart.total)
        }
    })
}
