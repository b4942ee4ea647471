//! Checkout flow.
//!
//! ```text
//! Editing --submit--> Validating --ok--> Placing --delay--> Placed
//!    ^                     |
//!    +--edit-- Rejected <--+
//! ```
//!
//! Validation checks the required fields first, then the payment method,
//! then that the cart has something in it. `Placing` stands in for a network
//! call and always succeeds.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use aura_scents_core::{OrderId, PaymentMethod, UserId};

use crate::cart::CartStore;
use crate::error::{Result, StoreError};
use crate::events::{EventBus, StoreEvent};
use crate::models::{Address, Order, UserProfile};
use crate::orders::OrderHistory;

/// Shipping and contact details entered at checkout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub zip_code: String,
    pub payment_method: Option<PaymentMethod>,
}

impl CheckoutForm {
    /// A form filled from the profile. The payment method is left unselected.
    #[must_use]
    pub fn prefilled(profile: &UserProfile) -> Self {
        let address = profile.address.as_ref();
        Self {
            full_name: profile.name.clone(),
            email: profile.email.to_string(),
            phone: profile.phone.clone().unwrap_or_default(),
            address: address.map(|a| a.street.clone()).unwrap_or_default(),
            city: address.map(|a| a.city.clone()).unwrap_or_default(),
            zip_code: address.map(|a| a.zip_code.clone()).unwrap_or_default(),
            payment_method: None,
        }
    }

    /// Whether any required text field is empty or whitespace.
    #[must_use]
    pub fn has_blank_field(&self) -> bool {
        [
            &self.full_name,
            &self.email,
            &self.phone,
            &self.address,
            &self.city,
            &self.zip_code,
        ]
        .iter()
        .any(|field| field.trim().is_empty())
    }

    /// The shipping address described by the form.
    #[must_use]
    pub fn shipping_address(&self) -> Address {
        Address::new(
            self.address.trim(),
            self.city.trim(),
            self.zip_code.trim(),
        )
    }
}

/// Why a submission was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    MissingFields,
    MissingPaymentMethod,
    EmptyCart,
}

impl RejectReason {
    /// Short reason code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MissingFields => "missing fields",
            Self::MissingPaymentMethod => "missing payment method",
            Self::EmptyCart => "empty cart",
        }
    }

    /// Message shown under the form.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::MissingFields => "Please fill in all required fields",
            Self::MissingPaymentMethod => "Please select a payment method",
            Self::EmptyCart => "Your cart is empty",
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the flow currently is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CheckoutState {
    Editing,
    Validating,
    Rejected { reason: RejectReason },
    Placing,
    Placed { order_id: OrderId },
}

impl CheckoutState {
    /// Lower-case state name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Editing => "editing",
            Self::Validating => "validating",
            Self::Rejected { .. } => "rejected",
            Self::Placing => "placing",
            Self::Placed { .. } => "placed",
        }
    }
}

/// One checkout attempt for the local session.
#[derive(Debug)]
pub struct Checkout {
    form: CheckoutForm,
    state: CheckoutState,
    placing_delay: Duration,
    events: EventBus,
}

impl Checkout {
    /// Start a checkout with `form` in the `Editing` state.
    #[must_use]
    pub const fn new(form: CheckoutForm, placing_delay: Duration, events: EventBus) -> Self {
        Self {
            form,
            state: CheckoutState::Editing,
            placing_delay,
            events,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &CheckoutState {
        &self.state
    }

    /// Current form contents.
    #[must_use]
    pub const fn form(&self) -> &CheckoutForm {
        &self.form
    }

    /// Edit the form. Editing after a rejection returns to `Editing`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::CheckoutState`] once the order is placing or placed.
    pub fn form_mut(&mut self) -> Result<&mut CheckoutForm> {
        match self.state {
            CheckoutState::Editing => {}
            CheckoutState::Rejected { .. } => self.state = CheckoutState::Editing,
            _ => return Err(self.wrong_state("edit the form")),
        }
        Ok(&mut self.form)
    }

    /// Validate the form against `cart`, ending in `Rejected` or `Placing`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::CheckoutState`] unless the flow is `Editing` or
    /// `Rejected`.
    pub fn submit(&mut self, cart: &CartStore) -> Result<&CheckoutState> {
        if !matches!(
            self.state,
            CheckoutState::Editing | CheckoutState::Rejected { .. }
        ) {
            return Err(self.wrong_state("submit"));
        }

        self.state = CheckoutState::Validating;
        match self.validate(cart) {
            Some(reason) => self.reject(reason),
            None => {
                tracing::debug!(items = cart.item_count(), "checkout validated");
                self.state = CheckoutState::Placing;
            }
        }
        Ok(&self.state)
    }

    fn reject(&mut self, reason: RejectReason) {
        tracing::info!(%reason, "checkout rejected");
        self.events.publish(StoreEvent::CheckoutRejected {
            reason: reason.to_string(),
        });
        self.state = CheckoutState::Rejected { reason };
    }

    fn validate(&self, cart: &CartStore) -> Option<RejectReason> {
        if self.form.has_blank_field() {
            Some(RejectReason::MissingFields)
        } else if self.form.payment_method.is_none() {
            Some(RejectReason::MissingPaymentMethod)
        } else if cart.is_empty() {
            Some(RejectReason::EmptyCart)
        } else {
            None
        }
    }

    /// Finish a validated checkout: wait out the simulated placement, record
    /// the order and empty the cart.
    ///
    /// The cart is checked again once the delay is over. If it has been
    /// emptied since `submit`, the checkout ends `Rejected` with
    /// [`RejectReason::EmptyCart`] and no order is recorded.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::CheckoutState`] unless the flow is `Placing`, and
    /// [`StoreError::EmptyCart`] if the cart is empty when placement runs.
    #[instrument(skip_all, fields(delay_ms = self.placing_delay.as_millis()))]
    pub async fn place(
        &mut self,
        user_id: UserId,
        cart: &mut CartStore,
        orders: &mut OrderHistory,
    ) -> Result<Order> {
        if self.state != CheckoutState::Placing {
            return Err(self.wrong_state("place the order"));
        }
        let Some(payment_method) = self.form.payment_method else {
            return Err(self.wrong_state("place the order"));
        };

        tokio::time::sleep(self.placing_delay).await;

        if cart.is_empty() {
            self.reject(RejectReason::EmptyCart);
            return Err(StoreError::EmptyCart);
        }

        let order = orders.place(
            user_id,
            cart.snapshot_lines(),
            self.form.shipping_address(),
            payment_method,
        );
        cart.clear();
        self.state = CheckoutState::Placed {
            order_id: order.id.clone(),
        };
        Ok(order)
    }

    fn wrong_state(&self, action: &'static str) -> StoreError {
        StoreError::CheckoutState {
            state: self.state.name(),
            action,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::str::FromStr;
    use std::sync::Arc;

    use rust_decimal::Decimal;

    use super::*;
    use crate::catalog::ProductCatalog;
    use crate::seed;

    fn filled_form() -> CheckoutForm {
        CheckoutForm {
            full_name: "Nimali Perera".to_owned(),
            email: "nimali@example.lk".to_owned(),
            phone: "+94 71 555 0101".to_owned(),
            address: "45 Flower Road".to_owned(),
            city: "Kandy".to_owned(),
            zip_code: "20000".to_owned(),
            payment_method: Some(PaymentMethod::CreditCard),
        }
    }

    fn cart_with(ids: &[(&str, u32)]) -> CartStore {
        let catalog = Arc::new(ProductCatalog::sample());
        let mut cart = CartStore::new(catalog, 99, EventBus::default());
        for (id, qty) in ids {
            cart.add_or_increment(id, *qty);
        }
        cart
    }

    fn checkout(form: CheckoutForm) -> Checkout {
        Checkout::new(form, Duration::ZERO, EventBus::default())
    }

    #[test]
    fn test_missing_payment_method() {
        let cart = cart_with(&[("1", 1)]);
        let mut flow = checkout(CheckoutForm {
            payment_method: None,
            ..filled_form()
        });
        assert_eq!(
            flow.submit(&cart).unwrap(),
            &CheckoutState::Rejected {
                reason: RejectReason::MissingPaymentMethod
            }
        );
    }

    #[test]
    fn test_blank_field_wins_over_payment_method() {
        let cart = cart_with(&[("1", 1)]);
        for payment_method in [None, Some(PaymentMethod::PayPal)] {
            let mut flow = checkout(CheckoutForm {
                city: "   ".to_owned(),
                payment_method,
                ..filled_form()
            });
            assert_eq!(
                flow.submit(&cart).unwrap(),
                &CheckoutState::Rejected {
                    reason: RejectReason::MissingFields
                }
            );
        }
    }

    #[test]
    fn test_empty_cart_rejected_after_form_checks() {
        let cart = cart_with(&[]);
        let mut flow = checkout(filled_form());
        let state = flow.submit(&cart).unwrap();
        assert_eq!(
            state,
            &CheckoutState::Rejected {
                reason: RejectReason::EmptyCart
            }
        );
    }

    #[test]
    fn test_edit_after_rejection_returns_to_editing() {
        let cart = cart_with(&[("2", 1)]);
        let mut flow = checkout(CheckoutForm {
            payment_method: None,
            ..filled_form()
        });
        flow.submit(&cart).unwrap();

        flow.form_mut().unwrap().payment_method = Some(PaymentMethod::BankTransfer);
        assert_eq!(flow.state(), &CheckoutState::Editing);
        assert_eq!(flow.submit(&cart).unwrap(), &CheckoutState::Placing);
        assert!(flow.form_mut().is_err());
    }

    #[test]
    fn test_reject_reason_strings() {
        assert_eq!(RejectReason::MissingFields.to_string(), "missing fields");
        assert_eq!(
            RejectReason::MissingPaymentMethod.to_string(),
            "missing payment method"
        );
        assert_eq!(
            RejectReason::MissingFields.message(),
            "Please fill in all required fields"
        );
    }

    #[test]
    fn test_prefilled_from_profile() {
        let form = CheckoutForm::prefilled(&seed::sample_user().unwrap());
        assert_eq!(form.full_name, "Tharindu Karunarathna");
        assert_eq!(form.city, "Colombo");
        assert_eq!(form.zip_code, "00100");
        assert!(!form.has_blank_field());
        assert!(form.payment_method.is_none());
    }

    #[tokio::test]
    async fn test_place_records_order_and_clears_cart() {
        let mut cart = cart_with(&[("2", 3)]);
        let mut orders = OrderHistory::new(EventBus::default());
        let mut flow = checkout(filled_form());

        flow.submit(&cart).unwrap();
        let order = flow
            .place(UserId::new("user1"), &mut cart, &mut orders)
            .await
            .unwrap();

        assert_eq!(order.total.amount, Decimal::from_str("64500.00").unwrap());
        assert_eq!(order.shipping_address.city, "Kandy");
        assert_eq!(order.payment_method, PaymentMethod::CreditCard);
        assert!(cart.is_empty());
        assert_eq!(orders.len(), 1);
        assert_eq!(
            flow.state(),
            &CheckoutState::Placed {
                order_id: order.id.clone()
            }
        );
    }

    #[tokio::test]
    async fn test_place_requires_validation() {
        let mut cart = cart_with(&[("2", 1)]);
        let mut orders = OrderHistory::new(EventBus::default());
        let mut flow = checkout(filled_form());

        let err = flow
            .place(UserId::new("user1"), &mut cart, &mut orders)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Checkout is editing, cannot place the order");
        assert!(orders.is_empty());
        assert_eq!(cart.item_count(), 1);
    }

    #[tokio::test]
    async fn test_cart_emptied_before_placement_is_rejected() {
        let mut cart = cart_with(&[("2", 1)]);
        let mut orders = OrderHistory::new(EventBus::default());
        let events = EventBus::default();
        let mut rx = events.subscribe();
        let mut flow = Checkout::new(filled_form(), Duration::ZERO, events);

        assert_eq!(flow.submit(&cart).unwrap(), &CheckoutState::Placing);
        cart.clear();

        let err = flow
            .place(UserId::new("user1"), &mut cart, &mut orders)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::EmptyCart));
        assert!(orders.is_empty());
        assert_eq!(
            flow.state(),
            &CheckoutState::Rejected {
                reason: RejectReason::EmptyCart
            }
        );
        assert_eq!(
            rx.try_recv().unwrap(),
            StoreEvent::CheckoutRejected {
                reason: "empty cart".to_owned()
            }
        );

        // Refilling the cart lets the same checkout go through.
        cart.add_or_increment("2", 1);
        assert_eq!(flow.submit(&cart).unwrap(), &CheckoutState::Placing);
        flow.place(UserId::new("user1"), &mut cart, &mut orders)
            .await
            .unwrap();
        assert_eq!(orders.len(), 1);
    }

    #[tokio::test]
    async fn test_placed_is_terminal() {
        let mut cart = cart_with(&[("4", 1)]);
        let mut orders = OrderHistory::new(EventBus::default());
        let mut flow = checkout(filled_form());
        flow.submit(&cart).unwrap();
        flow.place(UserId::new("user1"), &mut cart, &mut orders)
            .await
            .unwrap();

        assert!(flow.submit(&cart).is_err());
        assert!(
            flow.place(UserId::new("user1"), &mut cart, &mut orders)
                .await
                .is_err()
        );
        assert_eq!(orders.len(), 1);
    }
}
