//! Application state owned by the presentation layer.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::broadcast;

use aura_scents_core::UserId;

use crate::cart::CartStore;
use crate::catalog::ProductCatalog;
use crate::checkout::{Checkout, CheckoutForm, CheckoutState};
use crate::config::StoreConfig;
use crate::error::{Result, StoreError};
use crate::events::{EventBus, StoreEvent};
use crate::models::{Order, UserProfile};
use crate::orders::OrderHistory;
use crate::seed;
use crate::wishlist::WishlistStore;

/// Everything the store knows for one local session.
///
/// Created once at startup. The catalog is shared read-only with the
/// stores; every other piece of state has exactly one owner here.
#[derive(Debug)]
pub struct AppState {
    config: StoreConfig,
    catalog: Arc<ProductCatalog>,
    profile: Option<UserProfile>,
    wishlist: WishlistStore,
    cart: CartStore,
    checkout: Option<Checkout>,
    orders: OrderHistory,
    events: EventBus,
}

impl AppState {
    /// Create the state, seeding sample data when the config asks for it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Profile`] if the sample profile is invalid.
    pub fn new(config: StoreConfig) -> Result<Self> {
        let events = EventBus::default();
        let catalog = Arc::new(ProductCatalog::sample());

        let mut wishlist = WishlistStore::new(Arc::clone(&catalog), events.clone());
        let cart = CartStore::new(
            Arc::clone(&catalog),
            config.max_cart_quantity,
            events.clone(),
        );

        let (profile, orders) = if config.seed_sample_data {
            for id in seed::SAMPLE_WISHLIST {
                wishlist.toggle(id);
            }
            let orders = seed::sample_orders(catalog.all(), Utc::now());
            (
                Some(seed::sample_user()?),
                OrderHistory::with_orders(orders, events.clone()),
            )
        } else {
            (None, OrderHistory::new(events.clone()))
        };

        tracing::info!(
            products = catalog.len(),
            wishlisted = wishlist.len(),
            orders = orders.len(),
            seeded = config.seed_sample_data,
            "store state ready"
        );

        Ok(Self {
            config,
            catalog,
            profile,
            wishlist,
            cart,
            checkout: None,
            orders,
            events,
        })
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// The product catalog.
    #[must_use]
    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    /// The local customer, if one is set up.
    #[must_use]
    pub const fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    /// The wishlist.
    #[must_use]
    pub const fn wishlist(&self) -> &WishlistStore {
        &self.wishlist
    }

    /// The wishlist, for mutation.
    pub const fn wishlist_mut(&mut self) -> &mut WishlistStore {
        &mut self.wishlist
    }

    /// The cart.
    #[must_use]
    pub const fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// The cart, for mutation.
    pub const fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }

    /// Placed orders.
    #[must_use]
    pub const fn orders(&self) -> &OrderHistory {
        &self.orders
    }

    /// Placed orders, for status updates.
    pub const fn orders_mut(&mut self) -> &mut OrderHistory {
        &mut self.orders
    }

    /// The checkout in progress, if any.
    #[must_use]
    pub const fn checkout(&self) -> Option<&Checkout> {
        self.checkout.as_ref()
    }

    /// Receive every store event published from now on.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    /// Start a fresh checkout, prefilled from the profile when there is one.
    ///
    /// Any earlier checkout is discarded.
    pub fn begin_checkout(&mut self) -> &mut Checkout {
        let form = self
            .profile
            .as_ref()
            .map_or_else(CheckoutForm::default, CheckoutForm::prefilled);
        self.checkout
            .insert(Checkout::new(form, self.config.placing_delay, self.events.clone()))
    }

    /// The checkout in progress, for editing.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::CheckoutState`] if no checkout was started.
    pub fn checkout_mut(&mut self) -> Result<&mut Checkout> {
        self.checkout.as_mut().ok_or(NOT_STARTED)
    }

    /// Validate the checkout in progress against the current cart.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::CheckoutState`] if no checkout was started or
    /// it cannot be submitted in its current state.
    pub fn submit_checkout(&mut self) -> Result<CheckoutState> {
        let checkout = self.checkout.as_mut().ok_or(NOT_STARTED)?;
        checkout.submit(&self.cart).cloned()
    }

    /// Place the validated checkout as an order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::CheckoutState`] unless the checkout in progress
    /// passed validation, and [`StoreError::EmptyCart`] if the cart was
    /// emptied after it did.
    pub async fn place_order(&mut self) -> Result<Order> {
        let user_id = self.user_id();
        let checkout = self.checkout.as_mut().ok_or(NOT_STARTED)?;
        checkout
            .place(user_id, &mut self.cart, &mut self.orders)
            .await
    }

    /// Submit `form` and, if it passes validation, place the order.
    ///
    /// Returns the rejected state instead of an order when validation fails.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::CheckoutState`] on an internal state mismatch.
    pub async fn checkout_with(
        &mut self,
        form: CheckoutForm,
    ) -> Result<std::result::Result<Order, CheckoutState>> {
        *self.begin_checkout().form_mut()? = form;
        match self.submit_checkout()? {
            CheckoutState::Placing => self.place_order().await.map(Ok),
            other => Ok(Err(other)),
        }
    }

    fn user_id(&self) -> UserId {
        self.profile
            .as_ref()
            .map_or_else(|| UserId::new(seed::SAMPLE_USER_ID), |p| p.id.clone())
    }
}

const NOT_STARTED: StoreError = StoreError::CheckoutState {
    state: "not started",
    action: "continue",
};
