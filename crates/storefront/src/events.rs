//! Change notifications for screens that mirror store state.
//!
//! Stores publish a [`StoreEvent`] after every committed mutation. Reads
//! never depend on delivery: a subscriber that lags or drops events can
//! always re-read the store, which reflects the latest write.

use serde::Serialize;
use tokio::sync::broadcast;

use aura_scents_core::{OrderId, OrderStatus, ProductId};

/// Buffered events per subscriber before the oldest are dropped.
const DEFAULT_CAPACITY: usize = 64;

/// A committed change to store state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StoreEvent {
    WishlistAdded { product_id: ProductId },
    WishlistRemoved { product_id: ProductId },
    CartLineChanged { product_id: ProductId, quantity: u32 },
    CartLineRemoved { product_id: ProductId },
    CartCleared,
    CheckoutRejected { reason: String },
    OrderPlaced { order_id: OrderId },
    OrderStatusChanged { order_id: OrderId, status: OrderStatus },
}

/// Fan-out channel shared by all stores of one app instance.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<StoreEvent>,
}

impl EventBus {
    /// Create a bus that buffers `capacity` events per subscriber.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Publish an event to current subscribers.
    ///
    /// Having no subscribers is normal and not an error.
    pub fn publish(&self, event: StoreEvent) {
        tracing::trace!(?event, "store event");
        let _ = self.sender.send(event);
    }

    /// Receive every event published from now on.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.sender.subscribe()
    }

    /// Number of live subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}
