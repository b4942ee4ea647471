//! Order history.
//!
//! Append-only: an order's lines, total and address never change after it
//! is placed. Only its status moves, and only along the status state
//! machine.

use chrono::Utc;

use aura_scents_core::{OrderId, OrderStatus, PaymentMethod, Price, UserId};

use crate::error::{Result, StoreError};
use crate::events::{EventBus, StoreEvent};
use crate::models::{Address, Order, OrderLine};

/// Placed orders of the local user, in the order they were recorded.
#[derive(Debug)]
pub struct OrderHistory {
    orders: Vec<Order>,
    next_sequence: u32,
    events: EventBus,
}

impl OrderHistory {
    /// Create an empty history.
    #[must_use]
    pub const fn new(events: EventBus) -> Self {
        Self {
            orders: Vec::new(),
            next_sequence: 1,
            events,
        }
    }

    /// Create a history from existing orders.
    ///
    /// New order numbers continue after the highest existing `ORDnnn`.
    #[must_use]
    pub fn with_orders(orders: Vec<Order>, events: EventBus) -> Self {
        let next_sequence = orders
            .iter()
            .filter_map(|order| order.id.sequence())
            .max()
            .map_or(1, |max| max.saturating_add(1));
        Self {
            orders,
            next_sequence,
            events,
        }
    }

    /// Record a new pending order and return a copy of it.
    pub fn place(
        &mut self,
        user_id: UserId,
        lines: Vec<OrderLine>,
        shipping_address: Address,
        payment_method: PaymentMethod,
    ) -> Order {
        let id = OrderId::from_sequence(self.next_sequence);
        self.next_sequence = self.next_sequence.saturating_add(1);

        let total: Price = lines.iter().map(OrderLine::line_total).sum();
        tracing::info!(order_id = %id, total = %total.amount, lines = lines.len(), "order placed");

        let order = Order {
            id: id.clone(),
            user_id,
            lines,
            total,
            placed_at: Utc::now(),
            status: OrderStatus::Pending,
            shipping_address,
            payment_method,
        };
        self.orders.push(order.clone());
        self.events.publish(StoreEvent::OrderPlaced { order_id: id });
        order
    }

    /// Move an order to a new status.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::OrderNotFound`] for an unknown ID and
    /// [`StoreError::StatusTransition`] for an illegal change.
    pub fn update_status(&mut self, id: &str, next: OrderStatus) -> Result<OrderStatus> {
        let order = self
            .orders
            .iter_mut()
            .find(|order| order.id.as_str() == id)
            .ok_or_else(|| StoreError::OrderNotFound(OrderId::new(id)))?;

        order.status = order.status.transition(next)?;
        let status = order.status;
        tracing::info!(order_id = id, %status, "order status changed");
        self.events.publish(StoreEvent::OrderStatusChanged {
            order_id: order.id.clone(),
            status,
        });
        Ok(status)
    }

    /// Look up an order by ID.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|order| order.id.as_str() == id)
    }

    /// Orders in the order they were recorded.
    #[must_use]
    pub fn all(&self) -> &[Order] {
        &self.orders
    }

    /// Orders newest first.
    #[must_use]
    pub fn recent(&self) -> Vec<&Order> {
        let mut recent: Vec<&Order> = self.orders.iter().collect();
        recent.sort_by(|a, b| b.placed_at.cmp(&a.placed_at));
        recent
    }

    /// Number of orders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Whether no orders exist.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::str::FromStr;

    use rust_decimal::Decimal;

    use super::*;
    use crate::seed;

    fn line(id: &str, name: &str, price: &str, quantity: u32) -> OrderLine {
        OrderLine {
            product_id: id.into(),
            name: name.to_owned(),
            unit_price: Price::lkr(Decimal::from_str(price).unwrap()),
            quantity,
        }
    }

    fn address() -> Address {
        Address::new("1 Galle Road", "Colombo", "00300")
    }

    #[test]
    fn test_place_assigns_sequential_ids() {
        let mut history = OrderHistory::new(EventBus::default());
        let first = history.place(
            UserId::new("u"),
            vec![line("2", "Dior Sauvage", "21500.00", 3)],
            address(),
            PaymentMethod::CreditCard,
        );
        assert_eq!(first.id.as_str(), "ORD001");
        assert_eq!(first.status, OrderStatus::Pending);
        assert_eq!(first.total.amount, Decimal::from_str("64500.00").unwrap());

        let second = history.place(
            UserId::new("u"),
            vec![line("9", "Calvin Klein Eternity", "17500.00", 1)],
            address(),
            PaymentMethod::PayPal,
        );
        assert_eq!(second.id.as_str(), "ORD002");
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_with_orders_continues_sequence() {
        let orders = seed::sample_orders(&seed::sample_products(), Utc::now());
        let mut history = OrderHistory::with_orders(orders, EventBus::default());
        let placed = history.place(
            UserId::new(seed::SAMPLE_USER_ID),
            vec![line("1", "Chanel No. 5", "24500.00", 1)],
            address(),
            PaymentMethod::BankTransfer,
        );
        assert_eq!(placed.id.as_str(), "ORD004");
    }

    #[test]
    fn test_recent_is_newest_first() {
        let orders = seed::sample_orders(&seed::sample_products(), Utc::now());
        let history = OrderHistory::with_orders(orders, EventBus::default());
        let ids: Vec<&str> = history.recent().iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, ["ORD001", "ORD002", "ORD003"]);
    }

    #[test]
    fn test_update_status_follows_state_machine() {
        let mut history = OrderHistory::new(EventBus::default());
        history.place(
            UserId::new("u"),
            vec![line("3", "Bleu de Chanel", "23500.00", 1)],
            address(),
            PaymentMethod::DebitCard,
        );

        assert_eq!(
            history.update_status("ORD001", OrderStatus::Confirmed).unwrap(),
            OrderStatus::Confirmed
        );
        assert!(matches!(
            history.update_status("ORD001", OrderStatus::Pending),
            Err(StoreError::StatusTransition(_))
        ));
        assert_eq!(
            history.update_status("ORD001", OrderStatus::Cancelled).unwrap(),
            OrderStatus::Cancelled
        );
        assert!(matches!(
            history.update_status("ORD404", OrderStatus::Confirmed),
            Err(StoreError::OrderNotFound(_))
        ));
    }

    #[test]
    fn test_events_follow_status_changes() {
        let bus = EventBus::default();
        let mut rx = bus.subscribe();
        let mut history = OrderHistory::new(bus);
        let placed = history.place(
            UserId::new("u"),
            vec![line("7", "Creed Aventus", "45000.00", 1)],
            address(),
            PaymentMethod::PayPal,
        );
        assert_eq!(
            rx.try_recv().unwrap(),
            StoreEvent::OrderPlaced {
                order_id: placed.id.clone()
            }
        );

        history.update_status("ORD001", OrderStatus::Confirmed).unwrap();
        assert_eq!(
            rx.try_recv().unwrap(),
            StoreEvent::OrderStatusChanged {
                order_id: placed.id,
                status: OrderStatus::Confirmed
            }
        );

        // Refused changes publish nothing
        assert!(history.update_status("ORD001", OrderStatus::Delivered).is_err());
        assert!(history.update_status("ORD404", OrderStatus::Shipped).is_err());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_find() {
        let orders = seed::sample_orders(&seed::sample_products(), Utc::now());
        let history = OrderHistory::with_orders(orders, EventBus::default());
        assert_eq!(history.find("ORD002").unwrap().lines.len(), 2);
        assert!(history.find("ORD009").is_none());
    }
}
