//! Order ledger: immutable snapshots of completed checkouts.
//!
//! Orders are only ever created and re-statused, never deleted. Each order
//! owns a copy of the cart lines it was placed with, so clearing the cart or
//! editing the catalog afterwards cannot alter order history.

use std::sync::Arc;

use chrono::Utc;
use saffron_core::{OrderId, OrderStatus, Price};
use tracing::{info, instrument, warn};

use crate::error::{Entity, Result, StoreError};
use crate::models::{CartLine, Order, ShippingAddress};
use crate::persistence::{self, SnapshotKey, SnapshotStore};

/// Headline numbers for the back-office dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderStats {
    /// Sum of order totals.
    pub total_revenue: Price,
    pub total_orders: usize,
    /// Orders still `Processing`.
    pub pending_orders: usize,
}

/// Order ledger, most recent order first.
pub struct OrderLedger {
    orders: Vec<Order>,
    storage: Arc<dyn SnapshotStore>,
}

impl OrderLedger {
    /// Load the ledger, starting empty when no snapshot exists.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Persistence` if the adapter cannot be read.
    pub fn load(storage: Arc<dyn SnapshotStore>) -> Result<Self> {
        let (orders, _): (Vec<Order>, _) =
            persistence::load_or_else(storage.as_ref(), SnapshotKey::Orders, Vec::new)?;
        Ok(Self { orders, storage })
    }

    /// Orders, most recent first.
    #[must_use]
    pub fn list(&self) -> &[Order] {
        &self.orders
    }

    /// Look up an order.
    #[must_use]
    pub fn get(&self, id: &OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| &o.id == id)
    }

    /// Record a new order with status `Processing`.
    ///
    /// `lines` is copied; the caller's lines are not retained.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Persistence` if the snapshot cannot be saved.
    #[instrument(skip(self, lines, shipping), fields(lines = lines.len(), total = %total))]
    pub fn place_order(
        &mut self,
        lines: &[CartLine],
        shipping: ShippingAddress,
        total: Price,
    ) -> Result<Order> {
        let order = Order {
            id: self.fresh_id(),
            items: lines.to_vec(),
            total,
            date: Utc::now(),
            shipping,
            status: OrderStatus::Processing,
        };
        self.orders.insert(0, order.clone());
        self.persist()?;
        info!(order_id = %order.id, "Order placed");
        Ok(order)
    }

    /// Overwrite the status of an order.
    ///
    /// Any status may follow any other; moving backwards is allowed but logged.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no order has this id.
    #[instrument(skip(self))]
    pub fn update_status(&mut self, id: &OrderId, status: OrderStatus) -> Result<()> {
        let order = self
            .orders
            .iter_mut()
            .find(|o| &o.id == id)
            .ok_or_else(|| StoreError::not_found(Entity::Order, id))?;
        let previous = order.status;
        if previous.is_regression_to(status) {
            warn!(from = %previous, to = %status, "Order status moved backwards");
        }
        order.status = status;
        self.persist()?;
        info!(from = %previous, to = %status, "Order status updated");
        Ok(())
    }

    /// Case-insensitive substring search over order id and customer name.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Order> {
        let needle = query.trim().to_lowercase();
        self.orders.iter().filter(|o| o.matches(&needle)).collect()
    }

    /// Revenue and counts across the whole ledger.
    #[must_use]
    pub fn stats(&self) -> OrderStats {
        OrderStats {
            total_revenue: self.orders.iter().map(|o| o.total).sum(),
            total_orders: self.orders.len(),
            pending_orders: self
                .orders
                .iter()
                .filter(|o| o.status == OrderStatus::Processing)
                .count(),
        }
    }

    fn fresh_id(&self) -> OrderId {
        loop {
            let id = OrderId::generate_reference();
            if self.get(&id).is_none() {
                return id;
            }
            warn!(order_id = %id, "Order reference collision, regenerating");
        }
    }

    fn persist(&self) -> Result<()> {
        persistence::persist(self.storage.as_ref(), SnapshotKey::Orders, &self.orders)?;
        Ok(())
    }
}
