//! Cart aggregate: the shopper's pre-checkout lines.
//!
//! Lines are keyed by product identity. Adding a product that is already in
//! the cart bumps its quantity instead of creating a second line, and a line
//! whose quantity drops to zero is removed rather than stored.

use std::sync::Arc;

use saffron_core::{Price, ProductId};
use tracing::{debug, instrument, warn};

use crate::error::{Entity, Result, StoreError};
use crate::models::{CartLine, Product};
use crate::persistence::{self, SnapshotKey, SnapshotStore};

/// Cart aggregate.
pub struct Cart {
    lines: Vec<CartLine>,
    storage: Arc<dyn SnapshotStore>,
}

impl Cart {
    /// Load the cart, starting empty when no snapshot exists.
    ///
    /// Snapshot lines for the same product are merged and empty lines are
    /// dropped.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Persistence` if the adapter cannot be read.
    pub fn load(storage: Arc<dyn SnapshotStore>) -> Result<Self> {
        let (loaded, _): (Vec<CartLine>, _) =
            persistence::load_or_else(storage.as_ref(), SnapshotKey::Cart, Vec::new)?;

        let before = loaded.len();
        let mut lines: Vec<CartLine> = Vec::with_capacity(before);
        for line in loaded {
            if line.quantity == 0 {
                continue;
            }
            if let Some(existing) = lines.iter_mut().find(|l| l.product.id == line.product.id) {
                existing.quantity = existing.quantity.saturating_add(line.quantity);
            } else {
                lines.push(line);
            }
        }
        if lines.len() != before {
            warn!(
                dropped = before - lines.len(),
                "Merged duplicate or empty cart lines"
            );
        }

        Ok(Self { lines, storage })
    }

    /// Lines in the order they were first added.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The line for `product_id`, if any.
    #[must_use]
    pub fn line(&self, product_id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| &line.product.id == product_id)
    }

    /// Sum of quantities across all lines.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Sum of unit price times quantity across all lines.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Add one unit of `product`, merging with an existing line for the same id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Persistence` if the snapshot cannot be saved.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub fn add_item(&mut self, product: &Product) -> Result<()> {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity = line.quantity.saturating_add(1);
            debug!(quantity = line.quantity, "Cart line incremented");
        } else {
            self.lines.push(CartLine {
                product: product.clone(),
                quantity: 1,
            });
            debug!("Cart line added");
        }
        self.persist()
    }

    /// Set the quantity of a line. Zero or below removes the line.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the product is not in the cart, or
    /// `StoreError::QuantityOutOfRange` if `quantity` exceeds `u32::MAX`.
    #[instrument(skip(self))]
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: i64) -> Result<()> {
        if quantity <= 0 {
            return self.remove_item(product_id);
        }
        let quantity =
            u32::try_from(quantity).map_err(|_| StoreError::QuantityOutOfRange(quantity))?;
        let line = self
            .lines
            .iter_mut()
            .find(|l| &l.product.id == product_id)
            .ok_or_else(|| StoreError::not_found(Entity::CartLine, product_id))?;
        line.quantity = quantity;
        debug!(quantity = line.quantity, "Cart quantity set");
        self.persist()
    }

    /// Remove the line for `product_id`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the product is not in the cart.
    #[instrument(skip(self))]
    pub fn remove_item(&mut self, product_id: &ProductId) -> Result<()> {
        let index = self
            .lines
            .iter()
            .position(|l| &l.product.id == product_id)
            .ok_or_else(|| StoreError::not_found(Entity::CartLine, product_id))?;
        self.lines.remove(index);
        debug!("Cart line removed");
        self.persist()
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Persistence` if the snapshot cannot be saved.
    #[instrument(skip(self), fields(lines = self.lines.len()))]
    pub fn clear(&mut self) -> Result<()> {
        self.lines.clear();
        debug!("Cart cleared");
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        persistence::persist(self.storage.as_ref(), SnapshotKey::Cart, &self.lines)?;
        Ok(())
    }
}
