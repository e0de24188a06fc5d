//! Wishlist set: products saved for later.

use std::collections::HashSet;
use std::sync::Arc;

use saffron_core::ProductId;
use tracing::{debug, instrument, warn};

use crate::error::{Entity, Result, StoreError};
use crate::models::Product;
use crate::persistence::{self, LoadSource, SnapshotKey, SnapshotStore};

/// Wishlist set. A product id appears at most once; display follows insertion order.
pub struct Wishlist {
    items: Vec<Product>,
    storage: Arc<dyn SnapshotStore>,
}

impl Wishlist {
    /// Load the wishlist, starting empty when no snapshot exists.
    ///
    /// An unreadable snapshot is reported as a warning and replaced by an
    /// empty wishlist.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Persistence` if the adapter cannot be read.
    pub fn load(storage: Arc<dyn SnapshotStore>) -> Result<Self> {
        let (mut items, source): (Vec<Product>, _) =
            persistence::load_or_else(storage.as_ref(), SnapshotKey::Wishlist, Vec::new)?;
        if source == LoadSource::Corrupt {
            warn!("Wishlist snapshot was unreadable; starting with an empty wishlist");
        }

        // Older snapshots may carry duplicates; keep the first occurrence.
        let before = items.len();
        let mut seen = HashSet::new();
        items.retain(|p| seen.insert(p.id.clone()));
        if items.len() != before {
            warn!(dropped = before - items.len(), "Dropped duplicate wishlist entries");
        }

        Ok(Self { items, storage })
    }

    /// Saved products in insertion order.
    #[must_use]
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Number of saved products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing is saved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether `product_id` is saved.
    #[must_use]
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.items.iter().any(|p| &p.id == product_id)
    }

    /// Save `product`. Does nothing if it is already saved.
    ///
    /// Returns whether the wishlist changed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Persistence` if the snapshot cannot be saved.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub fn add(&mut self, product: &Product) -> Result<bool> {
        if self.contains(&product.id) {
            debug!("Already in wishlist");
            return Ok(false);
        }
        self.items.push(product.clone());
        self.persist()?;
        debug!("Added to wishlist");
        Ok(true)
    }

    /// Remove `product_id` from the wishlist.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if it was not saved.
    #[instrument(skip(self))]
    pub fn remove(&mut self, product_id: &ProductId) -> Result<()> {
        let index = self
            .items
            .iter()
            .position(|p| &p.id == product_id)
            .ok_or_else(|| StoreError::not_found(Entity::WishlistEntry, product_id))?;
        self.items.remove(index);
        self.persist()?;
        debug!("Removed from wishlist");
        Ok(())
    }

    /// Remove `product` if saved, otherwise save it.
    ///
    /// Returns whether the product is saved afterwards.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Persistence` if the snapshot cannot be saved.
    pub fn toggle(&mut self, product: &Product) -> Result<bool> {
        if self.contains(&product.id) {
            self.remove(&product.id)?;
            Ok(false)
        } else {
            self.add(product)?;
            Ok(true)
        }
    }

    fn persist(&self) -> Result<()> {
        persistence::persist(self.storage.as_ref(), SnapshotKey::Wishlist, &self.items)?;
        Ok(())
    }
}
