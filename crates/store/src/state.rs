//! Session state: every table opened over one snapshot adapter.

use std::sync::Arc;

use saffron_core::ProductId;
use tracing::debug;

use crate::auth::{AdminGate, CustomerSession};
use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::checkout::{self, Quote, ShippingPolicy};
use crate::config::StoreConfig;
use crate::error::{Entity, Result, StoreError};
use crate::messages::MessageBoard;
use crate::models::{Order, ShippingAddress};
use crate::orders::OrderLedger;
use crate::persistence::{MemoryStore, SnapshotStore};
use crate::wishlist::Wishlist;

/// All store tables for one session.
///
/// Each table persists itself after every mutation, so dropping a `Store`
/// loses nothing.
pub struct Store {
    catalog: Catalog,
    cart: Cart,
    wishlist: Wishlist,
    orders: OrderLedger,
    messages: MessageBoard,
    admin: AdminGate,
    customer: CustomerSession,
    shipping: ShippingPolicy,
}

impl Store {
    /// Open every table over `storage`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Persistence` if the adapter cannot be read.
    pub fn open(storage: Arc<dyn SnapshotStore>, config: &StoreConfig) -> Result<Self> {
        let store = Self {
            catalog: Catalog::load(storage.clone())?,
            cart: Cart::load(storage.clone())?,
            wishlist: Wishlist::load(storage.clone())?,
            orders: OrderLedger::load(storage.clone())?,
            messages: MessageBoard::load(storage.clone())?,
            admin: AdminGate::load(storage.clone(), config.admin.clone())?,
            customer: CustomerSession::load(storage)?,
            shipping: config.shipping,
        };
        debug!(
            products = store.catalog.list().len(),
            cart_lines = store.cart.lines().len(),
            orders = store.orders.list().len(),
            "Store opened"
        );
        Ok(store)
    }

    /// Open a throwaway store with default configuration.
    ///
    /// # Errors
    ///
    /// Never fails in practice; the in-memory adapter has no I/O.
    pub fn in_memory() -> Result<Self> {
        Self::open(Arc::new(MemoryStore::new()), &StoreConfig::default())
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub const fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    pub const fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    #[must_use]
    pub const fn wishlist(&self) -> &Wishlist {
        &self.wishlist
    }

    pub const fn wishlist_mut(&mut self) -> &mut Wishlist {
        &mut self.wishlist
    }

    #[must_use]
    pub const fn orders(&self) -> &OrderLedger {
        &self.orders
    }

    pub const fn orders_mut(&mut self) -> &mut OrderLedger {
        &mut self.orders
    }

    #[must_use]
    pub const fn messages(&self) -> &MessageBoard {
        &self.messages
    }

    pub const fn messages_mut(&mut self) -> &mut MessageBoard {
        &mut self.messages
    }

    #[must_use]
    pub const fn admin(&self) -> &AdminGate {
        &self.admin
    }

    pub const fn admin_mut(&mut self) -> &mut AdminGate {
        &mut self.admin
    }

    #[must_use]
    pub const fn customer(&self) -> &CustomerSession {
        &self.customer
    }

    pub const fn customer_mut(&mut self) -> &mut CustomerSession {
        &mut self.customer
    }

    #[must_use]
    pub const fn shipping_policy(&self) -> &ShippingPolicy {
        &self.shipping
    }

    /// Add one unit of a catalog product to the cart.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the product is not in the catalog.
    pub fn add_to_cart(&mut self, product_id: &ProductId) -> Result<()> {
        let product = self
            .catalog
            .get(product_id)
            .ok_or_else(|| StoreError::not_found(Entity::Product, product_id))?;
        self.cart.add_item(product)
    }

    /// Toggle a catalog product on the wishlist. Returns whether it is saved afterwards.
    ///
    /// Products no longer in the catalog can still be removed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the product is neither saved nor in the catalog.
    pub fn toggle_wishlist(&mut self, product_id: &ProductId) -> Result<bool> {
        if self.wishlist.contains(product_id) {
            self.wishlist.remove(product_id)?;
            return Ok(false);
        }
        let product = self
            .catalog
            .get(product_id)
            .ok_or_else(|| StoreError::not_found(Entity::Product, product_id))?;
        self.wishlist.toggle(product)
    }

    /// Price breakdown for the current cart.
    #[must_use]
    pub fn quote(&self) -> Quote {
        self.shipping.quote(&self.cart)
    }

    /// Turn the cart into an order and empty it.
    ///
    /// # Errors
    ///
    /// See [`checkout::checkout`].
    pub fn checkout(&mut self, shipping: ShippingAddress) -> Result<Order> {
        checkout::checkout(&mut self.cart, &mut self.orders, &self.shipping, shipping)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use saffron_core::{Email, Price};

    use super::*;

    #[test]
    fn test_add_to_cart_from_catalog() {
        let mut store = Store::in_memory().unwrap();
        let id = ProductId::from_static("saffron-powder");

        store.add_to_cart(&id).unwrap();
        store.add_to_cart(&id).unwrap();

        assert_eq!(store.cart().line(&id).unwrap().quantity, 2);
        assert_eq!(store.quote().subtotal, Price::from_cents(6998));
        assert_eq!(store.quote().shipping, Price::from_cents(999));
    }

    #[test]
    fn test_add_unknown_product_is_not_found() {
        let mut store = Store::in_memory().unwrap();
        let err = store.add_to_cart(&ProductId::from_static("nope")).unwrap_err();
        assert!(err.is_not_found());
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_toggle_wishlist_survives_catalog_delete() {
        let mut store = Store::in_memory().unwrap();
        let id = ProductId::from_static("saffron-infused-tea");

        assert!(store.toggle_wishlist(&id).unwrap());
        store.catalog_mut().delete(&id).unwrap();
        assert!(!store.toggle_wishlist(&id).unwrap());
        assert!(store.toggle_wishlist(&id).unwrap_err().is_not_found());
    }

    #[test]
    fn test_checkout_through_facade() {
        let mut store = Store::in_memory().unwrap();
        store
            .add_to_cart(&ProductId::from_static("luxury-gift-set"))
            .unwrap();

        let order = store
            .checkout(ShippingAddress {
                first_name: "Ada".to_owned(),
                last_name: "Lovelace".to_owned(),
                email: Email::parse("ada@example.com").unwrap(),
                address: "12 Crocus Lane".to_owned(),
                city: "London".to_owned(),
                state: "LDN".to_owned(),
                zip: "N1 9GU".to_owned(),
            })
            .unwrap();

        assert_eq!(order.total, Price::from_cents(14999));
        assert!(store.cart().is_empty());
        assert_eq!(store.orders().stats().total_orders, 1);
    }
}
