//! Checkout: turning the cart into an order.
//!
//! Checkout runs three steps in sequence: quote the cart, record an order
//! holding a copy of the cart lines, then clear the cart. The steps are not
//! atomic. If clearing fails the order stays recorded and the error is
//! returned.

use saffron_core::Price;
use tracing::{info, instrument};

use crate::cart::Cart;
use crate::error::{Result, StoreError};
use crate::models::{Order, ShippingAddress};
use crate::orders::OrderLedger;

/// Flat shipping surcharge waived above a subtotal threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShippingPolicy {
    /// Subtotals at or above this ship free.
    pub free_threshold: Price,
    /// Charged below the threshold.
    pub flat_fee: Price,
}

impl ShippingPolicy {
    /// Shipping charged for `subtotal`.
    #[must_use]
    pub fn shipping_for(&self, subtotal: Price) -> Price {
        if subtotal < self.free_threshold {
            self.flat_fee
        } else {
            Price::ZERO
        }
    }

    /// Price breakdown for `cart`.
    #[must_use]
    pub fn quote(&self, cart: &Cart) -> Quote {
        let subtotal = cart.total_price();
        let shipping = self.shipping_for(subtotal);
        Quote {
            subtotal,
            shipping,
            total: subtotal + shipping,
        }
    }
}

impl Default for ShippingPolicy {
    fn default() -> Self {
        Self {
            free_threshold: Price::from_cents(10_000),
            flat_fee: Price::from_cents(999),
        }
    }
}

/// What the shopper will be charged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub subtotal: Price,
    pub shipping: Price,
    pub total: Price,
}

/// Place an order for everything in `cart`, then empty it.
///
/// # Errors
///
/// - `StoreError::EmptyCart` if the cart has no lines
/// - `StoreError::MissingField` if the shipping address is incomplete
/// - `StoreError::Persistence` if a snapshot cannot be saved
#[instrument(skip_all, fields(lines = cart.lines().len()))]
pub fn checkout(
    cart: &mut Cart,
    orders: &mut OrderLedger,
    policy: &ShippingPolicy,
    shipping: ShippingAddress,
) -> Result<Order> {
    if cart.is_empty() {
        return Err(StoreError::EmptyCart);
    }
    shipping.validate()?;

    let quote = policy.quote(cart);
    let order = orders.place_order(cart.lines(), shipping, quote.total)?;
    cart.clear()?;

    info!(
        order_id = %order.id,
        subtotal = %quote.subtotal,
        shipping = %quote.shipping,
        total = %quote.total,
        "Checkout complete"
    );
    Ok(order)
}
