//! Cart line type.

use saffron_core::Price;
use serde::{Deserialize, Serialize};

use super::Product;

/// One product's presence in the cart.
///
/// The product is held by value: the line keeps the details the shopper saw
/// when adding it, and an order copies lines wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Snapshot of the product.
    pub product: Product,
    /// Units in the cart, always at least 1.
    pub quantity: u32,
}

impl CartLine {
    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price.times(self.quantity)
    }
}
