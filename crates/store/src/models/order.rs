//! Order and shipping types.

use chrono::{DateTime, Utc};
use saffron_core::{Email, OrderId, OrderStatus, Price};
use serde::{Deserialize, Serialize};

use super::CartLine;
use crate::error::{Result, StoreError};

/// Where an order ships to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    pub first_name: String,
    pub last_name: String,
    pub email: Email,
    /// Street address.
    pub address: String,
    pub city: String,
    /// State or region.
    pub state: String,
    /// Postal code.
    pub zip: String,
}

impl ShippingAddress {
    /// Check that every text field is filled in.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::MissingField` naming the first blank field.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("first name", &self.first_name),
            ("last name", &self.last_name),
            ("address", &self.address),
            ("city", &self.city),
            ("state", &self.state),
            ("zip", &self.zip),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(StoreError::MissingField(name));
            }
        }
        Ok(())
    }

    /// "First Last".
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// An immutable record of a completed checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    /// Copy of the cart lines at checkout time.
    pub items: Vec<CartLine>,
    /// Amount charged: subtotal plus shipping.
    pub total: Price,
    /// When the order was placed.
    #[serde(deserialize_with = "super::utc_timestamp")]
    pub date: DateTime<Utc>,
    pub shipping: ShippingAddress,
    pub status: OrderStatus,
}

impl Order {
    /// Total units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Case-insensitive substring match over order id and customer name.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches(&self, needle: &str) -> bool {
        self.id.as_str().to_lowercase().contains(needle)
            || self.shipping.first_name.to_lowercase().contains(needle)
            || self.shipping.last_name.to_lowercase().contains(needle)
    }
}
