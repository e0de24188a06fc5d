//! Unified error handling for store operations.
//!
//! All table operations return `Result<T, StoreError>`. A mutation that
//! targets an unknown record returns [`StoreError::NotFound`] and leaves the
//! table untouched; callers that want fire-and-forget semantics can ignore it.

use std::fmt;

use saffron_core::{EmailError, IdError};
use thiserror::Error;

use crate::persistence::PersistenceError;

/// Kinds of records held by the store, used in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Product,
    CartLine,
    WishlistEntry,
    Order,
    Message,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Product => "product",
            Self::CartLine => "cart line",
            Self::WishlistEntry => "wishlist entry",
            Self::Order => "order",
            Self::Message => "message",
        })
    }
}

/// Store-level error type.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record with this identifier exists.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Kind of record looked up.
        entity: Entity,
        /// Identifier that did not match.
        id: String,
    },

    /// A record with this identifier already exists.
    #[error("{entity} already exists: {id}")]
    Conflict {
        /// Kind of record being created.
        entity: Entity,
        /// Clashing identifier.
        id: String,
    },

    /// Identifier failed validation.
    #[error("invalid identifier: {0}")]
    InvalidId(#[from] IdError),

    /// Email failed validation.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// Required text input was blank.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// Quantity does not fit in a cart line.
    #[error("quantity out of range: {0}")]
    QuantityOutOfRange(i64),

    /// Checkout was attempted with nothing in the cart.
    #[error("nothing to checkout: cart is empty")]
    EmptyCart,

    /// Snapshot adapter failed.
    #[error("persistence error: {0}")]
    Persistence(#[from] PersistenceError),
}

impl StoreError {
    pub(crate) fn not_found(entity: Entity, id: impl fmt::Display) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// Whether this is a not-found result rather than a real failure.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type alias for `StoreError`.
pub type Result<T> = std::result::Result<T, StoreError>;
