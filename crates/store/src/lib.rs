//! Saffron commerce state store.
//!
//! Holds the storefront's tables (catalog, cart, wishlist, orders, messages)
//! and the demo sign-in flags, each persisted as a JSON snapshot through a
//! [`SnapshotStore`] adapter. Open everything at once with [`Store::open`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod messages;
pub mod models;
pub mod orders;
pub mod persistence;
pub mod seed;
pub mod state;
pub mod support;
pub mod wishlist;

pub use auth::{AdminCredentials, AdminGate, AuthError, CustomerSession};
pub use cart::Cart;
pub use catalog::{Catalog, SortOrder};
pub use checkout::{Quote, ShippingPolicy};
pub use config::{ConfigError, StoreConfig};
pub use error::{Entity, Result, StoreError};
pub use messages::MessageBoard;
pub use orders::{OrderLedger, OrderStats};
pub use persistence::{FileStore, MemoryStore, PersistenceError, SnapshotKey, SnapshotStore};
pub use state::Store;
pub use wishlist::Wishlist;
