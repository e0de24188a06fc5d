//! Integration tests for the Saffron store.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p saffron-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `shopping_flow` - Cart, checkout and order scenarios
//! - `snapshot_independence` - Orders and carts keep their own product copies
//! - `persistence` - File snapshots, seeding and corrupt snapshot recovery
//! - `back_office` - Admin gate, catalog management, fulfilment and inbox
//!
//! Every test runs against a [`FileStore`] in a fresh temporary directory.
//! Reopening a [`Store`] over the same directory stands in for a page reload.

use std::path::Path;
use std::sync::Arc;

use saffron_core::{Category, Email, Price, ProductId};
use saffron_store::models::{Product, ShippingAddress};
use saffron_store::{FileStore, Store, StoreConfig};
use tempfile::TempDir;

/// A temporary data directory and the configuration pointing at it.
pub struct TestContext {
    dir: TempDir,
    pub config: StoreConfig,
}

impl TestContext {
    /// Create an empty data directory with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Create an empty data directory, keeping the rest of `config`.
    #[must_use]
    pub fn with_config(mut config: StoreConfig) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        config.data_dir = dir.path().to_path_buf();
        Self { dir, config }
    }

    /// The data directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    /// Open a fresh adapter over the data directory.
    #[must_use]
    pub fn storage(&self) -> Arc<FileStore> {
        Arc::new(FileStore::open(self.dir.path()).expect("Failed to open data dir"))
    }

    /// Open a new session over the data directory.
    #[must_use]
    pub fn open(&self) -> Store {
        Store::open(self.storage(), &self.config).expect("Failed to open store")
    }

    /// Path of the snapshot file for `name` (e.g. `"cart"`).
    #[must_use]
    pub fn snapshot_path(&self, name: &str) -> std::path::PathBuf {
        self.dir.path().join(format!("{name}.json"))
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// A minimal in-stock product.
#[must_use]
pub fn product(id: &str, cents: i64) -> Product {
    Product {
        id: ProductId::parse(id).expect("valid product id"),
        name: format!("Test {id}"),
        price: Price::from_cents(cents),
        original_price: None,
        image: String::new(),
        images: Vec::new(),
        category: Category::SaffronThreads,
        description: String::new(),
        details: Vec::new(),
        rating: 0.0,
        reviews: 0,
        badge: None,
        in_stock: true,
        weight: String::new(),
    }
}

/// A complete shipping address.
#[must_use]
pub fn address(first_name: &str, last_name: &str) -> ShippingAddress {
    ShippingAddress {
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        email: Email::parse("shopper@example.com").expect("valid email"),
        address: "12 Crocus Lane".to_owned(),
        city: "Springfield".to_owned(),
        state: "IL".to_owned(),
        zip: "62704".to_owned(),
    }
}
