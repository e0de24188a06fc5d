//! Command implementations.
//!
//! Each command works on an opened [`Store`] and reports through `tracing`.

use saffron_core::Price;
use saffron_store::models::{CartLine, Product};
use saffron_store::{AuthError, Store, StoreError};
use thiserror::Error;
use tracing::info;

pub mod account;
pub mod admin;
pub mod cart;
pub mod checkout;
pub mod messages;
pub mod orders;
pub mod products;
pub mod support;
pub mod wishlist;

/// Errors surfaced by commands.
#[derive(Debug, Error)]
pub enum CommandError {
    /// A back-office command was run without signing in.
    #[error("admin sign-in required: run `saffron admin login` first")]
    AdminRequired,

    /// Store operation failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Sign-in failed.
    #[error(transparent)]
    Auth(#[from] AuthError),
}

/// Fail unless an admin is signed in.
pub fn require_admin(store: &Store) -> Result<(), CommandError> {
    if store.admin().is_authenticated() {
        Ok(())
    } else {
        Err(CommandError::AdminRequired)
    }
}

/// One-line product summary.
fn log_product(product: &Product) {
    let sale = product
        .original_price
        .filter(|_| product.is_on_sale())
        .map(|original| format!(" (was {original})"))
        .unwrap_or_default();
    let stock = if product.in_stock { "" } else { " [out of stock]" };
    info!(
        "  {:<26} {:<30} {}{}{}",
        product.id, product.name, product.price, sale, stock
    );
}

/// One-line cart or order line summary.
fn log_line(line: &CartLine) {
    info!(
        "  {:>3} x {:<30} {:>10} {:>10}",
        line.quantity,
        line.product.name,
        line.product.price,
        line.line_total()
    );
}

fn log_total(label: &str, amount: Price) {
    info!("  {label:<47} {amount:>10}");
}
