//! Cart commands.

use saffron_core::ProductId;
use saffron_store::Store;
use tracing::info;

use super::{CommandError, log_line, log_total};

/// Show cart lines with the checkout quote.
pub fn show(store: &Store) {
    let cart = store.cart();
    if cart.is_empty() {
        info!("Your cart is empty");
        return;
    }

    info!("Cart ({} items):", cart.total_items());
    for line in cart.lines() {
        log_line(line);
    }

    let quote = store.quote();
    log_total("Subtotal", quote.subtotal);
    log_total("Shipping", quote.shipping);
    log_total("Total", quote.total);
    if !quote.shipping.amount().is_zero() {
        let remaining = store.shipping_policy().free_threshold - quote.subtotal;
        info!("Spend {remaining} more for free shipping");
    }
}

pub fn add(store: &mut Store, id: &ProductId) -> Result<(), CommandError> {
    store.add_to_cart(id)?;
    let quantity = store.cart().line(id).map_or(0, |line| line.quantity);
    info!("Added {id} (now {quantity} in cart)");
    Ok(())
}

pub fn set(store: &mut Store, id: &ProductId, quantity: i64) -> Result<(), CommandError> {
    store.cart_mut().update_quantity(id, quantity)?;
    match store.cart().line(id) {
        Some(line) => info!("Set {id} to {}", line.quantity),
        None => info!("Removed {id} from cart"),
    }
    Ok(())
}

pub fn remove(store: &mut Store, id: &ProductId) -> Result<(), CommandError> {
    store.cart_mut().remove_item(id)?;
    info!("Removed {id} from cart");
    Ok(())
}

pub fn clear(store: &mut Store) -> Result<(), CommandError> {
    store.cart_mut().clear()?;
    info!("Cart cleared");
    Ok(())
}
