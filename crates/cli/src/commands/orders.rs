//! Order history and fulfilment commands.

use saffron_core::{OrderId, OrderStatus};
use saffron_store::Store;
use saffron_store::models::Order;
use tracing::info;

use super::{CommandError, require_admin};

fn log_order(order: &Order) {
    info!(
        "  {}  {}  {:<24} {:>3} items  {:>10}  {}",
        order.id,
        order.date.format("%Y-%m-%d %H:%M"),
        order.shipping.full_name(),
        order.item_count(),
        order.total,
        order.status
    );
}

pub fn list(store: &Store) {
    let orders = store.orders().list();
    if orders.is_empty() {
        info!("No orders yet");
        return;
    }
    info!("{} orders:", orders.len());
    for order in orders {
        log_order(order);
    }
}

pub fn search(store: &Store, query: &str) {
    let hits = store.orders().search(query);
    info!("{} orders matching \"{query}\":", hits.len());
    for order in hits {
        log_order(order);
    }
}

/// Overwrite an order's status.
pub fn set_status(store: &mut Store, id: &OrderId, status: OrderStatus) -> Result<(), CommandError> {
    require_admin(store)?;
    store.orders_mut().update_status(id, status)?;
    info!("Order {id} is now {status}");
    Ok(())
}
