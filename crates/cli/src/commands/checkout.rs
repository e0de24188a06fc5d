//! Checkout command.
//!
//! Payment is simulated: the command waits for the configured processing
//! delay and then always succeeds.

use std::time::Duration;

use saffron_store::models::ShippingAddress;
use saffron_store::{Store, StoreError};
use tracing::info;

use super::{CommandError, log_line, log_total};

/// Place an order for the cart after the simulated payment delay.
pub async fn run(
    store: &mut Store,
    shipping: ShippingAddress,
    delay: Duration,
) -> Result<(), CommandError> {
    // Fail fast on problems the delay would only postpone.
    if store.cart().is_empty() {
        return Err(StoreError::EmptyCart.into());
    }
    shipping.validate()?;

    let quote = store.quote();
    info!("Processing payment of {}...", quote.total);
    tokio::time::sleep(delay).await;

    let order = store.checkout(shipping)?;

    info!("Order {} confirmed. Thank you, {}!", order.id, order.shipping.first_name);
    for line in &order.items {
        log_line(line);
    }
    log_total("Subtotal", quote.subtotal);
    log_total("Shipping", quote.shipping);
    log_total("Total", order.total);
    info!("A confirmation will be sent to {}", order.shipping.email);
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use saffron_core::{Email, Price, ProductId};

    use super::*;

    fn address() -> ShippingAddress {
        ShippingAddress {
            first_name: "Ada".to_owned(),
            last_name: "Lovelace".to_owned(),
            email: Email::parse("ada@example.com").unwrap(),
            address: "12 Crocus Lane".to_owned(),
            city: "London".to_owned(),
            state: "LDN".to_owned(),
            zip: "N1 9GU".to_owned(),
        }
    }

    #[tokio::test]
    async fn test_checkout_after_delay() {
        let mut store = Store::in_memory().unwrap();
        store
            .add_to_cart(&ProductId::from_static("saffron-powder"))
            .unwrap();

        run(&mut store, address(), Duration::ZERO).await.unwrap();

        assert!(store.cart().is_empty());
        let order = store.orders().list().first().unwrap();
        assert_eq!(order.total, Price::from_cents(3499 + 999));
    }

    #[tokio::test]
    async fn test_empty_cart_fails_before_waiting() {
        let mut store = Store::in_memory().unwrap();
        let err = run(&mut store, address(), Duration::from_secs(3600))
            .await
            .unwrap_err();
        assert!(matches!(err, CommandError::Store(StoreError::EmptyCart)));
    }
}
