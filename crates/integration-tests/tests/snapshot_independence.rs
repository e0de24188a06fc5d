//! Orders, carts and wishlists hold their own product copies.

#![allow(clippy::unwrap_used)]

use saffron_core::{Price, ProductId};
use saffron_integration_tests::{TestContext, address};
use saffron_store::models::ProductPatch;

#[test]
fn test_order_unchanged_after_cart_clear() {
    let ctx = TestContext::new();
    let mut store = ctx.open();
    store
        .add_to_cart(&ProductId::from_static("saffron-essential-oil"))
        .unwrap();
    store
        .add_to_cart(&ProductId::from_static("saffron-powder"))
        .unwrap();

    let order = store.checkout(address("Ada", "Lovelace")).unwrap();
    store.cart_mut().clear().unwrap();

    let stored = store.orders().get(&order.id).unwrap();
    assert_eq!(stored.items, order.items);
    assert_eq!(stored.items.len(), 2);
}

#[test]
fn test_order_unchanged_after_catalog_edit() {
    let ctx = TestContext::new();
    let mut store = ctx.open();
    let id = ProductId::from_static("royal-saffron-collection");
    store.add_to_cart(&id).unwrap();
    let order = store.checkout(address("Ada", "Lovelace")).unwrap();

    store
        .catalog_mut()
        .update(
            &id,
            ProductPatch {
                name: Some("Renamed Collection".to_owned()),
                price: Some(Price::from_cents(1)),
                ..ProductPatch::default()
            },
        )
        .unwrap();
    store.catalog_mut().delete(&id).unwrap();

    let reopened = ctx.open();
    let line = &reopened.orders().get(&order.id).unwrap().items[0];
    assert_eq!(line.product.name, "Royal Saffron Collection");
    assert_eq!(line.product.price, Price::from_cents(8999));
}

#[test]
fn test_cart_line_keeps_price_seen_when_added() {
    let ctx = TestContext::new();
    let mut store = ctx.open();
    let id = ProductId::from_static("saffron-infused-tea");
    store.add_to_cart(&id).unwrap();

    store
        .catalog_mut()
        .update(
            &id,
            ProductPatch {
                price: Some(Price::from_cents(9900)),
                ..ProductPatch::default()
            },
        )
        .unwrap();

    assert_eq!(store.cart().total_price(), Price::from_cents(2499));
}

#[test]
fn test_wishlist_survives_catalog_delete() {
    let ctx = TestContext::new();
    let mut store = ctx.open();
    let id = ProductId::from_static("luxury-gift-set");
    store.toggle_wishlist(&id).unwrap();

    store.catalog_mut().delete(&id).unwrap();

    let reopened = ctx.open();
    assert!(reopened.catalog().get(&id).is_none());
    assert_eq!(reopened.wishlist().items()[0].name, "Luxury Gift Set");
}
