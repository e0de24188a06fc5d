//! Catalog commands.
//!
//! # Usage
//!
//! ```bash
//! saffron products list --category "Saffron Tea" --sort rating
//! saffron products show premium-saffron-threads
//! saffron products search oil
//!
//! # Admin only
//! saffron products add --id saffron-honey --name "Saffron Honey" --price 18.99 \
//!     --category saffron-powder --description "Wildflower honey with saffron."
//! saffron products update saffron-honey --price 16.99 --badge New
//! saffron products delete saffron-honey
//! ```

use saffron_core::{Category, ProductId};
use saffron_store::models::{Product, ProductPatch};
use saffron_store::{Entity, SortOrder, Store, StoreError};
use tracing::{info, warn};

use super::{CommandError, log_product, require_admin};

/// List products in a category (or all), sorted.
pub fn list(store: &Store, category: Option<Category>, sort: SortOrder) {
    let products = store.catalog().browse(category, sort);
    match category {
        Some(category) => info!("{} products in {category}:", products.len()),
        None => info!("{} products:", products.len()),
    }
    for product in products {
        log_product(product);
    }
}

/// Show every field of one product.
pub fn show(store: &Store, id: &ProductId) -> Result<(), CommandError> {
    let product = store
        .catalog()
        .get(id)
        .ok_or_else(|| StoreError::NotFound {
            entity: Entity::Product,
            id: id.to_string(),
        })?;

    info!("{} ({})", product.name, product.id);
    info!("  Category:  {}", product.category);
    if product.is_on_sale() {
        if let Some(original) = product.original_price {
            info!("  Price:     {} (was {original})", product.price);
        }
    } else {
        info!("  Price:     {}", product.price);
    }
    info!(
        "  Rating:    {:.1} ({} reviews)",
        product.rating, product.reviews
    );
    if !product.weight.is_empty() {
        info!("  Weight:    {}", product.weight);
    }
    if let Some(badge) = &product.badge {
        info!("  Badge:     {badge}");
    }
    info!(
        "  Stock:     {}",
        if product.in_stock { "In stock" } else { "Out of stock" }
    );
    info!("  {}", product.description);
    for detail in &product.details {
        info!("  - {detail}");
    }
    if store.wishlist().contains(&product.id) {
        info!("  (on your wishlist)");
    }
    Ok(())
}

/// Search the catalog.
pub fn search(store: &Store, query: &str) {
    let hits = store.catalog().search(query);
    info!("{} results for \"{query}\":", hits.len());
    for product in hits {
        log_product(product);
    }
}

/// Add a product to the catalog.
pub fn add(store: &mut Store, product: Product) -> Result<(), CommandError> {
    require_admin(store)?;
    if product.price.is_negative() {
        warn!("Adding {} with a negative price", product.id);
    }
    let id = product.id.clone();
    store.catalog_mut().create(product)?;
    info!("Added {id}");
    Ok(())
}

/// Apply a partial update to a product.
pub fn update(store: &mut Store, id: &ProductId, patch: ProductPatch) -> Result<(), CommandError> {
    require_admin(store)?;
    if patch.is_empty() {
        warn!("Nothing to update for {id}");
        return Ok(());
    }
    store.catalog_mut().update(id, patch)?;
    info!("Updated {id}");
    Ok(())
}

/// Remove a product from the catalog.
///
/// Carts, wishlists and orders keep their own copies and are not touched.
pub fn delete(store: &mut Store, id: &ProductId) -> Result<(), CommandError> {
    require_admin(store)?;
    let removed = store.catalog_mut().delete(id)?;
    info!("Deleted {} ({})", removed.name, removed.id);
    Ok(())
}
