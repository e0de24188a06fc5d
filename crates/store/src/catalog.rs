//! Catalog table: the set of purchasable products.
//!
//! Seeded with the launch catalog on first run. Mutations are administrative;
//! shoppers only read through [`Catalog::browse`] and [`Catalog::search`].

use std::sync::Arc;

use saffron_core::{Category, ProductId};
use tracing::{info, instrument};

use crate::error::{Entity, Result, StoreError};
use crate::models::{Product, ProductPatch};
use crate::persistence::{self, LoadSource, SnapshotKey, SnapshotStore};
use crate::seed;

/// Shop page sort orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Catalog order.
    #[default]
    Featured,
    PriceLowToHigh,
    PriceHighToLow,
    /// Highest rated first.
    Rating,
}

/// Catalog table.
pub struct Catalog {
    products: Vec<Product>,
    storage: Arc<dyn SnapshotStore>,
}

impl Catalog {
    /// Load the catalog, seeding it when no snapshot exists.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Persistence` if the adapter cannot be read.
    pub fn load(storage: Arc<dyn SnapshotStore>) -> Result<Self> {
        let (products, source): (Vec<Product>, _) =
            persistence::load_or_else(storage.as_ref(), SnapshotKey::Catalog, seed::products)?;
        if source != LoadSource::Snapshot {
            info!(count = products.len(), "Catalog seeded");
        }
        Ok(Self { products, storage })
    }

    /// All products in insertion order.
    #[must_use]
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Add a product. The caller supplies its identity.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Conflict` if the id is already in the catalog.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub fn create(&mut self, product: Product) -> Result<()> {
        if self.get(&product.id).is_some() {
            return Err(StoreError::Conflict {
                entity: Entity::Product,
                id: product.id.into_inner(),
            });
        }
        self.products.push(product);
        self.persist()?;
        info!("Product created");
        Ok(())
    }

    /// Merge `patch` into the product with `id`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no product has this id.
    #[instrument(skip(self, patch))]
    pub fn update(&mut self, id: &ProductId, patch: ProductPatch) -> Result<()> {
        let product = self
            .products
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| StoreError::not_found(Entity::Product, id))?;
        patch.apply(product);
        self.persist()?;
        info!("Product updated");
        Ok(())
    }

    /// Remove the product with `id`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no product has this id.
    #[instrument(skip(self))]
    pub fn delete(&mut self, id: &ProductId) -> Result<Product> {
        let index = self
            .products
            .iter()
            .position(|p| &p.id == id)
            .ok_or_else(|| StoreError::not_found(Entity::Product, id))?;
        let removed = self.products.remove(index);
        self.persist()?;
        info!("Product deleted");
        Ok(removed)
    }

    /// Products in `category` (or all, for `None`), in the requested order.
    #[must_use]
    pub fn browse(&self, category: Option<Category>, sort: SortOrder) -> Vec<&Product> {
        let mut products: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| category.is_none_or(|c| p.category == c))
            .collect();

        // Stable sorts keep catalog order among ties.
        match sort {
            SortOrder::Featured => {}
            SortOrder::PriceLowToHigh => products.sort_by_key(|p| p.price),
            SortOrder::PriceHighToLow => products.sort_by(|a, b| b.price.cmp(&a.price)),
            SortOrder::Rating => products.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        }
        products
    }

    /// Case-insensitive substring search over name, category and description.
    ///
    /// An empty query returns every product.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let needle = query.trim().to_lowercase();
        self.products.iter().filter(|p| p.matches(&needle)).collect()
    }

    fn persist(&self) -> Result<()> {
        persistence::persist(self.storage.as_ref(), SnapshotKey::Catalog, &self.products)?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use saffron_core::Price;

    use super::*;
    use crate::persistence::MemoryStore;

    fn catalog() -> (Catalog, Arc<MemoryStore>) {
        let storage = Arc::new(MemoryStore::new());
        let catalog = Catalog::load(storage.clone()).unwrap();
        (catalog, storage)
    }

    fn custom_product(id: &str) -> Product {
        Product {
            id: ProductId::parse(id).unwrap(),
            name: "Saffron Honey".to_owned(),
            price: Price::from_cents(1899),
            original_price: None,
            image: "assets/honey.jpg".to_owned(),
            images: vec!["assets/honey.jpg".to_owned()],
            category: Category::SaffronPowder,
            description: "Wildflower honey with saffron.".to_owned(),
            details: vec![],
            rating: 0.0,
            reviews: 0,
            badge: Some("New".to_owned()),
            in_stock: true,
            weight: "250g".to_owned(),
        }
    }

    #[test]
    fn test_first_run_uses_seed() {
        let (catalog, storage) = catalog();
        assert_eq!(catalog.list().len(), seed::products().len());
        // Seeding alone writes nothing.
        assert!(storage.raw(SnapshotKey::Catalog).is_none());
    }

    #[test]
    fn test_create_appends_and_persists() {
        let (mut catalog, storage) = catalog();
        catalog.create(custom_product("saffron-honey")).unwrap();

        assert_eq!(catalog.list().last().unwrap().id.as_str(), "saffron-honey");
        let reloaded = Catalog::load(storage).unwrap();
        assert_eq!(reloaded.list().len(), seed::products().len() + 1);
    }

    #[test]
    fn test_create_rejects_duplicate_id() {
        let (mut catalog, _) = catalog();
        let err = catalog.create(custom_product("saffron-powder")).unwrap_err();
        assert!(matches!(err, StoreError::Conflict { .. }));
        assert_eq!(catalog.list().len(), seed::products().len());
    }

    #[test]
    fn test_update_merges_fields() {
        let (mut catalog, _) = catalog();
        let id = ProductId::from_static("saffron-infused-tea");
        catalog
            .update(
                &id,
                ProductPatch {
                    in_stock: Some(false),
                    ..ProductPatch::default()
                },
            )
            .unwrap();

        let product = catalog.get(&id).unwrap();
        assert!(!product.in_stock);
        assert_eq!(product.price, Price::from_cents(2499));
    }

    #[test]
    fn test_update_unknown_is_not_found() {
        let (mut catalog, storage) = catalog();
        let err = catalog
            .update(&ProductId::from_static("missing"), ProductPatch::default())
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(storage.raw(SnapshotKey::Catalog).is_none());
    }

    #[test]
    fn test_delete() {
        let (mut catalog, _) = catalog();
        let id = ProductId::from_static("saffron-powder");
        let removed = catalog.delete(&id).unwrap();
        assert_eq!(removed.id, id);
        assert!(catalog.get(&id).is_none());
        assert!(catalog.delete(&id).unwrap_err().is_not_found());
    }

    #[test]
    fn test_browse_filters_and_sorts() {
        let (catalog, _) = catalog();

        let gift_sets = catalog.browse(Some(Category::GiftSets), SortOrder::PriceLowToHigh);
        let names: Vec<_> = gift_sets.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Royal Saffron Collection", "Luxury Gift Set"]);

        let by_price = catalog.browse(None, SortOrder::PriceHighToLow);
        assert_eq!(by_price.first().unwrap().id.as_str(), "luxury-gift-set");

        let by_rating = catalog.browse(None, SortOrder::Rating);
        assert_eq!(by_rating.first().unwrap().id.as_str(), "luxury-gift-set");
        assert_eq!(by_rating.last().unwrap().id.as_str(), "saffron-essential-oil");
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let (catalog, _) = catalog();
        let hits = catalog.search("BEAUTY");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits.first().unwrap().id.as_str(), "saffron-essential-oil");

        // "tea" also appears in the gift set's description.
        let ids: Vec<_> = catalog.search("tea").iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["saffron-infused-tea", "luxury-gift-set"]);

        assert_eq!(catalog.search("").len(), catalog.list().len());
        assert!(catalog.search("vanilla").is_empty());
    }
}
