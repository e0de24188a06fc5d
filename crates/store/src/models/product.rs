//! Catalog product types.

use saffron_core::{Category, Price, ProductId};
use serde::{Deserialize, Serialize};

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Current unit price.
    pub price: Price,
    /// Pre-discount price, shown struck through when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Price>,
    /// Primary image reference.
    pub image: String,
    /// Gallery image references, in display order.
    #[serde(default)]
    pub images: Vec<String>,
    /// Catalog category.
    pub category: Category,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Short detail bullets, in display order.
    #[serde(default)]
    pub details: Vec<String>,
    /// Average rating, 0 to 5.
    #[serde(default)]
    pub rating: f32,
    /// Number of reviews.
    #[serde(default)]
    pub reviews: u32,
    /// Promotional badge (e.g. "Bestseller").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    /// Whether the product can be ordered.
    pub in_stock: bool,
    /// Weight or size label (e.g. "1g", "15ml").
    #[serde(default)]
    pub weight: String,
}

impl Product {
    /// Whether the product is currently discounted.
    #[must_use]
    pub fn is_on_sale(&self) -> bool {
        self.original_price.is_some_and(|original| original > self.price)
    }

    /// Case-insensitive substring match over name, category and description.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.category.label().to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

/// Partial update for a [`Product`].
///
/// Every field is optional; `None` leaves the stored value alone. The nullable
/// fields (`original_price`, `badge`) take `Some(None)` to clear them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<Price>,
    pub original_price: Option<Option<Price>>,
    pub image: Option<String>,
    pub images: Option<Vec<String>>,
    pub category: Option<Category>,
    pub description: Option<String>,
    pub details: Option<Vec<String>>,
    pub rating: Option<f32>,
    pub reviews: Option<u32>,
    pub badge: Option<Option<String>>,
    pub in_stock: Option<bool>,
    pub weight: Option<String>,
}

impl ProductPatch {
    /// Whether the patch changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge the supplied fields into `product`.
    pub fn apply(self, product: &mut Product) {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(original_price) = self.original_price {
            product.original_price = original_price;
        }
        if let Some(image) = self.image {
            product.image = image;
        }
        if let Some(images) = self.images {
            product.images = images;
        }
        if let Some(category) = self.category {
            product.category = category;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(details) = self.details {
            product.details = details;
        }
        if let Some(rating) = self.rating {
            product.rating = rating;
        }
        if let Some(reviews) = self.reviews {
            product.reviews = reviews;
        }
        if let Some(badge) = self.badge {
            product.badge = badge;
        }
        if let Some(in_stock) = self.in_stock {
            product.in_stock = in_stock;
        }
        if let Some(weight) = self.weight {
            product.weight = weight;
        }
    }
}
