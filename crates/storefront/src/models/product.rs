//! Catalog record types.
//!
//! Products and categories are supplied by the read-only catalog
//! collaborator; the session core never mutates them. Cart lines carry a
//! denormalized snapshot of the product as it looked at add time.

use serde::{Deserialize, Serialize};

use pomelo_core::{CategoryId, Price, ProductId};

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Long-form description.
    pub description: String,
    /// Current selling price.
    pub price: Price,
    /// Pre-discount price, when the product is on sale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Price>,
    /// Category this product belongs to.
    pub category: CategoryId,
    /// Image URLs, primary first.
    pub images: Vec<String>,
    /// Average review rating (0.0 - 5.0).
    pub rating: f64,
    /// Number of reviews behind the rating.
    pub review_count: u32,
    /// Units available. Informational at this layer - the cart does not
    /// clamp against it.
    pub stock: u32,
    /// Whether the product is featured on the home page.
    pub featured: bool,
    /// Free-form tags.
    pub tags: Vec<String>,
}

impl Product {
    /// Percentage off versus the original price, if the product is on sale.
    #[must_use]
    pub fn discount_percent(&self) -> Option<u32> {
        self.original_price
            .map(|original| self.price.discount_percent_from(original))
    }

    /// Whether at least one unit is available.
    #[must_use]
    pub const fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

/// A catalog category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique category ID.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// URL slug.
    pub slug: String,
    /// Banner image URL.
    pub image: String,
    /// Number of products in this category.
    pub product_count: u32,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sale_product() -> Product {
        Product {
            id: ProductId::new("p-1"),
            name: "Canvas Tote".to_owned(),
            description: "A sturdy tote.".to_owned(),
            price: Price::from_cents(30_00),
            original_price: Some(Price::from_cents(40_00)),
            category: CategoryId::new("accessories"),
            images: vec!["https://img.example.com/tote.jpg".to_owned()],
            rating: 4.4,
            review_count: 12,
            stock: 5,
            featured: false,
            tags: vec!["canvas".to_owned()],
        }
    }

    #[test]
    fn test_discount_percent() {
        assert_eq!(sale_product().discount_percent(), Some(25));
    }

    #[test]
    fn test_no_discount_without_original_price() {
        let mut product = sale_product();
        product.original_price = None;
        assert_eq!(product.discount_percent(), None);
    }

    #[test]
    fn test_in_stock() {
        let mut product = sale_product();
        assert!(product.in_stock());
        product.stock = 0;
        assert!(!product.in_stock());
    }
}
