//! Cart line-item type.

use serde::{Deserialize, Serialize};

use pomelo_core::{Price, ProductId};

use super::product::Product;

/// One line in the cart: a product snapshot plus the quantity held.
///
/// Invariants maintained by the cart manager: at most one line per product
/// id, and `quantity` is never persisted at zero or below - an update to
/// zero removes the line instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Product this line refers to.
    pub product_id: ProductId,
    /// Units of the product in the cart (always >= 1).
    pub quantity: u32,
    /// Denormalized snapshot of the product at the time it was added.
    pub product: Product,
}

impl CartItem {
    /// Price of this line: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price.times(self.quantity)
    }
}
