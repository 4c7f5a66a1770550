//! Cart state manager.
//!
//! Holds the ordered line items, enforces merge-on-add (at most one line per
//! product) and the quantity floor (nothing persisted at quantity <= 0), and
//! resynchronizes the full item list to the store after every mutation.

use std::sync::Arc;

use pomelo_core::{Price, ProductId};

use crate::models::{CartItem, Product};
use crate::store::{self, StateStore, StoreError, keys};

/// Shopping cart: ordered line items with derived totals.
///
/// Insertion order is preserved; adding an existing product updates its line
/// in place, new products append.
pub struct Cart {
    items: Vec<CartItem>,
    store: Arc<dyn StateStore>,
}

impl Cart {
    /// Rehydrate the cart from the store.
    ///
    /// An absent or corrupt `cart` record yields an empty cart.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the store cannot be read.
    pub fn load(store: Arc<dyn StateStore>) -> Result<Self, StoreError> {
        let items = store::load_or_default(&*store, keys::CART)?;
        Ok(Self { items, store })
    }

    /// Add `quantity` units of a product.
    ///
    /// If the product is already in the cart its line gains `quantity`
    /// (merge-on-add); otherwise a new line is appended with a snapshot of
    /// the product. Stock is not enforced here - the presentation layer
    /// disables further increments at the stock limit. Adding zero units is
    /// a no-op.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the updated cart cannot be persisted.
    pub fn add(&mut self, product: &Product, quantity: u32) -> Result<(), StoreError> {
        if quantity == 0 {
            return Ok(());
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product.id) {
            item.quantity = item.quantity.saturating_add(quantity);
        } else {
            self.items.push(CartItem {
                product_id: product.id.clone(),
                quantity,
                product: product.clone(),
            });
        }

        tracing::debug!(product = %product.id, quantity, "added to cart");
        self.sync()
    }

    /// Remove a product's line entirely. No-op if the product is not in the
    /// cart.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the updated cart cannot be persisted.
    pub fn remove(&mut self, product_id: &ProductId) -> Result<(), StoreError> {
        self.items.retain(|i| &i.product_id != product_id);
        self.sync()
    }

    /// Set a line's quantity to exactly `quantity` (absolute, not a delta).
    ///
    /// A quantity of zero behaves as [`Cart::remove`]. No-op if the product
    /// is not in the cart.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the updated cart cannot be persisted.
    pub fn set_quantity(&mut self, product_id: &ProductId, quantity: u32) -> Result<(), StoreError> {
        if quantity == 0 {
            return self.remove(product_id);
        }

        if let Some(item) = self.items.iter_mut().find(|i| &i.product_id == product_id) {
            item.quantity = quantity;
        }
        self.sync()
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the emptied cart cannot be persisted.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.items.clear();
        self.sync()
    }

    /// Whether the product has a line in the cart.
    #[must_use]
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.items.iter().any(|i| &i.product_id == product_id)
    }

    /// The line items, insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Number of distinct product lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Sum of line totals (unit price x quantity).
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.items.iter().map(CartItem::line_total).sum()
    }

    fn sync(&self) -> Result<(), StoreError> {
        store::persist(&*self.store, keys::CART, &self.items)
    }
}
