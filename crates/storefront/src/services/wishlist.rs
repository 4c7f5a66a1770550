//! Wishlist state manager.
//!
//! A membership set of product ids kept as an insertion-ordered sequence
//! with no duplicates, fully resynchronized to the store on every mutation.

use std::sync::Arc;

use pomelo_core::ProductId;

use crate::store::{self, StateStore, StoreError, keys};

/// Saved-for-later product ids.
pub struct Wishlist {
    items: Vec<ProductId>,
    store: Arc<dyn StateStore>,
}

impl Wishlist {
    /// Rehydrate the wishlist from the store.
    ///
    /// An absent or corrupt `wishlist` record yields an empty wishlist.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the store cannot be read.
    pub fn load(store: Arc<dyn StateStore>) -> Result<Self, StoreError> {
        let items = store::load_or_default(&*store, keys::WISHLIST)?;
        Ok(Self { items, store })
    }

    /// Add a product id. Idempotent: adding an id already present changes
    /// nothing.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the updated list cannot be persisted.
    pub fn add(&mut self, product_id: ProductId) -> Result<(), StoreError> {
        if !self.contains(&product_id) {
            self.items.push(product_id);
        }
        self.sync()
    }

    /// Remove a product id. No-op if absent.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the updated list cannot be persisted.
    pub fn remove(&mut self, product_id: &ProductId) -> Result<(), StoreError> {
        self.items.retain(|id| id != product_id);
        self.sync()
    }

    /// Remove the id if present, add it otherwise. One mutation, one sync.
    ///
    /// Returns `true` when the product is in the wishlist afterwards.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the updated list cannot be persisted.
    pub fn toggle(&mut self, product_id: &ProductId) -> Result<bool, StoreError> {
        if self.contains(product_id) {
            self.remove(product_id)?;
            Ok(false)
        } else {
            self.add(product_id.clone())?;
            Ok(true)
        }
    }

    /// Whether the product id is saved.
    #[must_use]
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.items.contains(product_id)
    }

    /// The saved ids, insertion order.
    #[must_use]
    pub fn items(&self) -> &[ProductId] {
        &self.items
    }

    /// Number of saved ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing is saved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn sync(&self) -> Result<(), StoreError> {
        store::persist(&*self.store, keys::WISHLIST, &self.items)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn empty_wishlist() -> Wishlist {
        Wishlist::load(Arc::new(MemoryStore::new())).unwrap()
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut wishlist = empty_wishlist();
        wishlist.add(ProductId::new("p-1")).unwrap();
        wishlist.add(ProductId::new("p-1")).unwrap();
        assert_eq!(wishlist.len(), 1);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut wishlist = empty_wishlist();
        wishlist.add(ProductId::new("p-1")).unwrap();
        wishlist.remove(&ProductId::new("p-404")).unwrap();
        assert_eq!(wishlist.items(), [ProductId::new("p-1")]);
    }

    #[test]
    fn test_toggle_round_trip() {
        let mut wishlist = empty_wishlist();
        let id = ProductId::new("p-1");

        assert!(wishlist.toggle(&id).unwrap());
        assert!(wishlist.contains(&id));

        assert!(!wishlist.toggle(&id).unwrap());
        assert!(!wishlist.contains(&id));
        assert!(wishlist.is_empty());
    }

    #[test]
    fn test_insertion_order() {
        let mut wishlist = empty_wishlist();
        wishlist.add(ProductId::new("p-2")).unwrap();
        wishlist.add(ProductId::new("p-1")).unwrap();
        wishlist.add(ProductId::new("p-3")).unwrap();

        let ids: Vec<&str> = wishlist.items().iter().map(ProductId::as_str).collect();
        assert_eq!(ids, vec!["p-2", "p-1", "p-3"]);
    }

    #[test]
    fn test_reload_reproduces_wishlist() {
        let store: Arc<dyn StateStore> = Arc::new(MemoryStore::new());
        let mut wishlist = Wishlist::load(Arc::clone(&store)).unwrap();
        wishlist.add(ProductId::new("p-1")).unwrap();
        wishlist.add(ProductId::new("p-2")).unwrap();

        let reloaded = Wishlist::load(store).unwrap();
        assert_eq!(reloaded.items(), wishlist.items());
    }
}
