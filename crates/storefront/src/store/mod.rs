//! Durable key-value persistence for session state.
//!
//! The store holds opaque string blobs keyed by name, mirroring the browser
//! local-storage contract the managers were designed around: `read` returns
//! the blob or nothing, `write` replaces it wholesale, `remove` deletes the
//! key. Last write wins; there is no cross-process coordination.
//!
//! Typed access goes through [`load_or_default`] and [`persist`]. A stored
//! blob that fails to decode is discarded with a warning and replaced by the
//! empty initial state - a corrupt store must never surface an error to the
//! presentation layer.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Storage keys for persisted session state.
pub mod keys {
    /// Key for the logged-in user record (absent = anonymous).
    pub const USER: &str = "user";

    /// Key for the cart line items (absent = empty cart).
    pub const CART: &str = "cart";

    /// Key for the wishlist product ids (absent = empty wishlist).
    pub const WISHLIST: &str = "wishlist";

    /// Key for the theme preference (absent = default theme).
    pub const THEME: &str = "theme";
}

/// Errors from the persistence layer.
///
/// Decode failures are deliberately not represented here: they are recovered
/// inside [`load_or_default`] and never escape.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Underlying storage I/O failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// State could not be serialized for storage.
    #[error("failed to encode state: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Durable string-blob store keyed by name.
pub trait StateStore: Send + Sync {
    /// Read the blob stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the backing storage cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the blob stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the backing storage cannot be written.
    fn write(&self, key: &str, blob: &str) -> Result<(), StoreError>;

    /// Delete the blob stored under `key`. Removing an absent key is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the backing storage cannot be written.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Load and decode the state stored under `key`.
///
/// An absent key yields the empty initial state. A blob that fails to decode
/// (corrupt, or written by an incompatible revision - there is no schema
/// versioning) is discarded with a warning and also yields the initial state.
///
/// # Errors
///
/// Returns `StoreError::Io` only when the store itself cannot be read.
pub fn load_or_default<T>(store: &dyn StateStore, key: &str) -> Result<T, StoreError>
where
    T: DeserializeOwned + Default,
{
    let Some(blob) = store.read(key)? else {
        return Ok(T::default());
    };

    match serde_json::from_str(&blob) {
        Ok(value) => Ok(value),
        Err(err) => {
            tracing::warn!(key, error = %err, "discarding corrupt stored state");
            Ok(T::default())
        }
    }
}

/// Serialize `value` and store it under `key`.
///
/// # Errors
///
/// Returns `StoreError::Encode` if serialization fails, or `StoreError::Io`
/// if the store cannot be written.
pub fn persist<T: Serialize>(
    store: &dyn StateStore,
    key: &str,
    value: &T,
) -> Result<(), StoreError> {
    let blob = serde_json::to_string(value)?;
    store.write(key, &blob)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_load_absent_key_is_default() {
        let store = MemoryStore::new();
        let items: Vec<String> = load_or_default(&store, keys::CART).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_persist_then_load_roundtrip() {
        let store = MemoryStore::new();
        let items = vec!["p-1".to_owned(), "p-2".to_owned()];

        persist(&store, keys::WISHLIST, &items).unwrap();
        let loaded: Vec<String> = load_or_default(&store, keys::WISHLIST).unwrap();
        assert_eq!(loaded, items);
    }

    #[test]
    fn test_corrupt_blob_falls_back_to_default() {
        let store = MemoryStore::new();
        store.write(keys::CART, "{not valid json").unwrap();

        let items: Vec<String> = load_or_default(&store, keys::CART).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_wrong_shape_blob_falls_back_to_default() {
        let store = MemoryStore::new();
        // Valid JSON, wrong shape for a list
        store.write(keys::CART, "{\"quantity\": 3}").unwrap();

        let items: Vec<String> = load_or_default(&store, keys::CART).unwrap();
        assert!(items.is_empty());
    }
}
