//! Integration tests for Pomelo.
//!
//! Scenario tests that exercise the session core the way the presentation
//! layer does: a [`TestContext`] stands in for one browser profile, backed
//! by a file store in a temporary directory so "page refreshes" can be
//! simulated by reopening the storefront over the same directory.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p pomelo-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_session` - cart invariants and persistence across reloads
//! - `auth_session` - demo/hardened login flows and session persistence
//! - `checkout_flow` - totals math and simulated order placement

use tempfile::TempDir;

use pomelo_storefront::{Storefront, StorefrontConfig};

/// One simulated browser profile.
pub struct TestContext {
    config: StorefrontConfig,
    // Kept alive so the profile directory outlives reloads
    data_dir: TempDir,
}

impl TestContext {
    /// Create a fresh profile with no persisted state and no simulated
    /// delays.
    ///
    /// # Panics
    ///
    /// Panics if the temporary profile directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        let data_dir = TempDir::new().expect("create temp profile dir");
        let config = StorefrontConfig {
            data_dir: data_dir.path().to_path_buf(),
            ..StorefrontConfig::without_delays()
        };
        Self { config, data_dir }
    }

    /// The profile configuration.
    #[must_use]
    pub const fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// Open the storefront over this profile. Call again to simulate a
    /// page refresh: the second session rehydrates from the same store.
    ///
    /// # Panics
    ///
    /// Panics if the store cannot be opened.
    #[must_use]
    pub fn open(&self) -> Storefront {
        Storefront::open(&self.config).expect("open storefront")
    }

    /// Overwrite one stored key with a raw blob, bypassing the managers.
    /// Used to simulate corruption and foreign writes.
    ///
    /// # Panics
    ///
    /// Panics if the blob cannot be written.
    pub fn write_raw(&self, key: &str, blob: &str) {
        let path = self.data_dir.path().join(format!("{key}.json"));
        std::fs::write(path, blob).expect("write raw blob");
    }

    /// Read one stored key's raw blob, bypassing the managers. Returns
    /// `None` when the key is absent.
    #[must_use]
    pub fn read_raw(&self, key: &str) -> Option<String> {
        let path = self.data_dir.path().join(format!("{key}.json"));
        std::fs::read_to_string(path).ok()
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
