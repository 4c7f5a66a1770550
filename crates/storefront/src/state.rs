//! Session state bundle.
//!
//! [`Storefront`] replaces ambient context lookup with explicit handles: the
//! managers are constructed exactly once, rehydrated from the store during
//! construction, and passed by reference to whatever needs them. There is no
//! way to reach a manager before initialization.

use std::sync::Arc;

use secrecy::SecretString;

use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::error::Result;
use crate::models::{Order, User};
use crate::services::{AuthSession, Cart, Checkout, ThemePreference, Wishlist};
use crate::store::{FileStore, StateStore};

/// All session state for one storefront profile.
///
/// Mutating operations go through the public manager fields; the catalog is
/// read-only. The managers share one store handle, so state written by one
/// is visible to a future session rehydrated from the same profile.
pub struct Storefront {
    /// Authentication state.
    pub auth: AuthSession,
    /// Shopping cart.
    pub cart: Cart,
    /// Saved products.
    pub wishlist: Wishlist,
    /// UI theme preference.
    pub theme: ThemePreference,
    /// Simulated checkout flow.
    pub checkout: Checkout,
    catalog: Catalog,
}

impl Storefront {
    /// Open the storefront over a file store in `config.data_dir`, with the
    /// built-in demo catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created or the
    /// store cannot be read.
    pub fn open(config: &StorefrontConfig) -> Result<Self> {
        let store: Arc<dyn StateStore> = Arc::new(FileStore::open(&config.data_dir)?);
        Self::with_store(config, store, Catalog::demo())
    }

    /// Open the storefront over an injected store and catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn with_store(
        config: &StorefrontConfig,
        store: Arc<dyn StateStore>,
        catalog: Catalog,
    ) -> Result<Self> {
        Ok(Self {
            auth: AuthSession::load(Arc::clone(&store), config)?,
            cart: Cart::load(Arc::clone(&store))?,
            wishlist: Wishlist::load(Arc::clone(&store))?,
            theme: ThemePreference::load(store)?,
            checkout: Checkout::new(config),
            catalog,
        })
    }

    /// The read-only catalog collaborator.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Log in against the catalog's known accounts.
    ///
    /// # Errors
    ///
    /// See [`AuthSession::login`].
    pub async fn login(&mut self, email: &str, password: &SecretString) -> Result<User> {
        let user = self.auth.login(email, password, &self.catalog).await?;
        Ok(user)
    }

    /// Place an order for the current cart.
    ///
    /// # Errors
    ///
    /// See [`Checkout::place_order`].
    pub async fn place_order(&mut self) -> Result<Order> {
        let order = self.checkout.place_order(&self.auth, &mut self.cart).await?;
        Ok(order)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_fresh_profile_starts_empty() {
        let storefront = Storefront::with_store(
            &StorefrontConfig::without_delays(),
            Arc::new(MemoryStore::new()),
            Catalog::demo(),
        )
        .unwrap();

        assert!(!storefront.auth.is_authenticated());
        assert!(storefront.cart.is_empty());
        assert!(storefront.wishlist.is_empty());
    }

    #[tokio::test]
    async fn test_login_and_place_order_via_bundle() {
        let config = StorefrontConfig::without_delays();
        let mut storefront =
            Storefront::with_store(&config, Arc::new(MemoryStore::new()), Catalog::demo())
                .unwrap();

        storefront
            .login("jane@example.com", &SecretString::from("pw"))
            .await
            .unwrap();

        let product = storefront
            .catalog()
            .product(&pomelo_core::ProductId::new("p-tote"))
            .unwrap()
            .clone();
        storefront.cart.add(&product, 2).unwrap();

        let order = storefront.place_order().await.unwrap();
        assert_eq!(order.items.len(), 1);
        assert!(storefront.cart.is_empty());
    }
}
