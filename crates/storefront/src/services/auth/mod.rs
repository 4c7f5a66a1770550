//! Authentication state manager.
//!
//! Demo-grade authentication: the password is carried as a [`SecretString`]
//! so it can never leak into logs, but it is deliberately never verified.
//! In demo mode (the default) login always succeeds - a known email installs
//! the seeded account, an unknown one gets a fresh customer account
//! synthesized from the address. The hardened variant rejects unknown emails
//! instead.

mod error;

pub use error::AuthError;

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use rand::Rng;
use secrecy::SecretString;

use pomelo_core::{Email, Role, UserId};

use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::models::User;
use crate::store::{self, StateStore, StoreError, keys};

/// Session authentication state.
///
/// At most one user is active; `None` means anonymous. Every change is
/// synchronized to the store under the `user` key; logout removes the key
/// rather than writing an empty marker.
pub struct AuthSession {
    current_user: Option<User>,
    demo_auth: bool,
    network_delay: Duration,
    store: Arc<dyn StateStore>,
}

impl AuthSession {
    /// Rehydrate the session from the store.
    ///
    /// An absent or corrupt `user` record yields an anonymous session.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the store cannot be read.
    pub fn load(store: Arc<dyn StateStore>, config: &StorefrontConfig) -> Result<Self, StoreError> {
        let current_user = store::load_or_default(&*store, keys::USER)?;
        Ok(Self {
            current_user,
            demo_auth: config.demo_auth,
            network_delay: config.network_delay,
            store,
        })
    }

    /// Log in with an email address.
    ///
    /// Simulates bounded network latency, then looks the email up among the
    /// known accounts. Unknown emails succeed in demo mode by synthesizing a
    /// customer account named after the email's local part; with demo mode
    /// off they fail with [`AuthError::InvalidCredentials`]. The password is
    /// accepted for any account either way - that is the documented contract
    /// of this demo, not an oversight.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` for a malformed address,
    /// `AuthError::InvalidCredentials` for an unknown email in hardened
    /// mode, or `AuthError::Store` if the session cannot be persisted.
    pub async fn login(
        &mut self,
        email: &str,
        _password: &SecretString,
        directory: &Catalog,
    ) -> Result<User, AuthError> {
        let email = Email::parse(email)?;

        simulate_network(self.network_delay).await;

        if let Some(known) = directory.user_by_email(&email) {
            let user = known.clone();
            return Ok(self.install(user)?);
        }

        if !self.demo_auth {
            tracing::info!(email = %email, "login rejected: unknown account");
            return Err(AuthError::InvalidCredentials);
        }

        let user = User {
            id: UserId::generate(),
            name: email.local_part().to_owned(),
            email,
            avatar: None,
            role: Role::Customer,
            created_at: Utc::now(),
        };
        Ok(self.install(user)?)
    }

    /// Create an account and log it in. Always succeeds for a well-formed
    /// email; the password is stored nowhere.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` for a malformed address or
    /// `AuthError::Store` if the session cannot be persisted.
    pub async fn signup(
        &mut self,
        email: &str,
        _password: &SecretString,
        name: &str,
    ) -> Result<User, AuthError> {
        let email = Email::parse(email)?;

        simulate_network(self.network_delay).await;

        let user = User {
            id: UserId::generate(),
            email,
            name: name.to_owned(),
            avatar: Some(format!(
                "https://api.dicebear.com/7.x/avataaars/svg?seed={name}"
            )),
            role: Role::Customer,
            created_at: Utc::now(),
        };
        Ok(self.install(user)?)
    }

    /// Clear the session and remove the persisted record.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the key cannot be removed.
    pub fn logout(&mut self) -> Result<(), StoreError> {
        if let Some(user) = self.current_user.take() {
            tracing::info!(user = %user.id, "logged out");
        }
        self.store.remove(keys::USER)
    }

    /// The active user, if any.
    #[must_use]
    pub const fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    /// Whether a user is logged in.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }

    /// Whether the active user has the admin role.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.current_user
            .as_ref()
            .is_some_and(|u| u.role.is_admin())
    }

    fn install(&mut self, user: User) -> Result<User, StoreError> {
        store::persist(&*self.store, keys::USER, &user)?;
        tracing::info!(user = %user.id, "logged in");
        self.current_user = Some(user.clone());
        Ok(user)
    }
}

/// Sleep for a bounded, jittered "network" delay.
async fn simulate_network(bound: Duration) {
    if bound.is_zero() {
        return;
    }
    let max = u64::try_from(bound.as_millis()).unwrap_or(u64::MAX);
    let millis = rand::rng().random_range(max / 2..=max);
    tokio::time::sleep(Duration::from_millis(millis)).await;
}
