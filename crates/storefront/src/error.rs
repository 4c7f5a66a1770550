//! Unified error handling.
//!
//! Provides a unified `AppError` type aggregating the per-module errors.
//! Nothing in this core is fatal to the process: store corruption recovers
//! to empty state before it ever reaches here, and missing-entity operations
//! are no-ops rather than errors. What remains is genuine I/O failure,
//! rejected auth in hardened mode, and checkout preconditions.

use thiserror::Error;

use crate::config::ConfigError;
use crate::services::auth::AuthError;
use crate::services::checkout::CheckoutError;
use crate::store::StoreError;

/// Application-level error type for the storefront session core.
#[derive(Debug, Error)]
pub enum AppError {
    /// Persistence operation failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Authentication operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Checkout operation failed.
    #[error("Checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    /// Message safe to show to the user.
    ///
    /// Internal detail (I/O paths, serialization messages) stays out of the
    /// presentation layer; auth failures map to a generic retryable message.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Store(_) => "Something went wrong saving your session".to_string(),
            Self::Auth(err) => match err {
                AuthError::InvalidEmail(_) => "Please enter a valid email address".to_string(),
                AuthError::InvalidCredentials => "Invalid credentials".to_string(),
                AuthError::Store(_) => "Something went wrong, please try again".to_string(),
            },
            Self::Checkout(err) => match err {
                CheckoutError::NotAuthenticated => "Please log in to place your order".to_string(),
                CheckoutError::EmptyCart => "Your cart is empty".to_string(),
                CheckoutError::Store(_) => "Something went wrong, please try again".to_string(),
            },
            Self::Config(_) => "Invalid configuration".to_string(),
            Self::NotFound(what) => format!("Not found: {what}"),
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
