//! Authentication error types.

use thiserror::Error;

use crate::store::StoreError;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] pomelo_core::EmailError),

    /// Unknown account, and demo mode is off.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Persistence error while saving the session.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
