//! Role and status enums for various entities.

use serde::{Deserialize, Serialize};

/// Account role.
///
/// Every account is a customer unless it was seeded as an admin; there is
/// no privilege escalation path at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular shopper.
    #[default]
    Customer,
    /// Store administrator.
    Admin,
}

impl Role {
    /// Whether this role grants admin access.
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

/// Order lifecycle status.
///
/// Orders placed through the demo checkout start as [`OrderStatus::Pending`];
/// the remaining states exist for catalog/receipt display parity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Order received, payment simulated but not "captured".
    #[default]
    Pending,
    /// Order being prepared.
    Processing,
    /// Order handed to the carrier.
    Shipped,
    /// Order delivered.
    Delivered,
    /// Order cancelled.
    Cancelled,
}
