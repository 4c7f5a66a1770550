//! Order receipt type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use pomelo_core::{OrderId, OrderStatus, Price, UserId};

use super::cart::CartItem;

/// Receipt produced by the simulated checkout.
///
/// Orders exist only in memory - there is no order persistence in this
/// demo - but the record carries everything a confirmation page shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Unique order ID.
    pub id: OrderId,
    /// User who placed the order.
    pub user_id: UserId,
    /// Line items as they were at checkout.
    pub items: Vec<CartItem>,
    /// Sum of line totals.
    pub subtotal: Price,
    /// Shipping charge applied.
    pub shipping: Price,
    /// Tax applied.
    pub tax: Price,
    /// Grand total.
    pub total: Price,
    /// Order lifecycle status.
    pub status: OrderStatus,
    /// When the order was placed.
    pub created_at: DateTime<Utc>,
}
