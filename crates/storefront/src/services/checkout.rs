//! Checkout totals and simulated order placement.
//!
//! Pricing rules: shipping is free once the subtotal passes $50, otherwise a
//! $10 flat rate; tax is a flat 10% of the subtotal. All arithmetic is
//! decimal-exact.

use std::time::Duration;

use chrono::Utc;
use rust_decimal::Decimal;
use thiserror::Error;

use pomelo_core::{OrderId, OrderStatus, Price};

use crate::config::StorefrontConfig;
use crate::models::Order;
use crate::services::auth::AuthSession;
use crate::services::cart::Cart;
use crate::store::StoreError;

/// Subtotal above which shipping is free, in cents.
const FREE_SHIPPING_THRESHOLD_CENTS: i64 = 50_00;

/// Flat shipping rate below the threshold, in cents.
const FLAT_SHIPPING_CENTS: i64 = 10_00;

/// Tax rate applied to the subtotal.
fn tax_rate() -> Decimal {
    Decimal::new(10, 2) // 0.10
}

/// Errors that can occur while placing an order.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// No user is logged in.
    #[error("not authenticated")]
    NotAuthenticated,

    /// The cart has no lines.
    #[error("cart is empty")]
    EmptyCart,

    /// Persistence error while clearing the cart.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Order cost breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderSummary {
    /// Sum of cart line totals.
    pub subtotal: Price,
    /// Shipping charge ($0 above the free-shipping threshold).
    pub shipping: Price,
    /// 10% of the subtotal.
    pub tax: Price,
    /// Subtotal + shipping + tax.
    pub total: Price,
}

impl OrderSummary {
    /// Compute the breakdown for a cart's current contents.
    #[must_use]
    pub fn for_cart(cart: &Cart) -> Self {
        Self::for_subtotal(cart.subtotal())
    }

    /// Compute the breakdown for a given subtotal.
    ///
    /// Shipping is free only strictly above the threshold: a cart at
    /// exactly $50.00 still pays the flat rate.
    #[must_use]
    pub fn for_subtotal(subtotal: Price) -> Self {
        let shipping = if subtotal > Price::from_cents(FREE_SHIPPING_THRESHOLD_CENTS) {
            Price::ZERO
        } else {
            Price::from_cents(FLAT_SHIPPING_CENTS)
        };
        let tax = Price::new(subtotal.amount() * tax_rate());
        let total = subtotal + shipping + tax;

        Self {
            subtotal,
            shipping,
            tax,
            total,
        }
    }
}

/// Simulated checkout flow.
pub struct Checkout {
    processing_delay: Duration,
}

impl Checkout {
    /// Build the checkout flow from configuration.
    #[must_use]
    pub const fn new(config: &StorefrontConfig) -> Self {
        Self {
            processing_delay: config.checkout_delay,
        }
    }

    /// Place an order for the cart's contents.
    ///
    /// Requires a logged-in user and a non-empty cart. Simulates payment
    /// processing with a delay, then produces an [`Order`] receipt and
    /// clears the cart. The receipt is not persisted anywhere - there is no
    /// order history in this demo.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::NotAuthenticated` or `CheckoutError::EmptyCart`
    /// when the preconditions fail, or `CheckoutError::Store` if clearing
    /// the cart cannot be persisted.
    pub async fn place_order(
        &self,
        auth: &AuthSession,
        cart: &mut Cart,
    ) -> Result<Order, CheckoutError> {
        let user = auth.current_user().ok_or(CheckoutError::NotAuthenticated)?;
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let summary = OrderSummary::for_cart(cart);
        let items = cart.items().to_vec();

        tokio::time::sleep(self.processing_delay).await;

        let order = Order {
            id: OrderId::generate(),
            user_id: user.id.clone(),
            items,
            subtotal: summary.subtotal,
            shipping: summary.shipping,
            tax: summary.tax,
            total: summary.total,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        };

        cart.clear()?;
        tracing::info!(order = %order.id, total = %order.total, "order placed");

        Ok(order)
    }
}
