//! Session state managers.
//!
//! Each manager owns one slice of session state, mutates it through explicit
//! operations, and re-synchronizes the full record to the store after every
//! mutation. Derived values (item count, subtotal) are recomputed from a
//! full scan on every read; cart sizes are bounded by human shopping
//! behavior, so nothing is cached.

pub mod auth;
pub mod cart;
pub mod checkout;
pub mod theme;
pub mod wishlist;

pub use auth::AuthSession;
pub use cart::Cart;
pub use checkout::{Checkout, OrderSummary};
pub use theme::{Theme, ThemePreference};
pub use wishlist::Wishlist;
