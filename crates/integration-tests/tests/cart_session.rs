//! Cart and wishlist behavior across a simulated browser session.
//!
//! Each test opens a fresh profile; reopening the storefront over the same
//! profile stands in for a page refresh.

use pomelo_core::{Price, ProductId};
use pomelo_storefront::models::Product;

use pomelo_integration_tests::TestContext;

fn demo_product(storefront: &pomelo_storefront::Storefront, id: &str) -> Product {
    storefront
        .catalog()
        .product(&ProductId::new(id))
        .unwrap_or_else(|| panic!("demo catalog should contain {id}"))
        .clone()
}

// =============================================================================
// Cart invariants
// =============================================================================

#[test]
fn test_item_count_sums_quantities_across_distinct_products() {
    let ctx = TestContext::new();
    let mut storefront = ctx.open();

    let tote = demo_product(&storefront, "p-tote");
    let tee = demo_product(&storefront, "p-tee");
    let lamp = demo_product(&storefront, "p-lamp");

    storefront.cart.add(&tote, 2).unwrap();
    storefront.cart.add(&tee, 3).unwrap();
    storefront.cart.add(&lamp, 1).unwrap();

    assert_eq!(storefront.cart.len(), 3);
    assert_eq!(storefront.cart.item_count(), 6);
}

#[test]
fn test_merge_on_add_keeps_one_line_per_product() {
    let ctx = TestContext::new();
    let mut storefront = ctx.open();
    let tote = demo_product(&storefront, "p-tote");

    storefront.cart.add(&tote, 2).unwrap();
    storefront.cart.add(&tote, 3).unwrap();

    assert_eq!(storefront.cart.len(), 1);
    assert_eq!(storefront.cart.item_count(), 5);
    assert_eq!(
        storefront.cart.subtotal(),
        Price::from_cents(5 * 30_00),
        "five totes at $30.00"
    );
}

#[test]
fn test_update_to_zero_equals_remove() {
    let ctx = TestContext::new();
    let mut storefront = ctx.open();
    let tote = demo_product(&storefront, "p-tote");

    storefront.cart.add(&tote, 2).unwrap();
    storefront.cart.set_quantity(&tote.id, 0).unwrap();

    assert!(!storefront.cart.contains(&tote.id));
    assert!(storefront.cart.is_empty());
}

#[test]
fn test_update_quantity_is_idempotent() {
    let ctx = TestContext::new();
    let mut storefront = ctx.open();
    let tote = demo_product(&storefront, "p-tote");

    storefront.cart.add(&tote, 1).unwrap();
    storefront.cart.set_quantity(&tote.id, 4).unwrap();
    storefront.cart.set_quantity(&tote.id, 4).unwrap();

    assert_eq!(storefront.cart.item_count(), 4);
}

#[test]
fn test_subtotal_snapshots_price_at_add_time() {
    let ctx = TestContext::new();
    let mut storefront = ctx.open();

    let mut tote = demo_product(&storefront, "p-tote");
    storefront.cart.add(&tote, 1).unwrap();

    // A later catalog price change must not affect the existing line
    tote.price = Price::from_cents(99_00);
    assert_eq!(storefront.cart.subtotal(), Price::from_cents(30_00));
}

// =============================================================================
// Persistence across reloads
// =============================================================================

#[test]
fn test_cart_survives_refresh() {
    let ctx = TestContext::new();
    {
        let mut storefront = ctx.open();
        let tote = demo_product(&storefront, "p-tote");
        let tee = demo_product(&storefront, "p-tee");
        storefront.cart.add(&tote, 2).unwrap();
        storefront.cart.add(&tee, 1).unwrap();
    }

    let reloaded = ctx.open();
    assert_eq!(reloaded.cart.len(), 2);
    assert_eq!(reloaded.cart.item_count(), 3);
    assert_eq!(reloaded.cart.subtotal(), Price::from_cents(84_00));
}

#[test]
fn test_stored_cart_blob_shape() {
    let ctx = TestContext::new();
    let mut storefront = ctx.open();
    let tote = demo_product(&storefront, "p-tote");
    storefront.cart.add(&tote, 2).unwrap();

    let blob = ctx.read_raw("cart").expect("cart blob written");
    let parsed: serde_json::Value = serde_json::from_str(&blob).unwrap();

    let lines = parsed.as_array().expect("cart persists as a list");
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["product_id"], "p-tote");
    assert_eq!(lines[0]["quantity"], 2);
    // Full product snapshot rides along with the line
    assert_eq!(lines[0]["product"]["name"], "Field Canvas Tote");
}

#[test]
fn test_corrupt_cart_blob_resets_to_empty() {
    let ctx = TestContext::new();
    {
        let mut storefront = ctx.open();
        let tote = demo_product(&storefront, "p-tote");
        storefront.cart.add(&tote, 2).unwrap();
    }

    ctx.write_raw("cart", "{\"mangled\": tru");

    let reloaded = ctx.open();
    assert!(reloaded.cart.is_empty(), "corruption resets, never errors");
}

#[test]
fn test_clear_cart_persists() {
    let ctx = TestContext::new();
    {
        let mut storefront = ctx.open();
        let tote = demo_product(&storefront, "p-tote");
        storefront.cart.add(&tote, 2).unwrap();
        storefront.cart.clear().unwrap();
    }

    let reloaded = ctx.open();
    assert!(reloaded.cart.is_empty());
}

// =============================================================================
// Wishlist
// =============================================================================

#[test]
fn test_toggle_twice_round_trips_membership() {
    let ctx = TestContext::new();
    let mut storefront = ctx.open();
    let id = ProductId::new("p-watch");

    assert!(!storefront.wishlist.contains(&id));
    storefront.wishlist.toggle(&id).unwrap();
    storefront.wishlist.toggle(&id).unwrap();
    assert!(!storefront.wishlist.contains(&id));
}

#[test]
fn test_wishlist_survives_refresh_without_duplicates() {
    let ctx = TestContext::new();
    {
        let mut storefront = ctx.open();
        storefront.wishlist.add(ProductId::new("p-watch")).unwrap();
        storefront.wishlist.add(ProductId::new("p-watch")).unwrap();
        storefront.wishlist.add(ProductId::new("p-lamp")).unwrap();
    }

    let reloaded = ctx.open();
    assert_eq!(reloaded.wishlist.len(), 2);
    assert!(reloaded.wishlist.contains(&ProductId::new("p-watch")));
    assert!(reloaded.wishlist.contains(&ProductId::new("p-lamp")));
}

#[test]
fn test_wishlist_and_cart_are_independent() {
    let ctx = TestContext::new();
    let mut storefront = ctx.open();
    let tote = demo_product(&storefront, "p-tote");

    storefront.cart.add(&tote, 1).unwrap();
    storefront.wishlist.add(ProductId::new("p-watch")).unwrap();

    storefront.cart.clear().unwrap();
    assert!(storefront.wishlist.contains(&ProductId::new("p-watch")));
}
