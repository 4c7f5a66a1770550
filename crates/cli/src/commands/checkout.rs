//! Checkout commands.

use pomelo_storefront::services::OrderSummary;
use pomelo_storefront::{Result, Storefront};

pub fn summary(storefront: &Storefront) -> Result<()> {
    if storefront.cart.is_empty() {
        println!("Your cart is empty.");
        return Ok(());
    }

    let summary = OrderSummary::for_cart(&storefront.cart);
    println!("Subtotal: {:>10}", summary.subtotal.display());
    if summary.shipping == pomelo_core::Price::ZERO {
        println!("Shipping:       FREE");
    } else {
        println!("Shipping: {:>10}", summary.shipping.display());
    }
    println!("Tax:      {:>10}", summary.tax.display());
    println!("Total:    {:>10}", summary.total.display());
    Ok(())
}

pub async fn place(storefront: &mut Storefront) -> Result<()> {
    println!("Processing your order...");
    let order = storefront.place_order().await?;

    println!();
    println!("Order placed! Confirmation {}", order.id);
    for item in &order.items {
        println!("  {} x {}", item.quantity, item.product.name);
    }
    println!("Total charged: {}", order.total);
    Ok(())
}
