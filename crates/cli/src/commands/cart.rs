//! Cart commands.

use pomelo_core::ProductId;
use pomelo_storefront::{AppError, Result, Storefront};

pub fn add(storefront: &mut Storefront, id: &str, quantity: u32) -> Result<()> {
    let product_id = ProductId::new(id);
    let product = storefront
        .catalog()
        .product(&product_id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    storefront.cart.add(&product, quantity)?;
    println!(
        "Added {quantity} x {} - cart now holds {} item(s).",
        product.name,
        storefront.cart.item_count()
    );
    Ok(())
}

pub fn remove(storefront: &mut Storefront, id: &str) -> Result<()> {
    let product_id = ProductId::new(id);
    storefront.cart.remove(&product_id)?;
    println!("Removed {id} - cart now holds {} item(s).", storefront.cart.item_count());
    Ok(())
}

pub fn set_quantity(storefront: &mut Storefront, id: &str, quantity: u32) -> Result<()> {
    let product_id = ProductId::new(id);
    storefront.cart.set_quantity(&product_id, quantity)?;
    println!("Cart now holds {} item(s).", storefront.cart.item_count());
    Ok(())
}

pub fn show(storefront: &Storefront) -> Result<()> {
    if storefront.cart.is_empty() {
        println!("Your cart is empty.");
        return Ok(());
    }

    for item in storefront.cart.items() {
        println!(
            "{:<14} {:>3} x {:<26} {:>8} each = {}",
            item.product_id,
            item.quantity,
            item.product.name,
            item.product.price,
            item.line_total()
        );
    }
    println!();
    println!(
        "{} item(s), subtotal {}",
        storefront.cart.item_count(),
        storefront.cart.subtotal()
    );
    Ok(())
}

pub fn clear(storefront: &mut Storefront) -> Result<()> {
    storefront.cart.clear()?;
    println!("Cart emptied.");
    Ok(())
}
