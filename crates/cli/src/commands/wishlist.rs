//! Wishlist commands.

use pomelo_core::ProductId;
use pomelo_storefront::{Result, Storefront};

pub fn add(storefront: &mut Storefront, id: &str) -> Result<()> {
    storefront.wishlist.add(ProductId::new(id))?;
    println!("Saved {id}.");
    Ok(())
}

pub fn remove(storefront: &mut Storefront, id: &str) -> Result<()> {
    storefront.wishlist.remove(&ProductId::new(id))?;
    println!("Forgot {id}.");
    Ok(())
}

pub fn toggle(storefront: &mut Storefront, id: &str) -> Result<()> {
    let saved = storefront.wishlist.toggle(&ProductId::new(id))?;
    if saved {
        println!("Saved {id}.");
    } else {
        println!("Forgot {id}.");
    }
    Ok(())
}

pub fn show(storefront: &Storefront) -> Result<()> {
    if storefront.wishlist.is_empty() {
        println!("Your wishlist is empty.");
        return Ok(());
    }

    for product_id in storefront.wishlist.items() {
        match storefront.catalog().product(product_id) {
            Some(product) => {
                println!("{:<14} {:<26} {:>8}", product.id, product.name, product.price);
            }
            // Saved before the product left the catalog
            None => println!("{product_id:<14} (no longer available)"),
        }
    }
    Ok(())
}
