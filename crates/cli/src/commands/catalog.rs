//! Catalog browsing commands.

use clap::ValueEnum;

use pomelo_core::{CategoryId, Price, ProductId};
use pomelo_storefront::catalog::SortKey;
use pomelo_storefront::models::Product;
use pomelo_storefront::{AppError, Result, Storefront};

/// Sort order accepted on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortArg {
    /// Cheapest first
    PriceAsc,
    /// Most expensive first
    PriceDesc,
    /// Best rated first
    Rating,
    /// Alphabetical
    Name,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::PriceAsc => Self::PriceAsc,
            SortArg::PriceDesc => Self::PriceDesc,
            SortArg::Rating => Self::Rating,
            SortArg::Name => Self::Name,
        }
    }
}

pub fn list(
    storefront: &Storefront,
    category: Option<String>,
    sort: Option<SortArg>,
    min: Option<Price>,
    max: Option<Price>,
    featured: bool,
) -> Result<()> {
    let catalog = storefront.catalog();
    let mut products: Vec<&Product> = match sort {
        Some(arg) => catalog.sorted_products(arg.into()),
        None => catalog.products().iter().collect(),
    };

    if let Some(slug) = category {
        let id = CategoryId::new(slug);
        products.retain(|p| p.category == id);
    }
    if let Some(min) = min {
        products.retain(|p| p.price >= min);
    }
    if let Some(max) = max {
        products.retain(|p| p.price <= max);
    }
    if featured {
        products.retain(|p| p.featured);
    }

    if products.is_empty() {
        println!("No products match.");
        return Ok(());
    }

    for product in products {
        let mut markers = String::new();
        if storefront.cart.contains(&product.id) {
            markers.push_str(" [in cart]");
        }
        if storefront.wishlist.contains(&product.id) {
            markers.push_str(" [saved]");
        }
        let stock = if product.in_stock() {
            format!("{} in stock", product.stock)
        } else {
            "out of stock".to_owned()
        };
        println!(
            "{:<14} {:<26} {:>8}  {:.1}* ({} reviews)  {stock}{markers}",
            product.id, product.name, product.price, product.rating, product.review_count
        );
    }
    Ok(())
}

pub fn show(storefront: &Storefront, id: &str) -> Result<()> {
    let product_id = ProductId::new(id);
    let product = storefront
        .catalog()
        .product(&product_id)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    println!("{}  ({})", product.name, product.id);
    match (product.original_price, product.discount_percent()) {
        (Some(original), Some(percent)) => {
            println!("{}  (was {original}, {percent}% off)", product.price);
        }
        _ => println!("{}", product.price),
    }
    println!();
    println!("{}", product.description);
    println!();
    println!(
        "Category: {}   Rating: {:.1} ({} reviews)",
        product.category, product.rating, product.review_count
    );
    if product.in_stock() {
        println!("Stock: {}", product.stock);
    } else {
        println!("Stock: out of stock");
    }
    if !product.tags.is_empty() {
        println!("Tags: {}", product.tags.join(", "));
    }
    if storefront.cart.contains(&product.id) {
        println!("This product is in your cart.");
    }
    if storefront.wishlist.contains(&product.id) {
        println!("This product is on your wishlist.");
    }
    Ok(())
}

pub fn categories(storefront: &Storefront) -> Result<()> {
    for category in storefront.catalog().categories() {
        println!(
            "{:<14} {:<18} {} products",
            category.slug, category.name, category.product_count
        );
    }
    Ok(())
}
