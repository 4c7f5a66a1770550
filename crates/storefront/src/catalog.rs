//! In-memory, read-only catalog collaborator.
//!
//! Supplies the product and category records the session managers operate
//! against, plus the known demo accounts the auth manager checks at login.
//! Queries are synchronous; the session core never mutates catalog records.

use chrono::DateTime;

use pomelo_core::{CategoryId, Email, Price, ProductId, Role, UserId};

use crate::models::{Category, Product, User};

/// Sort order for catalog listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Cheapest first.
    PriceAsc,
    /// Most expensive first.
    PriceDesc,
    /// Best rated first.
    Rating,
    /// Alphabetical by name.
    Name,
}

/// Read-only product/category/account directory.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<Category>,
    known_users: Vec<User>,
}

impl Catalog {
    /// Build a catalog from explicit records.
    #[must_use]
    pub const fn new(
        products: Vec<Product>,
        categories: Vec<Category>,
        known_users: Vec<User>,
    ) -> Self {
        Self {
            products,
            categories,
            known_users,
        }
    }

    /// The built-in demo catalog: a handful of products across four
    /// categories and two seeded accounts (one admin, one customer).
    #[must_use]
    pub fn demo() -> Self {
        Self::new(demo_products(), demo_categories(), demo_users())
    }

    /// All products, catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// All categories.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a product by id.
    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Look up a category by id.
    #[must_use]
    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }

    /// Products belonging to a category.
    #[must_use]
    pub fn products_in_category(&self, id: &CategoryId) -> Vec<&Product> {
        self.products.iter().filter(|p| &p.category == id).collect()
    }

    /// Products priced within `[min, max]`, inclusive.
    #[must_use]
    pub fn products_in_price_range(&self, min: Price, max: Price) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.price >= min && p.price <= max)
            .collect()
    }

    /// Products in the given sort order.
    #[must_use]
    pub fn sorted_products(&self, key: SortKey) -> Vec<&Product> {
        let mut products: Vec<&Product> = self.products.iter().collect();
        match key {
            SortKey::PriceAsc => products.sort_by_key(|p| p.price),
            SortKey::PriceDesc => {
                products.sort_by_key(|p| p.price);
                products.reverse();
            }
            SortKey::Rating => {
                products.sort_by(|a, b| b.rating.total_cmp(&a.rating));
            }
            SortKey::Name => products.sort_by(|a, b| a.name.cmp(&b.name)),
        }
        products
    }

    /// Featured products, catalog order.
    #[must_use]
    pub fn featured(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.featured).collect()
    }

    /// Look up a known account by email.
    #[must_use]
    pub fn user_by_email(&self, email: &Email) -> Option<&User> {
        self.known_users.iter().find(|u| &u.email == email)
    }
}

// =============================================================================
// Demo seed data
// =============================================================================

fn demo_categories() -> Vec<Category> {
    [
        ("electronics", "Electronics", 3),
        ("apparel", "Apparel", 2),
        ("accessories", "Accessories", 2),
        ("home", "Home & Living", 1),
    ]
    .into_iter()
    .map(|(slug, name, product_count)| Category {
        id: CategoryId::new(slug),
        name: name.to_owned(),
        slug: slug.to_owned(),
        image: format!("https://img.pomelo.example/categories/{slug}.jpg"),
        product_count,
    })
    .collect()
}

struct Seed {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    price_cents: i64,
    original_cents: Option<i64>,
    category: &'static str,
    rating: f64,
    review_count: u32,
    stock: u32,
    featured: bool,
    tags: &'static [&'static str],
}

fn demo_products() -> Vec<Product> {
    const SEEDS: &[Seed] = &[
        Seed {
            id: "p-headphones",
            name: "Drift Wireless Headphones",
            description: "Over-ear wireless headphones with 40-hour battery life.",
            price_cents: 129_99,
            original_cents: Some(179_99),
            category: "electronics",
            rating: 4.7,
            review_count: 412,
            stock: 23,
            featured: true,
            tags: &["audio", "wireless"],
        },
        Seed {
            id: "p-speaker",
            name: "Pebble Mini Speaker",
            description: "Pocket-sized bluetooth speaker, splash resistant.",
            price_cents: 39_99,
            original_cents: None,
            category: "electronics",
            rating: 4.2,
            review_count: 186,
            stock: 54,
            featured: false,
            tags: &["audio", "portable"],
        },
        Seed {
            id: "p-watch",
            name: "Meridian Smart Watch",
            description: "Fitness tracking, notifications, and a week of battery.",
            price_cents: 199_00,
            original_cents: Some(249_00),
            category: "electronics",
            rating: 4.5,
            review_count: 301,
            stock: 12,
            featured: true,
            tags: &["wearable", "fitness"],
        },
        Seed {
            id: "p-hoodie",
            name: "Harbor Fleece Hoodie",
            description: "Midweight fleece hoodie in organic cotton.",
            price_cents: 64_00,
            original_cents: None,
            category: "apparel",
            rating: 4.8,
            review_count: 95,
            stock: 40,
            featured: false,
            tags: &["cotton", "unisex"],
        },
        Seed {
            id: "p-tee",
            name: "Everyday Crew Tee",
            description: "Soft crew-neck tee, pre-shrunk.",
            price_cents: 24_00,
            original_cents: Some(32_00),
            category: "apparel",
            rating: 4.1,
            review_count: 210,
            stock: 120,
            featured: false,
            tags: &["cotton", "basics"],
        },
        Seed {
            id: "p-tote",
            name: "Field Canvas Tote",
            description: "Heavy canvas tote with interior pocket.",
            price_cents: 30_00,
            original_cents: None,
            category: "accessories",
            rating: 4.4,
            review_count: 67,
            stock: 31,
            featured: false,
            tags: &["canvas", "everyday"],
        },
        Seed {
            id: "p-wallet",
            name: "Slim Card Wallet",
            description: "Six-card leather wallet with quick-access slot.",
            price_cents: 45_00,
            original_cents: Some(55_00),
            category: "accessories",
            rating: 4.6,
            review_count: 148,
            stock: 0,
            featured: true,
            tags: &["leather"],
        },
        Seed {
            id: "p-lamp",
            name: "Arc Desk Lamp",
            description: "Dimmable LED desk lamp with USB-C charging port.",
            price_cents: 58_50,
            original_cents: None,
            category: "home",
            rating: 4.3,
            review_count: 83,
            stock: 17,
            featured: false,
            tags: &["lighting", "desk"],
        },
    ];

    SEEDS
        .iter()
        .map(|seed| Product {
            id: ProductId::new(seed.id),
            name: seed.name.to_owned(),
            description: seed.description.to_owned(),
            price: Price::from_cents(seed.price_cents),
            original_price: seed.original_cents.map(Price::from_cents),
            category: CategoryId::new(seed.category),
            images: vec![format!(
                "https://img.pomelo.example/products/{}.jpg",
                seed.id
            )],
            rating: seed.rating,
            review_count: seed.review_count,
            stock: seed.stock,
            featured: seed.featured,
            tags: seed.tags.iter().map(|t| (*t).to_owned()).collect(),
        })
        .collect()
}

fn demo_users() -> Vec<User> {
    let seeded_at = DateTime::from_timestamp(1_736_931_600, 0).unwrap_or_default();
    vec![
        User {
            id: UserId::new("u-admin"),
            email: Email::parse("admin@example.com").expect("seed email is valid"),
            name: "Store Admin".to_owned(),
            avatar: None,
            role: Role::Admin,
            created_at: seeded_at,
        },
        User {
            id: UserId::new("u-jane"),
            email: Email::parse("jane@example.com").expect("seed email is valid"),
            name: "Jane Porter".to_owned(),
            avatar: Some("https://api.dicebear.com/7.x/avataaars/svg?seed=Jane".to_owned()),
            role: Role::Customer,
            created_at: seeded_at,
        },
    ]
}
