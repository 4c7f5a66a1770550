//! Pomelo CLI - Command-line demo storefront.
//!
//! Drives the session-state library against the built-in demo catalog. All
//! state (cart, wishlist, account, theme) persists between invocations in
//! the data directory (`STOREFRONT_DATA_DIR`, default `./storefront-data`),
//! so the CLI behaves like a browser profile.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! pomelo catalog list --sort price-asc
//! pomelo catalog show p-headphones
//!
//! # Build a cart
//! pomelo cart add p-headphones --quantity 2
//! pomelo cart show
//!
//! # Log in (demo auth: any password works)
//! pomelo account login -e jane@example.com -p anything
//!
//! # Check out
//! pomelo checkout summary
//! pomelo checkout place
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::print_stdout, clippy::print_stderr)]

use clap::{Parser, Subcommand};

use pomelo_storefront::services::Theme;
use pomelo_storefront::{Storefront, StorefrontConfig};

mod commands;

use commands::catalog::SortArg;

#[derive(Parser)]
#[command(name = "pomelo")]
#[command(author, version, about = "Pomelo demo storefront")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the product catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Manage the wishlist
    Wishlist {
        #[command(subcommand)]
        action: WishlistAction,
    },
    /// Log in, sign up, or inspect the session
    Account {
        #[command(subcommand)]
        action: AccountAction,
    },
    /// Review totals and place the order
    Checkout {
        #[command(subcommand)]
        action: CheckoutAction,
    },
    /// Switch the UI theme
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List products
    List {
        /// Only products in this category
        #[arg(short, long)]
        category: Option<String>,

        /// Sort order
        #[arg(short, long, value_enum)]
        sort: Option<SortArg>,

        /// Minimum price (e.g. 25 or $25.00)
        #[arg(long)]
        min: Option<pomelo_core::Price>,

        /// Maximum price
        #[arg(long)]
        max: Option<pomelo_core::Price>,

        /// Only featured products
        #[arg(long)]
        featured: bool,
    },
    /// Show one product in detail
    Show {
        /// Product id
        id: String,
    },
    /// List categories
    Categories,
}

#[derive(Subcommand)]
enum CartAction {
    /// Add a product to the cart
    Add {
        /// Product id
        id: String,

        /// Units to add
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Remove a product from the cart
    Remove {
        /// Product id
        id: String,
    },
    /// Set a line's quantity (0 removes it)
    Set {
        /// Product id
        id: String,

        /// New quantity
        quantity: u32,
    },
    /// Show the cart
    Show,
    /// Empty the cart
    Clear,
}

#[derive(Subcommand)]
enum WishlistAction {
    /// Save a product
    Add {
        /// Product id
        id: String,
    },
    /// Forget a product
    Remove {
        /// Product id
        id: String,
    },
    /// Save the product if unsaved, forget it otherwise
    Toggle {
        /// Product id
        id: String,
    },
    /// Show the wishlist
    Show,
}

#[derive(Subcommand)]
enum AccountAction {
    /// Log in (demo auth: any password is accepted)
    Login {
        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password (never verified in demo mode)
        #[arg(short, long)]
        password: String,
    },
    /// Create an account and log in
    Signup {
        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password (stored nowhere)
        #[arg(short, long)]
        password: String,

        /// Display name
        #[arg(short, long)]
        name: String,
    },
    /// Log out and forget the stored session
    Logout,
    /// Show the active session
    Whoami,
}

#[derive(Subcommand)]
enum CheckoutAction {
    /// Show the cost breakdown for the current cart
    Summary,
    /// Place the order (requires login and a non-empty cart)
    Place,
}

#[derive(Subcommand)]
enum ThemeAction {
    /// Show the active theme
    Show,
    /// Set the theme (light, dark, ocean, sunset)
    Set {
        /// Theme name
        theme: Theme,
    },
    /// Cycle to the next theme
    Toggle,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        tracing::debug!(error = %err, "command failed");
        eprintln!("Error: {}", err.user_message());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> pomelo_storefront::Result<()> {
    let config = StorefrontConfig::from_env()?;
    let mut storefront = Storefront::open(&config)?;

    match cli.command {
        Commands::Catalog { action } => match action {
            CatalogAction::List {
                category,
                sort,
                min,
                max,
                featured,
            } => commands::catalog::list(&storefront, category, sort, min, max, featured),
            CatalogAction::Show { id } => commands::catalog::show(&storefront, &id),
            CatalogAction::Categories => commands::catalog::categories(&storefront),
        },
        Commands::Cart { action } => match action {
            CartAction::Add { id, quantity } => {
                commands::cart::add(&mut storefront, &id, quantity)
            }
            CartAction::Remove { id } => commands::cart::remove(&mut storefront, &id),
            CartAction::Set { id, quantity } => {
                commands::cart::set_quantity(&mut storefront, &id, quantity)
            }
            CartAction::Show => commands::cart::show(&storefront),
            CartAction::Clear => commands::cart::clear(&mut storefront),
        },
        Commands::Wishlist { action } => match action {
            WishlistAction::Add { id } => commands::wishlist::add(&mut storefront, &id),
            WishlistAction::Remove { id } => commands::wishlist::remove(&mut storefront, &id),
            WishlistAction::Toggle { id } => commands::wishlist::toggle(&mut storefront, &id),
            WishlistAction::Show => commands::wishlist::show(&storefront),
        },
        Commands::Account { action } => match action {
            AccountAction::Login { email, password } => {
                commands::account::login(&mut storefront, &email, password).await
            }
            AccountAction::Signup {
                email,
                password,
                name,
            } => commands::account::signup(&mut storefront, &email, password, &name).await,
            AccountAction::Logout => commands::account::logout(&mut storefront),
            AccountAction::Whoami => commands::account::whoami(&storefront),
        },
        Commands::Checkout { action } => match action {
            CheckoutAction::Summary => commands::checkout::summary(&storefront),
            CheckoutAction::Place => commands::checkout::place(&mut storefront).await,
        },
        Commands::Theme { action } => match action {
            ThemeAction::Show => commands::theme::show(&storefront),
            ThemeAction::Set { theme } => commands::theme::set(&mut storefront, theme),
            ThemeAction::Toggle => commands::theme::toggle(&mut storefront),
        },
    }
}
