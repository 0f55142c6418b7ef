//! Velvet Cactus CLI - Storefront browser and demo driver.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! vc-cli catalog list
//! vc-cli catalog list --query phone --sort price-low
//! vc-cli catalog list --category Electronics --max-price 300 --in-stock
//!
//! # Category overview
//! vc-cli catalog categories
//!
//! # Walk through a full shopping session
//! vc-cli demo
//! ```
//!
//! # Commands
//!
//! - `catalog list` - Filter and sort the product listing
//! - `catalog categories` - Category names with product counts
//! - `demo` - Scripted session: sign in, browse, cart, wishlist, checkout
//!
//! # Environment Variables
//!
//! See [`velvet_cactus_storefront::config`]. A `.env` file is honored.

#![cfg_attr(not(test), forbid(unsafe_code))]
// Terminal output is this binary's interface
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use velvet_cactus_core::{Price, Rating};
use velvet_cactus_storefront::listing::SortOrder;

mod commands;

#[derive(Parser)]
#[command(name = "vc-cli")]
#[command(author, version, about = "Velvet Cactus CLI tools")]
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
    /// Run a scripted shopping session against the catalog
    Demo,
}

#[derive(Subcommand)]
enum CatalogAction {
    /// Filter and sort the product listing
    List {
        /// Free-text query matched against name, category, and description
        #[arg(short, long, default_value = "")]
        query: String,

        /// Restrict to these categories (repeatable)
        #[arg(short, long = "category")]
        categories: Vec<String>,

        /// Inclusive lower price bound
        #[arg(long)]
        min_price: Option<Price>,

        /// Inclusive upper price bound
        #[arg(long)]
        max_price: Option<Price>,

        /// Minimum rating (0 disables the threshold)
        #[arg(long)]
        min_rating: Option<Rating>,

        /// Only show in-stock products
        #[arg(long)]
        in_stock: bool,

        /// Sort order: featured, price-low, price-high, rating, newest
        #[arg(short, long, default_value = "featured")]
        sort: SortOrder,

        /// Emit the listing as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show category names with product counts
    Categories,
}

fn main() {
    dotenvy::dotenv().ok();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "vc_cli=info,velvet_cactus_storefront=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Catalog { action } => match action {
            CatalogAction::List {
                query,
                categories,
                min_price,
                max_price,
                min_rating,
                in_stock,
                sort,
                json,
            } => commands::catalog::list(&commands::catalog::ListOptions {
                query,
                categories,
                min_price,
                max_price,
                min_rating,
                in_stock,
                sort,
                json,
            }),
            CatalogAction::Categories => commands::catalog::categories(),
        },
        Commands::Demo => commands::demo::run(),
    };

    if let Err(error) = result {
        tracing::error!("{error}");
        std::process::exit(1);
    }
}
