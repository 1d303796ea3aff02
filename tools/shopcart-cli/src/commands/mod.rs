//! CLI command implementations.

pub mod cart;
pub mod config;
pub mod products;

use clap::{Args, Subcommand};

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    #[command(subcommand)]
    pub command: Option<ProductsCommand>,
}

#[derive(Subcommand)]
pub enum ProductsCommand {
    /// List all catalog products.
    List,
    /// Add a product to the catalog.
    Add {
        /// Product ID.
        #[arg(long)]
        id: i64,
        /// Display name.
        #[arg(long)]
        name: String,
        /// Unit price, e.g. 1.50.
        #[arg(long)]
        price: String,
        /// Optional description.
        #[arg(short, long)]
        description: Option<String>,
    },
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: CartCommand,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Add a product to the cart, merging with an existing line.
    #[command(allow_negative_numbers = true)]
    Add {
        /// Catalog product ID.
        product_id: i64,
        /// Quantity to add (must be greater than 0).
        qty: i64,
    },
    /// Show the cart lines.
    Show,
    /// Show the cart total.
    Total,
    /// Total the cart and empty it.
    Checkout,
    /// Remove every line from the cart.
    Clear {
        /// Skip confirmation (required with --json).
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
