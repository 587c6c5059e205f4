//! CLI command implementations.

pub mod browse;
pub mod cart;
pub mod checkout;
pub mod config;
pub mod product;
pub mod suggest;

use clap::{Args, Subcommand};

use crate::config::ShippingPolicyKind;

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    /// Tick a category checkbox (repeatable; naming one twice unticks it).
    #[arg(long)]
    pub category: Vec<String>,

    /// Tick a brand checkbox (repeatable).
    #[arg(short, long)]
    pub brand: Vec<String>,

    /// Sort order: popularity, price-asc or price-desc.
    #[arg(short, long, default_value = "popularity")]
    pub sort: String,

    /// Page to show (1-indexed).
    #[arg(short, long, default_value = "1")]
    pub page: usize,

    /// Search term the listing was opened with.
    #[arg(long)]
    pub search: Option<String>,

    /// Also print the sidebar facets.
    #[arg(long)]
    pub facets: bool,

    /// Show the home page's featured products instead of the listing.
    #[arg(long, conflicts_with_all = ["category", "brand", "search", "facets"])]
    pub featured: bool,

    /// Press "Add to Cart" on the product card with this id.
    #[arg(long, value_name = "ID")]
    pub add: Option<String>,
}

/// Arguments for the suggest command.
#[derive(Args)]
pub struct SuggestArgs {
    /// Text typed into the search box.
    pub query: String,

    /// Submit the search and print the listing breadcrumb.
    #[arg(long)]
    pub submit: bool,
}

/// Arguments for the product command.
#[derive(Args)]
pub struct ProductArgs {
    /// Gallery image to show (0-indexed).
    #[arg(short, long)]
    pub image: Option<usize>,

    /// Quantity to add to the cart (1-5).
    #[arg(short, long, default_value = "1")]
    pub quantity: i64,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    /// Cart action: inc:ID, dec:ID, remove:ID or set:ID=N (repeatable, applied in order).
    #[arg(short, long)]
    pub action: Vec<String>,

    /// Shipping method used for the order summary.
    #[arg(long)]
    pub shipping: Option<String>,

    /// Override the configured shipping policy.
    #[arg(long, value_enum)]
    pub shipping_policy: Option<ShippingPolicyKind>,
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Checkout form as a TOML or JSON file.
    #[arg(short, long)]
    pub form: String,

    /// Override the configured shipping policy.
    #[arg(long, value_enum)]
    pub shipping_policy: Option<ShippingPolicyKind>,
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
    /// Print the default config file.
    Init {
        /// Write storefront.toml in the current directory instead of printing it.
        #[arg(short, long)]
        write: bool,

        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
