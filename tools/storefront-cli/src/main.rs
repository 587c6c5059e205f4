//! Storefront CLI - Command line front end for the storefront.
//!
//! Commands:
//! - `storefront browse` - Filter, sort and page through the catalog
//! - `storefront suggest` - Search-as-you-type suggestions
//! - `storefront product` - Product page and add to cart
//! - `storefront cart` - Apply cart actions and show the order summary
//! - `storefront checkout` - Validate a checkout form and place the order
//! - `storefront config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use storefront_observability::LogFormat;

use commands::{BrowseArgs, CartArgs, CheckoutArgs, ConfigArgs, ProductArgs, SuggestArgs};

/// Storefront CLI - Browse the catalog, manage the cart and check out
#[derive(Parser)]
#[command(name = "storefront")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products with category/brand filters, sorting and paging
    Browse(BrowseArgs),

    /// Show search suggestions for a query
    Suggest(SuggestArgs),

    /// Show the product page and add it to the cart
    Product(ProductArgs),

    /// Show the cart after applying actions
    Cart(CartArgs),

    /// Validate a checkout form and place the order
    Checkout(CheckoutArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_format = if cli.json {
        LogFormat::Json
    } else {
        LogFormat::Human
    };
    storefront_observability::init(log_format, cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let ctx = match context::Context::load(cli.config.as_deref(), output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    // Execute command
    let result = match cli.command {
        Commands::Browse(args) => commands::browse::run(args, &ctx),
        Commands::Suggest(args) => commands::suggest::run(args, &ctx),
        Commands::Product(args) => commands::product::run(args, &ctx),
        Commands::Cart(args) => commands::cart::run(args, &ctx),
        Commands::Checkout(args) => commands::checkout::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
