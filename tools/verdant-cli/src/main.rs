//! Verdant CLI - terminal storefront for the Verdant plant shop.
//!
//! Commands:
//! - `verdant catalog` - List and inspect plants
//! - `verdant checkout` - Buy a set of items in one go
//! - `verdant shop` - Interactive browse/cart/checkout session
//! - `verdant config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{CatalogArgs, CheckoutArgs, ConfigArgs};

/// Verdant - browse plants and place orders from the terminal
#[derive(Parser)]
#[command(name = "verdant")]
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
    /// Browse the plant catalog
    Catalog(CatalogArgs),

    /// Build a cart from the command line and check out
    Checkout(CheckoutArgs),

    /// Start an interactive shopping session
    Shop,

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    let logging = if cli.verbose {
        ctx.config.logging.verbose()
    } else {
        ctx.config.logging
    };
    if let Err(e) = verdant_observability::init_logging(&logging) {
        ctx.output.warn(&e.to_string());
    }
    tracing::debug!(config = ?ctx.config_path, "context loaded");

    // Execute command
    let result = match cli.command {
        Commands::Catalog(args) => commands::catalog::run(args, &ctx),
        Commands::Checkout(args) => commands::checkout::run(args, &ctx),
        Commands::Shop => commands::shop::run(&ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
