//! CLI command implementations.

pub mod catalog;
pub mod checkout;
pub mod config;
pub mod shop;

use clap::{Args, Subcommand};
use verdant_commerce::catalog::{Category, Difficulty, Light, Watering};

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommand,
}

#[derive(Subcommand)]
pub enum CatalogCommand {
    /// List plants, optionally filtered.
    List {
        /// Only this category (indoor, outdoor, succulent).
        #[arg(long, value_parser = parse_category)]
        category: Option<Category>,

        /// Only this light requirement (low, medium, bright).
        #[arg(long, value_parser = parse_light)]
        light: Option<Light>,

        /// Only this watering schedule (weekly, bi-weekly, monthly).
        #[arg(long, value_parser = parse_water)]
        water: Option<Watering>,

        /// Only this care difficulty (easy, medium, expert).
        #[arg(long, value_parser = parse_difficulty)]
        difficulty: Option<Difficulty>,

        /// Highest unit price, e.g. 30 or 32.50.
        #[arg(long)]
        max_price: Option<f64>,

        /// Text to look for in names and descriptions.
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Show one plant in detail.
    Show {
        /// Product id.
        id: String,
    },
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Item to buy as `<id>` or `<id>:<qty>`. Repeat for more items.
    #[arg(short, long = "item", required = true)]
    pub items: Vec<String>,

    /// TOML or JSON file with the shipping and payment fields.
    #[arg(short, long)]
    pub form: Option<String>,
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
    /// Get a config value.
    Get {
        /// Config key (dot-separated).
        key: String,
    },
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}

fn parse_category(s: &str) -> Result<Category, String> {
    Category::parse(s).ok_or_else(|| format!("unknown category '{}'", s))
}

fn parse_light(s: &str) -> Result<Light, String> {
    Light::parse(s).ok_or_else(|| format!("unknown light level '{}'", s))
}

fn parse_water(s: &str) -> Result<Watering, String> {
    Watering::parse(s).ok_or_else(|| format!("unknown watering schedule '{}'", s))
}

fn parse_difficulty(s: &str) -> Result<Difficulty, String> {
    Difficulty::parse(s).ok_or_else(|| format!("unknown difficulty '{}'", s))
}
