//! Configuration management commands.

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CONFIG_FILE_NAMES};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Get { key } => get_config(&key, ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(none, using defaults)"),
    }

    let config = &ctx.config;

    ctx.output.line("");
    ctx.output.line("[shop]");
    ctx.output.kv("name", &config.shop.name);
    ctx.output.kv("currency", config.shop.currency.code());
    ctx.output.kv(
        "catalog",
        config.shop.catalog.as_deref().unwrap_or("(built-in)"),
    );

    ctx.output.line("");
    ctx.output.line("[checkout]");
    ctx.output.kv("order_numbers", config.checkout.order_numbers.as_str());
    ctx.output
        .kv("sequence_start", &config.checkout.sequence_start.to_string());

    ctx.output.line("");
    ctx.output.line("[logging]");
    ctx.output.kv("level", config.logging.level.directive());
    ctx.output.kv("format", config.logging.format.as_str());

    Ok(())
}

fn get_config(key: &str, ctx: &Context) -> Result<()> {
    let Some(value) = ctx.config.get(key) else {
        bail!("Unknown config key: {}", key);
    };

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "key": key, "value": value }));
    } else {
        println!("{}", value);
    }

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_FILE_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    let name = ctx
        .cwd
        .file_name()
        .and_then(|n| n.to_str())
        .map(shop_name_from_dir)
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| ctx.config.shop.name.clone());

    std::fs::write(&config_path, generate_default_config(&name))?;
    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

/// "fern-and-co" -> "Fern And Co"
fn shop_name_from_dir(dir: &str) -> String {
    dir.split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shop_name_from_dir() {
        assert_eq!(shop_name_from_dir("fern-and-co"), "Fern And Co");
        assert_eq!(shop_name_from_dir("greenhouse"), "Greenhouse");
        assert_eq!(shop_name_from_dir("__"), "");
    }
}
