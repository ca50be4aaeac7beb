//! Browse the plant catalog.

use anyhow::{anyhow, bail, Result};
use verdant_commerce::catalog::Filter;
use verdant_commerce::ids::ProductId;
use verdant_commerce::Money;

use super::{CatalogArgs, CatalogCommand};
use crate::context::Context;
use crate::render;

/// Run the catalog command.
pub fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    match args.command {
        CatalogCommand::List {
            category,
            light,
            water,
            difficulty,
            max_price,
            search,
        } => {
            let mut filters = Vec::new();
            filters.extend(category.map(Filter::Category));
            filters.extend(light.map(Filter::Light));
            filters.extend(water.map(Filter::Water));
            filters.extend(difficulty.map(Filter::Difficulty));
            if let Some(max) = max_price {
                if max < 0.0 {
                    bail!("--max-price must not be negative");
                }
                let max = Money::from_decimal(max, ctx.config.shop.currency)
                    .ok_or_else(|| anyhow!("--max-price {} is out of range", max))?;
                filters.push(Filter::price_range(None, Some(max)));
            }
            filters.extend(search.map(Filter::text));
            list(&filters, ctx)
        }
        CatalogCommand::Show { id } => show(&id, ctx),
    }
}

fn list(filters: &[Filter], ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let products = catalog.filter(filters);
    ctx.output.debug(&format!(
        "{} of {} products match {} filter(s)",
        products.len(),
        catalog.len(),
        filters.len()
    ));

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    ctx.output.header(&format!("{} Plants", ctx.config.shop.name));
    if products.is_empty() {
        ctx.output.warn("No plants match those filters");
        return Ok(());
    }
    render::product_table(&ctx.output, &products);
    ctx.output.line("");
    ctx.output
        .info(&format!("{} plant(s). Use `verdant catalog show <id>` for details.", products.len()));
    Ok(())
}

fn show(id: &str, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let product = catalog.require(&ProductId::new(id))?;

    if ctx.output.is_json() {
        ctx.output.json(product);
        return Ok(());
    }

    render::product_detail(&ctx.output, product);
    Ok(())
}
