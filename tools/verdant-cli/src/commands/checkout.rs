//! One-shot checkout: build a cart from `--item` flags and place the order.

use std::path::Path;

use anyhow::{bail, Context as _, Result};
use dialoguer::{Input, Password};
use verdant_commerce::checkout::{CheckoutForm, FormField, FormSection, Order};
use verdant_commerce::ids::ProductId;
use verdant_commerce::session::ShopSession;
use verdant_commerce::CommerceError;

use super::CheckoutArgs;
use crate::context::Context;
use crate::render;

/// Run the checkout command.
pub fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let mut session = ctx.new_session();
    ctx.output.debug(&format!("Session {}", session.id()));

    ctx.output.step(1, 3, "Building cart");
    for item in &args.items {
        let (id, quantity) = parse_item(item)?;
        let product = catalog.require(&id)?;
        let now = session
            .add_to_cart(product, quantity)
            .with_context(|| format!("Failed to add '{}' to the cart", item))?;
        ctx.output
            .debug(&format!("{} x{} (now {} in cart)", product.name, quantity, now));
    }
    render::checkout_view(&ctx.output, &session.checkout_view());

    ctx.output.step(2, 3, "Collecting shipping and payment details");
    let form = match &args.form {
        Some(path) => load_form(&ctx.resolve_path(path))?,
        None => CheckoutForm::new(),
    };

    ctx.output.step(3, 3, "Placing order");
    let interactive = !ctx.output.is_json() && console::user_attended();
    let order = place_order(&mut session, form, interactive, ctx)?;
    ctx.output.debug(&format!("Placed order {}", order.number));

    render::checkout_view(&ctx.output, &session.checkout_view());
    Ok(())
}

/// Submit `form`, prompting for whatever is missing until it goes through.
///
/// Without `interactive`, the first validation failure is returned as is.
pub(crate) fn place_order(
    session: &mut ShopSession,
    mut form: CheckoutForm,
    interactive: bool,
    ctx: &Context,
) -> Result<Order> {
    loop {
        match session.place_order(&form) {
            Ok(order) => return Ok(order),
            Err(CommerceError::CheckoutIncomplete(report)) if interactive => {
                if report.missing.len() < FormField::ALL.len() {
                    ctx.output.warn(&format!("Still needed: {}", report));
                }
                prompt_fields(&mut form, &report.missing)?;
            }
            Err(e) => return Err(e.into()),
        }
    }
}

/// Ask for each field in turn, grouped under its section title.
fn prompt_fields(form: &mut CheckoutForm, fields: &[FormField]) -> Result<()> {
    let mut section: Option<FormSection> = None;
    for &field in fields {
        if section != Some(field.section()) {
            section = Some(field.section());
            println!("\n{}", console::style(field.section().title()).bold());
        }

        let value = if field.is_sensitive() {
            Password::new()
                .with_prompt(field.to_string())
                .allow_empty_password(true)
                .interact()?
        } else {
            Input::<String>::new()
                .with_prompt(field.to_string())
                .allow_empty(true)
                .interact_text()?
        };
        form.set(field, value);
    }
    Ok(())
}

/// Read a checkout form from a TOML or JSON file.
fn load_form(path: &Path) -> Result<CheckoutForm> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read form file: {}", path.display()))?;
    let form = if path.extension().and_then(|e| e.to_str()) == Some("json") {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse form file: {}", path.display()))?
    } else {
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse form file: {}", path.display()))?
    };
    Ok(form)
}

/// Parse `<id>` or `<id>:<qty>`.
fn parse_item(item: &str) -> Result<(ProductId, i64)> {
    let (id, quantity) = match item.split_once(':') {
        Some((id, qty)) => {
            let qty = qty
                .trim()
                .parse::<i64>()
                .with_context(|| format!("Invalid quantity in '{}'", item))?;
            (id.trim(), qty)
        }
        None => (item.trim(), 1),
    };

    if id.is_empty() {
        bail!("Missing product id in '{}'", item);
    }
    if quantity < 1 {
        bail!("Quantity must be at least 1 in '{}'", item);
    }
    Ok((ProductId::new(id), quantity))
}
