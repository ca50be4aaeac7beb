//! Interactive storefront session.

use anyhow::{bail, Result};
use dialoguer::{Confirm, Input, Select};
use verdant_commerce::cart::CartView;
use verdant_commerce::catalog::Catalog;
use verdant_commerce::checkout::{CheckoutForm, CheckoutState, Destination};
use verdant_commerce::ids::ProductId;
use verdant_commerce::session::ShopSession;

use super::checkout::place_order;
use crate::context::Context;
use crate::render;

const MENU: [&str; 4] = ["Browse plants", "View cart", "Checkout", "Quit"];

/// Run the shop command.
pub fn run(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() || !console::user_attended() {
        bail!("`verdant shop` needs an interactive terminal; use `verdant checkout` instead");
    }

    let catalog = ctx.catalog()?;
    let mut session = ctx.new_session();
    ctx.output.header(&format!("Welcome to {}", ctx.config.shop.name));
    ctx.output.debug(&format!("Session {}", session.id()));

    loop {
        let prompt = format!("Cart: {} item(s), {}", session.cart().item_count(), session.cart().cart_total());
        let choice = Select::new()
            .with_prompt(prompt)
            .items(&MENU)
            .default(0)
            .interact()?;

        match choice {
            0 => browse(&catalog, &mut session, ctx)?,
            1 => edit_cart(&mut session, ctx)?,
            2 => checkout(&mut session, ctx)?,
            _ => break,
        }
    }

    if !session.cart().is_empty() {
        ctx.output
            .warn(&format!("Leaving {} item(s) in the cart", session.cart().item_count()));
    }
    ctx.output.info("Goodbye!");
    Ok(())
}

fn browse(catalog: &Catalog, session: &mut ShopSession, ctx: &Context) -> Result<()> {
    let mut items: Vec<String> = catalog
        .products()
        .iter()
        .map(|p| format!("{} ({})", p.name, p.price.display()))
        .collect();
    items.push("Back".to_string());

    let choice = Select::new()
        .with_prompt("Pick a plant")
        .items(&items)
        .default(0)
        .interact()?;
    let Some(product) = catalog.products().get(choice) else {
        return Ok(());
    };

    render::product_detail(&ctx.output, product);
    ctx.output.line("");

    let quantity: i64 = Input::new()
        .with_prompt("Quantity to add (0 to skip)")
        .default(1)
        .interact_text()?;
    if quantity <= 0 {
        return Ok(());
    }

    match session.add_to_cart(product, quantity) {
        Ok(now) => ctx
            .output
            .success(&format!("Added {} x{} ({} in cart)", product.name, quantity, now)),
        Err(e) => ctx.output.error(&e.to_string()),
    }
    Ok(())
}

fn edit_cart(session: &mut ShopSession, ctx: &Context) -> Result<()> {
    loop {
        if session.cart().is_empty() {
            ctx.output.info("Your cart is empty");
            return Ok(());
        }

        ctx.output.header("Your Cart");
        render::order_summary(&ctx.output, &session.cart().summary());
        ctx.output.line("");
        let next = Destination::Checkout;
        ctx.output.link(next.link_label(), next.path());
        ctx.output.line("");

        let ids: Vec<ProductId> = session.cart().items().iter().map(|i| i.id().clone()).collect();
        let mut lines: Vec<String> = session
            .cart()
            .items()
            .iter()
            .map(|i| format!("{} x{}", i.product.name, i.quantity))
            .collect();
        lines.push("Done".to_string());

        let choice = Select::new()
            .with_prompt("Select a line to change")
            .items(&lines)
            .default(lines.len() - 1)
            .interact()?;
        let Some(id) = ids.get(choice) else {
            return Ok(());
        };

        let action = Select::new()
            .with_prompt("Change")
            .items(&["Set quantity", "Remove one", "Remove line", "Back"])
            .default(0)
            .interact()?;

        match action {
            0 => {
                let quantity: i64 = Input::new()
                    .with_prompt("New quantity (0 removes)")
                    .interact_text()?;
                if let Err(e) = session.cart_mut().update_quantity(id, quantity) {
                    ctx.output.error(&e.to_string());
                }
            }
            1 => {
                session.cart_mut().remove_one(id);
            }
            2 => {
                session.cart_mut().remove_item(id);
            }
            _ => {}
        }
    }
}

fn checkout(session: &mut ShopSession, ctx: &Context) -> Result<()> {
    render::checkout_view(&ctx.output, &session.checkout_view());
    if session.checkout_state() != CheckoutState::Filling {
        return Ok(());
    }

    let proceed = Confirm::new()
        .with_prompt("Enter shipping and payment details now?")
        .default(true)
        .interact()?;
    if !proceed {
        return Ok(());
    }

    place_order(session, CheckoutForm::new(), true, ctx)?;
    render::checkout_view(&ctx.output, &session.checkout_view());
    if session.checkout_state().is_terminal() {
        session.restart_checkout();
    }
    Ok(())
}
