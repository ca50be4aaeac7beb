//! Terminal rendering of storefront views.

use console::style;
use verdant_commerce::cart::CartSummary;
use verdant_commerce::catalog::Product;
use verdant_commerce::checkout::{CheckoutView, Destination, FormSection, Order};

use crate::output::{state_badge, wrap, Output};

const LIST_WIDTHS: [usize; 5] = [4, 22, 10, 10, 30];
const LINE_WIDTHS: [usize; 4] = [22, 5, 10, 10];

/// Catalog listing as a table.
pub fn product_table(output: &Output, products: &[&Product]) {
    output.table_row(&["ID", "Name", "Category", "Price", "Care"], &LIST_WIDTHS);
    for product in products {
        let price = product.price.display();
        let care = product.care_summary();
        output.table_row(
            &[
                product.id.as_str(),
                &product.name,
                product.category.as_str(),
                &price,
                &care,
            ],
            &LIST_WIDTHS,
        );
    }
}

/// Product detail page.
pub fn product_detail(output: &Output, product: &Product) {
    output.header(&product.name);
    if !product.scientific_name.is_empty() {
        output.line(&format!("  {}", style(&product.scientific_name).italic()));
    }
    output.kv("Price", &product.price.display());
    output.kv("Category", product.category.as_str());
    output.kv("Light", product.light.as_str());
    output.kv("Water", product.water.as_str());
    output.kv("Difficulty", product.difficulty.as_str());
    if !product.image.is_empty() {
        output.kv("Image", &product.image);
    }
    if !product.description.is_empty() {
        output.line("");
        let width = output.term_width().saturating_sub(4);
        for line in wrap(&product.description, width) {
            output.line(&format!("  {}", line));
        }
    }
}

/// Order summary panel: lines, subtotal, shipping, total.
pub fn order_summary(output: &Output, summary: &CartSummary) {
    output.table_row(&["Item", "Qty", "Each", "Subtotal"], &LINE_WIDTHS);
    for line in &summary.lines {
        let quantity = line.quantity.to_string();
        let unit = line.unit_price.display();
        let subtotal = line.subtotal.display();
        output.table_row(&[&line.name, &quantity, &unit, &subtotal], &LINE_WIDTHS);
    }
    output.line("");
    output.kv("Subtotal", &summary.subtotal.display());
    output.kv("Shipping", &summary.shipping_label());
    output.kv("Total", &style(summary.grand_total.display()).bold().to_string());
}

/// Render whichever checkout view is current.
pub fn checkout_view(output: &Output, view: &CheckoutView) {
    if output.is_json() {
        output.json(view);
        return;
    }

    output.header(&format!("Checkout [{}]", state_badge(view.state())));
    match view {
        CheckoutView::EmptyCart {
            title,
            message,
            destination,
        } => {
            output.line(&style(title).bold().to_string());
            output.line(message);
            link(output, *destination);
        }
        CheckoutView::Form {
            summary,
            submit_label,
        } => {
            order_summary(output, summary);
            output.line("");
            output.info(&format!(
                "Fill in {} and {} to place the order",
                FormSection::Shipping.title(),
                FormSection::Payment.title()
            ));
            output.line(&style(submit_label).cyan().to_string());
        }
        CheckoutView::Confirmation {
            title,
            message,
            order,
            destination,
        } => {
            output.success(title);
            output.line(message);
            order_details(output, order);
            link(output, *destination);
        }
    }
}

fn order_details(output: &Output, order: &Order) {
    output.line("");
    output.kv("Order number", &order.number.to_string());
    output.kv("Items", &order.item_count().to_string());
    output.kv("Total", &order.total.display());
    output.kv("Ship to", &format!("{}, {}", order.customer_name, order.ship_to));
    output.kv("Receipt", &order.email);
    output.kv("Placed", &order.placed_at.format("%Y-%m-%d %H:%M UTC").to_string());
}

fn link(output: &Output, destination: Destination) {
    output.line("");
    output.link(destination.link_label(), destination.path());
}
