//! Order-summary breakdown of a cart.

use crate::cart::CartItem;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Totals and lines shown next to the checkout form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartSummary {
    pub lines: Vec<LineSummary>,
    /// Sum of line subtotals.
    pub subtotal: Money,
    /// Shipping is always free.
    pub shipping: Money,
    /// Subtotal plus shipping.
    pub grand_total: Money,
}

impl CartSummary {
    /// Build a summary from cart lines and their precomputed total.
    pub fn from_items(items: &[CartItem], total: Money) -> Self {
        let lines = items.iter().map(LineSummary::from).collect();
        Self {
            lines,
            subtotal: total,
            shipping: Money::zero(total.currency),
            grand_total: total,
        }
    }

    /// "Free" or the formatted shipping cost.
    pub fn shipping_label(&self) -> String {
        if self.shipping.is_zero() {
            "Free".to_string()
        } else {
            self.shipping.display()
        }
    }

    /// Total number of units, saturating at `i64::MAX`.
    pub fn item_count(&self) -> i64 {
        self.lines
            .iter()
            .fold(0i64, |n, l| n.saturating_add(l.quantity))
    }
}

/// One line of the order summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineSummary {
    pub product_id: ProductId,
    pub name: String,
    pub image: String,
    pub unit_price: Money,
    pub quantity: i64,
    pub subtotal: Money,
}

impl From<&CartItem> for LineSummary {
    fn from(item: &CartItem) -> Self {
        Self {
            product_id: item.product.id.clone(),
            name: item.product.name.clone(),
            image: item.product.image.clone(),
            unit_price: item.product.price,
            quantity: item.quantity,
            subtotal: item.subtotal,
        }
    }
}
