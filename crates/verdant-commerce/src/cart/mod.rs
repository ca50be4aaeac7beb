//! Shopping cart module.
//!
//! Contains the cart store, its read-only view, and the order summary.

mod cart;
mod pricing;

pub use cart::{CartItem, CartStore, CartView};
pub use pricing::{CartSummary, LineSummary};
