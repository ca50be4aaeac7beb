//! Commerce error types.

use thiserror::Error;

use crate::checkout::ValidationReport;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Two catalog records share an id.
    #[error("Duplicate product id in catalog: {0}")]
    DuplicateProduct(String),

    /// A catalog record carries a negative price.
    #[error("Invalid price for product {product_id}: {amount_cents} cents")]
    InvalidPrice {
        product_id: String,
        amount_cents: i64,
    },

    /// Catalog document could not be interpreted.
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// Quantity must be a positive integer.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Checkout attempted with nothing in the cart.
    #[error("Cart is empty")]
    CartEmpty,

    /// Required checkout fields are missing.
    #[error("Checkout incomplete: {0}")]
    CheckoutIncomplete(ValidationReport),

    /// The checkout flow already produced an order.
    #[error("Order already submitted")]
    AlreadySubmitted,

    /// Filesystem error while loading data.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for CommerceError {
    fn from(e: toml::de::Error) -> Self {
        CommerceError::InvalidCatalog(e.to_string())
    }
}
