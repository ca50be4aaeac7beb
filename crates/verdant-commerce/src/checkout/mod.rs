//! Checkout module.
//!
//! Contains the checkout form, the checkout state machine, order
//! confirmations, and navigation destinations.

mod flow;
pub(crate) mod form;
mod navigation;
mod order;

pub use flow::{CheckoutFlow, CheckoutState, CheckoutView};
pub use form::{CheckoutForm, FormField, FormSection, ValidationReport};
pub use navigation::Destination;
pub use order::{
    Order, OrderNumber, OrderNumberGenerator, OrderNumberScheme, RandomOrderNumber,
    SequentialOrderNumber,
};
