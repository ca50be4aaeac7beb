//! Plant-shop domain types and logic for Verdant.
//!
//! - **Catalog**: the fixed list of plants and their care attributes
//! - **Cart**: the shopper's selection, with exact running totals
//! - **Checkout**: form validation and the empty/filling/submitted flow
//! - **Session**: owner of one cart and its checkout
//!
//! # Example
//!
//! ```rust
//! use verdant_commerce::prelude::*;
//!
//! let catalog = Catalog::plant_shop();
//! let mut session = ShopSession::new();
//!
//! let aloe = catalog.require(&ProductId::new("5"))?;
//! session.add_to_cart(aloe, 2)?;
//! assert_eq!(session.cart().cart_total().display(), "$50.00");
//!
//! let form = CheckoutForm::new()
//!     .with(FormField::FirstName, "Ada")
//!     .with(FormField::LastName, "Lovelace")
//!     .with(FormField::Email, "ada@example.com")
//!     .with(FormField::Address, "12 Fern Lane")
//!     .with(FormField::City, "Portland")
//!     .with(FormField::State, "OR")
//!     .with(FormField::Zip, "97201")
//!     .with(FormField::CardNumber, "4242 4242 4242 4242")
//!     .with(FormField::Expiry, "12/29")
//!     .with(FormField::Cvc, "123");
//!
//! let order = session.place_order(&form)?;
//! println!("Order {} confirmed", order.number);
//! # Ok::<(), CommerceError>(())
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod session;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, Category, Difficulty, Filter, Light, Product, Watering};

    // Cart
    pub use crate::cart::{CartItem, CartStore, CartSummary, CartView, LineSummary};

    // Checkout
    pub use crate::checkout::{
        CheckoutFlow, CheckoutForm, CheckoutState, CheckoutView, Destination, FormField,
        FormSection, Order, OrderNumber, OrderNumberGenerator, OrderNumberScheme,
        RandomOrderNumber, SequentialOrderNumber, ValidationReport,
    };

    // Session
    pub use crate::session::ShopSession;
}
