//! Checkout flow state machine.

use serde::{Deserialize, Serialize};

use crate::cart::{CartSummary, CartView};
use crate::checkout::{CheckoutForm, Destination, Order, OrderNumberGenerator, RandomOrderNumber};
use crate::error::CommerceError;

/// Where a checkout stands.
///
/// `Empty` and `Filling` are derived from the cart every time they are asked
/// for; `Submitted` is terminal for the flow instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutState {
    /// No items and nothing submitted.
    Empty,
    /// Items present, form not yet submitted.
    Filling,
    /// Order placed.
    Submitted,
}

impl CheckoutState {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutState::Empty => "empty",
            CheckoutState::Filling => "filling",
            CheckoutState::Submitted => "submitted",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, CheckoutState::Submitted)
    }
}

/// What the checkout page should display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum CheckoutView {
    /// Nothing to check out; only offer a way back to the shop.
    EmptyCart {
        title: String,
        message: String,
        destination: Destination,
    },
    /// Shipping/payment form beside the order summary.
    Form {
        summary: CartSummary,
        submit_label: String,
    },
    /// Thank-you screen.
    Confirmation {
        title: String,
        message: String,
        order: Order,
        destination: Destination,
    },
}

impl CheckoutView {
    pub fn state(&self) -> CheckoutState {
        match self {
            CheckoutView::EmptyCart { .. } => CheckoutState::Empty,
            CheckoutView::Form { .. } => CheckoutState::Filling,
            CheckoutView::Confirmation { .. } => CheckoutState::Submitted,
        }
    }
}

/// One pass through checkout: empty -> filling -> submitted.
///
/// The flow reads the cart but never mutates it. Whoever owns the cart
/// decides whether to clear it after [`submit`](Self::submit) succeeds.
#[derive(Debug)]
pub struct CheckoutFlow {
    order: Option<Order>,
    numbers: Box<dyn OrderNumberGenerator>,
}

impl CheckoutFlow {
    /// Create a flow using random order numbers.
    pub fn new() -> Self {
        Self::with_generator(Box::new(RandomOrderNumber))
    }

    pub fn with_generator(numbers: Box<dyn OrderNumberGenerator>) -> Self {
        Self {
            order: None,
            numbers,
        }
    }

    /// Current state, re-evaluated against the cart.
    pub fn state<C>(&self, cart: &C) -> CheckoutState
    where
        C: CartView + ?Sized,
    {
        if self.order.is_some() {
            CheckoutState::Submitted
        } else if cart.is_empty() {
            CheckoutState::Empty
        } else {
            CheckoutState::Filling
        }
    }

    /// What to render for the current state.
    pub fn view<C>(&self, cart: &C) -> CheckoutView
    where
        C: CartView + ?Sized,
    {
        if let Some(order) = &self.order {
            return CheckoutView::Confirmation {
                title: "Thank you for your order!".to_string(),
                message: "We've received your order and are preparing your plants for their new home."
                    .to_string(),
                order: order.clone(),
                destination: Destination::Home,
            };
        }

        if cart.is_empty() {
            return CheckoutView::EmptyCart {
                title: "Your cart is empty".to_string(),
                message: "Add some plants to your cart to proceed to checkout.".to_string(),
                destination: Destination::Shop,
            };
        }

        let summary = cart.summary();
        let submit_label = format!("Place Order ({})", summary.grand_total.display());
        CheckoutView::Form {
            summary,
            submit_label,
        }
    }

    /// Place the order.
    ///
    /// Fails without changing state when the flow is already submitted, the
    /// cart is empty, or a required field is missing.
    pub fn submit<C>(&mut self, cart: &C, form: &CheckoutForm) -> Result<&Order, CommerceError>
    where
        C: CartView + ?Sized,
    {
        if self.order.is_some() {
            return Err(CommerceError::AlreadySubmitted);
        }
        if cart.is_empty() {
            tracing::warn!("checkout rejected: cart is empty");
            return Err(CommerceError::CartEmpty);
        }

        let report = form.validate();
        if !report.is_valid() {
            tracing::warn!(missing = %report, "checkout rejected");
            return Err(CommerceError::CheckoutIncomplete(report));
        }

        let number = self.numbers.next_number();
        let order = Order::from_cart(number, cart, form);
        tracing::info!(
            order_number = %order.number,
            total = %order.total,
            lines = order.lines.len(),
            "order placed"
        );
        Ok(self.order.insert(order))
    }

    /// The confirmed order, once submitted.
    pub fn order(&self) -> Option<&Order> {
        self.order.as_ref()
    }

    pub fn is_submitted(&self) -> bool {
        self.order.is_some()
    }
}

impl Default for CheckoutFlow {
    fn default() -> Self {
        Self::new()
    }
}
