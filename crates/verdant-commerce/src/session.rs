//! A shopper's session: the owner of their cart and checkout.

use crate::cart::CartStore;
use crate::catalog::Product;
use crate::checkout::{
    CheckoutFlow, CheckoutForm, CheckoutState, CheckoutView, Order, OrderNumberScheme,
};
use crate::error::CommerceError;
use crate::ids::SessionId;
use crate::money::Currency;

/// Owns one cart and the checkout flow reading it.
///
/// The flow never mutates the cart; the session clears it once an order
/// has been placed.
#[derive(Debug)]
pub struct ShopSession {
    id: SessionId,
    cart: CartStore,
    checkout: CheckoutFlow,
    scheme: OrderNumberScheme,
    sequence_start: u32,
}

impl ShopSession {
    /// Start a USD session with random order numbers.
    pub fn new() -> Self {
        Self::with_settings(Currency::USD, OrderNumberScheme::Random, 0)
    }

    pub fn with_settings(currency: Currency, scheme: OrderNumberScheme, sequence_start: u32) -> Self {
        let id = SessionId::generate();
        tracing::debug!(session_id = %id, scheme = scheme.as_str(), "session started");
        Self {
            id,
            cart: CartStore::with_currency(currency),
            checkout: CheckoutFlow::with_generator(scheme.generator(sequence_start)),
            scheme,
            sequence_start,
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// Mutable access for add/remove/update operations.
    pub fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }

    /// Shorthand for `cart_mut().add_item(..)`.
    pub fn add_to_cart(&mut self, product: &Product, quantity: i64) -> Result<i64, CommerceError> {
        self.cart.add_item(product, quantity)
    }

    pub fn checkout(&self) -> &CheckoutFlow {
        &self.checkout
    }

    pub fn checkout_state(&self) -> CheckoutState {
        self.checkout.state(&self.cart)
    }

    pub fn checkout_view(&self) -> CheckoutView {
        self.checkout.view(&self.cart)
    }

    /// Submit checkout and, on success, empty the cart.
    pub fn place_order(&mut self, form: &CheckoutForm) -> Result<Order, CommerceError> {
        let order = self.checkout.submit(&self.cart, form)?.clone();
        self.cart.clear();
        tracing::info!(session_id = %self.id, order_number = %order.number, "cart finalized");
        Ok(order)
    }

    /// Begin a fresh checkout, keeping whatever is in the cart.
    ///
    /// Sequential numbering continues from where the previous flow stopped.
    pub fn restart_checkout(&mut self) {
        let next_start = match (self.scheme, self.checkout.order()) {
            (OrderNumberScheme::Sequential, Some(order)) => order.number.value().saturating_add(1),
            _ => self.sequence_start,
        };
        self.sequence_start = next_start;
        self.checkout = CheckoutFlow::with_generator(self.scheme.generator(next_start));
        tracing::debug!(session_id = %self.id, state = self.checkout_state().as_str(), "checkout restarted");
    }
}

impl Default for ShopSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartView;
    use crate::catalog::Catalog;
    use crate::checkout::form::complete_form;
    use crate::checkout::FormField;
    use crate::ids::ProductId;

    fn session_with_aloe() -> ShopSession {
        let shop = Catalog::plant_shop();
        let mut session = ShopSession::with_settings(Currency::USD, OrderNumberScheme::Sequential, 100);
        session
            .add_to_cart(shop.require(&ProductId::new("5")).unwrap(), 2)
            .unwrap();
        session
    }

    #[test]
    fn test_place_order_clears_cart() {
        let mut session = session_with_aloe();
        assert_eq!(session.checkout_state(), CheckoutState::Filling);

        let order = session.place_order(&complete_form()).unwrap();

        assert_eq!(order.total.display(), "$50.00");
        assert!(session.cart().is_empty());
        assert_eq!(session.checkout_state(), CheckoutState::Submitted);
        assert!(matches!(
            session.checkout_view(),
            CheckoutView::Confirmation { .. }
        ));
    }

    #[test]
    fn test_failed_order_keeps_cart() {
        let mut session = session_with_aloe();
        let form = complete_form().with(FormField::Email, "");

        assert!(session.place_order(&form).is_err());
        assert_eq!(session.cart().item_count(), 2);
        assert_eq!(session.checkout_state(), CheckoutState::Filling);
    }

    #[test]
    fn test_restart_checkout() {
        let mut session = session_with_aloe();
        let first = session.place_order(&complete_form()).unwrap();

        session.restart_checkout();
        assert_eq!(session.checkout_state(), CheckoutState::Empty);

        let shop = Catalog::plant_shop();
        session
            .add_to_cart(shop.require(&ProductId::new("1")).unwrap(), 1)
            .unwrap();
        assert_eq!(session.checkout_state(), CheckoutState::Filling);

        let second = session.place_order(&complete_form()).unwrap();
        assert_eq!(first.number.value(), 100);
        assert_eq!(second.number.value(), 101);
    }
}
