//! Cart store and cart items.

use crate::cart::CartSummary;
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Read access to a cart, as consumed by checkout and renderers.
pub trait CartView {
    /// Items in insertion order.
    fn items(&self) -> &[CartItem];

    /// Sum of `price * quantity` over all items.
    fn cart_total(&self) -> Money;

    fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    /// Per-line breakdown for an order summary panel.
    fn summary(&self) -> CartSummary {
        CartSummary::from_items(self.items(), self.cart_total())
    }
}

/// One product in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Product as it was when first added.
    pub product: Product,
    /// Always at least 1.
    pub quantity: i64,
    /// `product.price * quantity`.
    pub subtotal: Money,
}

impl CartItem {
    pub fn id(&self) -> &ProductId {
        &self.product.id
    }
}

/// A shopper's cart.
///
/// Holds at most one [`CartItem`] per product id. The running total and the
/// unit count are checked on every mutation, so a mutation that would
/// overflow is rejected and leaves the cart untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartStore {
    items: Vec<CartItem>,
    total: Money,
    currency: Currency,
}

impl CartStore {
    /// Create an empty USD cart.
    pub fn new() -> Self {
        Self::with_currency(Currency::USD)
    }

    /// Create an empty cart priced in `currency`.
    pub fn with_currency(currency: Currency) -> Self {
        Self {
            items: Vec::new(),
            total: Money::zero(currency),
            currency,
        }
    }

    /// Add `quantity` units of `product`.
    ///
    /// Repeated adds of the same product accumulate on its existing line.
    /// Returns the line's new quantity.
    pub fn add_item(&mut self, product: &Product, quantity: i64) -> Result<i64, CommerceError> {
        if quantity <= 0 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }
        if product.price.currency != self.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: product.price.currency.code().to_string(),
            });
        }

        if let Some(index) = self.position(&product.id) {
            let current = self.items[index].quantity;
            let new_quantity = current
                .checked_add(quantity)
                .ok_or(CommerceError::Overflow)?;
            self.set_line_quantity(index, new_quantity)?;
            tracing::debug!(product_id = %product.id, quantity = new_quantity, "cart line increased");
            return Ok(new_quantity);
        }

        self.item_count()
            .checked_add(quantity)
            .ok_or(CommerceError::Overflow)?;
        let subtotal = product
            .price
            .try_multiply(quantity)
            .ok_or(CommerceError::Overflow)?;
        let total = self
            .total
            .try_add(&subtotal)
            .ok_or(CommerceError::Overflow)?;

        self.items.push(CartItem {
            product: product.clone(),
            quantity,
            subtotal,
        });
        self.total = total;
        tracing::debug!(product_id = %product.id, quantity, "cart line added");
        Ok(quantity)
    }

    /// Remove a single unit. Removing the last unit removes the line.
    ///
    /// Returns false if the product is not in the cart.
    pub fn remove_one(&mut self, id: &ProductId) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        let remaining = self.items[index].quantity - 1;
        if remaining == 0 {
            return self.remove_item(id);
        }
        // Shrinking a line cannot overflow.
        if self.set_line_quantity(index, remaining).is_err() {
            return false;
        }
        tracing::debug!(product_id = %id, quantity = remaining, "cart line decreased");
        true
    }

    /// Remove a whole line.
    pub fn remove_item(&mut self, id: &ProductId) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        let item = self.items.remove(index);
        self.total = Money::new(
            self.total.amount_cents - item.subtotal.amount_cents,
            self.currency,
        );
        tracing::debug!(product_id = %id, "cart line removed");
        true
    }

    /// Set a line's quantity.
    ///
    /// A quantity of zero or less removes the line. Returns `Ok(false)` if
    /// the product is not in the cart.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: i64) -> Result<bool, CommerceError> {
        if quantity <= 0 {
            return Ok(self.remove_item(id));
        }
        match self.position(id) {
            Some(index) => {
                self.set_line_quantity(index, quantity)?;
                tracing::debug!(product_id = %id, quantity, "cart line updated");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.total = Money::zero(self.currency);
        tracing::debug!("cart cleared");
    }

    /// Look up a line by product id.
    pub fn get(&self, id: &ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| i.id() == id)
    }

    /// Total number of units (sum of quantities). Always fits in an `i64`.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Number of distinct products.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    fn position(&self, id: &ProductId) -> Option<usize> {
        self.items.iter().position(|i| i.id() == id)
    }

    fn set_line_quantity(&mut self, index: usize, quantity: i64) -> Result<(), CommerceError> {
        let item = &self.items[index];
        (self.item_count() - item.quantity)
            .checked_add(quantity)
            .ok_or(CommerceError::Overflow)?;
        let subtotal = item
            .product
            .price
            .try_multiply(quantity)
            .ok_or(CommerceError::Overflow)?;
        let total = self
            .total
            .try_subtract(&item.subtotal)
            .and_then(|t| t.try_add(&subtotal))
            .ok_or(CommerceError::Overflow)?;

        let item = &mut self.items[index];
        item.quantity = quantity;
        item.subtotal = subtotal;
        self.total = total;
        Ok(())
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CartView for CartStore {
    fn items(&self) -> &[CartItem] {
        &self.items
    }

    fn cart_total(&self) -> Money {
        self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn plant(id: &str, price_cents: i64) -> Product {
        Product::new(id, format!("Plant {}", id), Money::usd(price_cents))
    }

    fn assert_total_matches_lines(cart: &CartStore) {
        let expected: i64 = cart
            .items()
            .iter()
            .map(|i| i.product.price.amount_cents * i.quantity)
            .sum();
        assert_eq!(cart.cart_total().amount_cents, expected);
    }

    #[test]
    fn test_new_cart_is_empty() {
        let cart = CartStore::new();
        assert!(cart.is_empty());
        assert!(cart.cart_total().is_zero());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_aloe_vera_times_two() {
        let shop = Catalog::plant_shop();
        let aloe = shop.require(&ProductId::new("5")).unwrap();

        let mut cart = CartStore::new();
        cart.add_item(aloe, 2).unwrap();

        assert_eq!(cart.cart_total(), Money::usd(5000));
        assert_eq!(cart.cart_total().display(), "$50.00");
    }

    #[test]
    fn test_add_same_item_increases_quantity() {
        let mut cart = CartStore::new();
        let p = plant("a", 1000);

        assert_eq!(cart.add_item(&p, 1).unwrap(), 1);
        assert_eq!(cart.add_item(&p, 2).unwrap(), 3);

        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.item_count(), 3);
        assert_total_matches_lines(&cart);
    }

    #[test]
    fn test_insertion_order_is_display_order() {
        let mut cart = CartStore::new();
        cart.add_item(&plant("b", 100), 1).unwrap();
        cart.add_item(&plant("a", 100), 1).unwrap();
        cart.add_item(&plant("b", 100), 1).unwrap();

        let ids: Vec<&str> = cart.items().iter().map(|i| i.id().as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
    }

    #[test]
    fn test_invalid_quantity() {
        let mut cart = CartStore::new();
        let p = plant("a", 1000);
        assert!(matches!(
            cart.add_item(&p, 0),
            Err(CommerceError::InvalidQuantity(0))
        ));
        assert!(matches!(
            cart.add_item(&p, -3),
            Err(CommerceError::InvalidQuantity(-3))
        ));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_last_unit_removes_line() {
        let mut cart = CartStore::new();
        let a = plant("a", 4500);
        let b = plant("b", 3000);
        cart.add_item(&a, 1).unwrap();
        cart.add_item(&b, 1).unwrap();
        let before = cart.cart_total();

        assert!(cart.remove_one(&a.id));

        assert!(cart.get(&a.id).is_none());
        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(
            before.amount_cents - cart.cart_total().amount_cents,
            4500
        );
    }

    #[test]
    fn test_remove_one_decrements() {
        let mut cart = CartStore::new();
        let a = plant("a", 250);
        cart.add_item(&a, 3).unwrap();

        assert!(cart.remove_one(&a.id));
        assert_eq!(cart.get(&a.id).unwrap().quantity, 2);
        assert_total_matches_lines(&cart);

        assert!(!cart.remove_one(&ProductId::new("missing")));
    }

    #[test]
    fn test_update_quantity() {
        let mut cart = CartStore::new();
        let a = plant("a", 1000);
        cart.add_item(&a, 1).unwrap();

        assert!(cart.update_quantity(&a.id, 5).unwrap());
        assert_eq!(cart.item_count(), 5);
        assert_eq!(cart.cart_total(), Money::usd(5000));

        assert!(!cart.update_quantity(&ProductId::new("missing"), 2).unwrap());
    }

    #[test]
    fn test_non_positive_quantity_removes_line() {
        let mut cart = CartStore::new();
        let a = plant("a", 1000);
        let b = plant("b", 700);
        cart.add_item(&a, 2).unwrap();
        cart.add_item(&b, 1).unwrap();

        assert!(cart.update_quantity(&a.id, 0).unwrap());
        assert!(cart.get(&a.id).is_none());
        assert!(cart.update_quantity(&b.id, -4).unwrap());
        assert!(cart.is_empty());
        assert!(cart.cart_total().is_zero());
    }

    #[test]
    fn test_clear_resets_total() {
        let mut cart = CartStore::new();
        cart.add_item(&plant("a", 1000), 2).unwrap();
        cart.add_item(&plant("b", 500), 1).unwrap();

        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.cart_total(), Money::zero(Currency::USD));
    }

    #[test]
    fn test_overflow_leaves_cart_unchanged() {
        let mut cart = CartStore::new();
        let pricey = plant("a", i64::MAX / 2);
        cart.add_item(&pricey, 1).unwrap();
        let snapshot = cart.clone();

        assert!(matches!(
            cart.add_item(&pricey, 2),
            Err(CommerceError::Overflow)
        ));
        assert!(matches!(
            cart.add_item(&plant("b", i64::MAX / 2 + 10), 1),
            Err(CommerceError::Overflow)
        ));
        assert_eq!(cart, snapshot);
    }

    #[test]
    fn test_currency_mismatch() {
        let mut cart = CartStore::new();
        let euro = Product::new("e", "Euro Fern", Money::new(900, Currency::EUR));
        assert!(matches!(
            cart.add_item(&euro, 1),
            Err(CommerceError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_mixed_mutations_keep_total_consistent() {
        let shop = Catalog::plant_shop();
        let mut cart = CartStore::new();
        for (id, qty) in [("1", 2), ("5", 1), ("9", 4), ("1", 1), ("10", 3)] {
            cart.add_item(shop.require(&ProductId::new(id)).unwrap(), qty)
                .unwrap();
            assert_total_matches_lines(&cart);
        }
        cart.remove_one(&ProductId::new("9"));
        assert_total_matches_lines(&cart);
        cart.update_quantity(&ProductId::new("10"), 1).unwrap();
        assert_total_matches_lines(&cart);
        cart.remove_item(&ProductId::new("5"));
        assert_total_matches_lines(&cart);
    }

    #[test]
    fn test_unit_count_overflow_across_free_lines() {
        let mut cart = CartStore::new();
        let cutting = plant("cutting", 0);
        let seedling = plant("seedling", 0);
        cart.add_item(&cutting, i64::MAX).unwrap();
        let snapshot = cart.clone();

        assert!(matches!(
            cart.add_item(&seedling, 1),
            Err(CommerceError::Overflow)
        ));
        assert_eq!(cart, snapshot);
        assert_eq!(cart.item_count(), i64::MAX);
        assert_eq!(cart.summary().item_count(), i64::MAX);

        cart.update_quantity(&cutting.id, i64::MAX - 1).unwrap();
        cart.add_item(&seedling, 1).unwrap();
        assert!(matches!(
            cart.update_quantity(&seedling.id, 2),
            Err(CommerceError::Overflow)
        ));
        assert_eq!(cart.item_count(), i64::MAX);
    }
}
