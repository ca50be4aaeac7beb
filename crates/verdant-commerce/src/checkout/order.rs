//! Order confirmations and their display numbers.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cart::{CartView, LineSummary};
use crate::checkout::CheckoutForm;
use crate::money::Money;

/// Number shown to the customer on the confirmation screen.
///
/// Purely cosmetic: it is not guaranteed unique and nothing looks orders up
/// by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderNumber(u32);

impl OrderNumber {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Source of order numbers.
pub trait OrderNumberGenerator: fmt::Debug + Send {
    fn next_number(&mut self) -> OrderNumber;
}

/// Uniformly random numbers in `0..10000`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomOrderNumber;

impl RandomOrderNumber {
    pub const UPPER_BOUND: u32 = 10_000;
}

impl OrderNumberGenerator for RandomOrderNumber {
    fn next_number(&mut self) -> OrderNumber {
        use rand::Rng;

        OrderNumber(rand::thread_rng().gen_range(0..Self::UPPER_BOUND))
    }
}

/// Non-decreasing numbers from a fixed start, saturating at `u32::MAX`.
#[derive(Debug, Clone, Copy)]
pub struct SequentialOrderNumber {
    next: u32,
}

impl SequentialOrderNumber {
    pub fn starting_at(start: u32) -> Self {
        Self { next: start }
    }
}

impl OrderNumberGenerator for SequentialOrderNumber {
    fn next_number(&mut self) -> OrderNumber {
        let number = OrderNumber(self.next);
        self.next = self.next.saturating_add(1);
        number
    }
}

/// Which generator a shop uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderNumberScheme {
    #[default]
    Random,
    Sequential,
}

impl OrderNumberScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderNumberScheme::Random => "random",
            OrderNumberScheme::Sequential => "sequential",
        }
    }

    /// Build a generator; `start` only applies to the sequential scheme.
    pub fn generator(&self, start: u32) -> Box<dyn OrderNumberGenerator> {
        match self {
            OrderNumberScheme::Random => Box::new(RandomOrderNumber),
            OrderNumberScheme::Sequential => Box::new(SequentialOrderNumber::starting_at(start)),
        }
    }
}

/// Snapshot of a cart at submission time.
///
/// Shown once and then discarded; payment details are never copied here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub number: OrderNumber,
    pub lines: Vec<LineSummary>,
    pub total: Money,
    pub customer_name: String,
    pub email: String,
    pub ship_to: String,
    pub placed_at: DateTime<Utc>,
}

impl Order {
    /// Snapshot `cart` and the customer details from `form`.
    pub fn from_cart<C>(number: OrderNumber, cart: &C, form: &CheckoutForm) -> Self
    where
        C: CartView + ?Sized,
    {
        let summary = cart.summary();
        Self {
            number,
            lines: summary.lines,
            total: summary.grand_total,
            customer_name: form.full_name(),
            email: form.email.trim().to_string(),
            ship_to: form.ship_to(),
            placed_at: Utc::now(),
        }
    }

    /// Total number of units, saturating at `i64::MAX`.
    pub fn item_count(&self) -> i64 {
        self.lines
            .iter()
            .fold(0i64, |n, l| n.saturating_add(l.quantity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartStore;
    use crate::catalog::Catalog;
    use crate::checkout::form::complete_form;
    use crate::ids::ProductId;

    #[test]
    fn test_order_number_display() {
        assert_eq!(OrderNumber::new(42).to_string(), "#42");
    }

    #[test]
    fn test_random_numbers_stay_in_range() {
        let mut g = RandomOrderNumber;
        for _ in 0..1000 {
            assert!(g.next_number().value() < RandomOrderNumber::UPPER_BOUND);
        }
    }

    #[test]
    fn test_sequential_numbers_saturate() {
        let mut g = SequentialOrderNumber::starting_at(1000);
        let a = g.next_number();
        let b = g.next_number();
        assert_eq!(a.value(), 1000);
        assert!(b > a);

        let mut at_max = SequentialOrderNumber::starting_at(u32::MAX);
        assert_eq!(at_max.next_number().value(), u32::MAX);
        assert_eq!(at_max.next_number().value(), u32::MAX);
    }

    #[test]
    fn test_scheme_builds_generator() {
        let mut g = OrderNumberScheme::Sequential.generator(7);
        assert_eq!(g.next_number(), OrderNumber::new(7));
        let scheme: OrderNumberScheme = serde_json::from_str("\"random\"").unwrap();
        assert_eq!(scheme, OrderNumberScheme::Random);
    }

    #[test]
    fn test_order_snapshot() {
        let shop = Catalog::plant_shop();
        let mut cart = CartStore::new();
        cart.add_item(shop.require(&ProductId::new("5")).unwrap(), 2)
            .unwrap();

        let order = Order::from_cart(OrderNumber::new(1), &cart, &complete_form());
        cart.clear();

        assert_eq!(order.total.display(), "$50.00");
        assert_eq!(order.item_count(), 2);
        assert_eq!(order.lines[0].name, "Aloe Vera");
        assert_eq!(order.customer_name, "Ada Lovelace");

        let json = serde_json::to_string(&order).unwrap();
        assert!(!json.contains("4242"));
    }
}
