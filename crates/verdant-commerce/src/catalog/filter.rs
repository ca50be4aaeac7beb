//! Catalog filters.

use crate::catalog::{Category, Difficulty, Light, Product, Watering};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A predicate over catalog products. Lists of filters are ANDed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Filter {
    Category(Category),
    Light(Light),
    Water(Watering),
    Difficulty(Difficulty),
    /// Inclusive price bounds.
    PriceRange {
        min: Option<Money>,
        max: Option<Money>,
    },
    /// Case-insensitive match in name, scientific name or description.
    Text(String),
}

impl Filter {
    /// Create a price range filter.
    pub fn price_range(min: Option<Money>, max: Option<Money>) -> Self {
        Filter::PriceRange { min, max }
    }

    /// Create a text search filter.
    pub fn text(query: impl Into<String>) -> Self {
        Filter::Text(query.into())
    }

    /// Whether `product` passes this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Filter::Category(c) => product.category == *c,
            Filter::Light(l) => product.light == *l,
            Filter::Water(w) => product.water == *w,
            Filter::Difficulty(d) => product.difficulty == *d,
            Filter::PriceRange { min, max } => {
                let above = min.map_or(true, |m| product.price.amount_cents >= m.amount_cents);
                let below = max.map_or(true, |m| product.price.amount_cents <= m.amount_cents);
                above && below
            }
            Filter::Text(query) => {
                let query = query.trim().to_lowercase();
                query.is_empty()
                    || [&product.name, &product.scientific_name, &product.description]
                        .iter()
                        .any(|field| field.to_lowercase().contains(&query))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fern() -> Product {
        let mut p = Product::new("f", "Boston Fern", Money::usd(2200))
            .with_care(Light::Medium, Watering::Weekly, Difficulty::Medium);
        p.scientific_name = "Nephrolepis exaltata".to_string();
        p
    }

    #[test]
    fn test_price_range_is_inclusive() {
        let p = fern();
        assert!(Filter::price_range(Some(Money::usd(2200)), Some(Money::usd(2200))).matches(&p));
        assert!(!Filter::price_range(None, Some(Money::usd(2199))).matches(&p));
        assert!(Filter::price_range(None, None).matches(&p));
    }

    #[test]
    fn test_text_filter_is_case_insensitive() {
        let p = fern();
        assert!(Filter::text("NEPHRO").matches(&p));
        assert!(Filter::text("fern").matches(&p));
        assert!(!Filter::text("cactus").matches(&p));
    }

    #[test]
    fn test_attribute_filters() {
        let p = fern();
        assert!(Filter::Light(Light::Medium).matches(&p));
        assert!(!Filter::Difficulty(Difficulty::Easy).matches(&p));
        assert!(Filter::Category(Category::Indoor).matches(&p));
    }
}
