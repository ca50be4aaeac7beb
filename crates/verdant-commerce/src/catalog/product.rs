//! Product records and their care attributes.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a plant is meant to live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Indoor,
    Outdoor,
    Succulent,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Indoor, Category::Outdoor, Category::Succulent];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Indoor => "indoor",
            Category::Outdoor => "outdoor",
            Category::Succulent => "succulent",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s.trim().to_lowercase())
    }
}

/// Light a plant needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Light {
    Low,
    #[default]
    Medium,
    Bright,
}

impl Light {
    pub const ALL: [Light; 3] = [Light::Low, Light::Medium, Light::Bright];

    pub fn as_str(&self) -> &'static str {
        match self {
            Light::Low => "low",
            Light::Medium => "medium",
            Light::Bright => "bright",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|l| l.as_str() == s.trim().to_lowercase())
    }
}

/// How often a plant wants water.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Watering {
    #[default]
    Weekly,
    BiWeekly,
    Monthly,
}

impl Watering {
    pub const ALL: [Watering; 3] = [Watering::Weekly, Watering::BiWeekly, Watering::Monthly];

    pub fn as_str(&self) -> &'static str {
        match self {
            Watering::Weekly => "weekly",
            Watering::BiWeekly => "bi-weekly",
            Watering::Monthly => "monthly",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|w| w.as_str() == s.trim().to_lowercase())
    }
}

/// Care difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Expert];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Expert => "expert",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == s.trim().to_lowercase())
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

display_as_str!(Category, Light, Watering, Difficulty);

/// A purchasable plant.
///
/// Records are immutable once they are part of a [`Catalog`](super::Catalog).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Common name.
    pub name: String,
    /// Botanical name.
    pub scientific_name: String,
    /// Care notes shown on the product page.
    pub description: String,
    /// Unit price.
    pub price: Money,
    /// Display asset reference, resolved by the renderer.
    pub image: String,
    pub category: Category,
    pub light: Light,
    pub water: Watering,
    pub difficulty: Difficulty,
}

impl Product {
    /// Create a product with default care attributes.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Money) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            scientific_name: String::new(),
            description: String::new(),
            price,
            image: String::new(),
            category: Category::default(),
            light: Light::default(),
            water: Watering::default(),
            difficulty: Difficulty::default(),
        }
    }

    /// Set the care attributes.
    pub fn with_care(mut self, light: Light, water: Watering, difficulty: Difficulty) -> Self {
        self.light = light;
        self.water = water;
        self.difficulty = difficulty;
        self
    }

    /// One-line care summary, e.g. "bright light, water weekly, easy".
    pub fn care_summary(&self) -> String {
        format!(
            "{} light, water {}, {}",
            self.light, self.water, self.difficulty
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_string_forms() {
        assert_eq!(Watering::BiWeekly.as_str(), "bi-weekly");
        assert_eq!(Watering::parse("Bi-Weekly"), Some(Watering::BiWeekly));
        assert_eq!(Category::parse("succulent"), Some(Category::Succulent));
        assert_eq!(Light::parse("dim"), None);
        assert_eq!(Difficulty::parse(" expert "), Some(Difficulty::Expert));
    }

    #[test]
    fn test_enum_serde_matches_as_str() {
        for w in Watering::ALL {
            let json = serde_json::to_string(&w).unwrap();
            assert_eq!(json, format!("\"{}\"", w.as_str()));
        }
        let d: Difficulty = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(d, Difficulty::Medium);
    }

    #[test]
    fn test_care_summary() {
        let p = Product::new("1", "Snake Plant", Money::usd(3000)).with_care(
            Light::Low,
            Watering::BiWeekly,
            Difficulty::Easy,
        );
        assert_eq!(p.care_summary(), "low light, water bi-weekly, easy");
    }
}
