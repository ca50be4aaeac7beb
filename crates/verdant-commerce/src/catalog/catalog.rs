//! The read-only product catalog.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::catalog::{Category, Difficulty, Filter, Light, Product, Watering};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};

/// An ordered, immutable list of products.
///
/// Product ids are unique and prices are non-negative; both are checked once
/// at construction and never change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and negative prices.
    pub fn new(products: Vec<Product>) -> Result<Self, CommerceError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id.as_str()) {
                return Err(CommerceError::DuplicateProduct(product.id.to_string()));
            }
            if product.price.is_negative() {
                return Err(CommerceError::InvalidPrice {
                    product_id: product.id.to_string(),
                    amount_cents: product.price.amount_cents,
                });
            }
        }
        Ok(Self { products })
    }

    /// The shop's built-in ten-plant catalog.
    pub fn plant_shop() -> Self {
        Self {
            products: seed_products(),
        }
    }

    /// Parse a TOML catalog document.
    ///
    /// ```toml
    /// currency = "USD"
    ///
    /// [[products]]
    /// id = "1"
    /// name = "Monstera Deliciosa"
    /// scientific_name = "Monstera deliciosa"
    /// price = 45.00
    /// image = "/monstera.png"
    /// category = "indoor"
    /// light = "bright"
    /// water = "weekly"
    /// difficulty = "easy"
    /// description = "..."
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self, CommerceError> {
        let doc: CatalogDocument = toml::from_str(content)?;
        let currency = match doc.currency.as_deref() {
            None => Currency::default(),
            Some(code) => Currency::from_code(code).ok_or_else(|| {
                CommerceError::InvalidCatalog(format!("unknown currency: {}", code))
            })?,
        };

        let products = doc
            .products
            .into_iter()
            .map(|record| record.into_product(currency))
            .collect::<Result<Vec<_>, _>>()?;
        let catalog = Self::new(products)?;
        tracing::debug!(products = catalog.len(), %currency, "loaded catalog");
        Ok(catalog)
    }

    /// Load a TOML catalog from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CommerceError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// All products in display order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Look up a product by id, failing if it is absent.
    pub fn require(&self, id: &ProductId) -> Result<&Product, CommerceError> {
        self.get(id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    /// Products passing every filter, in display order.
    pub fn filter(&self, filters: &[Filter]) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| filters.iter().all(|f| f.matches(p)))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::plant_shop()
    }
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    currency: Option<String>,
    #[serde(default)]
    products: Vec<ProductRecord>,
}

#[derive(Debug, Deserialize)]
struct ProductRecord {
    id: String,
    name: String,
    #[serde(alias = "scientificName", default)]
    scientific_name: String,
    #[serde(default)]
    description: String,
    price: f64,
    #[serde(default)]
    image: String,
    category: Category,
    light: Light,
    water: Watering,
    difficulty: Difficulty,
}

impl ProductRecord {
    fn into_product(self, currency: Currency) -> Result<Product, CommerceError> {
        let price = Money::from_decimal(self.price, currency).ok_or_else(|| {
            CommerceError::InvalidCatalog(format!(
                "price {} of product {} is not a representable amount",
                self.price, self.id
            ))
        })?;
        Ok(Product {
            id: ProductId::new(self.id),
            name: self.name,
            scientific_name: self.scientific_name,
            description: self.description,
            price,
            image: self.image,
            category: self.category,
            light: self.light,
            water: self.water,
            difficulty: self.difficulty,
        })
    }
}

#[allow(clippy::too_many_arguments)]
fn plant(
    id: &str,
    name: &str,
    scientific_name: &str,
    price_cents: i64,
    image: &str,
    category: Category,
    care: (Light, Watering, Difficulty),
    description: &str,
) -> Product {
    let (light, water, difficulty) = care;
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        scientific_name: scientific_name.to_string(),
        description: description.to_string(),
        price: Money::usd(price_cents),
        image: image.to_string(),
        category,
        light,
        water,
        difficulty,
    }
}

fn seed_products() -> Vec<Product> {
    use Category::*;
    use Difficulty as D;
    use Light as L;
    use Watering as W;

    vec![
        plant(
            "1",
            "Monstera Deliciosa",
            "Monstera deliciosa",
            4500,
            "/monstera.png",
            Indoor,
            (L::Bright, W::Weekly, D::Easy),
            "The Monstera Deliciosa, also known as the Swiss Cheese Plant, is famous for its natural leaf holes. It loves bright, indirect light and needs watering every 1-2 weeks.",
        ),
        plant(
            "2",
            "Snake Plant",
            "Sansevieria trifasciata",
            3000,
            "/snake-plant.png",
            Indoor,
            (L::Low, W::BiWeekly, D::Easy),
            "A hardy succulent that can survive low light and drought. Perfect for beginners.",
        ),
        plant(
            "3",
            "Fiddle Leaf Fig",
            "Ficus lyrata",
            5500,
            "/fiddle-leaf.png",
            Indoor,
            (L::Bright, W::Weekly, D::Medium),
            "Popular for its large, violin-shaped leaves. Needs bright, filtered light.",
        ),
        plant(
            "4",
            "Peace Lily",
            "Spathiphyllum",
            3500,
            "/peace-lily.png",
            Indoor,
            (L::Low, W::Weekly, D::Easy),
            "An elegant plant with white blooms that thrives in low light. It droops when it needs water, making it easy to care for.",
        ),
        plant(
            "5",
            "Aloe Vera",
            "Aloe barbadensis miller",
            2500,
            "/aloe-vera.png",
            Succulent,
            (L::Bright, W::BiWeekly, D::Easy),
            "A medicinal succulent known for its soothing gel. Loves bright sunlight and dry soil.",
        ),
        plant(
            "6",
            "Spider Plant",
            "Chlorophytum comosum",
            2000,
            "/spider-plant.png",
            Indoor,
            (L::Medium, W::Weekly, D::Easy),
            "A fast-growing plant that produces \"babies\". Great for hanging baskets and purifying air.",
        ),
        plant(
            "7",
            "Rubber Plant",
            "Ficus elastica",
            4000,
            "/rubber-plant.png",
            Indoor,
            (L::Bright, W::Weekly, D::Medium),
            "Features striking dark green leaves. A bold statement plant that prefers bright, indirect light.",
        ),
        plant(
            "8",
            "ZZ Plant",
            "Zamioculcas zamiifolia",
            3200,
            "/zz-plant.png",
            Indoor,
            (L::Low, W::BiWeekly, D::Easy),
            "Virtually indestructible. Tolerates low light and neglect better than almost any other plant.",
        ),
        plant(
            "9",
            "Golden Pothos",
            "Epipremnum aureum",
            1800,
            "/pothos.png",
            Indoor,
            (L::Medium, W::Weekly, D::Easy),
            "A trailing vine that is incredibly easy to grow. Can thrive in a variety of light conditions.",
        ),
        plant(
            "10",
            "Bird of Paradise",
            "Strelitzia reginae",
            6500,
            "/bird-of-paradise.png",
            Indoor,
            (L::Bright, W::Weekly, D::Medium),
            "Bring the tropics home with its large, banana-like leaves. Needs plenty of bright light to flourish.",
        ),
    ]
}
