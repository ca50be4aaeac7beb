//! Product catalog module.
//!
//! Contains product records, their care attributes, and the catalog itself.

mod catalog;
mod filter;
mod product;

pub use catalog::Catalog;
pub use filter::Filter;
pub use product::{Category, Difficulty, Light, Product, Watering};
