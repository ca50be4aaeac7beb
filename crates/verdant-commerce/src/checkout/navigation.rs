//! Destinations the storefront asks the router to show.

use serde::{Deserialize, Serialize};

/// A view the navigation layer can route to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Destination {
    Home,
    Shop,
    Checkout,
}

impl Destination {
    pub fn path(&self) -> &'static str {
        match self {
            Destination::Home => "/",
            Destination::Shop => "/shop",
            Destination::Checkout => "/checkout",
        }
    }

    /// Button text for a link to this destination.
    pub fn link_label(&self) -> &'static str {
        match self {
            Destination::Home => "Back to Home",
            Destination::Shop => "Return to Shop",
            Destination::Checkout => "Proceed to Checkout",
        }
    }
}
