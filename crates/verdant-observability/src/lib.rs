//! Observability for the Verdant storefront.
//!
//! This crate provides:
//! - `LogLevel` / `LogFormat` - the knobs exposed in `verdant.toml`
//! - `init_logging` - installs the global `tracing` subscriber

mod logging;

pub use logging::*;
