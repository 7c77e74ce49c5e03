//! Products catalog module.
//!
//! This crate holds the catalog reference data and its query capability,
//! implemented as deterministic logic over an injected read-only provider
//! (no HTTP, no persistence).

pub mod catalog;
pub mod product;
mod seed;

pub use catalog::{CatalogLoadError, CatalogProvider, InMemoryCatalog};
pub use product::{Product, normalize_search};
