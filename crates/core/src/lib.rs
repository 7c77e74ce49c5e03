//! Shared building blocks for the pricepreview crates.
//!
//! This crate contains **pure** primitives used by the catalog, pricing, API and
//! client crates (no IO, no HTTP).

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use id::ProductId;
