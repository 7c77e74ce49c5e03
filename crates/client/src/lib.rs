//! `pricepreview-client`
//!
//! **Responsibility:** client-side state for the pricing preview screen.
//!
//! This crate provides:
//! - Search + category/segment/brand filtering of the loaded catalog
//! - Product selection (one / multiple / all) that survives filter changes
//! - Preview aggregates and display formatting
//! - A thin HTTP client for the catalog and preview endpoints
//!
//! The service remains the authority for prices; nothing here mutates the catalog.

pub mod api;
pub mod filter;
pub mod format;
pub mod selection;
pub mod workspace;

pub use api::{ApiClient, ClientError};
pub use filter::{FieldFilter, FilterOptions, FilterState};
pub use selection::{SelectionMode, SelectionState};
pub use workspace::Workspace;
