//! Pricing preview module.
//!
//! Bulk price adjustment rules, the per-product calculation, preview assembly
//! against an injected catalog, and the aggregate totals derived from a
//! preview. Everything here is pure: nothing is ever written back to the
//! catalog.

pub mod preview;
pub mod rule;
pub mod totals;

pub use preview::{PreviewRequest, PreviewRow, assemble_preview, missing_ids};
pub use rule::{AdjustmentKind, AdjustmentRule, Direction, compute};
pub use totals::{PreviewTotals, Trend};
