use serde::Deserialize;

pub use pricepreview_pricing::PreviewRequest;

// -------------------------
// Request DTOs
// -------------------------

/// Query string of `GET /api/products`. Unknown parameters are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct ProductSearchParams {
    pub search: Option<String>,
}
