use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Query, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use crate::app::dto;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/", get(list_products))
}

/// `GET /api/products?search=<string>`: the whole catalog, or the products whose
/// title or SKU contains `search` (case-insensitive). A query string that fails
/// to parse is treated as no search.
pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
    params: Result<Query<dto::ProductSearchParams>, QueryRejection>,
) -> axum::response::Response {
    let Query(params) = params.unwrap_or_else(|rejection| {
        tracing::debug!(%rejection, "ignoring malformed product search query");
        Query(dto::ProductSearchParams::default())
    });

    let items = services.products_search(params.search.as_deref());
    (StatusCode::OK, Json(items)).into_response()
}
