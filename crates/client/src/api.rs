//! HTTP bindings for the catalog and pricing preview endpoints.

use serde::de::DeserializeOwned;

use pricepreview_pricing::{PreviewRequest, PreviewRow};
use pricepreview_products::Product;

/// Default service location when `PRICEPREVIEW_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "http://localhost:4000";

/// Client for the pricing preview API.
///
/// One request per call; no retries and no cancellation of in-flight requests.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    /// Read the base URL from `PRICEPREVIEW_API_URL`, falling back to localhost.
    pub fn from_env() -> Self {
        let url = std::env::var("PRICEPREVIEW_API_URL")
            .ok()
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self::new(url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check connectivity by hitting the health endpoint.
    pub async fn check_health(&self) -> bool {
        let url = format!("{}/health", self.base_url);
        matches!(self.http.get(&url).send().await, Ok(resp) if resp.status().is_success())
    }

    /// `GET /api/products`, optionally filtered by title/SKU.
    pub async fn fetch_products(&self, search: Option<&str>) -> Result<Vec<Product>, ClientError> {
        let url = format!("{}/api/products", self.base_url);
        let mut req = self.http.get(&url);
        if let Some(search) = search.filter(|s| !s.is_empty()) {
            req = req.query(&[("search", search)]);
        }
        Self::read_json(req).await
    }

    /// `POST /api/pricing/preview`.
    pub async fn preview_pricing(&self, request: &PreviewRequest) -> Result<Vec<PreviewRow>, ClientError> {
        let url = format!("{}/api/pricing/preview", self.base_url);
        Self::read_json(self.http.post(&url).json(request)).await
    }

    async fn read_json<T: DeserializeOwned>(req: reqwest::RequestBuilder) -> Result<T, ClientError> {
        let resp = req.send().await.map_err(|e| ClientError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), %body, "API request failed");
            return Err(ClientError::Api(status.as_u16(), body));
        }

        resp.json().await.map_err(|e| ClientError::Parse(e.to_string()))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("network error: {0}")]
    Network(String),
    #[error("API error ({0}): {1}")]
    Api(u16, String),
    #[error("parse error: {0}")]
    Parse(String),
}
