use std::sync::Arc;

use pricepreview_core::{DomainResult, ProductId};
use pricepreview_pricing::{PreviewRequest, PreviewRow, assemble_preview, missing_ids};
use pricepreview_products::{CatalogLoadError, CatalogProvider, InMemoryCatalog, Product};

use crate::config::ServerConfig;

/// Resolve the catalog named by the configuration (file or built-in seed).
pub fn load_catalog(config: &ServerConfig) -> Result<Arc<dyn CatalogProvider>, CatalogLoadError> {
    let catalog = match &config.catalog_path {
        Some(path) => InMemoryCatalog::from_json_file(path)?,
        None => InMemoryCatalog::seed(),
    };
    tracing::info!(
        products = catalog.len(),
        source = if config.catalog_path.is_some() { "file" } else { "seed" },
        "catalog ready"
    );
    Ok(Arc::new(catalog))
}

/// Operations behind the HTTP handlers. The catalog is injected and read-only.
#[derive(Clone)]
pub struct AppServices {
    catalog: Arc<dyn CatalogProvider>,
}

impl AppServices {
    pub fn new(catalog: Arc<dyn CatalogProvider>) -> Self {
        Self { catalog }
    }

    pub fn products_search(&self, search: Option<&str>) -> Vec<Product> {
        self.catalog.search(search)
    }

    /// Validate the request's rule and compute the preview rows.
    ///
    /// Unknown product ids are dropped from the result.
    pub fn pricing_preview(&self, request: &PreviewRequest) -> DomainResult<Vec<PreviewRow>> {
        let rule = request.rule()?;

        let missing: Vec<ProductId> = missing_ids(&self.catalog, &request.product_ids);
        if !missing.is_empty() {
            tracing::debug!(?missing, "preview request references unknown product ids");
        }

        Ok(assemble_preview(&self.catalog, &request.product_ids, &rule))
    }
}
