//! Catalog query capability and its in-memory implementation.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;

use pricepreview_core::{DomainError, DomainResult, ProductId};

use crate::product::Product;
use crate::seed;

/// Read-only catalog abstraction injected into the pricing and API layers.
pub trait CatalogProvider: Send + Sync {
    /// Products whose title or SKU contains `query` (case-insensitive), in
    /// catalog insertion order. `None`, empty or blank queries return everything.
    fn search(&self, query: Option<&str>) -> Vec<Product>;

    /// Every product, in catalog insertion order.
    fn all(&self) -> Vec<Product> {
        self.search(None)
    }
}

impl<S> CatalogProvider for Arc<S>
where
    S: CatalogProvider + ?Sized,
{
    fn search(&self, query: Option<&str>) -> Vec<Product> {
        (**self).search(query)
    }

    fn all(&self) -> Vec<Product> {
        (**self).all()
    }
}

#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("failed to read catalog file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid catalog: {0}")]
    Invalid(#[from] DomainError),
}

/// In-memory catalog backed by a `Vec` (insertion order is query order).
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: Vec<Product>,
}

impl InMemoryCatalog {
    /// Build a catalog, rejecting duplicate ids and negative or non-finite prices.
    pub fn new(products: Vec<Product>) -> DomainResult<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for p in &products {
            if !seen.insert(p.id) {
                return Err(DomainError::conflict(format!("duplicate product id {}", p.id)));
            }
            if !p.price.is_finite() || p.price < 0.0 {
                return Err(DomainError::validation(format!(
                    "product {} has invalid price {}",
                    p.id, p.price
                )));
            }
        }
        Ok(Self { products })
    }

    /// Built-in demo catalog.
    pub fn seed() -> Self {
        Self {
            products: seed::products(),
        }
    }

    /// Parse a JSON array of products.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogLoadError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Ok(Self::new(products)?)
    }

    /// Load a JSON array of products from disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogLoadError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&raw)?;
        tracing::debug!(path = %path.display(), products = catalog.len(), "catalog loaded from file");
        Ok(catalog)
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl CatalogProvider for InMemoryCatalog {
    fn search(&self, query: Option<&str>) -> Vec<Product> {
        let needle = query.unwrap_or_default().to_lowercase();
        self.products
            .iter()
            .filter(|p| p.matches_search(&needle))
            .cloned()
            .collect()
    }

    fn all(&self) -> Vec<Product> {
        self.products.clone()
    }
}
