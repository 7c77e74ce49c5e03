//! Preview assembly: catalog products annotated with their adjusted price.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use pricepreview_core::{DomainResult, ProductId};
use pricepreview_products::{CatalogProvider, Product};

use crate::rule::{AdjustmentKind, AdjustmentRule, Direction};
use crate::totals::Trend;

/// Wire body of `POST /api/pricing/preview`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewRequest {
    pub product_ids: Vec<ProductId>,
    pub adjustment_type: AdjustmentKind,
    pub increment: Direction,
    pub value: f64,
}

impl PreviewRequest {
    pub fn new(product_ids: Vec<ProductId>, rule: &AdjustmentRule) -> Self {
        Self {
            product_ids,
            adjustment_type: rule.kind(),
            increment: rule.direction(),
            value: rule.magnitude(),
        }
    }

    /// Validate the rule part of the request.
    pub fn rule(&self) -> DomainResult<AdjustmentRule> {
        AdjustmentRule::new(self.adjustment_type, self.increment, self.value)
    }
}

/// A product plus its computed new price. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewRow {
    #[serde(flatten)]
    pub product: Product,
    #[serde(rename = "newPrice")]
    pub new_price: f64,
}

impl PreviewRow {
    /// `new_price - price` (negative for a decrease).
    pub fn diff(&self) -> f64 {
        self.new_price - self.product.price
    }

    pub fn trend(&self) -> Trend {
        Trend::of(self.diff())
    }
}

/// Build one preview row per catalog product whose id is in `ids`.
///
/// Unknown ids are dropped, output follows catalog order, and repeated ids
/// do not repeat rows.
pub fn assemble_preview<C>(catalog: &C, ids: &[ProductId], rule: &AdjustmentRule) -> Vec<PreviewRow>
where
    C: CatalogProvider + ?Sized,
{
    let wanted: HashSet<ProductId> = ids.iter().copied().collect();
    catalog
        .all()
        .into_iter()
        .filter(|p| wanted.contains(&p.id))
        .map(|product| PreviewRow {
            new_price: rule.apply(product.price),
            product,
        })
        .collect()
}

/// Requested ids that are not in the catalog, in request order (deduplicated).
pub fn missing_ids<C>(catalog: &C, ids: &[ProductId]) -> Vec<ProductId>
where
    C: CatalogProvider + ?Sized,
{
    let known: HashSet<ProductId> = catalog.all().iter().map(|p| p.id).collect();
    let mut seen = HashSet::new();
    ids.iter()
        .copied()
        .filter(|id| !known.contains(id) && seen.insert(*id))
        .collect()
}
