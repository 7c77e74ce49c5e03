//! The pricing preview screen state: catalog, filters, selection and preview.

use pricepreview_core::ProductId;
use pricepreview_pricing::{AdjustmentRule, PreviewRequest, PreviewRow, PreviewTotals};
use pricepreview_products::Product;

use crate::api::{ApiClient, ClientError};
use crate::filter::{FilterOptions, FilterState};
use crate::format::selection_summary;
use crate::selection::{SelectionMode, SelectionState};

/// Client-side state for one preview session.
///
/// Totals are derived from the current preview rows on demand and never cached.
#[derive(Debug, Clone, Default)]
pub struct Workspace {
    products: Vec<Product>,
    pub filters: FilterState,
    selection: SelectionState,
    preview: Vec<PreviewRow>,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Replace the loaded catalog, pruning selected ids that disappeared.
    pub fn set_catalog(&mut self, products: Vec<Product>) {
        self.products = products;
        self.selection.prune(&self.products);
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn set_selection_mode(&mut self, mode: SelectionMode) {
        self.selection.set_mode(mode);
    }

    pub fn toggle(&mut self, id: ProductId) {
        self.selection.toggle(id);
    }

    /// Products passing the current search and filters, in catalog order.
    pub fn visible_products(&self) -> Vec<&Product> {
        self.filters.apply(&self.products)
    }

    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions::from_products(&self.products)
    }

    pub fn effective_selected_ids(&self) -> Vec<ProductId> {
        self.selection.effective_ids(&self.products)
    }

    pub fn is_selected(&self, id: ProductId) -> bool {
        match self.selection.mode() {
            SelectionMode::All => self.products.iter().any(|p| p.id == id),
            SelectionMode::One | SelectionMode::Multiple => self.selection.contains(id),
        }
    }

    /// "Select All" over the visible products.
    ///
    /// Clears the selection when every visible product is already selected;
    /// otherwise selects exactly the visible products. In `One` mode only the
    /// first visible product counts. Does nothing when no product is visible.
    pub fn select_all_visible(&mut self) {
        let visible: Vec<ProductId> = self.visible_products().iter().map(|p| p.id).collect();
        let Some(&first) = visible.first() else {
            return;
        };
        let fully_selected = match self.selection.mode() {
            SelectionMode::One => self.selection.contains(first),
            SelectionMode::Multiple | SelectionMode::All => {
                visible.iter().all(|id| self.is_selected(*id))
            }
        };
        if fully_selected {
            self.selection.clear();
        } else {
            self.selection.set_selected(visible);
        }
    }

    /// Build the preview request for the current selection, or `None` when
    /// nothing is selected.
    pub fn preview_request(&self, rule: &AdjustmentRule) -> Option<PreviewRequest> {
        let ids = self.effective_selected_ids();
        if ids.is_empty() {
            return None;
        }
        Some(PreviewRequest::new(ids, rule))
    }

    pub fn preview_rows(&self) -> &[PreviewRow] {
        &self.preview
    }

    pub fn apply_preview(&mut self, rows: Vec<PreviewRow>) {
        self.preview = rows;
    }

    pub fn clear_preview(&mut self) {
        self.preview.clear();
    }

    pub fn totals(&self) -> PreviewTotals {
        PreviewTotals::from_rows(&self.preview)
    }

    /// e.g. `2 products selected.`
    pub fn summary(&self) -> String {
        selection_summary(self.effective_selected_ids().len())
    }

    /// Fetch the full catalog from the service and install it.
    pub async fn reload(&mut self, client: &ApiClient) -> Result<(), ClientError> {
        let products = client.fetch_products(None).await?;
        tracing::debug!(products = products.len(), "catalog reloaded");
        self.set_catalog(products);
        Ok(())
    }

    /// Request a preview for the current selection. With nothing selected the
    /// preview is cleared and no request is made.
    pub async fn run_preview(
        &mut self,
        client: &ApiClient,
        rule: &AdjustmentRule,
    ) -> Result<&[PreviewRow], ClientError> {
        match self.preview_request(rule) {
            Some(request) => {
                let rows = client.preview_pricing(&request).await?;
                self.apply_preview(rows);
            }
            None => self.clear_preview(),
        }
        Ok(&self.preview)
    }
}
