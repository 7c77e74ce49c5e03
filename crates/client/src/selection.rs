//! Product selection state.

use serde::{Deserialize, Serialize};

use pricepreview_core::ProductId;
use pricepreview_products::Product;

/// How many products the user may select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    One,
    #[default]
    Multiple,
    /// Every loaded product, regardless of the tracked selection.
    All,
}

/// Selected product ids plus the selection mode.
///
/// Ids are kept in selection order without duplicates. In [`SelectionMode::One`]
/// at most one id is tracked.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionState {
    mode: SelectionMode,
    selected: Vec<ProductId>,
}

impl SelectionState {
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            selected: Vec::new(),
        }
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Tracked ids (ignored while the mode is `All`).
    pub fn selected(&self) -> &[ProductId] {
        &self.selected
    }

    /// Switch mode. Entering `One` keeps only the first tracked id.
    pub fn set_mode(&mut self, mode: SelectionMode) {
        self.mode = mode;
        if mode == SelectionMode::One {
            self.selected.truncate(1);
        }
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.selected.contains(&id)
    }

    /// Toggle one product.
    ///
    /// - `One`: replaces the selection, or clears it when `id` is already selected
    /// - `Multiple`: adds or removes `id`
    /// - `All`: no-op; individual checkboxes are disabled
    pub fn toggle(&mut self, id: ProductId) {
        match self.mode {
            SelectionMode::One => {
                if self.contains(id) {
                    self.selected.clear();
                } else {
                    self.selected = vec![id];
                }
            }
            SelectionMode::Multiple => {
                if self.contains(id) {
                    self.selected.retain(|x| *x != id);
                } else {
                    self.selected.push(id);
                }
            }
            SelectionMode::All => {}
        }
    }

    /// Replace the tracked ids, dropping duplicates and honoring the `One` limit.
    pub fn set_selected(&mut self, ids: impl IntoIterator<Item = ProductId>) {
        self.selected.clear();
        for id in ids {
            if !self.selected.contains(&id) {
                self.selected.push(id);
            }
        }
        if self.mode == SelectionMode::One {
            self.selected.truncate(1);
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Drop tracked ids that are not in `products` (after a catalog reload).
    pub fn prune(&mut self, products: &[Product]) {
        self.selected
            .retain(|id| products.iter().any(|p| p.id == *id));
    }

    /// Ids a preview would be requested for: every loaded product in `All`
    /// mode (catalog order), otherwise the tracked ids.
    pub fn effective_ids(&self, products: &[Product]) -> Vec<ProductId> {
        match self.mode {
            SelectionMode::All => products.iter().map(|p| p.id).collect(),
            SelectionMode::One | SelectionMode::Multiple => self.selected.clone(),
        }
    }
}
