//! Aggregate totals derived from a preview.

use crate::preview::PreviewRow;

/// Direction of a price change, used for row/total coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    pub fn of(diff: f64) -> Self {
        if diff > 0.0 {
            Trend::Up
        } else if diff < 0.0 {
            Trend::Down
        } else {
            Trend::Flat
        }
    }
}

/// Old/new sums of a preview and the change between them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PreviewTotals {
    pub old_total: f64,
    pub new_total: f64,
    pub diff: f64,
    /// `diff / old_total * 100`, or `0` when there is no baseline.
    pub diff_percent: f64,
}

impl PreviewTotals {
    pub fn from_rows(rows: &[PreviewRow]) -> Self {
        if rows.is_empty() {
            return Self::default();
        }

        let old_total: f64 = rows.iter().map(|r| r.product.price).sum();
        let new_total: f64 = rows.iter().map(|r| r.new_price).sum();
        let diff = new_total - old_total;
        let diff_percent = if old_total != 0.0 {
            diff / old_total * 100.0
        } else {
            0.0
        };

        Self {
            old_total,
            new_total,
            diff,
            diff_percent,
        }
    }

    pub fn trend(&self) -> Trend {
        Trend::of(self.diff)
    }
}
