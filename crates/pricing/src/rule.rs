//! Adjustment rules and the price calculation.

use serde::{Deserialize, Serialize};

use pricepreview_core::{DomainError, DomainResult};

/// How the magnitude of an adjustment is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdjustmentKind {
    /// Flat amount in currency units.
    Fixed,
    /// Percentage of the base price.
    Dynamic,
}

/// Whether the adjustment raises or lowers the base price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Increase,
    Decrease,
}

/// Compute the adjusted price for a single product.
///
/// - `Fixed`: `base ± magnitude`
/// - `Dynamic`: `base ± base * magnitude / 100`
///
/// The result is floored at zero. No rounding is applied here; display code
/// rounds to cents.
pub fn compute(base_price: f64, kind: AdjustmentKind, direction: Direction, magnitude: f64) -> f64 {
    let change = match kind {
        AdjustmentKind::Fixed => magnitude,
        AdjustmentKind::Dynamic => base_price * (magnitude / 100.0),
    };

    let new_price = match direction {
        Direction::Increase => base_price + change,
        Direction::Decrease => base_price - change,
    };

    // Also maps NaN to zero.
    if new_price > 0.0 { new_price } else { 0.0 }
}

/// A validated adjustment rule (kind + direction + non-negative magnitude).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdjustmentRule {
    kind: AdjustmentKind,
    direction: Direction,
    magnitude: f64,
}

impl AdjustmentRule {
    pub fn new(kind: AdjustmentKind, direction: Direction, magnitude: f64) -> DomainResult<Self> {
        if !magnitude.is_finite() {
            return Err(DomainError::validation("value must be a finite number"));
        }
        if magnitude < 0.0 {
            return Err(DomainError::validation("value cannot be negative"));
        }
        Ok(Self {
            kind,
            direction,
            magnitude,
        })
    }

    pub fn fixed(direction: Direction, amount: f64) -> DomainResult<Self> {
        Self::new(AdjustmentKind::Fixed, direction, amount)
    }

    pub fn percent(direction: Direction, percent: f64) -> DomainResult<Self> {
        Self::new(AdjustmentKind::Dynamic, direction, percent)
    }

    pub fn kind(&self) -> AdjustmentKind {
        self.kind
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    pub fn apply(&self, base_price: f64) -> f64 {
        compute(base_price, self.kind, self.direction, self.magnitude)
    }
}
