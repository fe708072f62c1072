//! # Stock Levels
//!
//! Two related but deliberately different views of a quantity:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  quantity:      0        1 ........ 10        11 ...........            │
//! │                                                                         │
//! │  StockStatus    OutOfStock  LowStock            InStock                 │
//! │  (row badge)    ─────────┼──────────────────┼──────────────────         │
//! │                 partition: exactly one state per quantity               │
//! │                                                                         │
//! │  is_low_stock   ◄──────── true ────────────►│◄──── false ────►          │
//! │  (stats card,   includes zero: a product with no stock is counted      │
//! │   "low" facet)  as low stock too                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The dashboard has always shown both: the "Estoque baixo" card counts
//! empty shelves while the row badge says "Sem estoque". Both behaviors are
//! kept exactly as they are.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::CoreError;
use crate::LOW_STOCK_THRESHOLD;

// =============================================================================
// Stock Status (classifier)
// =============================================================================

/// Per-product stock state shown as a badge next to each row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    /// Quantity is zero.
    OutOfStock,
    /// 1 to [`LOW_STOCK_THRESHOLD`] units.
    LowStock,
    /// More than [`LOW_STOCK_THRESHOLD`] units.
    InStock,
}

impl StockStatus {
    /// Classifies a quantity. Total over every `u32`.
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::StockStatus;
    ///
    /// assert_eq!(StockStatus::classify(0), StockStatus::OutOfStock);
    /// assert_eq!(StockStatus::classify(10), StockStatus::LowStock);
    /// assert_eq!(StockStatus::classify(11), StockStatus::InStock);
    /// ```
    #[inline]
    pub const fn classify(quantity: u32) -> Self {
        if quantity == 0 {
            StockStatus::OutOfStock
        } else if quantity <= LOW_STOCK_THRESHOLD {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }

    /// Badge text in the dashboard's fixed locale.
    pub const fn label(&self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "Sem estoque",
            StockStatus::LowStock => "Estoque baixo",
            StockStatus::InStock => "Em estoque",
        }
    }
}

/// Free-function form of [`StockStatus::classify`].
#[inline]
pub const fn classify_stock(quantity: u32) -> StockStatus {
    StockStatus::classify(quantity)
}

/// Low-stock policy used by the statistics card and the `low` facet.
///
/// Unlike [`StockStatus::LowStock`], this includes zero.
#[inline]
pub const fn is_low_stock(quantity: u32) -> bool {
    quantity <= LOW_STOCK_THRESHOLD
}

// =============================================================================
// Stock Filter (facet selector)
// =============================================================================

/// Stock-status facet of the product table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum StockFilter {
    /// More than [`LOW_STOCK_THRESHOLD`] units.
    Available,
    /// At or below [`LOW_STOCK_THRESHOLD`], zero included.
    Low,
    /// Exactly zero.
    Out,
}

impl StockFilter {
    /// Returns true if a product with `quantity` units passes this facet.
    #[inline]
    pub const fn matches(&self, quantity: u32) -> bool {
        match self {
            StockFilter::Available => quantity > LOW_STOCK_THRESHOLD,
            StockFilter::Low => is_low_stock(quantity),
            StockFilter::Out => quantity == 0,
        }
    }

    /// Selector value as the UI sends it.
    pub const fn as_str(&self) -> &'static str {
        match self {
            StockFilter::Available => "available",
            StockFilter::Low => "low",
            StockFilter::Out => "out",
        }
    }
}

impl fmt::Display for StockFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StockFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "available" => Ok(StockFilter::Available),
            "low" => Ok(StockFilter::Low),
            "out" => Ok(StockFilter::Out),
            _ => Err(CoreError::InvalidStockFilter(s.to_string())),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_classify_breakpoints() {
        assert_eq!(classify_stock(0), StockStatus::OutOfStock);
        assert_eq!(classify_stock(1), StockStatus::LowStock);
        assert_eq!(classify_stock(5), StockStatus::LowStock);
        assert_eq!(classify_stock(10), StockStatus::LowStock);
        assert_eq!(classify_stock(11), StockStatus::InStock);
        assert_eq!(classify_stock(u32::MAX), StockStatus::InStock);
    }

    #[test]
    fn test_labels() {
        assert_eq!(StockStatus::OutOfStock.label(), "Sem estoque");
        assert_eq!(StockStatus::LowStock.label(), "Estoque baixo");
        assert_eq!(StockStatus::InStock.label(), "Em estoque");
    }

    #[test]
    fn test_low_stock_policy_overlaps_out_of_stock() {
        assert!(is_low_stock(0));
        assert!(is_low_stock(10));
        assert!(!is_low_stock(11));
        // The classifier keeps them apart.
        assert_ne!(classify_stock(0), StockStatus::LowStock);
    }

    #[test]
    fn test_stock_filter_parsing() {
        assert_eq!("available".parse::<StockFilter>().unwrap(), StockFilter::Available);
        assert_eq!("low".parse::<StockFilter>().unwrap(), StockFilter::Low);
        assert_eq!("OUT".parse::<StockFilter>().unwrap(), StockFilter::Out);
        assert!("".parse::<StockFilter>().is_err());
        assert!("sold".parse::<StockFilter>().is_err());
    }

    #[test]
    fn test_stock_filter_matches() {
        assert!(StockFilter::Out.matches(0));
        assert!(!StockFilter::Out.matches(1));
        assert!(StockFilter::Low.matches(0));
        assert!(StockFilter::Low.matches(10));
        assert!(!StockFilter::Low.matches(11));
        assert!(StockFilter::Available.matches(11));
        assert!(!StockFilter::Available.matches(10));
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(
            serde_json::to_string(&StockStatus::OutOfStock).unwrap(),
            "\"out_of_stock\""
        );
        assert_eq!(serde_json::to_string(&StockFilter::Available).unwrap(), "\"available\"");
    }

    proptest! {
        #[test]
        fn prop_classifier_is_a_step_function(q in any::<u32>()) {
            let expected = match q {
                0 => StockStatus::OutOfStock,
                1..=10 => StockStatus::LowStock,
                _ => StockStatus::InStock,
            };
            prop_assert_eq!(classify_stock(q), expected);
        }

        #[test]
        fn prop_classifier_agrees_with_facets(q in any::<u32>()) {
            let status = classify_stock(q);
            prop_assert_eq!(status == StockStatus::OutOfStock, StockFilter::Out.matches(q));
            prop_assert_eq!(status == StockStatus::InStock, StockFilter::Available.matches(q));
            prop_assert_eq!(status != StockStatus::InStock, StockFilter::Low.matches(q));
        }
    }
}
