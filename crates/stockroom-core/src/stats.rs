//! # Dashboard Statistics
//!
//! Derives [`DashboardStats`] from a product snapshot.
//!
//! ## Computation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  products: &[Product]      today: NaiveDate                            │
//! │       │                         │                                       │
//! │       ├──► len() ─────────────────────────────► total_products          │
//! │       ├──► quantity <= 10 (zero included) ────► low_stock_products      │
//! │       ├──► today - created_on <= 7 days ◄──┘──► recent_products         │
//! │       ├──► Σ price × quantity (centavos) ─────► total_value             │
//! │       └──► group by category, first seen ─────► category_distribution   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Recomputed in full on every call; there is no cached state. "Today" comes
//! from the caller so the result is a pure function of its inputs.

use chrono::{DateTime, NaiveDate, Utc};
use std::collections::HashMap;

use crate::category::category_color;
use crate::money::Money;
use crate::stock::is_low_stock;
use crate::types::{CategoryCount, DashboardStats, Product};
use crate::RECENT_WINDOW_DAYS;

/// Computes the dashboard summary for `products` as of `today`.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use stockroom_core::stats::compute_stats;
///
/// let today = NaiveDate::from_ymd_opt(2024, 1, 25).unwrap();
/// let stats = compute_stats(&[], today);
/// assert_eq!(stats.total_products, 0);
/// assert!(stats.total_value.is_zero());
/// assert!(stats.category_distribution.is_empty());
/// ```
pub fn compute_stats(products: &[Product], today: NaiveDate) -> DashboardStats {
    DashboardStats {
        total_products: products.len(),
        low_stock_products: products
            .iter()
            .filter(|p| is_low_stock(p.quantity))
            .count(),
        recent_products: products
            .iter()
            .filter(|p| is_recent(&p.created_at, today))
            .count(),
        total_value: total_value(products),
        category_distribution: category_distribution(products),
    }
}

/// True if `created_at` is at most [`RECENT_WINDOW_DAYS`] whole days before
/// `today`, comparing calendar dates (time of day ignored).
///
/// Dates after `today` count as recent.
pub fn is_recent(created_at: &DateTime<Utc>, today: NaiveDate) -> bool {
    (today - created_at.date_naive()).num_days() <= RECENT_WINDOW_DAYS
}

/// Sum of `price × quantity` over all products. Exact below `Money::MAX`,
/// clamped at it above.
pub fn total_value(products: &[Product]) -> Money {
    products.iter().map(Product::stock_value).sum()
}

/// One entry per distinct category, in order of first appearance.
pub fn category_distribution(products: &[Product]) -> Vec<CategoryCount> {
    let mut distribution: Vec<CategoryCount> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for product in products {
        match positions.get(product.category.as_str()) {
            Some(&idx) => distribution[idx].count += 1,
            None => {
                positions.insert(&product.category, distribution.len());
                distribution.push(CategoryCount {
                    category: product.category.clone(),
                    count: 1,
                    color: category_color(&product.category).to_string(),
                });
            }
        }
    }

    distribution
}

// =============================================================================
// Unit Tests
// =============================================================================
