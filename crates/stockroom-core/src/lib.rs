//! # stockroom-core: Pure Business Logic for Stockroom
//!
//! This crate is the **heart** of the inventory dashboard. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Dashboard UI                                 │   │
//! │  │    Stats Cards ──► Product Table ──► Product Form              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Dashboard Commands                           │   │
//! │  │    get_stats, list_products, create_product, etc.              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               stockroom-store (ProductStore)                    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            ★ stockroom-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │  ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌──────────┐  │   │
//! │  │  │  types  │ │  money  │ │  stock  │ │  stats  │ │  filter  │  │   │
//! │  │  │ Product │ │  Money  │ │ Status  │ │Dashboard│ │ search + │  │   │
//! │  │  │ Fields  │ │  R$     │ │ Filter  │ │ Stats   │ │ facets   │  │   │
//! │  │  └─────────┘ └─────────┘ └─────────┘ └─────────┘ └──────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO LOGGING • PURE FUNCTIONS               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, ProductFields, DashboardStats, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`stock`] - Stock classifier and stock facet
//! - [`category`] - Category color palette
//! - [`stats`] - Dashboard statistics aggregator
//! - [`filter`] - Search and facet filtering
//! - [`validation`] - Product form validation
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::{NaiveDate, TimeZone, Utc};
//! use stockroom_core::{compute_stats, filter_products, Money, Product, ProductFields, ProductId};
//!
//! let created = Utc.with_ymd_and_hms(2024, 1, 20, 9, 0, 0).unwrap();
//! let phone = Product::create(
//!     ProductId::from("6"),
//!     ProductFields {
//!         name: "Samsung Galaxy S24 Ultra".into(),
//!         code: "SAMS24U".into(),
//!         category: "Eletrônicos".into(),
//!         quantity: 15,
//!         price: Money::from_cents(749_999),
//!         supplier: None,
//!         notes: None,
//!     },
//!     created,
//! );
//! let products = vec![phone];
//!
//! let today = NaiveDate::from_ymd_opt(2024, 1, 25).unwrap();
//! let stats = compute_stats(&products, today);
//! assert_eq!(stats.recent_products, 1);
//! assert_eq!(stats.category_distribution[0].color, "#3B82F6");
//!
//! assert_eq!(filter_products(&products, "s24", "", "available").len(), 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod category;
pub mod error;
pub mod filter;
pub mod money;
pub mod stats;
pub mod stock;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use filter::{distinct_categories, filter_products, ProductFilter};
pub use money::Money;
pub use stats::compute_stats;
pub use stock::{classify_stock, StockFilter, StockStatus};
pub use types::*;
pub use validation::{FieldErrors, ProductField};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Quantity at or below which a product needs replenishing.
///
/// The classifier calls 1..=10 `LowStock`; the statistics card and the
/// `low` facet also include zero. See [`stock`].
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// Lookback, in whole calendar days, for "recently added" products.
pub const RECENT_WINDOW_DAYS: i64 = 7;
