//! # Domain Types
//!
//! Core domain types used throughout Stockroom.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  ProductDraft   │   │  ProductFields  │   │    Product      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  raw form input │──►│  validated      │──►│  id (UUID)      │       │
//! │  │  quantity: i64  │   │  quantity: u32  │   │  fields         │       │
//! │  │                 │   │  price: Money   │   │  created_at     │       │
//! │  └─────────────────┘   └─────────────────┘   │  updated_at     │       │
//! │        validate()           add / edit       └────────┬────────┘       │
//! │                                                       │                │
//! │                                         ┌─────────────▼─────────────┐  │
//! │                                         │ DashboardStats (derived)  │  │
//! │                                         │ CategoryCount × n         │  │
//! │                                         └───────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Every product has:
//! - `id`: UUID v4 - immutable, assigned by the store on add
//! - `code`: SKU - human-readable, uppercase, editable

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;
use crate::stock::StockStatus;

// =============================================================================
// Product Id
// =============================================================================

/// Product identifier. Unique within a store, never changes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        ProductId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        ProductId(id)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        ProductId(id.to_string())
    }
}

// =============================================================================
// Product Fields
// =============================================================================

/// The editable part of a product: everything except id and timestamps.
///
/// Built by [`ProductDraft::validate`](crate::validation) at the form
/// boundary; the store trusts it as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductFields {
    pub name: String,
    /// SKU, uppercase.
    pub code: String,
    /// Free-text label; see [`crate::category`] for the known ones.
    pub category: String,
    pub quantity: u32,
    /// Unit price, always positive.
    pub price: Money,
    pub supplier: Option<String>,
    pub notes: Option<String>,
}

// =============================================================================
// Product
// =============================================================================

/// A product record held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub code: String,
    pub category: String,
    pub quantity: u32,
    pub price: Money,
    pub supplier: Option<String>,
    pub notes: Option<String>,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Creates a new product; both timestamps are set to `now`.
    pub fn create(id: ProductId, fields: ProductFields, now: DateTime<Utc>) -> Self {
        Product {
            id,
            name: fields.name,
            code: fields.code,
            category: fields.category,
            quantity: fields.quantity,
            price: fields.price,
            supplier: fields.supplier,
            notes: fields.notes,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns the edited product: same id and `created_at`, every other
    /// field replaced, `updated_at` refreshed.
    ///
    /// `updated_at` never goes below `created_at`, even if `now` does.
    pub fn edited(&self, fields: ProductFields, now: DateTime<Utc>) -> Self {
        Product {
            updated_at: now.max(self.created_at),
            ..Product::create(self.id.clone(), fields, self.created_at)
        }
    }

    /// Returns the editable fields (for pre-filling the edit form).
    pub fn fields(&self) -> ProductFields {
        ProductFields {
            name: self.name.clone(),
            code: self.code.clone(),
            category: self.category.clone(),
            quantity: self.quantity,
            price: self.price,
            supplier: self.supplier.clone(),
            notes: self.notes.clone(),
        }
    }

    /// Per-row stock badge.
    #[inline]
    pub fn stock_status(&self) -> StockStatus {
        StockStatus::classify(self.quantity)
    }

    /// Value of the units on hand (`price × quantity`).
    #[inline]
    pub fn stock_value(&self) -> Money {
        self.price * self.quantity
    }
}

// =============================================================================
// Product Draft
// =============================================================================

/// Raw product form input, before validation.
///
/// Quantity is signed so a negative entry can be reported back to the form
/// instead of failing to parse. Optional text fields are plain strings;
/// blank means absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductDraft {
    pub name: String,
    pub code: String,
    pub category: String,
    pub quantity: i64,
    pub price: Money,
    pub supplier: String,
    pub notes: String,
}

impl From<&Product> for ProductDraft {
    /// Pre-fills the edit form from an existing product.
    fn from(product: &Product) -> Self {
        ProductDraft {
            name: product.name.clone(),
            code: product.code.clone(),
            category: product.category.clone(),
            quantity: i64::from(product.quantity),
            price: product.price,
            supplier: product.supplier.clone().unwrap_or_default(),
            notes: product.notes.clone().unwrap_or_default(),
        }
    }
}

// =============================================================================
// Dashboard Stats
// =============================================================================

/// One slice of the category distribution chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
    /// Hex color, e.g. `#3B82F6`.
    pub color: String,
}

/// Dashboard summary. Derived on every read, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_products: usize,
    /// Quantity at or below the low-stock threshold, zero included.
    pub low_stock_products: usize,
    /// Created within the recency window.
    pub recent_products: usize,
    /// Sum of `price × quantity`.
    pub total_value: Money,
    /// First-occurrence order.
    pub category_distribution: Vec<CategoryCount>,
}

// =============================================================================
// Formatting
// =============================================================================

/// Renders a timestamp's date in the dashboard's fixed locale (`dd/mm/yyyy`).
///
/// ## Example
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use stockroom_core::types::format_date;
///
/// let ts = Utc.with_ymd_and_hms(2024, 1, 5, 14, 30, 0).unwrap();
/// assert_eq!(format_date(&ts), "05/01/2024");
/// ```
pub fn format_date(ts: &DateTime<Utc>) -> String {
    ts.format("%d/%m/%Y").to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================
