//! # Dashboard Commands
//!
//! The operations the inventory dashboard invokes, one function per screen
//! action. Each takes the [`ProductStore`] it works on and returns a
//! camelCase DTO or an [`ApiError`].
//!
//! ## Screen Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Dashboard                                                              │
//! │  ┌────────────┐ ┌────────────┐ ┌────────────┐ ┌──────────────────┐     │
//! │  │ Produtos   │ │ Estoque    │ │ Recentes   │ │ Valor Total      │ ◄── get_stats
//! │  └────────────┘ └────────────┘ └────────────┘ └──────────────────┘     │
//! │                                                                         │
//! │  🔍 [busca]   [Categoria ▾] ◄── list_categories   [Estoque ▾]          │
//! │  ┌───────────────────────────────────────────────────────────────┐     │
//! │  │ Nome │ Código │ Categoria │ Qtd │ Preço │ Status │  ✎  🗑    │ ◄── list_products
//! │  └───────────────────────────────────────────────────────────────┘     │
//! │        ✎ ──► get_product ──► form ──► update_product                   │
//! │        🗑 ──► confirm ──► delete_product                                │
//! │  [+ Novo] ──► form ──► create_product                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info};

use crate::error::ApiError;
use stockroom_core::{
    filter_products, format_date, CategoryCount, DashboardStats, Product, ProductDraft, ProductId,
    StockStatus,
};
use stockroom_store::{DeleteOutcome, ProductStore};

// =============================================================================
// DTOs
// =============================================================================

/// Product row as the dashboard renders it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: String,
    pub name: String,
    pub code: String,
    pub category: String,
    pub quantity: u32,
    pub price_cents: i64,
    /// e.g. `R$ 8.999,99`
    pub price_display: String,
    pub stock_status: StockStatus,
    /// e.g. `Estoque baixo`
    pub stock_label: String,
    pub category_color: String,
    pub supplier: Option<String>,
    pub notes: Option<String>,
    /// RFC 3339
    pub created_at: String,
    /// RFC 3339
    pub updated_at: String,
    /// `dd/mm/yyyy`
    pub created_on: String,
}

impl From<Product> for ProductDto {
    fn from(p: Product) -> Self {
        let stock_status = p.stock_status();
        ProductDto {
            price_display: p.price.to_string(),
            price_cents: p.price.cents(),
            stock_label: stock_status.label().to_string(),
            stock_status,
            category_color: stockroom_core::category::category_color(&p.category).to_string(),
            created_at: p.created_at.to_rfc3339(),
            updated_at: p.updated_at.to_rfc3339(),
            created_on: format_date(&p.created_at),
            id: p.id.to_string(),
            name: p.name,
            code: p.code,
            category: p.category,
            quantity: p.quantity,
            supplier: p.supplier,
            notes: p.notes,
        }
    }
}

/// Stats cards plus the category chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsDto {
    pub total_products: usize,
    pub low_stock_products: usize,
    pub recent_products: usize,
    pub total_value_cents: i64,
    pub total_value_display: String,
    pub category_distribution: Vec<CategoryCount>,
}

impl From<DashboardStats> for StatsDto {
    fn from(s: DashboardStats) -> Self {
        StatsDto {
            total_products: s.total_products,
            low_stock_products: s.low_stock_products,
            recent_products: s.recent_products,
            total_value_cents: s.total_value.cents(),
            total_value_display: s.total_value.to_string(),
            category_distribution: s.category_distribution,
        }
    }
}

/// Product table query, as the search box and selectors send it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListQuery {
    pub search: String,
    pub category: String,
    /// `""`, `"available"`, `"low"` or `"out"`
    pub stock: String,
}

// =============================================================================
// Queries
// =============================================================================

/// Gets the dashboard statistics.
pub async fn get_stats(store: &ProductStore) -> Result<StatsDto, ApiError> {
    let start = Instant::now();
    let stats = store.get_stats();
    debug!(
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        total = stats.total_products,
        "get_stats command"
    );
    Ok(StatsDto::from(stats))
}

/// Lists products matching the table's search box and selectors.
///
/// An unrecognized `stock` selector matches nothing.
pub async fn list_products(
    store: &ProductStore,
    query: ListQuery,
) -> Result<Vec<ProductDto>, ApiError> {
    let start = Instant::now();
    let products = filter_products(
        &store.snapshot(),
        &query.search,
        &query.category,
        &query.stock,
    );
    let dtos: Vec<ProductDto> = products.into_iter().map(ProductDto::from).collect();

    debug!(
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        count = dtos.len(),
        search = %query.search,
        category = %query.category,
        stock = %query.stock,
        "list_products command"
    );
    Ok(dtos)
}

/// Gets a single product, e.g. to pre-fill the edit form.
pub async fn get_product(store: &ProductStore, id: String) -> Result<ProductDto, ApiError> {
    debug!(id = %id, "get_product command");
    store
        .get(&ProductId::from(id.as_str()))
        .map(ProductDto::from)
        .ok_or_else(|| ApiError::not_found("Product", &id))
}

/// Category selector options, in first-occurrence order.
pub async fn list_categories(store: &ProductStore) -> Result<Vec<String>, ApiError> {
    Ok(store.categories())
}

/// Category options for the product form, in form order.
pub async fn list_known_categories() -> Result<Vec<String>, ApiError> {
    Ok(stockroom_core::category::known_categories()
        .map(String::from)
        .collect())
}

// =============================================================================
// Mutations
// =============================================================================

/// Submits the "new product" form.
pub async fn create_product(
    store: &ProductStore,
    draft: ProductDraft,
) -> Result<ProductDto, ApiError> {
    debug!(code = %draft.code, "create_product command");
    let product = store.submit_add(&draft).await?;
    info!(product_id = %product.id, "create_product complete");
    Ok(ProductDto::from(product))
}

/// Submits the edit form for `id`.
///
/// The form is validated before the id is looked up, so an invalid form is
/// a `VALIDATION_ERROR` even for an unknown id.
pub async fn update_product(
    store: &ProductStore,
    id: String,
    draft: ProductDraft,
) -> Result<ProductDto, ApiError> {
    debug!(id = %id, "update_product command");
    store
        .submit_edit(&ProductId::from(id.as_str()), &draft)
        .await?
        .map(ProductDto::from)
        .ok_or_else(|| ApiError::not_found("Product", &id))
}

/// Deletes `id` once the user has answered the confirmation prompt.
///
/// Returns the removed product, or `None` if the user declined.
pub async fn delete_product(
    store: &ProductStore,
    id: String,
    confirmed: bool,
) -> Result<Option<ProductDto>, ApiError> {
    debug!(id = %id, confirmed, "delete_product command");
    match store.request_delete(&ProductId::from(id.as_str()), &|_: &ProductId| confirmed) {
        DeleteOutcome::Deleted(product) => Ok(Some(ProductDto::from(product))),
        DeleteOutcome::Declined => Ok(None),
        DeleteOutcome::NotFound => Err(ApiError::not_found("Product", &id)),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
