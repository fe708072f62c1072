//! # Product Store
//!
//! The single owner of the live product collection.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       ProductStore Operations                           │
//! │                                                                         │
//! │  Form submit ──► submit_add(draft) ──► validate ──► sleep(delay) ──┐   │
//! │                                           │                         │   │
//! │                                           └─► Err(FieldErrors)      │   │
//! │                                               (no wait, no commit)  │   │
//! │                                                                     ▼   │
//! │  add_product(fields) ─────────────► UUID + timestamps ──► push ──► ▣   │
//! │  edit_product(id, fields) ────────► replace in place, bump updated ─► ▣ │
//! │  delete_product(id) ──────────────► remove if present ──────────────► ▣ │
//! │                                                                         │
//! │  ▣ = RwLock<Vec<Product>>: every write installs a whole collection,    │
//! │      readers only ever see complete snapshots                          │
//! │                                                                         │
//! │  get_stats() ──► compute_stats(snapshot, clock.today)                  │
//! │  filter(..)  ──► ProductFilter::apply(snapshot)                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use std::sync::Arc;
//! use mockable::DefaultClock;
//! use stockroom_store::ProductStore;
//!
//! let store = ProductStore::with_seed_catalog(Arc::new(DefaultClock));
//! assert_eq!(store.len(), 6);
//! assert_eq!(store.get_stats().total_products, 6);
//! ```

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use chrono::NaiveDate;
use mockable::Clock;
use stockroom_core::{
    compute_stats, distinct_categories, DashboardStats, Product, ProductDraft, ProductFields,
    ProductFilter, ProductId,
};
use tokio::time::Instant;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::StoreConfig;
use crate::error::StoreResult;
use crate::seed::seed_catalog;

/// Prompt shown before a product is removed.
pub const DELETE_PROMPT: &str = "Tem certeza que deseja excluir este produto?";

// =============================================================================
// Delete Confirmation
// =============================================================================

/// The confirmation step in front of a delete.
///
/// Implemented for closures, so a caller holding an answer already can pass
/// `&|_: &ProductId| answer`.
pub trait ConfirmDelete {
    fn confirm(&self, product_id: &ProductId) -> bool;
}

impl<F> ConfirmDelete for F
where
    F: Fn(&ProductId) -> bool,
{
    fn confirm(&self, product_id: &ProductId) -> bool {
        self(product_id)
    }
}

/// What a confirmed-delete request did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted(Product),
    /// The user said no. The store is unchanged.
    Declined,
    /// Confirmed, but no product had that id.
    NotFound,
}

// =============================================================================
// Product Store
// =============================================================================

pub struct ProductStore {
    products: RwLock<Vec<Product>>,
    clock: Arc<dyn Clock + Send + Sync>,
    submit_delay: Duration,
}

impl ProductStore {
    /// Creates a store from configuration: seeded or empty, with the
    /// configured submit delay.
    pub fn new(config: &StoreConfig, clock: Arc<dyn Clock + Send + Sync>) -> Self {
        let products = if config.seed_catalog() {
            seed_catalog()
        } else {
            Vec::new()
        };
        info!(
            count = products.len(),
            submit_delay_ms = config.store.submit_delay_ms,
            "Product store initialized"
        );
        ProductStore {
            products: RwLock::new(products),
            clock,
            submit_delay: config.submit_delay(),
        }
    }

    /// Creates an empty store with the default submit delay.
    pub fn empty(clock: Arc<dyn Clock + Send + Sync>) -> Self {
        Self::with_products(Vec::new(), clock)
    }

    /// Creates a store holding the demo catalog.
    pub fn with_seed_catalog(clock: Arc<dyn Clock + Send + Sync>) -> Self {
        Self::with_products(seed_catalog(), clock)
    }

    pub fn with_products(products: Vec<Product>, clock: Arc<dyn Clock + Send + Sync>) -> Self {
        ProductStore {
            products: RwLock::new(products),
            clock,
            submit_delay: StoreConfig::default().submit_delay(),
        }
    }

    pub fn with_submit_delay(mut self, delay: Duration) -> Self {
        self.submit_delay = delay;
        self
    }

    pub fn submit_delay(&self) -> Duration {
        self.submit_delay
    }

    // =========================================================================
    // Locking
    // =========================================================================

    // Writers swap whole entries under the lock, so a poisoned lock still
    // guards a consistent collection.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Product>> {
        self.products.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Product>> {
        self.products.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Today's date according to the injected clock (UTC).
    pub fn today(&self) -> NaiveDate {
        self.clock.utc().date_naive()
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Adds a product with a fresh UUID; both timestamps are set to now.
    pub fn add_product(&self, fields: ProductFields) -> Product {
        let id = ProductId::from(Uuid::new_v4().to_string());
        let product = Product::create(id, fields, self.clock.utc());

        self.write().push(product.clone());

        info!(product_id = %product.id, code = %product.code, "Product added");
        product
    }

    /// Replaces every field of the product with `id` and bumps `updated_at`.
    ///
    /// Returns `None`, changing nothing, if no product has that id.
    pub fn edit_product(&self, id: &ProductId, fields: ProductFields) -> Option<Product> {
        let now = self.clock.utc();
        let mut products = self.write();

        let Some(slot) = products.iter_mut().find(|p| &p.id == id) else {
            debug!(product_id = %id, "Edit ignored: product not found");
            return None;
        };
        *slot = slot.edited(fields, now);
        let edited = slot.clone();
        drop(products);

        info!(product_id = %id, code = %edited.code, "Product updated");
        Some(edited)
    }

    /// Removes the product with `id`. Returns `None` if it was not present.
    pub fn delete_product(&self, id: &ProductId) -> Option<Product> {
        let mut products = self.write();
        let Some(index) = products.iter().position(|p| &p.id == id) else {
            debug!(product_id = %id, "Delete ignored: product not found");
            return None;
        };
        let removed = products.remove(index);
        drop(products);

        info!(product_id = %id, code = %removed.code, "Product deleted");
        Some(removed)
    }

    /// Asks `confirm` first and deletes only on a yes.
    pub fn request_delete(&self, id: &ProductId, confirm: &impl ConfirmDelete) -> DeleteOutcome {
        if !confirm.confirm(id) {
            debug!(product_id = %id, "Delete declined");
            return DeleteOutcome::Declined;
        }
        match self.delete_product(id) {
            Some(product) => DeleteOutcome::Deleted(product),
            None => DeleteOutcome::NotFound,
        }
    }

    // =========================================================================
    // Form Submission
    // =========================================================================

    /// Validates `draft`, waits the submit delay, then adds it.
    ///
    /// A rejected draft returns at once and never touches the collection.
    pub async fn submit_add(&self, draft: &ProductDraft) -> StoreResult<Product> {
        let fields = self.validated(draft)?;
        self.simulate_latency().await;
        Ok(self.add_product(fields))
    }

    /// Validates `draft`, waits the submit delay, then applies it to `id`.
    ///
    /// `Ok(None)` if the product disappeared before the edit committed.
    pub async fn submit_edit(
        &self,
        id: &ProductId,
        draft: &ProductDraft,
    ) -> StoreResult<Option<Product>> {
        let fields = self.validated(draft)?;
        self.simulate_latency().await;
        Ok(self.edit_product(id, fields))
    }

    fn validated(&self, draft: &ProductDraft) -> StoreResult<ProductFields> {
        draft.validate().map_err(|errors| {
            warn!(rejected = errors.len(), "Product form rejected: {}", errors);
            errors.into()
        })
    }

    async fn simulate_latency(&self) {
        if self.submit_delay.is_zero() {
            return;
        }
        let started = Instant::now();
        tokio::time::sleep(self.submit_delay).await;
        debug!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Submit delay elapsed"
        );
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Dashboard summary of the current collection, as of the clock's today.
    pub fn get_stats(&self) -> DashboardStats {
        let today = self.today();
        compute_stats(&self.read(), today)
    }

    pub fn get(&self, id: &ProductId) -> Option<Product> {
        self.read().iter().find(|p| &p.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Owned copy of the collection in insertion order.
    pub fn snapshot(&self) -> Vec<Product> {
        self.read().clone()
    }

    /// Products matching `filter`, in collection order.
    pub fn filter(&self, filter: &ProductFilter) -> Vec<Product> {
        filter.apply(&self.read())
    }

    /// Distinct categories currently in use, in first-occurrence order.
    pub fn categories(&self) -> Vec<String> {
        distinct_categories(&self.read())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
    use std::cell::Cell;
    use std::sync::Mutex;
    use stockroom_core::{Money, ProductField, StockFilter, StockStatus};

    use crate::error::StoreError;

    struct MutableClock(Mutex<DateTime<Utc>>);

    impl MutableClock {
        fn new(now: DateTime<Utc>) -> Self {
            Self(Mutex::new(now))
        }

        fn advance_days(&self, days: i64) {
            *self.0.lock().unwrap() += TimeDelta::days(days);
        }
    }

    impl Clock for MutableClock {
        fn local(&self) -> DateTime<Local> {
            self.utc().with_timezone(&Local)
        }

        fn utc(&self) -> DateTime<Utc> {
            *self.0.lock().unwrap()
        }
    }

    fn jan_25() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 25, 12, 0, 0).unwrap()
    }

    fn clock() -> Arc<MutableClock> {
        Arc::new(MutableClock::new(jan_25()))
    }

    fn fields(name: &str, category: &str, quantity: u32) -> ProductFields {
        ProductFields {
            name: name.to_string(),
            code: name.to_uppercase(),
            category: category.to_string(),
            quantity,
            price: Money::from_cents(1_000),
            supplier: None,
            notes: None,
        }
    }

    fn draft() -> ProductDraft {
        ProductDraft {
            name: "Kindle Paperwhite".to_string(),
            code: "kpw11".to_string(),
            category: "Eletrônicos".to_string(),
            quantity: 12,
            price: Money::from_cents(79_900),
            ..ProductDraft::default()
        }
    }

    #[test]
    fn test_new_respects_seed_flag() {
        let seeded = ProductStore::new(&StoreConfig::default(), clock());
        assert_eq!(seeded.len(), 6);

        let mut config = StoreConfig::immediate();
        config.store.seed_catalog = false;
        let empty = ProductStore::new(&config, clock());
        assert!(empty.is_empty());
        assert_eq!(empty.submit_delay(), Duration::ZERO);
    }

    #[test]
    fn test_add_assigns_id_and_timestamps() {
        let store = ProductStore::empty(clock());
        let a = store.add_product(fields("a", "Roupas", 4));
        let b = store.add_product(fields("b", "Roupas", 4));

        assert_ne!(a.id, b.id);
        assert!(Uuid::parse_str(a.id.as_str()).is_ok());
        assert_eq!(a.created_at, jan_25());
        assert_eq!(a.updated_at, jan_25());
        assert_eq!(store.snapshot(), vec![a, b]);
    }

    #[test]
    fn test_add_new_category_appears_in_distribution() {
        let store = ProductStore::empty(clock());
        store.add_product(fields("tv", "Eletrônicos", 2));
        store.add_product(fields("lego", "Brinquedos", 2));

        let stats = store.get_stats();
        assert_eq!(stats.category_distribution.len(), 2);
        assert_eq!(stats.category_distribution[0].count, 1);
        assert_eq!(stats.category_distribution[0].color, "#3B82F6");
        assert_eq!(stats.category_distribution[1].color, "#6B7280");
    }

    #[test]
    fn test_edit_round_trip() {
        let clock = clock();
        let store = ProductStore::empty(clock.clone());
        let original = store.add_product(fields("mesa", "Casa e Jardim", 3));

        clock.advance_days(2);
        let mut changed = fields("mesa gamer", "Casa e Jardim", 0);
        changed.notes = Some("Esgotado".to_string());
        let edited = store.edit_product(&original.id, changed.clone()).unwrap();

        assert_eq!(edited.fields(), changed);
        assert_eq!(edited.created_at, original.created_at);
        assert!(edited.updated_at > original.updated_at);
        assert_eq!(store.get(&original.id), Some(edited.clone()));
        assert_eq!(edited.stock_status(), StockStatus::OutOfStock);
    }

    #[test]
    fn test_edit_missing_id_is_noop() {
        let store = ProductStore::with_seed_catalog(clock());
        let before = store.snapshot();
        assert!(store
            .edit_product(&ProductId::from("missing"), fields("x", "y", 1))
            .is_none());
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn test_delete() {
        let store = ProductStore::with_seed_catalog(clock());
        let removed = store.delete_product(&ProductId::from("3")).unwrap();
        assert_eq!(removed.code, "NIKE001");
        assert_eq!(store.len(), 5);
        assert!(store.get(&ProductId::from("3")).is_none());
    }

    #[test]
    fn test_delete_nonexistent_is_noop() {
        let store = ProductStore::with_seed_catalog(clock());
        let before = store.snapshot();
        assert!(store.delete_product(&ProductId::from("42")).is_none());
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn test_request_delete_declined_leaves_store_unchanged() {
        let store = ProductStore::with_seed_catalog(clock());
        let before = store.snapshot();
        let asked = Cell::new(0);
        let decline = |_: &ProductId| {
            asked.set(asked.get() + 1);
            false
        };

        let outcome = store.request_delete(&ProductId::from("1"), &decline);

        assert_eq!(outcome, DeleteOutcome::Declined);
        assert_eq!(asked.get(), 1);
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn test_request_delete_confirmed() {
        let store = ProductStore::with_seed_catalog(clock());
        let yes = |_: &ProductId| true;
        match store.request_delete(&ProductId::from("5"), &yes) {
            DeleteOutcome::Deleted(p) => assert_eq!(p.code, "ADID001"),
            other => panic!("expected Deleted, got {other:?}"),
        }
        assert_eq!(
            store.request_delete(&ProductId::from("5"), &yes),
            DeleteOutcome::NotFound
        );
    }

    #[test]
    fn test_stats_follow_clock() {
        let clock = clock();
        let store = ProductStore::empty(clock.clone());
        store.add_product(fields("a", "Livros", 0));
        store.add_product(fields("b", "Livros", 5));
        store.add_product(fields("c", "Livros", 11));

        let stats = store.get_stats();
        assert_eq!(stats.total_products, 3);
        assert_eq!(stats.low_stock_products, 2);
        assert_eq!(stats.recent_products, 3);

        clock.advance_days(8);
        assert_eq!(store.get_stats().recent_products, 0);
    }

    #[test]
    fn test_stats_survive_extreme_valid_product() {
        let store = ProductStore::with_seed_catalog(clock());
        let huge = ProductDraft {
            price: Money::from_cents(10_000_000_000_000),
            quantity: 4_000_000,
            ..draft()
        };
        store.add_product(huge.validate().unwrap());

        let stats = store.get_stats();
        assert_eq!(stats.total_products, 7);
        assert_eq!(stats.total_value, Money::MAX);
        assert_eq!(store.get_stats(), stats);
    }

    #[test]
    fn test_stats_idempotent() {
        let store = ProductStore::with_seed_catalog(clock());
        assert_eq!(store.get_stats(), store.get_stats());
    }

    #[test]
    fn test_filter_and_categories() {
        let store = ProductStore::with_seed_catalog(clock());
        let low = store.filter(&ProductFilter::new().with_stock(StockFilter::Low));
        let codes: Vec<_> = low.iter().map(|p| p.code.as_str()).collect();
        assert_eq!(codes, vec!["MBP14", "MESA001", "ADID001"]);

        assert_eq!(
            store.categories(),
            vec!["Eletrônicos", "Roupas", "Casa e Jardim", "Esportes"]
        );
        assert_eq!(store.filter(&ProductFilter::new()), store.snapshot());
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_add_waits_then_commits() {
        let store = ProductStore::empty(clock());
        let started = Instant::now();

        let product = store.submit_add(&draft()).await.unwrap();

        assert_eq!(started.elapsed(), Duration::from_millis(500));
        assert_eq!(product.code, "KPW11");
        assert_eq!(store.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_invalid_never_waits_or_commits() {
        let store = ProductStore::empty(clock());
        let started = Instant::now();
        let mut bad = draft();
        bad.name = "   ".to_string();
        bad.quantity = -1;

        let err = store.submit_add(&bad).await.unwrap_err();

        assert_eq!(started.elapsed(), Duration::ZERO);
        assert!(store.is_empty());
        let fields = err.field_errors().unwrap();
        assert!(fields.contains(ProductField::Name));
        assert!(fields.contains(ProductField::Quantity));
        assert!(matches!(err, StoreError::Validation(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_edit() {
        let store = ProductStore::with_seed_catalog(clock())
            .with_submit_delay(Duration::from_millis(250));
        let id = ProductId::from("2");
        let mut form = ProductDraft::from(&store.get(&id).unwrap());
        form.quantity = 30;

        let started = Instant::now();
        let edited = store.submit_edit(&id, &form).await.unwrap().unwrap();

        assert_eq!(started.elapsed(), Duration::from_millis(250));
        assert_eq!(edited.quantity, 30);
        assert_eq!(edited.updated_at, jan_25());
        assert_eq!(edited.stock_status(), StockStatus::InStock);
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_edit_missing_id() {
        let store = ProductStore::empty(clock());
        let result = store
            .submit_edit(&ProductId::from("gone"), &draft())
            .await
            .unwrap();
        assert!(result.is_none());
        assert!(store.is_empty());
    }
}
