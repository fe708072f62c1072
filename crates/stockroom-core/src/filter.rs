//! # Product Filtering
//!
//! Search box plus two facets, combined with AND:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  🔍 "iph"          [Categoria ▾]          [Estoque ▾]                   │
//! │      │                   │                      │                       │
//! │      ▼                   ▼                      ▼                       │
//! │  name OR code       category ==            available: q > 10            │
//! │  contains, case-    selected               low:       q <= 10           │
//! │  insensitive        (exact)                out:       q == 0            │
//! │      │                   │                      │                       │
//! │      └──────── AND ──────┴──────── AND ─────────┘                       │
//! │                          │                                              │
//! │                          ▼                                              │
//! │        matching products, original order kept                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Empty criteria match everything, so the default filter is the identity.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use ts_rs::TS;

use crate::stock::StockFilter;
use crate::types::Product;

/// Criteria for the product table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductFilter {
    /// Free text matched against name and code. Blank matches everything.
    pub search: String,
    /// Exact category. Empty matches everything.
    pub category: String,
    /// Stock facet. `None` matches everything.
    pub stock: Option<StockFilter>,
}

impl ProductFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_stock(mut self, stock: StockFilter) -> Self {
        self.stock = Some(stock);
        self
    }

    /// True if no criterion is set.
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty() && self.category.is_empty() && self.stock.is_none()
    }

    /// Returns true if `product` satisfies all three criteria.
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_with_needle(product, self.needle().as_deref())
    }

    /// Returns the matching products, preserving their relative order.
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        let needle = self.needle();
        products
            .iter()
            .filter(|p| self.matches_with_needle(p, needle.as_deref()))
            .cloned()
            .collect()
    }

    /// Lowercased search text, or `None` when the box is blank.
    fn needle(&self) -> Option<String> {
        if self.search.trim().is_empty() {
            None
        } else {
            Some(self.search.to_lowercase())
        }
    }

    fn matches_with_needle(&self, product: &Product, needle: Option<&str>) -> bool {
        let search_ok = needle.map_or(true, |needle| {
            product.name.to_lowercase().contains(needle)
                || product.code.to_lowercase().contains(needle)
        });
        let category_ok = self.category.is_empty() || product.category == self.category;
        let stock_ok = self.stock.map_or(true, |stock| stock.matches(product.quantity));

        search_ok && category_ok && stock_ok
    }
}

/// Filters with the raw selector values the product table sends.
///
/// `stock_status` is `""`, `"available"`, `"low"` or `"out"`. Any other
/// value matches nothing.
///
/// ## Example
/// ```rust
/// use stockroom_core::filter::filter_products;
///
/// assert!(filter_products(&[], "", "", "").is_empty());
/// ```
pub fn filter_products(
    products: &[Product],
    search: &str,
    category: &str,
    stock_status: &str,
) -> Vec<Product> {
    let stock = if stock_status.is_empty() {
        None
    } else {
        match stock_status.parse::<StockFilter>() {
            Ok(stock) => Some(stock),
            Err(_) => return Vec::new(),
        }
    };

    ProductFilter {
        search: search.to_string(),
        category: category.to_string(),
        stock,
    }
    .apply(products)
}

/// Category facet options: distinct categories in order of first appearance.
pub fn distinct_categories(products: &[Product]) -> Vec<String> {
    let mut seen = HashSet::new();
    products
        .iter()
        .filter(|p| seen.insert(p.category.as_str()))
        .map(|p| p.category.clone())
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::ProductId;
    use chrono::{TimeZone, Utc};
    use proptest::prelude::*;

    fn product(id: &str, name: &str, code: &str, category: &str, quantity: u32) -> Product {
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        Product {
            id: ProductId::from(id),
            name: name.to_string(),
            code: code.to_string(),
            category: category.to_string(),
            quantity,
            price: Money::from_cents(1_000),
            supplier: None,
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product("1", "iPhone 15 Pro Max", "IPH15PM", "Eletrônicos", 25),
            product("2", "MacBook Pro 14\"", "MBP14", "Eletrônicos", 8),
            product("3", "Camiseta Nike Dri-FIT", "NIKE001", "Roupas", 45),
            product("4", "Mesa de Escritório Ergonômica", "MESA001", "Casa e Jardim", 3),
            product("5", "Tênis Adidas Ultraboost 22", "ADID001", "Esportes", 0),
        ]
    }

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_empty_filter_is_identity() {
        let products = catalog();
        assert_eq!(filter_products(&products, "", "", ""), products);
        assert_eq!(ProductFilter::new().apply(&products), products);
        assert!(ProductFilter::new().is_empty());
    }

    #[test]
    fn test_blank_search_matches_everything() {
        let products = catalog();
        assert_eq!(filter_products(&products, "   ", "", "").len(), products.len());
    }

    #[test]
    fn test_search_name_or_code_case_insensitive() {
        let products = catalog();
        assert_eq!(ids(&filter_products(&products, "PRO", "", "")), vec!["1", "2"]);
        assert_eq!(ids(&filter_products(&products, "nike0", "", "")), vec!["3"]);
        assert_eq!(ids(&filter_products(&products, "mesa", "", "")), vec!["4"]);
        assert!(filter_products(&products, "galaxy", "", "").is_empty());
    }

    #[test]
    fn test_category_exact_match() {
        let products = catalog();
        assert_eq!(ids(&filter_products(&products, "", "Eletrônicos", "")), vec!["1", "2"]);
        assert!(filter_products(&products, "", "eletrônicos", "").is_empty());
    }

    #[test]
    fn test_stock_facets() {
        let products = catalog();
        assert_eq!(ids(&filter_products(&products, "", "", "available")), vec!["1", "3"]);
        assert_eq!(ids(&filter_products(&products, "", "", "low")), vec!["2", "4", "5"]);
        assert_eq!(ids(&filter_products(&products, "", "", "out")), vec!["5"]);
    }

    #[test]
    fn test_out_keeps_order_of_zero_items() {
        let products = vec![
            product("a", "A", "A", "X", 0),
            product("b", "B", "B", "X", 0),
            product("c", "C", "C", "X", 5),
        ];
        assert_eq!(ids(&filter_products(&products, "", "", "out")), vec!["a", "b"]);
    }

    #[test]
    fn test_unknown_stock_selector_matches_nothing() {
        assert!(filter_products(&catalog(), "", "", "discontinued").is_empty());
    }

    #[test]
    fn test_criteria_are_anded() {
        let filter = ProductFilter::new()
            .with_search("pro")
            .with_category("Eletrônicos")
            .with_stock(StockFilter::Low);
        assert_eq!(ids(&filter.apply(&catalog())), vec!["2"]);
        assert!(!filter.is_empty());
        assert!(filter.matches(&catalog()[1]));
        assert!(!filter.matches(&catalog()[0]));
    }

    #[test]
    fn test_distinct_categories() {
        assert_eq!(
            distinct_categories(&catalog()),
            vec!["Eletrônicos", "Roupas", "Casa e Jardim", "Esportes"]
        );
    }

    proptest! {
        #[test]
        fn prop_filter_is_an_ordered_subsequence(
            quantities in proptest::collection::vec(0u32..30, 0..40),
            stock in prop_oneof![
                Just(""),
                Just("available"),
                Just("low"),
                Just("out"),
            ],
        ) {
            let products: Vec<Product> = quantities
                .iter()
                .enumerate()
                .map(|(i, q)| product(&i.to_string(), "Item", "SKU", "Cat", *q))
                .collect();
            let filtered = filter_products(&products, "", "", stock);

            let mut cursor = products.iter();
            for kept in &filtered {
                prop_assert!(cursor.any(|p| p == kept));
            }
            prop_assert!(filtered.len() <= products.len());
        }
    }
}
