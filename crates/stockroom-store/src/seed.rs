//! # Demo Catalog
//!
//! The six products a fresh dashboard starts with. Ids are `"1"` to `"6"`;
//! products added later get UUIDs, so the two never collide.

use chrono::{DateTime, NaiveDate, Utc};
use stockroom_core::{Money, Product, ProductId};

/// Midnight UTC on the given day.
fn day(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

#[allow(clippy::too_many_arguments)]
fn seeded(
    id: &str,
    name: &str,
    code: &str,
    category: &str,
    quantity: u32,
    price_cents: i64,
    supplier: &str,
    notes: &str,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
) -> Product {
    Product {
        id: ProductId::from(id),
        name: name.to_string(),
        code: code.to_string(),
        category: category.to_string(),
        quantity,
        price: Money::from_cents(price_cents),
        supplier: Some(supplier.to_string()),
        notes: Some(notes.to_string()),
        created_at,
        updated_at,
    }
}

/// Returns the demo catalog in display order.
pub fn seed_catalog() -> Vec<Product> {
    vec![
        seeded(
            "1",
            "iPhone 15 Pro Max",
            "IPH15PM",
            "Eletrônicos",
            25,
            899_999,
            "Apple Inc.",
            "Modelo premium com 256GB",
            day(2024, 1, 15),
            day(2024, 1, 15),
        ),
        seeded(
            "2",
            "MacBook Pro 14\"",
            "MBP14",
            "Eletrônicos",
            8,
            1_299_999,
            "Apple Inc.",
            "M3 Pro, 18GB RAM, 512GB SSD",
            day(2024, 1, 10),
            day(2024, 1, 20),
        ),
        seeded(
            "3",
            "Camiseta Nike Dri-FIT",
            "NIKE001",
            "Roupas",
            45,
            12_990,
            "Nike Brasil",
            "Disponível em várias cores e tamanhos",
            day(2024, 1, 12),
            day(2024, 1, 12),
        ),
        seeded(
            "4",
            "Mesa de Escritório Ergonômica",
            "MESA001",
            "Casa e Jardim",
            3,
            89_999,
            "Móveis & Cia",
            "Mesa com regulagem de altura",
            day(2024, 1, 8),
            day(2024, 1, 18),
        ),
        seeded(
            "5",
            "Tênis Adidas Ultraboost 22",
            "ADID001",
            "Esportes",
            0,
            89_999,
            "Adidas Brasil",
            "Esgotado - aguardando reposição",
            day(2024, 1, 5),
            day(2024, 1, 25),
        ),
        seeded(
            "6",
            "Samsung Galaxy S24 Ultra",
            "SAMS24U",
            "Eletrônicos",
            15,
            749_999,
            "Samsung Electronics",
            "Modelo top de linha com S Pen",
            day(2024, 1, 20),
            day(2024, 1, 20),
        ),
    ]
}
