//! # Validation Module
//!
//! Product form validation for Stockroom.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Form widgets (UI)                                            │
//! │  ├── Numeric inputs, category select                                   │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── ProductDraft ──validate()──► ProductFields                        │
//! │  └── Every failing field reported at once, nothing committed           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: ProductStore                                                 │
//! │  └── Trusts ProductFields; add / edit / delete cannot fail             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockroom_core::money::Money;
//! use stockroom_core::types::ProductDraft;
//! use stockroom_core::validation::ProductField;
//!
//! let draft = ProductDraft {
//!     name: "Camiseta Nike Dri-FIT".into(),
//!     code: "nike001".into(),
//!     category: "Roupas".into(),
//!     quantity: 45,
//!     price: Money::from_cents(12_990),
//!     ..Default::default()
//! };
//! let fields = draft.validate().unwrap();
//! assert_eq!(fields.code, "NIKE001");
//!
//! let errors = ProductDraft::default().validate().unwrap_err();
//! assert_eq!(errors.get(ProductField::Name), Some("Nome é obrigatório"));
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{ProductDraft, ProductFields};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Form Fields
// =============================================================================

/// Product form fields that can be rejected. Declaration order is the order
/// errors are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ProductField {
    Name,
    Code,
    Category,
    Quantity,
    Price,
}

impl ProductField {
    /// Field key as the form uses it.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ProductField::Name => "name",
            ProductField::Code => "code",
            ProductField::Category => "category",
            ProductField::Quantity => "quantity",
            ProductField::Price => "price",
        }
    }

    /// Message shown under the field when it is rejected.
    pub const fn message(&self) -> &'static str {
        match self {
            ProductField::Name => "Nome é obrigatório",
            ProductField::Code => "Código é obrigatório",
            ProductField::Category => "Categoria é obrigatória",
            ProductField::Quantity => "Quantidade deve ser um número positivo",
            ProductField::Price => "Preço deve ser maior que zero",
        }
    }
}

impl fmt::Display for ProductField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Field Errors
// =============================================================================

/// Per-field rejection messages for one form submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<ProductField, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: ProductField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: ProductField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: ProductField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ProductField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    /// Records `field` with its standard message if `result` failed.
    fn check<T>(&mut self, field: ProductField, result: &ValidationResult<T>) {
        if result.is_err() {
            self.insert(field, field.message());
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, message)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
        }
        Ok(())
    }
}

impl From<FieldErrors> for ValidationError {
    fn from(errors: FieldErrors) -> Self {
        ValidationError::Fields(errors)
    }
}

// =============================================================================
// String Validators
// =============================================================================

fn require(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Product name must not be blank.
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    require("name", name)
}

/// Product code (SKU) must not be blank.
pub fn validate_code(code: &str) -> ValidationResult<()> {
    require("code", code)
}

/// Category must not be blank. Any label is accepted, known or not.
pub fn validate_category(category: &str) -> ValidationResult<()> {
    require("category", category)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a stock quantity as entered and narrows it to `u32`.
///
/// ## Rules
/// - Zero is allowed (out of stock)
/// - Negative values are rejected
/// - Values above `u32::MAX` are rejected
pub fn validate_quantity(qty: i64) -> ValidationResult<u32> {
    if qty < 0 {
        return Err(ValidationError::MustNotBeNegative {
            field: "quantity".to_string(),
        });
    }

    u32::try_from(qty).map_err(|_| ValidationError::OutOfRange {
        field: "quantity".to_string(),
        min: 0,
        max: i64::from(u32::MAX),
    })
}

/// Validates a unit price.
///
/// ## Example
/// ```rust
/// use stockroom_core::money::Money;
/// use stockroom_core::validation::validate_price;
///
/// assert!(validate_price(Money::from_cents(1)).is_ok());
/// assert!(validate_price(Money::zero()).is_err());
/// assert!(validate_price(Money::from_cents(-100)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if !price.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Draft Validation
// =============================================================================

/// Trims a free-text field; blank becomes `None`.
fn optional_text(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Validates a whole product form.
///
/// On success the fields are normalized: text trimmed, code uppercased,
/// blank supplier/notes dropped. On failure every rejected field is
/// reported, in [`ProductField`] order.
pub fn validate_draft(draft: &ProductDraft) -> Result<ProductFields, FieldErrors> {
    let mut errors = FieldErrors::new();

    errors.check(ProductField::Name, &validate_product_name(&draft.name));
    errors.check(ProductField::Code, &validate_code(&draft.code));
    errors.check(ProductField::Category, &validate_category(&draft.category));
    let quantity = validate_quantity(draft.quantity);
    errors.check(ProductField::Quantity, &quantity);
    errors.check(ProductField::Price, &validate_price(draft.price));

    match quantity {
        Ok(quantity) if errors.is_empty() => Ok(ProductFields {
            name: draft.name.trim().to_string(),
            code: draft.code.trim().to_uppercase(),
            category: draft.category.trim().to_string(),
            quantity,
            price: draft.price,
            supplier: optional_text(&draft.supplier),
            notes: optional_text(&draft.notes),
        }),
        _ => Err(errors),
    }
}

impl ProductDraft {
    /// See [`validate_draft`].
    pub fn validate(&self) -> Result<ProductFields, FieldErrors> {
        validate_draft(self)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> ProductDraft {
        ProductDraft {
            name: "  Samsung Galaxy S24 Ultra ".to_string(),
            code: "sams24u".to_string(),
            category: "Eletrônicos".to_string(),
            quantity: 15,
            price: Money::from_cents(749_999),
            supplier: "Samsung Electronics".to_string(),
            notes: "   ".to_string(),
        }
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Livro").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name(" \t ").is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert_eq!(validate_quantity(0).unwrap(), 0);
        assert_eq!(validate_quantity(45).unwrap(), 45);
        assert!(matches!(
            validate_quantity(-1),
            Err(ValidationError::MustNotBeNegative { .. })
        ));
        assert!(matches!(
            validate_quantity(i64::from(u32::MAX) + 1),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::from_cents(1)).is_ok());
        assert!(validate_price(Money::zero()).is_err());
        assert!(validate_price(Money::from_cents(-1)).is_err());
    }

    #[test]
    fn test_valid_draft_is_normalized() {
        let fields = valid_draft().validate().unwrap();
        assert_eq!(fields.name, "Samsung Galaxy S24 Ultra");
        assert_eq!(fields.code, "SAMS24U");
        assert_eq!(fields.quantity, 15);
        assert_eq!(fields.supplier.as_deref(), Some("Samsung Electronics"));
        assert_eq!(fields.notes, None);
    }

    #[test]
    fn test_zero_quantity_is_accepted() {
        let mut draft = valid_draft();
        draft.quantity = 0;
        assert_eq!(draft.validate().unwrap().quantity, 0);
    }

    #[test]
    fn test_every_failure_is_reported() {
        let draft = ProductDraft {
            quantity: -3,
            ..ProductDraft::default()
        };
        let errors = draft.validate().unwrap_err();

        let reported: Vec<_> = errors.iter().collect();
        assert_eq!(
            reported,
            vec![
                (ProductField::Name, "Nome é obrigatório"),
                (ProductField::Code, "Código é obrigatório"),
                (ProductField::Category, "Categoria é obrigatória"),
                (ProductField::Quantity, "Quantidade deve ser um número positivo"),
                (ProductField::Price, "Preço deve ser maior que zero"),
            ]
        );
    }

    #[test]
    fn test_single_failure() {
        let mut draft = valid_draft();
        draft.price = Money::zero();
        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.contains(ProductField::Price));
        assert!(!errors.contains(ProductField::Name));
    }

    #[test]
    fn test_field_errors_serialize_as_map() {
        let mut errors = FieldErrors::new();
        errors.insert(ProductField::Code, ProductField::Code.message());
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json["code"], "Código é obrigatório");
    }
}
