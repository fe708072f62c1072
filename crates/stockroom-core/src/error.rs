//! # Error Types
//!
//! Domain-specific error types for stockroom-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stockroom-core errors (this file)                                     │
//! │  ├── CoreError        - Parse failures for money and selectors         │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  stockroom-store errors (separate crate)                               │
//! │  └── StoreError       - Rejected submissions, config loading           │
//! │                                                                         │
//! │  Dashboard errors (in app)                                             │
//! │  └── ApiError         - What the UI sees (serialized)                  │
//! │                                                                         │
//! │  Flow: ValidationError → StoreError → ApiError → UI                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The store, aggregator and filter engine have no failure path of their
//! own. Everything in here is raised at the input boundary.

use thiserror::Error;

use crate::validation::FieldErrors;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised while turning raw input into domain values.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A price string could not be read as a decimal amount.
    ///
    /// ## When This Occurs
    /// - Empty input, letters, or more than one decimal separator
    /// - More than two fractional digits ("10.999")
    /// - A value too large for the centavo counter
    #[error("Invalid amount '{input}': {reason}")]
    InvalidAmount { input: String, reason: String },

    /// Stock selector is not one of `available`, `low`, `out`.
    #[error("Unknown stock filter: '{0}'. Valid options: available, low, out")]
    InvalidStockFilter(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    pub(crate) fn invalid_amount(input: &str, reason: impl Into<String>) -> Self {
        CoreError::InvalidAmount {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// The single-field variants come out of the individual validators in
/// [`crate::validation`]; [`ValidationError::Fields`] is what a rejected
/// product form produces.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be strictly greater than zero.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// One or more product form fields were rejected.
    #[error("{0}")]
    Fields(FieldErrors),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
