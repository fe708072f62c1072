//! # Store Error Types
//!
//! Error types for store operations.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Store Error Categories                            │
//! │                                                                         │
//! │  ┌─────────────────────┐          ┌─────────────────────────────────┐  │
//! │  │   Submission        │          │   Configuration                 │  │
//! │  │                     │          │                                 │  │
//! │  │  Validation         │          │  InvalidConfig                  │  │
//! │  │  (per-field map)    │          │  ConfigLoadFailed               │  │
//! │  └─────────────────────┘          └─────────────────────────────────┘  │
//! │                                                                         │
//! │  add / edit / delete themselves never fail: a missing id is a no-op.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use stockroom_core::FieldErrors;
use thiserror::Error;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    // =========================================================================
    // Submission Errors
    // =========================================================================
    /// The product form was rejected; nothing was committed.
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    // =========================================================================
    // Configuration Errors
    // =========================================================================
    #[error("Invalid store configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),
}

impl StoreError {
    /// Per-field messages, if this is a rejected submission.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            StoreError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

impl From<FieldErrors> for StoreError {
    fn from(errors: FieldErrors) -> Self {
        StoreError::Validation(errors)
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for StoreError {
    fn from(err: toml::de::Error) -> Self {
        StoreError::ConfigLoadFailed(format!("TOML parse error: {}", err))
    }
}
