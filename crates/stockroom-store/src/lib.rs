//! # stockroom-store: In-Memory Product Store
//!
//! Owns the live product collection and everything around it that is not a
//! pure function: the clock, the simulated submit latency, the demo catalog
//! and the store configuration.
//!
//! ## Module Structure
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        stockroom-store                                  │
//! │                                                                         │
//! │  ┌─────────────┐  ┌─────────────┐  ┌─────────────┐  ┌─────────────┐    │
//! │  │  store.rs   │  │  config.rs  │  │   seed.rs   │  │  error.rs   │    │
//! │  │             │  │             │  │             │  │             │    │
//! │  │ProductStore │  │ StoreConfig │  │ demo        │  │ StoreError  │    │
//! │  │ConfirmDelete│  │ TOML + env  │  │ catalog     │  │ StoreResult │    │
//! │  └──────┬──────┘  └─────────────┘  └─────────────┘  └─────────────┘    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  stockroom-core (validation, stats, filtering)                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust,no_run
//! use std::sync::Arc;
//! use mockable::DefaultClock;
//! use stockroom_store::{ProductStore, StoreConfig};
//!
//! let config = StoreConfig::load(None).unwrap_or_default();
//! let store = ProductStore::new(&config, Arc::new(DefaultClock));
//! println!("{} products", store.len());
//! ```

pub mod config;
pub mod error;
pub mod seed;
pub mod store;

pub use config::{StoreConfig, StoreSettings};
pub use error::{StoreError, StoreResult};
pub use seed::seed_catalog;
pub use store::{ConfirmDelete, DeleteOutcome, ProductStore, DELETE_PROMPT};
