//! # Stockroom Dashboard Library
//!
//! Command layer for the inventory dashboard, plus the setup shared by the
//! `stockroom` binary.
//!
//! ## Module Organization
//! ```text
//! stockroom_dashboard/
//! ├── lib.rs          ◄─── You are here (logging & store setup)
//! ├── commands.rs     ◄─── get_stats, list_products, create_product, ...
//! ├── error.rs        ◄─── API error type for commands
//! └── main.rs         ◄─── `stockroom` CLI
//! ```

pub mod commands;
pub mod error;

use mockable::DefaultClock;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use stockroom_store::{ProductStore, StoreConfig};

pub use error::{ApiError, ErrorCode};

/// Initializes the tracing subscriber.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug logs
/// - `RUST_LOG=stockroom=trace` - Show trace for stockroom crates only
/// - Default: INFO, DEBUG for stockroom crates
///
/// Logs go to stderr so JSON on stdout stays clean.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,stockroom=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Loads the store configuration and builds a store on the system clock.
///
/// A missing config file means defaults. An unreadable or out-of-range one
/// is a `CONFIG_ERROR`.
pub fn open_store(config_path: Option<PathBuf>) -> Result<ProductStore, ApiError> {
    let config = StoreConfig::load(config_path)?;
    info!(
        submit_delay_ms = config.store.submit_delay_ms,
        seed_catalog = config.store.seed_catalog,
        "Opening product store"
    );
    Ok(ProductStore::new(&config, Arc::new(DefaultClock)))
}
