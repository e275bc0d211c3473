//! # Application State
//!
//! What a console session owns.
//!
//! ```text
//! ┌────────────────────────────────────────────┐
//! │ AppState                                   │
//! │  ├── store:  Bookstore  (catalog, ledger)  │
//! │  └── config: ShopConfig (read-only)        │
//! └────────────────────────────────────────────┘
//! ```
//!
//! The menu runs one command at a time on the session thread, so the
//! bookstore is held directly with no lock around it.

pub mod config;

pub use config::{ConfigError, OutputFormat, ShopConfig};

use folio_store::seed::load_bootstrap_catalog;
use folio_store::{Bookstore, StoreResult};
use tracing::info;

/// State of one console session.
#[derive(Debug)]
pub struct AppState {
    pub store: Bookstore,
    pub config: ShopConfig,
}

impl AppState {
    /// Builds the bookstore described by `config`, seeded if configured.
    pub fn new(config: ShopConfig) -> StoreResult<Self> {
        let store = Bookstore::new(config.bookstore_config());
        AppState::with_store(store, config)
    }

    /// Wraps an existing bookstore, loading the bootstrap catalog into it
    /// when `config.seed_catalog` is set.
    pub fn with_store(mut store: Bookstore, config: ShopConfig) -> StoreResult<Self> {
        if config.seed_catalog {
            load_bootstrap_catalog(&mut store)?;
        }

        info!(
            store_name = %config.store_name,
            products = store.list_products().len(),
            output = %config.output,
            "Session state ready"
        );

        Ok(AppState { store, config })
    }
}
