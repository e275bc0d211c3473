//! # folio-store: In-Memory State for Folio
//!
//! This crate holds the two stores of a Folio session and the service object
//! that coordinates them. State is volatile: it lives for one process run.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Folio Data Flow                                  │
//! │                                                                         │
//! │  Menu command (register sale)                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    folio-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Bookstore   │    │  Repositories │    │   Support    │  │   │
//! │  │   │(bookstore.rs) │    │               │    │              │  │   │
//! │  │   │               │───►│ CatalogStore  │    │ IdStrategy   │  │   │
//! │  │   │ sale txn      │    │ SalesLedger   │    │ Clock        │  │   │
//! │  │   │ reports       │    │               │    │ seed catalog │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  folio-core (records, pricing, report aggregations)                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`bookstore`] - The `Bookstore` service object and its configuration
//! - [`repository`] - Catalog store and sales ledger
//! - [`ids`] - Catalog identifier generation
//! - [`clock`] - Date source for sale records
//! - [`seed`] - Bootstrap catalog
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust
//! use folio_core::{Discount, NewProduct, SaleRequest};
//! use folio_store::{Bookstore, BookstoreConfig};
//!
//! let mut store = Bookstore::new(BookstoreConfig::default());
//! let id = store
//!     .add_product(NewProduct::new("Python 101", "John Smith", "Programming", 25.99, 10))
//!     .unwrap();
//!
//! let sale = store
//!     .register_sale(SaleRequest::new("Ana", &id, 2, Discount::none()))
//!     .unwrap();
//! assert_eq!(sale.quantity, 2);
//! assert_eq!(store.get_product(&id).unwrap().stock, 8);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod bookstore;
pub mod clock;
pub mod error;
pub mod ids;
pub mod repository;
pub mod seed;

// =============================================================================
// Re-exports
// =============================================================================

pub use bookstore::{Bookstore, BookstoreConfig};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{StoreError, StoreResult};
pub use ids::IdStrategy;

// Repository re-exports for convenience
pub use repository::catalog::CatalogStore;
pub use repository::ledger::SalesLedger;
