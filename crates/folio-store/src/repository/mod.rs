//! # Repository Module
//!
//! In-memory stores for Folio.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Two Stores, One Owner                                │
//! │                                                                         │
//! │  Bookstore (service object)                                            │
//! │       │                                                                 │
//! │       ├──► CatalogStore                                                │
//! │       │    ├── add(&mut self, new)        → id                          │
//! │       │    ├── update(&mut self, id, ..)  → () | NotFound               │
//! │       │    ├── delete(&mut self, id)      → record | NotFound           │
//! │       │    └── list(&self)                → insertion order             │
//! │       │                                                                 │
//! │       └──► SalesLedger                                                 │
//! │            ├── append(&mut self, sale)    (crate-private)               │
//! │            └── list(&self)                → chronological order         │
//! │                                                                         │
//! │  Neither store is reachable except through the Bookstore, so the       │
//! │  sale transaction is the only writer of the ledger.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`catalog::CatalogStore`] - Product CRUD in insertion order
//! - [`ledger::SalesLedger`] - Append-only sale history

pub mod catalog;
pub mod ledger;
