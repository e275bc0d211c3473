//! # folio-core: Pure Domain Logic for Folio
//!
//! This crate is the **heart** of Folio, a single-operator inventory and
//! point-of-sale tool for a small bookstore. It contains the record types,
//! pricing rules and report aggregations as pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Folio Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    folio-cli (menu shell)                       │   │
//! │  │    input collector ──► commands ──► presenter (text / json)     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 folio-store (in-memory state)                   │   │
//! │  │        Bookstore ─► CatalogStore, SalesLedger, Clock            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ folio-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  report   │  │ validation│  │   │
//! │  │   │ Product   │  │  Amount   │  │ TopSeller │  │   rules   │  │   │
//! │  │   │ Sale      │  │           │  │ Revenue   │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO GLOBALS • PURE FUNCTIONS               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain records (ProductRecord, SaleRecord, Discount, ...)
//! - [`money`] - The `Amount` value type
//! - [`report`] - Read-only aggregations over the sales ledger
//! - [`error`] - Domain error types
//! - [`validation`] - Precondition checks on already-typed input
//!
//! ## Example Usage
//!
//! ```rust
//! use folio_core::money::Amount;
//! use folio_core::types::Discount;
//!
//! let unit_price = Amount::new(25.99);
//! let discount = Discount::from_percent(10.0).unwrap();
//!
//! let net = unit_price.multiply_quantity(2).apply_discount(discount);
//! assert!(net.approx_eq(Amount::new(46.782)));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod report;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Amount;
pub use report::{AuthorRevenue, RevenueSummary, TopSeller};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Prefix of every catalog identifier ("P001").
pub const PRODUCT_ID_PREFIX: &str = "P";

/// Minimum digit width of the numeric part of a catalog identifier.
pub const PRODUCT_ID_WIDTH: usize = 3;

/// Number of rows in the bestseller report when the operator does not say.
pub const DEFAULT_TOP_SELLERS: usize = 3;

/// Exclusive upper bound of an accepted discount percentage.
///
/// A discount at or above this value would make the net price zero or
/// negative, so it is rejected before a sale is registered.
pub const MAX_DISCOUNT_PERCENT: f64 = 100.0;

/// Maximum length of free-text product fields (title, author, category).
pub const MAX_TEXT_LEN: usize = 200;
