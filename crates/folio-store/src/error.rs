//! # Store Error Types
//!
//! Error types for catalog, ledger and sale operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  CoreError (folio-core: stock / validation rules)                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds lookup failures and internal faults   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CliError (in app) ← Error code + message for the operator             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use folio_core::{CoreError, ValidationError};
use thiserror::Error;

/// Store operation errors.
///
/// Every variant except `Internal` is an expected, recoverable condition.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// Entity not found (update or delete of an unknown id).
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// A sale named a product id that is not in the catalog.
    #[error("Invalid product ID: {0}")]
    InvalidProduct(String),

    /// The identifier generator produced an id already held by a live
    /// product. Only reachable with `IdStrategy::CatalogSize`.
    #[error("Product ID {0} is already in use")]
    DuplicateProductId(String),

    /// Business rule violation (insufficient stock, invalid input).
    #[error(transparent)]
    Domain(#[from] CoreError),

    /// Internal invariant broken. Not expected in normal operation.
    #[error("Internal store error: {0}")]
    Internal(String),
}

impl StoreError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Checks if this error is the insufficient-stock rule.
    pub fn is_insufficient_stock(&self) -> bool {
        matches!(self, StoreError::Domain(CoreError::InsufficientStock { .. }))
    }
}

impl From<ValidationError> for StoreError {
    fn from(err: ValidationError) -> Self {
        StoreError::Domain(CoreError::Validation(err))
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
