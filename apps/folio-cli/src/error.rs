//! # Console Error Types
//!
//! Two layers: [`CommandError`] is what a menu command reports to the
//! operator, [`CliError`] is everything that can end or interrupt a session.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Folio                                  │
//! │                                                                         │
//! │  Menu action                                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, CommandError>                                         │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Unknown id? ───── StoreError::NotFound ──────────┐             │  │
//! │  │         │                                          │             │  │
//! │  │         ▼                                          ▼             │  │
//! │  │  Rule broken? ──── CoreError::InsufficientStock ── CommandError ►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  Menu loop:                                                             │
//! │    CliError::Command  → "Error: ..." shown, loop continues             │
//! │    CliError::InputClosed → session ends cleanly                        │
//! │    CliError::Io       → session ends with the error                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::io;

use folio_core::CoreError;
use folio_store::StoreError;
use serde::Serialize;
use thiserror::Error;

use crate::state::config::ConfigError;

// =============================================================================
// Command Error
// =============================================================================

/// Error returned from menu commands.
///
/// ## Serialization
/// This is what the JSON presenter prints when a command fails:
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Product not found: P042"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

/// Error codes for command failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Update or delete of an unknown product
    NotFound,

    /// Sale against an unknown product
    InvalidProduct,

    /// Sale quantity exceeds stock
    InsufficientStock,

    /// Input outside the domain (empty title, zero price, ...)
    ValidationError,

    /// Issued catalog id is already held by a live product
    Conflict,

    /// Unanticipated fault
    Internal,
}

impl CommandError {
    /// Creates a new command error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        CommandError {
            code,
            message: message.into(),
        }
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        CommandError::new(ErrorCode::Internal, message)
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CommandError {}

/// Converts store errors to command errors.
impl From<StoreError> for CommandError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { .. } => CommandError::new(ErrorCode::NotFound, err.to_string()),
            StoreError::InvalidProduct(_) => {
                CommandError::new(ErrorCode::InvalidProduct, err.to_string())
            }
            StoreError::DuplicateProductId(_) => {
                CommandError::new(ErrorCode::Conflict, err.to_string())
            }
            StoreError::Domain(core) => CommandError::from(core),
            StoreError::Internal(ref message) => {
                tracing::error!("Internal store error: {}", message);
                CommandError::internal(err.to_string())
            }
        }
    }
}

/// Converts core errors to command errors.
impl From<CoreError> for CommandError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InsufficientStock { .. } => {
                CommandError::new(ErrorCode::InsufficientStock, err.to_string())
            }
            CoreError::Validation(inner) => {
                CommandError::new(ErrorCode::ValidationError, inner.to_string())
            }
        }
    }
}

/// Result type for menu commands.
pub type CommandResult<T> = Result<T, CommandError>;

// =============================================================================
// Session Error
// =============================================================================

/// Everything that can interrupt a console session.
#[derive(Debug, Error)]
pub enum CliError {
    /// A command failed; shown to the operator, the menu continues.
    #[error(transparent)]
    Command(#[from] CommandError),

    /// Reading the terminal or writing to it failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Input reached end of file.
    #[error("Input closed")]
    InputClosed,

    /// The JSON presenter could not render a value.
    #[error("Failed to render output: {0}")]
    Json(#[from] serde_json::Error),

    /// A `FOLIO_*` variable holds an unusable value.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

impl From<StoreError> for CliError {
    fn from(err: StoreError) -> Self {
        CliError::Command(err.into())
    }
}

/// Result type for session-level operations.
pub type CliResult<T> = Result<T, CliError>;
