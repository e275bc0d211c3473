//! # Validation Module
//!
//! Precondition checks for values entering the core.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Input collector (folio-cli)                                  │
//! │  ├── Parses raw text into numbers                                      │
//! │  └── Re-prompts until the value parses and is in range                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Typed values only, never raw text                                 │
//! │  └── Rejects values outside the domain with a ValidationError          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Bookstore service (folio-store)                              │
//! │  └── Existence and stock checks against live state                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Amount;
use crate::{MAX_DISCOUNT_PERCENT, MAX_TEXT_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a required free-text product field (title, author, category).
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most `MAX_TEXT_LEN` characters
///
/// ## Example
/// ```rust
/// use folio_core::validation::validate_text_field;
///
/// assert!(validate_text_field("title", "Python 101").is_ok());
/// assert!(validate_text_field("title", "  ").is_err());
/// ```
pub fn validate_text_field(field: &str, value: &str) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > MAX_TEXT_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_TEXT_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a catalog price: finite and strictly positive.
pub fn validate_price(price: Amount) -> ValidationResult<()> {
    if !price.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "price".to_string(),
        });
    }

    if !price.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates the stock of a new catalog entry (at least one copy).
pub fn validate_initial_stock(stock: u32) -> ValidationResult<()> {
    if stock == 0 {
        return Err(ValidationError::MustBePositive {
            field: "stock".to_string(),
        });
    }

    Ok(())
}

/// Validates a sale quantity (at least one copy).
pub fn validate_quantity(qty: u32) -> ValidationResult<()> {
    if qty == 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a discount percentage.
///
/// ## Rules
/// - Finite
/// - `0 <= pct < MAX_DISCOUNT_PERCENT`
///
/// ## User Workflow
/// ```text
/// Operator enters discount: 15
///      │
///      ▼
/// validate_discount_percent(15.0) ← THIS FUNCTION
///      │
///      ├── NaN / inf?  → Error: "discount must be a finite number"
///      ├── < 0 or ≥ 100? → Error: "discount must be at least 0 and below 100"
///      └── OK → Discount(15.0)
/// ```
pub fn validate_discount_percent(pct: f64) -> ValidationResult<()> {
    if !pct.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "discount".to_string(),
        });
    }

    if !(0.0..MAX_DISCOUNT_PERCENT).contains(&pct) {
        return Err(ValidationError::OutOfRange {
            field: "discount".to_string(),
            min: 0.0,
            max: MAX_DISCOUNT_PERCENT,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
