//! # Validation Module
//!
//! Input validation utilities for the vending machine.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: CLI (clap)                                                   │
//! │  └── Argument shape (numbers are numbers, required args present)       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Config / Snapshot loading                                    │
//! │  └── THIS MODULE: layout bounds, balance and price sanity              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Machine operations                                           │
//! │  └── Business rules (positive deposits, stock, funds)                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::MAX_COLUMNS;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates grid dimensions.
///
/// ## Rules
/// - At least one row
/// - Between 1 and 26 columns (A through Z)
///
/// ## Example
/// ```rust
/// use vend_core::validation::validate_layout;
///
/// assert!(validate_layout(5, 3).is_ok());
/// assert!(validate_layout(5, 27).is_err());
/// assert!(validate_layout(0, 3).is_err());
/// ```
pub fn validate_layout(rows: u32, columns: u32) -> ValidationResult<()> {
    if rows == 0 {
        return Err(ValidationError::MustBePositive {
            field: "rows".to_string(),
        });
    }

    if columns == 0 || columns > MAX_COLUMNS {
        return Err(ValidationError::OutOfRange {
            field: "columns".to_string(),
            min: 1,
            max: i64::from(MAX_COLUMNS),
        });
    }

    Ok(())
}

/// Validates a stored balance. Zero is fine, negative is not.
pub fn validate_balance(balance: Money) -> ValidationResult<()> {
    if balance.is_negative() {
        return Err(ValidationError::MustNotBeNegative {
            field: "balance".to_string(),
        });
    }

    Ok(())
}

/// Validates an item price. Free items don't exist in this machine.
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if !price.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
