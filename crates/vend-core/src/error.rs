//! # Error Types
//!
//! Domain-specific error types for vend-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  vend-core errors (this file)                                          │
//! │  ├── CoreError        - Business rule failures (stock, funds, slots)   │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  vend-store errors (separate crate)                                    │
//! │  └── StoreError       - Snapshot load/save failures                    │
//! │                                                                         │
//! │  CLI errors (in app)                                                   │
//! │  └── CliError         - What the terminal sees (code + message)        │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → Report (one per operation)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. The `Display` text of a `CoreError` IS the user-facing message
//! 3. Errors are enum variants, never String
//! 4. Invariant violations inside the crate panic; they are not listed here

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Business rule failures raised by machine operations.
///
/// Every variant is recoverable: the operation that produced it left the
/// machine untouched and emitted exactly one error report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A deposit of zero or less.
    #[error("Can't add negative or 0 cents to the machine. Got {amount}.")]
    NonPositiveDeposit { amount: Money },

    /// The requested slot label doesn't exist on this machine.
    ///
    /// ## User Workflow
    /// ```text
    /// vend purchase F13
    ///      │
    ///      ▼
    /// items.get("F13") → None
    ///      │
    ///      ▼
    /// "There is no item located at F13. Please try again!"
    /// ```
    #[error("There is no item located at {position}. Please try again!")]
    NoSuchSlot { position: String },

    /// The slot exists but has no units left.
    #[error("Out of stock! There are no more {name} left!")]
    OutOfStock { name: String },

    /// The balance doesn't cover the item's price.
    #[error("Insufficient funds. {name} costs {price}, but got {balance}.")]
    InsufficientFunds {
        name: String,
        price: Money,
        balance: Money,
    },

    /// A column/row filter selected no slot on this machine.
    #[error("{location} isn't a slot on this machine.")]
    InvalidLocation { location: String },

    /// Validation error (wraps ValidationError).
    #[error("{0}")]
    Validation(#[from] ValidationError),
}

/// The kind of a [`CoreError`], for callers that branch on the category
/// rather than the details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    OutOfStock,
    InsufficientFunds,
    InvalidLocation,
}

impl CoreError {
    /// Returns the error's kind.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::NonPositiveDeposit { .. }
            | CoreError::NoSuchSlot { .. }
            | CoreError::Validation(_) => ErrorKind::Validation,
            CoreError::OutOfStock { .. } => ErrorKind::OutOfStock,
            CoreError::InsufficientFunds { .. } => ErrorKind::InsufficientFunds,
            CoreError::InvalidLocation { .. } => ErrorKind::InvalidLocation,
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input (or a loaded snapshot) doesn't meet
/// requirements. Used for early validation before business logic runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Column outside A..Z (or 1..26).
    #[error("Invalid column {column}: columns run from A to Z (1 to 26)")]
    InvalidColumn { column: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// Invalid format (e.g., a slot label like "1A").
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
