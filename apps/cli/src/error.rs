//! # CLI Error Type
//!
//! Unified error type for `vend` commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in vend                                   │
//! │                                                                         │
//! │  Command handler                                                       │
//! │  CliResult<()>                                                         │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Machine refused? ─── CoreError ──► already reported by the machine   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  No snapshot?  ────── StoreError::NotFound ──► NotInitialized ──┐      │
//! │         │                                                       │      │
//! │         ▼                                                       ▼      │
//! │  Disk / config? ───── StoreError / toml ──► CliError ──► printed once  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Exit status from ErrorCode                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;
use vend_core::{CoreError, ErrorKind};
use vend_store::StoreError;

/// Errors a `vend` command can end with.
#[derive(Debug, Error)]
pub enum CliError {
    /// Any command but start/destroy/rebuild before `vend start`.
    #[error("Please initialize the vending machine first.")]
    NotInitialized,

    /// The machine refused the operation. It has already emitted its own
    /// error report.
    #[error("{0}")]
    Domain(#[from] CoreError),

    /// Reading or writing the snapshot failed.
    #[error("{0}")]
    Store(StoreError),

    /// The configuration file or environment is unusable.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Machine-readable error codes, used in logs and for the exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// No machine has been started
    NotInitialized,

    /// Bad deposit, malformed position or column
    ValidationError,

    /// The slot is empty
    OutOfStock,

    /// Balance below price
    InsufficientFunds,

    /// A listing filter that matches no slot
    InvalidLocation,

    /// Snapshot could not be read or written
    StorageError,

    /// Configuration could not be loaded
    ConfigError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::NotInitialized => "NOT_INITIALIZED",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::OutOfStock => "OUT_OF_STOCK",
            ErrorCode::InsufficientFunds => "INSUFFICIENT_FUNDS",
            ErrorCode::InvalidLocation => "INVALID_LOCATION",
            ErrorCode::StorageError => "STORAGE_ERROR",
            ErrorCode::ConfigError => "CONFIG_ERROR",
        }
    }

    /// Process exit status. Usage problems share clap's status 2; everything
    /// else is 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            ErrorCode::ConfigError => 2,
            _ => 1,
        }
    }
}

impl CliError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        CliError::Config(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            CliError::NotInitialized => ErrorCode::NotInitialized,
            CliError::Domain(err) => match err.kind() {
                ErrorKind::Validation => ErrorCode::ValidationError,
                ErrorKind::OutOfStock => ErrorCode::OutOfStock,
                ErrorKind::InsufficientFunds => ErrorCode::InsufficientFunds,
                ErrorKind::InvalidLocation => ErrorCode::InvalidLocation,
            },
            CliError::Store(_) => ErrorCode::StorageError,
            CliError::Config(_) => ErrorCode::ConfigError,
        }
    }

    /// True when the user has already seen this error as a report.
    pub fn is_reported(&self) -> bool {
        matches!(self, CliError::Domain(_))
    }
}

/// Converts store errors. A missing snapshot means the machine was never
/// started.
impl From<StoreError> for CliError {
    fn from(err: StoreError) -> Self {
        if err.is_not_found() {
            CliError::NotInitialized
        } else {
            CliError::Store(err)
        }
    }
}

/// Result type for command handlers.
pub type CliResult<T> = Result<T, CliError>;
