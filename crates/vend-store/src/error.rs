//! # Store Error Types
//!
//! Error types for snapshot persistence.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error / CoreError                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds the file path                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CliError (in apps/cli) ← Mapped to an error code + exit status        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ConsolePrinter shows the message                                      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;
use std::path::PathBuf;
use thiserror::Error;
use vend_core::CoreError;

/// Snapshot persistence errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No snapshot has been saved yet.
    ///
    /// ## When This Occurs
    /// - `load` before `vend start`
    /// - `load` after `vend destroy`
    #[error("No vending machine found at {}", .path.display())]
    NotFound { path: PathBuf },

    /// Reading, writing or removing the file failed.
    #[error("Could not access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file exists but is not a snapshot.
    ///
    /// ## When This Occurs
    /// - Hand-edited file with a typo
    /// - Negative stock, malformed position keys, non-decimal money
    #[error("Snapshot at {} is corrupt: {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The snapshot parsed but describes a machine that cannot exist
    /// (negative balance, free items).
    #[error("Snapshot describes an invalid machine: {0}")]
    Invalid(#[from] CoreError),

    /// Encoding the machine failed.
    #[error("Could not encode snapshot: {0}")]
    Encode(#[source] serde_json::Error),
}

impl StoreError {
    /// Creates an Io error for the given path.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }

    /// True when there simply is no machine yet.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
