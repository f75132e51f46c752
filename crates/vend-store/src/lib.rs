//! # vend-store: Snapshot Persistence for the Vending Machine
//!
//! The machine lives in memory for exactly one CLI invocation. This crate is
//! what carries it from one invocation to the next.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Vend Data Flow                                   │
//! │                                                                         │
//! │  vend add-money 10                                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   vend-store (THIS CRATE)                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────┐    ┌──────────────┐  │   │
//! │  │   │  StoreConfig  │───►│ JsonFileStore  │    │ MemoryStore  │  │   │
//! │  │   │  (config.rs)  │    │  (store.rs)    │    │ (store.rs)   │  │   │
//! │  │   │               │    │                │    │              │  │   │
//! │  │   │ path, pretty  │    │ load / save    │    │ tests only   │  │   │
//! │  │   └───────────────┘    │ exists/delete  │    │              │  │   │
//! │  │                        └────────────────┘    └──────────────┘  │   │
//! │  │                     both impl SnapshotStore                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     state.json                                  │   │
//! │  │   ~/.local/share/vend/state.json (or --state-file)              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`config`] - Where the snapshot lives and how it is written
//! - [`store`] - The `SnapshotStore` trait and its implementations
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use vend_core::{Report, VendingMachine};
//! use vend_store::{JsonFileStore, SnapshotStore, StoreConfig};
//!
//! # fn main() -> Result<(), vend_store::StoreError> {
//! let store = JsonFileStore::new(StoreConfig::new("state.json"));
//!
//! let mut machine = store.load()?;
//! let mut reports: Vec<Report> = Vec::new();
//! machine.dispense_change(&mut reports);
//! store.save(&machine)?;
//! # Ok(())
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use store::{JsonFileStore, MemoryStore, SnapshotStore};
