//! # vend-core: Pure Business Logic for the Vending Machine
//!
//! This crate is the **heart** of the vending machine. It contains the
//! domain model and every rule about money, slots and purchases, with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Vend Architecture                                │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    vend (CLI, apps/cli)                         │   │
//! │  │    start, add-money, purchase, view-items, dispense-change     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ one operation per invocation           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ vend-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │ position  │  │   item    │  │  machine  │  │   │
//! │  │   │   Money   │  │ Position  │  │   Item    │  │ Vending-  │  │   │
//! │  │   │ normalize │  │  "A1"     │  │ purchase  │  │  Machine  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO COLORS • PURE FUNCTIONS               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 vend-store (Persistence Layer)                  │   │
//! │  │                 JSON snapshot of the machine                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with half-up rounding to cents
//! - [`position`] - Slot labels ("A1") and their coordinates
//! - [`item`] - A single slot: name, price, remaining stock
//! - [`purchase`] - Immutable purchase log entries
//! - [`catalog`] - The static catalog and machine layout
//! - [`machine`] - The vending machine aggregate and its operations
//! - [`report`] - Outcome reports and the `Reporter` collaborator
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use vend_core::{Money, Report, VendingMachine};
//!
//! let mut machine = VendingMachine::new();
//! let mut reports: Vec<Report> = Vec::new();
//!
//! machine.deposit("10".parse::<Money>().unwrap(), &mut reports).unwrap();
//! machine.purchase_item("A1", &mut reports).unwrap();
//!
//! assert_eq!(machine.balance().to_string(), "8.25");
//! assert_eq!(reports.len(), 2);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod item;
pub mod machine;
pub mod money;
pub mod position;
pub mod purchase;
pub mod report;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::{CatalogEntry, MachineLayout, CATALOG};
pub use error::{CoreError, CoreResult, ErrorKind, ValidationError};
pub use item::Item;
pub use machine::{
    MachineSnapshot, PurchaseReceipt, PurchaseTotals, SlotFilter, SlotView, VendingMachine,
};
pub use money::Money;
pub use position::Position;
pub use purchase::Purchase;
pub use report::{Report, Reporter, Severity};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Highest column number a machine can have (A through Z).
pub const MAX_COLUMNS: u32 = 26;

/// Rows in a freshly built machine.
pub const DEFAULT_ROWS: u32 = 5;

/// Columns in a freshly built machine.
pub const DEFAULT_COLUMNS: u32 = 3;

/// Units of stock each slot starts with.
pub const DEFAULT_STOCK: u32 = 3;
