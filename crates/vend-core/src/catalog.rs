//! # Catalog & Layout
//!
//! The static list of products a fresh machine is stocked with, and the
//! grid they are laid out on.
//!
//! ## Slot Assignment (column-major)
//! ```text
//! catalog:  [Gatorade (Blue), Gatorade (Yellow), ..., Trident]
//!              │                 │                      │
//!              ▼                 ▼                      ▼
//!   A1, A2, A3, A4, A5,  B1, B2, ..., B5,  C1, ..., C5
//!
//! • Catalog shorter than rows × columns → remaining slots are left out
//! • Catalog longer than rows × columns  → extra entries are left out
//! ```

use std::collections::BTreeMap;

use crate::item::Item;
use crate::money::Money;
use crate::position::Position;
use crate::validation::{validate_layout, ValidationResult};
use crate::{DEFAULT_COLUMNS, DEFAULT_ROWS, DEFAULT_STOCK};

/// A catalog line: product name and price in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub price_cents: i64,
}

impl CatalogEntry {
    const fn new(name: &'static str, price_cents: i64) -> Self {
        CatalogEntry { name, price_cents }
    }

    /// Price as Money.
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

/// Products stocked in every new machine, in slot order.
pub const CATALOG: &[CatalogEntry] = &[
    CatalogEntry::new("Gatorade (Blue)", 175),
    CatalogEntry::new("Gatorade (Yellow)", 175),
    CatalogEntry::new("Gatorade (Red)", 175),
    CatalogEntry::new("Gatorade (Orange)", 175),
    CatalogEntry::new("Coca Cola", 125),
    CatalogEntry::new("Fruit Snacks", 75),
    CatalogEntry::new("Oreos", 50),
    CatalogEntry::new("Lays", 100),
    CatalogEntry::new("Ruffles", 100),
    CatalogEntry::new("Cheetos", 100),
    CatalogEntry::new("Reeses Cups", 75),
    CatalogEntry::new("KitKat", 75),
    CatalogEntry::new("M&Ms", 75),
    CatalogEntry::new("Orbit", 25),
    CatalogEntry::new("Trident", 25),
];

// =============================================================================
// Layout
// =============================================================================

/// Grid dimensions and starting stock for a fresh machine.
///
/// Only built through [`MachineLayout::new`] (or `Default`), so every layout
/// in hand is a valid one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MachineLayout {
    rows: u32,
    columns: u32,
    stock: u32,
}

impl Default for MachineLayout {
    /// 5 rows × 3 columns, 3 units each: exactly the 15 catalog entries.
    fn default() -> Self {
        MachineLayout {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            stock: DEFAULT_STOCK,
        }
    }
}

impl MachineLayout {
    /// Creates a layout of `rows` × `columns` slots with `stock` units each.
    ///
    /// ## Example
    /// ```rust
    /// use vend_core::MachineLayout;
    ///
    /// assert!(MachineLayout::new(5, 3, 3).is_ok());
    /// assert!(MachineLayout::new(5, 27, 3).is_err());
    /// ```
    pub fn new(rows: u32, columns: u32, stock: u32) -> ValidationResult<Self> {
        validate_layout(rows, columns)?;

        Ok(MachineLayout {
            rows,
            columns,
            stock,
        })
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Units placed in every filled slot.
    pub fn stock(&self) -> u32 {
        self.stock
    }

    /// Number of slots in the grid.
    pub fn capacity(&self) -> u64 {
        u64::from(self.rows) * u64::from(self.columns)
    }
}

/// Lays `catalog` out column-major on the grid described by `layout`.
///
/// Stops early, without error, when the catalog runs out or the grid is
/// full.
pub fn build_slots(catalog: &[CatalogEntry], layout: MachineLayout) -> BTreeMap<Position, Item> {
    let coordinates =
        (1..=layout.columns).flat_map(|column| (1..=layout.rows).map(move |row| (column, row)));

    coordinates
        .zip(catalog)
        .map(|((column, row), entry)| {
            (
                Position::at(column, row),
                Item::new(entry.name, entry.price(), layout.stock),
            )
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
