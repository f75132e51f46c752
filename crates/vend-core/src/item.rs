//! # Items
//!
//! One slot of the machine: what it holds, what it costs, and how many are
//! left.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

/// An item that lives in a single slot of the vending machine.
///
/// Stock is unsigned, so a negative stock count can't be built. Price is
/// fixed for the life of the item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    name: String,
    price: Money,
    remaining_stock: u32,
}

impl Item {
    /// Creates an item.
    ///
    /// # Panics
    /// If `price` is zero or negative. Items come from the static catalog,
    /// so a bad price there is a bug, not user input.
    pub fn new(name: impl Into<String>, price: Money, remaining_stock: u32) -> Self {
        assert!(
            price.is_positive(),
            "item price must be positive, got {price}"
        );

        Item {
            name: name.into(),
            price,
            remaining_stock,
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price.
    pub fn price(&self) -> Money {
        self.price
    }

    /// Units left in the slot.
    pub fn remaining_stock(&self) -> u32 {
        self.remaining_stock
    }

    /// Whether at least one unit is left.
    pub fn in_stock(&self) -> bool {
        self.remaining_stock > 0
    }

    /// Buys one unit with the given balance and returns what's left of it.
    ///
    /// ## Checks (in order)
    /// ```text
    /// purchase(balance)
    ///      │
    ///      ├── remaining_stock == 0?  → OutOfStock        (nothing changes)
    ///      │
    ///      ├── balance < price?       → InsufficientFunds (nothing changes)
    ///      │
    ///      └── stock -= 1, return balance - price
    /// ```
    pub fn purchase(&mut self, balance: Money) -> CoreResult<Money> {
        if !self.in_stock() {
            return Err(CoreError::OutOfStock {
                name: self.name.clone(),
            });
        }

        if balance < self.price {
            return Err(CoreError::InsufficientFunds {
                name: self.name.clone(),
                price: self.price,
                balance,
            });
        }

        self.remaining_stock -= 1;
        Ok(balance - self.price)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
