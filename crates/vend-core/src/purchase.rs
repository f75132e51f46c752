//! # Purchases
//!
//! The purchase log. Each entry freezes the slot and the price paid at the
//! moment of the sale.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::position::Position;

/// One completed purchase. Never mutated or removed once logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Purchase {
    position: Position,
    price: Money,
}

impl Purchase {
    /// Records a purchase at `position` for `price`.
    pub fn new(position: Position, price: Money) -> Self {
        Purchase { position, price }
    }

    /// Slot the item came from.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Price paid.
    pub fn price(&self) -> Money {
        self.price
    }
}
