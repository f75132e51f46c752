//! # Money Module
//!
//! Provides the `Money` type and the rounding helpers every balance, price
//! and dispensed amount flows through.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: base-10 decimals, always 2 fractional digits             │
//! │    "0.10" + "0.20" = "0.30"                                             │
//! │    Any raw input is rounded ONCE, half-up, at the hundredths place      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rounding Mode
//! Half-up, implemented as [`RoundingStrategy::MidpointAwayFromZero`]:
//! `0.125 → 0.13`, `0.124 → 0.12`, `-0.125 → -0.13`. Negative amounts only
//! show up in intermediate arithmetic; the machine never stores them.
//!
//! ## Usage
//! ```rust
//! use rust_decimal::Decimal;
//! use vend_core::money::{self, Money};
//!
//! let deposit: Money = "10".parse().unwrap();
//! assert_eq!(deposit.to_string(), "10.00");
//!
//! let price = Money::from_cents(175);
//! assert_eq!((deposit - price).to_string(), "8.25");
//!
//! // Arbitrary precision is rounded once, at the end
//! let third = Decimal::new(3333, 4); // 0.3333
//! assert_eq!(money::add(third, third, &[third]).unwrap().to_string(), "1.00");
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};
use std::str::FromStr;

use crate::error::ValidationError;

/// Number of fractional digits every `Money` carries.
pub const MONEY_SCALE: u32 = 2;

/// Largest magnitude, in whole units, that parsing and arithmetic accept.
pub const MAX_AMOUNT_UNITS: i64 = 1_000_000_000_000;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value with exactly two fractional digits.
///
/// ## Design Decisions
/// - **Decimal inside**: exact base-10 arithmetic, no float drift
/// - **Only built through [`normalize`]**: the 2-digit invariant holds for
///   every value, including ones parsed from user input or snapshots
/// - **Serialized as a string** (`"8.25"`) so nothing is lost in JSON
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  add-money "10" ──► normalize ──► VendingMachine.balance                │
/// │                                        │                                │
/// │  Item.price ──────────────────────────►├──► Item::purchase ──► balance  │
/// │                                        │                                │
/// │  Purchase.price (frozen at purchase)   └──► dispense_change            │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Money(Decimal);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use vend_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(175).to_string(), "1.75");
    /// assert_eq!(Money::from_cents(-50).to_string(), "-0.50");
    /// ```
    #[inline]
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, MONEY_SCALE))
    }

    /// Returns zero money value (`"0.00"`).
    #[inline]
    pub fn zero() -> Self {
        Money::from_cents(0)
    }

    /// Returns the underlying decimal (always scale 2).
    #[inline]
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }
}

// =============================================================================
// Rounding Helpers
// =============================================================================

/// Rounds an arbitrary-precision decimal to two fractional digits, half-up.
///
/// The result always has scale 2 (`5` becomes `5.00`) and the function is
/// idempotent: `normalize(normalize(d).amount()) == normalize(d)`.
///
/// ## Example
/// ```rust
/// use rust_decimal::Decimal;
/// use vend_core::money::normalize;
///
/// assert_eq!(normalize(Decimal::new(125, 3)).to_string(), "0.13");
/// assert_eq!(normalize(Decimal::new(124, 3)).to_string(), "0.12");
/// assert_eq!(normalize(Decimal::new(5, 0)).to_string(), "5.00");
/// ```
pub fn normalize(amount: Decimal) -> Money {
    let mut rounded = amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);

    // -0.001 rounds to a negatively signed zero; keep a single zero
    if rounded.is_zero() {
        rounded = Decimal::ZERO;
    }
    rounded.rescale(MONEY_SCALE);

    Money(rounded)
}

/// Rounds like [`normalize`] after checking the amount lies within
/// `±MAX_AMOUNT_UNITS`.
///
/// ## Example
/// ```rust
/// use rust_decimal::Decimal;
/// use vend_core::money::bounded;
///
/// assert_eq!(bounded(Decimal::new(1005, 3)).unwrap().to_string(), "1.01");
/// assert!(bounded(Decimal::MAX).is_err());
/// ```
pub fn bounded(amount: Decimal) -> Result<Money, ValidationError> {
    if amount.abs() > Decimal::from(MAX_AMOUNT_UNITS) {
        return Err(out_of_range());
    }
    Ok(normalize(amount))
}

/// Adds two or more amounts and rounds the total once.
///
/// Rounding happens after summing, never per term, so tiny fractions are
/// not lost one by one. A total beyond `MAX_AMOUNT_UNITS` is an error.
pub fn add(
    first: impl Into<Decimal>,
    second: impl Into<Decimal>,
    rest: &[Decimal],
) -> Result<Money, ValidationError> {
    let total = rest
        .iter()
        .try_fold(first.into(), |acc, amount| acc.checked_add(*amount))
        .and_then(|acc| acc.checked_add(second.into()))
        .ok_or_else(out_of_range)?;

    bounded(total)
}

/// Subtracts one or more amounts from the first and rounds the result once.
///
/// Negative results are allowed here; callers enforce non-negativity.
pub fn subtract(
    first: impl Into<Decimal>,
    second: impl Into<Decimal>,
    rest: &[Decimal],
) -> Result<Money, ValidationError> {
    let remaining = rest
        .iter()
        .try_fold(first.into(), |acc, amount| acc.checked_sub(*amount))
        .and_then(|acc| acc.checked_sub(second.into()))
        .ok_or_else(out_of_range)?;

    bounded(remaining)
}

fn out_of_range() -> ValidationError {
    ValidationError::OutOfRange {
        field: "amount".to_string(),
        min: -MAX_AMOUNT_UNITS,
        max: MAX_AMOUNT_UNITS,
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows the plain amount, `"8.25"`. No currency symbol.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl FromStr for Money {
    type Err = ValidationError;

    /// Parses a decimal string (`"10"`, `"1.755"`) and normalizes it.
    /// Amounts beyond `MAX_AMOUNT_UNITS` are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Required {
                field: "amount".to_string(),
            });
        }

        let amount = Decimal::from_str(trimmed).map_err(|e| ValidationError::InvalidFormat {
            field: "amount".to_string(),
            reason: format!("'{}' is not a decimal number ({})", trimmed, e),
        })?;

        bounded(amount)
    }
}

impl TryFrom<String> for Money {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Money> for String {
    fn from(money: Money) -> Self {
        money.to_string()
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.0
    }
}

/// Addition of two Money values (stays at 2 fractional digits).
///
/// Unbounded; use [`add`] where the total comes from user input.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        normalize(self.0 + other.0)
    }
}

/// Subtraction of two Money values (stays at 2 fractional digits).
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        normalize(self.0 - other.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        normalize(iter.map(Decimal::from).sum())
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
