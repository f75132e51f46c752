//! # Slot Positions
//!
//! Maps between `(column, row)` coordinates and the labels printed on the
//! machine's buttons.
//!
//! ```text
//!            column 1   column 2   column 3
//!           ┌─────────┬──────────┬──────────┐
//!   row 1   │   A1    │    B1    │    C1    │
//!   row 2   │   A2    │    B2    │    C2    │
//!   ...     │   ...   │    ...   │    ...   │
//!           └─────────┴──────────┴──────────┘
//! ```
//!
//! Columns are letters `A..=Z` (1..=26). Rows start at 1 and have no upper
//! bound here; the machine decides which slots exist.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::MAX_COLUMNS;

/// A slot address such as `A1` or `C12`.
///
/// Ordering is by column letter first, then numerically by row, so `A2`
/// sorts before `A10` and `A10` before `B1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Position {
    // Field order drives the derived `Ord`.
    column: u32,
    row: u32,
}

impl Position {
    /// Builds a position from 1-based coordinates.
    ///
    /// ## Example
    /// ```rust
    /// use vend_core::Position;
    ///
    /// let position = Position::new(3, 12).unwrap();
    /// assert_eq!(position.to_string(), "C12");
    /// assert!(Position::new(27, 1).is_err());
    /// ```
    pub fn new(column: u32, row: u32) -> Result<Self, ValidationError> {
        column_letter(column)?;

        if row == 0 {
            return Err(ValidationError::OutOfRange {
                field: "row".to_string(),
                min: 1,
                max: i64::from(u32::MAX),
            });
        }

        Ok(Position { column, row })
    }

    /// Builds a position from coordinates the caller already range checked
    /// (a validated `MachineLayout`).
    pub(crate) fn at(column: u32, row: u32) -> Self {
        debug_assert!((1..=MAX_COLUMNS).contains(&column) && row >= 1);
        Position { column, row }
    }

    /// 1-based column number (`A` = 1).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// 1-based row number.
    #[inline]
    pub fn row(&self) -> u32 {
        self.row
    }

    /// Column letter, `A..=Z`.
    pub fn letter(&self) -> char {
        // `column` was range checked on construction
        char::from(b'A' + (self.column - 1) as u8)
    }

    /// Returns `(column, row)`.
    #[inline]
    pub fn coordinates(&self) -> (u32, u32) {
        (self.column, self.row)
    }
}

// =============================================================================
// Codec Functions
// =============================================================================

/// Converts `(column, row)` to a slot position. Fails for columns outside
/// `1..=26` and for row 0.
pub fn to_position(column: u32, row: u32) -> Result<Position, ValidationError> {
    Position::new(column, row)
}

/// Converts a slot label back to `(column, row)`.
///
/// ## Example
/// ```rust
/// use vend_core::position::from_position;
///
/// assert_eq!(from_position("B3").unwrap(), (2, 3));
/// assert!(from_position("?3").is_err());
/// ```
pub fn from_position(label: &str) -> Result<(u32, u32), ValidationError> {
    label.parse::<Position>().map(|position| position.coordinates())
}

/// Letter for a 1-based column number.
pub fn column_letter(column: u32) -> Result<char, ValidationError> {
    if column == 0 || column > MAX_COLUMNS {
        return Err(ValidationError::InvalidColumn {
            column: column.to_string(),
        });
    }

    Ok(char::from(b'A' + (column - 1) as u8))
}

/// 1-based column number for a letter `A..=Z`.
pub fn column_index(letter: char) -> Result<u32, ValidationError> {
    if !letter.is_ascii_uppercase() {
        return Err(ValidationError::InvalidColumn {
            column: letter.to_string(),
        });
    }

    Ok(u32::from(letter as u8 - b'A') + 1)
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter(), self.row)
    }
}

impl FromStr for Position {
    type Err = ValidationError;

    /// Parses labels like `"A1"`. The letter must be uppercase `A..=Z` and
    /// the row a positive integer.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        let mut chars = label.chars();

        let letter = chars.next().ok_or_else(|| ValidationError::Required {
            field: "position".to_string(),
        })?;
        let column = column_index(letter)?;

        let digits = chars.as_str();
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::InvalidFormat {
                field: "position".to_string(),
                reason: format!("'{}' should be a column letter followed by a row number", label),
            });
        }

        let row = digits
            .parse::<u32>()
            .map_err(|_| ValidationError::OutOfRange {
                field: "row".to_string(),
                min: 1,
                max: i64::from(u32::MAX),
            })?;

        Position::new(column, row)
    }
}

impl TryFrom<String> for Position {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Position> for String {
    fn from(position: Position) -> Self {
        position.to_string()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
