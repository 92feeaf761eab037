//! Board coordinates
//!
//! Two coordinate forms exist side by side:
//!
//! - [`Position`] is the internal zero-based (row, column) pair used by the
//!   board grid and the move generator. Row 0 is the top of the board from
//!   White's point of view (rank 8).
//! - [`ChessPosition`] is the algebraic form shown to players: a column
//!   letter `'a'..='h'` and a row number `1..=8`. Conversion inverts the
//!   row (`row = 8 - number`) so that rank 1 maps to internal row 7.

use crate::error::MatchError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Internal zero-based board coordinate
///
/// Signed fields keep offset arithmetic simple; a `Position` may briefly
/// step off the board during ray sweeps, which is what [`in_bounds`]
/// exists for.
///
/// [`in_bounds`]: Position::in_bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

impl Position {
    pub fn new(row: i8, col: i8) -> Self {
        Position { row, col }
    }

    /// True if the coordinate lies inside the 8x8 grid
    pub fn in_bounds(self) -> bool {
        (0..8).contains(&self.row) && (0..8).contains(&self.col)
    }

    /// Coordinate shifted by (row delta, column delta)
    pub(crate) fn offset(self, dr: i8, dc: i8) -> Position {
        Position::new(self.row + dr, self.col + dc)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Algebraic board coordinate ("e4" style)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChessPosition {
    /// Column letter, 'a' through 'h'
    pub column: char,
    /// Row number, 1 through 8
    pub row: u8,
}

impl ChessPosition {
    /// Create an algebraic position, rejecting anything outside a1..h8
    pub fn new(column: char, row: u8) -> Result<Self, MatchError> {
        if !('a'..='h').contains(&column) || !(1..=8).contains(&row) {
            return Err(MatchError::InvalidPosition);
        }
        Ok(ChessPosition { column, row })
    }

    /// Convert to the internal zero-based coordinate
    ///
    /// Rank 8 is internal row 0, so `row = 8 - number`.
    pub fn to_position(self) -> Position {
        Position::new(8 - self.row as i8, self.column as i8 - b'a' as i8)
    }

    /// Convert an internal coordinate back to algebraic form
    ///
    /// The coordinate must be in bounds; internal positions handed out by
    /// the engine always are.
    pub fn from_position(position: Position) -> Self {
        debug_assert!(position.in_bounds());
        ChessPosition {
            column: (b'a' + position.col as u8) as char,
            row: 8 - position.row as u8,
        }
    }
}

impl fmt::Display for ChessPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column, self.row)
    }
}

impl FromStr for ChessPosition {
    type Err = MatchError;

    /// Parse a two-character coordinate such as `"e4"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let column = chars.next().ok_or(MatchError::InvalidPosition)?;
        let row = chars
            .next()
            .and_then(|c| c.to_digit(10))
            .ok_or(MatchError::InvalidPosition)?;
        if chars.next().is_some() {
            return Err(MatchError::InvalidPosition);
        }
        ChessPosition::new(column, row as u8)
    }
}
