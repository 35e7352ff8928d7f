use std::fmt;
use std::iter;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseSquareError;

/// Number of columns (`A`-`C`).
pub const BOARD_WIDTH: u8 = 3;

/// Number of rows (`1`-`4`).
pub const BOARD_HEIGHT: u8 = 4;

/// Number of cells on the board.
pub const NUM_SQUARES: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

const ASCII_UPPER_A: u8 = b'A';
const ASCII_1: u8 = b'1';

/// Represents a cell of the 3×4 game board.
///
/// Columns are labeled `A`-`C` and rows `1`-`4` in move notation. Internally
/// both are stored 0-based, so row index 0 is notation row `1` (the second
/// player's home row).
///
/// # Examples
///
/// ```
/// use fishwar::Square;
///
/// let sq = Square::new(1, 2).unwrap();
/// assert_eq!("B3", sq.to_string());
///
/// let sq = Square::from_notation("C1").unwrap();
/// assert_eq!(2, sq.col());
/// assert_eq!(0, sq.row());
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub struct Square {
    inner: u8,
}

impl Square {
    /// Creates a new instance of `Square`.
    ///
    /// `col` can take a value from 0 to 2, while `row` is from 0 to 3.
    pub fn new(col: u8, row: u8) -> Option<Self> {
        if col >= BOARD_WIDTH || row >= BOARD_HEIGHT {
            return None;
        }

        Some(Square {
            inner: row * BOARD_WIDTH + col,
        })
    }

    /// Creates a new instance of `Square` from a notation string like `"B3"`.
    pub fn from_notation(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }

        let (col_char, row_char) = (bytes[0], bytes[1]);
        if col_char < ASCII_UPPER_A || col_char >= ASCII_UPPER_A + BOARD_WIDTH {
            return None;
        }
        if row_char < ASCII_1 || row_char >= ASCII_1 + BOARD_HEIGHT {
            return None;
        }

        Square::new(col_char - ASCII_UPPER_A, row_char - ASCII_1)
    }

    /// Creates a new instance of `Square` with the given index value.
    pub fn from_index(index: u8) -> Option<Self> {
        if index as usize >= NUM_SQUARES {
            return None;
        }

        Some(Square { inner: index })
    }

    /// Returns an iterator of all squares, row by row from `A1` to `C4`.
    pub fn iter() -> SquareIter {
        SquareIter { current: 0 }
    }

    /// Returns the column of the square (0-indexed, `A` = 0).
    pub fn col(self) -> u8 {
        self.inner % BOARD_WIDTH
    }

    /// Returns the row of the square (0-indexed, notation row `1` = 0).
    pub fn row(self) -> u8 {
        self.inner / BOARD_WIDTH
    }

    /// Returns a new `Square` by moving the row and the column values.
    ///
    /// Returns `None` when the result falls outside the board.
    ///
    /// # Examples
    ///
    /// ```
    /// use fishwar::square::consts::*;
    ///
    /// assert_eq!(Some(SQ_B2), SQ_B3.shift(-1, 0));
    /// assert_eq!(None, SQ_A1.shift(0, -1));
    /// ```
    #[must_use]
    pub fn shift(self, dr: i8, dc: i8) -> Option<Self> {
        let r = self.row() as i8 + dr;
        let c = self.col() as i8 + dc;

        if !(0..BOARD_HEIGHT as i8).contains(&r) || !(0..BOARD_WIDTH as i8).contains(&c) {
            return None;
        }

        Square::new(c as u8, r as u8)
    }

    /// Converts the instance into the unique number for array indexing purpose.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.inner as usize
    }

    /// Returns the column letter used in move notation.
    pub fn col_char(self) -> char {
        (self.col() + ASCII_UPPER_A) as char
    }

    /// Returns the row digit used in move notation.
    pub fn row_char(self) -> char {
        (self.row() + ASCII_1) as char
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}{}", self.col_char(), self.row_char())
    }
}

impl FromStr for Square {
    type Err = ParseSquareError;

    /// Parses a square from move notation (e.g., "A1", "C4").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_notation(s).ok_or_else(|| ParseSquareError(s.to_string()))
    }
}

/// Square constants for every cell of the board.
pub mod consts {
    use super::Square;

    macro_rules! make_square {
        {$n:expr, $t:ident $($ts:ident)+} => {
            pub const $t: Square = Square { inner: $n };
            make_square!{($n + 1), $($ts)*}
        };
        {$n:expr, $t:ident} => {
            pub const $t: Square = Square { inner: $n };
        };
    }

    make_square! {0, SQ_A1 SQ_B1 SQ_C1
    SQ_A2 SQ_B2 SQ_C2
    SQ_A3 SQ_B3 SQ_C3
    SQ_A4 SQ_B4 SQ_C4}
}

/// This struct is created by the [`Square::iter`] method.
pub struct SquareIter {
    current: u8,
}

impl iter::Iterator for SquareIter {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        let cur = Square::from_index(self.current)?;
        self.current += 1;
        Some(cur)
    }
}
