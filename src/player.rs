//! Player type representing each side.

use std::fmt;
use std::iter;

use serde::{Deserialize, Serialize};

use crate::square::BOARD_HEIGHT;

/// Represents each side of player. First player moves first.
///
/// The first player's pieces start at the bottom of the board (row 4) and move
/// towards row 1; the second player's pieces move the opposite way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    First,
    Second,
}

impl Player {
    /// Returns the opponent of this player.
    #[must_use]
    pub fn flip(self) -> Player {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    /// Returns the unique number for array indexing purpose.
    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns an iterator over both players, first player first.
    pub fn iter() -> PlayerIter {
        PlayerIter { current: Some(Player::First) }
    }

    /// Returns the 0-based row index of this player's home row.
    ///
    /// Row index 0 corresponds to row `1` in move notation.
    pub fn home_row(self) -> u8 {
        match self {
            Player::First => BOARD_HEIGHT - 1,
            Player::Second => 0,
        }
    }

    /// Returns the 0-based row index of the opponent's home row.
    pub fn enemy_row(self) -> u8 {
        self.flip().home_row()
    }

    /// Returns the direction glyph used in move notation.
    pub fn glyph(self) -> char {
        match self {
            Player::First => '↑',
            Player::Second => '↓',
        }
    }

    /// Creates a player from its direction glyph.
    pub fn from_glyph(c: char) -> Option<Player> {
        match c {
            '↑' => Some(Player::First),
            '↓' => Some(Player::Second),
            _ => None,
        }
    }

    /// Returns the Japanese name of the side (先手 / 後手).
    pub fn to_japanese(self) -> &'static str {
        match self {
            Player::First => "先手",
            Player::Second => "後手",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Player::First => write!(f, "first"),
            Player::Second => write!(f, "second"),
        }
    }
}

/// This struct is created by the [`Player::iter`] method.
pub struct PlayerIter {
    current: Option<Player>,
}

impl iter::Iterator for PlayerIter {
    type Item = Player;

    fn next(&mut self) -> Option<Self::Item> {
        let cur = self.current?;
        self.current = match cur {
            Player::First => Some(Player::Second),
            Player::Second => None,
        };
        Some(cur)
    }
}
