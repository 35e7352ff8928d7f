use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseMoveError;
use crate::piece_type::PieceType;
use crate::player::Player;
use crate::square::Square;

/// Glyph marking a placement from hand in place of a destination cell.
pub const PLACE_GLYPH: char = '★';

/// Represents a move which either is a normal move or a placement from hand.
///
/// A move names the acting player and the kind of piece it moves, so the
/// notation can be checked against the board before it is applied.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum Move {
    Normal {
        piece_type: PieceType,
        from: Square,
        to: Square,
        player: Player,
    },
    Place {
        piece_type: PieceType,
        to: Square,
        player: Player,
    },
}

impl Move {
    /// Creates a new instance of `Move` from move notation.
    ///
    /// The grammar is `<piece><direction><cell>(<cell>|★)`: `い↑B3B2` moves
    /// the first player's いなだ from B3 to B2 and `い↓A3★` places a いなだ
    /// from the second player's hand on A3. Anything else yields `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fishwar::{Move, PieceType, Player};
    /// use fishwar::square::consts::*;
    ///
    /// let m = Move::from_notation("い↑B3B2").unwrap();
    /// assert_eq!(
    ///     Move::Normal { piece_type: PieceType::Inada, from: SQ_B3, to: SQ_B2, player: Player::First },
    ///     m
    /// );
    ///
    /// assert!(Move::from_notation("XB3B2").is_none());
    /// assert!(Move::from_notation("い↑B3").is_none());
    /// ```
    pub fn from_notation(s: &str) -> Option<Self> {
        let mut chars = s.chars();

        let piece_type = PieceType::from_glyph(chars.next()?)?;
        let player = Player::from_glyph(chars.next()?)?;

        let rest = chars.as_str();
        let first = Square::from_notation(rest.get(0..2)?)?;
        let tail = rest.get(2..)?;

        let mut tail_chars = tail.chars();
        if tail_chars.next()? == PLACE_GLYPH && tail_chars.next().is_none() {
            return Some(Move::Place {
                piece_type,
                to: first,
                player,
            });
        }

        let to = Square::from_notation(tail)?;
        Some(Move::Normal {
            piece_type,
            from: first,
            to,
            player,
        })
    }

    /// Returns the destination square of this move.
    pub fn to(&self) -> Square {
        match *self {
            Move::Normal { to, .. } => to,
            Move::Place { to, .. } => to,
        }
    }

    /// Returns the origin square of a normal move.
    pub fn from(&self) -> Option<Square> {
        match *self {
            Move::Normal { from, .. } => Some(from),
            Move::Place { .. } => None,
        }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        match *self {
            Move::Normal { player, .. } => player,
            Move::Place { player, .. } => player,
        }
    }

    /// Returns the declared piece type.
    pub fn piece_type(&self) -> PieceType {
        match *self {
            Move::Normal { piece_type, .. } => piece_type,
            Move::Place { piece_type, .. } => piece_type,
        }
    }

    /// Returns true if this is a placement from hand.
    pub fn is_place(&self) -> bool {
        matches!(self, Move::Place { .. })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match *self {
            Move::Normal {
                piece_type,
                from,
                to,
                player,
            } => write!(f, "{}{}{}{}", piece_type.glyph(), player.glyph(), from, to),
            Move::Place {
                piece_type,
                to,
                player,
            } => write!(
                f,
                "{}{}{}{}",
                piece_type.glyph(),
                player.glyph(),
                to,
                PLACE_GLYPH
            ),
        }
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    /// Parses a move from move notation.
    ///
    /// # Examples
    ///
    /// ```
    /// use fishwar::Move;
    ///
    /// let m: Move = "か↓A1A2".parse().unwrap();
    /// assert_eq!("か↓A1A2", m.to_string());
    /// assert!("か↓A1".parse::<Move>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_notation(s).ok_or_else(|| ParseMoveError(s.to_string()))
    }
}
