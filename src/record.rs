//! Move recording and notation formatting.
//!
//! Each accepted move is kept as a [`MoveRecord`] carrying what the bare
//! [`Move`] does not: the captured piece and whether the mover promoted.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::moves::Move;
use crate::piece::Piece;
use crate::piece_type::PieceType;
use crate::player::Player;
use crate::square::Square;

/// MoveRecord stores what an accepted move did to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveRecord {
    Normal {
        from: Square,
        to: Square,
        /// The piece as it stands on `to` after the move.
        placed: Piece,
        captured: Option<Piece>,
        promoted: bool,
    },
    Place {
        to: Square,
        piece: Piece,
    },
}

impl MoveRecord {
    /// Returns the player who made the move.
    pub fn player(&self) -> Player {
        match *self {
            MoveRecord::Normal { placed, .. } => placed.player,
            MoveRecord::Place { piece, .. } => piece.player,
        }
    }

    /// Returns the captured piece, if any.
    pub fn captured(&self) -> Option<Piece> {
        match *self {
            MoveRecord::Normal { captured, .. } => captured,
            MoveRecord::Place { .. } => None,
        }
    }

    /// Returns the move as it was submitted.
    ///
    /// A promoted piece is reported under its kind before promotion.
    pub fn to_move(&self) -> Move {
        match *self {
            MoveRecord::Normal {
                from,
                to,
                placed,
                promoted,
                ..
            } => Move::Normal {
                piece_type: Self::moved_type(placed, promoted),
                from,
                to,
                player: placed.player,
            },
            MoveRecord::Place { to, piece } => Move::Place {
                piece_type: piece.piece_type,
                to,
                player: piece.player,
            },
        }
    }

    /// Converts the move into move notation, e.g. `い↑B2B1`.
    pub fn to_notation(&self) -> String {
        self.to_move().to_string()
    }

    /// Formats the move in Japanese notation.
    ///
    /// Format: ☗B1いなだ(B2)成 for a normal move, ☖A3いなだ打 for a placement.
    ///
    /// # Examples
    ///
    /// ```
    /// use fishwar::Position;
    ///
    /// let mut pos = Position::new();
    /// pos.play("い↑B3B2").unwrap();
    ///
    /// let record = &pos.move_history()[0];
    /// assert_eq!("☗B2いなだ(B3)取", record.to_japanese());
    /// ```
    pub fn to_japanese(&self) -> String {
        let symbol = match self.player() {
            Player::First => "☗",
            Player::Second => "☖",
        };

        match *self {
            MoveRecord::Normal {
                from,
                to,
                placed,
                captured,
                promoted,
            } => {
                let name = Self::moved_type(placed, promoted).name();
                format!(
                    "{}{}{}({}){}{}",
                    symbol,
                    to,
                    name,
                    from,
                    if captured.is_some() { "取" } else { "" },
                    if promoted { "成" } else { "" }
                )
            }
            MoveRecord::Place { to, piece } => {
                format!("{}{}{}打", symbol, to, piece.piece_type.name())
            }
        }
    }

    fn moved_type(placed: Piece, promoted: bool) -> PieceType {
        if promoted {
            placed.piece_type.unpromote().unwrap_or(placed.piece_type)
        } else {
            placed.piece_type
        }
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_notation())
    }
}

impl PartialEq<Move> for MoveRecord {
    fn eq(&self, other: &Move) -> bool {
        self.to_move() == *other
    }
}
