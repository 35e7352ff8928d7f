//! Move legality checks.

use crate::error::MoveError;
use crate::movement;
use crate::moves::Move;
use crate::piece_type::PieceType;
use crate::position::Position;
use crate::square::{Square, NUM_SQUARES};

impl Position {
    /// Checks the move against the current position.
    ///
    /// Returns the first rule the move breaks, or `None` if it is legal.
    /// Whether the game has already ended is not considered here.
    ///
    /// # Examples
    ///
    /// ```
    /// use fishwar::{Move, MoveError, Position};
    ///
    /// let pos = Position::new();
    ///
    /// let m = Move::from_notation("い↑B3B2").unwrap();
    /// assert_eq!(None, pos.validate(&m));
    ///
    /// let m = Move::from_notation("い↓B2B3").unwrap();
    /// assert_eq!(Some(MoveError::WrongTurn), pos.validate(&m));
    /// ```
    pub fn validate(&self, m: &Move) -> Option<MoveError> {
        if m.player() != self.side_to_move {
            return Some(MoveError::WrongTurn);
        }

        match *m {
            Move::Normal {
                piece_type,
                from,
                to,
                player,
            } => {
                let moved = match self.piece_at(from) {
                    Some(pc) => pc,
                    None => return Some(MoveError::NoPieceAtOrigin),
                };

                if !moved.is_owned_by(player) {
                    return Some(MoveError::OpponentPiece);
                }
                if moved.piece_type != piece_type {
                    return Some(MoveError::PieceMismatch);
                }
                if !movement::can_reach(piece_type, from, to, player) {
                    return Some(MoveError::IllegalDestination);
                }
                if self.piece_at(to).map_or(false, |pc| pc.is_owned_by(player)) {
                    return Some(MoveError::OwnPieceAtDestination);
                }
            }
            Move::Place {
                piece_type,
                to,
                player,
            } => {
                if !self.hand.contains(player, piece_type) {
                    return Some(MoveError::PieceNotInHand);
                }
                if self.piece_at(to).is_some() {
                    return Some(MoveError::OccupiedCell);
                }
            }
        }

        if m.to().index() >= NUM_SQUARES {
            return Some(MoveError::OutOfBounds);
        }

        None
    }

    /// Returns true if the move is legal in the current position.
    pub fn is_legal_move(&self, m: &Move) -> bool {
        self.result.is_none() && self.validate(m).is_none()
    }

    /// Returns every legal move of the side to move.
    ///
    /// Normal moves come first, ordered by origin square, then placements.
    /// The list is empty once the game has ended.
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.result.is_some() {
            return Vec::new();
        }

        let player = self.side_to_move;
        let mut moves = Vec::new();

        for (from, cell) in self.board.iter() {
            let pc = match cell {
                Some(pc) if pc.is_owned_by(player) => pc,
                _ => continue,
            };

            for to in movement::destinations(pc.piece_type, from, player) {
                let m = Move::Normal {
                    piece_type: pc.piece_type,
                    from,
                    to,
                    player,
                };
                if self.validate(&m).is_none() {
                    moves.push(m);
                }
            }
        }

        for piece_type in PieceType::iter().filter(|&pt| self.hand.contains(player, pt)) {
            for to in Square::iter() {
                let m = Move::Place {
                    piece_type,
                    to,
                    player,
                };
                if self.validate(&m).is_none() {
                    moves.push(m);
                }
            }
        }

        moves
    }
}
