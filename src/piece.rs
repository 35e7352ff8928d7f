use std::fmt;

use serde::{Deserialize, Serialize};

use crate::piece_type::PieceType;
use crate::player::Player;

/// Represents a piece on the game board: a kind owned by a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub piece_type: PieceType,
    pub player: Player,
}

impl Piece {
    /// Creates a new piece.
    pub fn new(piece_type: PieceType, player: Player) -> Piece {
        Piece { piece_type, player }
    }

    /// Creates a piece from its setup-notation letter.
    ///
    /// Uppercase letters are first-player pieces, lowercase letters are
    /// second-player pieces.
    pub fn from_setup_char(c: char) -> Option<Piece> {
        let piece_type = PieceType::from_setup_char(c)?;
        let player = if c.is_ascii_uppercase() {
            Player::First
        } else {
            Player::Second
        };

        Some(Piece { piece_type, player })
    }

    /// Returns the setup-notation letter of this piece.
    pub fn setup_char(self) -> char {
        let c = self.piece_type.setup_char();
        match self.player {
            Player::First => c,
            Player::Second => c.to_ascii_lowercase(),
        }
    }

    /// Returns the promoted version of this piece, if it can promote.
    pub fn promote(self) -> Option<Piece> {
        self.piece_type.promote().map(|pt| Piece {
            piece_type: pt,
            player: self.player,
        })
    }

    /// Returns true if this piece belongs to the given player.
    pub fn is_owned_by(self, player: Player) -> bool {
        self.player == player
    }
}

impl fmt::Display for Piece {
    /// Formats the piece as its glyph followed by the owner's direction glyph,
    /// e.g. `ま↑`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.piece_type.glyph(), self.player.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setup_char_roundtrip() {
        for pt in PieceType::iter() {
            for p in Player::iter() {
                let pc = Piece::new(pt, p);
                assert_eq!(Some(pc), Piece::from_setup_char(pc.setup_char()));
            }
        }
        assert_eq!(None, Piece::from_setup_char('1'));
    }

    #[test]
    fn setup_char_case_encodes_player() {
        assert_eq!('M', Piece::new(PieceType::Maguro, Player::First).setup_char());
        assert_eq!('m', Piece::new(PieceType::Maguro, Player::Second).setup_char());
    }

    #[test]
    fn promote_keeps_owner() {
        let inada = Piece::new(PieceType::Inada, Player::Second);
        assert_eq!(
            Some(Piece::new(PieceType::Buri, Player::Second)),
            inada.promote()
        );
        assert_eq!(None, Piece::new(PieceType::Tako, Player::First).promote());
    }

    #[test]
    fn display() {
        assert_eq!("ま↑", Piece::new(PieceType::Maguro, Player::First).to_string());
        assert_eq!("か↓", Piece::new(PieceType::Karei, Player::Second).to_string());
    }
}
