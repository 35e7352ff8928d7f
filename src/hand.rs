use serde::{Deserialize, Serialize};

use crate::piece_type::PieceType;
use crate::player::Player;

/// Manages the pieces captured by each player.
///
/// Each side keeps its captured kinds in the order they were taken. Two hands
/// compare equal only if both sides hold the same kinds in the same order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hand {
    inner: [Vec<PieceType>; 2],
}

impl Hand {
    /// Returns the pieces held by the player, in capture order.
    pub fn pieces(&self, p: Player) -> &[PieceType] {
        &self.inner[p.index()]
    }

    /// Returns true if the player holds at least one piece of the given kind.
    pub fn contains(&self, p: Player, pt: PieceType) -> bool {
        self.inner[p.index()].contains(&pt)
    }

    /// Appends a piece to the player's hand.
    pub fn push(&mut self, p: Player, pt: PieceType) {
        self.inner[p.index()].push(pt);
    }

    /// Removes the first piece of the given kind from the player's hand.
    ///
    /// Returns false if the player holds no such piece.
    pub fn remove(&mut self, p: Player, pt: PieceType) -> bool {
        let pieces = &mut self.inner[p.index()];
        match pieces.iter().position(|&x| x == pt) {
            Some(i) => {
                pieces.remove(i);
                true
            }
            None => false,
        }
    }

    /// Returns true if neither player holds any piece.
    pub fn is_empty(&self) -> bool {
        self.inner.iter().all(Vec::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_keeps_insertion_order() {
        let mut h = Hand::default();
        h.push(Player::First, PieceType::Tako);
        h.push(Player::First, PieceType::Inada);
        h.push(Player::Second, PieceType::Karei);

        assert_eq!(&[PieceType::Tako, PieceType::Inada], h.pieces(Player::First));
        assert_eq!(&[PieceType::Karei], h.pieces(Player::Second));
    }

    #[test]
    fn remove_takes_first_match() {
        let mut h = Hand::default();
        h.push(Player::First, PieceType::Inada);
        h.push(Player::First, PieceType::Tako);
        h.push(Player::First, PieceType::Inada);

        assert!(h.remove(Player::First, PieceType::Inada));
        assert_eq!(&[PieceType::Tako, PieceType::Inada], h.pieces(Player::First));

        assert!(!h.remove(Player::First, PieceType::Karei));
        assert!(!h.remove(Player::Second, PieceType::Inada));
    }

    #[test]
    fn equality_is_order_sensitive() {
        let mut a = Hand::default();
        a.push(Player::First, PieceType::Inada);
        a.push(Player::First, PieceType::Tako);

        let mut b = Hand::default();
        b.push(Player::First, PieceType::Tako);
        b.push(Player::First, PieceType::Inada);

        assert_ne!(a, b);
    }

    #[test]
    fn contains_per_player() {
        let mut h = Hand::default();
        assert!(h.is_empty());

        h.push(Player::Second, PieceType::Karei);
        assert!(!h.is_empty());
        assert!(h.contains(Player::Second, PieceType::Karei));
        assert!(!h.contains(Player::First, PieceType::Karei));
    }
}
