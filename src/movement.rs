//! Movement rule table.
//!
//! Every piece steps exactly one cell. Offsets are `(row, col)` deltas written
//! from the first player's point of view, where forward means a decreasing row
//! index. The second player uses the same table mirrored through the origin.

use crate::piece_type::PieceType;
use crate::player::Player;
use crate::square::Square;

#[rustfmt::skip]
const MAGURO: [(i8, i8); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

const INADA: [(i8, i8); 1] = [(-1, 0)];

#[rustfmt::skip]
const BURI: [(i8, i8); 6] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
              (1, 0),
];

const TAKO: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

const KAREI: [(i8, i8); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

/// Returns the step offsets of the piece type in the first player's frame.
pub fn offsets(pt: PieceType) -> &'static [(i8, i8)] {
    match pt {
        PieceType::Maguro => &MAGURO,
        PieceType::Inada => &INADA,
        PieceType::Buri => &BURI,
        PieceType::Tako => &TAKO,
        PieceType::Karei => &KAREI,
    }
}

/// Returns the step offsets of the piece type as seen by the given player.
pub fn relative_offsets(pt: PieceType, player: Player) -> impl Iterator<Item = (i8, i8)> {
    let sign = match player {
        Player::First => 1,
        Player::Second => -1,
    };
    offsets(pt).iter().map(move |&(dr, dc)| (dr * sign, dc * sign))
}

/// Returns every on-board cell the piece could step to from `from`.
///
/// Occupancy is not considered.
///
/// # Examples
///
/// ```
/// use fishwar::{movement, Player, PieceType};
/// use fishwar::square::consts::*;
///
/// let dests = movement::destinations(PieceType::Inada, SQ_B3, Player::First);
/// assert_eq!(vec![SQ_B2], dests);
///
/// let dests = movement::destinations(PieceType::Inada, SQ_B2, Player::Second);
/// assert_eq!(vec![SQ_B3], dests);
/// ```
pub fn destinations(pt: PieceType, from: Square, player: Player) -> Vec<Square> {
    relative_offsets(pt, player)
        .filter_map(|(dr, dc)| from.shift(dr, dc))
        .collect()
}

/// Returns true if the piece can step from `from` to `to`, ignoring occupancy.
pub fn can_reach(pt: PieceType, from: Square, to: Square, player: Player) -> bool {
    relative_offsets(pt, player).any(|(dr, dc)| from.shift(dr, dc) == Some(to))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::square::consts::*;

    fn sorted(mut v: Vec<Square>) -> Vec<Square> {
        v.sort_by_key(|sq| sq.index());
        v
    }

    #[test]
    fn maguro_in_the_middle_reaches_all_neighbours() {
        let dests = destinations(PieceType::Maguro, SQ_B2, Player::First);
        assert_eq!(
            vec![SQ_A1, SQ_B1, SQ_C1, SQ_A2, SQ_C2, SQ_A3, SQ_B3, SQ_C3],
            sorted(dests)
        );
    }

    #[test]
    fn corner_discards_off_board_cells() {
        let dests = destinations(PieceType::Maguro, SQ_A1, Player::Second);
        assert_eq!(vec![SQ_B1, SQ_A2, SQ_B2], sorted(dests));
    }

    #[test]
    fn inada_only_moves_forward() {
        assert_eq!(vec![SQ_B2], destinations(PieceType::Inada, SQ_B3, Player::First));
        assert_eq!(vec![SQ_B3], destinations(PieceType::Inada, SQ_B2, Player::Second));
        assert!(destinations(PieceType::Inada, SQ_B1, Player::First).is_empty());
        assert!(destinations(PieceType::Inada, SQ_B4, Player::Second).is_empty());
    }

    #[test]
    fn buri_has_no_backward_diagonals() {
        let dests = destinations(PieceType::Buri, SQ_B2, Player::First);
        assert_eq!(6, dests.len());
        assert!(!dests.contains(&SQ_A3));
        assert!(!dests.contains(&SQ_C3));
        assert!(dests.contains(&SQ_B3));

        let dests = destinations(PieceType::Buri, SQ_B3, Player::Second);
        assert_eq!(
            vec![SQ_B2, SQ_A3, SQ_C3, SQ_A4, SQ_B4, SQ_C4],
            sorted(dests)
        );
    }

    #[test]
    fn tako_moves_diagonally() {
        let dests = destinations(PieceType::Tako, SQ_B2, Player::First);
        assert_eq!(vec![SQ_A1, SQ_C1, SQ_A3, SQ_C3], sorted(dests));
    }

    #[test]
    fn karei_moves_orthogonally() {
        let dests = destinations(PieceType::Karei, SQ_B2, Player::Second);
        assert_eq!(vec![SQ_B1, SQ_A2, SQ_C2, SQ_B3], sorted(dests));
    }

    #[test]
    fn second_player_offsets_are_point_reflection() {
        for pt in PieceType::iter() {
            let first: Vec<_> = relative_offsets(pt, Player::First).collect();
            let second: Vec<_> = relative_offsets(pt, Player::Second).collect();
            for (a, b) in first.iter().zip(second.iter()) {
                assert_eq!((-a.0, -a.1), *b);
            }
        }
    }

    #[test]
    fn can_reach_matches_destinations() {
        for pt in PieceType::iter() {
            for p in Player::iter() {
                for from in Square::iter() {
                    let dests = destinations(pt, from, p);
                    for to in Square::iter() {
                        assert_eq!(dests.contains(&to), can_reach(pt, from, to, p));
                    }
                }
            }
        }
    }
}
