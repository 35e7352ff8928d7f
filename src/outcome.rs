//! Game results and end-of-game detection.
//!
//! Three results can end a game:
//!
//! - **Capture**: a player captures the opponent's まぐろ. Decided on the
//!   capturing move itself.
//! - **Invasion**: a player's まぐろ stands on the opponent's home row and the
//!   opponent makes a full move without capturing it.
//! - **Repetition**: the same configuration (board, hands and side to move)
//!   shows up for the third time.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::MoveError;
use crate::piece::Piece;
use crate::piece_type::PieceType;
use crate::player::Player;
use crate::position::Position;
use crate::square::{Square, BOARD_WIDTH};

/// Why a game was won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinReason {
    /// The opponent's まぐろ was captured.
    Capture,
    /// The winner's まぐろ survived a full opponent move in enemy territory.
    Invasion,
}

/// Why a game was drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrawReason {
    /// The same configuration occurred three times.
    Repetition,
}

/// Result of a finished game. Once set on a [`Position`] it never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    Win { winner: Player, reason: WinReason },
    Draw(DrawReason),
}

impl GameResult {
    /// Returns the winner, if the game was won.
    pub fn winner(&self) -> Option<Player> {
        match *self {
            GameResult::Win { winner, .. } => Some(winner),
            GameResult::Draw(_) => None,
        }
    }

    /// Returns true if the game was drawn.
    pub fn is_draw(&self) -> bool {
        matches!(self, GameResult::Draw(_))
    }

    /// Returns the reason in Japanese, as shown by the text front-ends.
    pub fn reason_japanese(&self) -> &'static str {
        match *self {
            GameResult::Win {
                reason: WinReason::Capture,
                ..
            } => "まぐろを捕獲しました",
            GameResult::Win {
                reason: WinReason::Invasion,
                ..
            } => "まぐろが相手陣地に到達し、捕獲されませんでした",
            GameResult::Draw(DrawReason::Repetition) => "同じ状態が3回発生しました",
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            GameResult::Win {
                winner,
                reason: WinReason::Capture,
            } => write!(f, "{winner} player wins by capturing the maguro"),
            GameResult::Win {
                winner,
                reason: WinReason::Invasion,
            } => write!(f, "{winner} player wins by invasion"),
            GameResult::Draw(DrawReason::Repetition) => write!(f, "draw by repetition"),
        }
    }
}

/// Transient report of a refused move attempt.
///
/// Kept apart from [`GameResult`] so it can never be stored in a
/// [`Position`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    Invalid(MoveError),
}

/// Successful result of [`Position::make_move`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Snapshot of the position after the move.
    pub position: Position,
    /// Set when this move ended the game.
    pub result: Option<GameResult>,
}

/// Tracks whether a player's まぐろ sits in enemy territory, and since when.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InvasionTracker {
    present: bool,
    since: Option<u32>,
}

impl InvasionTracker {
    /// Returns true if the まぐろ currently stands in enemy territory.
    pub fn is_present(&self) -> bool {
        self.present
    }

    /// Returns the turn at which the まぐろ entered enemy territory.
    pub fn since(&self) -> Option<u32> {
        self.since
    }

    /// Records the latest scan. Entering keeps the first turn seen; leaving
    /// clears everything.
    pub(crate) fn update(&mut self, present: bool, turn: u32) {
        if !present {
            *self = InvasionTracker::default();
        } else if !self.present {
            self.present = true;
            self.since = Some(turn);
        }
    }

    /// Returns true if the invasion has lasted past its entry turn.
    pub fn wins_at(&self, turn: u32) -> bool {
        match self.since {
            Some(since) => self.present && turn > since,
            None => false,
        }
    }
}

/////////////////////////////////////////////////////////////////////////////
// Detection
/////////////////////////////////////////////////////////////////////////////

impl Position {
    /// Returns true if the player's まぐろ stands on the opponent's home row.
    pub fn maguro_in_enemy_territory(&self, p: Player) -> bool {
        let maguro = Piece::new(PieceType::Maguro, p);
        (0..BOARD_WIDTH)
            .filter_map(|col| Square::new(col, p.enemy_row()))
            .any(|sq| self.piece_at(sq) == Some(maguro))
    }

    /// Returns how many earlier configurations equal the current one.
    pub fn repetition_count(&self) -> usize {
        let current = self.configuration();
        self.history.iter().filter(|&c| *c == current).count()
    }

    /// Rescans both home rows and refreshes the invasion trackers.
    pub(crate) fn update_invasion(&mut self) {
        for p in Player::iter() {
            let present = self.maguro_in_enemy_territory(p);
            self.invasion[p.index()].update(present, self.turn);
        }
    }

    /// Sets up the invasion trackers of a freshly loaded position.
    ///
    /// A まぐろ of the side to move counts as entering on the turn after its
    /// own next move, so the opponent always gets one reply.
    pub(crate) fn seed_invasion(&mut self) {
        for p in Player::iter() {
            let present = self.maguro_in_enemy_territory(p);
            let entry = if p == self.side_to_move {
                self.turn.saturating_add(1)
            } else {
                self.turn
            };
            self.invasion[p.index()].update(present, entry);
        }
    }

    pub(crate) fn check_invasion(&self) -> Option<GameResult> {
        if !self.rules.invasion_win {
            return None;
        }

        Player::iter()
            .find(|p| self.invasion[p.index()].wins_at(self.turn))
            .map(|winner| GameResult::Win {
                winner,
                reason: WinReason::Invasion,
            })
    }

    pub(crate) fn check_repetition(&self) -> Option<GameResult> {
        if !self.rules.repetition_draw {
            return None;
        }

        if self.repetition_count() >= self.rules.repetition_prior_occurrences {
            Some(GameResult::Draw(DrawReason::Repetition))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracker_records_entry_turn_once() {
        let mut t = InvasionTracker::default();
        assert!(!t.is_present());

        t.update(true, 5);
        assert!(t.is_present());
        assert_eq!(Some(5), t.since());

        t.update(true, 6);
        assert_eq!(Some(5), t.since());
    }

    #[test]
    fn tracker_clears_on_leaving() {
        let mut t = InvasionTracker::default();
        t.update(true, 5);
        t.update(false, 6);
        assert!(!t.is_present());
        assert_eq!(None, t.since());

        t.update(true, 7);
        assert_eq!(Some(7), t.since());
    }

    #[test]
    fn tracker_wins_only_after_entry_turn() {
        let mut t = InvasionTracker::default();
        assert!(!t.wins_at(100));

        t.update(true, 5);
        assert!(!t.wins_at(5));
        assert!(t.wins_at(6));
    }

    #[test]
    fn result_accessors() {
        let win = GameResult::Win {
            winner: Player::Second,
            reason: WinReason::Capture,
        };
        assert_eq!(Some(Player::Second), win.winner());
        assert!(!win.is_draw());
        assert_eq!("まぐろを捕獲しました", win.reason_japanese());
        assert_eq!("second player wins by capturing the maguro", win.to_string());

        let draw = GameResult::Draw(DrawReason::Repetition);
        assert_eq!(None, draw.winner());
        assert!(draw.is_draw());
        assert_eq!("draw by repetition", draw.to_string());
    }

    #[test]
    fn start_position_has_no_invasion() {
        let pos = Position::new();
        for p in Player::iter() {
            assert!(!pos.maguro_in_enemy_territory(p));
        }
        assert_eq!(0, pos.repetition_count());
    }
}
