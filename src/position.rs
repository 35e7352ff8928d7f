use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info, instrument};

use crate::config::RuleConfig;
use crate::error::{MoveError, MoveRejection, PlayError, ReplayError};
use crate::hand::Hand;
use crate::moves::Move;
use crate::outcome::{GameResult, InvasionTracker, MoveOutcome, WinReason};
use crate::piece::Piece;
use crate::piece_type::PieceType;
use crate::player::Player;
use crate::record::MoveRecord;
use crate::square::consts::*;
use crate::square::{Square, BOARD_HEIGHT, BOARD_WIDTH, NUM_SQUARES};

const INITIAL_LAYOUT: [(Square, PieceType, Player); 8] = [
    (SQ_A1, PieceType::Karei, Player::Second),
    (SQ_B1, PieceType::Maguro, Player::Second),
    (SQ_C1, PieceType::Tako, Player::Second),
    (SQ_B2, PieceType::Inada, Player::Second),
    (SQ_B3, PieceType::Inada, Player::First),
    (SQ_A4, PieceType::Tako, Player::First),
    (SQ_B4, PieceType::Maguro, Player::First),
    (SQ_C4, PieceType::Karei, Player::First),
];

/// The 3×4 grid of cells, each empty or holding one piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board([Option<Piece>; NUM_SQUARES]);

impl Board {
    /// Returns a board with no pieces.
    pub fn empty() -> Board {
        Board([None; NUM_SQUARES])
    }

    /// Returns the piece at the given square.
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.0[sq.index()]
    }

    pub(crate) fn set(&mut self, sq: Square, pc: Option<Piece>) {
        self.0[sq.index()] = pc;
    }

    /// Returns an iterator over every square with its content, from `A1` to `C4`.
    pub fn iter(&self) -> impl Iterator<Item = (Square, Option<Piece>)> + '_ {
        Square::iter().map(move |sq| (sq, self.get(sq)))
    }

    /// Returns the first square holding the given piece.
    pub fn find(&self, pc: Piece) -> Option<Square> {
        self.iter()
            .find(|&(_, cell)| cell == Some(pc))
            .map(|(sq, _)| sq)
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::empty()
    }
}

/// The part of the game state compared for repetition: board, both hands and
/// the side to move.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Configuration {
    pub board: Board,
    pub hand: Hand,
    pub side_to_move: Player,
}

/// Represents a state of the game.
///
/// All accessors hand out copies; the only way to change a `Position` is
/// [`make_move`](Position::make_move) (or [`play`](Position::play), which
/// parses first).
///
/// # Examples
///
/// ```
/// use fishwar::{Move, Player, Position};
///
/// let mut pos = Position::new();
///
/// let m = Move::from_notation("い↑B3B2").unwrap();
/// let outcome = pos.make_move(m).unwrap();
///
/// assert_eq!(None, outcome.result);
/// assert_eq!(Player::Second, pos.side_to_move());
/// assert_eq!(2, pos.turn());
/// assert_eq!("kmt/1I1/3/TMK s I 2", pos.to_setup());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub(crate) board: Board,
    pub(crate) hand: Hand,
    pub(crate) side_to_move: Player,
    pub(crate) turn: u32,
    pub(crate) result: Option<GameResult>,
    /// Configurations as they were before each accepted move.
    pub(crate) history: Vec<Configuration>,
    pub(crate) invasion: [InvasionTracker; 2],
    pub(crate) move_history: Vec<MoveRecord>,
    pub(crate) rules: RuleConfig,
}

/////////////////////////////////////////////////////////////////////////////
// Type implementation
/////////////////////////////////////////////////////////////////////////////

impl Position {
    /// Creates a new game in the initial layout under the standard rules.
    pub fn new() -> Position {
        Position::with_rules(RuleConfig::default())
    }

    /// Creates a new game in the initial layout under the given rules.
    pub fn with_rules(rules: RuleConfig) -> Position {
        let mut board = Board::empty();
        for &(sq, pt, p) in INITIAL_LAYOUT.iter() {
            board.set(sq, Some(Piece::new(pt, p)));
        }

        Position {
            board,
            hand: Hand::default(),
            side_to_move: Player::First,
            turn: 1,
            result: None,
            history: Vec::new(),
            invasion: Default::default(),
            move_history: Vec::new(),
            rules,
        }
    }

    /////////////////////////////////////////////////////////////////////////
    // Accessors
    /////////////////////////////////////////////////////////////////////////

    /// Returns a piece at the given square.
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board.get(sq)
    }

    /// Returns a copy of the board.
    pub fn board(&self) -> Board {
        self.board
    }

    /// Returns a copy of both players' hands.
    pub fn hand(&self) -> Hand {
        self.hand.clone()
    }

    /// Returns the pieces in the player's hand, in capture order.
    pub fn hand_pieces(&self, p: Player) -> Vec<PieceType> {
        self.hand.pieces(p).to_vec()
    }

    /// Returns the side to make a move next.
    pub fn side_to_move(&self) -> Player {
        self.side_to_move
    }

    /// Returns the turn counter. It starts at 1 and grows by one per move.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Returns the result of the game, once it has ended.
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// Returns true if the game has ended.
    pub fn is_game_over(&self) -> bool {
        self.result.is_some()
    }

    /// Returns the configurations recorded before each accepted move.
    pub fn history(&self) -> Vec<Configuration> {
        self.history.clone()
    }

    /// Returns the invasion tracker of the given player.
    pub fn invasion(&self, p: Player) -> InvasionTracker {
        self.invasion[p.index()]
    }

    /// Returns the list of moves played so far.
    pub fn move_history(&self) -> Vec<MoveRecord> {
        self.move_history.clone()
    }

    /// Returns the rules this game is played under.
    pub fn rules(&self) -> RuleConfig {
        self.rules.clone()
    }

    /// Returns the current configuration.
    pub fn configuration(&self) -> Configuration {
        Configuration {
            board: self.board,
            hand: self.hand.clone(),
            side_to_move: self.side_to_move,
        }
    }

    /// Returns a deep copy of the whole game state.
    pub fn snapshot(&self) -> Position {
        self.clone()
    }

    /// Returns the square of the player's まぐろ.
    pub fn find_maguro(&self, p: Player) -> Option<Square> {
        self.board.find(Piece::new(PieceType::Maguro, p))
    }

    /////////////////////////////////////////////////////////////////////////
    // Making a move
    /////////////////////////////////////////////////////////////////////////

    /// Makes the given move.
    ///
    /// A refused move leaves the position untouched. An accepted move is
    /// applied to a working copy that replaces `self` only once outcome
    /// detection has run on it.
    #[instrument(skip(self), fields(side = ?self.side_to_move, turn = self.turn))]
    pub fn make_move(&mut self, m: Move) -> Result<MoveOutcome, MoveRejection> {
        if self.result.is_some() {
            debug!(notation = %m, "move rejected: game already finished");
            return Err(MoveRejection::new(MoveError::GameFinished));
        }

        if let Some(reason) = self.validate(&m) {
            debug!(notation = %m, %reason, "move rejected");
            return Err(MoveRejection::new(reason));
        }

        let next_turn = match self.turn.checked_add(1) {
            Some(turn) => turn,
            None => {
                debug!(notation = %m, "move rejected: turn counter exhausted");
                return Err(MoveRejection::new(MoveError::TurnLimit));
            }
        };

        let mut next = self.clone();
        let record = match m {
            Move::Normal {
                from, to, player, ..
            } => next.make_normal_move(from, to, player)?,
            Move::Place {
                piece_type,
                to,
                player,
            } => next.make_place_move(piece_type, to, player)?,
        };

        next.history.push(self.configuration());
        next.move_history.push(record);
        next.side_to_move = next.side_to_move.flip();
        next.turn = next_turn;

        next.update_invasion();
        if next.result.is_none() {
            next.result = next.check_invasion().or_else(|| next.check_repetition());
        }

        *self = next;

        debug!(notation = %m, turn = self.turn, "move accepted");
        if let Some(result) = self.result {
            info!(%result, turn = self.turn, "game finished");
        }

        Ok(MoveOutcome {
            position: self.snapshot(),
            result: self.result,
        })
    }

    fn make_normal_move(
        &mut self,
        from: Square,
        to: Square,
        player: Player,
    ) -> Result<MoveRecord, MoveRejection> {
        let moved = self
            .board
            .get(from)
            .ok_or(MoveRejection::new(MoveError::NoPieceAtOrigin))?;

        let captured = self.board.get(to);
        if let Some(cap) = captured {
            self.hand.push(player, cap.piece_type.captured_as());

            if cap.piece_type == PieceType::Maguro {
                self.result = Some(GameResult::Win {
                    winner: player,
                    reason: WinReason::Capture,
                });
            }
        }

        let placed = match moved.promote() {
            Some(promoted) if to.row() == player.enemy_row() => promoted,
            _ => moved,
        };

        self.board.set(from, None);
        self.board.set(to, Some(placed));

        Ok(MoveRecord::Normal {
            from,
            to,
            placed,
            captured,
            promoted: placed != moved,
        })
    }

    fn make_place_move(
        &mut self,
        piece_type: PieceType,
        to: Square,
        player: Player,
    ) -> Result<MoveRecord, MoveRejection> {
        if !self.hand.remove(player, piece_type) {
            return Err(MoveRejection::new(MoveError::PieceNotInHand));
        }

        let piece = Piece::new(piece_type, player);
        self.board.set(to, Some(piece));

        Ok(MoveRecord::Place { to, piece })
    }

    /// Parses the move notation and makes the move.
    ///
    /// # Examples
    ///
    /// ```
    /// use fishwar::{PieceType, Player, Position};
    ///
    /// let mut pos = Position::new();
    /// pos.play("い↑B3B2").unwrap();
    /// pos.play("ま↓B1B2").unwrap();
    ///
    /// assert_eq!(vec![PieceType::Inada], pos.hand_pieces(Player::First));
    /// assert_eq!(vec![PieceType::Inada], pos.hand_pieces(Player::Second));
    /// assert!(pos.play("い↑B3").is_err());
    /// ```
    pub fn play(&mut self, notation: &str) -> Result<MoveOutcome, PlayError> {
        let m: Move = notation.parse()?;
        Ok(self.make_move(m)?)
    }

    /// Plays a sequence of moves given in notation, stopping at the first
    /// failure.
    ///
    /// Moves accepted before the failure stay applied. An empty sequence
    /// reports the current state.
    pub fn replay<S: AsRef<str>>(&mut self, moves: &[S]) -> Result<MoveOutcome, ReplayError> {
        let mut last = MoveOutcome {
            position: self.snapshot(),
            result: self.result,
        };

        for (index, notation) in moves.iter().enumerate() {
            let notation = notation.as_ref();
            last = self.play(notation).map_err(|source| ReplayError {
                index,
                notation: notation.to_string(),
                source,
            })?;
        }

        Ok(last)
    }
}

/////////////////////////////////////////////////////////////////////////////
// Trait implementations
/////////////////////////////////////////////////////////////////////////////

impl Default for Position {
    fn default() -> Position {
        Position::new()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "  A    B    C")?;
        writeln!(f, " --------------")?;

        for row in 0..BOARD_HEIGHT {
            write!(f, "|")?;
            for col in 0..BOARD_WIDTH {
                match Square::new(col, row).and_then(|sq| self.piece_at(sq)) {
                    Some(pc) => write!(f, " {pc}|")?,
                    None => write!(f, "    |")?,
                }
            }
            writeln!(f, " {}", row + 1)?;
            writeln!(f, " --------------")?;
        }

        writeln!(f)?;
        writeln!(f, "手ゴマ置き場")?;
        for p in Player::iter() {
            let pieces = self.hand.pieces(p);
            if pieces.is_empty() {
                writeln!(f, "{}：なし", p.to_japanese())?;
            } else {
                writeln!(f, "{}：{}", p.to_japanese(), pieces.iter().join(", "))?;
            }
        }

        writeln!(
            f,
            "現在のターン：{} ({})",
            self.turn,
            self.side_to_move.to_japanese()
        )
    }
}
