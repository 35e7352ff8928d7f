//! Position setup notation.
//!
//! A position is written as four space-separated fields:
//!
//! ```text
//! kmt/1i1/1I1/TMK f - 1
//! ```
//!
//! 1. The board, row `1` first, each row listing cells `A` to `C`. Letters
//!    `M I B T K` stand for まぐろ, いなだ, ぶり, たこ and かれい of the first
//!    player; lowercase letters are the second player's. A digit is a run of
//!    empty cells.
//! 2. The side to move, `f` (first) or `s` (second).
//! 3. The hands, `-` when both are empty. Each player's pieces keep their
//!    order; the two players' letters may be interleaved. A まぐろ is never
//!    held in hand.
//! 4. The turn counter, from 1 up to one below `u32::MAX`.

use itertools::Itertools;

use crate::config::RuleConfig;
use crate::error::SetupError;
use crate::hand::Hand;
use crate::piece::Piece;
use crate::piece_type::PieceType;
use crate::player::Player;
use crate::position::{Board, Position};
use crate::square::{Square, BOARD_HEIGHT, BOARD_WIDTH};

/// Setup notation of the initial layout.
pub const STARTING_SETUP: &str = "kmt/1i1/1I1/TMK f - 1";

impl Position {
    /// Creates a position from setup notation under the standard rules.
    ///
    /// The loaded position has no history and no result. A まぐろ already on
    /// the enemy home row has to survive one opponent move before it wins:
    /// it counts as entering on the loaded turn when the opponent is to move,
    /// and on the next turn when its own side is to move.
    ///
    /// # Examples
    ///
    /// ```
    /// use fishwar::{Position, Player};
    /// use fishwar::square::consts::*;
    ///
    /// let pos = Position::from_setup("k2/1M1/2m/2K s T 7").unwrap();
    /// assert_eq!(Player::Second, pos.side_to_move());
    /// assert_eq!(7, pos.turn());
    /// assert_eq!(Some(SQ_B2), pos.find_maguro(Player::First));
    /// assert_eq!("k2/1M1/2m/2K s T 7", pos.to_setup());
    /// ```
    pub fn from_setup(s: &str) -> Result<Position, SetupError> {
        Position::from_setup_with_rules(s, RuleConfig::default())
    }

    /// Creates a position from setup notation under the given rules.
    pub fn from_setup_with_rules(s: &str, rules: RuleConfig) -> Result<Position, SetupError> {
        let mut parts = s.split_whitespace();

        let board = parts
            .next()
            .ok_or(SetupError::MissingDataFields)
            .and_then(parse_board)?;
        let side_to_move = parts
            .next()
            .ok_or(SetupError::MissingDataFields)
            .and_then(parse_side_to_move)?;
        let hand = parts
            .next()
            .ok_or(SetupError::MissingDataFields)
            .and_then(parse_hand)?;
        let turn = parts
            .next()
            .ok_or(SetupError::MissingDataFields)
            .and_then(parse_turn)?;

        if parts.next().is_some() {
            return Err(SetupError::IllegalBoardState);
        }

        let mut pos = Position::with_rules(rules);
        pos.board = board;
        pos.side_to_move = side_to_move;
        pos.hand = hand;
        pos.turn = turn;
        pos.seed_invasion();

        Ok(pos)
    }

    /// Converts the current state into setup notation.
    ///
    /// History, results and invasion timing are not part of the notation.
    pub fn to_setup(&self) -> String {
        let board = (0..BOARD_HEIGHT)
            .map(|row| {
                let mut s = String::new();
                let mut num_spaces = 0;
                for col in 0..BOARD_WIDTH {
                    match Square::new(col, row).and_then(|sq| self.piece_at(sq)) {
                        Some(pc) => {
                            if num_spaces > 0 {
                                s.push_str(&num_spaces.to_string());
                                num_spaces = 0;
                            }

                            s.push(pc.setup_char());
                        }
                        None => num_spaces += 1,
                    }
                }

                if num_spaces > 0 {
                    s.push_str(&num_spaces.to_string());
                }

                s
            })
            .join("/");

        let side = match self.side_to_move {
            Player::First => "f",
            Player::Second => "s",
        };

        let mut hand = Player::iter()
            .map(|p| {
                self.hand
                    .pieces(p)
                    .iter()
                    .map(|&pt| Piece::new(pt, p).setup_char())
                    .join("")
            })
            .join("");

        if hand.is_empty() {
            hand = "-".to_string();
        }

        format!("{} {} {} {}", board, side, hand, self.turn)
    }
}

fn parse_board(s: &str) -> Result<Board, SetupError> {
    let mut board = Board::empty();
    let mut num_rows = 0;

    for (i, row) in s.split('/').enumerate() {
        if i >= BOARD_HEIGHT as usize {
            return Err(SetupError::IllegalBoardState);
        }

        let mut j: u8 = 0;
        for c in row.chars() {
            match c {
                n if n.is_ascii_digit() => {
                    let n = n.to_digit(10).unwrap_or(0) as u8;
                    if n == 0 {
                        return Err(SetupError::IllegalBoardState);
                    }
                    j += n;
                }
                c => {
                    let pc = Piece::from_setup_char(c).ok_or(SetupError::IllegalPieceType(c))?;
                    let sq = Square::new(j, i as u8).ok_or(SetupError::IllegalBoardState)?;
                    board.set(sq, Some(pc));
                    j += 1;
                }
            }

            if j > BOARD_WIDTH {
                return Err(SetupError::IllegalBoardState);
            }
        }

        if j != BOARD_WIDTH {
            return Err(SetupError::IllegalBoardState);
        }
        num_rows += 1;
    }

    if num_rows != BOARD_HEIGHT {
        return Err(SetupError::IllegalBoardState);
    }

    for p in Player::iter() {
        let maguro = Piece::new(PieceType::Maguro, p);
        if board.iter().filter(|&(_, cell)| cell == Some(maguro)).count() > 1 {
            return Err(SetupError::IllegalBoardState);
        }
    }

    Ok(board)
}

fn parse_side_to_move(s: &str) -> Result<Player, SetupError> {
    match s {
        "f" => Ok(Player::First),
        "s" => Ok(Player::Second),
        _ => Err(SetupError::IllegalSideToMove(s.to_string())),
    }
}

fn parse_hand(s: &str) -> Result<Hand, SetupError> {
    let mut hand = Hand::default();
    if s == "-" {
        return Ok(hand);
    }

    for c in s.chars() {
        let pc = Piece::from_setup_char(c).ok_or(SetupError::IllegalPieceType(c))?;
        if pc.piece_type == PieceType::Maguro {
            return Err(SetupError::MaguroInHand);
        }
        hand.push(pc.player, pc.piece_type);
    }

    Ok(hand)
}

fn parse_turn(s: &str) -> Result<u32, SetupError> {
    match s.parse::<u32>() {
        Ok(n) if n >= 1 && n < u32::MAX => Ok(n),
        _ => Err(SetupError::IllegalTurn(s.to_string())),
    }
}
