//! A rules engine for Fish War, a two-player capture game on a 3×4 board.
//!
//! `fishwar` provides types for the board, the five fish pieces, captured
//! pieces in hand, moves and game results, together with a single transition
//! entry point that validates a move, applies it and detects the end of the
//! game. Moves are written in a compact notation such as `い↑B3B2` (the first
//! player's いなだ from B3 to B2) or `た↓A2★` (the second player places a たこ
//! from hand on A2).
//!
//! # Rules at a glance
//!
//! - まぐろ steps one cell in any direction. Capturing it wins the game.
//! - いなだ steps one cell forward and becomes ぶり on the enemy home row.
//! - ぶり steps forward, diagonally forward, sideways or straight back.
//! - たこ steps diagonally, かれい steps orthogonally.
//! - Captured pieces go to the captor's hand (a ぶり returns as いなだ) and may
//!   be placed on any empty cell instead of moving.
//! - A まぐろ that survives a full opponent move on the enemy home row wins.
//! - The third occurrence of the same configuration is a draw.
//!
//! # Examples
//!
//! ```
//! use fishwar::{Move, PieceType, Player, Position};
//! use fishwar::square::consts::*;
//!
//! let mut pos = Position::new();
//!
//! // You can programatically create a Move instance.
//! let m = Move::Normal {
//!     piece_type: PieceType::Inada,
//!     from: SQ_B3,
//!     to: SQ_B2,
//!     player: Player::First,
//! };
//! pos.make_move(m).unwrap();
//!
//! // Move can be parsed from move notation as well.
//! let outcome = pos.play("ま↓B1B2").unwrap();
//! assert_eq!(None, outcome.result);
//!
//! // Position can be converted to setup notation.
//! assert_eq!("k1t/1m1/3/TMK f Ii 3", pos.to_setup());
//! ```

pub mod config;
pub mod error;
pub mod hand;
pub mod movement;
pub mod moves;
pub mod outcome;
pub mod piece;
pub mod piece_type;
pub mod player;
pub mod position;
pub mod record;
pub mod setup;
pub mod square;
pub mod validation;

pub use self::config::RuleConfig;
pub use self::error::{
    ConfigError, MoveError, MoveRejection, ParseMoveError, ParseSquareError, PlayError,
    ReplayError, SetupError,
};
pub use self::hand::Hand;
pub use self::moves::Move;
pub use self::outcome::{
    DrawReason, GameResult, InvasionTracker, MoveOutcome, MoveResult, WinReason,
};
pub use self::piece::Piece;
pub use self::piece_type::PieceType;
pub use self::player::Player;
pub use self::position::{Board, Configuration, Position};
pub use self::record::MoveRecord;
pub use self::setup::STARTING_SETUP;
pub use self::square::Square;
