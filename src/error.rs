//! Error types.

use std::path::PathBuf;

use crate::outcome::MoveResult;

/// Error type for parsing a square from move notation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid square notation: {0:?}")]
pub struct ParseSquareError(pub String);

/// Error type for parsing a move from move notation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid move notation: {0:?}")]
pub struct ParseMoveError(pub String);

/// Reasons a well-formed move is refused.
///
/// The `Display` text of each variant is the fixed reason string reported to
/// front-ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum MoveError {
    #[error("wrong turn")]
    WrongTurn,

    #[error("no piece at origin")]
    NoPieceAtOrigin,

    #[error("cannot move opponent's piece")]
    OpponentPiece,

    #[error("declared piece mismatch")]
    PieceMismatch,

    #[error("illegal destination for this piece")]
    IllegalDestination,

    #[error("cannot move onto own piece")]
    OwnPieceAtDestination,

    #[error("piece not in hand")]
    PieceNotInHand,

    #[error("cannot place on an occupied cell")]
    OccupiedCell,

    #[error("destination is outside the board")]
    OutOfBounds,

    #[error("game already finished")]
    GameFinished,

    #[error("turn counter exhausted")]
    TurnLimit,
}

/// A move refused by [`Position::make_move`](crate::Position::make_move).
///
/// The position is left untouched. The rejection can be reported as a
/// transient [`MoveResult::Invalid`], which is never stored in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{reason}")]
pub struct MoveRejection {
    reason: MoveError,
}

impl MoveRejection {
    pub(crate) fn new(reason: MoveError) -> Self {
        MoveRejection { reason }
    }

    /// Returns why the move was refused.
    pub fn reason(&self) -> MoveError {
        self.reason
    }

    /// Returns the transient `invalid` result describing this rejection.
    ///
    /// A rejection caused by a finished game has no such result.
    pub fn result(&self) -> Option<MoveResult> {
        match self.reason {
            MoveError::GameFinished => None,
            reason => Some(MoveResult::Invalid(reason)),
        }
    }
}

/// Errors from parsing the position setup notation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("data fields are missing")]
    MissingDataFields,

    #[error("illegal piece character {0:?}")]
    IllegalPieceType(char),

    #[error("illegal board state")]
    IllegalBoardState,

    #[error("illegal side to move {0:?}")]
    IllegalSideToMove(String),

    #[error("illegal turn number {0:?}")]
    IllegalTurn(String),

    #[error("a maguro cannot be held in hand")]
    MaguroInHand,
}

/// Errors from playing a move given in notation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlayError {
    #[error(transparent)]
    Parse(#[from] ParseMoveError),

    #[error(transparent)]
    Rejected(#[from] MoveRejection),
}

/// Errors from replaying a sequence of moves.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("move #{index} ({notation}) failed: {source}")]
pub struct ReplayError {
    /// 0-based index of the failing move in the sequence.
    pub index: usize,
    pub notation: String,
    pub source: PlayError,
}

/// Errors that can occur when loading rule configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
