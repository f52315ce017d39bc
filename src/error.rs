use thiserror::Error;

use crate::game_repr::{Square, Winner};

/// Why a candidate move was refused.
///
/// The public move contract is a plain accept/reject; this type exists so the
/// reason can be logged or shown, never as a fatal error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum IllegalMove {
    #[error("the game is over ({0})")]
    GameOver(Winner),

    #[error("square {0:?} is off the board")]
    OffBoard(Square),

    #[error("there is no piece on {0}")]
    EmptySquare(Square),

    #[error("the piece on {0} does not belong to the side to move")]
    WrongSide(Square),

    #[error("it is the opponent's turn")]
    NotYourTurn,

    #[error("a pawn reaching the last rank needs a queen, rook, knight or bishop of its own color")]
    InvalidPromotion,

    #[error("{from}{to} breaks the movement rules of the piece")]
    RuleViolation { from: Square, to: Square },

    #[error("cannot castle out of check")]
    CastleOutOfCheck,

    #[error("the move would leave the king in check")]
    LeavesKingInCheck,
}

/// Failure to decode a snapshot payload or relay envelope
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SnapshotError {
    #[error("expected {expected} bytes, found {found}")]
    WrongSize { expected: usize, found: usize },

    #[error("invalid piece code {0}")]
    InvalidPiece(u8),

    #[error("invalid winner code {0}")]
    InvalidWinner(u8),

    #[error("invalid boolean flag {0}")]
    InvalidFlag(u8),

    #[error("invalid square ({x}, {y})")]
    InvalidSquare { x: u8, y: u8 },

    #[error("unknown message type {0}")]
    UnknownMessageType(u32),

    #[error("payload size field says {declared} bytes but {actual} followed the header")]
    PayloadSizeMismatch { declared: usize, actual: usize },
}

/// Failure to import a FEN string
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FenError {
    #[error("Invalid FEN string: {fen}")]
    InvalidFen { fen: String },

    #[error("unexpected character {0:?} in piece placement")]
    InvalidPiece(char),

    #[error("piece placement does not describe 8 ranks of 8 files")]
    BadPlacement,

    #[error("side to move must be 'w' or 'b', found {0:?}")]
    InvalidSideToMove(String),

    #[error("invalid castling field {0:?}")]
    InvalidCastling(String),

    #[error("invalid en passant field {0:?}")]
    InvalidEnPassant(String),

    #[error("invalid move counter {0:?}")]
    InvalidCounter(String),

    #[error("each side needs exactly one king")]
    MissingKing,
}
