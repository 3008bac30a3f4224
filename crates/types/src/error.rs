use thiserror::Error;

use crate::Position;

/// Domain errors for board lookups and move application.
///
/// All variants are recoverable: the UI layer decides whether to ignore,
/// log, or surface them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    #[error("position out of range: rank {rank}, file {file}")]
    OutOfRange { rank: i8, file: i8 },

    #[error("no piece at {0}")]
    NoPiece(Position),

    #[error("invalid move: {from} -> {to}")]
    InvalidMove { from: Position, to: Position },

    #[error("invalid square notation: {0:?}")]
    InvalidSquare(String),
}
