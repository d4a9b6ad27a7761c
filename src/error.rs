//! Error types for the rules core and its persistence boundary.
//!
//! Every rejection leaves the position untouched, so all of these are
//! recoverable by asking the caller for another input.

use crate::moves::CastleSide;
use crate::piece::Color;
use crate::square::Square;

#[derive(Debug, thiserror::Error)]
pub enum RulesError {
    #[error("malformed input '{0}'")]
    MalformedInput(String),

    #[error("illegal move {mv}: {reason}")]
    IllegalMove { mv: String, reason: String },

    #[error("castling {side} is not available: {reason}")]
    InvalidCastling { side: CastleSide, reason: CastlingBlock },

    #[error("invalid setup position: {0}")]
    InvalidSetupPosition(#[from] SetupIssue),

    #[error("invalid promotion choice '{0}', expected one of R, N, B, Q")]
    InvalidPromotionChoice(char),
}

impl RulesError {
    pub(crate) fn illegal(mv: impl ToString, reason: impl Into<String>) -> Self {
        RulesError::IllegalMove { mv: mv.to_string(), reason: reason.into() }
    }
}

/// Why a castle was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CastlingBlock {
    #[error("the king is not on its starting square")]
    KingMissing,
    #[error("the king has already moved")]
    KingMoved,
    #[error("there is no rook on {0}")]
    RookMissing(Square),
    #[error("the rook on {0} has already moved")]
    RookMoved(Square),
    #[error("{0} is occupied")]
    PathOccupied(Square),
    #[error("{0} is threatened")]
    SquareThreatened(Square),
}

/// Problems found when validating a hand-built position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SetupIssue {
    #[error("{0} has no king")]
    MissingKing(Color),
    #[error("{0} has more than one king")]
    ExtraKing(Color),
    #[error("{0} is already occupied")]
    SquareOccupied(Square),
    #[error("pawn on {0}, pawns cannot stand on the first or last row")]
    PawnOnEdgeRow(Square),
    #[error("both kings are in check")]
    BothKingsInCheck,
    #[error("the {0} king is in check but it is not {0}'s turn")]
    WaitingSideInCheck(Color),
}

#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("record encoding error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("recorded move {index} ('{token}') cannot be replayed: {source}")]
    Replay {
        index: usize,
        token: String,
        #[source]
        source: RulesError,
    },

    #[error(transparent)]
    Rules(#[from] RulesError),
}
