// =============================================================================
// Legality engine
//
// Everything here is a pure function of a Position (the simulation guard
// mutates it only transiently). Pseudo-legal moves come from the movement
// generators; a move is legal when simulating it leaves the mover's king
// unthreatened. Castling is checked separately since it is never a single
// piece step.
// =============================================================================

use crate::error::{CastlingBlock, RulesError};
use crate::movement::{allowed_movements, attack_squares};
use crate::moves::{CastleSide, Move};
use crate::piece::{Color, PieceType};
use crate::position::Position;
use crate::square::Square;

/// Half-moves without a change in piece count before the game is drawn.
pub const FIFTY_MOVE_LIMIT: u32 = 100;

/// True if any piece of the other color than `color` attacks `square`.
pub fn is_threatened(position: &Position, square: Square, color: Color) -> bool {
    position
        .pieces_of(color.opposite())
        .any(|p| attack_squares(p, position).contains(&square))
}

/// True if `color`'s king is attacked. A side without a king is never in
/// check.
pub fn is_check(position: &Position, color: Color) -> bool {
    position
        .king(color)
        .map(|k| is_threatened(position, k.square, color))
        .unwrap_or(false)
}

/// Every move the pieces of `color` could make, ignoring self-check.
/// Castles are not included.
pub fn pseudo_legal_moves(position: &Position, color: Color) -> Vec<Move> {
    let mut moves = Vec::new();
    for piece in position.pieces_of(color) {
        for to in allowed_movements(piece, position) {
            moves.push(Move::new(piece.kind, piece.square, to));
        }
    }
    moves
}

/// Whether making `mv` (a regular move) would leave `color`'s king in check.
/// The position is restored before returning.
pub fn leaves_king_in_check(position: &mut Position, mv: &Move, color: Color) -> bool {
    match mv {
        Move::Regular { from, to, .. } => match position.simulate(*from, *to) {
            Some(sim) => is_check(&sim, color),
            None => true,
        },
        Move::Castle(side) => castling_block(position, color, *side).is_some(),
    }
}

/// The legal moves of `color`: pseudo-legal moves that keep the king safe,
/// followed by any available castles. Promotions appear once with no choice
/// attached; applying one without a choice promotes to a queen.
pub fn legal_moves(position: &Position, color: Color) -> Vec<Move> {
    let mut scratch = position.clone();
    let mut moves: Vec<Move> = pseudo_legal_moves(position, color)
        .into_iter()
        .filter(|mv| !leaves_king_in_check(&mut scratch, mv, color))
        .collect();
    for side in [CastleSide::Kingside, CastleSide::Queenside] {
        if castling_block(position, color, side).is_none() {
            moves.push(Move::Castle(side));
        }
    }
    moves
}

pub fn is_checkmate(position: &Position, color: Color) -> bool {
    Verdict::evaluate(position, color).is_checkmate()
}

pub fn is_stalemate(position: &Position, color: Color) -> bool {
    Verdict::evaluate(position, color).is_stalemate()
}

/// Check status and legal moves of one side, computed together so that the
/// mate and stalemate tests read the same move list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Verdict {
    pub color: Color,
    pub in_check: bool,
    pub legal_moves: Vec<Move>,
}

impl Verdict {
    pub fn evaluate(position: &Position, color: Color) -> Self {
        Verdict {
            color,
            in_check: is_check(position, color),
            legal_moves: legal_moves(position, color),
        }
    }

    pub fn is_checkmate(&self) -> bool {
        self.in_check && self.legal_moves.is_empty()
    }

    pub fn is_stalemate(&self) -> bool {
        !self.in_check && self.legal_moves.is_empty()
    }
}

/// Why `color` cannot castle on `side`, or `None` if it can.
pub fn castling_block(position: &Position, color: Color, side: CastleSide) -> Option<CastlingBlock> {
    let king_sq = side.king_origin(color);
    let rook_sq = side.rook_origin(color);

    match position.piece_at(king_sq) {
        Some(p) if p.kind == PieceType::King && p.color == color => {
            if !p.can_castle() {
                return Some(CastlingBlock::KingMoved);
            }
        }
        _ => return Some(CastlingBlock::KingMissing),
    }
    match position.piece_at(rook_sq) {
        Some(p) if p.kind == PieceType::Rook && p.color == color => {
            if !p.can_castle() {
                return Some(CastlingBlock::RookMoved(rook_sq));
            }
        }
        _ => return Some(CastlingBlock::RookMissing(rook_sq)),
    }
    if let Some(sq) = side.between(color).into_iter().find(|sq| position.is_occupied(*sq)) {
        return Some(CastlingBlock::PathOccupied(sq));
    }
    side.king_path(color)
        .into_iter()
        .find(|sq| is_threatened(position, *sq, color))
        .map(CastlingBlock::SquareThreatened)
}

/// `Ok` if `color` may castle on `side` right now.
pub fn check_castling(position: &Position, color: Color, side: CastleSide) -> Result<(), RulesError> {
    match castling_block(position, color, side) {
        None => Ok(()),
        Some(reason) => Err(RulesError::InvalidCastling { side, reason }),
    }
}

/// True if a pawn of `color` landing on `to` must promote.
pub fn is_promotion_square(color: Color, to: Square) -> bool {
    to.row() == color.promotion_row()
}

/// Counts half-moves since the number of pieces on the board last changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FiftyMoveCounter {
    count: u32,
    piece_count: usize,
    limit: u32,
}

impl FiftyMoveCounter {
    pub fn new(piece_count: usize) -> Self {
        Self::with_limit(piece_count, FIFTY_MOVE_LIMIT)
    }

    pub fn with_limit(piece_count: usize, limit: u32) -> Self {
        FiftyMoveCounter { count: 0, piece_count, limit }
    }

    /// Records one half-move that left `piece_count` pieces on the board.
    pub fn record(&mut self, piece_count: usize) {
        if piece_count == self.piece_count {
            self.count += 1;
        } else {
            self.count = 0;
            self.piece_count = piece_count;
        }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn is_draw(&self) -> bool {
        self.count >= self.limit
    }
}
