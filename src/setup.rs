// Starting positions: the classic array, Fischer draws, and hand-built
// positions from setting mode.

use log::debug;
use rand::Rng;

use crate::error::{RulesError, SetupIssue};
use crate::notation::parse_placement;
use crate::piece::{Color, Piece, PieceType};
use crate::position::Position;
use crate::rules::is_check;
use crate::square::Square;

/// Draws a Fischer back row the way it is done with a die: a bishop on a dark
/// square, a bishop on a light square, the queen on one of six free squares,
/// knights on one of five and then four free squares, and finally rook, king
/// and rook on what is left, so the king always sits between the rooks.
pub fn fischer_back_row<R: Rng + ?Sized>(rng: &mut R) -> [PieceType; 8] {
    let mut row: [Option<PieceType>; 8] = [None; 8];

    row[2 * rng.gen_range(0..4)] = Some(PieceType::Bishop);
    row[2 * rng.gen_range(0..4) + 1] = Some(PieceType::Bishop);

    for (kind, free) in [(PieceType::Queen, 6usize), (PieceType::Knight, 5), (PieceType::Knight, 4)] {
        let nth = rng.gen_range(0..free);
        if let Some(slot) = row.iter_mut().filter(|s| s.is_none()).nth(nth) {
            *slot = Some(kind);
        }
    }

    for kind in [PieceType::Rook, PieceType::King, PieceType::Rook] {
        if let Some(slot) = row.iter_mut().find(|s| s.is_none()) {
            *slot = Some(kind);
        }
    }

    row.map(|s| s.unwrap_or(PieceType::Rook))
}

/// Checks that a hand-built position can be played with `to_move` to move.
pub fn validate(position: &Position, to_move: Color) -> Result<(), RulesError> {
    for piece in position.pieces() {
        if piece.kind == PieceType::Pawn && (piece.square.row() == 0 || piece.square.row() == 7) {
            return Err(SetupIssue::PawnOnEdgeRow(piece.square).into());
        }
    }
    for color in [Color::White, Color::Black] {
        let kings = position
            .pieces_of(color)
            .filter(|p| p.kind == PieceType::King)
            .count();
        match kings {
            0 => return Err(SetupIssue::MissingKing(color).into()),
            1 => {}
            _ => return Err(SetupIssue::ExtraKing(color).into()),
        }
    }
    let white_check = is_check(position, Color::White);
    let black_check = is_check(position, Color::Black);
    if white_check && black_check {
        return Err(SetupIssue::BothKingsInCheck.into());
    }
    let waiting = to_move.opposite();
    if is_check(position, waiting) {
        return Err(SetupIssue::WaitingSideInCheck(waiting).into());
    }
    Ok(())
}

/// Setting mode: builds a position piece by piece before handing it to a
/// game.
#[derive(Clone, Debug, Default)]
pub struct Setup {
    position: Position,
}

impl Setup {
    pub fn new() -> Self {
        Setup { position: Position::empty() }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Places a piece from setting input such as `Rw-e4`. The square must be
    /// vacant.
    pub fn place_input(&mut self, input: &str) -> Result<Piece, RulesError> {
        let piece = parse_placement(input)?;
        self.place(piece)?;
        Ok(piece)
    }

    pub fn place(&mut self, piece: Piece) -> Result<(), RulesError> {
        self.position.place(piece)?;
        debug!("setting: placed {piece}");
        Ok(())
    }

    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.position.remove(square)
    }

    pub fn clear(&mut self) {
        self.position = Position::empty();
    }

    /// Validates and returns the finished position.
    pub fn finish(self, to_move: Color) -> Result<Position, RulesError> {
        validate(&self.position, to_move)?;
        Ok(self.position)
    }
}
