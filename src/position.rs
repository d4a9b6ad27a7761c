use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::error::{RulesError, SetupIssue};
use crate::moves::CastleSide;
use crate::piece::{Color, Piece, PieceType};
use crate::square::Square;

/// Back row of the classic starting position, column a first.
pub const CLASSIC_BACK_ROW: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// A piece as seen by a renderer or stored in a session record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub piece: PieceType,
    pub color: Color,
    pub square: Square,
}

impl From<&Piece> for Placement {
    fn from(p: &Piece) -> Self {
        Placement { piece: p.kind, color: p.color, square: p.square }
    }
}

/// The pieces currently on the board.
///
/// Pieces keep their insertion order so iteration and rendering are
/// deterministic; a promotion replaces the pawn in place.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pieces: Vec<Piece>,
}

impl Position {
    /// An empty board. Useful for setting up test positions.
    pub fn empty() -> Self {
        Position { pieces: Vec::new() }
    }

    pub fn standard() -> Self {
        Self::from_back_row(CLASSIC_BACK_ROW)
    }

    /// Both sides get `back_row` on their first row and a full row of pawns.
    /// Used for the classic setup and for Fischer draws.
    pub fn from_back_row(back_row: [PieceType; 8]) -> Self {
        let mut pieces = Vec::with_capacity(32);
        for color in [Color::White, Color::Black] {
            for (col, kind) in back_row.iter().enumerate() {
                pieces.push(Piece::new(*kind, color, Square::at(col as u8, color.back_row())));
            }
            for col in 0..8 {
                pieces.push(Piece::new(PieceType::Pawn, color, Square::at(col, color.pawn_row())));
            }
        }
        Position { pieces }
    }

    /// Rebuilds a position from stored placements; every rook and king is
    /// castling-eligible again.
    pub fn from_placements(placements: &[Placement]) -> Result<Self, RulesError> {
        let mut position = Position::empty();
        for p in placements {
            position.place(Piece::new(p.piece, p.color, p.square))?;
        }
        Ok(position)
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    fn index_of(&self, square: Square) -> Option<usize> {
        self.pieces.iter().position(|p| p.square == square)
    }

    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.square == square)
    }

    pub fn is_occupied(&self, square: Square) -> bool {
        self.piece_at(square).is_some()
    }

    pub fn color_at(&self, square: Square) -> Option<Color> {
        self.piece_at(square).map(|p| p.color)
    }

    pub fn king(&self, color: Color) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.kind == PieceType::King && p.color == color)
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> {
        self.pieces.iter().filter(move |p| p.color == color)
    }

    /// Occupied squares in board order for redrawing a grid.
    pub fn placements(&self) -> Vec<Placement> {
        self.pieces.iter().map(Placement::from).collect()
    }

    /// Puts a new piece on a vacant square.
    pub fn place(&mut self, piece: Piece) -> Result<(), RulesError> {
        if self.is_occupied(piece.square) {
            return Err(SetupIssue::SquareOccupied(piece.square).into());
        }
        self.pieces.push(piece);
        Ok(())
    }

    /// Takes the piece off `square`, if any.
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.index_of(square).map(|i| self.pieces.remove(i))
    }

    /// Moves the piece on `from` to `to`, capturing whatever stands there.
    /// Clears the mover's castling eligibility. Does no legality checking.
    pub(crate) fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let captured = self.remove(to);
        if let Some(i) = self.index_of(from) {
            self.pieces[i].square = to;
            self.pieces[i].mark_moved();
        }
        captured
    }

    /// Replaces the piece on `square` with a fresh piece of `kind`, same color.
    pub(crate) fn promote(&mut self, square: Square, kind: PieceType) {
        if let Some(i) = self.index_of(square) {
            let color = self.pieces[i].color;
            let mut promoted = Piece::new(kind, color, square);
            promoted.mark_moved();
            self.pieces[i] = promoted;
        }
    }

    /// Puts king and rook straight onto their castled squares.
    pub(crate) fn castle(&mut self, color: Color, side: CastleSide) {
        self.relocate(side.king_origin(color), side.king_destination(color));
        self.relocate(side.rook_origin(color), side.rook_destination(color));
    }

    /// Tentatively moves the piece on `from` to `to`, capturing whatever is
    /// there. The returned guard dereferences to the changed position and puts
    /// everything back when dropped, including during a panic.
    ///
    /// Returns `None` if `from` is empty.
    pub fn simulate(&mut self, from: Square, to: Square) -> Option<Simulation<'_>> {
        self.index_of(from)?;
        let captured = self.index_of(to).map(|i| (i, self.pieces.remove(i)));
        let mover = self.index_of(from)?;
        self.pieces[mover].square = to;
        Some(Simulation { position: self, mover, origin: from, captured })
    }
}

/// A move applied for inspection only; see [`Position::simulate`].
pub struct Simulation<'a> {
    position: &'a mut Position,
    mover: usize,
    origin: Square,
    captured: Option<(usize, Piece)>,
}

impl Deref for Simulation<'_> {
    type Target = Position;

    fn deref(&self) -> &Position {
        self.position
    }
}

impl Drop for Simulation<'_> {
    fn drop(&mut self) {
        self.position.pieces[self.mover].square = self.origin;
        if let Some((i, piece)) = self.captured.take() {
            self.position.pieces.insert(i, piece);
        }
    }
}
