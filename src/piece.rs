use std::fmt;

use serde::{Deserialize, Serialize};

use crate::square::Square;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    #[serde(rename = "w")]
    White,
    #[serde(rename = "b")]
    Black,
}

impl Color {
    pub fn opposite(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }

    pub fn from_letter(c: char) -> Option<Color> {
        match c.to_ascii_lowercase() {
            'w' => Some(Color::White),
            'b' => Some(Color::Black),
            _ => None,
        }
    }

    /// Row holding this side's king and rooks at the start.
    pub fn back_row(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Row this side's pawns start on.
    pub fn pawn_row(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// Row on which this side's pawns promote.
    pub fn promotion_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Row step of a pawn advance.
    pub fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// Piece kinds, serialized as their notation letter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceType {
    #[serde(rename = "R")]
    Rook,
    #[serde(rename = "N")]
    Knight,
    #[serde(rename = "B")]
    Bishop,
    #[serde(rename = "Q")]
    Queen,
    #[serde(rename = "K")]
    King,
    #[serde(rename = "P")]
    Pawn,
}

impl PieceType {
    /// Kinds a pawn may promote to.
    pub const PROMOTIONS: [PieceType; 4] =
        [PieceType::Rook, PieceType::Knight, PieceType::Bishop, PieceType::Queen];

    pub fn letter(self) -> char {
        match self {
            PieceType::Rook => 'R',
            PieceType::Knight => 'N',
            PieceType::Bishop => 'B',
            PieceType::Queen => 'Q',
            PieceType::King => 'K',
            PieceType::Pawn => 'P',
        }
    }

    /// Case-insensitive.
    pub fn from_letter(c: char) -> Option<PieceType> {
        match c.to_ascii_uppercase() {
            'R' => Some(PieceType::Rook),
            'N' => Some(PieceType::Knight),
            'B' => Some(PieceType::Bishop),
            'Q' => Some(PieceType::Queen),
            'K' => Some(PieceType::King),
            'P' => Some(PieceType::Pawn),
            _ => None,
        }
    }

    pub fn is_promotion_choice(self) -> bool {
        Self::PROMOTIONS.contains(&self)
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A piece on the board.
///
/// `unmoved` only matters for rooks and kings: it is the castling
/// eligibility flag, cleared the first time the piece moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceType,
    pub color: Color,
    pub square: Square,
    unmoved: bool,
}

impl Piece {
    pub fn new(kind: PieceType, color: Color, square: Square) -> Self {
        Piece { kind, color, square, unmoved: true }
    }

    /// True for a rook or king that has never moved.
    pub fn can_castle(&self) -> bool {
        matches!(self.kind, PieceType::Rook | PieceType::King) && self.unmoved
    }

    pub fn has_moved(&self) -> bool {
        !self.unmoved
    }

    pub(crate) fn mark_moved(&mut self) {
        self.unmoved = false;
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}-{}", self.kind.letter(), self.color.letter(), self.square)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_round_trip() {
        for c in ['R', 'N', 'B', 'Q', 'K', 'P'] {
            assert_eq!(PieceType::from_letter(c).map(PieceType::letter), Some(c));
        }
        assert_eq!(PieceType::from_letter('n'), Some(PieceType::Knight));
        assert_eq!(PieceType::from_letter('X'), None);
        assert_eq!(Color::from_letter('B'), Some(Color::Black));
    }

    #[test]
    fn only_rooks_and_kings_carry_castling_eligibility() {
        let sq = Square::at(0, 0);
        assert!(Piece::new(PieceType::Rook, Color::White, sq).can_castle());
        assert!(Piece::new(PieceType::King, Color::White, sq).can_castle());
        assert!(!Piece::new(PieceType::Queen, Color::White, sq).can_castle());

        let mut rook = Piece::new(PieceType::Rook, Color::Black, sq);
        rook.mark_moved();
        assert!(!rook.can_castle());
    }

    #[test]
    fn promotion_choices_exclude_king_and_pawn() {
        assert!(PieceType::Queen.is_promotion_choice());
        assert!(PieceType::Knight.is_promotion_choice());
        assert!(!PieceType::King.is_promotion_choice());
        assert!(!PieceType::Pawn.is_promotion_choice());
    }
}
