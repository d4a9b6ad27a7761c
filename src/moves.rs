use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RulesError;
use crate::piece::{Color, PieceType};
use crate::square::Square;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    /// Input and notation token, `0-0` or `0-0-0`.
    pub fn token(self) -> &'static str {
        match self {
            CastleSide::Kingside => "0-0",
            CastleSide::Queenside => "0-0-0",
        }
    }

    /// Square the king starts castling from.
    pub fn king_origin(self, color: Color) -> Square {
        Square::at(4, color.back_row())
    }

    pub fn king_destination(self, color: Color) -> Square {
        match self {
            CastleSide::Kingside => Square::at(6, color.back_row()),
            CastleSide::Queenside => Square::at(2, color.back_row()),
        }
    }

    pub fn rook_origin(self, color: Color) -> Square {
        match self {
            CastleSide::Kingside => Square::at(7, color.back_row()),
            CastleSide::Queenside => Square::at(0, color.back_row()),
        }
    }

    pub fn rook_destination(self, color: Color) -> Square {
        match self {
            CastleSide::Kingside => Square::at(5, color.back_row()),
            CastleSide::Queenside => Square::at(3, color.back_row()),
        }
    }

    /// Squares strictly between king and rook; all must be empty.
    pub fn between(self, color: Color) -> Vec<Square> {
        let cols: &[u8] = match self {
            CastleSide::Kingside => &[5, 6],
            CastleSide::Queenside => &[3, 2, 1],
        };
        cols.iter().map(|&c| Square::at(c, color.back_row())).collect()
    }

    /// The king's square, the square it crosses and its destination; none may
    /// be threatened.
    pub fn king_path(self, color: Color) -> [Square; 3] {
        let row = color.back_row();
        match self {
            CastleSide::Kingside => [Square::at(4, row), Square::at(5, row), Square::at(6, row)],
            CastleSide::Queenside => [Square::at(4, row), Square::at(3, row), Square::at(2, row)],
        }
    }
}

impl fmt::Display for CastleSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CastleSide::Kingside => write!(f, "kingside"),
            CastleSide::Queenside => write!(f, "queenside"),
        }
    }
}

/// A move record: either a piece going from one square to another, or a
/// castle.
///
/// `promotion` is the kind a pawn becomes on the last row; `None` there means
/// the default (queen). It must be `None` for every other move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Regular {
        piece: PieceType,
        from: Square,
        to: Square,
        promotion: Option<PieceType>,
    },
    Castle(CastleSide),
}

impl Move {
    pub fn new(piece: PieceType, from: Square, to: Square) -> Self {
        Move::Regular { piece, from, to, promotion: None }
    }

    pub fn with_promotion(self, kind: PieceType) -> Self {
        match self {
            Move::Regular { piece, from, to, .. } => {
                Move::Regular { piece, from, to, promotion: Some(kind) }
            }
            castle => castle,
        }
    }

    pub fn promotion(&self) -> Option<PieceType> {
        match self {
            Move::Regular { promotion, .. } => *promotion,
            Move::Castle(_) => None,
        }
    }

    /// Same piece, origin and destination (or same castle), ignoring the
    /// promotion choice.
    pub fn same_path(&self, other: &Move) -> bool {
        match (self, other) {
            (
                Move::Regular { piece, from, to, .. },
                Move::Regular { piece: p, from: f, to: t, .. },
            ) => piece == p && from == f && to == t,
            (Move::Castle(a), Move::Castle(b)) => a == b,
            _ => false,
        }
    }

    /// Input form without promotion, e.g. `Ng1-f3` or `0-0`.
    pub fn to_input(&self) -> String {
        match self {
            Move::Regular { piece, from, to, .. } => format!("{}{from}-{to}", piece.letter()),
            Move::Castle(side) => side.token().to_string(),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_input())?;
        if let Some(kind) = self.promotion() {
            write!(f, "={}", kind.letter())?;
        }
        Ok(())
    }
}

/// Parses the move input grammar: `0-0`, `0-0-0`, or
/// `<Piece><col><row>-<col><row>` such as `Ng1-f3`.
impl FromStr for Move {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || RulesError::MalformedInput(s.to_string());
        match s {
            "0-0" => return Ok(Move::Castle(CastleSide::Kingside)),
            "0-0-0" => return Ok(Move::Castle(CastleSide::Queenside)),
            _ => {}
        }
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 6 || chars[3] != '-' {
            return Err(malformed());
        }
        let piece = PieceType::from_letter(chars[0]).ok_or_else(malformed)?;
        let from = Square::from_chars(chars[1], chars[2]).ok_or_else(malformed)?;
        let to = Square::from_chars(chars[4], chars[5]).ok_or_else(malformed)?;
        Ok(Move::new(piece, from, to))
    }
}
