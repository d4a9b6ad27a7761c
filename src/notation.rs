//! Recorded move notation and the setting-mode placement grammar.
//!
//! Recorded tokens extend the move input grammar: `Pe7-e8=Q` for a promotion,
//! and a trailing `+` or `#` when the move leaves the opponent in check or
//! checkmate. Castles are recorded as `0-0` / `0-0-0` with the same suffixes.

use serde::{Deserialize, Serialize};

use crate::error::RulesError;
use crate::moves::Move;
use crate::piece::{Color, Piece, PieceType};
use crate::rules::Verdict;
use crate::square::Square;

/// Notation for a move that has just been applied.
///
/// `promoted` is the kind the pawn became, if the move promoted; `opponent`
/// is the side to move afterwards.
pub fn encode(mv: &Move, promoted: Option<PieceType>, opponent: &Verdict) -> String {
    let mut token = mv.to_input();
    if let (Move::Regular { .. }, Some(kind)) = (mv, promoted) {
        token.push('=');
        token.push(kind.letter());
    }
    if opponent.is_checkmate() {
        token.push('#');
    } else if opponent.in_check {
        token.push('+');
    }
    token
}

/// Parses a recorded token back into a move. Check suffixes are accepted and
/// ignored; they are re-derived when the move is replayed.
pub fn decode(token: &str) -> Result<Move, RulesError> {
    let body = token.trim_end_matches(['+', '#']);
    let (mv_part, promotion) = match body.split_once('=') {
        Some((mv_part, promo)) => {
            let mut chars = promo.chars();
            let letter = match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => return Err(RulesError::MalformedInput(token.to_string())),
            };
            (mv_part, Some(promotion_choice(letter)?))
        }
        None => (body, None),
    };
    let mv: Move = mv_part
        .parse()
        .map_err(|_| RulesError::MalformedInput(token.to_string()))?;
    match (mv, promotion) {
        (Move::Castle(_), Some(_)) => Err(RulesError::MalformedInput(token.to_string())),
        (mv, Some(kind)) => Ok(mv.with_promotion(kind)),
        (mv, None) => Ok(mv),
    }
}

/// Maps a promotion letter to its kind; only R, N, B and Q are accepted.
pub fn promotion_choice(letter: char) -> Result<PieceType, RulesError> {
    PieceType::from_letter(letter)
        .filter(|kind| kind.is_promotion_choice())
        .ok_or(RulesError::InvalidPromotionChoice(letter))
}

/// Parses the setting grammar `<Piece><color>-<col><row>`, e.g. `Rw-e4`.
pub fn parse_placement(input: &str) -> Result<Piece, RulesError> {
    let malformed = || RulesError::MalformedInput(input.to_string());
    let chars: Vec<char> = input.chars().collect();
    if chars.len() != 5 || chars[2] != '-' {
        return Err(malformed());
    }
    let kind = PieceType::from_letter(chars[0]).ok_or_else(malformed)?;
    let color = Color::from_letter(chars[1]).ok_or_else(malformed)?;
    let square = Square::from_chars(chars[3], chars[4]).ok_or_else(malformed)?;
    Ok(Piece::new(kind, color, square))
}

/// Notation of a game so far, one column per color.
///
/// `first` is the side that made the first move; a game set up with black
/// to move starts with black's column.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveLog {
    pub first: Color,
    pub white: Vec<String>,
    pub black: Vec<String>,
}

impl MoveLog {
    pub fn new(first: Color) -> Self {
        MoveLog { first, white: Vec::new(), black: Vec::new() }
    }

    pub fn push(&mut self, color: Color, token: String) {
        match color {
            Color::White => self.white.push(token),
            Color::Black => self.black.push(token),
        }
    }

    pub fn len(&self) -> usize {
        self.white.len() + self.black.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All tokens in the order they were played.
    pub fn half_moves(&self) -> Vec<&str> {
        let (a, b) = match self.first {
            Color::White => (&self.white, &self.black),
            Color::Black => (&self.black, &self.white),
        };
        let mut out = Vec::with_capacity(self.len());
        for i in 0..a.len().max(b.len()) {
            if let Some(t) = a.get(i) {
                out.push(t.as_str());
            }
            if let Some(t) = b.get(i) {
                out.push(t.as_str());
            }
        }
        out
    }

    /// Side that plays half-move `index` (0-based).
    pub fn color_of(&self, index: usize) -> Color {
        if index % 2 == 0 {
            self.first
        } else {
            self.first.opposite()
        }
    }
}
