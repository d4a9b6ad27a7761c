use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RulesError;

const ASCII_LOWER_A: u8 = b'a';
const ASCII_1: u8 = b'1';

/// A square on the 8×8 board.
///
/// `col` 0 is column a, `row` 0 is row 1. A `Square` can only be built for
/// coordinates on the board, so every value in circulation is valid.
///
/// Squares serialize as their name, e.g. `"e4"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Square {
    col: u8,
    row: u8,
}

impl Square {
    /// Returns `None` if either coordinate is off the board.
    pub fn new(col: u8, row: u8) -> Option<Self> {
        if col < 8 && row < 8 {
            Some(Square { col, row })
        } else {
            None
        }
    }

    /// Builds a square from coordinates known to be on the board.
    pub(crate) const fn at(col: u8, row: u8) -> Self {
        assert!(col < 8 && row < 8);
        Square { col, row }
    }

    pub fn col(self) -> u8 {
        self.col
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn col_char(self) -> char {
        (ASCII_LOWER_A + self.col) as char
    }

    pub fn row_char(self) -> char {
        (ASCII_1 + self.row) as char
    }

    /// The square `dc` columns right and `dr` rows up, if it is on the board.
    pub fn offset(self, dc: i8, dr: i8) -> Option<Square> {
        let col = self.col as i8 + dc;
        let row = self.row as i8 + dr;
        if (0..8).contains(&col) && (0..8).contains(&row) {
            Some(Square::at(col as u8, row as u8))
        } else {
            None
        }
    }

    /// Parses a column letter (either case) and a row digit.
    pub fn from_chars(col: char, row: char) -> Option<Self> {
        let col = col.to_ascii_lowercase();
        if !('a'..='h').contains(&col) || !('1'..='8').contains(&row) {
            return None;
        }
        Square::new(col as u8 - ASCII_LOWER_A, row as u8 - ASCII_1)
    }

    /// Iterates over all 64 squares, row 1 first.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8).flat_map(|row| (0..8).map(move |col| Square::at(col, row)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.col_char(), self.row_char())
    }
}

impl FromStr for Square {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(c), Some(r), None) => {
                Square::from_chars(c, r).ok_or_else(|| RulesError::MalformedInput(s.to_string()))
            }
            _ => Err(RulesError::MalformedInput(s.to_string())),
        }
    }
}

impl TryFrom<String> for Square {
    type Error = RulesError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Square> for String {
    fn from(sq: Square) -> String {
        sq.to_string()
    }
}
