// Board geometry: column/row neighbourhoods and rays over the 8×8 grid.
//
// Columns and rows are indices 0..8 (column a = 0, row 1 = 0). Every helper
// walks outward from its argument and yields nothing past the edge.

use std::iter::Rev;
use std::ops::Range;

use crate::square::Square;

/// Columns strictly to the right of `col`, nearest first.
pub fn columns_right(col: u8) -> Range<u8> {
    col.saturating_add(1).min(8)..8
}

/// Columns strictly to the left of `col`, nearest first.
pub fn columns_left(col: u8) -> Rev<Range<u8>> {
    (0..col.min(8)).rev()
}

/// Rows strictly above `row`, nearest first.
pub fn rows_above(row: u8) -> Range<u8> {
    row.saturating_add(1).min(8)..8
}

/// Rows strictly below `row`, nearest first.
pub fn rows_below(row: u8) -> Rev<Range<u8>> {
    (0..row.min(8)).rev()
}

pub fn right_adjacent(col: u8) -> Option<u8> {
    columns_right(col).next()
}

pub fn left_adjacent(col: u8) -> Option<u8> {
    columns_left(col).next()
}

pub fn upper_adjacent(row: u8) -> Option<u8> {
    rows_above(row).next()
}

pub fn lower_adjacent(row: u8) -> Option<u8> {
    rows_below(row).next()
}

/// One of the eight compass directions, "up" meaning toward row 8.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpRight,
    UpLeft,
    DownRight,
    DownLeft,
}

impl Direction {
    pub const ORTHOGONAL: [Direction; 4] =
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub const DIAGONAL: [Direction; 4] = [
        Direction::UpRight,
        Direction::UpLeft,
        Direction::DownRight,
        Direction::DownLeft,
    ];

    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::UpRight,
        Direction::UpLeft,
        Direction::DownRight,
        Direction::DownLeft,
    ];

    /// Column and row step, each in -1..=1.
    pub fn step(self) -> (i8, i8) {
        match self {
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::UpRight => (1, 1),
            Direction::UpLeft => (-1, 1),
            Direction::DownRight => (1, -1),
            Direction::DownLeft => (-1, -1),
        }
    }
}

fn columns_toward(col: u8, step: i8) -> Vec<u8> {
    match step {
        1 => columns_right(col).collect(),
        -1 => columns_left(col).collect(),
        _ => vec![col; 8],
    }
}

fn rows_toward(row: u8, step: i8) -> Vec<u8> {
    match step {
        1 => rows_above(row).collect(),
        -1 => rows_below(row).collect(),
        _ => vec![row; 8],
    }
}

/// Squares from `from` (exclusive) to the board edge in direction `dir`,
/// nearest first. Built by pairing the column and row sequences, so it ends
/// as soon as either runs out.
pub fn ray(from: Square, dir: Direction) -> impl Iterator<Item = Square> {
    let (dc, dr) = dir.step();
    columns_toward(from.col(), dc)
        .into_iter()
        .zip(rows_toward(from.row(), dr))
        .filter_map(|(col, row)| Square::new(col, row))
}

/// The nearest square in `dir`, or `None` at the edge.
pub fn adjacent(from: Square, dir: Direction) -> Option<Square> {
    ray(from, dir).next()
}
