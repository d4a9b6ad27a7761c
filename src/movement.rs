// Movement patterns per piece kind.
//
// The raw generators answer "which squares could this piece reach or attack",
// ignoring whose turn it is and whether the mover's king ends up in check.
// Sliding rays include the first occupied square whatever its color; the
// allowed step afterwards drops own-color destinations.

use crate::geometry::{adjacent, ray, Direction};
use crate::piece::{Color, Piece, PieceType};
use crate::position::Position;
use crate::square::Square;

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2), (2, 1), (2, -1), (1, -2),
    (-1, -2), (-2, -1), (-2, 1), (-1, 2),
];

fn sliding_movements(square: Square, position: &Position, directions: &[Direction]) -> Vec<Square> {
    let mut movements = Vec::new();
    for &dir in directions {
        for target in ray(square, dir) {
            movements.push(target);
            if position.is_occupied(target) {
                break;
            }
        }
    }
    movements
}

pub fn rook_movements(square: Square, position: &Position) -> Vec<Square> {
    sliding_movements(square, position, &Direction::ORTHOGONAL)
}

pub fn bishop_movements(square: Square, position: &Position) -> Vec<Square> {
    sliding_movements(square, position, &Direction::DIAGONAL)
}

pub fn queen_movements(square: Square, position: &Position) -> Vec<Square> {
    sliding_movements(square, position, &Direction::ALL)
}

pub fn knight_movements(square: Square) -> Vec<Square> {
    KNIGHT_OFFSETS
        .iter()
        .filter_map(|&(dc, dr)| square.offset(dc, dr))
        .collect()
}

/// The eight neighbours; whether they are safe is decided by the legality
/// engine.
pub fn king_movements(square: Square) -> Vec<Square> {
    Direction::ALL.iter().filter_map(|&dir| adjacent(square, dir)).collect()
}

/// Forward pushes: one square if empty, two from the starting row if both
/// squares are empty.
pub fn pawn_movements(color: Color, square: Square, position: &Position) -> Vec<Square> {
    let mut movements = Vec::new();
    let Some(one) = square.offset(0, color.forward()) else {
        return movements;
    };
    if position.is_occupied(one) {
        return movements;
    }
    movements.push(one);
    if square.row() == color.pawn_row() {
        if let Some(two) = one.offset(0, color.forward()) {
            if !position.is_occupied(two) {
                movements.push(two);
            }
        }
    }
    movements
}

/// The two forward diagonals, occupied or not.
pub fn pawn_attacks(color: Color, square: Square) -> Vec<Square> {
    [1, -1]
        .iter()
        .filter_map(|&dc| square.offset(dc, color.forward()))
        .collect()
}

/// Squares the piece attacks: its raw movement set, except that pawns attack
/// only their diagonals.
pub fn attack_squares(piece: &Piece, position: &Position) -> Vec<Square> {
    match piece.kind {
        PieceType::Rook => rook_movements(piece.square, position),
        PieceType::Knight => knight_movements(piece.square),
        PieceType::Bishop => bishop_movements(piece.square, position),
        PieceType::Queen => queen_movements(piece.square, position),
        PieceType::King => king_movements(piece.square),
        PieceType::Pawn => pawn_attacks(piece.color, piece.square),
    }
}

/// Destinations the piece may move to, not yet filtered for self-check.
/// Own pieces are never capturable; a pawn's diagonal needs an enemy on it.
pub fn allowed_movements(piece: &Piece, position: &Position) -> Vec<Square> {
    let not_own = |sq: &Square| position.color_at(*sq) != Some(piece.color);
    match piece.kind {
        PieceType::Pawn => {
            let mut movements = pawn_movements(piece.color, piece.square, position);
            movements.extend(
                pawn_attacks(piece.color, piece.square)
                    .into_iter()
                    .filter(|sq| position.color_at(*sq) == Some(piece.color.opposite())),
            );
            movements
        }
        _ => attack_squares(piece, position).into_iter().filter(not_own).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    fn names(squares: &[Square]) -> Vec<String> {
        let mut v: Vec<String> = squares.iter().map(|s| s.to_string()).collect();
        v.sort();
        v
    }

    fn with(pieces: &[(PieceType, Color, &str)]) -> Position {
        let mut pos = Position::empty();
        for &(kind, color, name) in pieces {
            pos.place(Piece::new(kind, color, sq(name))).unwrap();
        }
        pos
    }

    #[test]
    fn rook_ray_includes_blocker_and_stops() {
        let pos = with(&[
            (PieceType::Rook, Color::White, "d4"),
            (PieceType::Pawn, Color::Black, "d6"),
            (PieceType::Pawn, Color::White, "f4"),
        ]);
        let moves = rook_movements(sq("d4"), &pos);
        assert!(moves.contains(&sq("d6")), "blocking square is reachable");
        assert!(!moves.contains(&sq("d7")), "ray does not pass the blocker");
        assert!(moves.contains(&sq("f4")), "raw set includes own blocker");
        assert!(!moves.contains(&sq("g4")));
        assert_eq!(moves.len(), 2 + 3 + 3 + 2);

        let rook = pos.piece_at(sq("d4")).unwrap();
        let allowed = allowed_movements(rook, &pos);
        assert!(!allowed.contains(&sq("f4")), "own piece is not a destination");
        assert!(allowed.contains(&sq("d6")));
    }

    #[test]
    fn queen_is_rook_plus_bishop() {
        let pos = with(&[(PieceType::Queen, Color::White, "c3")]);
        let mut expected = rook_movements(sq("c3"), &pos);
        expected.extend(bishop_movements(sq("c3"), &pos));
        assert_eq!(names(&queen_movements(sq("c3"), &pos)), names(&expected));
    }

    #[test]
    fn knight_offsets_stay_on_board() {
        assert_eq!(names(&knight_movements(sq("a1"))), vec!["b3", "c2"]);
        assert_eq!(knight_movements(sq("d4")).len(), 8);
        assert_eq!(names(&knight_movements(sq("h8"))), vec!["f7", "g6"]);
    }

    #[test]
    fn king_has_eight_neighbours_in_the_middle() {
        assert_eq!(king_movements(sq("e4")).len(), 8);
        assert_eq!(names(&king_movements(sq("h1"))), vec!["g1", "g2", "h2"]);
    }

    #[test]
    fn pawn_double_step_only_from_start_row() {
        let pos = with(&[
            (PieceType::Pawn, Color::White, "e2"),
            (PieceType::Pawn, Color::Black, "d7"),
            (PieceType::Pawn, Color::Black, "c5"),
        ]);
        assert_eq!(names(&pawn_movements(Color::White, sq("e2"), &pos)), vec!["e3", "e4"]);
        assert_eq!(names(&pawn_movements(Color::Black, sq("d7"), &pos)), vec!["d5", "d6"]);
        assert_eq!(names(&pawn_movements(Color::Black, sq("c5"), &pos)), vec!["c4"]);
    }

    #[test]
    fn pawn_blocked_directly_cannot_jump() {
        let pos = with(&[
            (PieceType::Pawn, Color::White, "e2"),
            (PieceType::Knight, Color::Black, "e3"),
        ]);
        assert!(pawn_movements(Color::White, sq("e2"), &pos).is_empty());

        let pos = with(&[
            (PieceType::Pawn, Color::White, "e2"),
            (PieceType::Knight, Color::Black, "e4"),
        ]);
        assert_eq!(names(&pawn_movements(Color::White, sq("e2"), &pos)), vec!["e3"]);
    }

    #[test]
    fn pawn_captures_only_enemies_diagonally() {
        let pos = with(&[
            (PieceType::Pawn, Color::White, "d4"),
            (PieceType::Knight, Color::Black, "e5"),
            (PieceType::Knight, Color::White, "c5"),
            (PieceType::Bishop, Color::Black, "d5"),
        ]);
        let pawn = pos.piece_at(sq("d4")).unwrap();
        assert_eq!(names(&allowed_movements(pawn, &pos)), vec!["e5"]);
        assert_eq!(names(&attack_squares(pawn, &pos)), vec!["c5", "e5"]);
    }
}
