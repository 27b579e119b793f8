//! Ray walking and fixed-offset stepping shared by the piece move rules.
//!
//! Every destination is bounds-checked through `Square::offset`, so these
//! helpers can never step off the grid.

use crate::game_state::chess_types::*;

pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Walks each direction until the edge or the first occupied square.
///
/// The blocker is a destination only when it belongs to the other side.
pub fn generate_sliding_moves(
    board: &Board,
    from: Square,
    color: Color,
    directions: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    for &(d_row, d_col) in directions {
        let mut cursor = from.offset(d_row, d_col);
        while let Some(to) = cursor {
            match board.color_at(to) {
                None => out.push(to),
                Some(occupant) => {
                    if occupant != color {
                        out.push(to);
                    }
                    break;
                }
            }
            cursor = to.offset(d_row, d_col);
        }
    }
}

/// Single-step targets: in bounds and not held by a friendly piece.
pub fn generate_step_moves(
    board: &Board,
    from: Square,
    color: Color,
    offsets: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    for &(d_row, d_col) in offsets {
        if let Some(to) = from.offset(d_row, d_col) {
            if !board.is_occupied_by(to, color) {
                out.push(to);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slide_stops_on_friendly_blocker_without_including_it() {
        let mut board = Board::empty();
        let a1 = Square::new(7, 0);
        board.set_piece(a1, Piece::new(PieceKind::Rook, Color::White));
        board.set_piece(Square::new(4, 0), Piece::new(PieceKind::Pawn, Color::White));

        let mut out = Vec::new();
        generate_sliding_moves(&board, a1, Color::White, &[(-1, 0)], &mut out);
        assert_eq!(out, vec![Square::new(6, 0), Square::new(5, 0)]);
    }

    #[test]
    fn slide_includes_enemy_blocker_then_stops() {
        let mut board = Board::empty();
        let a1 = Square::new(7, 0);
        board.set_piece(a1, Piece::new(PieceKind::Rook, Color::White));
        board.set_piece(Square::new(5, 0), Piece::new(PieceKind::Pawn, Color::Black));
        board.set_piece(Square::new(3, 0), Piece::new(PieceKind::Pawn, Color::Black));

        let mut out = Vec::new();
        generate_sliding_moves(&board, a1, Color::White, &[(-1, 0)], &mut out);
        assert_eq!(out, vec![Square::new(6, 0), Square::new(5, 0)]);
    }
}
