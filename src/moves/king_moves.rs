use crate::game_state::chess_types::*;
use crate::moves::sliding_moves::generate_step_moves;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Adjacent squares only; there is no castling.
pub fn generate_king_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    generate_step_moves(board, from, color, &KING_OFFSETS, out);
}
