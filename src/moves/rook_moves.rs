use crate::game_state::chess_types::*;
use crate::moves::sliding_moves::{generate_sliding_moves, ORTHOGONAL_DIRECTIONS};

pub fn generate_rook_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    generate_sliding_moves(board, from, color, &ORTHOGONAL_DIRECTIONS, out);
}
