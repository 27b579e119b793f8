//! Per-piece pseudo-legal destination dispatch.
//!
//! Ignores whether the move exposes the mover's own king. Attack detection is
//! built on this generator, never on the filtered one, which keeps legality
//! filtering and attack detection from recursing into each other.

use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::generate_bishop_moves;
use crate::moves::king_moves::generate_king_moves;
use crate::moves::knight_moves::generate_knight_moves;
use crate::moves::pawn_moves::generate_pawn_moves;
use crate::moves::queen_moves::generate_queen_moves;
use crate::moves::rook_moves::generate_rook_moves;

/// Destinations of the piece on `from`. Empty when `from` is empty.
pub fn pseudo_legal_destinations(board: &Board, from: Square) -> Vec<Square> {
    let mut out = Vec::with_capacity(28);
    generate_pseudo_legal_destinations(board, from, &mut out);
    out
}

pub fn generate_pseudo_legal_destinations(board: &Board, from: Square, out: &mut Vec<Square>) {
    let Some(piece) = board.piece_at(from) else {
        return;
    };

    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(board, from, piece.color, out),
        PieceKind::Knight => generate_knight_moves(board, from, piece.color, out),
        PieceKind::Bishop => generate_bishop_moves(board, from, piece.color, out),
        PieceKind::Rook => generate_rook_moves(board, from, piece.color, out),
        PieceKind::Queen => generate_queen_moves(board, from, piece.color, out),
        PieceKind::King => generate_king_moves(board, from, piece.color, out),
    }
}
