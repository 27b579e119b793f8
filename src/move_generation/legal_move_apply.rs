//! Board transitions for a single move.
//!
//! `simulate_move` is the bare relocation used by the legality filter.
//! `apply_move` is the full transition used by the game, including the forced
//! promotion of a pawn that reaches the far back rank.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::promotion_row;
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    pub board_after: Board,
    pub moved_piece: Piece,
    pub captured_piece: Option<Piece>,
    pub promoted: bool,
}

/// Copy of `board` with the piece on `mv.from` moved to `mv.to`.
/// Promotion is skipped because it never changes whether the mover's king
/// is attacked.
#[inline]
pub fn simulate_move(board: &Board, mv: Move) -> Board {
    let mut next = *board;
    if let Some(piece) = next.remove_piece(mv.from) {
        next.set_piece(mv.to, piece);
    }
    next
}

/// Does not check legality; callers validate against the legal move list
/// first.
pub fn apply_move(board: &Board, mv: Move) -> ChessResult<AppliedMove> {
    let mut next = *board;
    let moved_piece = next.remove_piece(mv.from).ok_or_else(|| ChessError::IllegalMove {
        from: mv.from.to_string(),
        to: mv.to.to_string(),
        reason: "no piece on origin square".to_owned(),
    })?;

    let captured_piece = next.remove_piece(mv.to);

    let promoted =
        moved_piece.kind == PieceKind::Pawn && mv.to.row() == promotion_row(moved_piece.color);
    let placed = if promoted {
        Piece::new(PieceKind::Queen, moved_piece.color)
    } else {
        moved_piece
    };
    next.set_piece(mv.to, placed);

    Ok(AppliedMove {
        board_after: next,
        moved_piece,
        captured_piece,
        promoted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn simulate_move_leaves_original_untouched() {
        let board = Board::starting();
        let mv = Move::new(Square::new(6, 4), Square::new(4, 4));
        let next = simulate_move(&board, mv);
        assert!(board.is_empty(Square::new(4, 4)));
        assert!(next.is_empty(Square::new(6, 4)));
        assert_eq!(next.piece_at(Square::new(4, 4)), board.piece_at(Square::new(6, 4)));
    }

    #[test]
    fn capture_overwrites_destination() {
        let (board, _) = parse_fen("4k3/8/8/3p4/4P3/8/8/4K3 w").expect("fen should parse");
        let applied = apply_move(&board, Move::new(Square::new(4, 4), Square::new(3, 3)))
            .expect("apply should succeed");
        assert_eq!(
            applied.captured_piece,
            Some(Piece::new(PieceKind::Pawn, Color::Black))
        );
        assert_eq!(
            applied.board_after.piece_at(Square::new(3, 3)),
            Some(Piece::new(PieceKind::Pawn, Color::White))
        );
        assert!(!applied.promoted);
    }

    #[test]
    fn pawn_reaching_back_rank_becomes_queen() {
        let (board, _) = parse_fen("1n2k3/P7/8/8/8/8/p7/4K3 w").expect("fen should parse");

        let white = apply_move(&board, Move::new(Square::new(1, 0), Square::new(0, 1)))
            .expect("apply should succeed");
        assert!(white.promoted);
        assert_eq!(
            white.board_after.piece_at(Square::new(0, 1)),
            Some(Piece::new(PieceKind::Queen, Color::White))
        );

        let black = apply_move(&board, Move::new(Square::new(6, 0), Square::new(7, 0)))
            .expect("apply should succeed");
        assert!(black.promoted);
        assert_eq!(
            black.board_after.piece_at(Square::new(7, 0)),
            Some(Piece::new(PieceKind::Queen, Color::Black))
        );
    }

    #[test]
    fn non_pawn_on_back_rank_is_not_promoted() {
        let (board, _) = parse_fen("4k3/R7/8/8/8/8/8/4K3 w").expect("fen should parse");
        let applied = apply_move(&board, Move::new(Square::new(1, 0), Square::new(0, 0)))
            .expect("apply should succeed");
        assert!(!applied.promoted);
        assert_eq!(
            applied.board_after.piece_at(Square::new(0, 0)),
            Some(Piece::new(PieceKind::Rook, Color::White))
        );
    }

    #[test]
    fn empty_origin_is_rejected() {
        let board = Board::starting();
        let err = apply_move(&board, Move::new(Square::new(4, 4), Square::new(3, 4)))
            .expect_err("empty origin should fail");
        assert!(matches!(err, ChessError::IllegalMove { .. }));
    }
}
