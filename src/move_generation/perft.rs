//! Perft node counting over the legal move generator.
//!
//! Used as a correctness oracle in tests and as the benchmark workload. Counts
//! follow the usual convention: captures, promotions, checks and mates are
//! tallied for the moves made at the final ply only.

use std::thread;

use crate::errors::ChessResult;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{all_legal_moves, has_any_legal_move};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft(board: &Board, side_to_move: Color, depth: u8) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    perft_recurse(board, side_to_move, depth, &mut total)?;
    Ok(total)
}

/// Splits the root moves across scoped worker threads. Each worker owns an
/// independent copy of its child board.
pub fn perft_multi_threaded(
    board: &Board,
    side_to_move: Color,
    depth: u8,
) -> ChessResult<PerftCounts> {
    if depth <= 1 {
        return perft(board, side_to_move, depth);
    }

    let root_moves = all_legal_moves(board, side_to_move);
    let mut children = Vec::with_capacity(root_moves.len());
    for mv in root_moves {
        children.push(apply_move(board, mv)?.board_after);
    }

    let results: Vec<ChessResult<PerftCounts>> = thread::scope(|scope| {
        let handles: Vec<_> = children
            .into_iter()
            .map(|child| scope.spawn(move || perft(&child, side_to_move.opposite(), depth - 1)))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or_else(|panic| std::panic::resume_unwind(panic)))
            .collect()
    });

    let mut total = PerftCounts::default();
    for result in results {
        total.merge(result?);
    }
    Ok(total)
}

fn perft_recurse(
    board: &Board,
    side_to_move: Color,
    depth: u8,
    counts: &mut PerftCounts,
) -> ChessResult<()> {
    for mv in all_legal_moves(board, side_to_move) {
        let applied = apply_move(board, mv)?;

        if depth > 1 {
            perft_recurse(&applied.board_after, side_to_move.opposite(), depth - 1, counts)?;
            continue;
        }

        counts.nodes += 1;
        if applied.captured_piece.is_some() {
            counts.captures += 1;
        }
        if applied.promoted {
            counts.promotions += 1;
        }
        let opponent = side_to_move.opposite();
        if is_king_in_check(&applied.board_after, opponent) {
            counts.checks += 1;
            if !has_any_legal_move(&applied.board_after, opponent) {
                counts.checkmates += 1;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{perft, perft_multi_threaded, PerftCounts};
    use crate::game_state::chess_types::*;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn startpos_perft_depths_one_to_three() {
        let board = Board::starting();
        assert_eq!(perft(&board, Color::White, 1).expect("perft").nodes, 20);
        assert_eq!(perft(&board, Color::White, 2).expect("perft").nodes, 400);

        let depth3 = perft(&board, Color::White, 3).expect("perft");
        assert_eq!(
            depth3,
            PerftCounts {
                nodes: 8902,
                captures: 34,
                promotions: 0,
                checks: 12,
                checkmates: 0,
            }
        );
    }

    #[test]
    fn endgame_position_perft() {
        // No castling or en passant is reachable within two plies here.
        let (board, side) =
            parse_fen("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w").expect("fen should parse");
        assert_eq!(perft(&board, side, 1).expect("perft").nodes, 14);
        assert_eq!(perft(&board, side, 2).expect("perft").nodes, 191);
    }

    #[test]
    fn multi_threaded_matches_single_threaded() {
        let board = Board::starting();
        let single = perft(&board, Color::White, 3).expect("perft");
        let multi = perft_multi_threaded(&board, Color::White, 3).expect("perft");
        assert_eq!(single, multi);
    }

    #[test]
    fn depth_zero_counts_the_root() {
        let counts = perft(&Board::starting(), Color::White, 0).expect("perft");
        assert_eq!(counts.nodes, 1);
    }
}
