//! FEN-to-board parser.
//!
//! Reads the piece placement and side-to-move fields. Castling, en-passant
//! and clock fields may follow; they are checked for shape and then ignored
//! because those rules are not part of this engine.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> ChessResult<(Board, Color)> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side-to-move"))?;

    if let Some(castling_part) = parts.next() {
        validate_castling_field(castling_part)?;
    }
    if let Some(en_passant_part) = parts.next() {
        if en_passant_part != "-" {
            algebraic_to_square(en_passant_part)
                .map_err(|_| invalid(&format!("invalid en-passant square: {en_passant_part}")))?;
        }
    }
    for clock_part in parts.by_ref().take(2) {
        clock_part
            .parse::<u16>()
            .map_err(|_| invalid(&format!("invalid move clock: {clock_part}")))?;
    }
    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let board = parse_board(board_part)?;
    let side_to_move = parse_side_to_move(side_part)?;
    Ok((board, side_to_move))
}

fn parse_board(board_part: &str) -> ChessResult<Board> {
    let rows: Vec<&str> = board_part.split('/').collect();
    if rows.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    let mut board = Board::empty();

    // FEN lists rank 8 first, which is row 0.
    for (row, row_str) in rows.iter().enumerate() {
        let mut col = 0usize;

        for ch in row_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(&format!("invalid empty-square count '{ch}'")));
                }
                col += empty_count as usize;
                continue;
            }

            let piece = piece_from_fen_char(ch)
                .ok_or_else(|| invalid(&format!("invalid piece character '{ch}'")))?;

            if col >= 8 {
                return Err(invalid("rank has too many files"));
            }

            board.set_piece(Square::new(row as u8, col as u8), piece);
            col += 1;
        }

        if col != 8 {
            return Err(invalid("rank does not sum to 8 files"));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(invalid(&format!("invalid side-to-move field: {side_part}"))),
    }
}

fn validate_castling_field(castling_part: &str) -> ChessResult<()> {
    if castling_part == "-" || castling_part.chars().all(|ch| "KQkq".contains(ch)) {
        Ok(())
    } else {
        Err(invalid(&format!("invalid castling field: {castling_part}")))
    }
}

pub fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(kind, color))
}

fn invalid(msg: &str) -> ChessError {
    ChessError::InvalidFen(msg.to_owned())
}
