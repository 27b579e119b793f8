//! Error type shared by the rules engine and its text helpers.
//!
//! Move application, position parsing, and coordinate conversion all report
//! failures through `ChessError`. Rejected move requests never mutate the
//! game, so every variant is recoverable by the caller.

/// Convenience alias used throughout the crate.
pub type ChessResult<T> = Result<T, ChessError>;

/// Domain errors for the rules engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessError {
    /// Square text that is not `a1..h8`, or a row/column outside `0..=7`.
    #[error("invalid square: {0}")]
    InvalidSquare(String),

    /// Malformed position text.
    #[error("invalid FEN string: {0}")]
    InvalidFen(String),

    /// Malformed long algebraic move text such as `e2e9`.
    #[error("invalid move text: {0}")]
    InvalidMoveText(String),

    /// The requested move is not among the legal moves of the current position.
    #[error("illegal move: {from} -> {to}: {reason}")]
    IllegalMove {
        from: String,
        to: String,
        reason: String,
    },

    /// A move was requested after checkmate or stalemate.
    #[error("game is already over: {0}")]
    GameOver(String),
}

#[cfg(test)]
mod tests {
    use super::ChessError;

    #[test]
    fn illegal_move_message_names_both_squares() {
        let err = ChessError::IllegalMove {
            from: "e2".into(),
            to: "e5".into(),
            reason: "not a legal destination".into(),
        };
        assert_eq!(
            err.to_string(),
            "illegal move: e2 -> e5: not a legal destination"
        );
    }
}
