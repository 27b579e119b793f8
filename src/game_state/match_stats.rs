//! Win/loss/draw counters for games against the computer.
//!
//! Only the counting rule lives here; where the counters are stored is up to
//! the caller.

use chrono::{DateTime, Utc};

use crate::game_state::chess_types::Color;
use crate::game_state::game_state::{GameOutcome, OutcomeKind};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchStats {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub updated_at: Option<DateTime<Utc>>,
}

impl MatchStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scores `outcome` from the point of view of `human_color`.
    pub fn record(&mut self, outcome: GameOutcome, human_color: Color) {
        match (outcome.kind, outcome.winner) {
            (OutcomeKind::Checkmate, Some(winner)) if winner == human_color => self.wins += 1,
            (OutcomeKind::Checkmate, Some(_)) => self.losses += 1,
            (OutcomeKind::Checkmate, None) | (OutcomeKind::Stalemate, _) => self.draws += 1,
        }
        self.updated_at = Some(Utc::now());
    }

    pub fn reset(&mut self) {
        *self = Self {
            updated_at: Some(Utc::now()),
            ..Self::default()
        };
    }

    #[inline]
    pub fn games_played(&self) -> u32 {
        self.wins + self.losses + self.draws
    }
}
