//! Game configuration parsed from environment variables.

use crate::game_state::chess_types::Color;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// The computer answers every move of the human side, and undo steps
    /// back over both plies.
    pub opponent_is_automatic: bool,
    /// Side played by the computer when `opponent_is_automatic` is set.
    pub computer_color: Color,
    /// Pause before the computer replies. Presentation pacing only.
    pub computer_reply_delay_ms: u64,
    /// Fixed seed for the random opponent.
    pub rng_seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            opponent_is_automatic: false,
            computer_color: Color::Black,
            computer_reply_delay_ms: 500,
            rng_seed: None,
        }
    }
}

impl GameConfig {
    /// Load configuration from environment variables with defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = GameConfig::default();
        GameConfig {
            opponent_is_automatic: lookup("CHESS_OPPONENT")
                .and_then(|v| parse_opponent(&v))
                .unwrap_or(defaults.opponent_is_automatic),
            computer_color: lookup("CHESS_COMPUTER_COLOR")
                .and_then(|v| parse_color(&v))
                .unwrap_or(defaults.computer_color),
            computer_reply_delay_ms: lookup("CHESS_COMPUTER_DELAY_MS")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.computer_reply_delay_ms),
            rng_seed: lookup("CHESS_SEED").and_then(|v| v.trim().parse().ok()),
        }
    }

    /// Side the human plays.
    #[inline]
    pub fn human_color(&self) -> Color {
        self.computer_color.opposite()
    }
}

fn parse_opponent(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "computer" => Some(true),
        "friend" => Some(false),
        _ => None,
    }
}

fn parse_color(value: &str) -> Option<Color> {
    match value.trim().to_ascii_lowercase().as_str() {
        "white" | "w" => Some(Color::White),
        "black" | "b" => Some(Color::Black),
        _ => None,
    }
}
