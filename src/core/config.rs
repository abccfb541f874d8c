//! Session configuration.
//!
//! A `SessionConfig` fixes the two strategy parameters of a game (how a
//! wrong answer is scored and how ties are broken) plus the numbers the
//! rules need. Drivers build one at startup; the engine never hardcodes
//! them.
//!
//! Lives are not part of the config: each `Player` carries its own
//! starting lives (`Player::with_lives`, or `GameSessionBuilder::initial_lives`
//! for players the builder creates).

use serde::{Deserialize, Serialize};

use crate::rules::{ScoringMode, TieBreak};

/// Lives a player starts with unless configured otherwise.
pub const DEFAULT_LIVES: u32 = 3;

/// Points awarded for a correct answer unless configured otherwise.
pub const DEFAULT_POINTS: u32 = 10;

/// Most players a roster can hold.
pub const MAX_PLAYERS: usize = 255;

/// Complete session configuration.
///
/// ```
/// use rust_quiz::core::SessionConfig;
/// use rust_quiz::rules::{ScoringMode, TieBreak};
///
/// let config = SessionConfig::new(ScoringMode::Cumulative)
///     .with_points_per_correct(25)
///     .with_tie_break(TieBreak::Shared);
///
/// assert_eq!(config.points_per_correct, 25);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// How a wrong answer affects state and when the game ends.
    pub mode: ScoringMode,

    /// Points credited for each correct answer.
    pub points_per_correct: u32,

    /// How `winner()` resolves equal scores.
    pub tie_break: TieBreak,
}

impl SessionConfig {
    /// Create a configuration for the given mode with default numbers.
    #[must_use]
    pub fn new(mode: ScoringMode) -> Self {
        Self {
            mode,
            points_per_correct: DEFAULT_POINTS,
            tie_break: TieBreak::default(),
        }
    }

    /// Lives-mode duel defaults.
    #[must_use]
    pub fn lives() -> Self {
        Self::new(ScoringMode::Lives)
    }

    /// Cumulative-mode defaults.
    #[must_use]
    pub fn cumulative() -> Self {
        Self::new(ScoringMode::Cumulative)
    }

    #[must_use]
    pub fn with_points_per_correct(mut self, points: u32) -> Self {
        self.points_per_correct = points;
        self
    }

    #[must_use]
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::lives()
    }
}

impl From<ScoringMode> for SessionConfig {
    fn from(mode: ScoringMode) -> Self {
        Self::new(mode)
    }
}
