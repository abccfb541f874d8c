//! Player identification and per-player answer statistics.
//!
//! ## PlayerId
//!
//! Position of a player in the session roster (turn order). Supports up
//! to 255 players.
//!
//! ## Player
//!
//! Score, answer counters and lives. Bounds are enforced by clamping, never
//! by failing: score and lives cannot go below zero, and
//! `correct_answers <= total_answered` always holds.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use super::config::DEFAULT_LIVES;
use super::error::PlayerError;

/// Roster position of a player.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw roster index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a roster of `player_count` players.
    ///
    /// ```
    /// use rust_quiz::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count.min(u8::MAX as usize + 1)).map(|i| PlayerId(i as u8))
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A quiz participant.
///
/// Equality and hashing use the name only: two `Player`s with the same name
/// are the same participant regardless of their stats.
///
/// ```
/// use rust_quiz::core::Player;
///
/// let mut alice = Player::new("Alice");
/// alice.record_correct(15);
/// alice.record_incorrect();
///
/// assert_eq!(alice.score(), 15);
/// assert_eq!(alice.remaining_lives(), 2);
/// assert_eq!(alice.accuracy(), 50.0);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "PlayerRecord", into = "PlayerRecord")]
pub struct Player {
    name: String,
    score: u32,
    correct_answers: u32,
    total_answered: u32,
    remaining_lives: u32,
    initial_lives: u32,
}

impl Player {
    /// Create a player with the default number of lives.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_lives(name, DEFAULT_LIVES)
    }

    /// Create a player with a custom number of lives.
    ///
    /// `reset_for_new_game` restores this value.
    #[must_use]
    pub fn with_lives(name: impl Into<String>, lives: u32) -> Self {
        Self {
            name: name.into(),
            score: 0,
            correct_answers: 0,
            total_answered: 0,
            remaining_lives: lives,
            initial_lives: lives,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn correct_answers(&self) -> u32 {
        self.correct_answers
    }

    #[must_use]
    pub fn total_answered(&self) -> u32 {
        self.total_answered
    }

    #[must_use]
    pub fn remaining_lives(&self) -> u32 {
        self.remaining_lives
    }

    /// Lives restored by `reset_for_new_game`.
    #[must_use]
    pub fn initial_lives(&self) -> u32 {
        self.initial_lives
    }

    /// True once all lives are gone.
    #[must_use]
    pub fn is_eliminated(&self) -> bool {
        self.remaining_lives == 0
    }

    /// Percentage of correct answers, `0.0` before the first answer.
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        if self.total_answered == 0 {
            return 0.0;
        }
        f64::from(self.correct_answers) / f64::from(self.total_answered) * 100.0
    }

    /// Record a correct answer worth `points`.
    ///
    /// Both counters always advance. Only positive points change the score.
    pub fn record_correct(&mut self, points: i64) {
        self.add_score(points);
        self.correct_answers = self.correct_answers.saturating_add(1);
        self.total_answered = self.total_answered.saturating_add(1);
    }

    /// Record a wrong answer that costs a life.
    ///
    /// Returns whether the player still has lives left.
    pub fn record_incorrect(&mut self) -> bool {
        self.total_answered = self.total_answered.saturating_add(1);
        self.lose_life();
        !self.is_eliminated()
    }

    /// Record a wrong answer that only counts as an attempt.
    pub fn record_miss(&mut self) {
        self.total_answered = self.total_answered.saturating_add(1);
    }

    /// Remove one life. Returns `false` if there was none to lose.
    pub fn lose_life(&mut self) -> bool {
        if self.remaining_lives == 0 {
            return false;
        }
        self.remaining_lives -= 1;
        true
    }

    /// Add points to the score. Non-positive values are ignored.
    pub fn add_score(&mut self, points: i64) {
        if points > 0 {
            let points = u32::try_from(points).unwrap_or(u32::MAX);
            self.score = self.score.saturating_add(points);
        }
    }

    /// Overwrite the score, clamped to `0..=u32::MAX`.
    pub fn set_score(&mut self, score: i64) {
        self.score = clamp_to_u32(score);
    }

    /// Overwrite the remaining lives, clamped to `0..=u32::MAX`.
    pub fn set_remaining_lives(&mut self, lives: i64) {
        self.remaining_lives = clamp_to_u32(lives);
    }

    /// Zero score and counters, restore initial lives.
    pub fn reset_for_new_game(&mut self) {
        self.score = 0;
        self.correct_answers = 0;
        self.total_answered = 0;
        self.remaining_lives = self.initial_lives;
    }

    /// One-line summary, e.g. `"Alice: 15 points, 1/2 correct (50.0%), 2 lives"`.
    #[must_use]
    pub fn stats_summary(&self) -> String {
        format!(
            "{}: {} points, {}/{} correct ({:.1}%), {} lives",
            self.name,
            self.score,
            self.correct_answers,
            self.total_answered,
            self.accuracy(),
            self.remaining_lives
        )
    }
}

fn clamp_to_u32(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Player {}

impl Hash for Player {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.stats_summary())
    }
}

/// Wire shape of a `Player`; validated on the way in.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct PlayerRecord {
    name: String,
    score: u32,
    correct_answers: u32,
    total_answered: u32,
    remaining_lives: u32,
    #[serde(default = "default_lives")]
    initial_lives: u32,
}

fn default_lives() -> u32 {
    DEFAULT_LIVES
}

impl TryFrom<PlayerRecord> for Player {
    type Error = PlayerError;

    fn try_from(record: PlayerRecord) -> Result<Self, Self::Error> {
        if record.correct_answers > record.total_answered {
            return Err(PlayerError::CorrectExceedsTotal {
                correct: record.correct_answers,
                total: record.total_answered,
            });
        }
        Ok(Self {
            name: record.name,
            score: record.score,
            correct_answers: record.correct_answers,
            total_answered: record.total_answered,
            remaining_lives: record.remaining_lives,
            initial_lives: record.initial_lives,
        })
    }
}

impl From<Player> for PlayerRecord {
    fn from(player: Player) -> Self {
        Self {
            name: player.name,
            score: player.score,
            correct_answers: player.correct_answers,
            total_answered: player.total_answered,
            remaining_lives: player.remaining_lives,
            initial_lives: player.initial_lives,
        }
    }
}
