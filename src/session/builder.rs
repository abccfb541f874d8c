//! Fluent setup for a session.

use crate::core::{Player, RandomSource, RosterError, SessionConfig, DEFAULT_LIVES};
use crate::questions::QuestionSource;
use crate::rules::{ScoringMode, TieBreak};

use super::game::GameSession;

/// Builder for a [`GameSession`].
///
/// Players added by name start with the configured number of lives.
///
/// ```
/// use rust_quiz::questions::{Question, QuestionId, QuestionSource};
/// use rust_quiz::rules::ScoringMode;
/// use rust_quiz::session::{GameSession, GameSessionBuilder};
///
/// let q = Question::new(QuestionId::new(1), "Capital of France?", ["Paris", "Rome"], 0).unwrap();
/// let session: GameSession = GameSessionBuilder::new()
///     .mode(ScoringMode::Lives)
///     .initial_lives(1)
///     .players(["Alice", "Bob"])
///     .build(QuestionSource::sequential([q]))
///     .unwrap();
///
/// assert_eq!(session.players()[1].remaining_lives(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct GameSessionBuilder {
    config: SessionConfig,
    lives: u32,
    names: Vec<String>,
}

impl Default for GameSessionBuilder {
    fn default() -> Self {
        Self {
            config: SessionConfig::default(),
            lives: DEFAULT_LIVES,
            names: Vec::new(),
        }
    }
}

impl GameSessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(mut self, mode: ScoringMode) -> Self {
        self.config.mode = mode;
        self
    }

    pub fn points_per_correct(mut self, points: u32) -> Self {
        self.config.points_per_correct = points;
        self
    }

    pub fn initial_lives(mut self, lives: u32) -> Self {
        self.lives = lives;
        self
    }

    pub fn tie_break(mut self, tie_break: TieBreak) -> Self {
        self.config.tie_break = tie_break;
        self
    }

    pub fn player(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    pub fn players<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.names.extend(names.into_iter().map(Into::into));
        self
    }

    /// Build a `NotStarted` session over `source`.
    pub fn build<R: RandomSource>(
        self,
        source: QuestionSource<R>,
    ) -> Result<GameSession<R>, RosterError> {
        let lives = self.lives;
        let players = self
            .names
            .into_iter()
            .map(|name| Player::with_lives(name, lives));
        GameSession::new(players, source, self.config)
    }
}
