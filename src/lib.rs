//! # rust-quiz
//!
//! A turn-based multiple-choice trivia engine.
//!
//! ## Design Principles
//!
//! 1. **Rules as Strategy**: Lives-based duels and cumulative-score
//!    campaigns are the same engine with a different `ScoringMode`.
//!    Nothing in the session hardcodes either.
//!
//! 2. **N-Player First**: Rosters of any size from 1 up; a solo game is a
//!    roster of one, not a special case.
//!
//! 3. **Driver Agnostic**: No I/O, no timers, no callbacks. A CLI, GUI or
//!    network front end calls operations and inspects return values.
//!
//! ## Architecture
//!
//! - **Injected Randomness**: Random draws go through `RandomSource`.
//!   `QuizRng` (seeded ChaCha8) makes games reproducible; `SequenceRng`
//!   scripts draws in tests.
//!
//! - **Persistent Data Structures**: Question lists and answer history use
//!   `im-rs`, so handing out copies is O(1).
//!
//! - **Atomic Operations**: An operation that returns `Err` leaves the
//!   session untouched.
//!
//! ## Modules
//!
//! - `core`: Players, answers, RNG, configuration, errors
//! - `questions`: Question records, the category bank, supply strategies
//! - `rules`: Scoring modes, tie-breaks, win conditions
//! - `session`: The session state machine, builder, and snapshots

pub mod core;
pub mod questions;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Answer, AnswerRecord,
    Player, PlayerId,
    QuizRng, RandomSource, SequenceRng,
    SessionConfig, DEFAULT_LIVES, DEFAULT_POINTS, MAX_PLAYERS,
    BankError, CodecError, NoQuestionsAvailable, PlayerError, QuestionError,
    QuizError, QuizResult, RestoreError, RosterError, SessionError, StartError,
};

pub use crate::questions::{
    Difficulty, Question, QuestionBank, QuestionId, QuestionSource,
    DEFAULT_CATEGORIES, DEFAULT_CATEGORY,
};

pub use crate::rules::{GameResult, ScoringMode, TieBreak};

pub use crate::session::{EndReason, GameSession, GameSessionBuilder, SessionSnapshot, SessionState};
