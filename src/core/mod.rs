//! Core engine types: players, answers, randomness, configuration, errors.
//!
//! These are the leaf building blocks shared by the question bank, the
//! rules and the session state machine.

pub mod answer;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use answer::{Answer, AnswerRecord};
pub use config::{SessionConfig, DEFAULT_LIVES, DEFAULT_POINTS, MAX_PLAYERS};
pub use error::{
    BankError, CodecError, NoQuestionsAvailable, PlayerError, QuestionError, QuizError, QuizResult,
    RestoreError, RosterError, SessionError, StartError,
};
pub use player::{Player, PlayerId};
pub use rng::{QuizRng, RandomSource, SequenceRng};
