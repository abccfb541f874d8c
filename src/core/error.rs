//! Error types for every engine operation.
//!
//! Each operation family gets its own enum so callers can match exactly on
//! what went wrong. `QuizError` wraps all of them for drivers that just want
//! to propagate with `?`.
//!
//! All errors are recoverable: a call that returns `Err` has not mutated any
//! engine state.

use thiserror::Error;

use crate::questions::QuestionId;

/// A question failed validation on construction or reload.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum QuestionError {
    #[error("question text must not be empty")]
    EmptyText,

    #[error("a question needs at least 2 options, got {count}")]
    TooFewOptions { count: usize },

    #[error("correct index {index} is out of range for {option_count} options")]
    CorrectIndexOutOfRange { index: usize, option_count: usize },
}

/// A player record failed validation on reload.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PlayerError {
    #[error("player has {correct} correct answers but only {total} answered")]
    CorrectExceedsTotal { correct: u32, total: u32 },
}

/// The question bank rejected an addition.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BankError {
    #[error("a question with id {0} is already in the bank")]
    DuplicateQuestionId(QuestionId),
}

/// A category had nothing to draw from.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("no questions available in category '{category}'")]
pub struct NoQuestionsAvailable {
    pub category: String,
}

impl NoQuestionsAvailable {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
        }
    }
}

/// The roster rejected a player.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("a player named '{0}' is already in the roster")]
    DuplicatePlayer(String),

    #[error("at most {max} players are supported")]
    TooManyPlayers { max: usize },

    #[error("players cannot be added once the session has started")]
    SessionInProgress,
}

/// `GameSession::start` failed; the session is still `NotStarted`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StartError {
    #[error("the question source is empty")]
    EmptyQuestionSet,

    #[error("the roster is empty")]
    EmptyRoster,

    #[error("the session has already been started; reset it first")]
    AlreadyStarted,
}

/// An in-play operation (submit, advance, end, category switch) failed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("the session is not active")]
    SessionNotActive,

    #[error("answer index {index} is out of range for {option_count} options")]
    InvalidAnswerIndex { index: usize, option_count: usize },

    #[error("the current player has already answered this turn")]
    AnswerAlreadySubmitted,

    #[error("player '{0}' is out of lives; pass the turn first")]
    PlayerEliminated(String),

    #[error(transparent)]
    NoQuestionsAvailable(#[from] NoQuestionsAvailable),
}

/// A snapshot could not be applied to a session.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RestoreError {
    #[error("snapshot has duplicate player name '{0}'")]
    DuplicatePlayer(String),

    #[error("snapshot player index {index} is out of range for {player_count} players")]
    PlayerIndexOutOfRange { index: usize, player_count: usize },

    #[error("snapshot question index {index} is out of range for {question_count} questions")]
    QuestionIndexOutOfRange { index: usize, question_count: usize },

    #[error("active snapshot has no current question")]
    MissingQuestion,

    #[error("active snapshot gives the turn to eliminated player '{0}'")]
    CurrentPlayerEliminated(String),

    #[error("snapshot is {snapshot:?} but this session uses {session:?}")]
    ModeMismatch {
        snapshot: crate::rules::ScoringMode,
        session: crate::rules::ScoringMode,
    },

    #[error(transparent)]
    Roster(#[from] RosterError),
}

/// A snapshot could not be converted to or from its binary form.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("failed to encode snapshot: {0}")]
    Encode(#[source] bincode::Error),

    #[error("failed to decode snapshot: {0}")]
    Decode(#[source] bincode::Error),
}

/// Umbrella error for drivers that propagate everything with `?`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error(transparent)]
    Question(#[from] QuestionError),

    #[error(transparent)]
    Player(#[from] PlayerError),

    #[error(transparent)]
    Bank(#[from] BankError),

    #[error(transparent)]
    NoQuestions(#[from] NoQuestionsAvailable),

    #[error(transparent)]
    Roster(#[from] RosterError),

    #[error(transparent)]
    Start(#[from] StartError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Restore(#[from] RestoreError),
}

/// Result alias using the umbrella error.
pub type QuizResult<T> = Result<T, QuizError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = SessionError::InvalidAnswerIndex {
            index: 7,
            option_count: 4,
        };
        assert_eq!(err.to_string(), "answer index 7 is out of range for 4 options");

        let err = NoQuestionsAvailable::new("Math");
        assert_eq!(err.to_string(), "no questions available in category 'Math'");
    }

    #[test]
    fn test_no_questions_converts_to_session_error() {
        let err: SessionError = NoQuestionsAvailable::new("History").into();
        assert_eq!(
            err,
            SessionError::NoQuestionsAvailable(NoQuestionsAvailable::new("History"))
        );
        assert_eq!(err.to_string(), "no questions available in category 'History'");
    }

    #[test]
    fn test_umbrella_conversion() {
        fn start() -> QuizResult<()> {
            Err(StartError::EmptyRoster)?
        }

        assert_eq!(start(), Err(QuizError::Start(StartError::EmptyRoster)));
    }
}
