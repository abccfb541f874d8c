//! Answer representation and history records.
//!
//! An `Answer` is what a driver submits for the current player: either the
//! index of a chosen option, or `NoAnswer` when the turn ran out (a timer
//! layered on top of the engine). `NoAnswer` is scored exactly like a wrong
//! choice.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::questions::QuestionId;

/// A submitted answer.
///
/// ```
/// use rust_quiz::core::Answer;
///
/// let choice: Answer = 2.into();
/// assert_eq!(choice, Answer::Choice(2));
/// assert_eq!(choice.index(), Some(2));
/// assert_eq!(Answer::NoAnswer.index(), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Answer {
    /// The 0-based index of the chosen option.
    Choice(usize),
    /// No option was chosen in time.
    NoAnswer,
}

impl Answer {
    /// The chosen option index, if any.
    #[must_use]
    pub fn index(self) -> Option<usize> {
        match self {
            Answer::Choice(index) => Some(index),
            Answer::NoAnswer => None,
        }
    }
}

impl From<usize> for Answer {
    fn from(index: usize) -> Self {
        Answer::Choice(index)
    }
}

impl From<Option<usize>> for Answer {
    fn from(index: Option<usize>) -> Self {
        index.map_or(Answer::NoAnswer, Answer::Choice)
    }
}

/// A scored submission, kept in the session history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    /// Who answered.
    pub player: PlayerId,

    /// Which question was answered.
    pub question: QuestionId,

    /// What was submitted.
    pub answer: Answer,

    /// Whether it was correct.
    pub correct: bool,

    /// Turn number when the answer was given (starts at 1).
    pub turn: u32,
}

impl AnswerRecord {
    #[must_use]
    pub fn new(
        player: PlayerId,
        question: QuestionId,
        answer: Answer,
        correct: bool,
        turn: u32,
    ) -> Self {
        Self {
            player,
            question,
            answer,
            correct,
            turn,
        }
    }
}
