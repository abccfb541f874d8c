//! Where a session gets its questions from.
//!
//! Two supply strategies:
//! - `Sequential`: a fixed, ordered list walked by a cursor (campaign play)
//! - `RandomFromCategory`: a fresh uniform draw from one bank category on
//!   every advance (duel play)
//!
//! The session only talks to the source through `next_sequential` and
//! `next_random_from_category`; it does not care which one it holds beyond
//! asking `is_sequential`.

use im::Vector;

use super::bank::QuestionBank;
use super::question::Question;
use crate::core::{NoQuestionsAvailable, QuizRng, RandomSource};

/// Question supply strategy for a session.
#[derive(Clone, Debug)]
pub enum QuestionSource<R = QuizRng> {
    /// Fixed ordered list.
    Sequential(Vector<Question>),
    /// Random draw from the selected category of a bank.
    RandomFromCategory {
        bank: QuestionBank<R>,
        category: String,
    },
}

impl<R: RandomSource> QuestionSource<R> {
    /// A fixed list of questions, asked in order.
    pub fn sequential(questions: impl IntoIterator<Item = Question>) -> Self {
        QuestionSource::Sequential(questions.into_iter().collect())
    }

    /// A fixed list built from one bank category, in insertion order.
    #[must_use]
    pub fn from_category<B>(bank: &QuestionBank<B>, category: &str) -> Self
    where
        B: RandomSource,
    {
        QuestionSource::Sequential(bank.questions_for(category))
    }

    /// Random draws from `category` of `bank`.
    pub fn random(bank: QuestionBank<R>, category: impl Into<String>) -> Self {
        QuestionSource::RandomFromCategory {
            bank,
            category: category.into(),
        }
    }

    /// True for the fixed-list strategy.
    #[must_use]
    pub fn is_sequential(&self) -> bool {
        matches!(self, QuestionSource::Sequential(_))
    }

    /// True if nothing could ever be asked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            QuestionSource::Sequential(questions) => questions.is_empty(),
            QuestionSource::RandomFromCategory { bank, category } => bank.count_in(category) == 0,
        }
    }

    /// Length of a fixed list; `None` for random draws, which never run out.
    #[must_use]
    pub fn len(&self) -> Option<usize> {
        match self {
            QuestionSource::Sequential(questions) => Some(questions.len()),
            QuestionSource::RandomFromCategory { .. } => None,
        }
    }

    /// The question at `position` of a fixed list.
    ///
    /// Always `None` for random sources.
    #[must_use]
    pub fn next_sequential(&self, position: usize) -> Option<Question> {
        match self {
            QuestionSource::Sequential(questions) => questions.get(position).cloned(),
            QuestionSource::RandomFromCategory { .. } => None,
        }
    }

    /// A fresh draw from the selected category.
    ///
    /// A fixed list has no category to draw from and reports
    /// `NoQuestionsAvailable` for the empty category name.
    pub fn next_random_from_category(&mut self) -> Result<Question, NoQuestionsAvailable> {
        match self {
            QuestionSource::RandomFromCategory { bank, category } => bank.random_question(category),
            QuestionSource::Sequential(_) => Err(NoQuestionsAvailable::new("")),
        }
    }

    /// The selected category of a random source.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        match self {
            QuestionSource::RandomFromCategory { category, .. } => Some(category.as_str()),
            QuestionSource::Sequential(_) => None,
        }
    }

    /// Switch the category of a random source.
    ///
    /// Fails, leaving the old category selected, if the new one has no
    /// questions. Returns `Ok(false)` for fixed lists, which have no category.
    pub fn select_category(&mut self, new_category: &str) -> Result<bool, NoQuestionsAvailable> {
        match self {
            QuestionSource::RandomFromCategory { bank, category } => {
                if bank.count_in(new_category) == 0 {
                    return Err(NoQuestionsAvailable::new(new_category));
                }
                *category = new_category.to_string();
                Ok(true)
            }
            QuestionSource::Sequential(_) => Ok(false),
        }
    }

    /// The bank behind a random source.
    #[must_use]
    pub fn bank(&self) -> Option<&QuestionBank<R>> {
        match self {
            QuestionSource::RandomFromCategory { bank, .. } => Some(bank),
            QuestionSource::Sequential(_) => None,
        }
    }
}
