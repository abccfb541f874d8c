//! Question bank indexed by category.
//!
//! The `QuestionBank` owns every question, grouped by category in a stable
//! order. Unknown categories are created on first use, so adding a question
//! never fails because of its category.
//!
//! Query methods return `im::Vector` copies: cloning one is O(1) and the
//! caller cannot reach the bank's own storage through it.

use im::Vector;
use log::{debug, trace};
use rustc_hash::FxHashMap;

use super::question::{Question, QuestionId};
use crate::core::{BankError, NoQuestionsAvailable, QuizRng, RandomSource};

/// Built-in categories for duel play.
pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "BWL",
    "Digitaltechnik",
    "Elektrotechnik",
    "Netzwerktechnik",
    "Datenbanken",
    "Programmierung",
];

/// All questions, by category.
///
/// ## Example
///
/// ```
/// use rust_quiz::core::QuizRng;
/// use rust_quiz::questions::{Question, QuestionBank, QuestionId};
///
/// let mut bank = QuestionBank::new(QuizRng::new(42));
///
/// let q = Question::new(QuestionId::new(1), "Capital of France?", ["London", "Paris"], 1)
///     .unwrap();
/// bank.add_question("Geography", q).unwrap();
///
/// let drawn = bank.random_question("Geography").unwrap();
/// assert_eq!(drawn.id(), QuestionId::new(1));
/// assert!(bank.random_question("History").is_err());
/// ```
#[derive(Clone, Debug)]
pub struct QuestionBank<R = QuizRng> {
    categories: Vec<String>,
    questions: FxHashMap<String, Vector<Question>>,
    index: FxHashMap<QuestionId, String>,
    rng: R,
}

impl<R: RandomSource> QuestionBank<R> {
    /// Create an empty bank drawing from `rng`.
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self {
            categories: Vec::new(),
            questions: FxHashMap::default(),
            index: FxHashMap::default(),
            rng,
        }
    }

    /// Create a bank with a fixed, ordered set of empty categories.
    #[must_use]
    pub fn with_categories<S: Into<String>>(
        rng: R,
        categories: impl IntoIterator<Item = S>,
    ) -> Self {
        let mut bank = Self::new(rng);
        for category in categories {
            bank.ensure_category(category.into());
        }
        bank
    }

    /// Create a bank seeded with `DEFAULT_CATEGORIES`.
    #[must_use]
    pub fn with_default_categories(rng: R) -> Self {
        Self::with_categories(rng, DEFAULT_CATEGORIES)
    }

    fn ensure_category(&mut self, category: String) -> &mut Vector<Question> {
        if !self.questions.contains_key(&category) {
            debug!("[Bank] Created category '{}'", category);
            self.categories.push(category.clone());
        }
        self.questions.entry(category).or_default()
    }

    /// Append a question to a category, creating the category if needed.
    ///
    /// The stored copy is tagged with `category`. Fails if a question with
    /// the same id is already in the bank.
    pub fn add_question(
        &mut self,
        category: impl Into<String>,
        question: Question,
    ) -> Result<(), BankError> {
        let category = category.into();
        if self.index.contains_key(&question.id()) {
            return Err(BankError::DuplicateQuestionId(question.id()));
        }

        let question = if question.category() == category {
            question
        } else {
            question.with_category(category.clone())
        };

        trace!("[Bank] Adding {} to '{}'", question.id(), category);
        self.index.insert(question.id(), category.clone());
        self.ensure_category(category).push_back(question);
        Ok(())
    }

    /// Add a question under its own category tag.
    pub fn add(&mut self, question: Question) -> Result<(), BankError> {
        let category = question.category().to_string();
        self.add_question(category, question)
    }

    /// Questions in a category, in insertion order. Empty if unknown.
    #[must_use]
    pub fn questions_for(&self, category: &str) -> Vector<Question> {
        self.questions.get(category).cloned().unwrap_or_default()
    }

    /// The `position`-th question of a category.
    #[must_use]
    pub fn question_at(&self, category: &str, position: usize) -> Option<Question> {
        self.questions.get(category)?.get(position).cloned()
    }

    /// A uniformly random question from a category.
    pub fn random_question(&mut self, category: &str) -> Result<Question, NoQuestionsAvailable> {
        let questions = match self.questions.get(category) {
            Some(questions) if !questions.is_empty() => questions,
            _ => return Err(NoQuestionsAvailable::new(category)),
        };
        let position = self.rng.next_index(questions.len());
        trace!("[Bank] Drew position {} of {} in '{}'", position, questions.len(), category);
        Ok(questions[position].clone())
    }

    /// Recognized categories, in creation order.
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Check if a category exists (it may still be empty).
    #[must_use]
    pub fn has_category(&self, category: &str) -> bool {
        self.questions.contains_key(category)
    }

    /// Number of questions in a category.
    #[must_use]
    pub fn count_in(&self, category: &str) -> usize {
        self.questions.get(category).map_or(0, Vector::len)
    }

    /// Look up a question by id.
    #[must_use]
    pub fn get(&self, id: QuestionId) -> Option<Question> {
        let category = self.index.get(&id)?;
        self.questions.get(category)?.iter().find(|q| q.id() == id).cloned()
    }

    /// Check if a question id is in the bank.
    #[must_use]
    pub fn contains(&self, id: QuestionId) -> bool {
        self.index.contains_key(&id)
    }

    /// Total number of questions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Every question, category by category.
    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.categories
            .iter()
            .filter_map(move |c| self.questions.get(c))
            .flat_map(|questions| questions.iter())
    }

    /// The randomness source, e.g. to capture its state.
    #[must_use]
    pub fn rng(&self) -> &R {
        &self.rng
    }
}

impl Default for QuestionBank<QuizRng> {
    fn default() -> Self {
        Self::new(QuizRng::default())
    }
}
