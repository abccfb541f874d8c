//! Question records - immutable after creation.
//!
//! A `Question` is validated once, in `Question::new`, and has no setters.
//! The only way to change its options is `with_options`, which validates
//! again and returns a new value, so `correct_index` can never point past
//! the end of `options`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::QuestionError;

/// Category used when none is given.
pub const DEFAULT_CATEGORY: &str = "General Knowledge";

/// Unique identifier for a question within a bank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QuestionId(pub u32);

impl QuestionId {
    /// Create a new question ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Question({})", self.0)
    }
}

/// Question difficulty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(name)
    }
}

/// Answer options. Most questions have four.
pub type Options = SmallVec<[String; 4]>;

/// A multiple-choice question.
///
/// Equality and hashing use the `id` only.
///
/// ```
/// use rust_quiz::questions::{Difficulty, Question, QuestionId};
///
/// let q = Question::new(QuestionId::new(1), "What is 2 + 2?", ["1", "2", "4", "5"], 2)
///     .unwrap()
///     .with_difficulty(Difficulty::Easy)
///     .with_category("Math");
///
/// assert!(q.is_correct(2));
/// assert_eq!(q.correct_answer(), "4");
/// assert_eq!(q.category(), "Math");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "QuestionRecord", into = "QuestionRecord")]
pub struct Question {
    id: QuestionId,
    text: String,
    options: Options,
    correct_index: usize,
    difficulty: Difficulty,
    category: String,
}

impl Question {
    /// Create a validated question with default difficulty and category.
    ///
    /// Fails if `text` is blank, there are fewer than two options, or
    /// `correct_index` is not a valid option index.
    pub fn new<S: Into<String>>(
        id: QuestionId,
        text: impl Into<String>,
        options: impl IntoIterator<Item = S>,
        correct_index: usize,
    ) -> Result<Self, QuestionError> {
        let text = text.into();
        let options: Options = options.into_iter().map(Into::into).collect();
        validate(&text, &options, correct_index)?;

        Ok(Self {
            id,
            text,
            options,
            correct_index,
            difficulty: Difficulty::default(),
            category: DEFAULT_CATEGORY.to_string(),
        })
    }

    /// Set the difficulty (builder pattern).
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Set the category tag (builder pattern).
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Return a copy with new options, re-validating the correct index.
    pub fn with_options<S: Into<String>>(
        &self,
        options: impl IntoIterator<Item = S>,
        correct_index: usize,
    ) -> Result<Self, QuestionError> {
        let options: Options = options.into_iter().map(Into::into).collect();
        validate(&self.text, &options, correct_index)?;

        Ok(Self {
            options,
            correct_index,
            ..self.clone()
        })
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// All options in display order.
    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    /// The option at `index`, if it exists.
    #[must_use]
    pub fn option(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    /// Text of the correct option.
    #[must_use]
    pub fn correct_answer(&self) -> &str {
        // Validated on construction.
        &self.options[self.correct_index]
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// True if `index` names one of the options.
    #[must_use]
    pub fn is_valid_answer_index(&self, index: usize) -> bool {
        index < self.options.len()
    }

    /// True if `index` is the correct option.
    #[must_use]
    pub fn is_correct(&self, index: usize) -> bool {
        index == self.correct_index
    }
}

fn validate(text: &str, options: &[String], correct_index: usize) -> Result<(), QuestionError> {
    if text.trim().is_empty() {
        return Err(QuestionError::EmptyText);
    }
    if options.len() < 2 {
        return Err(QuestionError::TooFewOptions {
            count: options.len(),
        });
    }
    if correct_index >= options.len() {
        return Err(QuestionError::CorrectIndexOutOfRange {
            index: correct_index,
            option_count: options.len(),
        });
    }
    Ok(())
}

impl PartialEq for Question {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Question {}

impl std::hash::Hash for Question {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{} / {}] {}", self.id, self.category, self.difficulty, self.text)
    }
}

/// Wire shape of a `Question`; validated on the way in.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct QuestionRecord {
    id: QuestionId,
    text: String,
    options: Options,
    correct_index: usize,
    #[serde(default)]
    difficulty: Difficulty,
    #[serde(default = "default_category")]
    category: String,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

impl TryFrom<QuestionRecord> for Question {
    type Error = QuestionError;

    fn try_from(record: QuestionRecord) -> Result<Self, Self::Error> {
        validate(&record.text, &record.options, record.correct_index)?;
        Ok(Self {
            id: record.id,
            text: record.text,
            options: record.options,
            correct_index: record.correct_index,
            difficulty: record.difficulty,
            category: record.category,
        })
    }
}

impl From<Question> for QuestionRecord {
    fn from(question: Question) -> Self {
        Self {
            id: question.id,
            text: question.text,
            options: question.options,
            correct_index: question.correct_index,
            difficulty: question.difficulty,
            category: question.category,
        }
    }
}
