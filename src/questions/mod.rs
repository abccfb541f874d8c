//! Question system: records, the category bank, and supply strategies.
//!
//! ## Key Types
//!
//! - `QuestionId`: Identifier, unique within a bank
//! - `Question`: Validated, immutable multiple-choice record
//! - `QuestionBank`: Questions by category with injected randomness
//! - `QuestionSource`: Sequential list or random per-category draw

pub mod bank;
pub mod question;
pub mod source;

pub use bank::{QuestionBank, DEFAULT_CATEGORIES};
pub use question::{Difficulty, Options, Question, QuestionId, DEFAULT_CATEGORY};
pub use source::QuestionSource;
