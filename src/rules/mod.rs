//! Game rules: scoring modes, tie-breaks, and win conditions.
//!
//! The two game formats differ only here:
//! - `ScoringMode::Lives`: wrong answers cost lives, last player standing wins
//! - `ScoringMode::Cumulative`: wrong answers cost nothing, best score wins
//!   once the questions run out
//!
//! The session calls into these functions but never hardcodes either rule.

pub mod result;
pub mod scoring;

pub use result::GameResult;
pub use scoring::{elimination_result, ranking, score_result, survivors, ScoringMode, TieBreak};
