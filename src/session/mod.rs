//! Game sessions: roster, turn order, question cursor, and lifecycle.
//!
//! ## Lifecycle
//!
//! A session is built `NotStarted`, becomes `Active` on `start()`, and
//! ends either by request (`end()`, no winner) or when its scoring mode
//! decides the game. `reset()` returns it to `NotStarted` with fresh
//! player stats.
//!
//! ## Turns and questions
//!
//! Turns and questions advance independently: `advance_turn()` passes
//! play to the next player still in the game, `advance_question()` moves
//! the question cursor. Drivers combine them however their format needs
//! (one question per turn for campaigns, several per turn for duels).
//!
//! ## Persistence
//!
//! `snapshot()` and `restore()` save and resume a session over the same
//! question source.

pub mod builder;
pub mod game;
pub mod snapshot;

pub use builder::GameSessionBuilder;
pub use game::{EndReason, GameSession, SessionState};
pub use snapshot::SessionSnapshot;
