//! Outcome of a finished session.

use serde::{Deserialize, Serialize};

use super::scoring::TieBreak;
use crate::core::PlayerId;

/// Result of a completed game.
///
/// Ties are always reported in full as `Winners`; `TieBreak` decides what
/// `winner()` makes of them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Several players tied for first, in roster order.
    Winners(Vec<PlayerId>),
    /// Nobody won (everyone eliminated, or no players).
    Draw,
}

impl GameResult {
    /// Build a result from the set of leading players (roster order).
    #[must_use]
    pub fn from_leaders(mut leaders: Vec<PlayerId>) -> Self {
        match leaders.len() {
            0 => GameResult::Draw,
            1 => GameResult::Winner(leaders.remove(0)),
            _ => GameResult::Winners(leaders),
        }
    }

    /// Check if a player won or shares the win.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
            GameResult::Draw => false,
        }
    }

    /// True if more than one player shares first place.
    #[must_use]
    pub fn is_tie(&self) -> bool {
        matches!(self, GameResult::Winners(_))
    }

    /// The single winner under a tie-break policy.
    ///
    /// `RosterOrder` picks the earliest tied player; `Shared` gives no
    /// single winner for a tie.
    #[must_use]
    pub fn winner(&self, tie_break: TieBreak) -> Option<PlayerId> {
        match (self, tie_break) {
            (GameResult::Winner(p), _) => Some(*p),
            (GameResult::Winners(ps), TieBreak::RosterOrder) => ps.iter().min().copied(),
            (GameResult::Winners(_), TieBreak::Shared) => None,
            (GameResult::Draw, _) => None,
        }
    }
}
