//! Scoring modes and win-condition evaluation.
//!
//! A `ScoringMode` decides two things: what a wrong answer costs, and when
//! the game is over. Evaluation is a pure function of the roster and
//! whether the question supply is exhausted.

use serde::{Deserialize, Serialize};

use super::result::GameResult;
use crate::core::{Player, PlayerId};

/// How wrong answers are scored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoringMode {
    /// A wrong answer costs a life. Last player standing wins.
    #[default]
    Lives,
    /// A wrong answer only counts as an attempt. Highest score wins once
    /// the questions run out.
    Cumulative,
}

impl ScoringMode {
    /// Whether a wrong answer costs the player a life.
    #[must_use]
    pub fn costs_life(self) -> bool {
        matches!(self, ScoringMode::Lives)
    }

    /// Evaluate the win condition.
    ///
    /// Returns `None` while the game continues.
    ///
    /// - `Lives`: over once at most one player is left standing (for a
    ///   solo roster: once the player is eliminated); if the questions run
    ///   out first, the best-scoring survivors win.
    /// - `Cumulative`: over only when the questions run out; best score wins.
    #[must_use]
    pub fn evaluate(self, players: &[Player], questions_exhausted: bool) -> Option<GameResult> {
        match self {
            ScoringMode::Lives => {
                if let Some(result) = elimination_result(players) {
                    return Some(result);
                }
                questions_exhausted.then(|| score_result(players, |p| !p.is_eliminated()))
            }
            ScoringMode::Cumulative => questions_exhausted.then(|| score_result(players, |_| true)),
        }
    }
}

/// How `winner()` resolves a tie for first place.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TieBreak {
    /// The tied player earliest in the roster wins.
    #[default]
    RosterOrder,
    /// Nobody wins outright; `result()` lists all tied players.
    Shared,
}

/// Players that still have lives, in roster order.
#[must_use]
pub fn survivors(players: &[Player]) -> Vec<PlayerId> {
    PlayerId::all(players.len())
        .zip(players)
        .filter(|(_, p)| !p.is_eliminated())
        .map(|(id, _)| id)
        .collect()
}

/// Result decided by eliminations alone, if any.
#[must_use]
pub fn elimination_result(players: &[Player]) -> Option<GameResult> {
    let alive = survivors(players);
    let decided = match players.len() {
        0 => false,
        1 => alive.is_empty(),
        _ => alive.len() <= 1,
    };
    decided.then(|| GameResult::from_leaders(alive))
}

/// Result by highest score among players matching `eligible`.
///
/// All players sharing the top score are reported, in roster order.
#[must_use]
pub fn score_result(players: &[Player], eligible: impl Fn(&Player) -> bool) -> GameResult {
    let candidates: Vec<(PlayerId, &Player)> = PlayerId::all(players.len())
        .zip(players)
        .filter(|(_, p)| eligible(p))
        .collect();

    let Some(best) = candidates.iter().map(|(_, p)| p.score()).max() else {
        return GameResult::Draw;
    };

    let leaders = candidates
        .into_iter()
        .filter(|(_, p)| p.score() == best)
        .map(|(id, _)| id)
        .collect();
    GameResult::from_leaders(leaders)
}

/// Roster positions sorted by score, highest first. Equal scores keep
/// roster order.
#[must_use]
pub fn ranking(players: &[Player]) -> Vec<PlayerId> {
    let mut ids: Vec<PlayerId> = PlayerId::all(players.len()).collect();
    ids.sort_by(|a, b| players[b.index()].score().cmp(&players[a.index()].score()));
    ids
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(name: &str, score: i64, lives: i64) -> Player {
        let mut p = Player::new(name);
        p.set_score(score);
        p.set_remaining_lives(lives);
        p
    }

    #[test]
    fn test_costs_life() {
        assert!(ScoringMode::Lives.costs_life());
        assert!(!ScoringMode::Cumulative.costs_life());
    }

    #[test]
    fn test_lives_head_to_head() {
        let players = vec![player("Alice", 0, 2), player("Bob", 0, 0)];

        assert_eq!(
            ScoringMode::Lives.evaluate(&players, false),
            Some(GameResult::Winner(PlayerId::new(0)))
        );
    }

    #[test]
    fn test_lives_continues_with_two_survivors() {
        let players = vec![player("Alice", 0, 1), player("Bob", 0, 0), player("Carol", 0, 3)];
        assert_eq!(ScoringMode::Lives.evaluate(&players, false), None);
    }

    #[test]
    fn test_lives_solo() {
        let alive = vec![player("Alice", 0, 1)];
        assert_eq!(ScoringMode::Lives.evaluate(&alive, false), None);

        let dead = vec![player("Alice", 0, 0)];
        assert_eq!(ScoringMode::Lives.evaluate(&dead, false), Some(GameResult::Draw));
    }

    #[test]
    fn test_lives_exhausted_scores_survivors() {
        let players = vec![player("Alice", 30, 1), player("Bob", 50, 0), player("Carol", 20, 2)];

        assert_eq!(
            ScoringMode::Lives.evaluate(&players, true),
            Some(GameResult::Winner(PlayerId::new(0)))
        );
    }

    #[test]
    fn test_cumulative_waits_for_exhaustion() {
        let players = vec![player("Alice", 50, 3), player("Bob", 30, 3)];

        assert_eq!(ScoringMode::Cumulative.evaluate(&players, false), None);
        assert_eq!(
            ScoringMode::Cumulative.evaluate(&players, true),
            Some(GameResult::Winner(PlayerId::new(0)))
        );
    }

    #[test]
    fn test_cumulative_ignores_lives() {
        let players = vec![player("Alice", 10, 0), player("Bob", 0, 0)];
        assert_eq!(ScoringMode::Cumulative.evaluate(&players, false), None);
    }

    #[test]
    fn test_score_tie() {
        let players = vec![player("Alice", 20, 3), player("Bob", 20, 3), player("Carol", 10, 3)];

        assert_eq!(
            score_result(&players, |_| true),
            GameResult::Winners(vec![PlayerId::new(0), PlayerId::new(1)])
        );
    }

    #[test]
    fn test_empty_roster() {
        assert_eq!(ScoringMode::Lives.evaluate(&[], true), Some(GameResult::Draw));
        assert_eq!(elimination_result(&[]), None);
    }

    #[test]
    fn test_ranking_is_stable() {
        let players = vec![player("Alice", 30, 3), player("Bob", 50, 3), player("Carol", 30, 3)];

        assert_eq!(
            ranking(&players),
            vec![PlayerId::new(1), PlayerId::new(0), PlayerId::new(2)]
        );
    }
}
