//! The turn-based session state machine.
//!
//! ```text
//! NotStarted --start()--> Active --end() / win condition--> Ended
//!      ^                                                      |
//!      +---------------------- reset() ----------------------+
//! ```
//!
//! Every mutating call either applies its whole update or returns an error
//! and changes nothing. Outcomes are reported through return values; there
//! are no callbacks.

use im::Vector;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::core::{
    Answer, AnswerRecord, Player, PlayerId, QuizRng, RandomSource, RosterError, SessionConfig,
    SessionError, StartError, MAX_PLAYERS,
};
use crate::questions::{Question, QuestionSource};
use crate::rules::{ranking, score_result, GameResult, ScoringMode};

/// Lifecycle state of a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionState {
    #[default]
    NotStarted,
    Active,
    Ended,
}

/// Why a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EndReason {
    /// `end()` was called. No winner.
    Abandoned,
    /// Eliminations left at most one player in play.
    LastPlayerStanding,
    /// The fixed question list ran out.
    QuestionsExhausted,
}

/// One playthrough over a roster and a question source.
///
/// ## Example
///
/// ```
/// use rust_quiz::core::Player;
/// use rust_quiz::questions::{Question, QuestionId, QuestionSource};
/// use rust_quiz::rules::ScoringMode;
/// use rust_quiz::session::GameSession;
///
/// let q = Question::new(QuestionId::new(1), "2+2", ["1", "2", "4", "5"], 2).unwrap();
/// let mut session: GameSession = GameSession::new(
///     [Player::new("Alice"), Player::new("Bob")],
///     QuestionSource::sequential([q]),
///     ScoringMode::Lives,
/// )
/// .unwrap();
///
/// session.start().unwrap();
/// assert_eq!(session.current_player().unwrap().name(), "Alice");
/// assert!(session.submit_answer(2).unwrap());
/// session.advance_turn().unwrap();
/// assert_eq!(session.current_player().unwrap().name(), "Bob");
/// ```
#[derive(Clone, Debug)]
pub struct GameSession<R = QuizRng> {
    pub(super) config: SessionConfig,
    pub(super) players: Vec<Player>,
    pub(super) source: QuestionSource<R>,
    pub(super) state: SessionState,
    pub(super) end_reason: Option<EndReason>,
    pub(super) result: Option<GameResult>,
    pub(super) current_player: usize,
    pub(super) question_index: usize,
    pub(super) current_question: Option<Question>,
    pub(super) answered: bool,
    pub(super) turn_number: u32,
    pub(super) history: Vector<AnswerRecord>,
}

impl<R: RandomSource> GameSession<R> {
    /// Create a session in `NotStarted`.
    ///
    /// Fails if two players share a name or the roster is too large. An
    /// empty roster or source is allowed here; `start` rejects it.
    pub fn new(
        players: impl IntoIterator<Item = Player>,
        source: QuestionSource<R>,
        config: impl Into<SessionConfig>,
    ) -> Result<Self, RosterError> {
        let mut session = Self {
            config: config.into(),
            players: Vec::new(),
            source,
            state: SessionState::NotStarted,
            end_reason: None,
            result: None,
            current_player: 0,
            question_index: 0,
            current_question: None,
            answered: false,
            turn_number: 0,
            history: Vector::new(),
        };
        for player in players {
            session.add_player(player)?;
        }
        Ok(session)
    }

    /// Add a player at the end of the turn order.
    ///
    /// Only allowed before the session starts.
    pub fn add_player(&mut self, player: Player) -> Result<(), RosterError> {
        if self.state != SessionState::NotStarted {
            return Err(RosterError::SessionInProgress);
        }
        if self.players.len() >= MAX_PLAYERS {
            return Err(RosterError::TooManyPlayers { max: MAX_PLAYERS });
        }
        if self.players.contains(&player) {
            return Err(RosterError::DuplicatePlayer(player.name().to_string()));
        }
        self.players.push(player);
        Ok(())
    }

    // === Lifecycle ===

    /// Begin play: first player, first question.
    pub fn start(&mut self) -> Result<(), StartError> {
        if self.state != SessionState::NotStarted {
            return Err(StartError::AlreadyStarted);
        }
        if self.source.is_empty() {
            return Err(StartError::EmptyQuestionSet);
        }
        if self.players.is_empty() {
            return Err(StartError::EmptyRoster);
        }

        let first = if self.source.is_sequential() {
            self.source.next_sequential(0)
        } else {
            self.source.next_random_from_category().ok()
        };
        let first = first.ok_or(StartError::EmptyQuestionSet)?;

        self.current_player = (0..self.players.len())
            .find(|&i| self.in_play(i))
            .unwrap_or(0);
        self.question_index = 0;
        self.current_question = Some(first);
        self.answered = false;
        self.turn_number = 1;
        self.history = Vector::new();
        self.state = SessionState::Active;
        debug!(
            "[Session] Started: {} players, {:?} mode",
            self.players.len(),
            self.config.mode
        );

        self.check_eliminations();
        Ok(())
    }

    /// Stop play without a winner.
    pub fn end(&mut self) -> Result<(), SessionError> {
        self.ensure_active()?;
        self.state = SessionState::Ended;
        self.end_reason = Some(EndReason::Abandoned);
        self.result = None;
        self.current_question = None;
        debug!("[Session] Ended by request");
        Ok(())
    }

    /// Back to `NotStarted` with fresh player stats. Call `start` to play again.
    pub fn reset(&mut self) {
        for player in &mut self.players {
            player.reset_for_new_game();
        }
        self.state = SessionState::NotStarted;
        self.end_reason = None;
        self.result = None;
        self.current_player = 0;
        self.question_index = 0;
        self.current_question = None;
        self.answered = false;
        self.turn_number = 0;
        self.history = Vector::new();
        debug!("[Session] Reset");
    }

    // === Play ===

    /// Score the current player's answer to the current question.
    ///
    /// Returns whether it was correct. An out-of-range choice is rejected
    /// and does not count as an attempt. `Answer::NoAnswer` is scored as a
    /// wrong answer. In lives mode an eliminated player cannot answer until
    /// `advance_turn` moves play on.
    pub fn submit_answer(&mut self, answer: impl Into<Answer>) -> Result<bool, SessionError> {
        let answer = answer.into();
        self.ensure_active()?;
        if self.answered {
            return Err(SessionError::AnswerAlreadySubmitted);
        }
        if !self.in_play(self.current_player) {
            let name = self.players[self.current_player].name();
            debug!("[Session] Rejected answer from eliminated {}", name);
            return Err(SessionError::PlayerEliminated(name.to_string()));
        }
        let question = self
            .current_question
            .as_ref()
            .ok_or(SessionError::SessionNotActive)?;

        let correct = match answer {
            Answer::Choice(index) if !question.is_valid_answer_index(index) => {
                debug!("[Session] Rejected answer {} for {}", index, question.id());
                return Err(SessionError::InvalidAnswerIndex {
                    index,
                    option_count: question.option_count(),
                });
            }
            Answer::Choice(index) => question.is_correct(index),
            Answer::NoAnswer => false,
        };
        let question_id = question.id();

        let points = i64::from(self.config.points_per_correct);
        let mode = self.config.mode;
        let player = &mut self.players[self.current_player];
        if correct {
            player.record_correct(points);
        } else if mode.costs_life() {
            player.record_incorrect();
        } else {
            player.record_miss();
        }
        trace!(
            "[Session] {} answered {:?} to {}: {}",
            player.name(),
            answer,
            question_id,
            if correct { "correct" } else { "wrong" }
        );

        self.answered = true;
        self.history.push_back(AnswerRecord::new(
            self.current_player_id(),
            question_id,
            answer,
            correct,
            self.turn_number,
        ));

        if !correct && mode.costs_life() {
            self.check_eliminations();
        }
        Ok(correct)
    }

    /// Pass the turn to the next player still in play, wrapping around.
    ///
    /// Returns `false` if nobody else is left, which ends the session.
    pub fn advance_turn(&mut self) -> Result<bool, SessionError> {
        self.ensure_active()?;
        let count = self.players.len();
        let next = (1..=count)
            .map(|offset| (self.current_player + offset) % count)
            .find(|&i| self.in_play(i) && (i != self.current_player || count == 1));

        match next {
            Some(next) => {
                self.current_player = next;
                self.turn_number = self.turn_number.saturating_add(1);
                self.answered = false;
                trace!("[Session] Turn {}: {}", self.turn_number, self.players[next].name());
                Ok(true)
            }
            None => {
                self.finish(EndReason::LastPlayerStanding, false);
                Ok(false)
            }
        }
    }

    /// Move on to the next question.
    ///
    /// A fixed list advances its cursor and returns `false` once it runs
    /// out, which ends the session. A random source draws a fresh question
    /// from the selected category.
    pub fn advance_question(&mut self) -> Result<bool, SessionError> {
        self.ensure_active()?;

        if self.source.is_sequential() {
            let next = self.question_index + 1;
            match self.source.next_sequential(next) {
                Some(question) => {
                    self.set_question(next, question);
                    Ok(true)
                }
                None => {
                    self.finish(EndReason::QuestionsExhausted, true);
                    Ok(false)
                }
            }
        } else {
            let question = self.source.next_random_from_category()?;
            self.set_question(self.question_index + 1, question);
            Ok(true)
        }
    }

    /// Switch the category random draws come from.
    ///
    /// Takes effect from the next draw. Returns `Ok(false)` for a fixed
    /// question list, which has no category.
    pub fn select_category(&mut self, category: &str) -> Result<bool, SessionError> {
        let switched = self.source.select_category(category)?;
        if switched {
            debug!("[Session] Selected category '{}'", category);
        }
        Ok(switched)
    }

    fn set_question(&mut self, index: usize, question: Question) {
        trace!("[Session] Question {}: {}", index + 1, question.id());
        self.question_index = index;
        self.current_question = Some(question);
        self.answered = false;
    }

    fn ensure_active(&self) -> Result<(), SessionError> {
        if self.state == SessionState::Active {
            Ok(())
        } else {
            Err(SessionError::SessionNotActive)
        }
    }

    /// Eliminated players sit out in lives mode; in cumulative mode
    /// everyone keeps playing.
    fn in_play(&self, index: usize) -> bool {
        !self.config.mode.costs_life() || !self.players[index].is_eliminated()
    }

    pub(super) fn check_eliminations(&mut self) {
        if self.config.mode.evaluate(&self.players, false).is_some() {
            self.finish(EndReason::LastPlayerStanding, false);
        }
    }

    fn finish(&mut self, reason: EndReason, exhausted: bool) {
        let result = self.evaluate(reason, exhausted);
        debug!("[Session] Game over ({:?}): {:?}", reason, result);
        self.state = SessionState::Ended;
        self.end_reason = Some(reason);
        self.result = result;
        self.current_question = None;
    }

    pub(super) fn evaluate(&self, reason: EndReason, exhausted: bool) -> Option<GameResult> {
        if reason == EndReason::Abandoned {
            return None;
        }
        let mode = self.config.mode;
        let result = mode.evaluate(&self.players, exhausted).unwrap_or_else(|| {
            score_result(&self.players, |p| !mode.costs_life() || !p.is_eliminated())
        });
        Some(result)
    }

    // === Queries ===

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// True between a successful `start` and the end of the game.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state == SessionState::Active
    }

    /// True once the session has ended, for any reason.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state == SessionState::Ended
    }

    #[must_use]
    pub fn end_reason(&self) -> Option<EndReason> {
        self.end_reason
    }

    /// The full outcome, including ties. `None` until the game is decided.
    #[must_use]
    pub fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    /// The single winner under the configured tie-break.
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        let id = self.result.as_ref()?.winner(self.config.tie_break)?;
        self.players.get(id.index())
    }

    /// The question being asked, while active.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.current_question.as_ref().filter(|_| self.is_active())
    }

    /// The player whose turn it is, while active.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        if self.is_active() {
            self.players.get(self.current_player)
        } else {
            None
        }
    }

    fn current_player_id(&self) -> PlayerId {
        PlayerId::new(self.current_player as u8)
    }

    /// Roster position of the current player.
    #[must_use]
    pub fn current_player_index(&self) -> usize {
        self.current_player
    }

    /// Position of the current question (0-based; draw count for random sources).
    #[must_use]
    pub fn current_question_index(&self) -> usize {
        self.question_index
    }

    /// Whether the current player has answered this turn.
    #[must_use]
    pub fn has_answered(&self) -> bool {
        self.answered
    }

    /// Whether `advance_question` would find another question.
    #[must_use]
    pub fn has_next_question(&self) -> bool {
        match self.source.len() {
            Some(len) => self.is_active() && self.question_index + 1 < len,
            None => self.is_active(),
        }
    }

    /// Turn counter, starting at 1 once active.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// The roster, in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    #[must_use]
    pub fn player_by_name(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name() == name)
    }

    /// Leaderboard: highest score first, equal scores in roster order.
    #[must_use]
    pub fn players_by_score(&self) -> Vec<&Player> {
        ranking(&self.players)
            .into_iter()
            .map(|id| &self.players[id.index()])
            .collect()
    }

    /// Number of players with lives left.
    #[must_use]
    pub fn active_player_count(&self) -> usize {
        self.players.iter().filter(|p| !p.is_eliminated()).count()
    }

    /// True if every player is out of lives.
    #[must_use]
    pub fn all_players_eliminated(&self) -> bool {
        self.players.iter().all(Player::is_eliminated)
    }

    /// Every scored answer so far, oldest first.
    #[must_use]
    pub fn history(&self) -> Vector<AnswerRecord> {
        self.history.clone()
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn mode(&self) -> ScoringMode {
        self.config.mode
    }

    #[must_use]
    pub fn source(&self) -> &QuestionSource<R> {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questions::QuestionId;

    fn q(id: u32, correct: usize) -> Question {
        Question::new(QuestionId::new(id), format!("Q{}", id), ["A", "B", "C", "D"], correct)
            .unwrap()
    }

    fn duel(mode: ScoringMode) -> GameSession {
        GameSession::new(
            [Player::new("Alice"), Player::new("Bob")],
            QuestionSource::sequential([q(1, 2), q(2, 1), q(3, 0)]),
            mode,
        )
        .unwrap()
    }

    #[test]
    fn test_new_session_not_started() {
        let session = duel(ScoringMode::Lives);

        assert_eq!(session.state(), SessionState::NotStarted);
        assert!(session.current_question().is_none());
        assert!(session.current_player().is_none());
        assert!(session.winner().is_none());
        assert!(!session.is_game_over());
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let result = GameSession::new(
            [Player::new("Alice"), Player::new("Alice")],
            QuestionSource::<QuizRng>::sequential([q(1, 0)]),
            ScoringMode::Lives,
        );
        assert_eq!(result.unwrap_err(), RosterError::DuplicatePlayer("Alice".into()));
    }

    #[test]
    fn test_start() {
        let mut session = duel(ScoringMode::Lives);
        session.start().unwrap();

        assert!(session.is_active());
        assert_eq!(session.current_question_index(), 0);
        assert_eq!(session.current_player_index(), 0);
        assert_eq!(session.current_question().unwrap().id(), QuestionId::new(1));
        assert_eq!(session.turn_number(), 1);
    }

    #[test]
    fn test_start_twice() {
        let mut session = duel(ScoringMode::Lives);
        session.start().unwrap();
        assert_eq!(session.start(), Err(StartError::AlreadyStarted));
    }

    #[test]
    fn test_start_empty_question_set() {
        let mut session: GameSession = GameSession::new(
            [Player::new("Alice")],
            QuestionSource::sequential([]),
            ScoringMode::Lives,
        )
        .unwrap();

        assert_eq!(session.start(), Err(StartError::EmptyQuestionSet));
        assert_eq!(session.state(), SessionState::NotStarted);
    }

    #[test]
    fn test_start_empty_roster() {
        let mut session: GameSession = GameSession::new(
            [],
            QuestionSource::sequential([q(1, 0)]),
            ScoringMode::Lives,
        )
        .unwrap();

        assert_eq!(session.start(), Err(StartError::EmptyRoster));
        assert_eq!(session.state(), SessionState::NotStarted);
    }

    #[test]
    fn test_add_player_after_start() {
        let mut session = duel(ScoringMode::Lives);
        session.start().unwrap();

        assert_eq!(
            session.add_player(Player::new("Carol")),
            Err(RosterError::SessionInProgress)
        );
    }

    #[test]
    fn test_submit_not_active() {
        let mut session = duel(ScoringMode::Lives);
        assert_eq!(session.submit_answer(2), Err(SessionError::SessionNotActive));
        assert_eq!(session.advance_turn(), Err(SessionError::SessionNotActive));
        assert_eq!(session.advance_question(), Err(SessionError::SessionNotActive));
        assert_eq!(session.end(), Err(SessionError::SessionNotActive));
    }

    #[test]
    fn test_submit_correct_awards_points() {
        let mut session = duel(ScoringMode::Lives);
        session.start().unwrap();

        assert!(session.submit_answer(2).unwrap());
        let alice = session.player(PlayerId::new(0)).unwrap();
        assert_eq!(alice.score(), 10);
        assert_eq!(alice.correct_answers(), 1);
    }

    #[test]
    fn test_submit_invalid_index_changes_nothing() {
        let mut session = duel(ScoringMode::Lives);
        session.start().unwrap();

        assert_eq!(
            session.submit_answer(10),
            Err(SessionError::InvalidAnswerIndex {
                index: 10,
                option_count: 4
            })
        );
        let alice = session.player(PlayerId::new(0)).unwrap();
        assert_eq!(alice.total_answered(), 0);
        assert_eq!(alice.remaining_lives(), 3);
        assert!(!session.has_answered());
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_second_submit_in_turn_rejected() {
        let mut session = duel(ScoringMode::Lives);
        session.start().unwrap();

        session.submit_answer(0).unwrap();
        assert_eq!(session.submit_answer(2), Err(SessionError::AnswerAlreadySubmitted));
        assert_eq!(session.player(PlayerId::new(0)).unwrap().total_answered(), 1);
    }

    #[test]
    fn test_no_answer_counts_as_wrong() {
        let mut session = duel(ScoringMode::Lives);
        session.start().unwrap();

        assert!(!session.submit_answer(Answer::NoAnswer).unwrap());
        assert_eq!(session.player(PlayerId::new(0)).unwrap().remaining_lives(), 2);
    }

    #[test]
    fn test_eliminated_player_cannot_answer_on_new_question() {
        let mut session: GameSession = GameSession::new(
            [
                Player::with_lives("Alice", 1),
                Player::with_lives("Bob", 1),
                Player::with_lives("Carol", 1),
            ],
            QuestionSource::sequential([q(1, 2), q(2, 2), q(3, 2)]),
            ScoringMode::Lives,
        )
        .unwrap();
        session.start().unwrap();

        assert!(!session.submit_answer(0).unwrap());
        assert!(session.is_active());
        assert!(session.advance_question().unwrap());

        assert_eq!(
            session.submit_answer(2),
            Err(SessionError::PlayerEliminated("Alice".into()))
        );
        let alice = session.player(PlayerId::new(0)).unwrap();
        assert_eq!(alice.score(), 0);
        assert_eq!(alice.total_answered(), 1);

        session.advance_turn().unwrap();
        assert_eq!(session.current_player().unwrap().name(), "Bob");
        assert!(session.submit_answer(2).unwrap());
    }

    #[test]
    fn test_advance_question_exhausts() {
        let mut session = duel(ScoringMode::Cumulative);
        session.start().unwrap();

        assert!(session.has_next_question());
        assert!(session.advance_question().unwrap());
        assert_eq!(session.current_question().unwrap().id(), QuestionId::new(2));
        assert!(session.advance_question().unwrap());
        assert!(!session.has_next_question());
        assert!(!session.advance_question().unwrap());

        assert!(session.is_game_over());
        assert_eq!(session.end_reason(), Some(EndReason::QuestionsExhausted));
        assert!(session.current_question().is_none());
    }

    #[test]
    fn test_end_has_no_winner() {
        let mut session = duel(ScoringMode::Cumulative);
        session.start().unwrap();
        session.submit_answer(2).unwrap();

        session.end().unwrap();

        assert!(session.is_game_over());
        assert_eq!(session.end_reason(), Some(EndReason::Abandoned));
        assert!(session.winner().is_none());
        assert_eq!(session.start(), Err(StartError::AlreadyStarted));
    }

    #[test]
    fn test_reset() {
        let mut session = duel(ScoringMode::Lives);
        session.start().unwrap();
        session.submit_answer(2).unwrap();
        session.advance_question().unwrap();
        session.advance_turn().unwrap();

        session.reset();

        assert_eq!(session.state(), SessionState::NotStarted);
        assert_eq!(session.current_question_index(), 0);
        assert_eq!(session.current_player_index(), 0);
        assert!(session.players().iter().all(|p| p.score() == 0));
        assert!(session.history().is_empty());

        session.start().unwrap();
        assert!(session.is_active());
    }

    #[test]
    fn test_leaderboard_and_counts() {
        let mut session = duel(ScoringMode::Lives);
        session.start().unwrap();
        session.submit_answer(1).unwrap(); // Alice wrong
        session.advance_turn().unwrap();
        session.submit_answer(2).unwrap(); // Bob right

        let names: Vec<_> = session.players_by_score().iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["Bob", "Alice"]);
        assert_eq!(session.active_player_count(), 2);
        assert!(!session.all_players_eliminated());
        assert_eq!(session.player_by_name("Bob").unwrap().score(), 10);
    }

    #[test]
    fn test_history() {
        let mut session = duel(ScoringMode::Lives);
        session.start().unwrap();
        session.submit_answer(2).unwrap();
        session.advance_turn().unwrap();
        session.submit_answer(Answer::NoAnswer).unwrap();

        let history = session.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].player, PlayerId::new(0));
        assert!(history[0].correct);
        assert_eq!(history[1].player, PlayerId::new(1));
        assert_eq!(history[1].answer, Answer::NoAnswer);
        assert_eq!(history[1].turn, 2);
    }
}
