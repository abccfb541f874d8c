//! Save and resume a session.
//!
//! A `SessionSnapshot` captures roster, cursor, and turn state but not the
//! question source: it is restored onto a session built over the same
//! source. Restoring validates the whole snapshot before touching the
//! session, so a rejected snapshot leaves it unchanged.

use im::Vector;
use log::{debug, warn};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::game::{EndReason, GameSession, SessionState};
use crate::core::{
    AnswerRecord, CodecError, Player, RandomSource, RestoreError, RosterError, MAX_PLAYERS,
};
use crate::questions::Question;
use crate::rules::ScoringMode;

/// Serializable session state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub mode: ScoringMode,
    pub players: Vec<Player>,
    pub state: SessionState,
    pub end_reason: Option<EndReason>,
    pub current_player: usize,
    pub question_index: usize,
    /// Needed for random sources; a fixed list re-reads it by index.
    pub current_question: Option<Question>,
    pub answered: bool,
    pub turn_number: u32,
    #[serde(default)]
    pub history: Vector<AnswerRecord>,
}

impl SessionSnapshot {
    /// Compact binary encoding for save files.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CodecError> {
        bincode::serialize(self).map_err(CodecError::Encode)
    }

    /// Decode a snapshot written by `to_bytes`.
    ///
    /// Player and question records are re-validated while decoding.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        bincode::deserialize(bytes).map_err(CodecError::Decode)
    }
}

impl<R: RandomSource> GameSession<R> {
    /// Capture the current state.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            mode: self.config.mode,
            players: self.players.clone(),
            state: self.state,
            end_reason: self.end_reason,
            current_player: self.current_player,
            question_index: self.question_index,
            current_question: self.current_question.clone(),
            answered: self.answered,
            turn_number: self.turn_number,
            history: self.history.clone(),
        }
    }

    /// Replace this session's state with a snapshot.
    ///
    /// The result of an ended game is recomputed from the restored roster.
    /// An active snapshot whose roster already decides the game is restored
    /// as ended.
    pub fn restore(&mut self, snapshot: SessionSnapshot) -> Result<(), RestoreError> {
        let question = self.validate(&snapshot).map_err(|err| {
            warn!("[Session] Rejected snapshot: {}", err);
            err
        })?;

        self.players = snapshot.players;
        self.state = snapshot.state;
        self.end_reason = match snapshot.state {
            SessionState::Ended => snapshot.end_reason.or(Some(EndReason::Abandoned)),
            _ => None,
        };
        self.current_player = snapshot.current_player;
        self.question_index = snapshot.question_index;
        self.current_question = question;
        self.answered = snapshot.answered;
        self.turn_number = snapshot.turn_number;
        self.history = snapshot.history;
        self.result = self
            .end_reason
            .and_then(|reason| self.evaluate(reason, reason == EndReason::QuestionsExhausted));
        if self.state == SessionState::Active {
            self.check_eliminations();
        }

        debug!(
            "[Session] Restored {:?} session with {} players at turn {}",
            self.state,
            self.players.len(),
            self.turn_number
        );
        Ok(())
    }

    /// Check a snapshot against this session and resolve its current question.
    fn validate(&self, snapshot: &SessionSnapshot) -> Result<Option<Question>, RestoreError> {
        if snapshot.mode != self.config.mode {
            return Err(RestoreError::ModeMismatch {
                snapshot: snapshot.mode,
                session: self.config.mode,
            });
        }
        if snapshot.players.len() > MAX_PLAYERS {
            return Err(RosterError::TooManyPlayers { max: MAX_PLAYERS }.into());
        }
        let mut names = FxHashSet::default();
        for player in &snapshot.players {
            if !names.insert(player.name()) {
                return Err(RestoreError::DuplicatePlayer(player.name().to_string()));
            }
        }

        if snapshot.state != SessionState::Active {
            return Ok(None);
        }

        if snapshot.current_player >= snapshot.players.len() {
            return Err(RestoreError::PlayerIndexOutOfRange {
                index: snapshot.current_player,
                player_count: snapshot.players.len(),
            });
        }
        let current = &snapshot.players[snapshot.current_player];
        if snapshot.mode.costs_life() && current.is_eliminated() {
            return Err(RestoreError::CurrentPlayerEliminated(current.name().to_string()));
        }
        match self.source.len() {
            Some(question_count) => self
                .source
                .next_sequential(snapshot.question_index)
                .map(Some)
                .ok_or(RestoreError::QuestionIndexOutOfRange {
                    index: snapshot.question_index,
                    question_count,
                }),
            None => snapshot
                .current_question
                .clone()
                .map(Some)
                .ok_or(RestoreError::MissingQuestion),
        }
    }
}
