//! Match history and deterministic replay.
//!
//! A `MatchRecord` keeps the opening state and every accepted move. Because
//! `apply_move` is deterministic, the opening state plus the move list is
//! enough to rebuild any later position and its step events.
//!
//! Uses `im::Vector` so a record can be cloned in O(1) when branching
//! analysis from a position.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{GameState, Move, MoveRecord};
use crate::error::{EngineError, Result};
use crate::sowing::EventLog;

use super::engine::{apply_move, MoveOutcome};

/// Opening state, current state, and accepted moves of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    initial: GameState,
    current: GameState,
    history: Vector<MoveRecord>,
}

impl MatchRecord {
    /// Start recording from `initial`.
    #[must_use]
    pub fn new(initial: GameState) -> Self {
        Self {
            current: initial.clone(),
            initial,
            history: Vector::new(),
        }
    }

    /// The opening state.
    #[must_use]
    pub fn initial(&self) -> &GameState {
        &self.initial
    }

    /// The latest state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.current
    }

    /// Accepted moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Apply a move to the latest state. Only accepted moves are recorded.
    pub fn play(&mut self, mv: Move) -> Result<MoveOutcome> {
        let player = self.current.current_player;
        let turn = self.current.turn;
        let outcome = apply_move(&self.current, mv)?;

        if outcome.is_accepted() {
            self.history.push_back(MoveRecord::new(player, mv, turn));
            self.current = outcome.state.clone();
        }
        Ok(outcome)
    }

    /// Rebuild the latest state from the opening state and the history.
    pub fn replay(&self) -> Result<GameState> {
        self.replay_events().map(|(state, _)| state)
    }

    /// Rebuild the latest state along with each move's step events.
    pub fn replay_events(&self) -> Result<(GameState, Vec<EventLog>)> {
        let mut state = self.initial.clone();
        let mut logs = Vec::with_capacity(self.history.len());

        for record in &self.history {
            let outcome = apply_move(&state, record.mv)?;
            if let Some(reason) = outcome.rejection {
                return Err(EngineError::ReplayDiverged {
                    turn: record.turn,
                    player: record.player,
                    reason,
                });
            }
            logs.push(outcome.events);
            state = outcome.state;
        }

        Ok((state, logs))
    }
}
