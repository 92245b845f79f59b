//! Move application and the rules engine trait.
//!
//! `create_game` and `apply_move` are the engine's whole surface. Everything
//! else composes them: validation, then the sowing machine, then the
//! win check, then a seed-conservation check before the new state is
//! handed back.
//!
//! `apply_move` is a pure function. It never mutates its input, performs no
//! I/O, and is safe to call from many threads at once on independent states.
//! Serializing moves per game is the caller's job.

use tracing::{debug, warn};

use crate::core::{GameConfig, GameState, Move, Phase, Pit, Player, Side, Variant};
use crate::error::{EngineError, IllegalMove, Result};
use crate::sowing::{EventLog, SowOutcome, SowingMachine};

use super::validator::{is_legal, validate};
use super::victory::{evaluate, Verdict};

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameResult {
    pub winner: Player,
    pub loser: Player,
}

impl GameResult {
    #[must_use]
    pub fn new(winner: Player) -> Self {
        Self {
            winner,
            loser: winner.opponent(),
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        self.winner == player
    }
}

/// What `apply_move` produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The state after the move, or the input state when rejected.
    pub state: GameState,

    /// Step events in the order they happened. Empty when rejected.
    pub events: EventLog,

    /// Why the move was refused, if it was.
    pub rejection: Option<IllegalMove>,
}

impl MoveOutcome {
    fn rejected(state: &GameState, reason: IllegalMove) -> Self {
        Self {
            state: state.clone(),
            events: EventLog::new(),
            rejection: Some(reason),
        }
    }

    /// Was the move carried out?
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        self.rejection.is_none()
    }

    /// Status line for the player: the rejection reason, or the new state's
    /// message.
    #[must_use]
    pub fn message(&self) -> String {
        match self.rejection {
            Some(reason) => reason.to_string(),
            None => self.state.message.clone(),
        }
    }
}

/// Create a new game in the reference layout for `variant`.
#[must_use]
pub fn create_game(variant: Variant) -> GameState {
    GameConfig::for_variant(variant).build()
}

/// Apply one move.
///
/// Illegal moves are not errors: the outcome carries the unchanged state,
/// an empty event log and the reason. `Err` means the engine broke an
/// invariant and the move was abandoned.
pub fn apply_move(state: &GameState, mv: Move) -> Result<MoveOutcome> {
    let player = state.current_player;
    let pit = match validate(state, mv) {
        Ok(pit) => pit,
        Err(reason) => {
            debug!(%player, pit = mv.pit_index, %reason, "move rejected");
            return Ok(MoveOutcome::rejected(state, reason));
        }
    };

    let mut players = state.players.clone();
    let machine = match state.phase {
        Phase::Play => SowingMachine::lift(&state.board, player, pit),
        Phase::Setup => {
            let hand = &mut players[player].seeds_in_hand;
            *hand = hand.saturating_sub(1);
            SowingMachine::place(&state.board, player, pit, *hand)
        }
    };

    let (board, events) = match machine.run()? {
        SowOutcome::Settled { board, events } => (board, events),
        SowOutcome::Endless { events } => {
            warn!(%player, %pit, steps = events.len(), "sowing never ends, move rejected");
            return Ok(MoveOutcome::rejected(state, IllegalMove::EndlessSowing));
        }
    };

    let phase = if state.phase == Phase::Setup && players.iter().all(|(_, seeds)| seeds.seeds_in_hand == 0) {
        Phase::Play
    } else {
        state.phase
    };

    let verdict = evaluate(&board, &players, phase, player);
    let (current_player, winner) = match verdict {
        Verdict::Continue { next } => (next, None),
        Verdict::Won { winner } => (winner, Some(winner)),
    };

    let next = GameState {
        board,
        players,
        current_player,
        phase,
        game_over: winner.is_some(),
        winner,
        message: verdict.message(),
        turn: state.turn + 1,
    };

    let expected = state.seed_total();
    let found = next.seed_total();
    if found != expected {
        return Err(EngineError::SeedCountMismatch { expected, found });
    }

    debug!(
        %player,
        %pit,
        steps = events.len(),
        phase = %next.phase,
        game_over = next.game_over,
        "move applied"
    );

    Ok(MoveOutcome {
        state: next,
        events,
        rejection: None,
    })
}

/// Every move the current player could legally make.
///
/// A listed move can still be refused with `IllegalMove::EndlessSowing`,
/// which only shows up once the sowing has been played out.
#[must_use]
pub fn legal_moves(state: &GameState) -> Vec<Move> {
    if state.game_over {
        return Vec::new();
    }
    Side::of(state.current_player)
        .pits()
        .map(Move::at)
        .filter(|&mv| is_legal(state, mv))
        .collect()
}

/// Rules engine trait.
///
/// The seam between the engine and its collaborators (servers, bots,
/// analysis tools). `Bao` is the implementation; callers can wrap it to
/// add bookkeeping without touching the rules.
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Build the opening state.
    fn new_game(&self) -> GameState {
        self.config().build()
    }

    /// Legal moves for whoever is to move.
    fn legal_moves(&self, state: &GameState) -> Vec<Move>;

    /// Apply a move, returning the new state and its step events.
    fn apply_move(&self, state: &GameState, mv: Move) -> Result<MoveOutcome>;

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        state.result()
    }
}

/// The Bao rules.
#[derive(Clone, Debug)]
pub struct Bao {
    config: GameConfig,
}

impl Bao {
    /// Rules with the reference layout for `variant`.
    #[must_use]
    pub fn new(variant: Variant) -> Self {
        Self::with_config(GameConfig::for_variant(variant))
    }

    /// Rules with a custom layout.
    #[must_use]
    pub fn with_config(config: GameConfig) -> Self {
        Self { config }
    }

    /// Is `pit` a legal choice right now?
    #[must_use]
    pub fn is_legal(&self, state: &GameState, pit: Pit) -> bool {
        is_legal(state, Move::at(pit))
    }
}

impl RulesEngine for Bao {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn legal_moves(&self, state: &GameState) -> Vec<Move> {
        legal_moves(state)
    }

    fn apply_move(&self, state: &GameState, mv: Move) -> Result<MoveOutcome> {
        apply_move(state, mv)
    }
}
