//! # bao-engine
//!
//! A deterministic move engine for Bao, a two-player mancala-family game
//! played on four rows of eight pits.
//!
//! ## Design Principles
//!
//! 1. **Pure**: `apply_move` takes a state and a move and returns a new state
//!    plus a step log. No I/O, no randomness, no shared mutable state.
//!
//! 2. **Replayable**: every seed movement is recorded as a `StepEvent`, in
//!    order, so a renderer can animate a move exactly as the engine played it.
//!
//! 3. **Fail closed**: illegal moves come back as rejections with the state
//!    untouched; engine defects (seeds created or lost, runaway sowing) abort
//!    the move with an `EngineError`.
//!
//! ## Example
//!
//! ```
//! use bao_engine::{apply_move, create_game, Move, Player, Variant};
//!
//! let game = create_game(Variant::Prefilled);
//! let outcome = apply_move(&game, Move::new(0)).unwrap();
//!
//! assert!(outcome.is_accepted());
//! assert_eq!(outcome.state.current_player, Player::Two);
//! assert_eq!(outcome.state.seed_total(), 64);
//! ```
//!
//! ## Modules
//!
//! - `core`: players, board geometry, configuration, moves, state
//! - `sowing`: lift / sow / relay / capture state machine and step events
//! - `rules`: validation, move application, win detection, replay
//! - `error`: illegal moves and engine errors

pub mod core;
pub mod error;
pub mod sowing;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Board, GameConfig, GameState, Move, MoveRecord, Phase, Pit, Player, PlayerMap, PlayerSeeds,
    Row, Side, Variant,
};

pub use crate::error::{EngineError, IllegalMove, Result};

pub use crate::sowing::{EventLog, StepEvent};

pub use crate::rules::{
    apply_move, create_game, legal_moves, Bao, GameResult, MatchRecord, MoveOutcome, RulesEngine,
};
