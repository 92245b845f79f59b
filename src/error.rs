//! Error types.
//!
//! Two kinds of failure are kept apart:
//! - `IllegalMove`: the player asked for something the rules forbid. Not an
//!   error for the engine; `apply_move` reports it inside a `MoveOutcome`
//!   and hands back the unchanged state.
//! - `EngineError`: the engine itself misbehaved (seeds appeared or vanished,
//!   sowing ran away) or a stored blob could not be decoded. The move
//!   computation is abandoned rather than returning a corrupt board.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::Player;

/// Why a move was refused. `Display` is the player-facing message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IllegalMove {
    #[error("Invalid move: The game is already over.")]
    GameOver,

    #[error("Invalid move: Pit {0} is not on the board.")]
    OutOfRange(i32),

    #[error("Invalid move: Not your pit.")]
    NotYourPit,

    #[error("Invalid move: Pit must have at least 2 seeds.")]
    TooFewSeeds,

    #[error("Invalid move: Pit with 10 or more seeds cannot be moved or captured.")]
    Frozen,

    #[error("Invalid move: Seeds from hand go into your inner row.")]
    NotInnerRow,

    #[error("Invalid move: No seeds left in hand.")]
    EmptyHand,

    #[error("Invalid move: Sowing from this pit would never end.")]
    EndlessSowing,
}

/// Engine defects and decoding failures.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("seed count changed during move: expected {expected}, found {found}")]
    SeedCountMismatch { expected: u32, found: u32 },

    #[error("sowing exceeded {limit} step events")]
    StepLimitExceeded { limit: usize },

    #[error("recorded move {turn} by {player} was rejected on replay: {reason}")]
    ReplayDiverged {
        turn: u32,
        player: Player,
        reason: IllegalMove,
    },

    #[error("failed to encode or decode game state: {0}")]
    Codec(#[from] bincode::Error),
}

/// Result alias for engine operations.
pub type Result<T, E = EngineError> = std::result::Result<T, E>;
