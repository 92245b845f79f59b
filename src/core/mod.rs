//! Core types: players, board geometry, configuration, moves, state.
//!
//! Everything here is a plain value. The rules that move seeds between pits
//! live in `sowing` and `rules`.

pub mod player;
pub mod board;
pub mod config;
pub mod moves;
pub mod state;

pub use player::{InvalidPlayer, Player, PlayerMap};
pub use board::{Board, Pit, Row, Side, FREEZE_THRESHOLD, MIN_SOW_SEEDS, PITS_PER_SIDE, PIT_COUNT};
pub use config::{GameConfig, Variant};
pub use moves::{Move, MoveRecord};
pub use state::{GameState, Phase, PlayerSeeds, OPENING_MESSAGE};
