//! Rules: validation, move application, win detection, and replay.
//!
//! `engine::apply_move` ties the pieces together:
//! validator -> sowing machine -> victory check -> seed-conservation check.

pub mod validator;
pub mod victory;
pub mod engine;
pub mod replay;

pub use engine::{apply_move, create_game, legal_moves, Bao, GameResult, MoveOutcome, RulesEngine};
pub use replay::MatchRecord;
pub use validator::{is_legal, validate};
pub use victory::{evaluate, has_valid_moves, has_valid_placements, Verdict};
