//! Game state.
//!
//! `GameState` is a plain value: the engine never mutates one in place.
//! `apply_move` reads the caller's state and returns a freshly built one, so
//! a state can be shared across threads or stored as an opaque blob
//! (`to_bytes` / `from_bytes`) by a persistence layer.

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::player::{Player, PlayerMap};
use crate::error::Result;
use crate::rules::GameResult;

/// Opening message for every new game.
pub const OPENING_MESSAGE: &str = "Game starts. Player 1 to move.";

/// Game phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Seeds are placed from hand ("namua").
    #[serde(rename = "setup-phase")]
    Setup,
    /// Seeds are lifted and sown from the board ("mtaji").
    #[serde(rename = "play-phase")]
    Play,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Setup => write!(f, "setup-phase"),
            Phase::Play => write!(f, "play-phase"),
        }
    }
}

/// Resources a player holds off the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSeeds {
    pub seeds_in_hand: u8,
}

impl PlayerSeeds {
    #[must_use]
    pub const fn new(seeds_in_hand: u8) -> Self {
        Self { seeds_in_hand }
    }
}

/// Complete state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    /// Seed counts for all 32 pits.
    pub board: Board,

    /// Seeds each player holds in hand.
    pub players: PlayerMap<PlayerSeeds>,

    /// Whose move it is. Stays on the winner once the game is over.
    pub current_player: Player,

    /// Setup (placing from hand) or play (sowing from the board).
    pub phase: Phase,

    /// Set once a player is left without a move.
    pub game_over: bool,

    /// The winner, once `game_over` is set.
    pub winner: Option<Player>,

    /// Human-readable status line.
    pub message: String,

    /// Turn number, starting at 1 and advanced by each accepted move.
    pub turn: u32,
}

impl GameState {
    /// Create an opening state with Player 1 to move.
    #[must_use]
    pub fn new(board: Board, players: PlayerMap<PlayerSeeds>, phase: Phase) -> Self {
        Self {
            board,
            players,
            current_player: Player::One,
            phase,
            game_over: false,
            winner: None,
            message: OPENING_MESSAGE.to_string(),
            turn: 1,
        }
    }

    /// A play-phase state on an arbitrary board with empty hands.
    ///
    /// Useful for analysis and for setting up positions in tests.
    #[must_use]
    pub fn from_board(board: Board, current_player: Player) -> Self {
        Self {
            current_player,
            message: format!("{current_player}'s turn."),
            ..Self::new(board, PlayerMap::with_default(), Phase::Play)
        }
    }

    /// Seeds a player holds in hand.
    #[must_use]
    pub fn seeds_in_hand(&self, player: Player) -> u8 {
        self.players[player].seeds_in_hand
    }

    /// Seeds on the board plus both hands.
    #[must_use]
    pub fn seed_total(&self) -> u32 {
        let in_hand: u32 = self
            .players
            .iter()
            .map(|(_, seeds)| u32::from(seeds.seeds_in_hand))
            .sum();
        self.board.seed_total() + in_hand
    }

    /// The result, if the game has ended.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if !self.game_over {
            return None;
        }
        self.winner.map(GameResult::new)
    }

    /// Encode as an opaque blob for storage.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a blob produced by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}
