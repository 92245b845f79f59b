//! Moves and move records.
//!
//! A `Move` names a single pit. Its meaning depends on the phase: in
//! play-phase the pit is lifted and sown, in setup-phase one seed from hand
//! is placed into it. The index is kept as a raw integer so malformed input
//! reaches the validator instead of failing at construction.

use serde::{Deserialize, Serialize};

use super::board::Pit;
use super::player::Player;

/// A player's chosen pit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Move {
    pub pit_index: i32,
}

impl Move {
    /// A move on a raw pit index, possibly out of range.
    #[must_use]
    pub const fn new(pit_index: i32) -> Self {
        Self { pit_index }
    }

    /// A move on a known pit.
    #[must_use]
    pub const fn at(pit: Pit) -> Self {
        Self {
            pit_index: pit.index() as i32,
        }
    }

    /// The pit this move targets, if the index is on the board.
    #[must_use]
    pub fn pit(self) -> Option<Pit> {
        usize::try_from(self.pit_index).ok().and_then(Pit::new)
    }
}

impl From<Pit> for Move {
    fn from(pit: Pit) -> Self {
        Move::at(pit)
    }
}

/// An accepted move with the context needed to replay it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who moved.
    pub player: Player,

    /// The move made.
    #[serde(rename = "move")]
    pub mv: Move,

    /// Turn number the move was made on.
    pub turn: u32,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(player: Player, mv: Move, turn: u32) -> Self {
        Self { player, mv, turn }
    }
}
