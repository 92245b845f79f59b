//! Board geometry: pits, rows, sides, and seed counts.
//!
//! ```text
//! 31 30 29 28 27 26 25 24   <- Player 2 outer row
//! 16 17 18 19 20 21 22 23   <- Player 2 inner row
//! -----------------------
//! 15 14 13 12 11 10  9  8   <- Player 1 inner row
//!  0  1  2  3  4  5  6  7   <- Player 1 outer row
//! ```
//!
//! Each player sows around a fixed cycle over their own sixteen pits:
//! Player 1 walks 0 -> 15 and wraps to 0, Player 2 walks 16 -> 31 and wraps
//! to 16. Inner rows face each other; captures only happen across them.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut, Range};

use super::player::Player;

/// Number of pits on the board.
pub const PIT_COUNT: usize = 32;

/// Pits per player (two rows of eight).
pub const PITS_PER_SIDE: usize = 16;

/// Fewest seeds a pit must hold to be sown in play-phase.
pub const MIN_SOW_SEEDS: u8 = 2;

/// Inner-row pits holding this many seeds or more are frozen.
pub const FREEZE_THRESHOLD: u8 = 10;

/// The inner-row pit directly across the board, for pits 8..24.
const FACING: [u8; 16] = [23, 22, 21, 20, 19, 18, 17, 16, 15, 14, 13, 12, 11, 10, 9, 8];

/// The outer-row pit behind an inner-row pit on the same side, for pits 8..24.
const BEHIND: [u8; 16] = [7, 6, 5, 4, 3, 2, 1, 0, 31, 30, 29, 28, 27, 26, 25, 24];

/// Which of a side's two rows a pit sits in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Row {
    Outer,
    Inner,
}

/// Index ranges of one player's rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Side {
    pub outer: Range<usize>,
    pub inner: Range<usize>,
}

static SIDES: [Side; 2] = [
    Side { outer: 0..8, inner: 8..16 },
    Side { outer: 24..32, inner: 16..24 },
];

impl Side {
    /// The side owned by `player`.
    #[must_use]
    pub fn of(player: Player) -> &'static Side {
        &SIDES[player.index()]
    }

    /// First index of the player's sowing cycle.
    #[must_use]
    pub fn base(&self) -> usize {
        self.outer.start.min(self.inner.start)
    }

    /// Does this side contain the index?
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.outer.contains(&index) || self.inner.contains(&index)
    }

    /// All sixteen pits of this side, in sowing order.
    pub fn pits(&self) -> impl Iterator<Item = Pit> {
        let base = self.base();
        (base..base + PITS_PER_SIDE).map(Pit::from_index)
    }

    /// The inner-row pits.
    pub fn inner_pits(&self) -> impl Iterator<Item = Pit> {
        self.inner.clone().map(Pit::from_index)
    }

    /// The outer-row pits.
    pub fn outer_pits(&self) -> impl Iterator<Item = Pit> {
        self.outer.clone().map(Pit::from_index)
    }
}

/// A board position, guaranteed to be in 0..32.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Pit(u8);

impl Pit {
    /// Create a pit from a board index.
    ///
    /// ```
    /// use bao_engine::core::Pit;
    ///
    /// assert_eq!(Pit::new(31).map(Pit::index), Some(31));
    /// assert!(Pit::new(32).is_none());
    /// ```
    #[must_use]
    pub const fn new(index: usize) -> Option<Self> {
        if index < PIT_COUNT {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Callers guarantee `index < PIT_COUNT`.
    pub(crate) const fn from_index(index: usize) -> Self {
        assert!(index < PIT_COUNT, "pit index out of range");
        Self(index as u8)
    }

    /// Every pit, 0 through 31.
    pub fn all() -> impl Iterator<Item = Pit> {
        (0..PIT_COUNT).map(Pit::from_index)
    }

    /// The raw board index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The player whose side this pit is on.
    #[must_use]
    pub const fn owner(self) -> Player {
        if (self.0 as usize) < PITS_PER_SIDE {
            Player::One
        } else {
            Player::Two
        }
    }

    /// The row this pit sits in.
    #[must_use]
    pub fn row(self) -> Row {
        if Side::of(self.owner()).inner.contains(&self.index()) {
            Row::Inner
        } else {
            Row::Outer
        }
    }

    /// Is this pit in either player's inner row?
    #[must_use]
    pub fn is_inner(self) -> bool {
        self.row() == Row::Inner
    }

    /// The next pit along `player`'s sowing cycle.
    ///
    /// Only meaningful for pits on `player`'s own side.
    #[must_use]
    pub fn next(self, player: Player) -> Pit {
        let base = Side::of(player).base();
        debug_assert!(Side::of(player).contains(self.index()), "{self} is not on {player}'s side");
        let offset = (self.index() + PITS_PER_SIDE - base + 1) % PITS_PER_SIDE;
        Pit::from_index(base + offset)
    }

    /// The opponent's inner-row pit directly across from this one.
    ///
    /// `None` for outer-row pits.
    #[must_use]
    pub fn facing(self) -> Option<Pit> {
        self.inner_offset().map(|i| Pit(FACING[i]))
    }

    /// The outer-row pit behind this inner-row pit, on the same side.
    ///
    /// `None` for outer-row pits.
    #[must_use]
    pub fn behind(self) -> Option<Pit> {
        self.inner_offset().map(|i| Pit(BEHIND[i]))
    }

    fn inner_offset(self) -> Option<usize> {
        self.is_inner().then(|| self.index() - 8)
    }
}

impl TryFrom<u8> for Pit {
    type Error = String;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Pit::new(index as usize).ok_or_else(|| format!("pit index {index} out of range"))
    }
}

impl From<Pit> for u8 {
    fn from(pit: Pit) -> Self {
        pit.0
    }
}

impl std::fmt::Display for Pit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "pit {}", self.0)
    }
}

/// Seed counts for all 32 pits.
///
/// `Copy` so the sowing machine can snapshot positions cheaply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board([u8; PIT_COUNT]);

impl Board {
    /// A board with every pit empty.
    #[must_use]
    pub const fn empty() -> Self {
        Self([0; PIT_COUNT])
    }

    /// A board with `seeds` in every pit.
    #[must_use]
    pub const fn filled(seeds: u8) -> Self {
        Self([seeds; PIT_COUNT])
    }

    /// A board from explicit counts, index 0 first.
    #[must_use]
    pub const fn from_counts(counts: [u8; PIT_COUNT]) -> Self {
        Self(counts)
    }

    /// Raw counts, index 0 first.
    #[must_use]
    pub fn counts(&self) -> &[u8; PIT_COUNT] {
        &self.0
    }

    /// Empty a pit, returning what it held.
    pub fn take(&mut self, pit: Pit) -> u8 {
        std::mem::take(&mut self.0[pit.index()])
    }

    /// Total seeds on the board.
    #[must_use]
    pub fn seed_total(&self) -> u32 {
        self.0.iter().map(|&c| u32::from(c)).sum()
    }

    /// Total seeds on one player's side.
    #[must_use]
    pub fn side_total(&self, player: Player) -> u32 {
        Side::of(player).pits().map(|p| u32::from(self[p])).sum()
    }

    /// An inner-row pit at or above the freeze threshold.
    #[must_use]
    pub fn is_frozen(&self, pit: Pit) -> bool {
        pit.is_inner() && self[pit] >= FREEZE_THRESHOLD
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Index<Pit> for Board {
    type Output = u8;

    fn index(&self, pit: Pit) -> &Self::Output {
        &self.0[pit.index()]
    }
}

impl IndexMut<Pit> for Board {
    fn index_mut(&mut self, pit: Pit) -> &mut Self::Output {
        &mut self.0[pit.index()]
    }
}
