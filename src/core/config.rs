//! Starting layouts.
//!
//! Two variants ship with the engine:
//! - `Variant::Prefilled`: two seeds in every pit, nothing in hand, straight
//!   into play-phase.
//! - `Variant::HouseSeeded`: six seeds in each player's house, two in each of
//!   the next two inner pits, 22 seeds in hand, starting in setup-phase.
//!
//! `GameConfig` carries the numbers behind a layout and builds the opening
//! `GameState`. Callers wanting a custom layout start from
//! `GameConfig::for_variant` and adjust with the `with_*` builders.

use serde::{Deserialize, Serialize};

use super::board::{Board, Pit};
use super::player::{Player, PlayerMap};
use super::state::{GameState, Phase, PlayerSeeds};

/// Which starting layout a game uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Every pit pre-filled ("kujifunza").
    Prefilled,
    /// Seeds concentrated in the house, rest held in hand ("kiswahili").
    HouseSeeded,
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Variant::Prefilled => write!(f, "prefilled"),
            Variant::HouseSeeded => write!(f, "house-seeded"),
        }
    }
}

/// Complete description of a starting layout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// The layout family.
    pub variant: Variant,

    /// Seeds in every pit (prefilled only).
    pub prefill_seeds: u8,

    /// Each player's house pit (house-seeded only).
    pub house_pits: PlayerMap<Pit>,

    /// Seeds in the house.
    pub house_seeds: u8,

    /// Seeds in each of the two pits after the house.
    pub neighbour_seeds: u8,

    /// Seeds each player starts with in hand (house-seeded only).
    pub seeds_in_hand: u8,
}

impl GameConfig {
    /// The reference configuration for a variant.
    #[must_use]
    pub fn for_variant(variant: Variant) -> Self {
        Self {
            variant,
            prefill_seeds: 2,
            house_pits: PlayerMap::new(|p| match p {
                Player::One => Pit::from_index(11),
                Player::Two => Pit::from_index(19),
            }),
            house_seeds: 6,
            neighbour_seeds: 2,
            seeds_in_hand: 22,
        }
    }

    /// Set the seeds per pit for a prefilled board.
    #[must_use]
    pub fn with_prefill_seeds(mut self, seeds: u8) -> Self {
        self.prefill_seeds = seeds;
        self
    }

    /// Set the seeds placed in each house.
    #[must_use]
    pub fn with_house_seeds(mut self, seeds: u8) -> Self {
        self.house_seeds = seeds;
        self
    }

    /// Set the seeds placed in the two pits after each house.
    #[must_use]
    pub fn with_neighbour_seeds(mut self, seeds: u8) -> Self {
        self.neighbour_seeds = seeds;
        self
    }

    /// Set each player's starting hand.
    #[must_use]
    pub fn with_seeds_in_hand(mut self, seeds: u8) -> Self {
        self.seeds_in_hand = seeds;
        self
    }

    /// The phase a new game opens in.
    #[must_use]
    pub fn initial_phase(&self) -> Phase {
        match self.variant {
            Variant::Prefilled => Phase::Play,
            Variant::HouseSeeded => Phase::Setup,
        }
    }

    /// The opening board.
    #[must_use]
    pub fn initial_board(&self) -> Board {
        match self.variant {
            Variant::Prefilled => Board::filled(self.prefill_seeds),
            Variant::HouseSeeded => {
                let mut board = Board::empty();
                for (_, &house) in self.house_pits.iter() {
                    board[house] = self.house_seeds;
                    for offset in 1..=2 {
                        if let Some(neighbour) = Pit::new(house.index() + offset) {
                            board[neighbour] = self.neighbour_seeds;
                        }
                    }
                }
                board
            }
        }
    }

    /// Seeds each player starts with in hand.
    #[must_use]
    pub fn initial_hand(&self) -> u8 {
        match self.variant {
            Variant::Prefilled => 0,
            Variant::HouseSeeded => self.seeds_in_hand,
        }
    }

    /// Seeds in play for the whole game: board plus both hands.
    #[must_use]
    pub fn total_seeds(&self) -> u32 {
        self.initial_board().seed_total() + 2 * u32::from(self.initial_hand())
    }

    /// Build the opening state. Player 1 always moves first.
    #[must_use]
    pub fn build(&self) -> GameState {
        GameState::new(
            self.initial_board(),
            PlayerMap::with_value(PlayerSeeds::new(self.initial_hand())),
            self.initial_phase(),
        )
    }
}
