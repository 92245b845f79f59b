//! Win-condition evaluation.
//!
//! After every move the player about to move next is checked for a move. A
//! player with none loses on the spot; the mover wins and keeps the turn.

use crate::core::{Board, Phase, Player, PlayerMap, PlayerSeeds, Side, FREEZE_THRESHOLD, MIN_SOW_SEEDS};

/// Result of checking the position after a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// The game goes on with `next` to move.
    Continue { next: Player },
    /// `winner` just moved and the opponent is stuck.
    Won { winner: Player },
}

impl Verdict {
    /// Status line shown to players.
    #[must_use]
    pub fn message(self) -> String {
        match self {
            Verdict::Continue { next } => format!("{next}'s turn."),
            Verdict::Won { winner } => format!("{winner} wins!"),
        }
    }
}

/// Play-phase check: some inner-row pit is occupied, or some outer-row pit
/// holds a sowable 2-9 seeds.
#[must_use]
pub fn has_valid_moves(board: &Board, player: Player) -> bool {
    let side = Side::of(player);
    side.inner_pits().any(|pit| board[pit] >= 1)
        || side
            .outer_pits()
            .any(|pit| (MIN_SOW_SEEDS..FREEZE_THRESHOLD).contains(&board[pit]))
}

/// Setup-phase check: seeds left in hand and an inner-row pit to put them in.
#[must_use]
pub fn has_valid_placements(board: &Board, seeds_in_hand: u8, player: Player) -> bool {
    seeds_in_hand > 0 && Side::of(player).inner_pits().any(|pit| !board.is_frozen(pit))
}

/// Decide what happens after `mover` has moved.
#[must_use]
pub fn evaluate(board: &Board, players: &PlayerMap<PlayerSeeds>, phase: Phase, mover: Player) -> Verdict {
    let next = mover.opponent();
    let can_move = match phase {
        Phase::Play => has_valid_moves(board, next),
        Phase::Setup => has_valid_placements(board, players[next].seeds_in_hand, next),
    };

    if can_move {
        Verdict::Continue { next }
    } else {
        Verdict::Won { winner: mover }
    }
}
