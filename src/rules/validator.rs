//! Move validation.
//!
//! The single gate before the sowing machine runs. Validation only reads the
//! state; a rejected move never touches the board.

use crate::core::{GameState, Move, Phase, Pit, Row, MIN_SOW_SEEDS};
use crate::error::IllegalMove;

/// Check a move against the current state, returning the pit it targets.
pub fn validate(state: &GameState, mv: Move) -> Result<Pit, IllegalMove> {
    if state.game_over {
        return Err(IllegalMove::GameOver);
    }

    let pit = mv.pit().ok_or(IllegalMove::OutOfRange(mv.pit_index))?;
    if pit.owner() != state.current_player {
        return Err(IllegalMove::NotYourPit);
    }

    let checked = match state.phase {
        Phase::Play => check_sow(state, pit),
        Phase::Setup => check_placement(state, pit),
    };
    checked.map(|()| pit)
}

/// Would `validate` accept this move?
#[must_use]
pub fn is_legal(state: &GameState, mv: Move) -> bool {
    validate(state, mv).is_ok()
}

fn check_sow(state: &GameState, pit: Pit) -> Result<(), IllegalMove> {
    if state.board[pit] < MIN_SOW_SEEDS {
        return Err(IllegalMove::TooFewSeeds);
    }
    if state.board.is_frozen(pit) {
        return Err(IllegalMove::Frozen);
    }
    Ok(())
}

fn check_placement(state: &GameState, pit: Pit) -> Result<(), IllegalMove> {
    if pit.row() != Row::Inner {
        return Err(IllegalMove::NotInnerRow);
    }
    if state.seeds_in_hand(state.current_player) == 0 {
        return Err(IllegalMove::EmptyHand);
    }
    if state.board.is_frozen(pit) {
        return Err(IllegalMove::Frozen);
    }
    Ok(())
}
