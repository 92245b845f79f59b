//! Property tests over random play.
//!
//! Games are driven by a list of choice indices: at each turn the engine's
//! legal moves are listed and `choice % len` picks one. Every state reached
//! this way is a reachable game state.

use proptest::prelude::*;

use bao_engine::core::{Board, Pit, Player};
use bao_engine::sowing::MAX_STEP_EVENTS;
use bao_engine::{apply_move, create_game, legal_moves, GameState, IllegalMove, Move, Variant};

fn variant() -> impl Strategy<Value = Variant> {
    prop_oneof![Just(Variant::Prefilled), Just(Variant::HouseSeeded)]
}

fn frozen_pits(board: &Board) -> Vec<(Pit, u8)> {
    Pit::all()
        .filter(|&pit| board.is_frozen(pit))
        .map(|pit| (pit, board[pit]))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Board plus hands always holds the variant's starting total.
    #[test]
    fn seed_count_is_conserved(variant in variant(), choices in prop::collection::vec(any::<usize>(), 1..120)) {
        let mut state = create_game(variant);
        let total = state.seed_total();

        for choice in choices {
            let moves = legal_moves(&state);
            if moves.is_empty() {
                break;
            }
            let outcome = apply_move(&state, moves[choice % moves.len()]).unwrap();
            prop_assert_eq!(outcome.state.seed_total(), total);
            prop_assert!(outcome.events.len() < MAX_STEP_EVENTS);
            state = outcome.state;
        }
    }

    /// Once an inner pit reaches ten seeds, no move by either player changes it.
    #[test]
    fn frozen_pits_never_change(variant in variant(), choices in prop::collection::vec(any::<usize>(), 1..120)) {
        let mut state = create_game(variant);

        for choice in choices {
            let moves = legal_moves(&state);
            if moves.is_empty() {
                break;
            }
            let frozen = frozen_pits(&state.board);
            let outcome = apply_move(&state, moves[choice % moves.len()]).unwrap();

            for (pit, count) in frozen {
                prop_assert_eq!(outcome.state.board[pit], count);
            }
            state = outcome.state;
        }
    }

    /// A move on a pit the current player does not own is a pure no-op.
    #[test]
    fn foreign_pits_are_rejected(choices in prop::collection::vec(any::<usize>(), 0..40), index in -8i32..40) {
        let mut state = create_game(Variant::Prefilled);
        for choice in choices {
            let moves = legal_moves(&state);
            if moves.is_empty() {
                break;
            }
            state = apply_move(&state, moves[choice % moves.len()]).unwrap().state;
        }

        let mv = Move::new(index);
        let owned = mv.pit().map(|pit| pit.owner() == state.current_player).unwrap_or(false);
        prop_assume!(!owned);

        let outcome = apply_move(&state, mv).unwrap();
        prop_assert!(outcome.rejection.is_some());
        prop_assert_eq!(&outcome.state, &state);
        prop_assert!(outcome.events.is_empty());
    }

    /// The game ends exactly when the next player has nothing to sow.
    #[test]
    fn game_over_means_opponent_is_stuck(choices in prop::collection::vec(any::<usize>(), 1..200)) {
        let mut state = create_game(Variant::Prefilled);

        for choice in choices {
            let moves = legal_moves(&state);
            if moves.is_empty() {
                break;
            }
            let mover = state.current_player;
            state = apply_move(&state, moves[choice % moves.len()]).unwrap().state;

            if state.game_over {
                prop_assert_eq!(state.winner, Some(mover));
                prop_assert_eq!(state.current_player, mover);
                prop_assert!(!bao_engine::rules::has_valid_moves(&state.board, mover.opponent()));
                break;
            }
        }
    }

    /// Arbitrary positions: every move either settles with seeds conserved
    /// or is refused with the state untouched.
    #[test]
    fn arbitrary_positions_terminate(counts in prop::array::uniform32(0u8..6), second in any::<bool>()) {
        let player = if second { Player::Two } else { Player::One };
        let state = GameState::from_board(Board::from_counts(counts), player);

        for mv in legal_moves(&state) {
            let outcome = apply_move(&state, mv).unwrap();
            match outcome.rejection {
                None => prop_assert_eq!(outcome.state.seed_total(), state.seed_total()),
                Some(reason) => {
                    prop_assert_eq!(reason, IllegalMove::EndlessSowing);
                    prop_assert_eq!(&outcome.state, &state);
                }
            }
        }
    }
}
