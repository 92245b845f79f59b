//! The sowing state machine.
//!
//! A move starts either by lifting a pit (play-phase) or by placing one seed
//! from hand (setup-phase). From there the machine alternates between two
//! states until it comes to rest:
//!
//! - **Sowing**: drop one seed per pit along the player's cycle, skipping
//!   frozen pits, until the hand is empty.
//! - **Landing**: look at the pit that took the last seed and decide, in
//!   priority order:
//!   1. 2-9 seeds: relay, lift the pit and keep sowing.
//!   2. 10+ seeds in an inner row: stop; the pit is now frozen.
//!   3. 10+ seeds in an outer row: relay.
//!   4. exactly 1 seed in the player's own inner row, facing an opponent pit
//!      holding 1-9: capture that pit (and the outer pit behind it when it
//!      also holds 1-9) and sow the captured seeds onward from the landing
//!      pit.
//!   5. anything else: stop.
//!
//! Some relay chains never end. Every time the machine carries on from a
//! landing it records the position; meeting the same position again means
//! the move would loop forever, and the machine reports `SowOutcome::Endless`.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use tracing::trace;

use crate::core::{Board, Pit, Player, Row, FREEZE_THRESHOLD, MIN_SOW_SEEDS};
use crate::error::{EngineError, Result};

use super::event::{EventLog, StepEvent};

/// Hard ceiling on events for one move. Cycle detection ends every endless
/// chain long before this; reaching it is an engine defect.
pub const MAX_STEP_EVENTS: usize = 1 << 20;

/// How a sowing run ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SowOutcome {
    /// Seeds came to rest.
    Settled { board: Board, events: EventLog },
    /// The relay chain revisited a position.
    Endless { events: EventLog },
}

/// What to do after the last seed lands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Landing {
    Continue,
    Rest,
}

/// Working state for one move. Owns its own copy of the board.
#[derive(Debug)]
pub struct SowingMachine {
    board: Board,
    player: Player,
    current: Pit,
    seeds_to_sow: u8,
    events: EventLog,
    seen: FxHashSet<(Board, Pit, u8)>,
}

impl SowingMachine {
    fn start(board: &Board, player: Player, pit: Pit) -> Self {
        Self {
            board: *board,
            player,
            current: pit,
            seeds_to_sow: 0,
            events: EventLog::new(),
            seen: FxHashSet::default(),
        }
    }

    /// Begin a move by lifting every seed out of `pit`.
    #[must_use]
    pub fn lift(board: &Board, player: Player, pit: Pit) -> Self {
        let mut machine = Self::start(board, player, pit);
        let count = machine.board.take(pit);
        machine.seeds_to_sow = count;
        machine.events.push(StepEvent::Lift { from_pit: pit, count });
        machine
    }

    /// Begin a move by placing one seed from hand into `pit`.
    ///
    /// `seeds_in_hand` is what the player holds after placing. The pit is
    /// then treated as the landing pit.
    #[must_use]
    pub fn place(board: &Board, player: Player, pit: Pit, seeds_in_hand: u8) -> Self {
        let mut machine = Self::start(board, player, pit);
        machine.board[pit] += 1;
        machine.events.push(StepEvent::Place { to_pit: pit, seeds_in_hand });
        machine
    }

    /// Run until the seeds come to rest or the chain proves endless.
    pub fn run(mut self) -> Result<SowOutcome> {
        loop {
            while self.seeds_to_sow > 0 {
                self.sow_one()?;
            }

            if self.resolve_landing() == Landing::Rest {
                break;
            }

            if !self.seen.insert((self.board, self.current, self.seeds_to_sow)) {
                trace!(pit = %self.current, events = self.events.len(), "relay chain repeats");
                return Ok(SowOutcome::Endless { events: self.events });
            }
        }

        Ok(SowOutcome::Settled {
            board: self.board,
            events: self.events,
        })
    }

    fn sow_one(&mut self) -> Result<()> {
        let mut pit = self.current.next(self.player);
        while self.board.is_frozen(pit) {
            pit = pit.next(self.player);
        }

        self.current = pit;
        self.board[pit] += 1;
        self.seeds_to_sow -= 1;
        self.push(StepEvent::Sow {
            to_pit: pit,
            seeds_remaining: self.seeds_to_sow,
        })
    }

    fn push(&mut self, event: StepEvent) -> Result<()> {
        if self.events.len() >= MAX_STEP_EVENTS {
            return Err(EngineError::StepLimitExceeded { limit: MAX_STEP_EVENTS });
        }
        self.events.push(event);
        Ok(())
    }

    fn resolve_landing(&mut self) -> Landing {
        let pit = self.current;
        let count = self.board[pit];

        if (MIN_SOW_SEEDS..FREEZE_THRESHOLD).contains(&count) {
            return self.relay(pit);
        }
        if count >= FREEZE_THRESHOLD {
            if pit.is_inner() {
                trace!(%pit, count, "landing pit frozen");
                return Landing::Rest;
            }
            return self.relay(pit);
        }
        if count == 1 && pit.row() == Row::Inner && pit.owner() == self.player {
            return self.capture(pit);
        }
        Landing::Rest
    }

    fn relay(&mut self, pit: Pit) -> Landing {
        let count = self.board.take(pit);
        self.seeds_to_sow = count;
        self.events.push(StepEvent::Relay { from_pit: pit, count });
        Landing::Continue
    }

    fn capture(&mut self, pit: Pit) -> Landing {
        let (Some(facing), Some(behind)) = (pit.facing(), pit.facing().and_then(Pit::behind)) else {
            return Landing::Rest;
        };
        if !capturable(self.board[facing]) {
            return Landing::Rest;
        }

        let mut sources: SmallVec<[Pit; 2]> = SmallVec::new();
        sources.push(facing);
        if capturable(self.board[behind]) {
            sources.push(behind);
        }

        let total: u8 = sources.iter().map(|&source| self.board.take(source)).sum();
        for &source in &sources {
            self.events.push(StepEvent::Capture {
                from_pit: source,
                to_pit: pit,
                count: total,
            });
        }
        trace!(%pit, total, sources = sources.len(), "capture");

        self.seeds_to_sow = total;
        Landing::Continue
    }
}

/// A pit that can be captured from: occupied and not frozen.
fn capturable(count: u8) -> bool {
    (1..FREEZE_THRESHOLD).contains(&count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pit(i: usize) -> Pit {
        Pit::new(i).unwrap()
    }

    fn board(seeds: &[(usize, u8)]) -> Board {
        let mut board = Board::empty();
        for &(i, n) in seeds {
            board[pit(i)] = n;
        }
        board
    }

    fn settle(outcome: SowOutcome) -> (Board, EventLog) {
        match outcome {
            SowOutcome::Settled { board, events } => (board, events),
            SowOutcome::Endless { .. } => panic!("sowing did not settle"),
        }
    }

    #[test]
    fn test_plain_sow_stops_on_empty_outer_pit() {
        let start = board(&[(0, 2)]);
        let (end, events) = settle(SowingMachine::lift(&start, Player::One, pit(0)).run().unwrap());

        assert_eq!(
            events.as_slice(),
            &[
                StepEvent::Lift { from_pit: pit(0), count: 2 },
                StepEvent::Sow { to_pit: pit(1), seeds_remaining: 1 },
                StepEvent::Sow { to_pit: pit(2), seeds_remaining: 0 },
            ]
        );
        assert_eq!(end[pit(0)], 0);
        assert_eq!(end[pit(1)], 1);
        assert_eq!(end[pit(2)], 1);
    }

    #[test]
    fn test_relay_on_occupied_pit() {
        let start = board(&[(0, 2), (2, 2)]);
        let (end, events) = settle(SowingMachine::lift(&start, Player::One, pit(0)).run().unwrap());

        assert_eq!(events.as_slice()[3], StepEvent::Relay { from_pit: pit(2), count: 3 });
        assert_eq!(events.final_pit(), Some(pit(5)));
        assert_eq!(end[pit(2)], 0);
        assert_eq!(end.seed_total(), 4);
    }

    #[test]
    fn test_inner_landing_at_threshold_stops() {
        let start = board(&[(6, 2), (8, 9)]);
        let (end, events) = settle(SowingMachine::lift(&start, Player::One, pit(6)).run().unwrap());

        assert_eq!(events.len(), 3);
        assert_eq!(end[pit(8)], 10);
        assert!(end.is_frozen(pit(8)));
    }

    #[test]
    fn test_outer_landing_at_threshold_relays() {
        let start = board(&[(5, 2), (7, 9)]);
        let (end, events) = settle(SowingMachine::lift(&start, Player::One, pit(5)).run().unwrap());

        assert_eq!(events.as_slice()[3], StepEvent::Relay { from_pit: pit(7), count: 10 });
        assert_eq!(events.len(), 14);
        assert_eq!(events.final_pit(), Some(pit(1)));
        assert_eq!(end[pit(7)], 0);
        assert!((8..16).all(|i| end[pit(i)] == 1));
    }

    #[test]
    fn test_frozen_pits_are_skipped() {
        let start = board(&[(7, 3), (9, 12)]);
        let (end, events) = settle(SowingMachine::lift(&start, Player::One, pit(7)).run().unwrap());

        let sown: Vec<_> = events
            .iter()
            .filter_map(|e| match *e {
                StepEvent::Sow { to_pit, .. } => Some(to_pit.index()),
                _ => None,
            })
            .collect();
        assert_eq!(sown, vec![8, 10, 11]);
        assert_eq!(end[pit(9)], 12);
    }

    #[test]
    fn test_capture_takes_facing_and_behind() {
        let start = board(&[(13, 2), (16, 4), (31, 3)]);
        let (end, events) = settle(SowingMachine::lift(&start, Player::One, pit(13)).run().unwrap());

        assert_eq!(events.as_slice()[3], StepEvent::Capture { from_pit: pit(16), to_pit: pit(15), count: 7 });
        assert_eq!(events.as_slice()[4], StepEvent::Capture { from_pit: pit(31), to_pit: pit(15), count: 7 });
        assert_eq!(end[pit(16)], 0);
        assert_eq!(end[pit(31)], 0);
        assert_eq!(end[pit(15)], 1);
        assert!((0..7).all(|i| end[pit(i)] == 1));
    }

    #[test]
    fn test_capture_ignores_frozen_behind_pit() {
        let start = board(&[(13, 2), (16, 4), (31, 12)]);
        let (end, events) = settle(SowingMachine::lift(&start, Player::One, pit(13)).run().unwrap());

        assert_eq!(events.count_of("capture"), 1);
        assert_eq!(events.as_slice()[3], StepEvent::Capture { from_pit: pit(16), to_pit: pit(15), count: 4 });
        assert_eq!(end[pit(31)], 12);
        assert_eq!(events.final_pit(), Some(pit(3)));
    }

    #[test]
    fn test_no_capture_from_frozen_or_empty_facing_pit() {
        let start = board(&[(13, 2), (16, 10), (31, 3)]);
        let (end, events) = settle(SowingMachine::lift(&start, Player::One, pit(13)).run().unwrap());
        assert_eq!(events.count_of("capture"), 0);
        assert_eq!(end, board(&[(14, 1), (15, 1), (16, 10), (31, 3)]));

        let start = board(&[(13, 2), (31, 3)]);
        let (_, events) = settle(SowingMachine::lift(&start, Player::One, pit(13)).run().unwrap());
        assert_eq!(events.count_of("capture"), 0);
    }

    #[test]
    fn test_no_capture_from_outer_row_landing() {
        // Landing on pit 2 (outer) with the facing rows loaded.
        let start = board(&[(0, 2), (16, 5), (23, 5)]);
        let (_, events) = settle(SowingMachine::lift(&start, Player::One, pit(0)).run().unwrap());
        assert_eq!(events.count_of("capture"), 0);
    }

    #[test]
    fn test_place_into_empty_pit_can_capture() {
        let start = board(&[(11, 6), (12, 2), (13, 2), (19, 6), (20, 2), (21, 2)]);
        let (end, events) = settle(SowingMachine::place(&start, Player::One, pit(10), 21).run().unwrap());

        assert_eq!(events.as_slice()[0], StepEvent::Place { to_pit: pit(10), seeds_in_hand: 21 });
        assert_eq!(events.as_slice()[1], StepEvent::Capture { from_pit: pit(21), to_pit: pit(10), count: 2 });
        assert_eq!(events.len(), 8);
        assert_eq!(end.seed_total(), start.seed_total() + 1);
    }

    #[test]
    fn test_place_into_lone_pit_rests() {
        let start = board(&[(19, 6)]);
        let (end, events) = settle(SowingMachine::place(&start, Player::One, pit(8), 5).run().unwrap());

        assert_eq!(events.len(), 1);
        assert_eq!(end[pit(8)], 1);
    }

    #[test]
    fn test_endless_chain_detected() {
        let start = Board::from_counts([
            2, 1, 0, 2, 1, 0, 1, 0, 3, 0, 1, 2, 0, 1, 0, 1, //
            0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        ]);
        let outcome = SowingMachine::lift(&start, Player::One, pit(11)).run().unwrap();
        assert!(matches!(outcome, SowOutcome::Endless { .. }));
    }

    #[test]
    fn test_player_two_wraps_to_inner_row() {
        let start = board(&[(30, 3)]);
        let (_, events) = settle(SowingMachine::lift(&start, Player::Two, pit(30)).run().unwrap());

        assert_eq!(events.final_pit(), Some(pit(17)));
        assert_eq!(events.as_slice()[2], StepEvent::Sow { to_pit: pit(16), seeds_remaining: 1 });
    }
}
