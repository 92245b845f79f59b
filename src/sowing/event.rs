//! Step events.
//!
//! Every atomic seed movement during a move is recorded as a `StepEvent`,
//! in the order it happened. A renderer replays the `EventLog` to animate
//! the move; nothing else in the log carries state.
//!
//! Events serialize as internally tagged records:
//!
//! ```
//! use bao_engine::core::Pit;
//! use bao_engine::sowing::StepEvent;
//!
//! let event = StepEvent::Sow { to_pit: Pit::new(3).unwrap(), seeds_remaining: 1 };
//! let json = serde_json::to_string(&event).unwrap();
//! assert_eq!(json, r#"{"action":"sow","toPit":3,"seedsRemaining":1}"#);
//! ```

use serde::{Deserialize, Serialize};

use crate::core::Pit;

/// One atomic sub-step of a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum StepEvent {
    /// The chosen pit was emptied into the player's hand.
    Lift { from_pit: Pit, count: u8 },

    /// One seed dropped into a pit.
    Sow { to_pit: Pit, seeds_remaining: u8 },

    /// The last seed landed in an occupied pit; its contents are lifted and
    /// sowing carries on.
    Relay { from_pit: Pit, count: u8 },

    /// Seeds taken from an opponent pit. `count` is the total taken by the
    /// whole capture, repeated on each source's event.
    Capture { from_pit: Pit, to_pit: Pit, count: u8 },

    /// A seed placed from hand during setup-phase.
    Place { to_pit: Pit, seeds_in_hand: u8 },
}

impl StepEvent {
    /// Short name of the event kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            StepEvent::Lift { .. } => "lift",
            StepEvent::Sow { .. } => "sow",
            StepEvent::Relay { .. } => "relay",
            StepEvent::Capture { .. } => "capture",
            StepEvent::Place { .. } => "place",
        }
    }
}

/// Ordered events for one move.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventLog {
    events: Vec<StepEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event.
    pub fn push(&mut self, event: StepEvent) {
        self.events.push(event);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StepEvent> {
        self.events.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[StepEvent] {
        &self.events
    }

    #[must_use]
    pub fn last(&self) -> Option<&StepEvent> {
        self.events.last()
    }

    /// Where the final seed of the move came to rest.
    #[must_use]
    pub fn final_pit(&self) -> Option<Pit> {
        self.events.iter().rev().find_map(|event| match *event {
            StepEvent::Sow { to_pit, .. } | StepEvent::Place { to_pit, .. } => Some(to_pit),
            _ => None,
        })
    }

    /// Number of events of the given kind.
    #[must_use]
    pub fn count_of(&self, kind: &str) -> usize {
        self.events.iter().filter(|e| e.kind() == kind).count()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<StepEvent> {
        self.events
    }
}

impl<'a> IntoIterator for &'a EventLog {
    type Item = &'a StepEvent;
    type IntoIter = std::slice::Iter<'a, StepEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
