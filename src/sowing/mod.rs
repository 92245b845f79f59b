//! Sowing: the lift / sow / relay / capture state machine and the step
//! events it emits.
//!
//! The machine works on its own copy of the board. Validation happens before
//! it runs (see `rules::validator`) and the win check after (see
//! `rules::victory`).

pub mod event;
pub mod machine;

pub use event::{EventLog, StepEvent};
pub use machine::{SowOutcome, SowingMachine, MAX_STEP_EVENTS};
