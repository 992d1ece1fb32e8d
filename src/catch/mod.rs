//! Falling-object catch simulation
//!
//! One paddle, a slowly growing set of falling objects, first to 20 wins.

pub mod state;
pub mod tick;

pub use state::{CatchOutcome, CatchState};
pub use tick::{CatchInput, tick};
