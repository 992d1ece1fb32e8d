//! Car racer simulation
//!
//! Vertical-scrolling dodger: three falling enemy cars, a fuel can, and a
//! timed power-up. All gameplay logic lives here and must stay pure and
//! deterministic: seeded RNG only, no rendering or platform dependencies.

pub mod state;
pub mod tick;

pub use state::{Enemy, FuelCan, Player, PowerUp, RacerOutcome, RacerState};
pub use tick::{RacerInput, tick};
