//! Arcade Cabinet - deterministic cores for two single-screen arcade games
//!
//! Core modules:
//! - `racer`: vertical-scrolling car dodging game (fuel, enemies, power-up)
//! - `catch`: falling-object catch game (paddle, growing object set)
//! - `flow`: shared screen state machine (Start/Playing/Paused/GameOver)
//! - `highscores`: one-integer high-score file
//! - `tuning`: data-driven game balance

pub mod catch;
pub mod flow;
pub mod geom;
pub mod highscores;
pub mod racer;
pub mod tuning;

pub use flow::{Flow, FlowCommand, MenuEvent, Screen};
pub use geom::Rect;
pub use highscores::HighScore;
pub use tuning::{CatchTuning, RacerTuning};

/// Shared timing constants
pub mod consts {
    /// Fixed update rate for both games (ticks per second)
    pub const TICK_HZ: u32 = 60;
    /// Wall-clock duration of one tick in milliseconds
    pub const TICK_MS: f64 = 1000.0 / TICK_HZ as f64;
}
