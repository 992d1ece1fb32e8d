//! Catch session state

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::geom::Rect;
use crate::tuning::CatchTuning;

/// Playfield dimensions
pub const SCREEN_W: f32 = 600.0;
pub const SCREEN_H: f32 = 400.0;

/// Paddle geometry
pub const PADDLE_W: f32 = 50.0;
pub const PADDLE_H: f32 = 10.0;
pub const PADDLE_Y: f32 = SCREEN_H - 40.0;

/// Falling object geometry
pub const OBJECT_W: f32 = 20.0;
pub const OBJECT_H: f32 = 20.0;

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatchOutcome {
    /// Score reached the win threshold
    Won,
}

/// Complete catch session state
#[derive(Debug, Clone)]
pub struct CatchState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// The paddle; only its x ever changes
    pub paddle: Rect,
    /// Falling objects. Grows by one per score multiple, never shrinks,
    /// capped at `tuning.max_objects`.
    pub objects: Vec<Rect>,
    pub score: u32,
    pub tuning: CatchTuning,
    /// Set exactly once when the session ends; ticks are no-ops after
    pub outcome: Option<CatchOutcome>,
    pub rng: Pcg32,
}

impl CatchState {
    /// Create a fresh session with one object already falling
    pub fn new(seed: u64, tuning: CatchTuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let first = spawn_object(&mut rng);
        Self {
            seed,
            paddle: Rect::new((SCREEN_W - PADDLE_W) / 2.0, PADDLE_Y, PADDLE_W, PADDLE_H),
            objects: vec![first],
            score: 0,
            tuning,
            outcome: None,
            rng,
        }
    }

    /// Whether the session is still running
    pub fn is_live(&self) -> bool {
        self.outcome.is_none()
    }
}

/// A fresh object at the top edge with a random horizontal offset
pub fn spawn_object(rng: &mut impl Rng) -> Rect {
    Rect::new(
        rng.random_range(0.0..=SCREEN_W - OBJECT_W),
        0.0,
        OBJECT_W,
        OBJECT_H,
    )
}

/// Send an object back to the top at a new random x
pub fn reset_object(obj: &mut Rect, rng: &mut impl Rng) {
    obj.pos.x = rng.random_range(0.0..=SCREEN_W - OBJECT_W);
    obj.pos.y = 0.0;
}
