//! Catch fixed-rate update step

use super::state::{CatchOutcome, CatchState, SCREEN_H, SCREEN_W, reset_object, spawn_object};

/// Input sampled for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct CatchInput {
    /// Left arrow held
    pub left: bool,
    /// Right arrow held
    pub right: bool,
}

/// Advance the session by one tick
pub fn tick(state: &mut CatchState, input: &CatchInput) {
    if state.outcome.is_some() {
        return;
    }

    if input.left {
        state.paddle.pos.x -= state.tuning.paddle_speed;
    }
    if input.right {
        state.paddle.pos.x += state.tuning.paddle_speed;
    }
    state.paddle.clamp_x(SCREEN_W);

    // Fall, recycle at the floor, and score on catch. Each catch that lands
    // the score on a growth multiple queues exactly one new object; growing
    // only on the crossing keeps the count from ratcheting every tick.
    let mut growth = 0usize;
    for obj in &mut state.objects {
        obj.pos.y += state.tuning.object_speed;
        if obj.pos.y >= SCREEN_H {
            reset_object(obj, &mut state.rng);
        }
        if obj.overlaps(&state.paddle) {
            state.score += 1;
            reset_object(obj, &mut state.rng);
            if state.score % state.tuning.growth_interval == 0 {
                growth += 1;
            }
        }
    }

    for _ in 0..growth {
        if state.objects.len() < state.tuning.max_objects {
            let obj = spawn_object(&mut state.rng);
            state.objects.push(obj);
        }
    }

    if state.score >= state.tuning.win_score {
        state.outcome = Some(CatchOutcome::Won);
    }
}
