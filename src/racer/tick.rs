//! Racer fixed-rate update step
//!
//! One call advances the session by exactly one tick. Everything the step
//! needs from the outside world (held keys, wall clock) arrives in
//! [`RacerInput`]; there is no ambient state.

use super::state::{FUEL_MAX, RacerOutcome, RacerState, SCREEN_H, SCREEN_W};

/// Input sampled for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct RacerInput {
    /// Left arrow held
    pub left: bool,
    /// Right arrow held
    pub right: bool,
    /// Boost key held
    pub boost: bool,
    /// Wall-clock milliseconds; drives power-up expiry and respawn delays
    pub now_ms: f64,
}

/// Advance the session by one tick
pub fn tick(state: &mut RacerState, input: &RacerInput) {
    if state.outcome.is_some() {
        return;
    }

    // Power-up expiry is wall-clock based, not frame-counted
    if state.player.powered
        && input.now_ms - state.player.power_started_ms >= state.tuning.power_duration_ms
    {
        state.player.powered = false;
        state.player.invincible = false;
    }

    // Speed tier: powered overrides boost overrides base
    if state.player.powered {
        state.player.boost = false;
        state.player.speed = state.tuning.power_speed;
    } else if input.boost {
        state.player.boost = true;
        state.player.speed = state.tuning.boost_speed;
    } else {
        state.player.boost = false;
        state.player.speed = state.tuning.base_speed;
    }

    if input.left {
        state.player.rect.pos.x -= state.player.speed;
    }
    if input.right {
        state.player.rect.pos.x += state.player.speed;
    }
    state.player.rect.clamp_x(SCREEN_W);

    state.scroll = (state.scroll + state.tuning.scroll_speed) % SCREEN_H;

    // Enemies: fall, recycle (scoring one point each), collide
    for enemy in &mut state.enemies {
        enemy.rect.pos.y += enemy.speed;
        if enemy.rect.pos.y > SCREEN_H {
            enemy.respawn(&mut state.rng);
            state.score += 1;
        }
        if !state.player.invincible && enemy.rect.overlaps(&state.player.rect) {
            state.outcome = Some(RacerOutcome::Crashed);
            return;
        }
    }

    // Fuel can: falls like an enemy but never scores; overlap refuels.
    // The can is not consumed, so a slow pass can refuel over several ticks.
    state.fuel_can.rect.pos.y += state.fuel_can.speed;
    if state.fuel_can.rect.pos.y > SCREEN_H {
        state.fuel_can.respawn(&mut state.rng);
    }
    if state.fuel_can.rect.overlaps(&state.player.rect) {
        state.fuel = (state.fuel + state.tuning.fuel_refill).min(FUEL_MAX);
    }

    // Power-up: falls while active, sleeps through its respawn delay after
    // pickup, then re-enters above the screen
    if state.powerup.active {
        state.powerup.rect.pos.y += state.powerup.speed;
        if state.powerup.rect.pos.y > SCREEN_H {
            state.powerup.respawn(&mut state.rng);
        }
        if state.powerup.rect.overlaps(&state.player.rect) {
            state.player.powered = true;
            state.player.invincible = true;
            state.player.power_started_ms = input.now_ms;
            state.powerup.collect(input.now_ms);
        }
    } else if input.now_ms - state.powerup.collected_ms >= state.tuning.powerup_respawn_ms {
        state.powerup.respawn(&mut state.rng);
    }

    // Fuel drain by tier; power drain is tunable (variants disagreed on it)
    let drain = if state.player.powered {
        state.tuning.fuel_drain_powered
    } else if state.player.boost {
        state.tuning.fuel_drain_boost
    } else {
        state.tuning.fuel_drain_idle
    };
    state.fuel -= drain;
    if state.fuel <= 0.0 {
        state.fuel = 0.0;
        state.outcome = Some(RacerOutcome::OutOfFuel);
    }
}
