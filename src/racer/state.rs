//! Racer session state
//!
//! One session owns every entity on the road plus the RNG that drives
//! respawn positions. Nothing here touches wall-clock time directly; the
//! tick input carries the clock.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::geom::Rect;
use crate::tuning::RacerTuning;

/// Playfield dimensions
pub const SCREEN_W: f32 = 500.0;
pub const SCREEN_H: f32 = 600.0;

/// Entity sizes
pub const PLAYER_W: f32 = 60.0;
pub const PLAYER_H: f32 = 120.0;
pub const ENEMY_W: f32 = 60.0;
pub const ENEMY_H: f32 = 120.0;
pub const PICKUP_SIZE: f32 = 40.0;

/// Number of enemy cars on the road
pub const ENEMY_COUNT: usize = 3;

/// Fuel gauge bounds
pub const FUEL_MAX: f32 = 100.0;

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RacerOutcome {
    /// Hit an enemy without invincibility
    Crashed,
    /// Fuel gauge reached zero
    OutOfFuel,
}

/// The player's car
#[derive(Debug, Clone)]
pub struct Player {
    pub rect: Rect,
    /// Current horizontal speed, set each tick from the speed tier
    pub speed: f32,
    /// Boost key held (and not overridden by power)
    pub boost: bool,
    /// Power-up window active
    pub powered: bool,
    /// Enemy collisions ignored while set
    pub invincible: bool,
    /// Wall-clock ms when the power-up was granted
    pub power_started_ms: f64,
}

impl Player {
    fn new(tuning: &RacerTuning) -> Self {
        Self {
            rect: Rect::new(
                (SCREEN_W - PLAYER_W) / 2.0,
                SCREEN_H - 140.0 - PLAYER_H / 2.0,
                PLAYER_W,
                PLAYER_H,
            ),
            speed: tuning.base_speed,
            boost: false,
            powered: false,
            invincible: false,
            power_started_ms: 0.0,
        }
    }
}

/// An enemy car falling down the road
#[derive(Debug, Clone)]
pub struct Enemy {
    pub rect: Rect,
    /// Fall speed, pixels per tick (re-rolled on every respawn)
    pub speed: f32,
}

impl Enemy {
    pub fn spawn(rng: &mut impl Rng) -> Self {
        Self {
            rect: Rect::new(
                rng.random_range(0.0..=SCREEN_W - ENEMY_W),
                -rng.random_range(120.0..=800.0),
                ENEMY_W,
                ENEMY_H,
            ),
            speed: rng.random_range(5..=8) as f32,
        }
    }

    /// Recycle to a random point above the screen with a fresh speed
    pub fn respawn(&mut self, rng: &mut impl Rng) {
        self.rect.pos.x = rng.random_range(0.0..=SCREEN_W - ENEMY_W);
        self.rect.pos.y = -rng.random_range(200.0..=400.0);
        self.speed = rng.random_range(5..=8) as f32;
    }
}

/// The fuel pickup
#[derive(Debug, Clone)]
pub struct FuelCan {
    pub rect: Rect,
    pub speed: f32,
}

impl FuelCan {
    pub fn spawn(rng: &mut impl Rng) -> Self {
        Self {
            rect: Rect::new(
                rng.random_range(0.0..=SCREEN_W - PICKUP_SIZE),
                -rng.random_range(120.0..=800.0),
                PICKUP_SIZE,
                PICKUP_SIZE,
            ),
            speed: 6.0,
        }
    }

    pub fn respawn(&mut self, rng: &mut impl Rng) {
        self.rect.pos.x = rng.random_range(0.0..=SCREEN_W - PICKUP_SIZE);
        self.rect.pos.y = -rng.random_range(200.0..=800.0);
    }
}

/// The speed/invincibility power-up
#[derive(Debug, Clone)]
pub struct PowerUp {
    pub rect: Rect,
    pub speed: f32,
    /// Collectible and visible; cleared on pickup until the respawn delay
    pub active: bool,
    /// Wall-clock ms when last collected
    pub collected_ms: f64,
}

impl PowerUp {
    pub fn spawn(rng: &mut impl Rng) -> Self {
        Self {
            rect: Rect::new(
                rng.random_range(0.0..=SCREEN_W - PICKUP_SIZE),
                -rng.random_range(600.0..=1200.0),
                PICKUP_SIZE,
                PICKUP_SIZE,
            ),
            speed: 5.0,
            active: true,
            collected_ms: 0.0,
        }
    }

    /// Mark collected: inactive and parked off-board
    pub fn collect(&mut self, now_ms: f64) {
        self.active = false;
        self.collected_ms = now_ms;
        self.rect.pos.x = -100.0;
        self.rect.pos.y = -100.0;
    }

    pub fn respawn(&mut self, rng: &mut impl Rng) {
        self.rect.pos.x = rng.random_range(0.0..=SCREEN_W - PICKUP_SIZE);
        self.rect.pos.y = -rng.random_range(200.0..=800.0);
        self.active = true;
    }
}

/// Complete racer session state
#[derive(Debug, Clone)]
pub struct RacerState {
    /// Session seed for reproducibility
    pub seed: u64,
    pub player: Player,
    pub enemies: [Enemy; ENEMY_COUNT],
    pub fuel_can: FuelCan,
    pub powerup: PowerUp,
    /// Fuel gauge, clamped to [0, FUEL_MAX]
    pub fuel: f32,
    pub score: u32,
    /// Background scroll offset, wraps at screen height
    pub scroll: f32,
    pub tuning: RacerTuning,
    /// Set exactly once when the session ends; ticks are no-ops after
    pub outcome: Option<RacerOutcome>,
    pub rng: Pcg32,
}

impl RacerState {
    /// Create a fresh session with the given seed
    pub fn new(seed: u64, tuning: RacerTuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let enemies = std::array::from_fn(|_| Enemy::spawn(&mut rng));
        let fuel_can = FuelCan::spawn(&mut rng);
        let powerup = PowerUp::spawn(&mut rng);
        Self {
            seed,
            player: Player::new(&tuning),
            enemies,
            fuel_can,
            powerup,
            fuel: FUEL_MAX,
            score: 0,
            scroll: 0.0,
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
