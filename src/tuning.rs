//! Data-driven game balance
//!
//! Defaults reproduce the shipped balance; a JSON file can override any
//! value. Loading degrades to defaults on any failure so a bad tuning file
//! never blocks a session.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Balance values for the car racer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RacerTuning {
    /// Player speed, pixels per tick
    pub base_speed: f32,
    /// Speed while the boost key is held
    pub boost_speed: f32,
    /// Speed while powered (takes priority over boost)
    pub power_speed: f32,
    /// Fuel drained per tick at base speed
    pub fuel_drain_idle: f32,
    /// Fuel drained per tick while boosting
    pub fuel_drain_boost: f32,
    /// Fuel drained per tick while powered. Source variants disagree on
    /// whether power costs extra fuel; the default matches the idle rate.
    pub fuel_drain_powered: f32,
    /// Fuel restored by one tick of fuel-can overlap
    pub fuel_refill: f32,
    /// How long the power-up window lasts, wall-clock milliseconds
    pub power_duration_ms: f64,
    /// Delay before a collected power-up respawns, milliseconds
    pub powerup_respawn_ms: f64,
    /// Background scroll per tick
    pub scroll_speed: f32,
}

impl Default for RacerTuning {
    fn default() -> Self {
        Self {
            base_speed: 7.0,
            boost_speed: 12.0,
            power_speed: 16.0,
            fuel_drain_idle: 0.1,
            fuel_drain_boost: 0.3,
            fuel_drain_powered: 0.1,
            fuel_refill: 25.0,
            power_duration_ms: 5000.0,
            powerup_respawn_ms: 7000.0,
            scroll_speed: 8.0,
        }
    }
}

/// Balance values for the catch game
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatchTuning {
    /// Paddle speed, pixels per tick
    pub paddle_speed: f32,
    /// Object fall speed, pixels per tick
    pub object_speed: f32,
    /// Maximum number of simultaneous falling objects
    pub max_objects: usize,
    /// A new object is added each time the score crosses a multiple of this
    pub growth_interval: u32,
    /// Score that ends the session with a win
    pub win_score: u32,
}

impl Default for CatchTuning {
    fn default() -> Self {
        Self {
            paddle_speed: 5.0,
            object_speed: 5.0,
            max_objects: 5,
            growth_interval: 5,
            win_score: 20,
        }
    }
}

/// Load a tuning value from a JSON file, falling back to defaults
pub fn load_or_default<T>(path: &Path) -> T
where
    T: Default + for<'de> Deserialize<'de>,
{
    match std::fs::read_to_string(path) {
        Ok(json) => match serde_json::from_str(&json) {
            Ok(tuning) => {
                log::info!("loaded tuning from {:?}", path);
                tuning
            }
            Err(e) => {
                log::warn!("bad tuning file {:?} ({}), using defaults", path, e);
                T::default()
            }
        },
        Err(_) => T::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let tuning: RacerTuning = serde_json::from_str(r#"{"fuel_drain_powered": 0.2}"#).unwrap();
        assert_eq!(tuning.fuel_drain_powered, 0.2);
        assert_eq!(tuning.base_speed, 7.0);
        assert_eq!(tuning.power_duration_ms, 5000.0);
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let tuning: CatchTuning =
            load_or_default(Path::new("/nonexistent/arcade_cabinet_tuning.json"));
        assert_eq!(tuning.win_score, 20);
        assert_eq!(tuning.max_objects, 5);
    }
}
