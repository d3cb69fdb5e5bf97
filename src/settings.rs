//! Simulation settings
//!
//! One value owned by the driver loop and passed into every step. Loaded from
//! JSON; missing fields fall back to the defaults below.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::collision_precision_for;
use crate::consts::{DEFAULT_GRAVITY, MAX_RESISTANCE, RESISTANCE_STEP, TIME_SCALE};
use crate::error::Result;
use crate::sim::Bounds;

/// Starting population of the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Scenario {
    /// Randomly colored balls, all falling
    Random { count: usize },
    /// Red balls falling and blue balls floating, `per_side` of each
    SplitGravity { per_side: usize },
}

impl Default for Scenario {
    fn default() -> Self {
        Scenario::Random { count: 100 }
    }
}

impl Scenario {
    /// Total number of balls the scenario asks for
    pub fn ball_count(&self) -> usize {
        match *self {
            Scenario::Random { count } => count,
            Scenario::SplitGravity { per_side } => per_side * 2,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === World ===
    /// Field width in world units
    pub width: f64,
    /// Field height in world units
    pub height: f64,
    /// Gravity given to launched balls and to the Random scenario
    pub gravity: f64,

    // === Tunables ===
    /// Global drag in [0, 0.99], applied to every velocity each step
    pub resistance: f64,
    /// Collision passes per frame
    pub collision_precision: u32,
    /// Wall-clock seconds are scaled by this to get dt
    pub time_scale: f64,
    /// Share one previous-velocity value across all balls instead of
    /// tracking it per ball
    pub legacy_shared_hysteresis: bool,

    // === Population ===
    /// RNG seed for spawning
    pub seed: u64,
    pub scenario: Scenario,
}

impl Default for Settings {
    fn default() -> Self {
        Self::for_scenario(Scenario::default())
    }
}

impl Settings {
    /// Default settings with precision derived from the scenario's ball count
    pub fn for_scenario(scenario: Scenario) -> Self {
        Self {
            width: 1500.0,
            height: 800.0,
            gravity: DEFAULT_GRAVITY,
            resistance: 0.0,
            collision_precision: collision_precision_for(scenario.ball_count()),
            time_scale: TIME_SCALE,
            legacy_shared_hysteresis: false,
            seed: 0,
            scenario,
        }
    }

    /// Parse settings from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json_str(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.width, self.height)
    }

    /// Simulation dt for a frame that took `seconds` of wall-clock time
    #[inline]
    pub fn frame_dt(&self, seconds: f64) -> f64 {
        seconds * self.time_scale
    }

    /// Bump resistance by one step; reaching 1.0 snaps to the maximum
    pub fn increase_resistance(&mut self) {
        self.resistance += RESISTANCE_STEP;
        if self.resistance >= 1.0 {
            self.resistance = MAX_RESISTANCE;
        }
        log::info!("Resistance: {:.2}", self.resistance);
    }

    pub fn reset_resistance(&mut self) {
        self.resistance = 0.0;
        log::info!("Resistance reset");
    }

    /// Set resistance directly, clamped into [0, MAX_RESISTANCE]
    pub fn set_resistance(&mut self, value: f64) {
        self.resistance = value.clamp(0.0, MAX_RESISTANCE);
    }

    /// Track a window resize
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        log::debug!("Field resized to {width}x{height}");
    }
}
