//! Bouncy Balls - a 2D field of balls bouncing off walls and each other
//!
//! Core modules:
//! - `sim`: Deterministic simulation (integration, collisions, spawning)
//! - `settings`: Simulation configuration (bounds, resistance, precision)
//! - `error`: Error type shared by the spawner and the settings loader

pub mod error;
pub mod settings;
pub mod sim;

pub use error::{Result, SimError};
pub use settings::{Scenario, Settings};

/// Simulation constants
pub mod consts {
    /// Default gravity acceleration (sign flips when gravity is toggled)
    pub const DEFAULT_GRAVITY: f64 = 9.8;
    /// Distance above the floor at which a ball counts as airborne
    pub const GROUNDED_THRESHOLD: f64 = 0.0;
    /// Velocity multiplier applied when a ball hits a wall
    pub const WALL_BOUNCE: f64 = -0.67;
    /// Fraction of velocity kept after a ball/ball collision
    pub const ELASTICITY: f64 = 0.9;
    /// Frames during which gravity is suppressed after a collision
    pub const COLLISION_TIMEOUT: u32 = 1;

    /// Vertical speed below which a settling ball is stopped
    pub const REST_SPEED_Y: f64 = 1.0;
    /// Horizontal speed below which a ball is stopped
    pub const REST_SPEED_X: f64 = 0.01;
    /// Height above `radius` at which rolling friction applies
    pub const ROLLING_HEIGHT: f64 = 5.0;
    /// Horizontal velocity multiplier while rolling
    pub const ROLLING_FRICTION: f64 = 0.99;

    /// Resistance step for the "increase resistance" control
    pub const RESISTANCE_STEP: f64 = 0.05;
    /// Highest resistance allowed (1.0 would freeze every ball)
    pub const MAX_RESISTANCE: f64 = 0.99;

    /// Collision passes per frame are this budget divided by ball count
    pub const PRECISION_BUDGET: u32 = 1000;

    /// Spawned ball radius range [min, max)
    pub const MIN_RADIUS: f64 = 10.0;
    pub const MAX_RADIUS: f64 = 30.0;
    /// Spawned ball speed per axis is drawn from [-MAX_SPEED, MAX_SPEED)
    pub const MAX_SPEED: f64 = 10.0;
    /// Placement retries before giving up on a crowded field
    pub const MAX_PLACEMENT_ATTEMPTS: u32 = 1000;

    /// Slingshot drag distance is divided by this to get launch velocity
    pub const SLING_POWER: f64 = 5.0;

    /// Wall-clock seconds are multiplied by this to get the simulation dt
    pub const TIME_SCALE: f64 = 10.0;
}

/// Number of collision passes per frame for a field of `ball_count` balls.
///
/// More balls means fewer passes, never fewer than one.
#[inline]
pub fn collision_precision_for(ball_count: usize) -> u32 {
    use consts::PRECISION_BUDGET;
    if ball_count == 0 {
        return PRECISION_BUDGET;
    }
    let count = u32::try_from(ball_count).unwrap_or(u32::MAX);
    (PRECISION_BUDGET / count).max(1)
}
