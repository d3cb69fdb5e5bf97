//! Simulation state: balls and the world that owns them
//!
//! Everything that must survive between frames lives here, including the
//! collision cooldowns and the previous-frame velocities used to detect rest.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::vector::Vector2;

/// RGB color, each channel in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const RED: Color = Color::new(1.0, 0.0, 0.0);
    pub const BLUE: Color = Color::new(0.0, 0.0, 1.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            r: rng.random(),
            g: rng.random(),
            b: rng.random(),
        }
    }
}

/// How a spawned ball gets its color
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum ColorPolicy {
    #[default]
    Random,
    Fixed(Color),
}

impl ColorPolicy {
    pub fn pick<R: Rng>(&self, rng: &mut R) -> Color {
        match *self {
            ColorPolicy::Random => Color::random(rng),
            ColorPolicy::Fixed(color) => color,
        }
    }
}

/// Visible field size; the field spans [0, width] x [0, height]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Nearest center that keeps a ball of `radius` inside the field
    pub fn clamp_center(&self, pos: Vector2, radius: f64) -> Vector2 {
        Vector2::new(
            clamp(pos.x, radius, self.width - radius),
            clamp(pos.y, radius, self.height - radius),
        )
    }
}

/// Clamp that favors `lo` instead of panicking when the range is empty
#[inline]
fn clamp(val: f64, lo: f64, hi: f64) -> f64 {
    if val < lo {
        lo
    } else if val > hi {
        hi
    } else {
        val
    }
}

/// A ball entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Center, origin bottom-left, y up
    pub(crate) pos: Vector2,
    pub vel: Vector2,
    /// Radius; mass is derived from it
    pub(crate) radius: f64,
    pub(crate) color: Color,
    /// Cosmetic rotation angle (radians)
    pub(crate) rot: f64,
    /// Cosmetic rotation rate
    pub spin: f64,
    /// Signed gravity acceleration; negative floats upward
    pub gravity: f64,
    /// Frames left during which gravity is suppressed after a collision
    pub cooldown: u32,
    /// Velocity at the end of the previous frame (apex detection)
    pub prev_vel: Vector2,
}

impl Ball {
    pub fn new(pos: Vector2, vel: Vector2, radius: f64, color: Color, gravity: f64) -> Self {
        Self {
            pos,
            vel,
            radius,
            color,
            rot: 0.0,
            spin: 0.0,
            gravity,
            cooldown: 0,
            prev_vel: Vector2::ZERO,
        }
    }

    /// Position after `dt` at the current velocity
    #[inline]
    pub fn next_pos(&self, dt: f64) -> Vector2 {
        self.pos + self.vel * dt
    }

    /// Area-proportional mass
    #[inline]
    pub fn mass(&self) -> f64 {
        self.radius * self.radius
    }

    #[inline]
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass() * self.vel.length_squared()
    }

    /// Recompute the rolling rate from the horizontal velocity
    #[inline]
    pub(crate) fn roll(&mut self) {
        self.spin = self.vel.x / self.radius;
    }

    // Read accessors for the rendering layer

    #[inline]
    pub fn position(&self) -> Vector2 {
        self.pos
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn rotation(&self) -> f64 {
        self.rot
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }
}

/// The ball collection
///
/// Iteration order is insertion order; the collision scan visits each
/// unordered pair once in that order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct World {
    pub balls: Vec<Ball>,
    /// Previous velocity shared by every ball in legacy hysteresis mode
    #[serde(default)]
    pub(crate) shared_prev_vel: Vector2,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.balls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balls.is_empty()
    }

    pub fn push(&mut self, ball: Ball) {
        self.balls.push(ball);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ball> {
        self.balls.iter()
    }

    /// Remove every ball
    pub fn clear(&mut self) {
        log::info!("Cleared {} balls", self.balls.len());
        self.balls.clear();
        self.shared_prev_vel = Vector2::ZERO;
    }

    /// Flip the gravity sign of every ball
    pub fn toggle_gravity(&mut self) {
        for ball in &mut self.balls {
            ball.gravity = -ball.gravity;
        }
        log::info!("Gravity toggled for {} balls", self.balls.len());
    }

    /// Pull every ball back inside `bounds`, e.g. after the field shrinks
    pub fn confine(&mut self, bounds: Bounds) {
        for ball in &mut self.balls {
            ball.pos = bounds.clamp_center(ball.pos, ball.radius);
        }
    }

    /// True if `candidate` touches any ball in the world right now
    pub fn overlaps_any(&self, candidate: &Ball) -> bool {
        self.balls
            .iter()
            .any(|ball| super::collision::is_colliding(ball, candidate, 0.0))
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.balls.iter().map(Ball::kinetic_energy).sum()
    }

    /// Total momentum, with mass = radius²
    pub fn momentum(&self) -> Vector2 {
        self.balls.iter().map(|b| b.vel * b.mass()).sum()
    }
}
