//! Ball spawning and placement
//!
//! New balls get a random radius, position and velocity. Position and
//! velocity are re-rolled until the ball clears every existing ball, up to
//! `MAX_PLACEMENT_ATTEMPTS` tries.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::launch::Launch;
use super::state::{Ball, Bounds, Color, ColorPolicy, World};
use super::vector::Vector2;
use crate::consts::*;
use crate::error::{Result, SimError};
use crate::settings::{Scenario, Settings};

/// Uniform sample from [0, max), or 0 for an empty range
#[inline]
fn below<R: Rng>(rng: &mut R, max: f64) -> f64 {
    if max > 0.0 { rng.random_range(0.0..max) } else { 0.0 }
}

/// Seeded source of new balls
#[derive(Debug, Clone)]
pub struct Spawner {
    rng: Pcg32,
}

impl Spawner {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    fn random_radius(&mut self) -> f64 {
        self.rng.random_range(MIN_RADIUS..MAX_RADIUS)
    }

    fn random_position(&mut self, bounds: Bounds, radius: f64) -> Vector2 {
        let raw = Vector2::new(
            below(&mut self.rng, bounds.width),
            below(&mut self.rng, bounds.height),
        );
        bounds.clamp_center(raw, radius)
    }

    fn random_velocity(&mut self) -> Vector2 {
        Vector2::new(
            self.rng.random_range(-MAX_SPEED..MAX_SPEED),
            self.rng.random_range(-MAX_SPEED..MAX_SPEED),
        )
    }

    /// Add one ball at a free random spot
    ///
    /// Radius, color and gravity are fixed for the candidate; only position
    /// and velocity are re-rolled. Nothing is added on failure.
    pub fn spawn<'w>(
        &mut self,
        world: &'w mut World,
        bounds: Bounds,
        gravity: f64,
        colors: ColorPolicy,
    ) -> Result<&'w Ball> {
        let radius = self.random_radius();
        let color = colors.pick(&mut self.rng);

        for attempt in 1..=MAX_PLACEMENT_ATTEMPTS {
            let pos = self.random_position(bounds, radius);
            let vel = self.random_velocity();
            let candidate = Ball::new(pos, vel, radius, color, gravity);
            if world.overlaps_any(&candidate) {
                continue;
            }

            log::debug!(
                "Spawned ball r={:.1} at ({:.1}, {:.1}) after {} attempt(s)",
                radius,
                pos.x,
                pos.y,
                attempt
            );
            let index = world.len();
            world.push(candidate);
            return Ok(&world.balls[index]);
        }

        log::warn!(
            "No room for a ball of radius {:.1} among {} balls",
            radius,
            world.len()
        );
        Err(SimError::PlacementFailed {
            attempts: MAX_PLACEMENT_ATTEMPTS,
        })
    }

    /// Add a slingshot ball; launched balls may overlap others
    pub fn launch<'w>(
        &mut self,
        world: &'w mut World,
        launch: Launch,
        bounds: Bounds,
        gravity: f64,
    ) -> &'w Ball {
        let radius = self.random_radius();
        let color = Color::random(&mut self.rng);
        let pos = bounds.clamp_center(launch.start, radius);
        log::debug!(
            "Launched ball r={:.1} from ({:.1}, {:.1}) with velocity ({:.2}, {:.2})",
            radius,
            pos.x,
            pos.y,
            launch.velocity.x,
            launch.velocity.y
        );
        let index = world.len();
        world.push(Ball::new(pos, launch.velocity, radius, color, gravity));
        &world.balls[index]
    }

    /// Fill the world with the settings' starting scenario
    pub fn populate(&mut self, world: &mut World, settings: &Settings) -> Result<()> {
        let bounds = settings.bounds();
        match settings.scenario {
            Scenario::Random { count } => {
                for _ in 0..count {
                    self.spawn(world, bounds, settings.gravity, ColorPolicy::Random)?;
                }
            }
            Scenario::SplitGravity { per_side } => {
                let gravity = settings.gravity.abs();
                for _ in 0..per_side {
                    self.spawn(world, bounds, gravity, ColorPolicy::Fixed(Color::RED))?;
                }
                for _ in 0..per_side {
                    self.spawn(world, bounds, -gravity, ColorPolicy::Fixed(Color::BLUE))?;
                }
            }
        }
        log::info!("Populated field with {} balls", world.len());
        Ok(())
    }
}
