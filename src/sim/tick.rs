//! Per-frame simulation step
//!
//! Collisions first, against current positions, then every ball integrates
//! by the same dt.

use super::collision::check_collisions;
use super::launch::Launch;
use super::spawn::Spawner;
use super::state::World;
use crate::settings::Settings;

/// Input commands for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Remove every ball
    pub clear: bool,
    /// Flip gravity for every ball
    pub toggle_gravity: bool,
    /// Raise global resistance one step
    pub increase_resistance: bool,
    /// Reset global resistance to zero
    pub reset_resistance: bool,
    /// Slingshot released this frame
    pub launch: Option<Launch>,
    /// Window resized to (width, height)
    pub resize: Option<(f64, f64)>,
}

/// What happened during one step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepStats {
    /// Collision passes run
    pub passes: u32,
    /// Pair resolutions across all passes
    pub collisions: usize,
}

/// Advance every ball by `dt`
///
/// Runs `settings.collision_precision` collision passes (at least one) with
/// the same dt; only velocities change between passes.
pub fn step(world: &mut World, dt: f64, settings: &Settings) -> StepStats {
    let passes = settings.collision_precision.max(1);
    let mut collisions = 0;
    for _ in 0..passes {
        collisions += check_collisions(&mut world.balls, dt);
    }

    let (width, height, resistance) = (settings.width, settings.height, settings.resistance);
    if settings.legacy_shared_hysteresis {
        for ball in &mut world.balls {
            ball.prev_vel = world.shared_prev_vel;
            ball.update(dt, width, height, resistance);
            world.shared_prev_vel = ball.prev_vel;
        }
    } else {
        for ball in &mut world.balls {
            ball.update(dt, width, height, resistance);
        }
    }

    log::trace!("Step dt={dt:.4}: {collisions} collisions over {passes} passes");
    StepStats { passes, collisions }
}

/// Apply one frame of input, then step
pub fn tick(
    world: &mut World,
    spawner: &mut Spawner,
    settings: &mut Settings,
    input: &TickInput,
    dt: f64,
) -> StepStats {
    if let Some((width, height)) = input.resize {
        settings.resize(width, height);
        world.confine(settings.bounds());
    }
    if input.clear {
        world.clear();
    }
    if input.toggle_gravity {
        world.toggle_gravity();
    }
    if input.increase_resistance {
        settings.increase_resistance();
    }
    if input.reset_resistance {
        settings.reset_resistance();
    }
    if let Some(launch) = input.launch {
        spawner.launch(world, launch, settings.bounds(), settings.gravity);
    }

    step(world, dt, settings)
}
