//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - dt supplied by the driver
//! - Seeded RNG only
//! - Stable iteration order (insertion order)
//! - No rendering or platform dependencies

pub mod collision;
mod integrate;
pub mod launch;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod vector;

pub use collision::{check_collisions, is_colliding, resolve_collision};
pub use launch::{Launch, Slingshot, screen_to_world};
pub use spawn::Spawner;
pub use state::{Ball, Bounds, Color, ColorPolicy, World};
pub use tick::{StepStats, TickInput, step, tick};
pub use vector::{Vector2, VectorExt};
