//! Per-ball integration and wall response
//!
//! Walls are checked against the predicted position before the ball moves,
//! so a bounce takes effect in the same step that would have crossed the wall.

use super::state::Ball;
use crate::consts::*;

impl Ball {
    /// Reflect and damp velocity if the next position would leave the field
    pub fn bounce(&mut self, dt: f64, width: f64, height: f64) {
        let next = self.next_pos(dt);
        if next.x > width - self.radius + GROUNDED_THRESHOLD || next.x < self.radius {
            self.vel.x *= WALL_BOUNCE;
            self.roll();
        }
        if next.y > height - self.radius + GROUNDED_THRESHOLD || next.y < self.radius {
            self.vel.y *= WALL_BOUNCE;
            self.roll();
        }
    }

    #[inline]
    fn is_airborne(&self) -> bool {
        self.pos.y > self.radius + GROUNDED_THRESHOLD
    }

    /// Advance one step
    ///
    /// `resistance` is the global drag in [0, 1); every velocity component is
    /// scaled by `1 - resistance` at the end of the step.
    pub fn update(&mut self, dt: f64, width: f64, height: f64, resistance: f64) {
        self.bounce(dt, width, height);

        // A ball still answering a collision ignores gravity this frame
        if self.is_airborne() && self.cooldown == 0 {
            self.vel.y -= self.gravity * dt;
        }

        // Stop slow balls: on the floor, or just past the top of an arc.
        // Must be the last velocity change before moving.
        if self.vel.y.abs() < REST_SPEED_Y && (!self.is_airborne() || self.prev_vel.y > 0.0) {
            self.vel.y = 0.0;
        }
        if self.vel.x.abs() < REST_SPEED_X {
            self.vel.x = 0.0;
        }

        self.pos += self.vel * dt;
        self.rot -= self.spin * dt / 2.0;

        // Never sink below the floor
        self.pos.y = self.pos.y.max(self.radius);

        if self.pos.y <= self.radius + ROLLING_HEIGHT {
            self.vel.x *= ROLLING_FRICTION;
            self.roll();
        }

        self.vel *= 1.0 - resistance;

        self.prev_vel = self.vel;
        self.cooldown = self.cooldown.saturating_sub(1);
    }
}
