//! Slingshot launch interaction
//!
//! Press to anchor, drag to aim, release to fire. The ball starts at the
//! anchor and flies away from the release point.

use serde::{Deserialize, Serialize};

use super::vector::Vector2;
use crate::consts::SLING_POWER;

/// A launch request produced by releasing the slingshot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Launch {
    pub start: Vector2,
    pub velocity: Vector2,
}

impl Launch {
    /// Launch from `start`, pulled back to `release`
    pub fn from_drag(start: Vector2, release: Vector2) -> Self {
        Self {
            start,
            velocity: (start - release) / SLING_POWER,
        }
    }
}

/// Convert window coordinates (origin top-left, y down) to world coordinates
#[inline]
pub fn screen_to_world(x: f64, y: f64, height: f64) -> Vector2 {
    Vector2::new(x, height - y)
}

#[derive(Debug, Clone, Default)]
pub struct Slingshot {
    anchor: Option<Vector2>,
    cursor: Vector2,
}

impl Slingshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, point: Vector2) {
        self.anchor = Some(point);
        self.cursor = point;
    }

    /// Track the cursor, pressed or not
    pub fn drag(&mut self, point: Vector2) {
        self.cursor = point;
    }

    pub fn is_pressed(&self) -> bool {
        self.anchor.is_some()
    }

    /// Arrow to draw while aiming, from the cursor to the anchor
    pub fn arrow(&self) -> Option<(Vector2, Vector2)> {
        self.anchor.map(|anchor| (self.cursor, anchor))
    }

    /// Fire; `None` if the slingshot was never pressed
    pub fn release(&mut self, point: Vector2) -> Option<Launch> {
        self.cursor = point;
        self.anchor
            .take()
            .map(|anchor| Launch::from_drag(anchor, point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launch_velocity_points_away_from_release() {
        let launch = Launch::from_drag(Vector2::new(100.0, 100.0), Vector2::new(50.0, 80.0));
        assert_eq!(launch.start, Vector2::new(100.0, 100.0));
        assert_eq!(launch.velocity, Vector2::new(10.0, 4.0));
    }

    #[test]
    fn test_screen_to_world_flips_y() {
        assert_eq!(screen_to_world(30.0, 0.0, 800.0), Vector2::new(30.0, 800.0));
        assert_eq!(screen_to_world(30.0, 800.0, 800.0), Vector2::new(30.0, 0.0));
    }

    #[test]
    fn test_press_drag_release() {
        let mut sling = Slingshot::new();
        assert!(sling.arrow().is_none());

        sling.press(Vector2::new(200.0, 200.0));
        sling.drag(Vector2::new(150.0, 190.0));
        assert!(sling.is_pressed());
        assert_eq!(
            sling.arrow(),
            Some((Vector2::new(150.0, 190.0), Vector2::new(200.0, 200.0)))
        );

        let launch = sling.release(Vector2::new(150.0, 180.0)).unwrap();
        assert_eq!(launch.velocity, Vector2::new(10.0, 4.0));
        assert!(!sling.is_pressed());
        assert!(sling.arrow().is_none());
    }

    #[test]
    fn test_release_without_press_does_nothing() {
        let mut sling = Slingshot::new();
        assert!(sling.release(Vector2::new(1.0, 1.0)).is_none());
    }
}
