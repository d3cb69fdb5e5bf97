//! 2D vector math
//!
//! `Vector2` is glam's `DVec2`: arithmetic, the accumulate operators,
//! `distance`, `length` and the zero-safe `normalize_or_zero` come from glam.
//! Rotation about an arbitrary center is added here.

use glam::DVec2;

pub type Vector2 = DVec2;

pub trait VectorExt {
    /// Rotate counter-clockwise around the origin (radians)
    fn rotated(self, angle: f64) -> Self;
    /// Rotate counter-clockwise around `center` (radians)
    fn rotated_around(self, center: Self, angle: f64) -> Self;
}

impl VectorExt for DVec2 {
    #[inline]
    fn rotated(self, angle: f64) -> Self {
        DVec2::from_angle(angle).rotate(self)
    }

    #[inline]
    fn rotated_around(self, center: Self, angle: f64) -> Self {
        (self - center).rotated(angle) + center
    }
}
