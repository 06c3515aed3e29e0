//! Displacement vectors.
//!
//! A `Vec2` is what subtracting two [`Point2`]s produces: an edge
//! direction, an offset between ring vertices, a translation. The engine
//! consumes vectors almost exclusively through two products. The sign of
//! [`cross`](Vec2::cross) carries every sidedness, parallelism, and
//! orientation decision in the crate; [`dot`](Vec2::dot) projects points
//! onto edges to obtain the parametric fractions the weaving builder sorts
//! by.
//!
//! [`Point2`]: super::Point2

use num_traits::Float;
use std::ops::Mul;

/// A displacement in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Creates a vector from its components.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Perpendicular product of two vectors.
    ///
    /// Equals twice the signed area of the triangle the vectors span:
    /// positive when `other` turns counter-clockwise from `self`, negative
    /// when clockwise, and exactly zero when the vectors are parallel. The
    /// engine compares this value strictly against zero, so no rounding is
    /// applied here.
    #[inline]
    pub fn cross(self, other: Self) -> F {
        self.x * other.y - self.y * other.x
    }

    /// Projection product of two vectors.
    ///
    /// Dividing `(p - start).dot(d)` by `d.norm_squared()` gives the
    /// fraction of `p`'s projection along an edge with direction `d`.
    #[inline]
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y
    }

    /// Squared length of the vector.
    ///
    /// The engine only ever needs lengths for projection denominators and
    /// distance comparisons, so the square root is left to the caller.
    #[inline]
    pub fn norm_squared(self) -> F {
        self.dot(self)
    }
}

impl<F: Float> Mul<F> for Vec2<F> {
    type Output = Self;

    #[inline]
    fn mul(self, k: F) -> Self {
        Self::new(self.x * k, self.y * k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::Point2;

    #[test]
    fn test_cross_sign_gives_turn_direction() {
        // Walking the bottom edge of a CCW square, the left edge turns CCW
        let along = Vec2::new(2.0_f64, 0.0);
        let up = Vec2::new(0.0, 2.0);
        assert!(along.cross(up) > 0.0);
        assert!(up.cross(along) < 0.0);
    }

    #[test]
    fn test_cross_zero_for_parallel() {
        let d = Vec2::new(3.0_f64, -1.5);
        assert_eq!(d.cross(d * 4.0), 0.0);
        assert_eq!(d.cross(d * -0.25), 0.0);
    }

    #[test]
    fn test_cross_is_twice_triangle_area() {
        let a: Point2<f64> = Point2::new(1.0, 1.0);
        let b = Point2::new(4.0, 1.0);
        let c = Point2::new(1.0, 3.0);
        assert_eq!((b - a).cross(c - a), 6.0);
    }

    #[test]
    fn test_dot_projection_fraction() {
        // The fraction recovered the way segment_meet computes it
        let start: Point2<f64> = Point2::new(2.0, 0.0);
        let end = Point2::new(6.0, 0.0);
        let d = end - start;
        let p = Point2::new(5.0, 7.0);
        assert_eq!((p - start).dot(d) / d.norm_squared(), 0.75);
    }

    #[test]
    fn test_norm_squared() {
        let v = Vec2::new(3.0_f64, 4.0);
        assert_eq!(v.norm_squared(), 25.0);
    }

    #[test]
    fn test_scaling() {
        let v = Vec2::new(1.0_f64, -2.0);
        assert_eq!(v * 3.0, Vec2::new(3.0, -6.0));
    }
}
