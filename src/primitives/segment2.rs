//! Line segments as chords.
//!
//! The clipping engine meets edges through raw point pairs in
//! `clip::segment`; it never builds a segment value. This type exists for
//! the measurement side of the crate, chiefly the chord-distance queries of
//! Ramer-Douglas-Peucker simplification: project a point onto the chord,
//! clamp, and measure.

use super::{Point2, Vec2};
use num_traits::Float;

/// A directed segment between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2<F> {
    pub start: Point2<F>,
    pub end: Point2<F>,
}

impl<F: Float> Segment2<F> {
    /// Creates a segment from its endpoints.
    #[inline]
    pub fn new(start: Point2<F>, end: Point2<F>) -> Self {
        Self { start, end }
    }

    /// Displacement from start to end.
    #[inline]
    pub fn delta(self) -> Vec2<F> {
        self.end - self.start
    }

    /// The point at fraction `t` of the way from start to end.
    ///
    /// Same parameterization as the clipping fractions: 0 is `start`, 1 is
    /// `end`, values outside [0, 1] extrapolate along the carrying line.
    #[inline]
    pub fn point_at(self, t: F) -> Point2<F> {
        self.start + self.delta() * t
    }

    /// Fraction of `p`'s perpendicular projection along the segment,
    /// unclamped.
    ///
    /// A zero-length segment (the ring-closure chord RDP anchors on, for
    /// one) projects everything to fraction 0.
    pub fn project(self, p: Point2<F>) -> F {
        let d = self.delta();
        let len_sq = d.norm_squared();
        if len_sq == F::zero() {
            return F::zero();
        }
        (p - self.start).dot(d) / len_sq
    }

    /// The point of the segment nearest to `p`.
    #[inline]
    pub fn closest_point(self, p: Point2<F>) -> Point2<F> {
        let t = self.project(p).max(F::zero()).min(F::one());
        self.point_at(t)
    }

    /// Squared distance from `p` to the segment.
    #[inline]
    pub fn distance_squared_to_point(self, p: Point2<F>) -> F {
        p.distance_squared(self.closest_point(p))
    }

    /// Distance from `p` to the segment.
    #[inline]
    pub fn distance_to_point(self, p: Point2<F>) -> F {
        self.distance_squared_to_point(p).sqrt()
    }
}
