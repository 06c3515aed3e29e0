//! Radial distance ring simplification.
//!
//! A fast O(n) filter that removes vertices within a minimum distance of the
//! last kept vertex. Useful for thinning dense digitized outlines before
//! running the heavier algorithms.

use crate::polygon::Ring;
use crate::primitives::Point2;
use num_traits::Float;

/// Simplifies a ring by dropping vertices closer than `min_distance` to the
/// previously kept vertex.
///
/// The first vertex is always kept, and the wrap-around gap back to it is
/// checked so the last kept vertex is not left crowding the start. If fewer
/// than three vertices survive, the ring is returned unchanged.
///
/// # Complexity
///
/// O(n) time, O(k) space for k kept vertices.
///
/// # Example
///
/// ```
/// use polyweave::{simplify::radial, Point2, Ring};
///
/// let ring = Ring::new(vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(0.05, 0.0), // crowds the start, removed
///     Point2::new(4.0, 0.0),
///     Point2::new(4.0, 4.0),
///     Point2::new(0.0, 4.0),
/// ]);
///
/// let simplified = radial(&ring, 0.5);
/// assert_eq!(simplified.len(), 4);
/// ```
pub fn radial<F: Float>(ring: &Ring<F>, min_distance: F) -> Ring<F> {
    let n = ring.len();
    if n <= 3 {
        return ring.clone();
    }
    let points = ring.points();
    let min_dist_sq = min_distance * min_distance;

    let mut kept: Vec<Point2<F>> = Vec::with_capacity(n);
    kept.push(points[0]);
    let mut last = points[0];

    for &p in &points[1..] {
        if p.distance_squared(last) >= min_dist_sq {
            kept.push(p);
            last = p;
        }
    }

    // Closing the ring: the final kept vertex must also clear the start
    if kept.len() > 1 && kept[kept.len() - 1].distance_squared(points[0]) < min_dist_sq {
        kept.pop();
    }

    if kept.len() < 3 {
        return ring.clone();
    }
    Ring::new(kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radial_basic() {
        let ring = Ring::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(0.1, 0.0),
            Point2::new(0.2, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 4.0),
            Point2::new(0.0, 4.0),
        ]);
        let out = radial(&ring, 0.5);
        assert_eq!(out.len(), 4);
        assert_eq!(out.points()[0], Point2::new(0.0, 0.0));
    }

    #[test]
    fn test_radial_wraparound_crowding() {
        // The last vertex crowds the first across the ring closure
        let ring = Ring::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 4.0),
            Point2::new(0.0, 4.0),
            Point2::new(0.0, 0.1),
        ]);
        let out = radial(&ring, 0.5);
        assert_eq!(out.len(), 4);
    }

    #[test]
    fn test_radial_never_degenerates() {
        let ring = Ring::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ]);
        let out = radial(&ring, 10.0);
        assert_eq!(out, ring);
    }

    #[test]
    fn test_radial_triangle_untouched() {
        let ring = Ring::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(0.1, 0.0),
            Point2::new(0.1, 0.1),
        ]);
        assert_eq!(radial(&ring, 5.0), ring);
    }
}
