//! Ramer-Douglas-Peucker ring simplification.
//!
//! The polyline algorithm recursively keeps the point farthest from the
//! chord between two anchors. For a ring the chord anchors are the first
//! vertex and the ring closure back to it, so the recursion runs over the
//! closed vertex sequence and the duplicate endpoint is dropped again at the
//! end.
//!
//! Time complexity: O(n²) worst case, O(n log n) typical.

use crate::polygon::Ring;
use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// Simplifies a ring using Ramer-Douglas-Peucker.
///
/// Vertices within `epsilon` of the running chord are removed. The first
/// vertex is always kept. If fewer than three vertices would survive, the
/// ring is returned unchanged.
///
/// # Example
///
/// ```
/// use polyweave::{simplify::rdp, Point2, Ring};
///
/// let ring = Ring::new(vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(2.0, 0.05), // nearly collinear, removed
///     Point2::new(4.0, 0.0),
///     Point2::new(4.0, 4.0),
///     Point2::new(0.0, 4.0),
/// ]);
///
/// let simplified = rdp(&ring, 0.1);
/// assert_eq!(simplified.len(), 4);
/// ```
pub fn rdp<F: Float>(ring: &Ring<F>, epsilon: F) -> Ring<F> {
    if ring.len() <= 3 {
        return ring.clone();
    }

    let closed = ring.closed_points();
    let n = closed.len();

    let mut keep = vec![false; n];
    keep[0] = true;
    keep[n - 1] = true;
    rdp_recursive(&closed, 0, n - 1, epsilon, &mut keep);

    let kept: Vec<Point2<F>> = closed
        .iter()
        .zip(&keep)
        .filter_map(|(&p, &k)| k.then_some(p))
        .collect();

    // kept still carries the duplicate closure point
    if kept.len() < 4 {
        return ring.clone();
    }
    Ring::new(kept)
}

/// Processes the open run between anchors `start` and `end` (inclusive).
fn rdp_recursive<F: Float>(
    points: &[Point2<F>],
    start: usize,
    end: usize,
    epsilon: F,
    keep: &mut [bool],
) {
    if end <= start + 1 {
        return;
    }

    let chord = Segment2::new(points[start], points[end]);
    let mut max_dist = F::zero();
    let mut max_idx = start;

    for (i, &p) in points.iter().enumerate().take(end).skip(start + 1) {
        let dist = chord.distance_to_point(p);
        if dist > max_dist {
            max_dist = dist;
            max_idx = i;
        }
    }

    if max_dist > epsilon {
        keep[max_idx] = true;
        rdp_recursive(points, start, max_idx, epsilon, keep);
        rdp_recursive(points, max_idx, end, epsilon, keep);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rdp_removes_collinear_noise() {
        let ring = Ring::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.02),
            Point2::new(2.0, -0.01),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 4.0),
            Point2::new(0.0, 4.0),
        ]);
        let out = rdp(&ring, 0.1);
        assert_eq!(out.len(), 4);
        assert_relative_eq!(out.area(), 16.0, epsilon = 1e-9);
    }

    #[test]
    fn test_rdp_keeps_significant_corners() {
        let ring = Ring::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 4.0),
            Point2::new(2.0, 2.0), // deep notch, must survive
            Point2::new(0.0, 4.0),
        ]);
        let out = rdp(&ring, 0.5);
        assert_eq!(out.len(), 5);
    }

    #[test]
    fn test_rdp_triangle_unchanged() {
        let ring = Ring::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(2.0, 3.0),
        ]);
        assert_eq!(rdp(&ring, 10.0), ring);
    }

    #[test]
    fn test_rdp_never_degenerates() {
        // Huge epsilon wants to remove everything; ring is kept as-is
        let ring = Ring::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 4.0),
            Point2::new(0.0, 4.0),
        ]);
        let out = rdp(&ring, 100.0);
        assert_eq!(out, ring);
    }
}
