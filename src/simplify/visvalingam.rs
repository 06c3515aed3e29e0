//! Visvalingam-Whyatt ring simplification.
//!
//! Iteratively removes the vertex contributing the least effective area (the
//! triangle formed with its ring neighbors). On a ring there are no pinned
//! endpoints; the neighbor links wrap and removal stops at three vertices.
//!
//! Consistent O(n log n) via a min-heap with generation counters for stale
//! entries.

use crate::polygon::Ring;
use crate::primitives::Point2;
use num_traits::Float;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Simplifies a ring using Visvalingam-Whyatt.
///
/// Removes vertices until every remaining vertex spans an effective area of
/// at least `min_area`, or only three vertices remain. The three-vertex
/// floor means simplification never degenerates a ring, whatever the
/// threshold.
///
/// # Example
///
/// ```
/// use polyweave::{simplify::visvalingam, Point2, Ring};
///
/// let ring = Ring::new(vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(2.0, 0.05), // tiny effective area, removed
///     Point2::new(4.0, 0.0),
///     Point2::new(4.0, 4.0),
///     Point2::new(0.0, 4.0),
/// ]);
///
/// let simplified = visvalingam(&ring, 0.5);
/// assert_eq!(simplified.len(), 4);
/// ```
pub fn visvalingam<F: Float>(ring: &Ring<F>, min_area: F) -> Ring<F> {
    let n = ring.len();
    if n <= 3 {
        return ring.clone();
    }
    let points = ring.points();

    // Cyclic doubly linked list over indices
    let mut prev: Vec<usize> = (0..n).map(|i| (i + n - 1) % n).collect();
    let mut next: Vec<usize> = (0..n).map(|i| (i + 1) % n).collect();
    let mut active = vec![true; n];
    let mut generation = vec![0usize; n];
    let mut heap = BinaryHeap::new();

    for i in 0..n {
        heap.push(AreaEntry {
            index: i,
            area: triangle_area(points[prev[i]], points[i], points[next[i]]),
            generation: 0,
        });
    }

    let mut remaining = n;
    while let Some(entry) = heap.pop() {
        if !active[entry.index] || generation[entry.index] != entry.generation {
            continue;
        }
        if entry.area >= min_area || remaining <= 3 {
            break;
        }

        let i = entry.index;
        active[i] = false;
        remaining -= 1;

        let p = prev[i];
        let nx = next[i];
        next[p] = nx;
        prev[nx] = p;

        for j in [p, nx] {
            // Monotonicity: a neighbor's new area never drops below the
            // area just removed.
            let area = triangle_area(points[prev[j]], points[j], points[next[j]])
                .max(entry.area);
            generation[j] += 1;
            heap.push(AreaEntry {
                index: j,
                area,
                generation: generation[j],
            });
        }
    }

    let kept: Vec<Point2<F>> = (0..n).filter(|&i| active[i]).map(|i| points[i]).collect();
    Ring::new(kept)
}

struct AreaEntry<F> {
    index: usize,
    area: F,
    generation: usize,
}

impl<F: Float> PartialEq for AreaEntry<F> {
    fn eq(&self, other: &Self) -> bool {
        self.area == other.area
    }
}

impl<F: Float> Eq for AreaEntry<F> {}

impl<F: Float> PartialOrd for AreaEntry<F> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<F: Float> Ord for AreaEntry<F> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior
        other
            .area
            .partial_cmp(&self.area)
            .unwrap_or(Ordering::Equal)
    }
}

/// Area of the triangle formed by three points.
fn triangle_area<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> F {
    let two = F::one() + F::one();
    ((b - a).cross(c - a)).abs() / two
}
