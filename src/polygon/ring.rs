//! Closed ring type and basic measures.

use crate::primitives::Point2;
use num_traits::Float;

/// Where a point sits relative to a closed ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// Strictly inside the ring.
    Inside,
    /// Exactly on a vertex or edge of the ring.
    OnBoundary,
    /// Strictly outside the ring.
    Outside,
}

/// A closed boundary loop stored as a vertex sequence.
///
/// The closing edge from the last vertex back to the first is implicit: the
/// duplicate closing vertex common in interchange formats is stripped on
/// construction, as are consecutive duplicate vertices. Winding order is
/// whatever the caller supplied; it is preserved by all operations that
/// return rings.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring<F> {
    points: Vec<Point2<F>>,
}

impl<F: Float> Ring<F> {
    /// Creates a ring from a vertex sequence.
    ///
    /// Accepts either open form (`a b c`) or closed form (`a b c a`); the
    /// trailing duplicate and any consecutive duplicates are removed.
    pub fn new(points: Vec<Point2<F>>) -> Self {
        let mut pts: Vec<Point2<F>> = Vec::with_capacity(points.len());
        for p in points {
            if pts.last() != Some(&p) {
                pts.push(p);
            }
        }
        if pts.len() > 1 && pts.first() == pts.last() {
            pts.pop();
        }
        Self { points: pts }
    }

    /// Creates an empty ring.
    pub fn empty() -> Self {
        Self { points: Vec::new() }
    }

    /// The stored vertices, without the closing duplicate.
    #[inline]
    pub fn points(&self) -> &[Point2<F>] {
        &self.points
    }

    /// Number of stored vertices (= number of edges).
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the ring has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns true if the ring cannot bound a region.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.points.len() < 3
    }

    /// The vertices in closed form, first vertex repeated at the end.
    pub fn closed_points(&self) -> Vec<Point2<F>> {
        let mut pts = self.points.clone();
        if let Some(&first) = pts.first() {
            pts.push(first);
        }
        pts
    }

    /// Iterates the directed edges of the ring, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (Point2<F>, Point2<F>)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    /// Returns the signed area of the ring using the shoelace formula.
    ///
    /// Positive for CCW winding, negative for CW winding.
    pub fn signed_area(&self) -> F {
        if self.points.len() < 3 {
            return F::zero();
        }

        let mut area = F::zero();
        for (a, b) in self.edges() {
            area = area + a.x * b.y - b.x * a.y;
        }
        area / F::from(2.0).unwrap()
    }

    /// Returns the absolute area of the ring.
    pub fn area(&self) -> F {
        self.signed_area().abs()
    }

    /// Returns true for CCW winding (positive signed area).
    pub fn is_ccw(&self) -> bool {
        self.signed_area() > F::zero()
    }

    /// Returns a ring with reversed winding order.
    pub fn reversed(&self) -> Self {
        let mut points = self.points.clone();
        points.reverse();
        Self { points }
    }

    /// Returns the centroid (center of mass) of the enclosed region.
    ///
    /// Returns None for degenerate or zero-area rings.
    pub fn centroid(&self) -> Option<Point2<F>> {
        if self.points.len() < 3 {
            return None;
        }

        let area = self.signed_area();
        if area == F::zero() {
            return None;
        }

        let mut cx = F::zero();
        let mut cy = F::zero();
        for (a, b) in self.edges() {
            let w = a.x * b.y - b.x * a.y;
            cx = cx + (a.x + b.x) * w;
            cy = cy + (a.y + b.y) * w;
        }

        let six = F::from(6.0).unwrap();
        Some(Point2::new(cx / (six * area), cy / (six * area)))
    }

    /// Returns the perimeter of the ring.
    pub fn perimeter(&self) -> F {
        if self.points.len() < 2 {
            return F::zero();
        }
        self.edges()
            .fold(F::zero(), |acc, (a, b)| acc + a.distance(b))
    }

    /// Returns the bounding box as (min, max) points.
    pub fn bounding_box(&self) -> Option<(Point2<F>, Point2<F>)> {
        let first = *self.points.first()?;
        let mut min = first;
        let mut max = first;

        for p in &self.points[1..] {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Some((min, max))
    }

    /// Classifies a point against the ring: inside, on the boundary, or
    /// outside.
    ///
    /// Boundary detection is exact: a point equal to a vertex or lying on an
    /// edge (zero cross product, coordinates within the edge's span) reports
    /// `OnBoundary` before the ray cast runs, so the parity test never sees
    /// boundary points. Degenerate rings classify everything `Outside`.
    pub fn locate(&self, p: Point2<F>) -> Location {
        if self.points.len() < 3 {
            return Location::Outside;
        }

        for (a, b) in self.edges() {
            let cross = (b - a).cross(p - a);
            if cross == F::zero()
                && p.x >= a.x.min(b.x)
                && p.x <= a.x.max(b.x)
                && p.y >= a.y.min(b.y)
                && p.y <= a.y.max(b.y)
            {
                return Location::OnBoundary;
            }
        }

        // Half-open ray cast toward +x; p is strictly off the boundary here.
        let mut inside = false;
        for (a, b) in self.edges() {
            if (a.y > p.y) != (b.y > p.y) {
                let x_at = (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x;
                if p.x < x_at {
                    inside = !inside;
                }
            }
        }

        if inside {
            Location::Inside
        } else {
            Location::Outside
        }
    }
}
