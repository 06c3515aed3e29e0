//! Polygon type: one exterior ring plus holes.

use super::ring::{Location, Ring};
use crate::error::PolyError;
use crate::primitives::Point2;
use num_traits::Float;

/// A polygon bounded by one exterior ring and zero or more hole rings.
///
/// Holes are assumed interior-disjoint from one another and contained in
/// the exterior; [`Polygon::validate`] checks what can be checked cheaply.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<F> {
    exterior: Ring<F>,
    holes: Vec<Ring<F>>,
}

impl<F: Float> Polygon<F> {
    /// Creates a polygon from an exterior ring and holes.
    pub fn with_holes(exterior: Ring<F>, holes: Vec<Ring<F>>) -> Self {
        Self { exterior, holes }
    }

    /// Creates a polygon from an exterior ring alone.
    pub fn new(exterior: Ring<F>) -> Self {
        Self {
            exterior,
            holes: Vec::new(),
        }
    }

    /// Creates a polygon directly from an exterior vertex sequence.
    pub fn from_points(points: Vec<Point2<F>>) -> Self {
        Self::new(Ring::new(points))
    }

    /// The exterior ring.
    #[inline]
    pub fn exterior(&self) -> &Ring<F> {
        &self.exterior
    }

    /// The hole rings.
    #[inline]
    pub fn holes(&self) -> &[Ring<F>] {
        &self.holes
    }

    /// Returns true if the polygon bounds no region.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.exterior.is_degenerate()
    }

    /// Returns true if the polygon has at least one hole.
    #[inline]
    pub fn has_holes(&self) -> bool {
        !self.holes.is_empty()
    }

    /// Adds a hole ring. Degenerate rings are ignored.
    pub fn add_hole(&mut self, ring: Ring<F>) {
        if !ring.is_degenerate() {
            self.holes.push(ring);
        }
    }

    /// Area of the region: exterior area minus hole areas.
    pub fn area(&self) -> F {
        let holes: F = self
            .holes
            .iter()
            .fold(F::zero(), |acc, h| acc + h.area());
        self.exterior.area() - holes
    }

    /// Classifies a point against the polygon's region.
    ///
    /// A point inside a hole is `Outside`; a point on a hole boundary is
    /// `OnBoundary`.
    pub fn locate(&self, p: Point2<F>) -> Location {
        match self.exterior.locate(p) {
            Location::Inside => {
                for hole in &self.holes {
                    match hole.locate(p) {
                        Location::Inside => return Location::Outside,
                        Location::OnBoundary => return Location::OnBoundary,
                        Location::Outside => {}
                    }
                }
                Location::Inside
            }
            other => other,
        }
    }

    /// Checks structural soundness: non-degenerate exterior, non-degenerate
    /// holes whose vertices all lie inside or on the exterior.
    ///
    /// Self-intersection of individual rings is not checked here; see
    /// [`validate_ring`].
    pub fn validate(&self) -> Result<(), PolyError> {
        if self.exterior.is_degenerate() {
            return Err(PolyError::DegenerateRing {
                vertices: self.exterior.len(),
            });
        }
        for (index, hole) in self.holes.iter().enumerate() {
            if hole.is_degenerate() {
                return Err(PolyError::DegenerateRing {
                    vertices: hole.len(),
                });
            }
            let escaped = hole
                .points()
                .iter()
                .any(|&p| self.exterior.locate(p) == Location::Outside);
            if escaped {
                return Err(PolyError::HoleOutsideExterior { index });
            }
        }
        Ok(())
    }
}

/// Checks that a ring is non-degenerate and its boundary does not cross
/// itself.
///
/// Adjacent edges sharing a vertex are fine; any other edge pair that meets
/// is a self-intersection.
pub fn validate_ring<F: Float>(ring: &Ring<F>) -> Result<(), PolyError> {
    if ring.is_degenerate() {
        return Err(PolyError::DegenerateRing {
            vertices: ring.len(),
        });
    }

    let pts = ring.points();
    let n = pts.len();
    for i in 0..n {
        let (a1, a2) = (pts[i], pts[(i + 1) % n]);
        for j in (i + 1)..n {
            // Skip the shared-vertex neighbors of edge i
            if j == i + 1 || (i == 0 && j == n - 1) {
                continue;
            }
            let (b1, b2) = (pts[j], pts[(j + 1) % n]);
            if segments_touch(a1, a2, b1, b2) {
                let m = a1.midpoint(a2);
                return Err(PolyError::SelfIntersecting {
                    x: m.x.to_f64().unwrap_or(f64::NAN),
                    y: m.y.to_f64().unwrap_or(f64::NAN),
                });
            }
        }
    }
    Ok(())
}

/// Closed-interval segment overlap test used by [`validate_ring`].
fn segments_touch<F: Float>(
    a1: Point2<F>,
    a2: Point2<F>,
    b1: Point2<F>,
    b2: Point2<F>,
) -> bool {
    let d1 = a2 - a1;
    let d2 = b2 - b1;
    let denom = d1.cross(d2);
    let offset = b1 - a1;

    if denom == F::zero() {
        // Parallel; intersect only if collinear with overlapping spans
        if d1.cross(offset) != F::zero() {
            return false;
        }
        let len_sq = d1.norm_squared();
        if len_sq == F::zero() {
            return false;
        }
        let t1 = (b1 - a1).dot(d1) / len_sq;
        let t2 = (b2 - a1).dot(d1) / len_sq;
        let (lo, hi) = if t1 <= t2 { (t1, t2) } else { (t2, t1) };
        return hi >= F::zero() && lo <= F::one();
    }

    let t = offset.cross(d2) / denom;
    let u = offset.cross(d1) / denom;
    t >= F::zero() && t <= F::one() && u >= F::zero() && u <= F::one()
}
