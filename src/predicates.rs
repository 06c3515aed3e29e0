//! Spatial predicates over polygons.
//!
//! These are coordinate-sequence traversals: they sample ring vertices, edge
//! midpoints, and pairwise edge meets, which decides every configuration of
//! straight-edged simple polygons except contacts confined entirely to
//! single vertices of both boundary samplings at once. The heavy topological
//! machinery lives in [`crate::clip`]; nothing here depends on it beyond the
//! shared segment-meet primitive.

use crate::clip::segment::{segment_meet, SegmentMeet};
use crate::polygon::{Location, Polygon, Ring};
use crate::primitives::Point2;
use num_traits::Float;

/// Points where the boundaries of `a` and `b` meet, holes included.
///
/// Endpoint rule: a meet landing on an edge's far endpoint (fraction exactly
/// 1) is NOT reported for that edge. Rings are closed, so the same point
/// reappears as the near endpoint (fraction 0) of the following edge and is
/// reported exactly once. Collinear overlaps contribute their two span
/// endpoints under the same half-open rule. Downstream predicates rely on
/// this exclusion; keep it when changing the traversal.
pub fn intersection_points<F: Float>(a: &Polygon<F>, b: &Polygon<F>) -> Vec<Point2<F>> {
    let mut out: Vec<Point2<F>> = Vec::new();
    let mut push = |p: Point2<F>| {
        if !out.contains(&p) {
            out.push(p);
        }
    };

    for ring_a in rings_of(a) {
        for ring_b in rings_of(b) {
            collect_ring_meets(ring_a, ring_b, &mut push);
        }
    }
    out
}

fn rings_of<F: Float>(p: &Polygon<F>) -> impl Iterator<Item = &Ring<F>> {
    std::iter::once(p.exterior()).chain(p.holes())
}

fn collect_ring_meets<F: Float>(a: &Ring<F>, b: &Ring<F>, push: &mut impl FnMut(Point2<F>)) {
    for (a1, a2) in a.edges() {
        for (b1, b2) in b.edges() {
            match segment_meet(a1, a2, b1, b2) {
                SegmentMeet::Skew { point, alpha, beta } => {
                    let on_a = alpha >= F::zero() && alpha < F::one();
                    let on_b = beta >= F::zero() && beta < F::one();
                    if on_a && on_b {
                        // Report endpoint coincidences with exact inputs
                        let p = if alpha == F::zero() {
                            a1
                        } else if beta == F::zero() {
                            b1
                        } else {
                            point
                        };
                        push(p);
                    }
                }
                SegmentMeet::Collinear { alpha, beta } => {
                    if beta >= F::zero() && beta < F::one() {
                        push(a1);
                    }
                    if alpha >= F::zero() && alpha < F::one() {
                        push(b1);
                    }
                }
                SegmentMeet::Parallel => {}
            }
        }
    }
}

/// True if some edge of `a` crosses some edge of `b` transversally, both
/// meeting fractions strictly interior.
fn proper_edge_crossing<F: Float>(a: &Ring<F>, b: &Ring<F>) -> bool {
    for (a1, a2) in a.edges() {
        for (b1, b2) in b.edges() {
            if let SegmentMeet::Skew { alpha, beta, .. } = segment_meet(a1, a2, b1, b2) {
                if alpha > F::zero()
                    && alpha < F::one()
                    && beta > F::zero()
                    && beta < F::one()
                {
                    return true;
                }
            }
        }
    }
    false
}

/// Sample points of a ring: vertices and edge midpoints.
fn samples<F: Float>(ring: &Ring<F>) -> impl Iterator<Item = Point2<F>> + '_ {
    let n = ring.len();
    let pts = ring.points();
    (0..n).flat_map(move |i| {
        let mid = pts[i].midpoint(pts[(i + 1) % n]);
        [pts[i], mid]
    })
}

fn any_sample<F: Float>(ring: &Ring<F>, poly: &Polygon<F>, loc: Location) -> bool {
    samples(ring).any(|p| poly.locate(p) == loc)
}

/// True if the boundaries or interiors of the two polygons share any point.
pub fn intersects<F: Float>(a: &Polygon<F>, b: &Polygon<F>) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    !intersection_points(a, b).is_empty()
        || any_sample(a.exterior(), b, Location::Inside)
        || any_sample(b.exterior(), a, Location::Inside)
}

/// True if the two polygons share no point at all.
pub fn disjoint<F: Float>(a: &Polygon<F>, b: &Polygon<F>) -> bool {
    !intersects(a, b)
}

/// True if `a` lies within `b`: every point of `a` is a point of `b`,
/// boundary contact allowed. A polygon is within itself.
pub fn within<F: Float>(a: &Polygon<F>, b: &Polygon<F>) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    if proper_edge_crossing(a.exterior(), b.exterior()) {
        return false;
    }
    // No part of a's boundary may leave b
    if samples(a.exterior()).any(|p| b.locate(p) == Location::Outside) {
        return false;
    }
    for hole in a.holes() {
        if samples(hole).any(|p| b.locate(p) == Location::Outside) {
            return false;
        }
    }
    // No hole of b may bite into a's region
    for hole in b.holes() {
        if any_sample(hole, a, Location::Inside) {
            return false;
        }
    }
    true
}

/// True if `a` covers `b`: alias of [`within`] with arguments swapped.
pub fn covers<F: Float>(a: &Polygon<F>, b: &Polygon<F>) -> bool {
    within(b, a)
}

/// True if `a` contains `b`: `b` within `a` with some of `b`'s boundary off
/// `a`'s boundary (the two are not the same outline).
pub fn contains<F: Float>(a: &Polygon<F>, b: &Polygon<F>) -> bool {
    within(b, a) && any_sample(b.exterior(), a, Location::Inside)
}

/// True if the polygons touch: boundaries meet, interiors stay disjoint.
pub fn touches<F: Float>(a: &Polygon<F>, b: &Polygon<F>) -> bool {
    if intersection_points(a, b).is_empty() {
        return false;
    }
    !proper_edge_crossing(a.exterior(), b.exterior())
        && !any_sample(a.exterior(), b, Location::Inside)
        && !any_sample(b.exterior(), a, Location::Inside)
}

/// True if the polygons overlap: interiors intersect but neither side
/// swallows the other.
pub fn overlaps<F: Float>(a: &Polygon<F>, b: &Polygon<F>) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    let interiors_meet = proper_edge_crossing(a.exterior(), b.exterior())
        || any_sample(a.exterior(), b, Location::Inside)
        || any_sample(b.exterior(), a, Location::Inside);
    interiors_meet && !within(a, b) && !within(b, a)
}

/// True if the polyline `line` crosses the polygon: it has points strictly
/// inside and strictly outside `poly`.
pub fn crosses<F: Float>(line: &[Point2<F>], poly: &Polygon<F>) -> bool {
    if line.len() < 2 || poly.is_empty() {
        return false;
    }
    let mut candidates: Vec<Point2<F>> = Vec::new();
    for w in line.windows(2) {
        candidates.push(w[0]);
        candidates.push(w[0].midpoint(w[1]));
        // Splitting at boundary meets exposes the sides of a segment that
        // pierces the polygon between two outside endpoints.
        for (b1, b2) in poly.exterior().edges() {
            if let SegmentMeet::Skew { point, alpha, beta } = segment_meet(w[0], w[1], b1, b2) {
                if alpha > F::zero()
                    && alpha < F::one()
                    && beta >= F::zero()
                    && beta < F::one()
                {
                    candidates.push(w[0].midpoint(point));
                    candidates.push(point.midpoint(w[1]));
                }
            }
        }
    }
    candidates.push(line[line.len() - 1]);

    let mut saw_in = false;
    let mut saw_out = false;
    for p in candidates {
        match poly.locate(p) {
            Location::Inside => saw_in = true,
            Location::Outside => saw_out = true,
            Location::OnBoundary => {}
        }
        if saw_in && saw_out {
            return true;
        }
    }
    false
}

/// True if two rings trace the same outline, in either direction and from
/// any starting vertex.
pub fn ring_equals<F: Float>(a: &Ring<F>, b: &Ring<F>) -> bool {
    let pa = a.points();
    let pb = b.points();
    let n = pa.len();
    if n != pb.len() {
        return false;
    }
    if n == 0 {
        return true;
    }

    let matches = |forward: bool| {
        (0..n).any(|offset| {
            (0..n).all(|i| {
                let j = if forward {
                    (offset + i) % n
                } else {
                    (offset + n - i) % n
                };
                pa[i] == pb[j]
            })
        })
    };
    matches(true) || matches(false)
}

/// True if the polygons have identical outlines: equal exteriors and a
/// one-to-one matching of holes.
pub fn equals<F: Float>(a: &Polygon<F>, b: &Polygon<F>) -> bool {
    if !ring_equals(a.exterior(), b.exterior()) {
        return false;
    }
    if a.holes().len() != b.holes().len() {
        return false;
    }
    let mut used = vec![false; b.holes().len()];
    for ha in a.holes() {
        let found = b.holes().iter().enumerate().find_map(|(i, hb)| {
            (!used[i] && ring_equals(ha, hb)).then_some(i)
        });
        match found {
            Some(i) => used[i] = true,
            None => return false,
        }
    }
    true
}
