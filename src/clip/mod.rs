//! Boolean operations on polygons.
//!
//! The engine follows the Greiner-Hormann construction with degeneracy-aware
//! classification of intersection vertices: the two rings are woven together
//! at every meeting point, each contact is classified as a topological
//! crossing or a bounce (collinear overlap chains collapse to one delayed
//! verdict), crossings receive alternating entry/exit flags, and an
//! operation-specific step rule walks the woven lists to emit result rings.
//! Holes of either input are folded back into the exterior-level answer.
//!
//! Inputs must be simple polygons; the rings may touch and share edges but
//! must not self-intersect. Results are lists of polygons whose ring
//! orientations follow the trace direction.
//!
//! # Example
//!
//! ```
//! use polyweave::{intersection, Point2, Polygon};
//!
//! let a = Polygon::from_points(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(2.0, 0.0),
//!     Point2::new(2.0, 2.0),
//!     Point2::new(0.0, 2.0),
//! ]);
//! let b = Polygon::from_points(vec![
//!     Point2::new(1.0, 1.0),
//!     Point2::new(3.0, 1.0),
//!     Point2::new(3.0, 3.0),
//!     Point2::new(1.0, 3.0),
//! ]);
//!
//! let result = intersection(&a, &b);
//! assert_eq!(result.len(), 1);
//! assert!((result[0].area() - 1.0).abs() < 1e-12);
//! ```

mod crossing;
mod holes;
mod label;
pub(crate) mod segment;
mod trace;
mod weave;

use crate::polygon::{Location, Polygon, Ring};
use crossing::classify_crossings;
use label::{flag_entry_exit, LabelOutcome};
use num_traits::Float;
use trace::{trace_rings, ClipOp};
use weave::build_lists;

/// Computes the intersection of two polygons.
///
/// Returns the (possibly empty) list of polygons covering the region common
/// to both inputs.
pub fn intersection<F: Float>(a: &Polygon<F>, b: &Polygon<F>) -> Vec<Polygon<F>> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let mut result = clip_exteriors(a.exterior(), b.exterior(), ClipOp::Intersection);
    for hole in a.holes().iter().chain(b.holes()) {
        result = holes::subtract_ring_from_all(result, hole);
    }
    result
}

/// Computes the union of two polygons.
///
/// Disjoint inputs yield two polygons; touching or overlapping inputs merge.
/// A hole of one input survives only where the other input does not fill it.
pub fn union<F: Float>(a: &Polygon<F>, b: &Polygon<F>) -> Vec<Polygon<F>> {
    if a.is_empty() {
        return if b.is_empty() {
            Vec::new()
        } else {
            vec![b.clone()]
        };
    }
    if b.is_empty() {
        return vec![a.clone()];
    }

    let mut pieces = clip_exteriors(a.exterior(), b.exterior(), ClipOp::Union);

    // The part of a hole the other polygon does not fill stays a hole;
    // rings nested inside a surviving hole resurface as islands.
    let mut hole_rings: Vec<Ring<F>> = Vec::new();
    let mut islands: Vec<Polygon<F>> = Vec::new();
    for (own, other) in [(a, b), (b, a)] {
        for hole in own.holes() {
            for piece in holes::ring_outside(hole, other) {
                hole_rings.push(piece.exterior().clone());
                islands.extend(piece.holes().iter().cloned().map(Polygon::new));
            }
        }
    }
    // Both inputs can contribute the same surviving hole (shared hole
    // regions); attach each outline once.
    let mut attached: Vec<Ring<F>> = Vec::new();
    for ring in hole_rings {
        if attached.iter().any(|r| crate::predicates::ring_equals(r, &ring)) {
            continue;
        }
        holes::attach_hole(&mut pieces, ring.clone());
        attached.push(ring);
    }
    pieces.extend(islands);
    pieces
}

/// Computes the difference `a` minus `b`.
///
/// Holes of `a` stay holes of the result; regions of `a` under a hole of `b`
/// are returned to the result as new pieces.
pub fn difference<F: Float>(a: &Polygon<F>, b: &Polygon<F>) -> Vec<Polygon<F>> {
    if a.is_empty() {
        return Vec::new();
    }
    if b.is_empty() {
        return vec![a.clone()];
    }

    let mut result = clip_exteriors(a.exterior(), b.exterior(), ClipOp::Difference);
    for hole in a.holes() {
        result = holes::subtract_ring_from_all(result, hole);
    }
    for hole in b.holes() {
        result.extend(holes::ring_inside(hole, a));
    }
    result
}

/// Runs the weave-classify-label-trace pipeline on two exterior rings.
///
/// Handles the degenerate short-circuits itself: empty rings, identical
/// rings, and inputs whose contacts are all bounces (containment or
/// disjointness decides the answer then).
fn clip_exteriors<F: Float>(a: &Ring<F>, b: &Ring<F>, op: ClipOp) -> Vec<Polygon<F>> {
    match (a.is_degenerate(), b.is_degenerate()) {
        (true, true) => return Vec::new(),
        (true, false) => {
            return match op {
                ClipOp::Union => vec![Polygon::new(b.clone())],
                _ => Vec::new(),
            }
        }
        (false, true) => {
            return match op {
                ClipOp::Intersection => Vec::new(),
                _ => vec![Polygon::new(a.clone())],
            }
        }
        (false, false) => {}
    }

    let (mut a_list, mut b_list, mut a_idx) = build_lists(a, b);

    if !a_idx.is_empty() {
        classify_crossings(&mut a_list, &mut b_list);
        let la = flag_entry_exit(&mut a_list, b);
        let lb = flag_entry_exit(&mut b_list, a);
        if la == LabelOutcome::AllOnBoundary || lb == LabelOutcome::AllOnBoundary {
            return identical_rings(a, op);
        }

        let rings = trace_rings(&a_list, &b_list, &mut a_idx, op);
        if !rings.is_empty() {
            return assemble(rings, op);
        }
    }

    no_crossing(a, b, op)
}

/// Hard-coded results for coinciding boundaries.
fn identical_rings<F: Float>(a: &Ring<F>, op: ClipOp) -> Vec<Polygon<F>> {
    match op {
        ClipOp::Intersection | ClipOp::Union => vec![Polygon::new(a.clone())],
        ClipOp::Difference => Vec::new(),
    }
}

/// Decides the result when tracing produced no rings: the boundaries are
/// disjoint or touch without ever exchanging sides.
fn no_crossing<F: Float>(a: &Ring<F>, b: &Ring<F>, op: ClipOp) -> Vec<Polygon<F>> {
    let Some(a_in_b) = ring_within(a, b) else {
        return identical_rings(a, op);
    };
    let b_in_a = ring_within(b, a).unwrap_or(false);

    match op {
        ClipOp::Intersection => {
            if a_in_b {
                vec![Polygon::new(a.clone())]
            } else if b_in_a {
                vec![Polygon::new(b.clone())]
            } else {
                Vec::new()
            }
        }
        ClipOp::Union => {
            if a_in_b {
                vec![Polygon::new(b.clone())]
            } else if b_in_a {
                vec![Polygon::new(a.clone())]
            } else {
                vec![Polygon::new(a.clone()), Polygon::new(b.clone())]
            }
        }
        ClipOp::Difference => {
            if a_in_b {
                Vec::new()
            } else if b_in_a {
                vec![Polygon::with_holes(a.clone(), vec![b.clone()])]
            } else {
                vec![Polygon::new(a.clone())]
            }
        }
    }
}

/// Whether ring `a` sits inside ring `b`, judged from the first vertex or
/// edge midpoint of `a` that is off `b`'s boundary. Midpoints matter when
/// every vertex of `a` lies on `b` but the edges between them do not.
/// `None` when the boundaries coincide entirely.
fn ring_within<F: Float>(a: &Ring<F>, b: &Ring<F>) -> Option<bool> {
    let pts = a.points();
    let n = pts.len();
    for i in 0..n {
        let mid = pts[i].midpoint(pts[(i + 1) % n]);
        for cand in [pts[i], mid] {
            match b.locate(cand) {
                Location::OnBoundary => continue,
                loc => return Some(loc == Location::Inside),
            }
        }
    }
    None
}

/// Packages traced rings as polygons.
///
/// Zero-area rings (degenerate contact leftovers) are dropped. A union that
/// traced several rings is re-sorted by containment: rings inside another
/// traced ring become holes of it, everything else is its own piece.
fn assemble<F: Float>(rings: Vec<Ring<F>>, op: ClipOp) -> Vec<Polygon<F>> {
    let rings: Vec<Ring<F>> = rings
        .into_iter()
        .filter(|r| !r.is_degenerate() && r.area() > F::zero())
        .collect();

    if op != ClipOp::Union || rings.len() < 2 {
        return rings.into_iter().map(Polygon::new).collect();
    }

    // Union: the enclosing ring comes first, enclosed rings are its holes.
    let n = rings.len();
    let mut container: Vec<Option<usize>> = vec![None; n];
    for i in 0..n {
        for j in 0..n {
            if i != j && ring_within(&rings[i], &rings[j]) == Some(true) {
                container[i] = Some(j);
                break;
            }
        }
    }

    let mut out: Vec<(usize, Polygon<F>)> = Vec::new();
    for (i, parent) in container.iter().enumerate() {
        if parent.is_none() {
            out.push((i, Polygon::new(rings[i].clone())));
        }
    }
    for (i, parent) in container.iter().enumerate() {
        if let Some(j) = parent {
            if let Some((_, poly)) = out.iter_mut().find(|(k, _)| k == j) {
                poly.add_hole(rings[i].clone());
            }
        }
    }
    out.into_iter().map(|(_, p)| p).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::Point2;
    use approx::assert_relative_eq;

    fn poly(coords: &[(f64, f64)]) -> Polygon<f64> {
        Polygon::from_points(coords.iter().map(|&(x, y)| Point2::new(x, y)).collect())
    }

    fn ring(coords: &[(f64, f64)]) -> Ring<f64> {
        Ring::new(coords.iter().map(|&(x, y)| Point2::new(x, y)).collect())
    }

    fn total_area(polys: &[Polygon<f64>]) -> f64 {
        polys.iter().map(|p| p.area()).sum()
    }

    // Congruent diamonds overlapping on a band (exact literals)
    fn diamond_p() -> Polygon<f64> {
        poly(&[(0.0, 0.0), (5.0, 5.0), (10.0, 0.0), (5.0, -5.0)])
    }

    fn diamond_q() -> Polygon<f64> {
        poly(&[(3.0, 0.0), (8.0, 5.0), (13.0, 0.0), (8.0, -5.0)])
    }

    #[test]
    fn test_diamond_band_intersection() {
        let out = intersection(&diamond_p(), &diamond_q());
        assert_eq!(out.len(), 1);
        // Pentagon (6.5,3.5) (10,0) (6.5,-3.5) (3,0)
        assert_relative_eq!(out[0].area(), 24.5, epsilon = 1e-9);

        let pts = out[0].exterior().points();
        let has = |x: f64, y: f64| pts.iter().any(|p| p.x == x && p.y == y);
        assert!(has(6.5, 3.5));
        assert!(has(6.5, -3.5));
        assert!(has(10.0, 0.0));
        assert!(has(3.0, 0.0));
    }

    #[test]
    fn test_diamond_band_union_and_difference() {
        let p = diamond_p();
        let q = diamond_q();
        let p_area = p.area();
        let q_area = q.area();

        let uni = union(&p, &q);
        assert_eq!(uni.len(), 1);
        assert_relative_eq!(total_area(&uni), p_area + q_area - 24.5, epsilon = 1e-9);

        let diff = difference(&p, &q);
        assert_relative_eq!(total_area(&diff), p_area - 24.5, epsilon = 1e-9);
    }

    #[test]
    fn test_disjoint_polygons() {
        let p = diamond_p();
        let q = poly(&[(13.0, 0.0), (18.0, 5.0), (23.0, 0.0), (18.0, -5.0)]);

        assert!(intersection(&p, &q).is_empty());

        let uni = union(&p, &q);
        assert_eq!(uni.len(), 2);
        assert_relative_eq!(total_area(&uni), p.area() + q.area(), epsilon = 1e-9);

        let diff = difference(&p, &q);
        assert_eq!(diff.len(), 1);
        assert_eq!(diff[0], p);
    }

    #[test]
    fn test_containment() {
        let p = poly(&[(0.0, 0.0), (3.0, 0.0), (3.0, 3.0), (0.0, 3.0)]);
        let q = poly(&[(1.0, 1.0), (2.0, 1.0), (2.0, 2.0), (1.0, 2.0)]);

        let inter = intersection(&p, &q);
        assert_eq!(inter.len(), 1);
        assert_eq!(inter[0], q);

        let uni = union(&p, &q);
        assert_eq!(uni.len(), 1);
        assert_eq!(uni[0], p);

        let diff = difference(&p, &q);
        assert_eq!(diff.len(), 1);
        assert_eq!(diff[0].holes().len(), 1);
        assert_relative_eq!(diff[0].area(), 8.0, epsilon = 1e-12);
    }

    #[test]
    fn test_two_piece_intersection() {
        // Rectangle against a W-shaped ring: two separate overlap lobes
        let p = poly(&[(0.0, 0.0), (0.0, 4.0), (7.0, 4.0), (7.0, 0.0)]);
        let q = poly(&[
            (1.0, -3.0),
            (1.0, 1.0),
            (3.5, -1.5),
            (6.0, 1.0),
            (6.0, -3.0),
        ]);

        let out = intersection(&p, &q);
        assert_eq!(out.len(), 2);
        assert_relative_eq!(total_area(&out), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_every_vertex_an_intersection() {
        let p = poly(&[(0.0, 0.0), (4.0, 0.0), (4.0, 2.0), (3.0, 1.0), (1.0, 1.0), (0.0, 2.0)]);
        let q = poly(&[(4.0, 0.0), (3.0, 1.0), (1.0, 1.0), (0.0, 0.0), (0.0, 2.0), (4.0, 2.0)]);

        assert_relative_eq!(total_area(&intersection(&p, &q)), 2.0, epsilon = 1e-9);
        assert_relative_eq!(total_area(&union(&p, &q)), 8.0, epsilon = 1e-9);
        assert_relative_eq!(total_area(&difference(&p, &q)), 3.0, epsilon = 1e-9);
        assert_relative_eq!(total_area(&difference(&q, &p)), 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_single_point_touch() {
        let p = poly(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        let q = poly(&[(1.0, 1.0), (2.0, 1.0), (2.0, 2.0), (1.0, 2.0)]);

        assert!(intersection(&p, &q).is_empty());

        let uni = union(&p, &q);
        assert_eq!(uni.len(), 2);
        assert_relative_eq!(total_area(&uni), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_self_identity() {
        let p = diamond_p();

        let inter = intersection(&p, &p);
        assert_eq!(inter.len(), 1);
        assert_relative_eq!(inter[0].area(), p.area(), epsilon = 1e-9);

        let uni = union(&p, &p);
        assert_eq!(uni.len(), 1);
        assert_relative_eq!(uni[0].area(), p.area(), epsilon = 1e-9);

        assert!(difference(&p, &p).is_empty());
    }

    #[test]
    fn test_commutativity_by_area() {
        let p = diamond_p();
        let q = diamond_q();
        assert_relative_eq!(
            total_area(&intersection(&p, &q)),
            total_area(&intersection(&q, &p)),
            epsilon = 1e-9
        );
        assert_relative_eq!(
            total_area(&union(&p, &q)),
            total_area(&union(&q, &p)),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_inclusion_exclusion() {
        let p = diamond_p();
        let q = diamond_q();
        let lhs = total_area(&union(&p, &q)) + total_area(&intersection(&p, &q));
        assert_relative_eq!(lhs, p.area() + q.area(), epsilon = 1e-9);
    }

    #[test]
    fn test_difference_closure() {
        let p = poly(&[(0.0, 0.0), (6.0, 0.0), (6.0, 4.0), (0.0, 4.0)]);
        let q = poly(&[(3.0, -1.0), (8.0, -1.0), (8.0, 5.0), (3.0, 5.0)]);
        assert_relative_eq!(
            total_area(&difference(&p, &q)),
            p.area() - total_area(&intersection(&p, &q)),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_empty_inputs() {
        let empty: Polygon<f64> = Polygon::from_points(vec![]);
        let p = diamond_p();

        assert!(intersection(&empty, &p).is_empty());
        assert!(intersection(&p, &empty).is_empty());
        assert_eq!(union(&empty, &p), vec![p.clone()]);
        assert_eq!(union(&p, &empty), vec![p.clone()]);
        assert!(difference(&empty, &p).is_empty());
        assert_eq!(difference(&p, &empty), vec![p.clone()]);
        assert!(union(&empty, &empty).is_empty());
    }

    #[test]
    fn test_intersection_with_hole_in_a() {
        // a is a frame; b overlaps its left half
        let a = Polygon::with_holes(
            ring(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]),
            vec![ring(&[(1.0, 1.0), (3.0, 1.0), (3.0, 3.0), (1.0, 3.0)])],
        );
        let b = poly(&[(-1.0, -1.0), (2.0, -1.0), (2.0, 5.0), (-1.0, 5.0)]);

        let out = intersection(&a, &b);
        // Left strip of the frame: 2x4 minus the 1x2 hole part
        assert_relative_eq!(total_area(&out), 6.0, epsilon = 1e-9);
    }

    #[test]
    fn test_union_preserves_unfilled_hole() {
        let a = Polygon::with_holes(
            ring(&[(0.0, 0.0), (6.0, 0.0), (6.0, 6.0), (0.0, 6.0)]),
            vec![ring(&[(1.0, 1.0), (5.0, 1.0), (5.0, 5.0), (1.0, 5.0)])],
        );
        // b fills the left part of the hole
        let b = poly(&[(1.0, 1.0), (3.0, 1.0), (3.0, 5.0), (1.0, 5.0)]);

        let out = union(&a, &b);
        // The filled part comes back: either as a shrunken hole or as a
        // hole-plus-island pair, depending on how the boundaries touch.
        // 36 - 16 hole + 8 filled back
        assert_relative_eq!(total_area(&out), 28.0, epsilon = 1e-9);
        assert!(out.iter().any(|p| p.has_holes()));
    }

    #[test]
    fn test_difference_returns_region_under_b_hole() {
        let a = poly(&[(0.0, 0.0), (6.0, 0.0), (6.0, 6.0), (0.0, 6.0)]);
        let b = Polygon::with_holes(
            ring(&[(-1.0, -1.0), (7.0, -1.0), (7.0, 7.0), (-1.0, 7.0)]),
            vec![ring(&[(2.0, 2.0), (4.0, 2.0), (4.0, 4.0), (2.0, 4.0)])],
        );

        // b covers a entirely except for b's hole window
        let out = difference(&a, &b);
        assert_eq!(out.len(), 1);
        assert_relative_eq!(total_area(&out), 4.0, epsilon = 1e-9);
    }

    #[test]
    fn test_hole_integration_noop_without_holes() {
        let p = diamond_p();
        let q = diamond_q();
        assert!(!p.has_holes() && !q.has_holes());

        // Drivers with hole-free inputs must match the raw exterior clip
        let raw = clip_exteriors(p.exterior(), q.exterior(), ClipOp::Intersection);
        let full = intersection(&p, &q);
        assert_eq!(raw.len(), full.len());
        assert_relative_eq!(total_area(&raw), total_area(&full), epsilon = 1e-12);
    }

    #[test]
    fn test_self_identity_with_holes() {
        let p = Polygon::with_holes(
            ring(&[(0.0, 0.0), (6.0, 0.0), (6.0, 6.0), (0.0, 6.0)]),
            vec![ring(&[(2.0, 2.0), (4.0, 2.0), (4.0, 4.0), (2.0, 4.0)])],
        );

        let uni = union(&p, &p);
        assert_eq!(uni.len(), 1);
        assert_eq!(uni[0].holes().len(), 1);
        assert_relative_eq!(total_area(&uni), 32.0, epsilon = 1e-9);

        let inter = intersection(&p, &p);
        assert_relative_eq!(total_area(&inter), 32.0, epsilon = 1e-9);

        assert!(difference(&p, &p).is_empty());
    }

    #[test]
    fn test_touching_decomposition() {
        // For touching polygons, union splits into the three classical parts
        let p = poly(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        let q = poly(&[(1.0, 0.0), (2.0, 0.0), (2.0, 1.0), (1.0, 1.0)]);

        let uni = total_area(&union(&p, &q));
        let d_pq = total_area(&difference(&p, &q));
        let d_qp = total_area(&difference(&q, &p));
        let inter = total_area(&intersection(&p, &q));
        assert_relative_eq!(uni, d_pq + d_qp + inter, epsilon = 1e-12);
        assert_relative_eq!(inter, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_union_of_disjoint_keeps_own_holes() {
        let a = Polygon::with_holes(
            ring(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]),
            vec![ring(&[(1.0, 1.0), (2.0, 1.0), (2.0, 2.0), (1.0, 2.0)])],
        );
        let b = poly(&[(10.0, 0.0), (14.0, 0.0), (14.0, 4.0), (10.0, 4.0)]);

        let out = union(&a, &b);
        assert_eq!(out.len(), 2);
        assert_relative_eq!(total_area(&out), 15.0 + 16.0, epsilon = 1e-9);
        let framed = out.iter().find(|p| p.has_holes()).unwrap();
        assert_eq!(framed.holes().len(), 1);
    }
}
