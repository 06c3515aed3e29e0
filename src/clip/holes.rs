//! Hole re-integration.
//!
//! The tracer answers for exterior rings only; holes of either input are
//! folded back in afterwards with exterior-level clips. Working at the
//! exterior level keeps the fold terminating: no call in this module ever
//! re-enters a public driver.

use super::{clip_exteriors, ring_within, ClipOp};
use crate::polygon::{Polygon, Ring};
use num_traits::Float;

/// Subtracts the region bounded by `hole` from `poly`, redistributing the
/// polygon's existing holes onto the resulting pieces.
///
/// The freshly subtracted region already covers any overlap with an old
/// hole, so only the remainder of each old hole is re-attached, clipped to
/// the piece that receives it. This keeps hole rings interior-disjoint and
/// the exterior-minus-holes area of each piece meaningful.
pub(super) fn subtract_ring<F: Float>(poly: &Polygon<F>, hole: &Ring<F>) -> Vec<Polygon<F>> {
    let mut pieces = clip_exteriors(poly.exterior(), hole, ClipOp::Difference);
    if poly.has_holes() {
        for piece in &mut pieces {
            for old in poly.holes() {
                for rest in clip_exteriors(old, hole, ClipOp::Difference) {
                    for clipped in
                        clip_exteriors(rest.exterior(), piece.exterior(), ClipOp::Intersection)
                    {
                        piece.add_hole(clipped.exterior().clone());
                    }
                }
            }
        }
    }
    pieces
}

/// Applies `subtract_ring` across a result set, dropping emptied pieces.
pub(super) fn subtract_ring_from_all<F: Float>(
    polys: Vec<Polygon<F>>,
    hole: &Ring<F>,
) -> Vec<Polygon<F>> {
    let mut out = Vec::with_capacity(polys.len());
    for poly in &polys {
        out.extend(subtract_ring(poly, hole).into_iter().filter(|p| !p.is_empty()));
    }
    out
}

/// The part of the region bounded by `ring` that lies inside polygon `b`
/// (exterior and holes of `b` both honored).
pub(super) fn ring_inside<F: Float>(ring: &Ring<F>, b: &Polygon<F>) -> Vec<Polygon<F>> {
    let mut pieces = clip_exteriors(ring, b.exterior(), ClipOp::Intersection);
    for hole in b.holes() {
        pieces = subtract_ring_from_all(pieces, hole);
    }
    pieces
}

/// The part of the region bounded by `ring` that lies outside polygon `b`:
/// what falls outside `b`'s exterior, plus what falls under `b`'s holes.
/// The two groups are interior-disjoint since holes sit inside the exterior.
pub(super) fn ring_outside<F: Float>(ring: &Ring<F>, b: &Polygon<F>) -> Vec<Polygon<F>> {
    let mut pieces = clip_exteriors(ring, b.exterior(), ClipOp::Difference);
    for hole in b.holes() {
        pieces.extend(clip_exteriors(ring, hole, ClipOp::Intersection));
    }
    pieces
}

/// Attaches `ring` as a hole of the piece whose exterior strictly contains
/// it. Rings lying in no piece (zero-width leftovers from degenerate
/// contacts) are dropped.
pub(super) fn attach_hole<F: Float>(pieces: &mut [Polygon<F>], ring: Ring<F>) {
    if ring.is_degenerate() {
        return;
    }
    if let Some(piece) = pieces
        .iter_mut()
        .find(|p| ring_within(&ring, p.exterior()) == Some(true))
    {
        piece.add_hole(ring);
    }
}
