//! Line-meet primitive for the clipping engine.

use crate::primitives::Point2;
use num_traits::Float;

/// How two directed segments meet.
///
/// Fractions are measured along each segment's direction and are NOT clipped
/// to [0, 1]; the weaving builder decides which hits fall on the segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum SegmentMeet<F> {
    /// Extended lines meet at a single point. `alpha` locates the point along
    /// (a1, a2), `beta` along (b1, b2).
    Skew { point: Point2<F>, alpha: F, beta: F },
    /// Parallel and never meeting: distinct parallel lines, collinear
    /// segments with disjoint spans, or a zero-length edge.
    Parallel,
    /// Collinear with overlapping closed spans. `alpha` locates `b1` along
    /// (a1, a2); `beta` locates `a1` along (b1, b2).
    Collinear { alpha: F, beta: F },
}

/// Meets two directed segments (a1, a2) and (b1, b2).
///
/// The cross-product denominator is compared strictly against zero; there is
/// no epsilon. Near-parallel segments therefore resolve as `Skew` with large
/// fractions, which the caller's range checks discard.
pub(crate) fn segment_meet<F: Float>(
    a1: Point2<F>,
    a2: Point2<F>,
    b1: Point2<F>,
    b2: Point2<F>,
) -> SegmentMeet<F> {
    let da = a2 - a1;
    let db = b2 - b1;
    let denom = da.cross(db);
    let offset = b1 - a1;

    if denom == F::zero() {
        if da.cross(offset) != F::zero() {
            return SegmentMeet::Parallel;
        }

        let len_a = da.norm_squared();
        let len_b = db.norm_squared();
        if len_a == F::zero() || len_b == F::zero() {
            return SegmentMeet::Parallel;
        }

        let alpha = offset.dot(da) / len_a;
        let beta = (a1 - b1).dot(db) / len_b;

        // Span check along a's parameterization
        let b2_on_a = (b2 - a1).dot(da) / len_a;
        let (lo, hi) = if alpha <= b2_on_a {
            (alpha, b2_on_a)
        } else {
            (b2_on_a, alpha)
        };
        if hi < F::zero() || lo > F::one() {
            return SegmentMeet::Parallel;
        }

        SegmentMeet::Collinear { alpha, beta }
    } else {
        let alpha = offset.cross(db) / denom;
        let beta = offset.cross(da) / denom;
        SegmentMeet::Skew {
            point: a1.lerp(a2, alpha),
            alpha,
            beta,
        }
    }
}
