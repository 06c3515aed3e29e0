//! Coordinate transforms and barycentric coordinates.
//!
//! Reprojection to arbitrary coordinate systems is the caller's business;
//! this module supplies the hooks: apply any point mapping to a polygon,
//! swap axes, or run an affine matrix over every vertex.

use crate::error::PolyError;
use crate::polygon::{Polygon, Ring};
use crate::primitives::{Point2, Vec2};
use num_traits::Float;

/// Applies `f` to every vertex of a ring.
pub fn map_ring_points<F: Float>(ring: &Ring<F>, f: impl Fn(Point2<F>) -> Point2<F>) -> Ring<F> {
    Ring::new(ring.points().iter().map(|&p| f(p)).collect())
}

/// Applies `f` to every vertex of a polygon, exterior and holes alike.
pub fn map_points<F: Float>(poly: &Polygon<F>, f: impl Fn(Point2<F>) -> Point2<F>) -> Polygon<F> {
    let exterior = map_ring_points(poly.exterior(), &f);
    let holes = poly
        .holes()
        .iter()
        .map(|h| map_ring_points(h, &f))
        .collect();
    Polygon::with_holes(exterior, holes)
}

/// Swaps the x and y coordinate of every vertex.
///
/// Useful for data delivered in (latitude, longitude) order.
pub fn flip<F: Float>(poly: &Polygon<F>) -> Polygon<F> {
    map_points(poly, |p| Point2::new(p.y, p.x))
}

/// A 2D affine transformation matrix.
///
/// Row-major 2x3 form:
/// ```text
/// | a  b  tx |
/// | c  d  ty |
/// ```
/// applied to points as `(a*x + b*y + tx, c*x + d*y + ty)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine2<F> {
    pub a: F,
    pub b: F,
    pub c: F,
    pub d: F,
    pub tx: F,
    pub ty: F,
}

impl<F: Float> Affine2<F> {
    /// Creates a transform from matrix components.
    #[inline]
    pub fn new(a: F, b: F, c: F, d: F, tx: F, ty: F) -> Self {
        Self { a, b, c, d, tx, ty }
    }

    /// The identity transform.
    #[inline]
    pub fn identity() -> Self {
        Self::new(
            F::one(),
            F::zero(),
            F::zero(),
            F::one(),
            F::zero(),
            F::zero(),
        )
    }

    /// A pure translation.
    #[inline]
    pub fn translation(offset: Vec2<F>) -> Self {
        Self::new(
            F::one(),
            F::zero(),
            F::zero(),
            F::one(),
            offset.x,
            offset.y,
        )
    }

    /// A uniform scale around the origin.
    #[inline]
    pub fn scale(factor: F) -> Self {
        Self::new(
            factor,
            F::zero(),
            F::zero(),
            factor,
            F::zero(),
            F::zero(),
        )
    }

    /// A rotation around the origin; positive angles turn counter-clockwise.
    #[inline]
    pub fn rotation(angle: F) -> Self {
        let (sin_a, cos_a) = angle.sin_cos();
        Self::new(cos_a, -sin_a, sin_a, cos_a, F::zero(), F::zero())
    }

    /// Transforms a single point.
    #[inline]
    pub fn apply_point(&self, p: Point2<F>) -> Point2<F> {
        Point2::new(
            self.a * p.x + self.b * p.y + self.tx,
            self.c * p.x + self.d * p.y + self.ty,
        )
    }

    /// Transforms every vertex of a polygon.
    pub fn apply_polygon(&self, poly: &Polygon<F>) -> Polygon<F> {
        map_points(poly, |p| self.apply_point(p))
    }
}

/// Barycentric coordinates of `p` with respect to the triangle (t0, t1, t2).
///
/// The three weights sum to one; all are in [0, 1] exactly when `p` lies in
/// the triangle. Fails with [`PolyError::NotATriangle`] for collinear
/// triangles.
pub fn barycentric<F: Float>(
    triangle: [Point2<F>; 3],
    p: Point2<F>,
) -> Result<[F; 3], PolyError> {
    let [t0, t1, t2] = triangle;
    let denom = (t1 - t0).cross(t2 - t0);
    if denom == F::zero() {
        return Err(PolyError::NotATriangle);
    }

    let w0 = (t1 - p).cross(t2 - p) / denom;
    let w1 = (t2 - p).cross(t0 - p) / denom;
    let w2 = F::one() - w0 - w1;
    Ok([w0, w1, w2])
}

/// Interpolates per-vertex values at `p` by barycentric weighting.
pub fn barycentric_interpolate<F: Float>(
    triangle: [Point2<F>; 3],
    values: [F; 3],
    p: Point2<F>,
) -> Result<F, PolyError> {
    let w = barycentric(triangle, p)?;
    Ok(w[0] * values[0] + w[1] * values[1] + w[2] * values[2])
}
