//! Ring and polygon simplification.
//!
//! Three classic vertex-reduction algorithms, each adapted to closed rings:
//! Ramer-Douglas-Peucker (distance to chord), Visvalingam-Whyatt (effective
//! triangle area), and radial distance filtering. None of them reduces a
//! ring below three vertices, so simplification never degenerates a polygon.

mod radial;
mod rdp;
mod visvalingam;

pub use radial::radial;
pub use rdp::rdp;
pub use visvalingam::visvalingam;

use crate::polygon::{Polygon, Ring};
use num_traits::Float;

/// Which simplification algorithm to run and its tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimplifyMethod<F> {
    /// Ramer-Douglas-Peucker: drop vertices within `epsilon` of the chord.
    DouglasPeucker {
        /// Distance tolerance.
        epsilon: F,
    },
    /// Visvalingam-Whyatt: drop vertices whose effective triangle area is
    /// below `min_area`.
    VisvalingamWhyatt {
        /// Effective-area threshold.
        min_area: F,
    },
    /// Radial distance: drop vertices within `min_distance` of the last
    /// kept vertex.
    RadialDistance {
        /// Minimum spacing between kept vertices.
        min_distance: F,
    },
}

/// Simplifies one ring with the chosen method.
pub fn simplify_ring<F: Float>(ring: &Ring<F>, method: SimplifyMethod<F>) -> Ring<F> {
    match method {
        SimplifyMethod::DouglasPeucker { epsilon } => rdp(ring, epsilon),
        SimplifyMethod::VisvalingamWhyatt { min_area } => visvalingam(ring, min_area),
        SimplifyMethod::RadialDistance { min_distance } => radial(ring, min_distance),
    }
}

/// Simplifies a polygon's exterior and every hole with the same method.
///
/// Holes that simplification would degenerate are kept in their original
/// shape, matching the per-ring guarantee.
pub fn simplify_polygon<F: Float>(poly: &Polygon<F>, method: SimplifyMethod<F>) -> Polygon<F> {
    let exterior = simplify_ring(poly.exterior(), method);
    let holes = poly
        .holes()
        .iter()
        .map(|h| simplify_ring(h, method))
        .collect();
    Polygon::with_holes(exterior, holes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::Point2;
    use approx::assert_relative_eq;

    fn noisy_square() -> Ring<f64> {
        // A square with near-collinear points along each side
        Ring::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.01),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 2.0),
            Point2::new(4.01, 2.0),
            Point2::new(4.0, 4.0),
            Point2::new(2.0, 3.99),
            Point2::new(0.0, 4.0),
            Point2::new(0.0, 2.0),
        ])
    }

    #[test]
    fn test_simplify_ring_methods_agree_on_noise() {
        let ring = noisy_square();
        for method in [
            SimplifyMethod::DouglasPeucker { epsilon: 0.1 },
            SimplifyMethod::VisvalingamWhyatt { min_area: 0.5 },
        ] {
            let out = simplify_ring(&ring, method);
            assert!(out.len() < ring.len(), "{method:?} removed nothing");
            assert!(out.len() >= 4);
            assert_relative_eq!(out.area(), 16.0, epsilon = 0.5);
        }
    }

    #[test]
    fn test_simplify_polygon_keeps_holes() {
        let poly = Polygon::with_holes(
            noisy_square(),
            vec![Ring::new(vec![
                Point2::new(1.0, 1.0),
                Point2::new(2.0, 1.0),
                Point2::new(2.0, 2.0),
                Point2::new(1.0, 2.0),
            ])],
        );
        let out = simplify_polygon(&poly, SimplifyMethod::DouglasPeucker { epsilon: 0.1 });
        assert_eq!(out.holes().len(), 1);
        // The tiny hole cannot lose vertices without degenerating
        assert_eq!(out.holes()[0].len(), 4);
    }
}
