//! polyweave - Boolean operations on 2D polygons
//!
//! A polygon clipping engine built on the Greiner-Hormann construction with
//! degeneracy-aware classification of intersection vertices: shared
//! vertices, vertices on edges, and collinear overlap chains are handled by
//! telling true topological crossings apart from touch-and-return bounces.
//!
//! The engine computes [`intersection`], [`union`], and [`difference`] of
//! simple polygons with holes, and the crate surrounds it with the usual
//! polygon toolbox: point location, area and centroid, spatial predicates,
//! ring simplification, and coordinate transforms.
//!
//! ```
//! use polyweave::{union, Point2, Polygon};
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
//! let merged = union(&a, &b);
//! assert_eq!(merged.len(), 1);
//! assert!((merged[0].area() - 7.0).abs() < 1e-12);
//! ```

pub mod clip;
pub mod error;
pub mod polygon;
pub mod predicates;
pub mod primitives;
pub mod simplify;
pub mod transform;

pub use clip::{difference, intersection, union};
pub use error::PolyError;
pub use polygon::{validate_ring, Location, Polygon, Ring};
pub use predicates::intersection_points;
pub use primitives::{Point2, Segment2, Vec2};
