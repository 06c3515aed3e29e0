//! Error types for polyweave operations.

use thiserror::Error;

/// Errors that can occur while constructing or validating geometry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PolyError {
    /// A ring has fewer than three distinct vertices.
    #[error("degenerate ring: {vertices} distinct vertices, need at least 3")]
    DegenerateRing {
        /// Number of distinct vertices found.
        vertices: usize,
    },

    /// A ring's boundary crosses itself.
    #[error("ring is self-intersecting near ({x}, {y})")]
    SelfIntersecting {
        /// X coordinate of a crossing point.
        x: f64,
        /// Y coordinate of a crossing point.
        y: f64,
    },

    /// A hole is not contained in the polygon's exterior.
    #[error("hole {index} is not inside the exterior ring")]
    HoleOutsideExterior {
        /// Position of the offending hole.
        index: usize,
    },

    /// Barycentric coordinates were requested for a degenerate triangle.
    #[error("triangle has zero area")]
    NotATriangle,
}
