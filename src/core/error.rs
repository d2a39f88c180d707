use thiserror::Error;

/// A polygon that cannot take part in a collision test.
///
/// The data itself is malformed, so retrying with the same geometry always fails again; the
/// fix belongs in whatever produced the outline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidPolygon {
    #[error("polygon has {count} vertices, need at least 3")]
    TooFewVertices { count: usize },
    #[error("vertex {index} has a non-finite coordinate")]
    NonFinite { index: usize },
    #[error("vertex {index} coincides with the vertex after it")]
    DuplicateVertex { index: usize },
    #[error("polygon has zero area (all vertices collinear)")]
    ZeroArea,
    #[error("polygon is not convex")]
    NotConvex,
    #[error("polygon outline is not simple and cannot be decomposed")]
    NotSimple,
}
