//! Error types.

use thiserror::Error;

use crate::collision::dispatch::ShapeKind;

/// Errors reported by checked constructors and the query dispatcher.
///
/// The per-pair query functions never fail; invalid shapes produce
/// geometrically wrong answers instead. Use the `try_*` constructors when
/// input comes from an untrusted source.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    /// A direction or normal had zero length and cannot be normalized.
    #[error("direction vector has zero length")]
    DegenerateDirection,
    /// A sphere was given a negative radius.
    #[error("sphere radius must be non-negative, got {0}")]
    NegativeRadius(f32),
    /// An OBB orientation whose rows are not unit length and mutually
    /// perpendicular.
    #[error("orientation matrix is not orthonormal")]
    NonOrthonormalBasis,
    /// The dispatcher has no test for this pair of shapes.
    #[error("no {a:?}/{b:?} query is available")]
    UnsupportedPair { a: ShapeKind, b: ShapeKind },
}

/// Result alias for fallible geometry operations.
pub type Result<T> = std::result::Result<T, GeometryError>;
