//! Triangles.

use std::fmt;

use super::{Point, Tuple};

/// A triangle given by its three vertices.
///
/// No query in this crate accepts a triangle yet; the dispatcher reports it
/// as an unsupported shape.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Triangle {
    pub a: Point,
    pub b: Point,
    pub c: Point,
}

impl Triangle {
    /// Create a new triangle.
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Self { a, b, c }
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "a: {}, b: {}, c: {}",
            Tuple(self.a),
            Tuple(self.b),
            Tuple(self.c)
        )
    }
}
