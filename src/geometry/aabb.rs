//! Axis-aligned boxes.

use std::fmt;

use glam::Vec3;

use super::{Point, Tuple};

/// Axis-aligned bounding box stored as center and half-extents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Center of the box.
    pub position: Point,
    /// Half-extent along each world axis.
    pub size: Vec3,
}

impl Aabb {
    /// Create a new AABB from a center and half-extents.
    pub fn new(position: Point, size: Vec3) -> Self {
        Self { position, size }
    }

    /// Create an AABB from its minimum and maximum corners.
    pub fn from_min_max(min: Point, max: Point) -> Self {
        Self {
            position: (min + max) * 0.5,
            size: (max - min) * 0.5,
        }
    }

    /// Minimum corner.
    ///
    /// Taken component-wise over `position ± size`, so a negative half-extent
    /// still yields a well-formed box.
    #[inline]
    pub fn min(&self) -> Point {
        (self.position + self.size).min(self.position - self.size)
    }

    /// Maximum corner. See [`Aabb::min`].
    #[inline]
    pub fn max(&self) -> Point {
        (self.position + self.size).max(self.position - self.size)
    }

    /// All 8 corners of the box.
    pub fn corners(&self) -> [Point; 8] {
        let min = self.min();
        let max = self.max();
        [
            Vec3::new(min.x, min.y, min.z),
            Vec3::new(max.x, min.y, min.z),
            Vec3::new(min.x, max.y, min.z),
            Vec3::new(min.x, min.y, max.z),
            Vec3::new(max.x, max.y, min.z),
            Vec3::new(max.x, min.y, max.z),
            Vec3::new(min.x, max.y, max.z),
            Vec3::new(max.x, max.y, max.z),
        ]
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            size: Vec3::ONE,
        }
    }
}

impl fmt::Display for Aabb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "min: {}, max: {}", Tuple(self.min()), Tuple(self.max()))
    }
}
