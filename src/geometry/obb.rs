//! Oriented boxes.

use std::fmt;

use glam::{Mat3, Quat, Vec3};

use super::{Point, Tuple};
use crate::error::{GeometryError, Result};
use crate::precision::BASIS_TOLERANCE;

/// Oriented bounding box.
///
/// The rows of `orientation` are the box's local X, Y and Z axes expressed in
/// world space. They must be orthonormal; the projection-based tests give
/// wrong answers otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obb {
    /// Center of the box.
    pub position: Point,
    /// Half-extent along each local axis.
    pub size: Vec3,
    /// Row basis: row `i` is local axis `i` in world space.
    pub orientation: Mat3,
}

impl Obb {
    /// Create a new OBB. `orientation` is taken as-is.
    pub fn new(position: Point, size: Vec3, orientation: Mat3) -> Self {
        Self {
            position,
            size,
            orientation,
        }
    }

    /// Create an OBB, rejecting an orientation that is not orthonormal.
    pub fn try_new(position: Point, size: Vec3, orientation: Mat3) -> Result<Self> {
        let obb = Self::new(position, size, orientation);
        let [x, y, z] = obb.axes();

        let unit = [x, y, z]
            .iter()
            .all(|axis| (axis.length_squared() - 1.0).abs() <= BASIS_TOLERANCE);
        let perpendicular = x.dot(y).abs() <= BASIS_TOLERANCE
            && y.dot(z).abs() <= BASIS_TOLERANCE
            && z.dot(x).abs() <= BASIS_TOLERANCE;

        if !(unit && perpendicular) {
            tracing::debug!(?orientation, "rejecting non-orthonormal OBB orientation");
            return Err(GeometryError::NonOrthonormalBasis);
        }
        Ok(obb)
    }

    /// Create an OBB rotated by `rotation` around its center.
    pub fn from_rotation(position: Point, size: Vec3, rotation: Quat) -> Self {
        // glam stores the rotated basis in the columns; the box wants rows.
        Self::new(position, size, Mat3::from_quat(rotation).transpose())
    }

    /// The three local axes in world space.
    #[inline]
    pub fn axes(&self) -> [Vec3; 3] {
        [
            self.orientation.row(0),
            self.orientation.row(1),
            self.orientation.row(2),
        ]
    }

    /// All 8 corners of the box in world space.
    pub fn corners(&self) -> [Point; 8] {
        let [x, y, z] = self.axes();
        let ex = x * self.size.x;
        let ey = y * self.size.y;
        let ez = z * self.size.z;
        let c = self.position;
        [
            c + ex + ey + ez,
            c - ex + ey + ez,
            c + ex - ey + ez,
            c + ex + ey - ez,
            c - ex - ey - ez,
            c + ex - ey - ez,
            c - ex + ey - ez,
            c - ex - ey + ez,
        ]
    }
}

impl Default for Obb {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            size: Vec3::ONE,
            orientation: Mat3::IDENTITY,
        }
    }
}

impl fmt::Display for Obb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.axes();
        write!(
            f,
            "position: {}, size: {}, x basis: {}, y basis: {}, z basis: {}",
            Tuple(self.position),
            Tuple(self.size),
            Tuple(x),
            Tuple(y),
            Tuple(z)
        )
    }
}
