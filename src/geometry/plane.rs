//! Infinite planes.

use std::fmt;

use glam::Vec3;

use super::{Point, Tuple};
use crate::error::{GeometryError, Result};

/// An infinite plane: all points `p` with `p.dot(normal) == distance`.
///
/// `normal` must be unit length for distances to be meaningful.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub normal: Vec3,
    /// Signed offset from the origin along `normal`.
    pub distance: f32,
}

impl Plane {
    /// Create a new plane from a unit normal and distance.
    pub fn new(normal: Vec3, distance: f32) -> Self {
        Self { normal, distance }
    }

    /// Create a plane from any non-zero normal, normalizing the equation.
    pub fn try_new(normal: Vec3, distance: f32) -> Result<Self> {
        let Some(unit) = normal.try_normalize() else {
            tracing::debug!(?normal, "rejecting plane with zero-length normal");
            return Err(GeometryError::DegenerateDirection);
        };
        Ok(Self {
            normal: unit,
            distance: distance / normal.length(),
        })
    }

    /// Plane through `point` with the given unit normal.
    pub fn from_point_normal(point: Point, normal: Vec3) -> Self {
        Self {
            normal,
            distance: normal.dot(point),
        }
    }

    /// Evaluate the plane equation, `point.dot(normal) - distance`.
    ///
    /// Positive in front of the plane (the side `normal` points to), negative
    /// behind it. For a unit normal this is the signed distance.
    #[inline]
    pub fn plane_equation(&self, point: Point) -> f32 {
        point.dot(self.normal) - self.distance
    }
}

impl Default for Plane {
    fn default() -> Self {
        Self {
            normal: Vec3::X,
            distance: 0.0,
        }
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "normal: {}, distance: {}",
            Tuple(self.normal),
            self.distance
        )
    }
}
