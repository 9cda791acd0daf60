//! Spheres.

use std::fmt;

use glam::Vec3;

use super::{Point, Tuple};
use crate::error::{GeometryError, Result};

/// A solid sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub position: Point,
    pub radius: f32,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(position: Point, radius: f32) -> Self {
        Self { position, radius }
    }

    /// Create a sphere, rejecting a negative radius.
    pub fn try_new(position: Point, radius: f32) -> Result<Self> {
        if radius < 0.0 {
            tracing::debug!(radius, "rejecting sphere with negative radius");
            return Err(GeometryError::NegativeRadius(radius));
        }
        Ok(Self::new(position, radius))
    }
}

impl Default for Sphere {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            radius: 1.0,
        }
    }
}

impl fmt::Display for Sphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "position: {}, radius: {}",
            Tuple(self.position),
            self.radius
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_new_rejects_negative_radius() {
        assert_eq!(
            Sphere::try_new(Vec3::ZERO, -0.5),
            Err(GeometryError::NegativeRadius(-0.5))
        );

        let point = Sphere::try_new(Vec3::ONE, 0.0).unwrap();
        assert_eq!(point.radius, 0.0);
        let sphere = Sphere::try_new(Vec3::ONE, 2.0).unwrap();
        assert_eq!(sphere, Sphere::new(Vec3::ONE, 2.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Sphere::default().to_string(),
            "position: (0, 0, 0), radius: 1"
        );
        let sphere = Sphere::new(Vec3::new(1.5, -2.0, 3.0), 0.25);
        assert_eq!(sphere.to_string(), "position: (1.5, -2, 3), radius: 0.25");
    }
}
