//! Line segments and rays.

use std::fmt;

use glam::Vec3;

use super::{Point, Tuple};
use crate::error::{GeometryError, Result};
use crate::precision::safe_normalize;

/// A finite line segment between two points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

impl Line {
    /// Create a new segment.
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Euclidean distance between the endpoints.
    #[inline]
    pub fn length(&self) -> f32 {
        (self.end - self.start).length()
    }

    /// Squared distance between the endpoints.
    #[inline]
    pub fn length_squared(&self) -> f32 {
        (self.end - self.start).length_squared()
    }

    /// Unnormalized direction, `end - start`.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.end - self.start
    }

    /// Evaluate `start + t * (end - start)`.
    #[inline]
    pub fn point_at(&self, t: f32) -> Point {
        self.start + self.direction() * t
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "start: {}, end: {}", Tuple(self.start), Tuple(self.end))
    }
}

/// A half-infinite ray.
///
/// `direction` is always unit length. Every constructor normalizes it, and
/// the raycast math depends on that.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Point,
    pub direction: Vec3,
}

impl Ray {
    /// Create a ray, normalizing `direction`.
    ///
    /// A zero `direction` becomes [`crate::precision::FALLBACK_DIRECTION`].
    pub fn new(origin: Point, direction: Vec3) -> Self {
        Self {
            origin,
            direction: safe_normalize(direction),
        }
    }

    /// Create a ray, rejecting a zero-length `direction`.
    pub fn try_new(origin: Point, direction: Vec3) -> Result<Self> {
        let Some(direction) = direction.try_normalize() else {
            tracing::debug!(?origin, "rejecting ray with zero-length direction");
            return Err(GeometryError::DegenerateDirection);
        };
        Ok(Self { origin, direction })
    }

    /// Ray starting at `from` and pointing toward `to`.
    pub fn from_points(from: Point, to: Point) -> Self {
        Self::new(from, to - from)
    }

    /// Evaluate `origin + t * direction`.
    #[inline]
    pub fn point_at(&self, t: f32) -> Point {
        self.origin + self.direction * t
    }
}

impl Default for Ray {
    fn default() -> Self {
        Self {
            origin: Vec3::ZERO,
            direction: Vec3::Z,
        }
    }
}

impl fmt::Display for Ray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "origin: {}, direction: {}",
            Tuple(self.origin),
            Tuple(self.direction)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_length() {
        let line = Line::new(Vec3::ZERO, Vec3::new(3.0, 4.0, 0.0));
        assert!((line.length() - 5.0).abs() < 1e-6);
        assert!((line.length_squared() - 25.0).abs() < 1e-6);
        assert!((line.point_at(0.5) - Vec3::new(1.5, 2.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_ray_normalizes_direction() {
        let ray = Ray::new(Vec3::ONE, Vec3::new(0.0, 0.0, 10.0));
        assert!((ray.direction - Vec3::Z).length() < 1e-6);

        let ray = Ray::from_points(Vec3::ZERO, Vec3::new(2.0, 2.0, 0.0));
        assert!((ray.direction.length() - 1.0).abs() < 1e-6);
        assert!((ray.point_at(2.0_f32.sqrt()) - Vec3::new(1.0, 1.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_ray_degenerate_direction() {
        let ray = Ray::from_points(Vec3::ONE, Vec3::ONE);
        assert!(ray.direction.is_finite());
        assert!((ray.direction.length() - 1.0).abs() < 1e-6);

        assert_eq!(
            Ray::try_new(Vec3::ZERO, Vec3::ZERO),
            Err(GeometryError::DegenerateDirection)
        );
        assert!(Ray::try_new(Vec3::ZERO, Vec3::Y).is_ok());
    }

    #[test]
    fn test_ray_short_direction() {
        let ray = Ray::from_points(Vec3::ZERO, Vec3::new(0.0, 1e-4, 0.0));
        assert!((ray.direction - Vec3::Y).length() < 1e-6);

        let ray = Ray::try_new(Vec3::ONE, Vec3::new(0.0, 0.0, -3e-5)).unwrap();
        assert!((ray.direction + Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn test_display() {
        let line = Line::new(Vec3::ZERO, Vec3::X);
        assert_eq!(line.to_string(), "start: (0, 0, 0), end: (1, 0, 0)");
        let ray = Ray::default();
        assert_eq!(ray.to_string(), "origin: (0, 0, 0), direction: (0, 0, 1)");
    }
}
