//! Shape-erased queries.
//!
//! [`Shape`] wraps every primitive so callers holding heterogeneous shapes can
//! run pair queries without matching on types themselves. [`NarrowPhase`]
//! routes each query to the canonical per-pair function, in either argument
//! order.

use super::closest::ClosestPoint;
use super::containment::ContainsPoint;
use super::linetest::Linetest;
use super::overlap::{
    aabb_aabb, aabb_obb, aabb_plane, obb_obb, obb_plane, plane_plane, sphere_aabb, sphere_obb,
    sphere_plane, sphere_sphere,
};
use super::raycast::{RayHit, Raycast};
use crate::error::{GeometryError, Result};
use crate::geometry::{Aabb, Line, Obb, Plane, Point, Ray, Sphere, Triangle};
use crate::precision::approx_zero;

/// Any primitive the narrow phase knows about.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Point(Point),
    Line(Line),
    Ray(Ray),
    Sphere(Sphere),
    Aabb(Aabb),
    Obb(Obb),
    Plane(Plane),
    Triangle(Triangle),
}

/// Discriminant of a [`Shape`], used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Point,
    Line,
    Ray,
    Sphere,
    Aabb,
    Obb,
    Plane,
    Triangle,
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Point(_) => ShapeKind::Point,
            Shape::Line(_) => ShapeKind::Line,
            Shape::Ray(_) => ShapeKind::Ray,
            Shape::Sphere(_) => ShapeKind::Sphere,
            Shape::Aabb(_) => ShapeKind::Aabb,
            Shape::Obb(_) => ShapeKind::Obb,
            Shape::Plane(_) => ShapeKind::Plane,
            Shape::Triangle(_) => ShapeKind::Triangle,
        }
    }

    fn as_raycast(&self) -> Option<&dyn Raycast> {
        match self {
            Shape::Sphere(s) => Some(s),
            Shape::Aabb(s) => Some(s),
            Shape::Obb(s) => Some(s),
            Shape::Plane(s) => Some(s),
            _ => None,
        }
    }

    fn as_linetest(&self) -> Option<&dyn Linetest> {
        match self {
            Shape::Sphere(s) => Some(s),
            Shape::Aabb(s) => Some(s),
            Shape::Obb(s) => Some(s),
            Shape::Plane(s) => Some(s),
            _ => None,
        }
    }

    fn as_containment(&self) -> Option<&dyn ContainsPoint> {
        match self {
            Shape::Line(s) => Some(s),
            Shape::Ray(s) => Some(s),
            Shape::Sphere(s) => Some(s),
            Shape::Aabb(s) => Some(s),
            Shape::Obb(s) => Some(s),
            Shape::Plane(s) => Some(s),
            Shape::Point(_) | Shape::Triangle(_) => None,
        }
    }

    fn as_closest(&self) -> Option<&dyn ClosestPoint> {
        match self {
            Shape::Line(s) => Some(s),
            Shape::Ray(s) => Some(s),
            Shape::Sphere(s) => Some(s),
            Shape::Aabb(s) => Some(s),
            Shape::Obb(s) => Some(s),
            Shape::Plane(s) => Some(s),
            Shape::Point(_) | Shape::Triangle(_) => None,
        }
    }
}

macro_rules! impl_from_shape {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Shape {
                fn from(shape: $ty) -> Self {
                    Shape::$variant(shape)
                }
            }
        )*
    };
}

impl_from_shape! {
    Point => Point,
    Line => Line,
    Ray => Ray,
    Sphere => Sphere,
    Aabb => Aabb,
    Obb => Obb,
    Plane => Plane,
    Triangle => Triangle,
}

/// Tunables for [`NarrowPhase`] queries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueryConfig {
    /// Raycast hits farther along the ray than this are reported as misses.
    /// Also bounds ray/shape pairs in [`NarrowPhase::intersects`].
    /// Default: `f32::INFINITY`.
    pub max_distance: f32,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            max_distance: f32::INFINITY,
        }
    }
}

/// Entry point for queries over [`Shape`]s.
#[derive(Debug, Clone, Default)]
pub struct NarrowPhase {
    config: QueryConfig,
}

impl NarrowPhase {
    /// Create a dispatcher with the given configuration.
    pub fn new(config: QueryConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    /// Whether `a` and `b` intersect.
    ///
    /// Solid pairs run the overlap tests. A point is tested for containment,
    /// a line segment with the line tests, and a ray with the raycast engine
    /// bounded by [`QueryConfig::max_distance`]. Argument order does not
    /// matter.
    pub fn intersects(&self, a: &Shape, b: &Shape) -> Result<bool> {
        use Shape as S;

        let hit = match (a, b) {
            (S::Sphere(x), S::Sphere(y)) => Some(sphere_sphere(x, y)),
            (S::Sphere(s), S::Aabb(x)) | (S::Aabb(x), S::Sphere(s)) => Some(sphere_aabb(s, x)),
            (S::Sphere(s), S::Obb(x)) | (S::Obb(x), S::Sphere(s)) => Some(sphere_obb(s, x)),
            (S::Sphere(s), S::Plane(p)) | (S::Plane(p), S::Sphere(s)) => Some(sphere_plane(s, p)),
            (S::Aabb(x), S::Aabb(y)) => Some(aabb_aabb(x, y)),
            (S::Aabb(x), S::Obb(y)) | (S::Obb(y), S::Aabb(x)) => Some(aabb_obb(x, y)),
            (S::Aabb(x), S::Plane(p)) | (S::Plane(p), S::Aabb(x)) => Some(aabb_plane(x, p)),
            (S::Obb(x), S::Obb(y)) => Some(obb_obb(x, y)),
            (S::Obb(x), S::Plane(p)) | (S::Plane(p), S::Obb(x)) => Some(obb_plane(x, p)),
            (S::Plane(x), S::Plane(y)) => Some(plane_plane(x, y)),
            (S::Point(p), other) | (other, S::Point(p)) => Self::contains(other, *p),
            (S::Line(line), other) | (other, S::Line(line)) => {
                other.as_linetest().map(|shape| shape.linetest(line))
            }
            (S::Ray(ray), other) | (other, S::Ray(ray)) => {
                self.cast(other, ray).map(|hit| hit.is_some())
            }
            _ => None,
        };

        hit.ok_or_else(|| unsupported(a.kind(), b.kind()))
    }

    /// First hit of `ray` on `shape`, if any.
    pub fn raycast(&self, shape: &Shape, ray: &Ray) -> Result<Option<RayHit>> {
        self.cast(shape, ray)
            .ok_or_else(|| unsupported(shape.kind(), ShapeKind::Ray))
    }

    /// Point on `shape` closest to `point`.
    pub fn closest_point(&self, shape: &Shape, point: Point) -> Result<Point> {
        let closest = match shape {
            Shape::Point(p) => Some(*p),
            other => other.as_closest().map(|s| s.closest_point(point)),
        };
        closest.ok_or_else(|| unsupported(shape.kind(), ShapeKind::Point))
    }

    /// Whether `point` lies inside (solids) or on (thin shapes) `shape`.
    pub fn contains_point(&self, shape: &Shape, point: Point) -> Result<bool> {
        Self::contains(shape, point).ok_or_else(|| unsupported(shape.kind(), ShapeKind::Point))
    }

    fn contains(shape: &Shape, point: Point) -> Option<bool> {
        match shape {
            Shape::Point(p) => Some(approx_zero((*p - point).length_squared())),
            other => other.as_containment().map(|s| s.contains_point(point)),
        }
    }

    fn cast(&self, shape: &Shape, ray: &Ray) -> Option<Option<RayHit>> {
        let target = shape.as_raycast()?;
        Some(
            target
                .cast(ray)
                .filter(|hit| hit.t <= self.config.max_distance),
        )
    }
}

fn unsupported(a: ShapeKind, b: ShapeKind) -> GeometryError {
    tracing::trace!(?a, ?b, "no query for shape pair");
    GeometryError::UnsupportedPair { a, b }
}
