//! Point containment predicates.
//!
//! Solids (sphere, AABB, OBB) test whether the point lies inside. Thin shapes
//! (plane, segment, ray) test whether the point lies on them, within the
//! tolerance of [`crate::precision::approx_eq`].

use super::closest::closest_point_line;
use crate::geometry::{Aabb, Line, Obb, Plane, Point, Ray, Sphere};
use crate::precision::{approx_eq, approx_zero, safe_normalize};

/// Shapes that can answer "is this point part of me?".
pub trait ContainsPoint {
    fn contains_point(&self, point: Point) -> bool;
}

/// Strictly inside the sphere; points on the surface are excluded.
#[inline]
pub fn point_in_sphere(point: Point, sphere: &Sphere) -> bool {
    (point - sphere.position).length_squared() < sphere.radius * sphere.radius
}

/// Inside or on the boundary of the AABB.
#[inline]
pub fn point_in_aabb(point: Point, aabb: &Aabb) -> bool {
    let min = aabb.min();
    let max = aabb.max();
    point.cmpge(min).all() && point.cmple(max).all()
}

/// Inside or on the boundary of the OBB.
pub fn point_in_obb(point: Point, obb: &Obb) -> bool {
    let dir = point - obb.position;
    obb.axes()
        .into_iter()
        .zip(obb.size.to_array())
        .all(|(axis, extent)| dir.dot(axis).abs() <= extent.abs())
}

/// On the plane, within tolerance.
#[inline]
pub fn point_on_plane(point: Point, plane: &Plane) -> bool {
    approx_zero(plane.plane_equation(point))
}

/// On the segment, within tolerance.
pub fn point_on_line(point: Point, line: &Line) -> bool {
    let closest = closest_point_line(line, point);
    approx_zero((closest - point).length_squared())
}

/// On the ray, within tolerance. The origin itself is always on the ray.
pub fn point_on_ray(point: Point, ray: &Ray) -> bool {
    if point == ray.origin {
        return true;
    }
    let dir = safe_normalize(point - ray.origin);
    approx_eq(dir.dot(ray.direction), 1.0)
}

impl ContainsPoint for Sphere {
    fn contains_point(&self, point: Point) -> bool {
        point_in_sphere(point, self)
    }
}

impl ContainsPoint for Aabb {
    fn contains_point(&self, point: Point) -> bool {
        point_in_aabb(point, self)
    }
}

impl ContainsPoint for Obb {
    fn contains_point(&self, point: Point) -> bool {
        point_in_obb(point, self)
    }
}

impl ContainsPoint for Plane {
    fn contains_point(&self, point: Point) -> bool {
        point_on_plane(point, self)
    }
}

impl ContainsPoint for Line {
    fn contains_point(&self, point: Point) -> bool {
        point_on_line(point, self)
    }
}

impl ContainsPoint for Ray {
    fn contains_point(&self, point: Point) -> bool {
        point_on_ray(point, self)
    }
}
