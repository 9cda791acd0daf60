//! Closest point on (or in) a shape to an arbitrary query point.

use crate::geometry::{Aabb, Line, Obb, Plane, Point, Ray, Sphere};
use crate::precision::safe_normalize;

/// Shapes that can project a point onto themselves.
pub trait ClosestPoint {
    /// The point of `self` nearest to `point`.
    fn closest_point(&self, point: Point) -> Point;
}

/// Closest point on the surface of a sphere.
///
/// A query point at the center has no preferred direction; the result is
/// then `center + (radius, 0, 0)`.
#[inline]
pub fn closest_point_sphere(sphere: &Sphere, point: Point) -> Point {
    sphere.position + safe_normalize(point - sphere.position) * sphere.radius
}

/// Closest point inside an AABB (the point itself when contained).
#[inline]
pub fn closest_point_aabb(aabb: &Aabb, point: Point) -> Point {
    point.clamp(aabb.min(), aabb.max())
}

/// Closest point inside an OBB.
pub fn closest_point_obb(obb: &Obb, point: Point) -> Point {
    let dir = point - obb.position;
    let half = obb.size.to_array();

    let mut result = obb.position;
    for (axis, extent) in obb.axes().into_iter().zip(half) {
        let distance = dir.dot(axis).clamp(-extent.abs(), extent.abs());
        result += axis * distance;
    }
    result
}

/// Orthogonal projection onto a plane with a unit normal.
#[inline]
pub fn closest_point_plane(plane: &Plane, point: Point) -> Point {
    point - plane.normal * plane.plane_equation(point)
}

/// Closest point on a finite segment.
///
/// A zero-length segment collapses to its start point.
pub fn closest_point_line(line: &Line, point: Point) -> Point {
    let ab = line.direction();
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return line.start;
    }
    let t = (point - line.start).dot(ab) / len_sq;
    line.point_at(t.clamp(0.0, 1.0))
}

/// Closest point on a ray. Points behind the origin project to the origin.
#[inline]
pub fn closest_point_ray(ray: &Ray, point: Point) -> Point {
    let t = (point - ray.origin).dot(ray.direction);
    ray.point_at(t.max(0.0))
}

impl ClosestPoint for Sphere {
    fn closest_point(&self, point: Point) -> Point {
        closest_point_sphere(self, point)
    }
}

impl ClosestPoint for Aabb {
    fn closest_point(&self, point: Point) -> Point {
        closest_point_aabb(self, point)
    }
}

impl ClosestPoint for Obb {
    fn closest_point(&self, point: Point) -> Point {
        closest_point_obb(self, point)
    }
}

impl ClosestPoint for Plane {
    fn closest_point(&self, point: Point) -> Point {
        closest_point_plane(self, point)
    }
}

impl ClosestPoint for Line {
    fn closest_point(&self, point: Point) -> Point {
        closest_point_line(self, point)
    }
}

impl ClosestPoint for Ray {
    fn closest_point(&self, point: Point) -> Point {
        closest_point_ray(self, point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Quat, Vec3};
    use std::f32::consts::FRAC_PI_4;

    const EPS: f32 = 1e-5;

    fn assert_idempotent<S: ClosestPoint>(shape: &S, point: Point) {
        let once = shape.closest_point(point);
        let twice = shape.closest_point(once);
        assert!(
            (once - twice).length() < EPS,
            "closest point not idempotent: {once} vs {twice}"
        );
    }

    #[test]
    fn test_sphere() {
        let sphere = Sphere::new(Vec3::new(0.0, 2.0, 0.0), 1.0);
        let p = closest_point_sphere(&sphere, Vec3::new(0.0, 10.0, 0.0));
        assert!((p - Vec3::new(0.0, 3.0, 0.0)).length() < EPS);

        // Inside points are pushed out to the surface.
        let p = closest_point_sphere(&sphere, Vec3::new(0.0, 1.5, 0.0));
        assert!((p - Vec3::new(0.0, 1.0, 0.0)).length() < EPS);
    }

    #[test]
    fn test_sphere_center_is_deterministic() {
        let sphere = Sphere::new(Vec3::ONE, 2.0);
        let p = closest_point_sphere(&sphere, Vec3::ONE);
        assert!(p.is_finite());
        assert!((p - Vec3::new(3.0, 1.0, 1.0)).length() < EPS);
    }

    #[test]
    fn test_aabb() {
        let aabb = Aabb::new(Vec3::ZERO, Vec3::ONE);
        let p = closest_point_aabb(&aabb, Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(p, Vec3::new(1.0, 0.0, 0.0));

        let p = closest_point_aabb(&aabb, Vec3::new(-5.0, 0.5, 9.0));
        assert_eq!(p, Vec3::new(-1.0, 0.5, 1.0));

        let inside = Vec3::new(0.25, -0.5, 0.75);
        assert_eq!(closest_point_aabb(&aabb, inside), inside);
    }

    #[test]
    fn test_aabb_uses_each_axis_bounds() {
        // Distinct extents per axis so a mixed-up axis would show.
        let aabb = Aabb::new(Vec3::new(10.0, 0.0, -4.0), Vec3::new(1.0, 2.0, 3.0));
        let p = closest_point_aabb(&aabb, Vec3::new(20.0, 20.0, 20.0));
        assert_eq!(p, Vec3::new(11.0, 2.0, -1.0));
    }

    #[test]
    fn test_obb() {
        let obb = Obb::from_rotation(Vec3::ZERO, Vec3::new(2.0, 1.0, 1.0), Quat::from_rotation_z(FRAC_PI_4));
        // The long local X axis points along (1, 1, 0) / sqrt(2).
        let far = Vec3::new(10.0, 10.0, 0.0);
        let p = closest_point_obb(&obb, far);
        let expected = Vec3::new(1.0, 1.0, 0.0).normalize() * 2.0;
        assert!((p - expected).length() < EPS);

        let inside = Vec3::new(0.3, 0.2, 0.1);
        assert!((closest_point_obb(&obb, inside) - inside).length() < EPS);
    }

    #[test]
    fn test_plane() {
        let plane = Plane::new(Vec3::Y, 1.0);
        let p = closest_point_plane(&plane, Vec3::new(3.0, 5.0, -2.0));
        assert!((p - Vec3::new(3.0, 1.0, -2.0)).length() < EPS);
    }

    #[test]
    fn test_line_clamps_to_segment() {
        let line = Line::new(Vec3::ZERO, Vec3::new(4.0, 0.0, 0.0));
        let p = closest_point_line(&line, Vec3::new(1.0, 3.0, 0.0));
        assert!((p - Vec3::new(1.0, 0.0, 0.0)).length() < EPS);

        let p = closest_point_line(&line, Vec3::new(-3.0, 1.0, 0.0));
        assert_eq!(p, line.start);

        let p = closest_point_line(&line, Vec3::new(9.0, -1.0, 0.0));
        assert_eq!(p, line.end);
    }

    #[test]
    fn test_degenerate_line() {
        let line = Line::new(Vec3::ONE, Vec3::ONE);
        let p = closest_point_line(&line, Vec3::new(5.0, 5.0, 5.0));
        assert!(p.is_finite());
        assert!((p - Vec3::ONE).length() < EPS);
    }

    #[test]
    fn test_short_line() {
        let line = Line::new(Vec3::ZERO, Vec3::new(2e-4, 0.0, 0.0));
        let p = closest_point_line(&line, Vec3::new(1e-4, 5.0, 0.0));
        assert!((p - Vec3::new(1e-4, 0.0, 0.0)).length() < 1e-8, "got {p}");
    }

    #[test]
    fn test_small_sphere() {
        let sphere = Sphere::new(Vec3::ZERO, 1e-3);
        let p = closest_point_sphere(&sphere, Vec3::new(0.0, 2e-4, 0.0));
        assert!((p - Vec3::new(0.0, 1e-3, 0.0)).length() < 1e-8, "got {p}");
    }

    #[test]
    fn test_ray_clamps_behind_origin() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        let p = closest_point_ray(&ray, Vec3::new(5.0, 2.0, 0.0));
        assert!((p - Vec3::new(5.0, 0.0, 0.0)).length() < EPS);

        let p = closest_point_ray(&ray, Vec3::new(-5.0, 2.0, 0.0));
        assert_eq!(p, ray.origin);
    }

    #[test]
    fn test_idempotent() {
        let probes = [
            Vec3::new(3.0, -2.0, 0.5),
            Vec3::new(0.1, 0.1, 0.1),
            Vec3::new(-7.0, 4.0, 9.0),
        ];
        let sphere = Sphere::new(Vec3::new(1.0, 0.0, 0.0), 2.0);
        let aabb = Aabb::new(Vec3::new(0.0, 1.0, 0.0), Vec3::new(1.0, 2.0, 0.5));
        let obb = Obb::from_rotation(Vec3::ONE, Vec3::new(1.0, 0.5, 2.0), Quat::from_rotation_y(0.6));
        let plane = Plane::new(Vec3::new(1.0, 1.0, 0.0).normalize(), 0.5);

        for p in probes {
            assert_idempotent(&sphere, p);
            assert_idempotent(&aabb, p);
            assert_idempotent(&obb, p);
            assert_idempotent(&plane, p);
        }
    }
}
