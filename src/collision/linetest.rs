//! Finite segment tests.
//!
//! Sphere and plane tests project the segment directly. Box tests reuse the
//! raycast engine and reject hits beyond the segment's far endpoint.

use super::closest::closest_point_line;
use super::raycast::{raycast_aabb, raycast_obb};
use crate::geometry::{Aabb, Line, Obb, Plane, Ray, Sphere};
use crate::precision::approx_zero;

/// Shapes that can be tested against a finite segment.
pub trait Linetest {
    fn linetest(&self, line: &Line) -> bool;
}

/// Segment vs. sphere. Touching the surface counts as a hit.
#[inline]
pub fn linetest_sphere(sphere: &Sphere, line: &Line) -> bool {
    let closest = closest_point_line(line, sphere.position);
    (sphere.position - closest).length_squared() <= sphere.radius * sphere.radius
}

/// Parameter `t` in `[0, 1]` at which the segment crosses the plane.
///
/// `None` when the segment is parallel to the plane or does not reach it.
pub fn line_plane_crossing(plane: &Plane, line: &Line) -> Option<f32> {
    let ab = line.direction();
    let n_a = plane.normal.dot(line.start);
    let n_ab = plane.normal.dot(ab);

    if approx_zero(n_ab) {
        return None;
    }

    let t = (plane.distance - n_a) / n_ab;
    (0.0..=1.0).contains(&t).then_some(t)
}

/// Segment vs. plane.
#[inline]
pub fn linetest_plane(plane: &Plane, line: &Line) -> bool {
    line_plane_crossing(plane, line).is_some()
}

/// Accept a ray hit only if it lies within the segment.
#[inline]
fn within_segment(t: f32, line: &Line) -> bool {
    t >= 0.0 && t * t <= line.length_squared()
}

/// Segment vs. AABB.
pub fn linetest_aabb(aabb: &Aabb, line: &Line) -> bool {
    let ray = Ray::from_points(line.start, line.end);
    within_segment(raycast_aabb(aabb, &ray), line)
}

/// Segment vs. OBB.
pub fn linetest_obb(obb: &Obb, line: &Line) -> bool {
    let ray = Ray::from_points(line.start, line.end);
    within_segment(raycast_obb(obb, &ray), line)
}

impl Linetest for Sphere {
    fn linetest(&self, line: &Line) -> bool {
        linetest_sphere(self, line)
    }
}

impl Linetest for Plane {
    fn linetest(&self, line: &Line) -> bool {
        linetest_plane(self, line)
    }
}

impl Linetest for Aabb {
    fn linetest(&self, line: &Line) -> bool {
        linetest_aabb(self, line)
    }
}

impl Linetest for Obb {
    fn linetest(&self, line: &Line) -> bool {
        linetest_obb(self, line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Quat, Vec3};
    use std::f32::consts::FRAC_PI_4;

    #[test]
    fn test_sphere() {
        let sphere = Sphere::new(Vec3::ZERO, 1.0);
        let through = Line::new(Vec3::new(-3.0, 0.0, 0.0), Vec3::new(3.0, 0.0, 0.0));
        let short = Line::new(Vec3::new(-3.0, 0.0, 0.0), Vec3::new(-2.0, 0.0, 0.0));
        let tangent = Line::new(Vec3::new(-3.0, 1.0, 0.0), Vec3::new(3.0, 1.0, 0.0));
        assert!(linetest_sphere(&sphere, &through));
        assert!(!linetest_sphere(&sphere, &short));
        // Closed test: grazing the surface is a hit.
        assert!(linetest_sphere(&sphere, &tangent));
    }

    #[test]
    fn test_plane_crossing_midpoint() {
        let plane = Plane::new(Vec3::Y, 0.0);
        let line = Line::new(Vec3::new(0.0, -1.0, 0.0), Vec3::new(0.0, 1.0, 0.0));
        assert!(linetest_plane(&plane, &line));

        let t = line_plane_crossing(&plane, &line).unwrap();
        assert!((t - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_plane_misses() {
        let plane = Plane::new(Vec3::Y, 0.0);
        let above = Line::new(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 3.0, 0.0));
        let parallel = Line::new(Vec3::new(-1.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
        assert!(!linetest_plane(&plane, &above));
        assert!(!linetest_plane(&plane, &parallel));

        // An endpoint on the plane counts.
        let ending = Line::new(Vec3::new(0.0, 2.0, 0.0), Vec3::ZERO);
        assert!(linetest_plane(&plane, &ending));
    }

    #[test]
    fn test_aabb() {
        let aabb = Aabb::new(Vec3::ZERO, Vec3::ONE);
        let through = Line::new(Vec3::new(-3.0, 0.0, 0.0), Vec3::new(3.0, 0.0, 0.0));
        let reaching = Line::new(Vec3::new(-3.0, 0.0, 0.0), Vec3::new(-0.5, 0.0, 0.0));
        let short = Line::new(Vec3::new(-3.0, 0.0, 0.0), Vec3::new(-1.5, 0.0, 0.0));
        let beside = Line::new(Vec3::new(-3.0, 2.0, 0.0), Vec3::new(3.0, 2.0, 0.0));
        assert!(linetest_aabb(&aabb, &through));
        assert!(linetest_aabb(&aabb, &reaching));
        assert!(!linetest_aabb(&aabb, &short));
        assert!(!linetest_aabb(&aabb, &beside));
    }

    #[test]
    fn test_aabb_short_segment() {
        let aabb = Aabb::new(Vec3::ZERO, Vec3::ONE);
        // Crosses the top face over a distance of 2e-4.
        let crossing = Line::new(Vec3::new(0.0, 1.0001, 0.0), Vec3::new(0.0, 0.9999, 0.0));
        assert!(linetest_aabb(&aabb, &crossing));

        let obb = Obb::from_rotation(Vec3::ZERO, Vec3::ONE, Quat::IDENTITY);
        assert!(linetest_obb(&obb, &crossing));

        let above = Line::new(Vec3::new(0.0, 1.0003, 0.0), Vec3::new(0.0, 1.0001, 0.0));
        assert!(!linetest_aabb(&aabb, &above));
    }

    #[test]
    fn test_aabb_segment_starting_inside() {
        let aabb = Aabb::new(Vec3::ZERO, Vec3::ONE);
        // The ray from the start exits at t = 1, past the end of this segment,
        // so a segment lying wholly inside the box reports no hit.
        let inside = Line::new(Vec3::ZERO, Vec3::new(0.5, 0.0, 0.0));
        assert!(!linetest_aabb(&aabb, &inside));

        let leaving = Line::new(Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0));
        assert!(linetest_aabb(&aabb, &leaving));
    }

    #[test]
    fn test_obb() {
        let obb = Obb::from_rotation(Vec3::ZERO, Vec3::ONE, Quat::from_rotation_z(FRAC_PI_4));
        // The rotated corner reaches x = -sqrt(2) ~ -1.414.
        let reaching = Line::new(Vec3::new(-3.0, 0.0, 0.0), Vec3::new(-1.3, 0.0, 0.0));
        let short = Line::new(Vec3::new(-3.0, 0.0, 0.0), Vec3::new(-1.5, 0.0, 0.0));
        assert!(linetest_obb(&obb, &reaching));
        assert!(!linetest_obb(&obb, &short));
    }
}
