//! Boolean overlap tests between pairs of shapes.
//!
//! Box and plane tests are closed: touching shapes overlap. Sphere tests are
//! strict: a sphere that only touches another shape does not overlap it.

use glam::Vec3;

use super::closest::{closest_point_aabb, closest_point_obb, closest_point_plane};
use super::sat::{sat_test, BoxCorners};
use crate::geometry::{Aabb, Obb, Plane, Point, Sphere};
use crate::precision::approx_zero;

/// Squared distance from the sphere center to `closest` against `r^2`.
#[inline]
fn sphere_reaches(sphere: &Sphere, closest: Point) -> bool {
    (sphere.position - closest).length_squared() < sphere.radius * sphere.radius
}

/// Sphere vs. sphere.
#[inline]
pub fn sphere_sphere(a: &Sphere, b: &Sphere) -> bool {
    let radii = a.radius + b.radius;
    (a.position - b.position).length_squared() < radii * radii
}

/// Sphere vs. AABB.
#[inline]
pub fn sphere_aabb(sphere: &Sphere, aabb: &Aabb) -> bool {
    sphere_reaches(sphere, closest_point_aabb(aabb, sphere.position))
}

/// Sphere vs. OBB.
#[inline]
pub fn sphere_obb(sphere: &Sphere, obb: &Obb) -> bool {
    sphere_reaches(sphere, closest_point_obb(obb, sphere.position))
}

/// Sphere vs. plane.
#[inline]
pub fn sphere_plane(sphere: &Sphere, plane: &Plane) -> bool {
    sphere_reaches(sphere, closest_point_plane(plane, sphere.position))
}

/// AABB vs. AABB: the min/max ranges overlap on all three world axes.
#[inline]
pub fn aabb_aabb(a: &Aabb, b: &Aabb) -> bool {
    let (a_min, a_max) = (a.min(), a.max());
    let (b_min, b_max) = (b.min(), b.max());
    a_min.cmple(b_max).all() && a_max.cmpge(b_min).all()
}

/// AABB vs. OBB using the 15-axis separating axis test.
#[inline]
pub fn aabb_obb(aabb: &Aabb, obb: &Obb) -> bool {
    sat_test(aabb, obb)
}

/// OBB vs. OBB using the 15-axis separating axis test.
#[inline]
pub fn obb_obb(a: &Obb, b: &Obb) -> bool {
    sat_test(a, b)
}

/// Projected half-width of a box onto `normal`: `sum(e_i * |normal . axis_i|)`.
#[inline]
fn projected_radius<B: BoxCorners + ?Sized>(shape: &B, half_extents: [f32; 3], normal: Vec3) -> f32 {
    shape
        .basis()
        .into_iter()
        .zip(half_extents)
        .map(|(axis, extent)| extent.abs() * normal.dot(axis).abs())
        .sum()
}

/// AABB vs. plane.
#[inline]
pub fn aabb_plane(aabb: &Aabb, plane: &Plane) -> bool {
    let radius = projected_radius(aabb, aabb.size.to_array(), plane.normal);
    plane.plane_equation(aabb.position).abs() <= radius
}

/// OBB vs. plane.
#[inline]
pub fn obb_plane(obb: &Obb, plane: &Plane) -> bool {
    let radius = projected_radius(obb, obb.size.to_array(), plane.normal);
    plane.plane_equation(obb.position).abs() <= radius
}

/// Plane vs. plane.
///
/// Non-parallel planes always meet in a line. Parallel planes are reported as
/// not overlapping even when they coincide.
#[inline]
pub fn plane_plane(a: &Plane, b: &Plane) -> bool {
    !approx_zero(a.normal.cross(b.normal).length_squared())
}
