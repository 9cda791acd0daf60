//! Parametric ray intersection.
//!
//! Every `raycast_*` function returns the smallest non-negative `t` such that
//! `ray.origin + t * ray.direction` is the first intersection with the shape,
//! or [`NO_HIT`] when the ray misses. The ray direction must be unit length.

use glam::Vec3;

use crate::geometry::{Aabb, Obb, Plane, Point, Ray, Sphere};
use crate::precision::{approx_zero, safe_divisor};

/// Sentinel returned when the ray does not hit the shape.
pub const NO_HIT: f32 = -1.0;

/// A ray hit converted from the sentinel form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Ray parameter of the first intersection.
    pub t: f32,
    /// World-space intersection point.
    pub point: Point,
}

/// Shapes that can be intersected by a ray.
pub trait Raycast {
    /// Ray parameter of the first hit, or [`NO_HIT`].
    fn raycast(&self, ray: &Ray) -> f32;

    /// Like [`Raycast::raycast`], with the sentinel mapped to `None`.
    fn cast(&self, ray: &Ray) -> Option<RayHit> {
        let t = self.raycast(ray);
        (t >= 0.0).then(|| RayHit {
            t,
            point: ray.point_at(t),
        })
    }
}

/// Ray vs. sphere, solved geometrically.
///
/// A ray starting inside the sphere reports the exit point.
pub fn raycast_sphere(sphere: &Sphere, ray: &Ray) -> f32 {
    let e = sphere.position - ray.origin;
    let r_sq = sphere.radius * sphere.radius;
    let e_sq = e.length_squared();

    // Projection of the center onto the ray, and the squared distance from
    // the center to the ray's line.
    let a = e.dot(ray.direction);
    let b_sq = e_sq - a * a;

    if r_sq - b_sq < 0.0 {
        return NO_HIT;
    }
    let f = (r_sq - b_sq).sqrt();

    if e_sq < r_sq {
        return a + f;
    }

    let t = a - f;
    if t < 0.0 {
        // Sphere lies behind the origin.
        NO_HIT
    } else {
        t
    }
}

/// Slab test in a frame where the box is axis-aligned.
///
/// `offset` is the box center minus the ray origin, `direction` the ray
/// direction and `half` the half-extents, all expressed in the box's frame.
fn slab_intersection(offset: Vec3, direction: Vec3, half: Vec3) -> f32 {
    let mut t_min = f32::NEG_INFINITY;
    let mut t_max = f32::INFINITY;

    for i in 0..3 {
        let (e, f, extent) = (offset[i], direction[i], half[i].abs());

        if approx_zero(f) && e.abs() > extent {
            // Parallel to this slab and outside it.
            return NO_HIT;
        }
        let f = safe_divisor(f);

        let t1 = (e + extent) / f;
        let t2 = (e - extent) / f;
        t_min = t_min.max(t1.min(t2));
        t_max = t_max.min(t1.max(t2));
    }

    if t_max < 0.0 || t_min > t_max {
        return NO_HIT;
    }
    if t_min < 0.0 {
        // Origin is inside the box.
        t_max
    } else {
        t_min
    }
}

/// Ray vs. AABB (slab method in world axes).
pub fn raycast_aabb(aabb: &Aabb, ray: &Ray) -> f32 {
    let (min, max) = (aabb.min(), aabb.max());
    let center = (min + max) * 0.5;
    slab_intersection(center - ray.origin, ray.direction, (max - min) * 0.5)
}

/// Ray vs. OBB (slab method in the box's local frame).
pub fn raycast_obb(obb: &Obb, ray: &Ray) -> f32 {
    let p = obb.position - ray.origin;
    let axes = obb.axes();

    let offset = Vec3::from_array(axes.map(|axis| axis.dot(p)));
    let direction = Vec3::from_array(axes.map(|axis| axis.dot(ray.direction)));
    slab_intersection(offset, direction, obb.size)
}

/// Ray vs. plane.
///
/// Only rays approaching the front of the plane hit. Rays parallel to the
/// plane or travelling along its normal miss.
pub fn raycast_plane(plane: &Plane, ray: &Ray) -> f32 {
    let nd = ray.direction.dot(plane.normal);
    if nd >= 0.0 {
        return NO_HIT;
    }

    let t = (plane.distance - ray.origin.dot(plane.normal)) / nd;
    if t >= 0.0 {
        t
    } else {
        NO_HIT
    }
}

impl Raycast for Sphere {
    fn raycast(&self, ray: &Ray) -> f32 {
        raycast_sphere(self, ray)
    }
}

impl Raycast for Aabb {
    fn raycast(&self, ray: &Ray) -> f32 {
        raycast_aabb(self, ray)
    }
}

impl Raycast for Obb {
    fn raycast(&self, ray: &Ray) -> f32 {
        raycast_obb(self, ray)
    }
}

impl Raycast for Plane {
    fn raycast(&self, ray: &Ray) -> f32 {
        raycast_plane(self, ray)
    }
}
