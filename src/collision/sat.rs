//! Separating Axis Theorem machinery for box-like shapes.
//!
//! Two convex polyhedra are disjoint iff their projections onto some axis do
//! not overlap. For a pair of boxes the candidate axes are the 3 face normals
//! of each box plus the 9 cross products of their edge directions.

use glam::Vec3;

use crate::geometry::{Aabb, Obb, Point};
use crate::precision::approx_zero;

/// Scalar range covered by a shape projected onto an axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// Closed overlap test; touching intervals overlap.
    #[inline]
    pub fn overlaps(&self, other: &Interval) -> bool {
        other.min <= self.max && self.min <= other.max
    }
}

/// A box that can report its 8 world-space corners and its face normals.
pub trait BoxCorners {
    fn corners(&self) -> [Point; 8];
    /// The box's 3 face normals (local axes) in world space.
    fn basis(&self) -> [Vec3; 3];
}

impl BoxCorners for Aabb {
    #[inline]
    fn corners(&self) -> [Point; 8] {
        Aabb::corners(self)
    }

    #[inline]
    fn basis(&self) -> [Vec3; 3] {
        [Vec3::X, Vec3::Y, Vec3::Z]
    }
}

impl BoxCorners for Obb {
    #[inline]
    fn corners(&self) -> [Point; 8] {
        Obb::corners(self)
    }

    #[inline]
    fn basis(&self) -> [Vec3; 3] {
        self.axes()
    }
}

/// Project a set of corners onto `axis`.
pub fn project_corners(corners: &[Point; 8], axis: Vec3) -> Interval {
    let first = axis.dot(corners[0]);
    corners[1..].iter().fold(
        Interval {
            min: first,
            max: first,
        },
        |acc, corner| {
            let projection = axis.dot(*corner);
            Interval {
                min: acc.min.min(projection),
                max: acc.max.max(projection),
            }
        },
    )
}

/// Projection interval of any box onto `axis`.
#[inline]
pub fn interval<B: BoxCorners + ?Sized>(shape: &B, axis: Vec3) -> Interval {
    project_corners(&shape.corners(), axis)
}

/// Projection interval of an AABB onto `axis`.
#[inline]
pub fn interval_aabb(aabb: &Aabb, axis: Vec3) -> Interval {
    interval(aabb, axis)
}

/// Projection interval of an OBB onto `axis`.
#[inline]
pub fn interval_obb(obb: &Obb, axis: Vec3) -> Interval {
    interval(obb, axis)
}

/// Whether the projections of `a` and `b` onto `axis` overlap.
pub fn overlap_on_axis<A, B>(a: &A, b: &B, axis: Vec3) -> bool
where
    A: BoxCorners + ?Sized,
    B: BoxCorners + ?Sized,
{
    interval(a, axis).overlaps(&interval(b, axis))
}

/// The 15 candidate separating axes for a box pair.
///
/// Order: A's face normals, B's face normals, then `a_i x b_j` row-major.
pub fn candidate_axes(basis_a: &[Vec3; 3], basis_b: &[Vec3; 3]) -> [Vec3; 15] {
    let mut axes = [Vec3::ZERO; 15];
    axes[..3].copy_from_slice(basis_a);
    axes[3..6].copy_from_slice(basis_b);
    for (i, a) in basis_a.iter().enumerate() {
        for (j, b) in basis_b.iter().enumerate() {
            axes[6 + i * 3 + j] = a.cross(*b);
        }
    }
    axes
}

/// Full SAT overlap test between two boxes.
///
/// Returns `false` as soon as one axis separates the boxes. Cross products of
/// (nearly) parallel edges vanish and are skipped.
pub fn sat_test<A, B>(a: &A, b: &B) -> bool
where
    A: BoxCorners + ?Sized,
    B: BoxCorners + ?Sized,
{
    let corners_a = a.corners();
    let corners_b = b.corners();

    candidate_axes(&a.basis(), &b.basis())
        .into_iter()
        .filter(|axis| !approx_zero(axis.length_squared()))
        .all(|axis| {
            project_corners(&corners_a, axis).overlaps(&project_corners(&corners_b, axis))
        })
}
