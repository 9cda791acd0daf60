//! Primitive shapes.
//!
//! Every shape is a small `Copy` value type. Queries read shapes and return
//! new values; nothing in the crate mutates a shape it was handed.
//!
//! | Shape | Representation |
//! |---|---|
//! | [`Line`] | finite segment `start`..`end` |
//! | [`Ray`] | `origin` + unit `direction` |
//! | [`Sphere`] | `position` + `radius` |
//! | [`Aabb`] | `position` (center) + `size` (half-extents) |
//! | [`Obb`] | center + half-extents + orthonormal row basis |
//! | [`Plane`] | unit `normal` + signed `distance` from the origin |
//! | [`Triangle`] | three points |

mod aabb;
mod line;
mod obb;
mod plane;
mod sphere;
mod triangle;

use std::fmt;

use glam::Vec3;

pub use aabb::Aabb;
pub use line::{Line, Ray};
pub use obb::Obb;
pub use plane::Plane;
pub use sphere::Sphere;
pub use triangle::Triangle;

/// A location in world space.
pub type Point = Vec3;

/// Formats a vector as `(x, y, z)` for the shape `Display` impls.
pub(crate) struct Tuple(pub Vec3);

impl fmt::Display for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0.x, self.0.y, self.0.z)
    }
}
