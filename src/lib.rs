//! Rein Collide
//!
//! Narrow-phase geometric intersection tests for 3D primitives.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! 1. **precision** - Tolerant float comparison and safe division/normalization
//! 2. **geometry** - Value types (line, ray, sphere, AABB, OBB, plane, triangle)
//! 3. **collision** - Closest point, containment, SAT, overlap, raycast and
//!    line tests, plus a shape-erased dispatcher
//! 4. **error** - Errors from checked constructors and the dispatcher
//!
//! All queries are pure functions over `Copy` inputs. Broad-phase culling,
//! contact manifolds and collision response are left to the caller.
//!
//! ```
//! use rein_collide::{glam::Vec3, overlap, Aabb, Sphere};
//!
//! let a = Aabb::new(Vec3::ZERO, Vec3::ONE);
//! let s = Sphere::new(Vec3::new(1.5, 0.0, 0.0), 1.0);
//! assert!(overlap::sphere_aabb(&s, &a));
//! ```

pub mod collision;
pub mod error;
pub mod geometry;
pub mod precision;

// Re-export commonly used types
pub use collision::{
    closest, containment, linetest, overlap, raycast, sat, BoxCorners, ClosestPoint,
    ContainsPoint, Interval, Linetest, NarrowPhase, QueryConfig, RayHit, Raycast, Shape, ShapeKind,
    NO_HIT,
};

pub use error::{GeometryError, Result};

pub use geometry::{Aabb, Line, Obb, Plane, Point, Ray, Sphere, Triangle};

// Re-export glam for convenience
pub use glam;
