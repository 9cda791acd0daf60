//! Narrow-phase intersection queries.
//!
//! # Layout
//!
//! 1. **closest** - Closest point on a shape to a query point
//! 2. **containment** - Point-in-solid and point-on-shape predicates
//! 3. **sat** - Separating axis machinery for box pairs
//! 4. **overlap** - Boolean shape/shape tests
//! 5. **raycast** - Parametric ray hits
//! 6. **linetest** - Finite segment hits
//! 7. **dispatch** - [`Shape`] enum and the [`NarrowPhase`] router
//!
//! Each pair has one canonical free function (`sphere_aabb`, not
//! `aabb_sphere`). Use [`NarrowPhase`] when argument order is not known
//! statically.

pub mod closest;
pub mod containment;
pub mod dispatch;
pub mod linetest;
pub mod overlap;
pub mod raycast;
pub mod sat;

pub use closest::ClosestPoint;
pub use containment::ContainsPoint;
pub use dispatch::{NarrowPhase, QueryConfig, Shape, ShapeKind};
pub use linetest::Linetest;
pub use raycast::{RayHit, Raycast, NO_HIT};
pub use sat::{BoxCorners, Interval};
