//! Shared setup helpers for rein-collide benchmarks.
//!
//! ## Running
//!
//! All groups (criterion):
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench collision
//!
//! Filter by group:
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench collision -- overlap
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench collision -- dispatch

use glam::{Quat, Vec3};
use rein_collide::{Aabb, Obb, Plane, Ray, Shape, Sphere};

// ---------------------------------------------------------------------------
// Shape grids
// ---------------------------------------------------------------------------

/// Grid position for item `i` of `n`, spaced so neighbors of unit size touch
/// roughly half the time.
fn grid_position(i: usize, n: usize) -> Vec3 {
    let cols = (n as f32).sqrt().ceil() as usize;
    let x = (i % cols) as f32 * 1.5;
    let z = (i / cols) as f32 * 1.5;
    Vec3::new(x, 0.0, z)
}

/// `n` unit spheres on a grid.
pub fn setup_spheres(n: usize) -> Vec<Sphere> {
    (0..n)
        .map(|i| Sphere::new(grid_position(i, n), 1.0))
        .collect()
}

/// `n` unit boxes on a grid, each rotated a little more than the last.
pub fn setup_obbs(n: usize) -> Vec<Obb> {
    (0..n)
        .map(|i| {
            let rotation = Quat::from_rotation_y(i as f32 * 0.1) * Quat::from_rotation_x(0.3);
            Obb::from_rotation(grid_position(i, n), Vec3::ONE, rotation)
        })
        .collect()
}

/// Same layout as [`setup_obbs`], built through the checked constructor.
pub fn setup_checked_obbs(n: usize) -> anyhow::Result<Vec<Obb>> {
    setup_obbs(n)
        .into_iter()
        .map(|obb| {
            Obb::try_new(obb.position, obb.size, obb.orientation).map_err(anyhow::Error::from)
        })
        .collect()
}

/// Mixed scene: spheres, AABBs, OBBs and a ground plane, wrapped as [`Shape`].
pub fn setup_mixed_shapes(n: usize) -> Vec<Shape> {
    let mut shapes: Vec<Shape> = Vec::with_capacity(n + 1);
    shapes.push(Plane::new(Vec3::Y, -0.5).into());

    for i in 0..n {
        let pos = grid_position(i, n);
        let shape: Shape = match i % 3 {
            0 => Sphere::new(pos, 1.0).into(),
            1 => Aabb::new(pos, Vec3::ONE).into(),
            _ => Obb::from_rotation(pos, Vec3::ONE, Quat::from_rotation_y(0.785)).into(),
        };
        shapes.push(shape);
    }
    shapes
}

// ---------------------------------------------------------------------------
// Rays
// ---------------------------------------------------------------------------

/// `n` rays fired from above the grid toward its origin corner.
pub fn setup_rays(n: usize) -> Vec<Ray> {
    (0..n)
        .map(|i| {
            let origin = grid_position(i, n) + Vec3::new(-0.25, 10.0, 0.25);
            Ray::new(origin, Vec3::new(0.1, -1.0, -0.1))
        })
        .collect()
}
