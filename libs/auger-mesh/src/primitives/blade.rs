//! # Blade Primitive
//!
//! Generates the helical blade of a conveyor screw.
//!
//! The blade is swept through `segments * num_turns` stations. Each station
//! is a quad cross-section spanning from the shaft (inner rail) to the rim
//! (outer rail):
//!
//! ```text
//!         z
//!         ^   inner-back  3 +
//!         |                 |\______ 2 outer-back
//!         |                 |        |
//!         |                 | ______ 0 outer-front
//!         |   inner-front 1 +/
//!         +--------------------------> r
//!          shaft radius          outer radius
//! ```
//!
//! Consecutive stations are joined by a ruled strip: two triangles for each
//! of the front face, back face, outer wall and inner wall. The first and
//! last station are capped so the ribbon is closed.

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::params::BladeParams;
use crate::primitives::check_vertex_budget;
use glam::DVec3;
use std::f64::consts::TAU;

/// Vertices per station.
pub const STATION_VERTICES: usize = 4;

/// Triangles joining two consecutive stations.
pub const STRIP_TRIANGLES: usize = 8;

/// Triangles closing each end of the blade.
pub const CAP_TRIANGLES: usize = 2;

// Offsets inside a station
const OUTER_FRONT: u32 = 0;
const INNER_FRONT: u32 = 1;
const OUTER_BACK: u32 = 2;
const INNER_BACK: u32 = 3;

/// Creates the helical blade mesh.
///
/// Station `i` sits at angle `-2π·i / segments` and at height
/// `i / total_points · (length - thickness_at_shaft)`, so the blade makes
/// `num_turns` revolutions and never rises above `length`.
///
/// # Returns
///
/// A closed mesh with `4 * total_points` vertices and
/// `8 * (total_points - 1) + 4` triangles, wound outward for both turn
/// directions.
///
/// # Example
///
/// ```rust
/// use auger_mesh::primitives::create_blade;
/// use auger_mesh::ScrewParams;
///
/// let params = ScrewParams { segments: 100, ..ScrewParams::default() };
/// let mesh = create_blade(&params.blade()).unwrap();
/// assert_eq!(mesh.vertex_count(), 4 * 300);
/// assert_eq!(mesh.triangle_count(), 8 * 299 + 4);
/// ```
pub fn create_blade(params: &BladeParams) -> Result<Mesh, MeshError> {
    params.validate()?;

    let total_points = params.total_points();
    let vertex_count = check_vertex_budget(total_points, STATION_VERTICES)?;
    let triangle_count = STRIP_TRIANGLES * (total_points - 1) + 2 * CAP_TRIANGLES;
    let mut mesh = Mesh::with_capacity(vertex_count, triangle_count);

    let outer_radius = params.outer_diameter / 2.0;
    let inner_radius = params.shaft_outer_diameter / 2.0;
    let rise = params.length - params.thickness_at_shaft;
    let taper = (params.thickness_at_shaft - params.thickness_at_shaft_end) / 2.0;

    for i in 0..total_points {
        let angle = -TAU * i as f64 / params.segments as f64;
        let z = i as f64 / total_points as f64 * rise;
        let (x, y) = params.turn_direction.planar(angle);

        let outer = |dz: f64| DVec3::new(outer_radius * x, outer_radius * y, z + dz);
        let inner = |dz: f64| DVec3::new(inner_radius * x, inner_radius * y, z + dz);

        mesh.add_vertex(outer(taper));
        mesh.add_vertex(inner(0.0));
        mesh.add_vertex(outer(params.thickness_at_shaft_end + taper));
        mesh.add_vertex(inner(params.thickness_at_shaft));
    }

    // Mirroring the helix flips orientation, so reverse every triangle.
    let mirrored = params.turn_direction.is_mirrored();
    let mut add = |a: u32, b: u32, c: u32| {
        if mirrored {
            mesh.add_triangle(a, c, b);
        } else {
            mesh.add_triangle(a, b, c);
        }
    };

    for i in 0..total_points as u32 - 1 {
        let s = i * STATION_VERTICES as u32;
        let n = s + STATION_VERTICES as u32;
        let (of1, if1) = (s + OUTER_FRONT, s + INNER_FRONT);
        let (ob1, ib1) = (s + OUTER_BACK, s + INNER_BACK);
        let (of2, if2) = (n + OUTER_FRONT, n + INNER_FRONT);
        let (ob2, ib2) = (n + OUTER_BACK, n + INNER_BACK);

        // Front face
        add(of1, of2, if1);
        add(if1, of2, if2);

        // Back face
        add(ob1, ib1, ob2);
        add(ib1, ib2, ob2);

        // Outer wall
        add(of1, ob1, of2);
        add(ob1, ob2, of2);

        // Inner wall
        add(if1, if2, ib1);
        add(ib1, if2, ib2);
    }

    // End caps
    let first = 0;
    add(first + OUTER_FRONT, first + INNER_FRONT, first + INNER_BACK);
    add(first + OUTER_FRONT, first + INNER_BACK, first + OUTER_BACK);

    let last = (total_points as u32 - 1) * STATION_VERTICES as u32;
    add(last + OUTER_FRONT, last + INNER_BACK, last + INNER_FRONT);
    add(last + OUTER_FRONT, last + OUTER_BACK, last + INNER_BACK);

    Ok(mesh)
}
