//! # Ring Primitive
//!
//! Generates the hollow cylinder used as the screw shaft.

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::params::{require_positive, require_segments};
use crate::primitives::check_vertex_budget;
use glam::DVec3;
use std::f64::consts::TAU;

/// Vertices emitted per angular step (8 triangles, 3 vertices each).
pub const RING_VERTICES_PER_STEP: usize = 24;

/// Triangles emitted per angular step.
pub const RING_TRIANGLES_PER_STEP: usize = 8;

/// Creates a hollow cylinder (annulus extruded along Z) as a triangle soup.
///
/// Every angular step contributes two triangles each to the bottom annulus,
/// the top annulus, the inner wall and the outer wall. No vertex is shared
/// between triangles. The last step closes onto the angle of the first one.
///
/// # Arguments
///
/// * `inner_radius` - Bore radius, must be smaller than `outer_radius`
/// * `outer_radius` - Outer radius
/// * `height` - Extent along Z, starting at z = 0
/// * `segments` - Number of angular steps
///
/// # Returns
///
/// A closed mesh with `24 * segments` vertices and `8 * segments` triangles.
///
/// # Example
///
/// ```rust
/// use auger_mesh::primitives::create_ring;
///
/// let mesh = create_ring(3.0, 9.0, 102.0, 100).unwrap();
/// assert_eq!(mesh.vertex_count(), 2400);
/// assert_eq!(mesh.triangle_count(), 800);
/// ```
pub fn create_ring(
    inner_radius: f64,
    outer_radius: f64,
    height: f64,
    segments: u32,
) -> Result<Mesh, MeshError> {
    require_positive("inner_radius", inner_radius)?;
    require_positive("outer_radius", outer_radius)?;
    require_positive("height", height)?;
    require_segments("segments", segments)?;

    if inner_radius >= outer_radius {
        return Err(MeshError::invalid_parameter(format!(
            "Ring inner radius must be smaller than outer radius: r_in={}, r_out={}",
            inner_radius, outer_radius
        )));
    }

    let steps = segments as usize;
    let vertex_count = check_vertex_budget(steps, RING_VERTICES_PER_STEP)?;
    let mut mesh = Mesh::with_capacity(vertex_count, steps * RING_TRIANGLES_PER_STEP);

    let up = DVec3::new(0.0, 0.0, height);
    let rim = |radius: f64, step: u32| {
        let theta = TAU * (step % segments) as f64 / segments as f64;
        let (sin, cos) = theta.sin_cos();
        DVec3::new(radius * cos, radius * sin, 0.0)
    };

    for i in 0..segments {
        let in1 = rim(inner_radius, i);
        let in2 = rim(inner_radius, i + 1);
        let out1 = rim(outer_radius, i);
        let out2 = rim(outer_radius, i + 1);

        // Bottom annulus, facing -Z
        mesh.add_detached_triangle(in1, in2, out1);
        mesh.add_detached_triangle(in2, out2, out1);

        // Top annulus, facing +Z
        mesh.add_detached_triangle(in1 + up, out1 + up, in2 + up);
        mesh.add_detached_triangle(in2 + up, out1 + up, out2 + up);

        // Inner wall, facing the axis
        mesh.add_detached_triangle(in1, in1 + up, in2);
        mesh.add_detached_triangle(in2, in1 + up, in2 + up);

        // Outer wall, facing away from the axis
        mesh.add_detached_triangle(out1, out2, out1 + up);
        mesh.add_detached_triangle(out2, out2 + up, out1 + up);
    }

    Ok(mesh)
}
