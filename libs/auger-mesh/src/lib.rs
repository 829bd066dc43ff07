//! # Auger Mesh
//!
//! Procedural triangle meshes for helical screw conveyors.
//!
//! ## Architecture
//!
//! ```text
//! create_blade ─┐
//!               ├─> assemble ─> export::write_stl / export::save_stl
//! create_ring ──┘
//! ```
//!
//! The blade is a closed ribbon swept along two concentric helices, the
//! shaft a hollow cylinder. Both are built independently, concatenated into
//! one vertex buffer and written as ASCII STL.
//!
//! ## Usage
//!
//! ```rust
//! use auger_mesh::{generate_conveyor_screw, export::write_stl, ScrewParams};
//!
//! let params = ScrewParams { segments: 32, ..ScrewParams::default() };
//! let mesh = generate_conveyor_screw(&params)?;
//!
//! let mut stl = Vec::new();
//! let stats = write_stl(&mesh, "screw", &mut stl)?;
//! assert_eq!(stats.facets, mesh.triangle_count());
//! # Ok::<(), auger_mesh::MeshError>(())
//! ```

pub mod assemble;
pub mod error;
pub mod export;
pub mod mesh;
pub mod params;
pub mod primitives;

pub use assemble::assemble;
pub use error::MeshError;
pub use export::ExportStats;
pub use mesh::Mesh;
pub use params::{BladeParams, ScrewParams, TurnDirection};

/// Builds the complete conveyor screw: helical blade plus hollow shaft.
///
/// The parameter set is validated before anything is allocated. The shaft
/// spans the full `length`, its bore is `shaft_inner_diameter` and it uses
/// [`ScrewParams::ring_segments`] angular steps.
///
/// # Example
///
/// ```rust
/// use auger_mesh::{generate_conveyor_screw, ScrewParams};
///
/// let mesh = generate_conveyor_screw(&ScrewParams::default()).unwrap();
/// assert_eq!(mesh.triangle_count(), (8 * (3000 - 1) + 4) + 8000);
/// ```
pub fn generate_conveyor_screw(params: &ScrewParams) -> Result<Mesh, MeshError> {
    params.validate()?;

    let blade = primitives::create_blade(&params.blade())?;
    log::debug!(
        "Blade: {} stations, {} vertices, {} triangles",
        params.blade().total_points(),
        blade.vertex_count(),
        blade.triangle_count()
    );

    let ring = primitives::create_ring(
        params.shaft_inner_diameter / 2.0,
        params.shaft_outer_diameter / 2.0,
        params.length,
        params.ring_segments(),
    )?;
    log::debug!(
        "Shaft: {} segments, {} vertices, {} triangles",
        params.ring_segments(),
        ring.vertex_count(),
        ring.triangle_count()
    );

    assemble(blade, ring)
}
