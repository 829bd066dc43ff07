//! # Solid Assembly
//!
//! Joins the blade and the shaft ring into a single vertex/face buffer.

use crate::error::MeshError;
use crate::mesh::Mesh;
use config::constants::MAX_VERTICES;

/// Concatenates blade and ring into one mesh.
///
/// Blade vertices come first; every ring index is shifted by the blade's
/// vertex count and ring triangles follow blade triangles. Coincident
/// vertices are kept as they are.
///
/// # Example
///
/// ```rust
/// use auger_mesh::{assemble, primitives::create_ring};
///
/// let a = create_ring(1.0, 2.0, 1.0, 8).unwrap();
/// let b = create_ring(3.0, 4.0, 1.0, 8).unwrap();
/// let solid = assemble(a, b).unwrap();
/// assert_eq!(solid.vertex_count(), 2 * 8 * 24);
/// assert_eq!(solid.triangle(64), [192, 193, 194]);
/// ```
pub fn assemble(blade: Mesh, ring: Mesh) -> Result<Mesh, MeshError> {
    let count = blade.vertex_count() + ring.vertex_count();
    if count > MAX_VERTICES {
        return Err(MeshError::TooManyVertices {
            count,
            max: MAX_VERTICES,
        });
    }

    log::debug!(
        "Assembling solid: ring indices offset by {}",
        blade.vertex_count()
    );

    let mut solid = blade;
    solid.merge(ring);
    Ok(solid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ScrewParams;
    use crate::primitives::{create_blade, create_ring};

    #[test]
    fn test_assemble_counts_and_offsets() {
        let params = ScrewParams {
            segments: 20,
            ..ScrewParams::default()
        };
        let blade = create_blade(&params.blade()).unwrap();
        let ring = create_ring(3.0, 9.0, 102.0, 20).unwrap();
        let (blade_vertices, blade_triangles) = (blade.vertex_count(), blade.triangle_count());
        let expected_ring = ring.clone();

        let solid = assemble(blade.clone(), ring).unwrap();

        assert_eq!(solid.vertex_count(), blade_vertices + expected_ring.vertex_count());
        assert_eq!(solid.triangle_count(), blade_triangles + expected_ring.triangle_count());
        assert_eq!(&solid.vertices()[..blade_vertices], blade.vertices());
        assert_eq!(&solid.triangles()[..blade_triangles], blade.triangles());

        let offset = blade_vertices as u32;
        for (merged, original) in solid.triangles()[blade_triangles..]
            .iter()
            .zip(expected_ring.triangles())
        {
            assert_eq!(
                *merged,
                [original[0] + offset, original[1] + offset, original[2] + offset]
            );
        }
    }

    #[test]
    fn test_assemble_keeps_coincident_vertices() {
        let ring = create_ring(1.0, 2.0, 1.0, 4).unwrap();
        let solid = assemble(ring.clone(), ring).unwrap();
        assert_eq!(solid.vertex_count(), 2 * 4 * 24);
        assert_eq!(solid.vertex(0), solid.vertex(96));
    }

    #[test]
    fn test_assemble_empty_blade() {
        let ring = create_ring(1.0, 2.0, 1.0, 3).unwrap();
        let solid = assemble(Mesh::new(), ring.clone()).unwrap();
        assert_eq!(solid, ring);
    }
}
