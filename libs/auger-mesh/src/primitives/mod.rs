//! # Primitives
//!
//! Mesh generation for the two solids of a conveyor screw: the helical
//! blade and the hollow shaft ring.

pub mod blade;
pub mod ring;

pub use blade::create_blade;
pub use ring::create_ring;

use crate::error::MeshError;
use config::constants::MAX_VERTICES;

/// Returns `units * per_unit` if the result is addressable by `u32` indices.
pub(crate) fn check_vertex_budget(units: usize, per_unit: usize) -> Result<usize, MeshError> {
    units
        .checked_mul(per_unit)
        .filter(|&count| count <= MAX_VERTICES)
        .ok_or(MeshError::TooManyVertices {
            count: units.saturating_mul(per_unit),
            max: MAX_VERTICES,
        })
}
