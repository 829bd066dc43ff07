//! # Export
//!
//! Serialization of assembled meshes.

pub mod stl;

pub use stl::{save_stl, write_stl};

/// Summary of an export run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExportStats {
    /// Number of facet records written
    pub facets: usize,
    /// Facets whose normal was written as the zero vector
    pub degenerate: usize,
}
