//! ASCII STL writer.
//!
//! ```text
//! solid name
//!   facet normal ni nj nk
//!     outer loop
//!       vertex v1x v1y v1z
//!       vertex v2x v2y v2z
//!       vertex v3x v3y v3z
//!     endloop
//!   endfacet
//!   ...
//! endsolid name
//! ```
//!
//! Numbers are written as `{:.6e}`, which does not depend on the locale.

use std::io::{BufWriter, Write};
use std::path::Path;

use glam::DVec3;
use rayon::prelude::*;
use tempfile::NamedTempFile;

use crate::error::MeshError;
use crate::export::ExportStats;
use crate::mesh::Mesh;

/// Writes `mesh` as an ASCII STL solid called `name`.
///
/// Face normals are computed in parallel, then records are written in face
/// order so the output is identical between runs. Zero-area triangles get
/// a zero normal and are counted in [`ExportStats::degenerate`].
///
/// # Errors
///
/// Returns an error if `name` spans several lines or the writer fails.
///
/// # Example
///
/// ```rust
/// use auger_mesh::{export::write_stl, Mesh};
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_detached_triangle(DVec3::ZERO, DVec3::X, DVec3::Y);
///
/// let mut out = Vec::new();
/// let stats = write_stl(&mesh, "part", &mut out).unwrap();
/// assert_eq!(stats.facets, 1);
/// assert!(String::from_utf8(out).unwrap().starts_with("solid part\n"));
/// ```
pub fn write_stl<W: Write>(
    mesh: &Mesh,
    name: &str,
    mut writer: W,
) -> Result<ExportStats, MeshError> {
    if name.contains(|c: char| c == '\n' || c == '\r') {
        return Err(MeshError::invalid_parameter(format!(
            "Solid name must be a single line: {:?}",
            name
        )));
    }

    let normals: Vec<DVec3> = (0..mesh.triangle_count())
        .into_par_iter()
        .map(|index| mesh.face_normal(index))
        .collect();

    let mut stats = ExportStats::default();

    writeln!(writer, "solid {name}")?;

    for (index, normal) in normals.iter().enumerate() {
        if *normal == DVec3::ZERO {
            log::debug!("Facet {} is degenerate, writing zero normal", index);
            stats.degenerate += 1;
        }

        writeln!(
            writer,
            "  facet normal {:.6e} {:.6e} {:.6e}",
            normal.x, normal.y, normal.z
        )?;
        writeln!(writer, "    outer loop")?;
        for v in mesh.triangle_positions(index) {
            writeln!(writer, "      vertex {:.6e} {:.6e} {:.6e}", v.x, v.y, v.z)?;
        }
        writeln!(writer, "    endloop")?;
        writeln!(writer, "  endfacet")?;
        stats.facets += 1;
    }

    writeln!(writer, "endsolid {name}")?;

    if stats.degenerate > 0 {
        log::warn!(
            "{} of {} facets are degenerate",
            stats.degenerate,
            stats.facets
        );
    }

    Ok(stats)
}

/// Saves `mesh` as an ASCII STL file.
///
/// The file is written to a temporary file next to `path` and renamed into
/// place once complete. On failure the temporary file is removed and an
/// existing file at `path` is left untouched.
///
/// # Errors
///
/// Returns [`MeshError::Io`] if the destination directory is not writable.
///
/// # Example
///
/// ```no_run
/// use auger_mesh::{export::save_stl, generate_conveyor_screw, ScrewParams};
///
/// let mesh = generate_conveyor_screw(&ScrewParams::default()).unwrap();
/// save_stl(&mesh, "screw", "conveyor_screw.stl").unwrap();
/// ```
pub fn save_stl<P: AsRef<Path>>(
    mesh: &Mesh,
    name: &str,
    path: P,
) -> Result<ExportStats, MeshError> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)?;
    let stats = {
        let mut writer = BufWriter::new(file.as_file_mut());
        let stats = write_stl(mesh, name, &mut writer)?;
        writer.flush()?;
        stats
    };
    file.as_file().sync_all()?;
    file.persist(path)?;

    log::info!("Wrote {} facets to {}", stats.facets, path.display());
    Ok(stats)
}
