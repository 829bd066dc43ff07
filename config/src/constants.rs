//! # Configuration Constants
//!
//! Centralized constants for the conveyor screw pipeline. Screw dimension
//! defaults, tessellation parameters, precision values and export settings
//! are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point tolerances
//! - **Resolution**: Angular tessellation of the blade and shaft
//! - **Screw Defaults**: The reference auger dimensions
//! - **Limits**: Maximum values for safety bounds
//! - **Export**: STL output settings

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Length threshold below which a face normal is treated as
/// degenerate and exported as the zero vector.
///
/// A cross product shorter than this cannot be normalized meaningfully.
pub const DEGENERATE_NORMAL_EPSILON: f64 = f64::EPSILON;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Default number of blade stations per revolution.
///
/// The shaft ring inherits this value unless a separate shaft resolution
/// is requested.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_SEGMENTS;
///
/// let turns = 3;
/// assert_eq!(DEFAULT_SEGMENTS * turns, 3000);
/// ```
pub const DEFAULT_SEGMENTS: u32 = 1000;

/// Minimum angular segment count. A closed ring needs at least a triangle.
pub const MIN_SEGMENTS: u32 = 3;

// =============================================================================
// SCREW DEFAULTS
// =============================================================================

/// Default outer (blade) diameter.
pub const DEFAULT_OUTER_DIAMETER: f64 = 42.0;

/// Default overall screw length along Z.
pub const DEFAULT_LENGTH: f64 = 102.0;

/// Default shaft bore diameter.
pub const DEFAULT_SHAFT_INNER_DIAMETER: f64 = 6.0;

/// Default shaft outer diameter, which is also the blade's inner rail.
pub const DEFAULT_SHAFT_OUTER_DIAMETER: f64 = 18.0;

/// Default number of full blade revolutions.
pub const DEFAULT_NUM_TURNS: u32 = 3;

/// Default axial blade thickness where the blade meets the shaft.
pub const DEFAULT_THICKNESS_AT_SHAFT: f64 = 15.0;

/// Default axial blade thickness at the outer edge.
pub const DEFAULT_THICKNESS_AT_SHAFT_END: f64 = 4.0;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of vertices in a single mesh.
///
/// Faces address vertices with `u32` indices.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_VERTICES;
///
/// assert!(MAX_VERTICES <= u32::MAX as usize);
/// ```
pub const MAX_VERTICES: usize = u32::MAX as usize;

// =============================================================================
// EXPORT CONSTANTS
// =============================================================================

/// Name written into the `solid`/`endsolid` lines of exported STL files.
pub const DEFAULT_SOLID_NAME: &str = "conveyor_screw";

/// Default output path of the CLI.
pub const DEFAULT_OUTPUT_PATH: &str = "conveyor_screw.stl";
