//! # Screw Parameters
//!
//! Configuration structures passed into the generation pipeline, with
//! validation that runs before any buffer is allocated.

use config::constants::{
    DEFAULT_LENGTH, DEFAULT_NUM_TURNS, DEFAULT_OUTER_DIAMETER, DEFAULT_SEGMENTS,
    DEFAULT_SHAFT_INNER_DIAMETER, DEFAULT_SHAFT_OUTER_DIAMETER, DEFAULT_THICKNESS_AT_SHAFT,
    DEFAULT_THICKNESS_AT_SHAFT_END, MIN_SEGMENTS,
};
use serde::{Deserialize, Serialize};

use crate::error::MeshError;

/// Handedness of the blade helix.
///
/// `Left` pairs `(cos, sin)` with the station angle, `Right` pairs
/// `(sin, cos)`. The two blades are mirror images about the plane `x = y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnDirection {
    #[default]
    Left,
    Right,
}

impl TurnDirection {
    /// Maps the boolean turn flag: `false` is left-handed, `true` right-handed.
    pub fn from_flag(flag: bool) -> Self {
        if flag {
            Self::Right
        } else {
            Self::Left
        }
    }

    /// Planar unit direction at `angle` for this handedness.
    #[inline]
    pub fn planar(self, angle: f64) -> (f64, f64) {
        let (sin, cos) = angle.sin_cos();
        match self {
            Self::Left => (cos, sin),
            Self::Right => (sin, cos),
        }
    }

    /// Whether triangles must be reversed to stay outward-facing.
    #[inline]
    pub(crate) fn is_mirrored(self) -> bool {
        self == Self::Right
    }
}

impl From<bool> for TurnDirection {
    fn from(flag: bool) -> Self {
        Self::from_flag(flag)
    }
}

/// Full parameter set of a conveyor screw.
///
/// Deserializes from JSON with every field optional; missing fields take
/// the reference auger's values.
///
/// # Example
///
/// ```rust
/// use auger_mesh::{ScrewParams, TurnDirection};
///
/// let params = ScrewParams {
///     turn_direction: TurnDirection::Right,
///     segments: 64,
///     ..ScrewParams::default()
/// };
/// assert!(params.validate().is_ok());
/// assert_eq!(params.ring_segments(), 64);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrewParams {
    /// Blade outer diameter
    pub outer_diameter: f64,
    /// Overall length along Z; also the shaft height
    pub length: f64,
    /// Bore diameter of the hollow shaft
    pub shaft_inner_diameter: f64,
    /// Shaft outer diameter, where the blade's inner rail sits
    pub shaft_outer_diameter: f64,
    /// Number of full blade revolutions
    pub num_turns: u32,
    /// Axial blade thickness at the shaft
    pub thickness_at_shaft: f64,
    /// Axial blade thickness at the rim
    pub thickness_at_shaft_end: f64,
    pub turn_direction: TurnDirection,
    /// Blade stations per revolution
    pub segments: u32,
    /// Angular steps of the shaft ring; `None` reuses `segments`
    pub shaft_segments: Option<u32>,
}

impl Default for ScrewParams {
    fn default() -> Self {
        Self {
            outer_diameter: DEFAULT_OUTER_DIAMETER,
            length: DEFAULT_LENGTH,
            shaft_inner_diameter: DEFAULT_SHAFT_INNER_DIAMETER,
            shaft_outer_diameter: DEFAULT_SHAFT_OUTER_DIAMETER,
            num_turns: DEFAULT_NUM_TURNS,
            thickness_at_shaft: DEFAULT_THICKNESS_AT_SHAFT,
            thickness_at_shaft_end: DEFAULT_THICKNESS_AT_SHAFT_END,
            turn_direction: TurnDirection::Left,
            segments: DEFAULT_SEGMENTS,
            shaft_segments: None,
        }
    }
}

impl ScrewParams {
    /// Angular resolution handed to the shaft ring.
    pub fn ring_segments(&self) -> u32 {
        self.shaft_segments.unwrap_or(self.segments)
    }

    /// The subset of parameters the blade builder consumes.
    pub fn blade(&self) -> BladeParams {
        BladeParams {
            outer_diameter: self.outer_diameter,
            length: self.length,
            shaft_outer_diameter: self.shaft_outer_diameter,
            num_turns: self.num_turns,
            thickness_at_shaft: self.thickness_at_shaft,
            thickness_at_shaft_end: self.thickness_at_shaft_end,
            turn_direction: self.turn_direction,
            segments: self.segments,
        }
    }

    /// Checks the whole parameter set, blade and shaft.
    pub fn validate(&self) -> Result<(), MeshError> {
        self.blade().validate()?;
        require_positive("shaft_inner_diameter", self.shaft_inner_diameter)?;
        if self.shaft_inner_diameter >= self.shaft_outer_diameter {
            return Err(MeshError::invalid_parameter(format!(
                "shaft_inner_diameter ({}) must be smaller than shaft_outer_diameter ({})",
                self.shaft_inner_diameter, self.shaft_outer_diameter
            )));
        }
        require_segments("shaft_segments", self.ring_segments())
    }
}

/// Parameters of the helical blade.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BladeParams {
    pub outer_diameter: f64,
    pub length: f64,
    pub shaft_outer_diameter: f64,
    pub num_turns: u32,
    pub thickness_at_shaft: f64,
    pub thickness_at_shaft_end: f64,
    pub turn_direction: TurnDirection,
    pub segments: u32,
}

impl BladeParams {
    /// Number of helical stations, `segments * num_turns`.
    pub fn total_points(&self) -> usize {
        self.segments as usize * self.num_turns as usize
    }

    /// Checks ranges and relations between the blade dimensions.
    pub fn validate(&self) -> Result<(), MeshError> {
        require_positive("outer_diameter", self.outer_diameter)?;
        require_positive("length", self.length)?;
        require_positive("shaft_outer_diameter", self.shaft_outer_diameter)?;
        require_positive("thickness_at_shaft", self.thickness_at_shaft)?;
        require_positive("thickness_at_shaft_end", self.thickness_at_shaft_end)?;
        require_segments("segments", self.segments)?;

        if self.num_turns == 0 {
            return Err(MeshError::invalid_parameter("num_turns must be at least 1"));
        }
        if self.shaft_outer_diameter >= self.outer_diameter {
            return Err(MeshError::invalid_parameter(format!(
                "shaft_outer_diameter ({}) must be smaller than outer_diameter ({})",
                self.shaft_outer_diameter, self.outer_diameter
            )));
        }
        if self.thickness_at_shaft_end > self.thickness_at_shaft {
            return Err(MeshError::invalid_parameter(format!(
                "thickness_at_shaft_end ({}) must not exceed thickness_at_shaft ({})",
                self.thickness_at_shaft_end, self.thickness_at_shaft
            )));
        }
        if self.thickness_at_shaft >= self.length {
            return Err(MeshError::invalid_parameter(format!(
                "thickness_at_shaft ({}) must be smaller than length ({})",
                self.thickness_at_shaft, self.length
            )));
        }
        Ok(())
    }
}

pub(crate) fn require_positive(name: &str, value: f64) -> Result<(), MeshError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(MeshError::invalid_parameter(format!(
            "{} must be positive and finite: {}",
            name, value
        )))
    }
}

pub(crate) fn require_segments(name: &str, value: u32) -> Result<(), MeshError> {
    if value >= MIN_SEGMENTS {
        Ok(())
    } else {
        Err(MeshError::invalid_parameter(format!(
            "{} must be at least {}: {}",
            name, MIN_SEGMENTS, value
        )))
    }
}
