//! Command line arguments of the `auger` binary.

use std::path::PathBuf;

use anyhow::{Context, Result};
use auger_mesh::{ScrewParams, TurnDirection};
use clap::Parser;
use config::constants::{
    DEFAULT_LENGTH, DEFAULT_NUM_TURNS, DEFAULT_OUTER_DIAMETER, DEFAULT_OUTPUT_PATH,
    DEFAULT_SEGMENTS, DEFAULT_SHAFT_INNER_DIAMETER, DEFAULT_SHAFT_OUTER_DIAMETER,
    DEFAULT_SOLID_NAME, DEFAULT_THICKNESS_AT_SHAFT, DEFAULT_THICKNESS_AT_SHAFT_END,
};

/// Generate a helical conveyor screw as an ASCII STL file.
///
/// Log verbosity is controlled through `AUGER_LOG` (e.g. `AUGER_LOG=debug`).
#[derive(Parser, Debug)]
#[command(name = "auger", version, long_about = None)]
pub struct Args {
    /// Read screw parameters from a JSON file instead of the dimension
    /// flags below. Missing fields take their default values.
    #[arg(long, value_name = "FILE")]
    pub params: Option<PathBuf>,

    /// Blade outer diameter.
    #[arg(long, default_value_t = DEFAULT_OUTER_DIAMETER)]
    pub diameter: f64,

    /// Overall screw length along Z.
    #[arg(long, default_value_t = DEFAULT_LENGTH)]
    pub length: f64,

    /// Bore diameter of the hollow shaft.
    #[arg(long, default_value_t = DEFAULT_SHAFT_INNER_DIAMETER)]
    pub shaft_inner_diameter: f64,

    /// Outer diameter of the shaft.
    #[arg(long, default_value_t = DEFAULT_SHAFT_OUTER_DIAMETER)]
    pub shaft_outer_diameter: f64,

    /// Number of full blade revolutions.
    #[arg(long, default_value_t = DEFAULT_NUM_TURNS)]
    pub turns: u32,

    /// Axial blade thickness at the shaft.
    #[arg(long, default_value_t = DEFAULT_THICKNESS_AT_SHAFT)]
    pub thickness_at_shaft: f64,

    /// Axial blade thickness at the rim.
    #[arg(long, default_value_t = DEFAULT_THICKNESS_AT_SHAFT_END)]
    pub thickness_at_shaft_end: f64,

    /// Build a right-handed helix (default is left-handed).
    #[arg(long)]
    pub right_hand: bool,

    /// Blade stations per revolution.
    #[arg(long, default_value_t = DEFAULT_SEGMENTS)]
    pub segments: u32,

    /// Angular steps of the shaft (defaults to --segments).
    #[arg(long)]
    pub shaft_segments: Option<u32>,

    /// Name written to the `solid` line of the STL file.
    #[arg(long, default_value = DEFAULT_SOLID_NAME)]
    pub name: String,

    /// Destination STL file.
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Print the resolved parameters as JSON and exit.
    #[arg(long)]
    pub print_params: bool,
}

impl Args {
    /// Resolves the screw parameters from the params file or the flags.
    pub fn screw_params(&self) -> Result<ScrewParams> {
        if let Some(path) = &self.params {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read params file {}", path.display()))?;
            let params = serde_json::from_str(&text)
                .with_context(|| format!("invalid params file {}", path.display()))?;
            return Ok(params);
        }

        Ok(ScrewParams {
            outer_diameter: self.diameter,
            length: self.length,
            shaft_inner_diameter: self.shaft_inner_diameter,
            shaft_outer_diameter: self.shaft_outer_diameter,
            num_turns: self.turns,
            thickness_at_shaft: self.thickness_at_shaft,
            thickness_at_shaft_end: self.thickness_at_shaft_end,
            turn_direction: TurnDirection::from_flag(self.right_hand),
            segments: self.segments,
            shaft_segments: self.shaft_segments,
        })
    }
}
