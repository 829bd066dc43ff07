//! # Config Crate
//!
//! Centralized configuration constants for the conveyor screw generator.
//! Default screw dimensions, tessellation resolution, precision values and
//! export settings are defined here so the mesh and CLI crates never carry
//! their own literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_SEGMENTS, MIN_SEGMENTS};
//!
//! let requested = 0;
//! let segments = if requested >= MIN_SEGMENTS { requested } else { DEFAULT_SEGMENTS };
//! assert_eq!(segments, DEFAULT_SEGMENTS);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Reproducible Defaults**: The default screw is the reference auger
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
