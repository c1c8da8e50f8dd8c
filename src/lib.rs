//! # FaceKit
//!
//! Surfacing (facing) toolpath generator for CNC mills. Converts a rectangular
//! face, a target depth, a stepover and feed rates into a millimeter G-code
//! program that sweeps the face in a serpentine pattern, one depth level at a
//! time.
//!
//! ## Architecture
//!
//! FaceKit is organized as a workspace with multiple crates:
//!
//! 1. **facekit-core** - Units, unit normalization, error types
//! 2. **facekit-camtools** - Depth and pass planning, G-code emission
//! 3. **facekit-settings** - JSON/TOML job files
//! 4. **facekit** - Logging setup, command handlers and the CLI binary

pub mod commands;

pub use facekit_camtools::{
    PlanSummary, SurfacingGenerator, SurfacingParameters, SurfacingPlan, SweepDirection,
};
pub use facekit_core::{Error, GeometryUnit, RateUnit, Result};
pub use facekit_settings::{JobConfig, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output to stderr, so programs printed to stdout stay clean
/// - RUST_LOG environment variable support
/// - INFO as the default level
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
