//! Surfacing job configuration
//!
//! A job file describes one facing operation. JSON and TOML are supported,
//! chosen by file extension. Unit fields are kept as strings here and parsed
//! during validation so an unknown alias is reported against its key.

use crate::error::{SettingsError, SettingsResult};
use facekit_camtools::{SurfacingParameters, DEFAULT_PROGRAM_NAME, DEFAULT_WORK_OFFSET};
use facekit_core::{to_mm, GeometryUnit, RateUnit};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

fn default_geometry_unit() -> String {
    GeometryUnit::default().to_string()
}

fn default_rate_unit() -> String {
    RateUnit::default().to_string()
}

fn default_retract_height() -> f64 {
    5.0
}

fn default_program_name() -> String {
    DEFAULT_PROGRAM_NAME.to_string()
}

fn default_work_offset() -> String {
    DEFAULT_WORK_OFFSET.to_string()
}

/// Job file contents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JobConfig {
    pub width: f64,
    pub length: f64,
    pub final_depth: f64,
    pub max_stepdown: f64,
    pub stepover: f64,
    /// "mm", "millimeter(s)", "in", "inch(es)"
    #[serde(default = "default_geometry_unit")]
    pub geometry_unit: String,
    pub feed_rate: f64,
    pub plunge_rate: f64,
    /// "mm/min", "in/min", "inch/min"
    #[serde(default = "default_rate_unit")]
    pub rate_unit: String,
    /// Zero or negative disables spindle control
    #[serde(default)]
    pub spindle_speed_rpm: f64,
    /// Safe Z, in the geometry unit like the other dimensions
    #[serde(default = "default_retract_height")]
    pub retract_height: f64,
    #[serde(default = "default_program_name")]
    pub program_name: String,
    #[serde(default = "default_work_offset")]
    pub work_offset_code: String,
}

impl Default for JobConfig {
    fn default() -> Self {
        Self::from(&SurfacingParameters::default())
    }
}

impl From<&SurfacingParameters> for JobConfig {
    fn from(p: &SurfacingParameters) -> Self {
        Self {
            width: p.width,
            length: p.length,
            final_depth: p.final_depth,
            max_stepdown: p.max_stepdown,
            stepover: p.stepover,
            geometry_unit: p.geometry_unit.to_string(),
            feed_rate: p.feed_rate,
            plunge_rate: p.plunge_rate,
            rate_unit: p.rate_unit.to_string(),
            spindle_speed_rpm: p.spindle_speed_rpm,
            retract_height: p.retract_height_mm / p.geometry_unit.mm_factor(),
            program_name: p.program_name.clone(),
            work_offset_code: p.work_offset_code.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    Json,
    Toml,
}

impl FileFormat {
    fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            other => Err(SettingsError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

impl JobConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a job from JSON text
    pub fn from_json(content: &str) -> SettingsResult<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a job from TOML text
    pub fn from_toml(content: &str) -> SettingsResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a job from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = FileFormat::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        debug!("Loading {:?} job file {}", format, path.display());
        match format {
            FileFormat::Json => Self::from_json(&content),
            FileFormat::Toml => Self::from_toml(&content),
        }
    }

    /// Save the job to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match FileFormat::from_path(path)? {
            FileFormat::Json => serde_json::to_string_pretty(self)?,
            FileFormat::Toml => toml::to_string_pretty(self)?,
        };

        std::fs::write(path, content).map_err(|e| {
            SettingsError::SaveError(format!("{}: {}", path.display(), e))
        })?;
        debug!("Saved job file {}", path.display());

        Ok(())
    }

    /// Validate labels and unit names.
    ///
    /// Numeric ranges are left to the planner, which checks them after unit
    /// normalization.
    pub fn validate(&self) -> SettingsResult<()> {
        if self.program_name.trim().is_empty() {
            return Err(SettingsError::InvalidSetting {
                key: "program_name".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if self.work_offset_code.trim().is_empty() {
            return Err(SettingsError::InvalidSetting {
                key: "work_offset_code".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        self.geometry_unit.parse::<GeometryUnit>()?;
        self.rate_unit.parse::<RateUnit>()?;
        Ok(())
    }

    /// Convert into typed planner parameters
    pub fn to_job_parameters(&self) -> SettingsResult<SurfacingParameters> {
        let geometry_unit: GeometryUnit = self.geometry_unit.parse()?;
        Ok(SurfacingParameters {
            width: self.width,
            length: self.length,
            final_depth: self.final_depth,
            max_stepdown: self.max_stepdown,
            stepover: self.stepover,
            geometry_unit,
            feed_rate: self.feed_rate,
            plunge_rate: self.plunge_rate,
            rate_unit: self.rate_unit.parse()?,
            spindle_speed_rpm: self.spindle_speed_rpm,
            retract_height_mm: to_mm(self.retract_height, geometry_unit),
            program_name: self.program_name.trim().to_string(),
            work_offset_code: self.work_offset_code.trim().to_string(),
        })
    }

    /// File name the program is written to (`<program_name>.nc`)
    pub fn output_file_name(&self) -> String {
        format!("{}.nc", self.program_name.trim())
    }
}
