use facekit_core::{require_positive, to_mm, to_mm_per_min, GeometryUnit, RateUnit, Result};
use serde::{Deserialize, Serialize};

/// Program label used when the caller does not name the program
pub const DEFAULT_PROGRAM_NAME: &str = "surfacing";
/// Work coordinate system selected when the caller does not choose one
pub const DEFAULT_WORK_OFFSET: &str = "G54";

/// Parameters for a surfacing (facing) job, in caller units.
///
/// XY origin is the lower-left corner of the face: X spans `[0, length]` and
/// Y spans `[0, width]`. Z=0 is the top surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfacingParameters {
    /// Face extent along Y
    pub width: f64,
    /// Face extent along X (sweep direction)
    pub length: f64,
    /// Total depth to remove
    pub final_depth: f64,
    /// Deepest cut taken in a single level
    pub max_stepdown: f64,
    /// Y distance between adjacent passes
    pub stepover: f64,
    /// Unit of the five geometry fields above
    pub geometry_unit: GeometryUnit,
    /// Sweep feed rate
    pub feed_rate: f64,
    /// Vertical plunge feed rate
    pub plunge_rate: f64,
    /// Unit of both feed rates
    pub rate_unit: RateUnit,
    /// Spindle speed (RPM). Zero or negative omits M3/M5.
    pub spindle_speed_rpm: f64,
    /// Safe Z for rapids and spindle start, always in millimeters
    pub retract_height_mm: f64,
    /// Copied into the leading program comment
    pub program_name: String,
    /// Work offset code emitted in the header (e.g. G54)
    pub work_offset_code: String,
}

impl Default for SurfacingParameters {
    fn default() -> Self {
        Self {
            width: 100.0,
            length: 100.0,
            final_depth: 1.0,
            max_stepdown: 0.5,
            stepover: 10.0,
            geometry_unit: GeometryUnit::Millimeter,
            feed_rate: 1500.0,
            plunge_rate: 300.0,
            rate_unit: RateUnit::MmPerMin,
            spindle_speed_rpm: 0.0,
            retract_height_mm: 5.0,
            program_name: DEFAULT_PROGRAM_NAME.to_string(),
            work_offset_code: DEFAULT_WORK_OFFSET.to_string(),
        }
    }
}

impl SurfacingParameters {
    /// Convert every field to millimeters and mm/min and check positivity.
    pub fn normalize(&self) -> Result<NormalizedParameters> {
        let geom = |v: f64| to_mm(v, self.geometry_unit);
        let rate = |v: f64| to_mm_per_min(v, self.rate_unit);

        let normalized = NormalizedParameters {
            width_mm: geom(self.width),
            length_mm: geom(self.length),
            final_depth_mm: geom(self.final_depth),
            max_stepdown_mm: geom(self.max_stepdown),
            stepover_mm: geom(self.stepover),
            feed_mm_per_min: rate(self.feed_rate),
            plunge_mm_per_min: rate(self.plunge_rate),
            spindle_speed_rpm: self.spindle_speed_rpm,
            retract_height_mm: self.retract_height_mm,
            program_name: self.program_name.clone(),
            work_offset_code: self.work_offset_code.clone(),
        };
        normalized.validate()?;
        Ok(normalized)
    }
}

/// Job parameters in the internal unit system (mm, mm/min).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedParameters {
    pub width_mm: f64,
    pub length_mm: f64,
    pub final_depth_mm: f64,
    pub max_stepdown_mm: f64,
    pub stepover_mm: f64,
    pub feed_mm_per_min: f64,
    pub plunge_mm_per_min: f64,
    pub spindle_speed_rpm: f64,
    pub retract_height_mm: f64,
    pub program_name: String,
    pub work_offset_code: String,
}

impl NormalizedParameters {
    /// Fail on the first quantity that is not strictly positive.
    pub fn validate(&self) -> Result<()> {
        require_positive("width", self.width_mm)?;
        require_positive("length", self.length_mm)?;
        require_positive("final_depth", self.final_depth_mm)?;
        require_positive("max_stepdown", self.max_stepdown_mm)?;
        require_positive("stepover", self.stepover_mm)?;
        require_positive("feed_rate", self.feed_mm_per_min)?;
        require_positive("plunge_rate", self.plunge_mm_per_min)?;
        require_positive("retract_height", self.retract_height_mm)?;
        Ok(())
    }

    /// Whether M3/M5 are emitted
    pub fn spindle_enabled(&self) -> bool {
        self.spindle_speed_rpm > 0.0
    }
}
