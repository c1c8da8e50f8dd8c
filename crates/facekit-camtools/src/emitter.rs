//! Serpentine toolpath emission
//!
//! Walks every depth level and sweeps the face along X, one pass per planned
//! Y offset. Adjacent passes are joined by a 180 degree arc at the end of the
//! sweep so the tool never lifts inside a level.
//!
//! Output dialect is fixed: absolute positioning, millimeters, XY plane,
//! arcs by I/J centre offset.

use crate::job::NormalizedParameters;
use crate::pass_planner::PASS_TOLERANCE;
use facekit_core::{Error, Result};

pub const ABSOLUTE_MODE: &str = "G90";
pub const MILLIMETER_MODE: &str = "G21";
pub const XY_PLANE: &str = "G17";
pub const CONTINUOUS_MODE: &str = "G64";
pub const SPINDLE_ON: &str = "M3";
pub const SPINDLE_OFF: &str = "M5";
pub const PROGRAM_END: &str = "M30";

/// Sweep direction along X
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepDirection {
    /// X increasing, from 0 to length
    Forward,
    /// X decreasing, from length to 0
    Reverse,
}

impl SweepDirection {
    /// Passes alternate starting with `Forward` on pass 0.
    pub fn for_pass(index: usize) -> Self {
        if index % 2 == 0 {
            Self::Forward
        } else {
            Self::Reverse
        }
    }

    /// X coordinate the sweep finishes at
    pub fn end_x(self, length_mm: f64) -> f64 {
        match self {
            Self::Forward => length_mm,
            Self::Reverse => 0.0,
        }
    }

    /// Arc word for the U-turn that follows a sweep in this direction.
    ///
    /// Turning left off a forward sweep is counter-clockwise (G3); turning
    /// right off a reverse sweep is clockwise (G2). Both bulge outside the
    /// face.
    pub fn turn_code(self) -> &'static str {
        match self {
            Self::Forward => "G3",
            Self::Reverse => "G2",
        }
    }
}

/// Emit the complete program for the planned levels and passes.
///
/// Everything is validated before the first line is written; on error no
/// partial program is produced.
pub fn emit(params: &NormalizedParameters, depths: &[f64], passes: &[f64]) -> Result<String> {
    if depths.is_empty() {
        return Err(Error::EmptyPlan("no depth levels".to_string()));
    }
    if passes.is_empty() {
        return Err(Error::EmptyPlan("no passes".to_string()));
    }
    params.validate()?;
    for pair in passes.windows(2) {
        let dy = pair[1] - pair[0];
        if dy <= PASS_TOLERANCE {
            return Err(Error::invalid_dimension("pass interval", dy));
        }
    }

    let retract = params.retract_height_mm;
    let feed = params.feed_mm_per_min;
    let mut out: Vec<String> = Vec::new();

    // Header
    out.push(format!("({})", params.program_name));
    out.push(ABSOLUTE_MODE.to_string());
    out.push(MILLIMETER_MODE.to_string());
    out.push(XY_PLANE.to_string());
    out.push(params.work_offset_code.clone());
    out.push(CONTINUOUS_MODE.to_string());
    out.push(String::new());

    out.push(format!("G0 Z{:.3}", retract));
    if params.spindle_enabled() {
        out.push(format!("{} S{:.0}", SPINDLE_ON, params.spindle_speed_rpm));
    }
    out.push(String::new());

    for &z in depths {
        out.push(format!("(Depth {:.3} mm)", z));
        out.push("G0 X0.000 Y0.000".to_string());
        out.push(format!("G0 Z{:.3}", retract));
        out.push(format!("G1 Z{:.3} F{:.1}", z, params.plunge_mm_per_min));

        for (i, &y) in passes.iter().enumerate() {
            let direction = SweepDirection::for_pass(i);
            let x = direction.end_x(params.length_mm);
            out.push(format!("G1 X{:.3} F{:.1}", x, feed));

            if let Some(&y_next) = passes.get(i + 1) {
                let radius = (y_next - y) / 2.0;
                out.push(format!(
                    "{} X{:.3} Y{:.3} I0.000 J{:.3}",
                    direction.turn_code(),
                    x,
                    y_next,
                    radius
                ));
            }
        }

        out.push(format!("G0 Z{:.3}", retract));
        out.push(String::new());
    }

    // Footer
    out.push(format!("G0 Z{:.3}", retract));
    if params.spindle_enabled() {
        out.push(SPINDLE_OFF.to_string());
    }
    out.push(PROGRAM_END.to_string());
    out.push(String::new());

    Ok(out.join("\n"))
}
