//! Depth planning
//!
//! Splits a total cut depth into absolute Z levels no further apart than the
//! maximum stepdown. Z=0 is the top surface; every level is negative.

use facekit_core::{require_positive, Error, Result};

/// Absolute tolerance used to decide that a level has reached the target.
pub const DEPTH_TOLERANCE: f64 = 1e-9;

/// Upper bound on the number of depth levels in one program.
pub const MAX_DEPTH_LEVELS: usize = 10_000;

/// Plan the Z levels for a facing operation.
///
/// The returned levels are strictly decreasing. The last one is exactly
/// `-final_depth_mm`, and no level lies below it.
pub fn plan_depths(final_depth_mm: f64, max_stepdown_mm: f64) -> Result<Vec<f64>> {
    require_positive("final_depth", final_depth_mm)?;
    require_positive("max_stepdown", max_stepdown_mm)?;

    let ratio = final_depth_mm / max_stepdown_mm;
    if ratio.ceil() > MAX_DEPTH_LEVELS as f64 {
        return Err(Error::invalid_dimension("final_depth/max_stepdown", ratio));
    }

    let target = -final_depth_mm;
    let mut depths = Vec::with_capacity(ratio.ceil() as usize);
    let mut z = 0.0;

    while z > target && depths.len() <= MAX_DEPTH_LEVELS {
        let mut next = z - max_stepdown_mm;
        if next - target <= DEPTH_TOLERANCE {
            next = target;
        }
        depths.push(next);
        z = next;
    }

    Ok(depths)
}
