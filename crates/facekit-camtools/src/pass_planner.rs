//! Stepover (pass) planning
//!
//! Produces the Y offsets of the serpentine sweeps across the face. The same
//! pass list is reused for every depth level.

use facekit_core::{require_positive, Error, Result};

/// Two passes closer than this are treated as the same pass.
pub const PASS_TOLERANCE: f64 = 1e-9;

/// Upper bound on the number of passes in one depth level.
pub const MAX_PASSES: usize = 100_000;

/// Plan the Y offset of every pass across `width_mm`.
///
/// The first pass is at Y=0 and the last at exactly `width_mm`. Intermediate
/// passes are `stepover_mm` apart; the final interval may be narrower when the
/// stepover does not divide the width.
pub fn plan_passes(width_mm: f64, stepover_mm: f64) -> Result<Vec<f64>> {
    require_positive("width", width_mm)?;
    require_positive("stepover", stepover_mm)?;

    let ratio = width_mm / stepover_mm;
    let intervals = ratio.ceil();
    if intervals >= MAX_PASSES as f64 {
        return Err(Error::invalid_dimension("width/stepover", ratio));
    }
    let count = (intervals as usize)
        .checked_add(1)
        .ok_or_else(|| Error::invalid_dimension("width/stepover", ratio))?;
    let mut passes: Vec<f64> = Vec::with_capacity(count);

    for i in 0..count {
        let y = (i as f64 * stepover_mm).min(width_mm);
        let planned = passes.len();
        match passes.last_mut() {
            // i * stepover rounding onto the clamp yields a duplicate edge pass
            Some(last) if planned > 1 && y - *last <= PASS_TOLERANCE => *last = y,
            _ => passes.push(y),
        }
    }

    Ok(passes)
}
