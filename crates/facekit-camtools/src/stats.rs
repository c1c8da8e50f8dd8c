//! Plan statistics
//!
//! Counts and distances derived from a surfacing plan. Rapid moves are not
//! included in distances or time.

use crate::surfacing::SurfacingPlan;
use serde::Serialize;
use std::f64::consts::PI;
use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanSummary {
    pub depth_levels: usize,
    pub passes_per_level: usize,
    /// Linear X sweeps over the whole program
    pub sweeps: usize,
    /// Semicircular U-turns over the whole program
    pub arcs: usize,
    /// Feed distance of the vertical plunges (mm)
    pub plunge_distance_mm: f64,
    /// Feed distance of sweeps and arcs (mm)
    pub cut_distance_mm: f64,
    /// Feed time at the programmed rates
    pub estimated_time: Duration,
}

impl PlanSummary {
    pub fn from_plan(plan: &SurfacingPlan) -> Self {
        let p = &plan.params;
        let levels = plan.depths.len();
        let passes = plan.passes.len();
        let arcs_per_level = passes.saturating_sub(1);

        let plunge_distance_mm: f64 = plan
            .depths
            .iter()
            .map(|z| p.retract_height_mm - z)
            .sum();

        // each U-turn is half a circle of diameter dy, so a level's arcs sum to pi * span / 2
        let span = match (plan.passes.first(), plan.passes.last()) {
            (Some(first), Some(last)) => last - first,
            _ => 0.0,
        };
        let per_level = passes as f64 * p.length_mm + PI * span / 2.0;
        let cut_distance_mm = per_level * levels as f64;

        let minutes =
            plunge_distance_mm / p.plunge_mm_per_min + cut_distance_mm / p.feed_mm_per_min;

        Self {
            depth_levels: levels,
            passes_per_level: passes,
            sweeps: levels * passes,
            arcs: levels * arcs_per_level,
            plunge_distance_mm,
            cut_distance_mm,
            estimated_time: Duration::try_from_secs_f64(minutes * 60.0).unwrap_or(Duration::MAX),
        }
    }
}

impl fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.estimated_time.as_secs();
        write!(
            f,
            "{} levels x {} passes, {} arcs, {:.1} mm cut, ~{}m{:02}s",
            self.depth_levels,
            self.passes_per_level,
            self.arcs,
            self.cut_distance_mm + self.plunge_distance_mm,
            secs / 60,
            secs % 60
        )
    }
}
