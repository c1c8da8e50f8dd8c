use crate::depth_planner::plan_depths;
use crate::emitter::emit;
use crate::job::{NormalizedParameters, SurfacingParameters};
use crate::pass_planner::plan_passes;
use crate::stats::PlanSummary;
use facekit_core::Result;

/// A fully planned surfacing job: normalized parameters plus the depth and
/// pass lists the emitter walks.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfacingPlan {
    pub params: NormalizedParameters,
    pub depths: Vec<f64>,
    pub passes: Vec<f64>,
}

impl SurfacingPlan {
    /// Render the plan as G-code
    pub fn to_gcode(&self) -> Result<String> {
        emit(&self.params, &self.depths, &self.passes)
    }

    /// Motion counts, feed distance and estimated cutting time
    pub fn summary(&self) -> PlanSummary {
        PlanSummary::from_plan(self)
    }
}

/// Generator for surfacing (facing) G-Code
pub struct SurfacingGenerator {
    params: SurfacingParameters,
}

impl SurfacingGenerator {
    /// Create a new SurfacingGenerator with the given parameters
    pub fn new(params: SurfacingParameters) -> Self {
        Self { params }
    }

    /// Normalize units and plan depth levels and passes
    pub fn plan(&self) -> Result<SurfacingPlan> {
        let params = self.params.normalize()?;
        let depths = plan_depths(params.final_depth_mm, params.max_stepdown_mm)?;
        let passes = plan_passes(params.width_mm, params.stepover_mm)?;

        Ok(SurfacingPlan {
            params,
            depths,
            passes,
        })
    }

    /// Generate the G-Code for the surfacing operation
    pub fn generate(&self) -> Result<String> {
        self.plan()?.to_gcode()
    }
}
