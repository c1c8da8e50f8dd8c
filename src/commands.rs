//! Command handlers behind the CLI.
//!
//! Each handler loads a job file, runs the planner and reports through
//! `tracing`. File errors carry the offending path as context.

use anyhow::{Context, Result};
use facekit_camtools::{PlanSummary, SurfacingGenerator, SurfacingPlan};
use facekit_settings::JobConfig;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Load a job file and plan it
pub fn plan_job(config_path: &Path) -> Result<(JobConfig, SurfacingPlan)> {
    let config = JobConfig::load_from_file(config_path)
        .with_context(|| format!("Failed to load job {}", config_path.display()))?;
    let params = config.to_job_parameters()?;
    let plan = SurfacingGenerator::new(params)
        .plan()
        .with_context(|| format!("Invalid job {}", config_path.display()))?;
    debug!(
        "Planned {} depth levels and {} passes",
        plan.depths.len(),
        plan.passes.len()
    );
    Ok((config, plan))
}

/// Render the program for a job file without writing it anywhere
pub fn render(config_path: &Path) -> Result<String> {
    let (_, plan) = plan_job(config_path)?;
    Ok(plan.to_gcode()?)
}

/// Generate `<program_name>.nc` in `output_dir` and return its path
pub fn generate(config_path: &Path, output_dir: &Path) -> Result<PathBuf> {
    let (config, plan) = plan_job(config_path)?;
    let gcode = plan.to_gcode()?;

    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;
    let output = output_dir.join(config.output_file_name());
    std::fs::write(&output, &gcode)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    info!("Wrote {} ({})", output.display(), plan.summary());
    Ok(output)
}

/// Plan a job file and return its statistics
pub fn summarize(config_path: &Path) -> Result<PlanSummary> {
    let (_, plan) = plan_job(config_path)?;
    Ok(plan.summary())
}

/// Write a default job file; the format follows the extension
pub fn init_job(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
    }
    JobConfig::default()
        .save_to_file(path)
        .with_context(|| format!("Failed to write job {}", path.display()))?;
    info!("Created job file {}", path.display());
    Ok(())
}
