//! # FaceKit CAM Tools
//!
//! Toolpath planning and G-Code emission for surfacing (facing) a rectangular
//! stock face on a CNC mill.
//!
//! ## Pipeline
//!
//! - **Job**: caller parameters and their millimeter normalization
//! - **Depth Planner**: Z levels limited by the maximum stepdown
//! - **Pass Planner**: Y offsets limited by the stepover
//! - **Emitter**: serpentine sweeps joined by arc U-turns, assembled into a program
//! - **Surfacing**: generator that runs the whole pipeline
//! - **Stats**: counts, feed distance and estimated time of a plan

pub mod depth_planner;
pub mod emitter;
pub mod job;
pub mod pass_planner;
pub mod stats;
pub mod surfacing;

pub use depth_planner::plan_depths;
pub use emitter::{emit, SweepDirection};
pub use job::{
    NormalizedParameters, SurfacingParameters, DEFAULT_PROGRAM_NAME, DEFAULT_WORK_OFFSET,
};
pub use pass_planner::plan_passes;
pub use stats::PlanSummary;
pub use surfacing::{SurfacingGenerator, SurfacingPlan};
