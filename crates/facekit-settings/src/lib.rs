//! FaceKit Settings Crate
//!
//! Surfacing job files: serde-backed JSON/TOML loading and saving, defaults,
//! validation, and conversion into planner parameters.

pub mod config;
pub mod error;

pub use config::JobConfig;
pub use error::{SettingsError, SettingsResult};
