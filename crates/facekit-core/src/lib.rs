//! # FaceKit Core
//!
//! Core types shared by the FaceKit crates: the geometry and feed-rate unit
//! enumerations, the unit normalizer, and the planning error taxonomy.

pub mod error;
pub mod units;

pub use error::{require_positive, Error, Result};
pub use units::{to_mm, to_mm_per_min, GeometryUnit, RateUnit, MM_PER_INCH};
