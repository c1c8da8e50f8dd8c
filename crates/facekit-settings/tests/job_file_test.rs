use facekit_camtools::SurfacingGenerator;
use facekit_settings::{JobConfig, SettingsError};
use tempfile::tempdir;

fn inch_job() -> JobConfig {
    JobConfig {
        width: 10.0,
        length: 10.0,
        final_depth: 0.1,
        max_stepdown: 0.05,
        stepover: 2.0,
        geometry_unit: "inch".to_string(),
        feed_rate: 80.0,
        plunge_rate: 15.0,
        rate_unit: "in/min".to_string(),
        spindle_speed_rpm: 12000.0,
        retract_height: 0.2,
        program_name: "spoilboard".to_string(),
        work_offset_code: "G54".to_string(),
    }
}

#[test]
fn test_toml_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("job.toml");

    inch_job().save_to_file(&path).unwrap();
    let loaded = JobConfig::load_from_file(&path).unwrap();
    assert_eq!(loaded, inch_job());
}

#[test]
fn test_json_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("job.json");

    inch_job().save_to_file(&path).unwrap();
    let loaded = JobConfig::load_from_file(&path).unwrap();
    assert_eq!(loaded, inch_job());
}

#[test]
fn test_loaded_job_generates_program() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("job.toml");
    inch_job().save_to_file(&path).unwrap();

    let config = JobConfig::load_from_file(&path).unwrap();
    let params = config.to_job_parameters().unwrap();
    let gcode = SurfacingGenerator::new(params).generate().unwrap();

    assert!(gcode.starts_with("(spoilboard)\n"));
    // 0.2 in clearance
    assert!(gcode.contains("\nG0 Z5.080\n"));
    assert!(!gcode.contains("Z0.200"));
    assert_eq!(gcode.matches("(Depth ").count(), 2);
    assert!(gcode.ends_with("M30\n"));
}

#[test]
fn test_missing_file() {
    let dir = tempdir().unwrap();
    let result = JobConfig::load_from_file(&dir.path().join("absent.toml"));
    assert!(matches!(result, Err(SettingsError::LoadError(_))));
}

#[test]
fn test_unsupported_extension() {
    let dir = tempdir().unwrap();
    let result = inch_job().save_to_file(&dir.path().join("job.yaml"));
    assert!(matches!(result, Err(SettingsError::UnsupportedFormat(_))));
}
