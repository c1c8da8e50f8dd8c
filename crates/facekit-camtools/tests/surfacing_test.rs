use facekit_camtools::surfacing::SurfacingGenerator;
use facekit_camtools::SurfacingParameters;
use facekit_core::{GeometryUnit, RateUnit};

fn ten_inch_face() -> SurfacingParameters {
    SurfacingParameters {
        width: 10.0,
        length: 10.0,
        final_depth: 0.1,
        max_stepdown: 0.05,
        stepover: 2.0,
        geometry_unit: GeometryUnit::Inch,
        feed_rate: 80.0,
        plunge_rate: 15.0,
        rate_unit: RateUnit::InPerMin,
        spindle_speed_rpm: 12000.0,
        retract_height_mm: 5.0,
        program_name: "example_10x10in_surface".to_string(),
        ..Default::default()
    }
}

fn z_of(line: &str) -> Option<f64> {
    let start = line.find('Z')?;
    line[start + 1..]
        .split_whitespace()
        .next()
        .and_then(|v| v.parse().ok())
}

#[test]
fn test_ten_inch_face_end_to_end() {
    let gcode = SurfacingGenerator::new(ten_inch_face()).generate().unwrap();

    assert!(gcode.starts_with("(example_10x10in_surface)\n"));
    assert_eq!(gcode.matches("(Depth ").count(), 2);
    assert!(gcode.contains("(Depth -1.270 mm)"));
    assert!(gcode.contains("(Depth -2.540 mm)"));
    assert!(gcode.contains("G1 Z-1.270 F381.0"));
    assert!(gcode.contains("G1 Z-2.540 F381.0"));

    let sweeps = gcode.lines().filter(|l| l.starts_with("G1 X")).count();
    let ccw = gcode.lines().filter(|l| l.starts_with("G3 ")).count();
    let cw = gcode.lines().filter(|l| l.starts_with("G2 ")).count();
    assert_eq!(sweeps, 12);
    assert_eq!(ccw + cw, 10);
    assert_eq!(ccw, 6);
    assert_eq!(cw, 4);

    assert!(gcode.contains("G1 X254.000 F2032.0"));
    assert!(gcode.contains("G3 X254.000 Y50.800 I0.000 J25.400"));
    assert!(gcode.contains("G2 X0.000 Y101.600 I0.000 J25.400"));
    assert!(gcode.contains("G3 X254.000 Y254.000 I0.000 J25.400"));

    assert_eq!(gcode.lines().filter(|l| *l == "M3 S12000").count(), 1);
    assert_eq!(gcode.lines().filter(|l| *l == "M5").count(), 1);
    assert!(gcode.ends_with("G0 Z5.000\nM5\nM30\n"));
}

#[test]
fn test_first_command_is_absolute_mode() {
    let gcode = SurfacingGenerator::new(ten_inch_face()).generate().unwrap();
    let first = gcode
        .lines()
        .find(|l| !l.is_empty() && !l.starts_with('('))
        .unwrap();
    assert_eq!(first, "G90");
}

#[test]
fn test_cut_depths_never_rise() {
    let params = SurfacingParameters {
        final_depth: 2.3,
        max_stepdown: 0.4,
        ..Default::default()
    };
    let gcode = SurfacingGenerator::new(params).generate().unwrap();

    let plunges: Vec<f64> = gcode
        .lines()
        .filter(|l| l.starts_with("G1 Z"))
        .filter_map(z_of)
        .collect();
    assert_eq!(plunges.len(), 6);
    for pair in plunges.windows(2) {
        assert!(pair[1] <= pair[0]);
    }
    assert_eq!(*plunges.last().unwrap(), -2.3);
}

#[test]
fn test_every_arc_carries_center_offsets() {
    let gcode = SurfacingGenerator::new(ten_inch_face()).generate().unwrap();
    for line in gcode.lines().filter(|l| l.starts_with("G2 ") || l.starts_with("G3 ")) {
        assert!(line.contains(" I0.000 J"), "{}", line);
    }
}

#[test]
fn test_spindle_disabled() {
    let params = SurfacingParameters {
        spindle_speed_rpm: 0.0,
        ..ten_inch_face()
    };
    let gcode = SurfacingGenerator::new(params).generate().unwrap();
    assert!(!gcode.lines().any(|l| l.starts_with("M3")));
    assert!(!gcode.lines().any(|l| l == "M5"));
    assert!(gcode.ends_with("M30\n"));
}

#[test]
fn test_single_interval_has_one_arc() {
    let params = SurfacingParameters {
        width: 10.0,
        stepover: 10.0,
        final_depth: 1.0,
        max_stepdown: 1.0,
        ..Default::default()
    };
    let gcode = SurfacingGenerator::new(params).generate().unwrap();
    let arcs: Vec<&str> = gcode
        .lines()
        .filter(|l| l.starts_with("G2 ") || l.starts_with("G3 "))
        .collect();
    assert_eq!(arcs, vec!["G3 X100.000 Y10.000 I0.000 J5.000"]);
}

#[test]
fn test_output_is_deterministic() {
    let first = SurfacingGenerator::new(ten_inch_face()).generate().unwrap();
    let second = SurfacingGenerator::new(ten_inch_face()).generate().unwrap();
    assert_eq!(first, second);
}
