//! End-to-end tests: parameters in, STL text out.

use approx::assert_relative_eq;
use auger_mesh::export::{save_stl, write_stl};
use auger_mesh::primitives::{create_blade, create_ring};
use auger_mesh::{generate_conveyor_screw, ScrewParams, TurnDirection};

fn render(params: &ScrewParams) -> String {
    let mesh = generate_conveyor_screw(params).unwrap();
    let mut out = Vec::new();
    write_stl(&mesh, "conveyor_screw", &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn parse_triple(line: &str, keyword: &str) -> [f64; 3] {
    let rest = line.trim().strip_prefix(keyword).unwrap();
    let values: Vec<f64> = rest
        .split_whitespace()
        .map(|token| token.parse().unwrap())
        .collect();
    [values[0], values[1], values[2]]
}

#[test]
fn reference_screw_exports_expected_facets() {
    let text = render(&ScrewParams::default());

    let solids = text.lines().filter(|l| l.starts_with("solid ")).count();
    let ends = text.lines().filter(|l| l.starts_with("endsolid ")).count();
    assert_eq!((solids, ends), (1, 1));
    assert!(text.starts_with("solid conveyor_screw\n"));
    assert!(text.ends_with("endsolid conveyor_screw\n"));

    let facets = text.matches("facet normal").count();
    assert_eq!(facets, (8 * (3000 - 1) + 4) + 8000);
    assert_eq!(text.matches("      vertex ").count(), 3 * facets);
}

#[test]
fn exported_normals_are_unit_or_zero() {
    let params = ScrewParams {
        segments: 48,
        ..ScrewParams::default()
    };
    let text = render(&params);
    for line in text.lines().filter(|l| l.trim_start().starts_with("facet normal")) {
        let [x, y, z] = parse_triple(line, "facet normal");
        let length = (x * x + y * y + z * z).sqrt();
        assert!(length == 0.0 || (length - 1.0).abs() < 1e-5, "bad normal: {}", line);
    }
}

#[test]
fn exported_vertices_round_trip_within_tolerance() {
    let params = ScrewParams {
        segments: 16,
        num_turns: 1,
        ..ScrewParams::default()
    };
    let mesh = generate_conveyor_screw(&params).unwrap();
    let mut out = Vec::new();
    write_stl(&mesh, "s", &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    let written: Vec<[f64; 3]> = text
        .lines()
        .filter(|l| l.trim_start().starts_with("vertex"))
        .map(|l| parse_triple(l, "vertex"))
        .collect();
    assert_eq!(written.len(), 3 * mesh.triangle_count());

    for (index, corners) in written.chunks(3).enumerate() {
        let [a, b, c] = mesh.triangle(index);
        for (parsed, id) in corners.iter().zip([a, b, c]) {
            let v = mesh.vertex(id);
            assert_relative_eq!(parsed[0], v.x, epsilon = 1e-9, max_relative = 1e-6);
            assert_relative_eq!(parsed[1], v.y, epsilon = 1e-9, max_relative = 1e-6);
            assert_relative_eq!(parsed[2], v.z, epsilon = 1e-9, max_relative = 1e-6);
        }
    }
}

#[test]
fn export_is_deterministic() {
    let params = ScrewParams {
        segments: 64,
        turn_direction: TurnDirection::Right,
        ..ScrewParams::default()
    };
    assert_eq!(render(&params), render(&params));
}

#[test]
fn assembled_volume_is_sum_of_parts() {
    let params = ScrewParams {
        segments: 120,
        ..ScrewParams::default()
    };
    let blade = create_blade(&params.blade()).unwrap();
    let ring = create_ring(3.0, 9.0, params.length, 120).unwrap();
    let mesh = generate_conveyor_screw(&params).unwrap();
    assert_relative_eq!(
        mesh.signed_volume(),
        blade.signed_volume() + ring.signed_volume(),
        max_relative = 1e-9
    );
}

#[test]
fn params_file_drives_generation() {
    let json = r#"{
        "outer_diameter": 30.0,
        "length": 60.0,
        "num_turns": 2,
        "turn_direction": "right",
        "segments": 40,
        "shaft_segments": 24
    }"#;
    let params: ScrewParams = serde_json::from_str(json).unwrap();
    let mesh = generate_conveyor_screw(&params).unwrap();
    assert_eq!(mesh.triangle_count(), (8 * (80 - 1) + 4) + 8 * 24);

    let round_trip: ScrewParams =
        serde_json::from_str(&serde_json::to_string(&params).unwrap()).unwrap();
    assert_eq!(round_trip, params);
}

#[test]
fn save_replaces_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("screw.stl");
    std::fs::write(&path, "stale").unwrap();

    let params = ScrewParams {
        segments: 8,
        ..ScrewParams::default()
    };
    let mesh = generate_conveyor_screw(&params).unwrap();
    let stats = save_stl(&mesh, "screw", &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text.matches("endfacet").count(), stats.facets);
    assert_eq!(stats.degenerate, 0);
}
