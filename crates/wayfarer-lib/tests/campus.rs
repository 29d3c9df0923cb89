use std::io::Write;
use std::path::{Path, PathBuf};

use wayfarer_lib::{render_walk, CampusMap, Compass, Error};

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

#[test]
fn loads_fixture_campus() {
    let map = CampusMap::load(&fixtures_dir()).unwrap();
    let shorts: Vec<&str> = map
        .buildings()
        .map(|b| b.short_name.as_str())
        .collect();
    assert_eq!(shorts, ["CHL", "ENG", "GYM", "ISO", "LIB"]);
    assert_eq!(map.building("LIB").unwrap().long_name, "Main Library");
}

#[test]
fn walk_takes_the_cheaper_branch() {
    let map = CampusMap::load(&fixtures_dir()).unwrap();
    // LIB to ENG via the midpoint costs 456.155, via CHL costs 500.
    let plan = map.shortest_walk("LIB", "ENG").unwrap();
    assert_eq!(plan.step_count(), 2);
    assert_eq!(plan.steps[0].direction, Compass::East);
    assert_eq!(plan.steps[1].direction, Compass::South);
    assert!((plan.total_distance - 456.155).abs() < 1e-9);
}

#[test]
fn walk_to_same_building_has_no_steps() {
    let map = CampusMap::load(&fixtures_dir()).unwrap();
    let plan = map.shortest_walk("GYM", "GYM").unwrap();
    assert!(plan.steps.is_empty());
    assert_eq!(plan.total_distance, 0.0);
}

#[test]
fn isolated_building_is_unreachable() {
    let map = CampusMap::load(&fixtures_dir()).unwrap();
    let err = map.shortest_walk("LIB", "ISO").unwrap_err();
    assert!(matches!(err, Error::PathNotFound { .. }));
}

#[test]
fn unknown_building_suggests_close_names() {
    let map = CampusMap::load(&fixtures_dir()).unwrap();
    let err = map.shortest_walk("LIf", "ENG").unwrap_err();
    match err {
        Error::UnknownBuilding { name, suggestions } => {
            assert_eq!(name, "LIf");
            assert!(suggestions.contains(&"LIB".to_string()));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn rendered_walk_matches_narration_format() {
    let map = CampusMap::load(&fixtures_dir()).unwrap();
    let plan = map.shortest_walk("LIB", "ENG").unwrap();
    let text = render_walk(&plan);
    assert_eq!(
        text,
        "Path from Main Library to Engineering Hall:\n\
         \tWalk 206 feet E to (300, 150)\n\
         \tWalk 250 feet S to (300, 400)\n\
         Total distance: 456 feet\n"
    );
}

#[test]
fn missing_dataset_reports_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let err = CampusMap::load(dir.path()).unwrap_err();
    match err {
        Error::DatasetNotFound { path } => {
            assert!(path.ends_with("campus_buildings.tsv"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn malformed_building_row_names_the_line() {
    let dir = tempfile::tempdir().unwrap();
    let buildings = dir.path().join("campus_buildings.tsv");
    let paths = dir.path().join("campus_paths.tsv");
    let mut file = std::fs::File::create(&buildings).unwrap();
    writeln!(file, "LIB\tMain Library\t100\t100").unwrap();
    writeln!(file, "ENG\tEngineering Hall\t300\tnope").unwrap();
    std::fs::File::create(&paths).unwrap();

    let err = CampusMap::from_files(&buildings, &paths).unwrap_err();
    match err {
        Error::MalformedRecord { line, message, .. } => {
            assert_eq!(line, 2);
            assert!(message.contains("y coordinate"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn non_finite_building_coordinate_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let buildings = dir.path().join("campus_buildings.tsv");
    let paths = dir.path().join("campus_paths.tsv");
    std::fs::write(&buildings, "LIB\tMain Library\tNaN\t100\n").unwrap();
    std::fs::File::create(&paths).unwrap();

    let err = CampusMap::from_files(&buildings, &paths).unwrap_err();
    match err {
        Error::MalformedRecord { line, message, .. } => {
            assert_eq!(line, 1);
            assert!(message.contains("non-finite x coordinate"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn non_finite_segment_distance_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let buildings = dir.path().join("campus_buildings.tsv");
    let paths = dir.path().join("campus_paths.tsv");
    std::fs::write(&buildings, "LIB\tMain Library\t100\t100\n").unwrap();
    std::fs::write(&paths, "100,100\n\t300,150: inf\n").unwrap();

    let err = CampusMap::from_files(&buildings, &paths).unwrap_err();
    match err {
        Error::MalformedRecord { line, message, .. } => {
            assert_eq!(line, 2);
            assert!(message.contains("non-finite distance"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn non_finite_segment_endpoint_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let buildings = dir.path().join("campus_buildings.tsv");
    let paths = dir.path().join("campus_paths.tsv");
    std::fs::write(&buildings, "LIB\tMain Library\t100\t100\n").unwrap();
    std::fs::write(&paths, "100,100\n\t300,NaN: 206.155\n").unwrap();

    let err = CampusMap::from_files(&buildings, &paths).unwrap_err();
    match err {
        Error::MalformedRecord { line, message, .. } => {
            assert_eq!(line, 2);
            assert!(message.contains("non-finite y coordinate"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn segment_before_origin_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let buildings = dir.path().join("campus_buildings.tsv");
    let paths = dir.path().join("campus_paths.tsv");
    std::fs::write(&buildings, "LIB\tMain Library\t100\t100\n").unwrap();
    std::fs::write(&paths, "\t300,150: 206.155\n").unwrap();

    let err = CampusMap::from_files(&buildings, &paths).unwrap_err();
    match err {
        Error::MalformedRecord { line, message, .. } => {
            assert_eq!(line, 1);
            assert!(message.contains("origin"));
        }
        other => panic!("unexpected error: {other}"),
    }
}
