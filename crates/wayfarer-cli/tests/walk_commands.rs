use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures")
        .canonicalize()
        .expect("fixture directory present")
}

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("wayfarer");
    cmd.env("RUST_LOG", "error")
        .arg("--data-dir")
        .arg(fixtures_dir());
    cmd
}

#[test]
fn buildings_lists_short_and_long_names() {
    let mut cmd = cli();
    cmd.arg("buildings");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("LIB\tMain Library"))
        .stdout(predicate::str::contains("ENG\tEngineering Hall"));
}

#[test]
fn walk_narrates_the_route() {
    let mut cmd = cli();
    cmd.arg("walk").arg("--from").arg("LIB").arg("--to").arg("ENG");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Path from Main Library to Engineering Hall:",
        ))
        .stdout(predicate::str::contains("Walk 206 feet E to (300, 150)"))
        .stdout(predicate::str::contains("Total distance: 456 feet"));
}

#[test]
fn walk_emits_json_when_requested() {
    let mut cmd = cli();
    cmd.arg("--format")
        .arg("json")
        .arg("walk")
        .arg("--from")
        .arg("LIB")
        .arg("--to")
        .arg("ENG");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"total_distance\""))
        .stdout(predicate::str::contains("\"Engineering Hall\""));
}

#[test]
fn unknown_building_error_suggests_alternatives() {
    let mut cmd = cli();
    cmd.arg("walk").arg("--from").arg("LIf").arg("--to").arg("ENG");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unknown building: LIf"))
        .stderr(predicate::str::contains("LIB"));
}

#[test]
fn unreachable_building_reports_no_path() {
    let mut cmd = cli();
    cmd.arg("walk").arg("--from").arg("LIB").arg("--to").arg("ISO");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("no path found between LIB and ISO"));
}

#[test]
fn missing_dataset_directory_is_reported() {
    let temp_dir = tempfile::tempdir().expect("create temp dir");
    let mut cmd = cargo_bin_cmd!("wayfarer");
    cmd.env("RUST_LOG", "error")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .arg("buildings");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("failed to load campus data"))
        .stderr(predicate::str::contains("dataset not found"));
}
