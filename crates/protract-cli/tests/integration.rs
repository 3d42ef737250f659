//! Integration tests for protract CLI commands.
//!
//! These tests run the actual binary and verify end-to-end behavior.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::Command;

/// Get the path to the protract binary from the workspace root.
fn binary_path() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.pop(); // Go up from protract-cli to crates
    path.pop(); // Go up from crates to repo root

    // Try release first, then debug
    let release = path.join("target/release/protract");
    if release.exists() {
        return release;
    }
    path.join("target/debug/protract")
}

/// A state-file path unique to this test process.
fn temp_state_path(name: &str) -> PathBuf {
    env::temp_dir().join(format!("protract-it-{}-{}.json", name, std::process::id()))
}

#[test]
fn help_shows_commands() {
    let output = Command::new(binary_path())
        .arg("help")
        .output()
        .expect("Failed to execute command");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("input"), "Should mention input command");
    assert!(stderr.contains("render"), "Should mention render command");
    assert!(stderr.contains("angles"), "Should mention angles command");
}

#[test]
fn input_writes_default_state() {
    let state = temp_state_path("defaults");

    let output = Command::new(binary_path())
        .args(["input", "--state", state.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let contents = fs::read_to_string(&state).expect("state file should exist");
    let _ = fs::remove_file(&state);

    // Documented defaults: (100,100), (400,100), (250,350)
    let record: serde_json::Value = serde_json::from_str(&contents).expect("state should be JSON");
    let points = record["points"].as_array().expect("points array");
    assert_eq!(points.len(), 3);
    assert_eq!(points[0]["x"].as_f64(), Some(100.0));
    assert_eq!(points[1]["x"].as_f64(), Some(400.0));
    assert_eq!(points[2]["y"].as_f64(), Some(350.0));
}

#[test]
fn input_defaults_bad_fields_to_zero() {
    let state = temp_state_path("badfields");

    let output = Command::new(binary_path())
        .args(["input", "--a", "oops,12", "--state", state.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let contents = fs::read_to_string(&state).expect("state file should exist");
    let _ = fs::remove_file(&state);

    let record: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(record["points"][0]["x"].as_f64(), Some(0.0), "unparseable x falls back to 0");
    assert_eq!(record["points"][0]["y"].as_f64(), Some(12.0));
}

#[test]
fn render_missing_state_shows_error_and_skips_drawing() {
    let state = temp_state_path("missing");
    let _ = fs::remove_file(&state);

    let output = Command::new(binary_path())
        .args(["render", "--state", state.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success(), "missing state should exit nonzero");
    assert!(stderr.contains("no triangle data"), "Should show the error indicator, got: {}", stderr);
    assert!(!stdout.contains("<svg"), "No drawing output on error");
}

#[test]
fn input_then_render_produces_scene() {
    let state = temp_state_path("pipeline");

    let status = Command::new(binary_path())
        .args(["input", "--a", "0,0", "--b", "4,0", "--c", "0,3", "--state", state.to_str().unwrap()])
        .status()
        .expect("Failed to execute command");
    assert!(status.success());

    let output = Command::new(binary_path())
        .args(["render", "--state", state.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");
    let _ = fs::remove_file(&state);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("<svg"), "Should output an SVG document");
    assert_eq!(stdout.matches("<circle").count(), 3, "One marker per vertex");
    assert!(stdout.contains(">A</text>"), "Vertex A label");
    assert!(stdout.contains("90.0°"), "Right angle annotation");
}

#[test]
fn render_png_writes_file() {
    let state = temp_state_path("png-state");
    let png = env::temp_dir().join(format!("protract-it-scene-{}.png", std::process::id()));

    let status = Command::new(binary_path())
        .args(["input", "--state", state.to_str().unwrap()])
        .status()
        .expect("Failed to execute command");
    assert!(status.success());

    let output = Command::new(binary_path())
        .args(["render", "--state", state.to_str().unwrap(), "--png", png.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");
    let _ = fs::remove_file(&state);

    assert!(output.status.success());
    let metadata = fs::metadata(&png).expect("PNG file should exist");
    let _ = fs::remove_file(&png);
    assert!(metadata.len() > 0, "PNG should not be empty");
}

#[test]
fn angles_outputs_summary_text() {
    let state = temp_state_path("angles-text");

    let status = Command::new(binary_path())
        .args(["input", "--a", "0,0", "--b", "4,0", "--c", "0,3", "--state", state.to_str().unwrap()])
        .status()
        .expect("Failed to execute command");
    assert!(status.success());

    let output = Command::new(binary_path())
        .args(["angles", "--state", state.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");
    let _ = fs::remove_file(&state);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("A: (0, 0)"), "got: {}", stdout);
    assert!(stdout.contains("90.00°"), "got: {}", stdout);
    assert!(stdout.contains("36.87°"), "got: {}", stdout);
    assert!(stdout.contains("53.13°"), "got: {}", stdout);
}

#[test]
fn angles_json_has_report_shape() {
    let state = temp_state_path("angles-json");

    let status = Command::new(binary_path())
        .args(["input", "--state", state.to_str().unwrap()])
        .status()
        .expect("Failed to execute command");
    assert!(status.success());

    let output = Command::new(binary_path())
        .args(["angles", "--state", state.to_str().unwrap(), "--json"])
        .output()
        .expect("Failed to execute command");
    let _ = fs::remove_file(&state);

    let stdout = String::from_utf8_lossy(&output.stdout);
    let report: serde_json::Value = serde_json::from_str(stdout.trim()).expect("JSON output");
    assert_eq!(report["points"].as_array().map(|p| p.len()), Some(3));
    assert!(report["sides"]["a"].as_f64().unwrap() > 0.0);
    let sum = report["angles"]["a"].as_f64().unwrap()
        + report["angles"]["b"].as_f64().unwrap()
        + report["angles"]["c"].as_f64().unwrap();
    assert!((sum - 180.0).abs() < 1e-6, "angles should sum to 180, got {}", sum);
}
