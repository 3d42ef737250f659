//! Angles command - the summary panel without any drawing.
//!
//! Prints the per-vertex coordinates and interior angles, either as the
//! plain text panel or as JSON for scripting.

use serde::Serialize;

use protract::{DEFAULT_STATE_PATH, Triangle, summary_lines};

use super::common::load_or_exit;

/// A point in JSON output format.
#[derive(Serialize)]
struct JsonPoint {
    x: f64,
    y: f64,
}

/// Side lengths in JSON output format, named for the opposite vertex.
#[derive(Serialize)]
struct JsonSides {
    a: f64,
    b: f64,
    c: f64,
}

/// Interior angles in degrees. NaN serializes as null.
#[derive(Serialize)]
struct JsonAngles {
    a: f64,
    b: f64,
    c: f64,
}

/// Full measurement report.
#[derive(Serialize)]
struct JsonReport {
    points: Vec<JsonPoint>,
    sides: JsonSides,
    angles: JsonAngles,
}

/// Execute the angles command.
pub fn cmd_angles(args: &[String]) {
    let mut state_path = DEFAULT_STATE_PATH.to_string();
    let mut json = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-s" | "--state" => {
                i += 1;
                if i < args.len() {
                    state_path = args[i].clone();
                }
            }
            "--json" => {
                json = true;
            }
            "-h" | "--help" => {
                print_usage();
                return;
            }
            unknown => {
                eprintln!("Unknown option: {}", unknown);
            }
        }
        i += 1;
    }

    let triangle = load_or_exit(&state_path);

    if json {
        println!("{}", report_json(&triangle));
    } else {
        for line in summary_lines(&triangle, &triangle.angles()) {
            println!("{}", line);
        }
    }
}

fn report_json(triangle: &Triangle) -> String {
    let sides = triangle.side_lengths();
    let angles = triangle.angles();
    let report = JsonReport {
        points: triangle
            .vertices()
            .iter()
            .map(|p| JsonPoint { x: p.x, y: p.y })
            .collect(),
        sides: JsonSides { a: sides.a, b: sides.b, c: sides.c },
        angles: JsonAngles { a: angles.a, b: angles.b, c: angles.c },
    };
    serde_json::to_string(&report).expect("Failed to serialize JSON")
}

fn print_usage() {
    eprintln!("Usage: protract angles [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -s, --state <file>   State file to read (default: {})", DEFAULT_STATE_PATH);
    eprintln!("  --json               Output as JSON instead of text");
}
