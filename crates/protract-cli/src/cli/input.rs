//! Input command - the coordinate entry view.
//!
//! Collects the three vertices from flags, falls back to the documented
//! defaults, and writes the persisted record for the display views.

use std::path::Path;

use protract::{DEFAULT_STATE_PATH, Point, Triangle, save_triangle, summary_lines};

use super::common::parse_point;

/// Execute the input command.
pub fn cmd_input(args: &[String]) {
    // Documented defaults, shown pre-filled by the entry form.
    let mut a = Point::new(100.0, 100.0);
    let mut b = Point::new(400.0, 100.0);
    let mut c = Point::new(250.0, 350.0);
    let mut state_path = DEFAULT_STATE_PATH.to_string();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-a" | "--a" => {
                i += 1;
                if i < args.len() {
                    a = parse_point(&args[i]);
                }
            }
            "-b" | "--b" => {
                i += 1;
                if i < args.len() {
                    b = parse_point(&args[i]);
                }
            }
            "-c" | "--c" => {
                i += 1;
                if i < args.len() {
                    c = parse_point(&args[i]);
                }
            }
            "-s" | "--state" => {
                i += 1;
                if i < args.len() {
                    state_path = args[i].clone();
                }
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

    let triangle = Triangle::new(a, b, c);
    save_triangle(Path::new(&state_path), &triangle).expect("Failed to write state file");

    eprintln!("Saved triangle to {}", state_path);
    for line in summary_lines(&triangle, &triangle.angles()) {
        eprintln!("  {}", line);
    }
    eprintln!("View it with 'protract' or 'protract render'.");
}

fn print_usage() {
    eprintln!("Usage: protract input [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -a, --a <x,y>        Vertex A (default: 100,100)");
    eprintln!("  -b, --b <x,y>        Vertex B (default: 400,100)");
    eprintln!("  -c, --c <x,y>        Vertex C (default: 250,350)");
    eprintln!("  -s, --state <file>   State file to write (default: {})", DEFAULT_STATE_PATH);
    eprintln!();
    eprintln!("Coordinate fields that fail to parse fall back to 0.");
}
