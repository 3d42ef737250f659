//! Render command - file output for the display view.
//!
//! Loads the persisted triangle, renders the SVG scene, and writes it to
//! stdout or a file. With `--png` the scene is rasterized through resvg
//! and saved with the image crate instead.

use protract::{DEFAULT_STATE_PATH, Surface, render_scene, viewport};

use super::common::{load_or_exit, rasterize_scene, write_output};

/// Execute the render command.
pub fn cmd_render(args: &[String]) {
    let mut state_path = DEFAULT_STATE_PATH.to_string();
    let mut output_path: Option<&str> = None;
    let mut png_path: Option<&str> = None;
    let mut width = viewport::DEFAULT_WIDTH;
    let mut height = viewport::DEFAULT_HEIGHT;
    let mut padding = viewport::DEFAULT_PADDING;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-s" | "--state" => {
                i += 1;
                if i < args.len() {
                    state_path = args[i].clone();
                }
            }
            "-o" | "--output" => {
                i += 1;
                if i < args.len() {
                    output_path = Some(&args[i]);
                }
            }
            "--png" => {
                i += 1;
                if i < args.len() {
                    png_path = Some(&args[i]);
                }
            }
            "--width" => {
                i += 1;
                if i < args.len() {
                    width = args[i].parse().unwrap_or(viewport::DEFAULT_WIDTH);
                }
            }
            "--height" => {
                i += 1;
                if i < args.len() {
                    height = args[i].parse().unwrap_or(viewport::DEFAULT_HEIGHT);
                }
            }
            "--padding" => {
                i += 1;
                if i < args.len() {
                    padding = args[i].parse().unwrap_or(viewport::DEFAULT_PADDING);
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

    let triangle = load_or_exit(&state_path);
    let surface = Surface::new(width, height, padding);
    let svg = render_scene(&triangle, &surface);

    let angles = triangle.angles();
    eprintln!(
        "Rendered {}x{} scene (angles {:.2}° / {:.2}° / {:.2}°)",
        surface.width, surface.height, angles.a, angles.b, angles.c
    );

    match png_path {
        Some(path) => {
            let img = rasterize_scene(&svg, &surface);
            img.save(path).expect("Failed to write PNG file");
            eprintln!("Wrote: {}", path);
        }
        None => {
            write_output(output_path, &svg);
        }
    }
}

fn print_usage() {
    eprintln!("Usage: protract render [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -s, --state <file>   State file to read (default: {})", DEFAULT_STATE_PATH);
    eprintln!("  -o, --output <file>  Output SVG file (default: stdout)");
    eprintln!("  --png <file>         Rasterize to PNG instead of SVG output");
    eprintln!("  --width <n>          Surface width (default: {})", viewport::DEFAULT_WIDTH);
    eprintln!("  --height <n>         Surface height (default: {})", viewport::DEFAULT_HEIGHT);
    eprintln!("  --padding <n>        Surface padding (default: {})", viewport::DEFAULT_PADDING);
}
