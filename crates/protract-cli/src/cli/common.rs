//! Common utilities shared across CLI commands.

use std::fs;
use std::path::Path;

use image::{DynamicImage, RgbaImage};
use tiny_skia::Pixmap;

use protract::{Point, Surface, Triangle, load_triangle};

/// Parse one numeric field, falling back to 0 on parse failure instead of
/// erroring. Lenient by contract: bad input draws a triangle at the
/// origin rather than refusing to run.
pub fn parse_coord(field: &str) -> f64 {
    field.trim().parse().unwrap_or(0.0)
}

/// Parse an "x,y" argument. Each half goes through [`parse_coord`]; a
/// missing comma leaves y at 0.
pub fn parse_point(arg: &str) -> Point {
    match arg.split_once(',') {
        Some((x, y)) => Point::new(parse_coord(x), parse_coord(y)),
        None => Point::new(parse_coord(arg), 0.0),
    }
}

/// Load the persisted triangle or exit with the error indicator. No
/// drawing happens when the state is missing or unreadable.
pub fn load_or_exit(state_path: &str) -> Triangle {
    match load_triangle(Path::new(state_path)) {
        Ok(triangle) => triangle,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Run 'protract input' to create a triangle first.");
            std::process::exit(1);
        }
    }
}

/// Write output to stdout or a file ('-' and absent both mean stdout).
pub fn write_output(output_path: Option<&str>, contents: &str) {
    match output_path {
        Some("-") | None => {
            println!("{}", contents);
        }
        Some(path) => {
            fs::write(path, contents).expect("Failed to write output file");
            eprintln!("Wrote: {}", path);
        }
    }
}

/// Rasterize an SVG scene with resvg into an RGBA image.
pub fn rasterize_scene(svg: &str, surface: &Surface) -> DynamicImage {
    let options = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg, &options).expect("Failed to parse generated SVG");

    let mut pixmap = Pixmap::new(surface.width, surface.height).expect("Failed to create pixmap");

    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    let rgba = RgbaImage::from_raw(surface.width, surface.height, pixmap.take())
        .expect("Failed to create image");

    DynamicImage::ImageRgba8(rgba)
}
