//! # protract
//!
//! Triangle measurement and rendering.
//!
//! Given three 2D points, protract computes side lengths and interior
//! angles (law of cosines), fits the triangle into a fixed-size drawing
//! surface with a uniform scale-and-center transform, and renders an SVG
//! scene with labeled geometry: outline, translucent fill, vertex markers,
//! per-vertex angle arcs, and degree labels.

pub mod geometry;
pub mod panel;
pub mod scene;
pub mod store;
pub mod viewport;

// Re-export common types at crate root for convenience.
pub use geometry::{AngleSet, Point, SideLengths, Triangle, VERTEX_LABELS};
pub use panel::{angle_lines, point_lines, summary_lines};
pub use scene::{render_angle_annotations, render_scene, render_triangle};
pub use store::{DEFAULT_STATE_PATH, StoreError, load_triangle, parse_triangle, save_triangle, triangle_to_json};
pub use viewport::{Surface, ViewportTransform};
