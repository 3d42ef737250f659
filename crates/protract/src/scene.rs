//! SVG scene composition - the drawing surface for a measured triangle.
//!
//! The surface is an SVG document built up as a `String`. Rendering is a
//! stateless single pass: outline and fill first, then vertex markers and
//! labels, then the per-vertex angle arcs and their degree labels. Callers
//! rasterize the result (or write it out) themselves.

use std::f64::consts::{PI, TAU};

use crate::geometry::{AngleSet, Point, Triangle, VERTEX_LABELS};
use crate::viewport::{Surface, ViewportTransform};

// Scene styling. One fixed palette; the arc color identifies the vertex.
const OUTLINE_COLOR: &str = "#495057";
const OUTLINE_WIDTH: f64 = 3.0;
const FILL_COLOR: &str = "#667eea";
const FILL_OPACITY: f64 = 0.1;
const MARKER_RADIUS: f64 = 8.0;
const MARKER_COLOR: &str = "#667eea";
const TEXT_COLOR: &str = "#333";
const VERTEX_FONT_SIZE: u32 = 16;
/// Vertex labels sit this far above their marker.
const VERTEX_LABEL_OFFSET: f64 = 15.0;
const ARC_RADIUS: f64 = 30.0;
const ARC_WIDTH: f64 = 2.0;
/// Arc stroke per vertex, in vertex order (A, B, C).
const ARC_COLORS: [&str; 3] = ["#667eea", "#28a745", "#dc3545"];
const ANGLE_FONT_SIZE: u32 = 14;
/// Angle labels sit just outside the arc, along its bisector.
const ANGLE_LABEL_RADIUS: f64 = ARC_RADIUS + 15.0;
/// Baseline nudge so the label text centers on the bisector point.
const ANGLE_LABEL_DROP: f64 = 5.0;

/// Render the full scene for a triangle: fit it to the surface, draw the
/// labeled outline, then the angle annotations.
///
/// Angles are measured on the raw points; the uniform viewport transform
/// preserves them, so the annotations stay truthful on the scaled scene.
pub fn render_scene(triangle: &Triangle, surface: &Surface) -> String {
    let transform = ViewportTransform::fit(triangle, surface);
    let points = transform.apply_to(triangle);
    let angles = triangle.angles();

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
        w = surface.width,
        h = surface.height
    ));
    svg.push_str("<rect width=\"100%\" height=\"100%\" fill=\"white\"/>\n");

    render_triangle(&mut svg, &points);
    render_angle_annotations(&mut svg, &points, &angles);

    svg.push_str("</svg>\n");
    svg
}

/// Draw the closed triangle outline with a translucent fill, then a
/// filled circular marker and a letter label at each vertex in order.
pub fn render_triangle(svg: &mut String, points: &[Point; 3]) {
    svg.push_str(&format!(
        "<path d=\"M{:.2},{:.2} L{:.2},{:.2} L{:.2},{:.2} Z\" stroke=\"{}\" stroke-width=\"{}\" fill=\"{}\" fill-opacity=\"{}\"/>\n",
        points[0].x, points[0].y,
        points[1].x, points[1].y,
        points[2].x, points[2].y,
        OUTLINE_COLOR, OUTLINE_WIDTH, FILL_COLOR, FILL_OPACITY
    ));

    for (point, label) in points.iter().zip(VERTEX_LABELS) {
        svg.push_str(&format!(
            "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{}\" fill=\"{}\"/>\n",
            point.x, point.y, MARKER_RADIUS, MARKER_COLOR
        ));
        push_text(svg, label, point.x, point.y - VERTEX_LABEL_OFFSET, VERTEX_FONT_SIZE);
    }
}

/// Draw an angle arc and a degree label at each vertex.
///
/// The arc spans the two rays toward the other vertices, swept in the
/// increasing-angle direction. The label sits on the arc's bisector; when
/// the raw ray difference exceeds a half turn the naive midpoint points
/// away from the arc, so a half turn is added to flip it back.
pub fn render_angle_annotations(svg: &mut String, points: &[Point; 3], angles: &AngleSet) {
    let degrees = [angles.a, angles.b, angles.c];

    for i in 0..3 {
        let vertex = points[i];
        // The other two vertices, in vertex order.
        let p1 = points[if i == 0 { 1 } else { 0 }];
        let p2 = points[if i == 2 { 1 } else { 2 }];

        let a1 = (p1.y - vertex.y).atan2(p1.x - vertex.x);
        let a2 = (p2.y - vertex.y).atan2(p2.x - vertex.x);

        push_arc(svg, vertex, ARC_RADIUS, a1, a2, ARC_COLORS[i]);

        let mut mid = (a1 + a2) / 2.0;
        if (a2 - a1).abs() > PI {
            mid += PI;
        }
        let label_x = vertex.x + mid.cos() * ANGLE_LABEL_RADIUS;
        let label_y = vertex.y + mid.sin() * ANGLE_LABEL_RADIUS;
        push_text(
            svg,
            &format!("{:.1}°", degrees[i]),
            label_x,
            label_y + ANGLE_LABEL_DROP,
            ANGLE_FONT_SIZE,
        );
    }
}

/// Append an arc of `radius` around `center` from ray angle `a1` to `a2`,
/// swept in the increasing-angle direction (clockwise on a y-down surface).
fn push_arc(svg: &mut String, center: Point, radius: f64, a1: f64, a2: f64, color: &str) {
    let mut sweep = a2 - a1;
    if sweep < 0.0 {
        sweep += TAU;
    }
    let large_arc = if sweep > PI { 1 } else { 0 };

    let start_x = center.x + radius * a1.cos();
    let start_y = center.y + radius * a1.sin();
    let end_x = center.x + radius * a2.cos();
    let end_y = center.y + radius * a2.sin();

    svg.push_str(&format!(
        "<path d=\"M{:.2},{:.2} A{:.2},{:.2} 0 {} 1 {:.2},{:.2}\" stroke=\"{}\" stroke-width=\"{}\" fill=\"none\"/>\n",
        start_x, start_y, radius, radius, large_arc, end_x, end_y, color, ARC_WIDTH
    ));
}

/// Append a centered bold text label.
fn push_text(svg: &mut String, text: &str, x: f64, y: f64, size: u32) {
    svg.push_str(&format!(
        "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" font-family=\"Arial\" font-size=\"{}\" font-weight=\"bold\" fill=\"{}\">{}</text>\n",
        x, y, size, TEXT_COLOR, text
    ));
}

// ============================================================================
// TESTS
// ============================================================================
