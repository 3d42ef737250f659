//! Summary panel text - coordinate pairs and angle values.
//!
//! Coordinates print with `f64`'s minimal formatting (whole numbers carry
//! no decimal point); angles are fixed to two decimals with a degree
//! suffix. NaN angles print as "NaN°".

use crate::geometry::{AngleSet, Triangle, VERTEX_LABELS};

/// One line per vertex with its raw coordinate pair, e.g. `A: (100, 100)`.
pub fn point_lines(triangle: &Triangle) -> Vec<String> {
    triangle
        .vertices()
        .iter()
        .zip(VERTEX_LABELS)
        .map(|(p, label)| format!("{}: ({}, {})", label, p.x, p.y))
        .collect()
}

/// One line per vertex with its interior angle, e.g. `A: 90.00°`.
pub fn angle_lines(angles: &AngleSet) -> Vec<String> {
    [angles.a, angles.b, angles.c]
        .iter()
        .zip(VERTEX_LABELS)
        .map(|(deg, label)| format!("{}: {:.2}°", label, deg))
        .collect()
}

/// Combined panel: coordinates and angle on one line per vertex.
pub fn summary_lines(triangle: &Triangle, angles: &AngleSet) -> Vec<String> {
    let points = triangle.vertices();
    let degrees = [angles.a, angles.b, angles.c];
    VERTEX_LABELS
        .iter()
        .enumerate()
        .map(|(i, label)| {
            format!("{}: ({}, {})  {:.2}°", label, points[i].x, points[i].y, degrees[i])
        })
        .collect()
}
