//! Persisted triangle state - the boundary between the input view and
//! the display views.
//!
//! The record is a flat JSON object:
//!
//! ```json
//! { "points": [ {"x": 100.0, "y": 100.0},
//!               {"x": 400.0, "y": 100.0},
//!               {"x": 250.0, "y": 350.0} ] }
//! ```
//!
//! A missing or unparseable record is the only reportable error. The
//! points themselves are not validated: non-finite, collinear, or
//! out-of-range coordinates pass through untouched.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Triangle};

/// Default state file name.
pub const DEFAULT_STATE_PATH: &str = "triangle.json";

/// A point in the persisted record. Kept separate from the geometry type
/// so the wire layout is pinned independently of it.
#[derive(Debug, Serialize, Deserialize)]
struct StoredPoint {
    x: f64,
    y: f64,
}

/// The persisted record: exactly three points, in vertex order.
#[derive(Debug, Serialize, Deserialize)]
struct StoredTriangle {
    points: [StoredPoint; 3],
}

/// Error type for loading persisted state.
#[derive(Debug)]
pub enum StoreError {
    /// No record exists at the given path.
    Missing(PathBuf),
    /// The record exists but could not be read or parsed.
    Unreadable(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Missing(path) => write!(f, "no triangle data at {}", path.display()),
            StoreError::Unreadable(msg) => write!(f, "triangle data unreadable: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

/// Serialize a triangle to the persisted record format.
pub fn triangle_to_json(triangle: &Triangle) -> String {
    let record = StoredTriangle {
        points: triangle.vertices().map(|p| StoredPoint { x: p.x, y: p.y }),
    };
    // A three-point struct of plain floats always serializes.
    serde_json::to_string(&record).expect("triangle record serialization cannot fail")
}

/// Parse a serialized record back into a triangle.
pub fn parse_triangle(json: &str) -> Result<Triangle, StoreError> {
    let record: StoredTriangle =
        serde_json::from_str(json).map_err(|e| StoreError::Unreadable(e.to_string()))?;
    let [a, b, c] = record.points;
    Ok(Triangle::new(
        Point::new(a.x, a.y),
        Point::new(b.x, b.y),
        Point::new(c.x, c.y),
    ))
}

/// Write the persisted record for the display views to pick up.
pub fn save_triangle(path: &Path, triangle: &Triangle) -> std::io::Result<()> {
    fs::write(path, triangle_to_json(triangle))
}

/// Load the persisted record written by the input view.
pub fn load_triangle(path: &Path) -> Result<Triangle, StoreError> {
    if !path.exists() {
        return Err(StoreError::Missing(path.to_path_buf()));
    }
    let contents =
        fs::read_to_string(path).map_err(|e| StoreError::Unreadable(e.to_string()))?;
    parse_triangle(&contents)
}

// ============================================================================
// TESTS
// ============================================================================
