//! Viewport fitting - maps input coordinates onto the drawing surface.
//!
//! The transform is a uniform scale plus a translation: the triangle's
//! bounding box is scaled to fit inside the surface minus padding, then
//! centered on the surface midpoint. Uniform scaling preserves shape, so
//! angles measured on the raw points remain valid for the scaled ones.

use crate::geometry::{Point, Triangle};

/// Default surface width in surface units.
pub const DEFAULT_WIDTH: u32 = 800;
/// Default surface height in surface units.
pub const DEFAULT_HEIGHT: u32 = 600;
/// Default margin between the surface edge and the drawing area.
pub const DEFAULT_PADDING: f64 = 80.0;

/// Target drawing surface: dimensions plus a fixed padding margin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub width: u32,
    pub height: u32,
    pub padding: f64,
}

impl Default for Surface {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            padding: DEFAULT_PADDING,
        }
    }
}

impl Surface {
    pub fn new(width: u32, height: u32, padding: f64) -> Self {
        Self { width, height, padding }
    }
}

/// Uniform scale-then-translate mapping into surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportTransform {
    pub scale: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl ViewportTransform {
    /// Fit a triangle's bounding box into the surface drawing area.
    ///
    /// The `max(dim, 1)` floor keeps a zero-width or zero-height bounding
    /// box from dividing by zero, at the cost of an arbitrary scale in the
    /// flat dimension. Documented quirk, not a defect to fix here.
    pub fn fit(triangle: &Triangle, surface: &Surface) -> Self {
        let (min_x, min_y, max_x, max_y) = triangle.bounding_box();
        let width = max_x - min_x;
        let height = max_y - min_y;

        let avail_w = surface.width as f64 - 2.0 * surface.padding;
        let avail_h = surface.height as f64 - 2.0 * surface.padding;

        let scale = (avail_w / width.max(1.0)).min(avail_h / height.max(1.0));

        // Center the scaled bounding box on the surface midpoint.
        let center_x = surface.width as f64 / 2.0;
        let center_y = surface.height as f64 / 2.0;
        let box_center_x = (min_x + max_x) / 2.0;
        let box_center_y = (min_y + max_y) / 2.0;

        Self {
            scale,
            translate_x: center_x - box_center_x * scale,
            translate_y: center_y - box_center_y * scale,
        }
    }

    /// Map a point: scale first, then translate.
    #[inline]
    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            p.x * self.scale + self.translate_x,
            p.y * self.scale + self.translate_y,
        )
    }

    /// Map all three vertices, preserving vertex order.
    pub fn apply_to(&self, triangle: &Triangle) -> [Point; 3] {
        triangle.vertices().map(|p| self.apply(p))
    }
}

// ============================================================================
// TESTS
// ============================================================================
