//! Field surface coordinates
//!
//! The diagram editor works in normalized field coordinates: percentages
//! in `[0,100]` on each axis, origin at the top-left of the editing
//! surface. Pointer input arrives in client space (pixels relative to the
//! page) and is mapped through the surface's bounding rectangle.
//!
//! Pointer capture can report events far outside the surface during a
//! drag, so the mapping always clamps into `[0,100]x[0,100]`.

use serde::{Deserialize, Serialize};

/// Upper bound of the normalized coordinate range (percent).
pub const FIELD_MAX: f32 = 100.0;

/// A point in normalized field coordinates (percent of surface size).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point, in percent units.
    pub fn distance_to(&self, other: Point) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Whether both coordinates lie in `[0,100]`.
    pub fn in_bounds(&self) -> bool {
        (0.0..=FIELD_MAX).contains(&self.x) && (0.0..=FIELD_MAX).contains(&self.y)
    }
}

/// Bounding rectangle of the editing surface, in client-space pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl SurfaceRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, width, height }
    }

    /// A rectangle of the given size anchored at the client-space origin.
    pub fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Map a raw client-space point into normalized field coordinates.
    ///
    /// The result is always inside `[0,100]x[0,100]`, however far outside
    /// the surface the raw point lies. A degenerate surface (zero or
    /// negative extent) maps everything to the origin.
    pub fn to_field(&self, client_x: f32, client_y: f32) -> Point {
        if self.width <= 0.0 || self.height <= 0.0 {
            return Point::default();
        }

        let x = ((client_x - self.left) / self.width * FIELD_MAX).clamp(0.0, FIELD_MAX);
        let y = ((client_y - self.top) / self.height * FIELD_MAX).clamp(0.0, FIELD_MAX);
        Point::new(x, y)
    }

    /// Map a normalized point back to client space. Inverse of `to_field`
    /// for points that were inside the surface.
    pub fn to_client(&self, point: Point) -> (f32, f32) {
        (
            self.left + point.x / FIELD_MAX * self.width,
            self.top + point.y / FIELD_MAX * self.height,
        )
    }
}
