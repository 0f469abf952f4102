//! Pointer and viewport geometry for the hero card

use serde::{Deserialize, Serialize};

/// Width below which the hero tilt is softened
pub const COMPACT_VIEWPORT_WIDTH: f64 = 640.0;

/// Last known pointer position in viewport pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Viewport size in pixels
///
/// Dimensions that are unknown, zero, negative or non-finite read as `1` so
/// that normalisation never divides by zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// A viewport whose size is not known (e.g. no browser)
    pub fn unknown() -> Self {
        Self::new(0.0, 0.0)
    }

    pub fn safe_width(&self) -> f64 {
        usable(self.width)
    }

    pub fn safe_height(&self) -> f64 {
        usable(self.height)
    }

    pub fn is_compact(&self) -> bool {
        self.width.is_finite() && self.width > 0.0 && self.width < COMPACT_VIEWPORT_WIDTH
    }

    /// The pointer resting at the middle of this viewport
    pub fn center(&self) -> PointerPosition {
        PointerPosition::new(self.safe_width() / 2.0, self.safe_height() / 2.0)
    }
}

fn usable(dimension: f64) -> f64 {
    if dimension.is_finite() && dimension > 0.0 {
        dimension
    } else {
        1.0
    }
}
