//! Hero flip card - pointer-driven tilt and flip state
//!
//! The card leans toward the pointer with an affine map of the normalised
//! pointer position. Flipping turns the card 180 degrees and removes the
//! tilt entirely, so the back face reads flat.

use serde::Serialize;

use crate::domain::value_objects::{PointerPosition, Viewport};

/// Tilt range in degrees on regular viewports
pub const BASE_TILT_DEG: f64 = 12.0;
/// Tilt range in degrees on compact viewports
pub const COMPACT_TILT_DEG: f64 = 6.0;
/// Extra Y rotation applied while the back face is showing
pub const FLIP_DEG: f64 = 180.0;

/// Where a click on the card landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOrigin {
    /// The card surface itself
    Card,
    /// A link or button nested inside the card
    NestedControl,
}

/// Flip state of the hero card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlipCard {
    flipped: bool,
}

impl FlipCard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flipped(flipped: bool) -> Self {
        Self { flipped }
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// Toggle on a click, unless it was meant for a nested control.
    /// Returns the new flipped state.
    pub fn click(&mut self, origin: ClickOrigin) -> bool {
        if origin == ClickOrigin::Card {
            self.flipped = !self.flipped;
        }
        self.flipped
    }

    /// Transform for the given pointer and viewport
    pub fn transform(&self, pointer: PointerPosition, viewport: Viewport) -> CardTransform {
        card_transform(pointer, viewport, self.flipped)
    }
}

/// Derived visual state of the hero card
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CardTransform {
    /// Tilt about the X axis, degrees
    pub rotate_x: f64,
    /// Tilt about the Y axis, degrees (excludes the flip)
    pub rotate_y: f64,
    /// 0 or 180 depending on which face shows
    pub flip_offset: f64,
    /// Gloss highlight center, percent of width
    pub gloss_x: f64,
    /// Gloss highlight center, percent of height
    pub gloss_y: f64,
}

impl CardTransform {
    /// CSS `transform` value for the card body
    pub fn css_transform(&self) -> String {
        format!(
            "rotateX({:.3}deg) rotateY({:.3}deg)",
            self.rotate_x,
            self.rotate_y + self.flip_offset
        )
    }

    /// CSS `background` value for the front-face gloss
    pub fn css_gloss(&self) -> String {
        format!(
            "radial-gradient(circle at {:.2}% {:.2}%, rgba(255,255,255,0.4) 0%, transparent 70%)",
            self.gloss_x, self.gloss_y
        )
    }
}

/// Tilt range for the current viewport and flip state
pub fn tilt_factor(viewport: Viewport, flipped: bool) -> f64 {
    if flipped {
        0.0
    } else if viewport.is_compact() {
        COMPACT_TILT_DEG
    } else {
        BASE_TILT_DEG
    }
}

pub fn card_transform(pointer: PointerPosition, viewport: Viewport, flipped: bool) -> CardTransform {
    let tilt = tilt_factor(viewport, flipped);
    let nx = pointer.x / viewport.safe_width();
    let ny = pointer.y / viewport.safe_height();

    // Flipped cards read flat, never -0.0
    let (rotate_x, rotate_y) = if flipped {
        (0.0, 0.0)
    } else {
        ((ny - 0.5) * tilt, (0.5 - nx) * tilt)
    };

    CardTransform {
        rotate_x,
        rotate_y,
        flip_offset: if flipped { FLIP_DEG } else { 0.0 },
        gloss_x: nx * 100.0,
        gloss_y: ny * 100.0,
    }
}
