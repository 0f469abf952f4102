//! Hero card pointer samples and transforms

use serde::{Deserialize, Serialize};

use crate::domain::services::CardTransform;

/// Pointer sample for the hero card
#[derive(Debug, Deserialize)]
pub struct HeroTransformQuery {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    /// Missing dimensions are treated as unknown
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
    #[serde(default)]
    pub flipped: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClickOriginDto {
    Card,
    Control,
}

#[derive(Debug, Deserialize)]
pub struct HeroFlipRequestDto {
    pub flipped: bool,
    pub origin: ClickOriginDto,
}

#[derive(Debug, Serialize)]
pub struct HeroTransformDto {
    pub flipped: bool,
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub flip_offset: f64,
    pub gloss_x: f64,
    pub gloss_y: f64,
    pub transform: String,
    pub gloss: String,
}

impl HeroTransformDto {
    pub fn new(flipped: bool, t: CardTransform) -> Self {
        Self {
            flipped,
            rotate_x: t.rotate_x,
            rotate_y: t.rotate_y,
            flip_offset: t.flip_offset,
            gloss_x: t.gloss_x,
            gloss_y: t.gloss_y,
            transform: t.css_transform(),
            gloss: t.css_gloss(),
        }
    }
}
