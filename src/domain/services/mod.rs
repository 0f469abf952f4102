//! Domain services - Pure presentation logic

pub mod hero_card;
pub mod image_fallback;
pub mod project_detail;

pub use hero_card::{card_transform, CardTransform, ClickOrigin, FlipCard};
pub use image_fallback::{FallbackImage, PLACEHOLDER_IMAGE_URL};
pub use project_detail::ProjectDetailView;
