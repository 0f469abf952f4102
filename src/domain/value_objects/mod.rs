//! Value objects - Immutable objects defined by their attributes

mod chat;
mod ids;
mod pointer;
mod section;

pub use chat::{GhostMessage, Speaker};
pub use ids::*;
pub use pointer::{PointerPosition, Viewport, COMPACT_VIEWPORT_WIDTH};
pub use section::Section;
