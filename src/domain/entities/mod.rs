//! Domain entities - Hand-authored portfolio content

mod catalog;
mod landmark;
mod profile;
mod project;
mod tool;

pub use catalog::ContentCatalog;
pub use landmark::Landmark;
pub use profile::{ContactLink, Profile};
pub use project::{LayoutType, Project, Variation};
pub use tool::{Tool, MAX_TOOL_LEVEL};
