use crate::domain::entities::{Landmark, Profile, Project, Tool};

/// Read-only access to the portfolio catalog
///
/// Content is loaded once at startup and never mutated, so the port hands
/// out borrowed slices.
pub trait ContentRepositoryPort: Send + Sync {
    fn profile(&self) -> &Profile;
    fn projects(&self) -> &[Project];
    fn tools(&self) -> &[Tool];
    fn landmarks(&self) -> &[Landmark];
}
