//! Content Service - Queries over the portfolio catalog

use std::sync::Arc;

use tracing::debug;

use crate::application::ports::outbound::ContentRepositoryPort;
use crate::domain::entities::{ContentCatalog, Landmark, Profile, Project, Tool};
use crate::domain::services::ProjectDetailView;
use crate::domain::value_objects::Section;

pub struct ContentService {
    repository: Arc<dyn ContentRepositoryPort>,
}

impl ContentService {
    pub fn new(repository: Arc<dyn ContentRepositoryPort>) -> Self {
        Self { repository }
    }

    pub fn profile(&self) -> &Profile {
        self.repository.profile()
    }

    /// Projects in catalog order, optionally restricted to one section
    pub fn projects(&self, category: Option<Section>) -> Vec<&Project> {
        self.repository
            .projects()
            .iter()
            .filter(|project| category.map_or(true, |c| project.category == c))
            .collect()
    }

    /// Detail overlay for the project with the given slug
    pub fn project_detail(&self, slug: &str) -> Option<ProjectDetailView> {
        let view = self
            .repository
            .projects()
            .iter()
            .find(|project| project.slug() == slug)
            .map(ProjectDetailView::new);
        if view.is_none() {
            debug!(slug, "No project with this slug");
        }
        view
    }

    pub fn tools(&self) -> &[Tool] {
        self.repository.tools()
    }

    pub fn landmarks(&self) -> &[Landmark] {
        self.repository.landmarks()
    }

    /// The whole catalog, as it would be written to a content file
    pub fn export(&self) -> ContentCatalog {
        ContentCatalog {
            profile: self.repository.profile().clone(),
            projects: self.repository.projects().to_vec(),
            tools: self.repository.tools().to_vec(),
            landmarks: self.repository.landmarks().to_vec(),
        }
    }
}

/// Two-digit position label used in grids, e.g. `01`
pub fn index_label(position: usize) -> String {
    format!("{:02}", position + 1)
}
