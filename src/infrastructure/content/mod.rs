//! Content repository - The catalog held in memory for the process lifetime
//!
//! The catalog is either the built-in one or a JSON file in the same shape
//! that `GET /api/content/export` produces. Project slugs are the URL
//! identifiers of the detail overlay, so a loaded catalog must give every
//! project a non-empty slug of its own.

mod builtin;

use std::collections::HashMap;
use std::path::Path;

use tracing::info;

use crate::application::ports::outbound::ContentRepositoryPort;
use crate::domain::entities::{ContentCatalog, Landmark, Profile, Project, Tool};

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("Failed to read content file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid content file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Project \"{title}\" has no letters or digits to build a slug from")]
    EmptySlug { title: String },
    #[error("Projects \"{first}\" and \"{second}\" share the slug \"{slug}\"")]
    DuplicateSlug {
        slug: String,
        first: String,
        second: String,
    },
}

pub struct StaticContentRepository {
    catalog: ContentCatalog,
}

impl StaticContentRepository {
    fn new(catalog: ContentCatalog) -> Self {
        Self { catalog }
    }

    pub fn builtin() -> Self {
        Self::new(builtin::catalog())
    }

    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let catalog: ContentCatalog = serde_json::from_str(json)?;
        check_slugs(&catalog.projects)?;
        Ok(Self::new(catalog))
    }

    pub fn from_json_file(path: &Path) -> Result<Self, ContentError> {
        let json = std::fs::read_to_string(path)?;
        let repository = Self::from_json(&json)?;
        info!(
            "Loaded {} projects from {}",
            repository.catalog.projects.len(),
            path.display()
        );
        Ok(repository)
    }
}

fn check_slugs(projects: &[Project]) -> Result<(), ContentError> {
    let mut seen: HashMap<String, &str> = HashMap::new();
    for project in projects {
        let slug = project.slug();
        if slug.is_empty() {
            return Err(ContentError::EmptySlug {
                title: project.title.clone(),
            });
        }
        if let Some(first) = seen.insert(slug.clone(), &project.title) {
            return Err(ContentError::DuplicateSlug {
                slug,
                first: first.to_string(),
                second: project.title.clone(),
            });
        }
    }
    Ok(())
}

impl ContentRepositoryPort for StaticContentRepository {
    fn profile(&self) -> &Profile {
        &self.catalog.profile
    }

    fn projects(&self) -> &[Project] {
        &self.catalog.projects
    }

    fn tools(&self) -> &[Tool] {
        &self.catalog.tools
    }

    fn landmarks(&self) -> &[Landmark] {
        &self.catalog.landmarks
    }
}
