//! Project detail overlay view
//!
//! The overlay is a pure function of the selected project. Optional fields
//! fall back to shorter ones so that sparse entries still render fully.

use crate::domain::entities::{Project, Variation};
use crate::domain::services::image_fallback::FallbackImage;

/// Everything the detail overlay shows for one project
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDetailView {
    pub slug: String,
    pub title: String,
    pub category_label: String,
    /// First character of the category label, shown as a badge
    pub initial: String,
    pub tagline: String,
    pub headline: String,
    /// Long description, or the short one when there is none
    pub narrative: String,
    pub hero_image: FallbackImage,
    /// Gallery images, or just the primary image when there are none
    pub gallery: Vec<FallbackImage>,
    pub variations: Vec<Variation>,
    pub tech: Vec<String>,
    pub link: Option<String>,
}

impl ProjectDetailView {
    pub fn new(project: &Project) -> Self {
        let category_label = project.category.label().to_string();
        let initial = category_label
            .chars()
            .next()
            .map(String::from)
            .unwrap_or_default();

        let gallery = match &project.images {
            Some(images) if !images.is_empty() => images.iter().map(FallbackImage::new).collect(),
            _ => vec![FallbackImage::new(&project.image)],
        };

        Self {
            slug: project.slug(),
            title: project.title.clone(),
            category_label,
            initial,
            tagline: project.tagline.clone(),
            headline: project.description.clone(),
            narrative: project
                .long_description
                .clone()
                .filter(|text| !text.trim().is_empty())
                .unwrap_or_else(|| project.description.clone()),
            hero_image: FallbackImage::new(&project.image),
            gallery,
            variations: project.variations.clone().unwrap_or_default(),
            tech: project.tech.clone(),
            link: project.link.clone(),
        }
    }
}

impl From<&Project> for ProjectDetailView {
    fn from(project: &Project) -> Self {
        Self::new(project)
    }
}
