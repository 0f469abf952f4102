//! Project, image and tool shapes for the content API

use serde::{Deserialize, Serialize};

use crate::application::services::index_label;
use crate::domain::entities::{Project, Variation};
use crate::domain::services::{FallbackImage, ProjectDetailView};
use crate::domain::value_objects::Section;

#[derive(Debug, Default, Deserialize)]
pub struct ProjectListQuery {
    #[serde(default)]
    pub category: Option<String>,
}

/// One card of the project grid
#[derive(Debug, Serialize)]
pub struct ProjectSummaryDto {
    pub index: String,
    pub slug: String,
    pub title: String,
    pub category: Section,
    pub category_label: String,
    pub tagline: String,
    pub image: ImageDto,
}

impl ProjectSummaryDto {
    pub fn new(position: usize, project: &Project) -> Self {
        Self {
            index: index_label(position),
            slug: project.slug(),
            title: project.title.clone(),
            category: project.category,
            category_label: project.category.label().to_string(),
            tagline: project.tagline.clone(),
            image: ImageDto::from(&FallbackImage::new(&project.image)),
        }
    }
}

/// An image together with the placeholder to show if it fails to load
#[derive(Debug, Clone, Serialize)]
pub struct ImageDto {
    pub src: String,
    pub fallback: String,
}

impl From<&FallbackImage> for ImageDto {
    fn from(image: &FallbackImage) -> Self {
        Self {
            src: image.src().to_string(),
            fallback: image.placeholder().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProjectDetailDto {
    pub slug: String,
    pub title: String,
    pub category_label: String,
    pub initial: String,
    pub tagline: String,
    pub headline: String,
    pub narrative: String,
    pub hero_image: ImageDto,
    pub gallery: Vec<ImageDto>,
    pub variations: Vec<Variation>,
    pub tech: Vec<String>,
    pub link: Option<String>,
}

impl From<ProjectDetailView> for ProjectDetailDto {
    fn from(view: ProjectDetailView) -> Self {
        Self {
            hero_image: ImageDto::from(&view.hero_image),
            gallery: view.gallery.iter().map(ImageDto::from).collect(),
            slug: view.slug,
            title: view.title,
            category_label: view.category_label,
            initial: view.initial,
            tagline: view.tagline,
            headline: view.headline,
            narrative: view.narrative,
            variations: view.variations,
            tech: view.tech,
            link: view.link,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ToolDto {
    pub index: String,
    pub name: String,
    pub category: String,
    pub level: u8,
}
