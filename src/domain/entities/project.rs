//! Project entity - One piece of work in the portfolio

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Section;

/// A portfolio project
///
/// Projects are authored by hand and never mutated after load. Optional
/// fields are omitted from serialized output so that a catalog survives a
/// write/read cycle with the absence of each field intact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub category: Section,
    pub tagline: String,
    /// Short description, also the headline of the detail overlay
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    /// Primary image URL
    pub image: String,
    /// Gallery image URLs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variations: Option<Vec<Variation>>,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl Project {
    pub fn new(
        title: impl Into<String>,
        category: Section,
        tagline: impl Into<String>,
        description: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            category,
            tagline: tagline.into(),
            description: description.into(),
            long_description: None,
            image: image.into(),
            images: None,
            variations: None,
            tech: Vec::new(),
            link: None,
        }
    }

    pub fn with_long_description(mut self, text: impl Into<String>) -> Self {
        self.long_description = Some(text.into());
        self
    }

    pub fn with_images<I, S>(mut self, images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.images = Some(images.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_tech<I, S>(mut self, tech: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tech = tech.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_variation(mut self, variation: Variation) -> Self {
        self.variations.get_or_insert_with(Vec::new).push(variation);
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    /// URL-safe identifier derived from the title, e.g. `eco-branding-2024`
    pub fn slug(&self) -> String {
        let mut slug = String::with_capacity(self.title.len());
        for c in self.title.chars() {
            if c.is_ascii_alphanumeric() {
                slug.push(c.to_ascii_lowercase());
            } else if !slug.is_empty() && !slug.ends_with('-') {
                slug.push('-');
            }
        }
        while slug.ends_with('-') {
            slug.pop();
        }
        slug
    }
}

/// An alternate take on a project (e.g. a print series in several formats)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variation {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout_type: Option<LayoutType>,
}

/// How a variation's images are laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LayoutType {
    #[default]
    #[serde(rename = "default")]
    Default,
    /// Paired A3/A4 print formats
    #[serde(rename = "a3-a4")]
    A3A4,
}

impl LayoutType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::A3A4 => "a3-a4",
        }
    }
}
