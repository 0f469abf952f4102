//! Profile entity - Who the portfolio belongs to

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    /// Monogram shown on the hero card, e.g. "NG"
    pub initials: String,
    pub role: String,
    pub headline: String,
    pub quote: String,
    /// Biography, one entry per paragraph
    pub bio: Vec<String>,
    pub portrait: String,
    pub location: String,
    #[serde(default)]
    pub contacts: Vec<ContactLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLink {
    pub label: String,
    pub href: String,
}

impl ContactLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}
