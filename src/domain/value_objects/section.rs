//! Section tags classifying projects and navigable areas

use serde::{Deserialize, Serialize};

/// Enumerated section tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Section {
    #[default]
    None,
    About,
    Branding,
    Motion,
    Illustration,
    Typography,
    Web,
    Experimental,
    Ghost,
}

impl Section {
    pub const ALL: [Section; 9] = [
        Section::None,
        Section::About,
        Section::Branding,
        Section::Motion,
        Section::Illustration,
        Section::Typography,
        Section::Web,
        Section::Experimental,
        Section::Ghost,
    ];

    /// The wire tag, e.g. `BRANDING`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::About => "ABOUT",
            Self::Branding => "BRANDING",
            Self::Motion => "MOTION",
            Self::Illustration => "ILLUSTRATION",
            Self::Typography => "TYPOGRAPHY",
            Self::Web => "WEB",
            Self::Experimental => "EXPERIMENTAL",
            Self::Ghost => "GHOST",
        }
    }

    /// Label shown next to a project. Untagged work reads as "Work".
    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "Work",
            other => other.as_str(),
        }
    }

    /// Parse a tag case-insensitively
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|section| section.as_str().eq_ignore_ascii_case(value))
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untagged_label_defaults_to_work() {
        assert_eq!(Section::None.label(), "Work");
        assert_eq!(Section::Branding.label(), "BRANDING");
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Section::parse("web"), Some(Section::Web));
        assert_eq!(Section::parse(" Typography "), Some(Section::Typography));
        assert_eq!(Section::parse("sculpture"), None);
    }

    #[test]
    fn test_serializes_as_upper_case_tag() {
        let json = serde_json::to_string(&Section::Experimental).unwrap();
        assert_eq!(json, "\"EXPERIMENTAL\"");
        let back: Section = serde_json::from_str("\"MOTION\"").unwrap();
        assert_eq!(back, Section::Motion);
    }
}
