//! Tool entity - An entry in the designer's toolkit

use serde::{Deserialize, Serialize};

pub const MAX_TOOL_LEVEL: u8 = 100;

/// A tool with a self-assessed proficiency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    pub name: String,
    pub category: String,
    /// Proficiency from 0 to 100
    pub level: u8,
}

impl Tool {
    pub fn new(name: impl Into<String>, category: impl Into<String>, level: u8) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            level,
        }
    }

    /// Level clamped to the 0-100 display range
    pub fn display_level(&self) -> u8 {
        self.level.min(MAX_TOOL_LEVEL)
    }
}
