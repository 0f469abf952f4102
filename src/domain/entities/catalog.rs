//! Content catalog - Every hand-authored table in one serializable unit

use serde::{Deserialize, Serialize};

use super::{Landmark, Profile, Project, Tool};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentCatalog {
    pub profile: Profile,
    pub projects: Vec<Project>,
    #[serde(default)]
    pub tools: Vec<Tool>,
    #[serde(default)]
    pub landmarks: Vec<Landmark>,
}
