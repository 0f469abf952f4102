//! Landmark entity
//!
//! Landmarks describe points on a navigable world map. No map view is served
//! and the built-in table is empty; the type is kept so that catalogs which
//! carry landmarks still load.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Section;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub id: Section,
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
    pub color: String,
    pub icon: String,
}
