//! Domain layer - Portfolio content and interaction models with no I/O
//!
//! This layer contains:
//! - Entities: Project, Tool, Landmark, Profile
//! - Value Objects: Section tags, pointer/viewport geometry, Ghost chat messages
//! - Domain Services: Hero card math, image fallback, project detail view

pub mod entities;
pub mod services;
pub mod value_objects;
