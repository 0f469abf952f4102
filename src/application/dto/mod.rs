//! Data Transfer Objects - For API boundaries

pub mod ghost;
pub mod hero;
pub mod project;

pub use ghost::*;
pub use hero::*;
pub use project::*;
