//! Ghost chat request and reply bodies

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Speaker;

#[derive(Debug, Deserialize)]
pub struct GhostMessageRequestDto {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct GhostReplyDto {
    pub role: Speaker,
    pub text: String,
}

impl GhostReplyDto {
    pub fn new(text: String) -> Self {
        Self {
            role: Speaker::Ghost,
            text,
        }
    }
}
