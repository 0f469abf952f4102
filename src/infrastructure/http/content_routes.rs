//! Content API routes

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::application::dto::{ProjectDetailDto, ProjectListQuery, ProjectSummaryDto, ToolDto};
use crate::application::services::index_label;
use crate::domain::entities::{Landmark, Profile};
use crate::domain::value_objects::Section;
use crate::infrastructure::state::AppState;

/// Parse an optional `category` query value
pub fn parse_category(raw: Option<&str>) -> Result<Option<Section>, (StatusCode, String)> {
    match raw.map(str::trim).filter(|value| !value.is_empty()) {
        None => Ok(None),
        Some(value) => Section::parse(value).map(Some).ok_or_else(|| {
            (
                StatusCode::BAD_REQUEST,
                format!("Unknown category: {}", value),
            )
        }),
    }
}

/// List projects, optionally filtered by category
pub async fn list_projects(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ProjectListQuery>,
) -> Result<Json<Vec<ProjectSummaryDto>>, (StatusCode, String)> {
    let category = parse_category(query.category.as_deref())?;
    let projects = state
        .content_service
        .projects(category)
        .into_iter()
        .enumerate()
        .map(|(position, project)| ProjectSummaryDto::new(position, project))
        .collect();
    Ok(Json(projects))
}

/// Get the detail view of one project
pub async fn get_project(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<ProjectDetailDto>, (StatusCode, String)> {
    state
        .content_service
        .project_detail(&slug)
        .map(|view| Json(ProjectDetailDto::from(view)))
        .ok_or_else(|| (StatusCode::NOT_FOUND, format!("Project not found: {}", slug)))
}

pub async fn list_tools(State(state): State<Arc<AppState>>) -> Json<Vec<ToolDto>> {
    let tools = state
        .content_service
        .tools()
        .iter()
        .enumerate()
        .map(|(position, tool)| ToolDto {
            index: index_label(position),
            name: tool.name.clone(),
            category: tool.category.clone(),
            level: tool.display_level(),
        })
        .collect();
    Json(tools)
}

pub async fn list_landmarks(State(state): State<Arc<AppState>>) -> Json<Vec<Landmark>> {
    Json(state.content_service.landmarks().to_vec())
}

pub async fn get_profile(State(state): State<Arc<AppState>>) -> Json<Profile> {
    Json(state.content_service.profile().clone())
}

/// Export the whole catalog as a pretty-printed content file
pub async fn export_content(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let json = serde_json::to_string_pretty(&state.content_service.export())
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;
    Ok(([(header::CONTENT_TYPE, "application/json")], json))
}
