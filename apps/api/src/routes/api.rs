//! Read-only JSON views of the resume.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::chronology::{sort_by_period_desc, sort_year, Timeline};
use crate::errors::AppError;
use crate::models::profile::{Education, Experience, Profile, Project, SkillGroup};
use crate::state::AppState;

/// An entry together with the year it was ordered by.
#[derive(Debug, Serialize)]
pub struct Dated<T: 'static> {
    #[serde(flatten)]
    pub entry: &'static T,
    pub sort_year: i32,
}

fn dated<T: 'static>(
    items: &'static [T],
    period_of: fn(&T) -> &str,
    current_year: i32,
) -> Vec<Dated<T>> {
    sort_by_period_desc(items, period_of, current_year)
        .into_iter()
        .map(|entry| Dated {
            entry,
            sort_year: sort_year(period_of(entry), current_year),
        })
        .collect()
}

/// GET /api/v1/profile
pub async fn handle_profile(State(state): State<AppState>) -> Json<&'static Profile> {
    Json(state.profile)
}

/// GET /api/v1/experience — most recent first.
pub async fn handle_experience(State(state): State<AppState>) -> Json<Vec<Dated<Experience>>> {
    Json(dated(
        state.profile.experience,
        |e| e.period,
        state.current_year(),
    ))
}

/// GET /api/v1/education — most recent first.
pub async fn handle_education(State(state): State<AppState>) -> Json<Vec<Dated<Education>>> {
    Json(dated(
        state.profile.education,
        |e| e.period,
        state.current_year(),
    ))
}

/// GET /api/v1/projects
pub async fn handle_projects(State(state): State<AppState>) -> Json<&'static [Project]> {
    Json(state.profile.projects)
}

/// GET /api/v1/projects/:id
pub async fn handle_project(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> Result<Json<&'static Project>, AppError> {
    state
        .profile
        .project(&project_id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Project {project_id} not found")))
}

/// GET /api/v1/skills
pub async fn handle_skills(State(state): State<AppState>) -> Json<&'static [SkillGroup]> {
    Json(state.profile.skills)
}

/// GET /api/v1/timeline
pub async fn handle_timeline(State(state): State<AppState>) -> Json<Timeline> {
    Json(state.timeline())
}
