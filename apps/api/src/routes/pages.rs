//! HTML page handlers.

use axum::{
    extract::{Path, State},
    response::Html,
};

use crate::errors::AppError;
use crate::render::{render_page, PageView};
use crate::state::AppState;

/// GET /
pub async fn handle_index(State(state): State<AppState>) -> Html<String> {
    let timeline = state.timeline();
    Html(render_page(&PageView {
        profile: state.profile,
        timeline: &timeline,
        current_year: state.current_year(),
        selected: None,
    }))
}

/// GET /projects/:id
///
/// Same page with the projects section showing one project's details.
pub async fn handle_project_page(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> Result<Html<String>, AppError> {
    let project = state
        .profile
        .project(&project_id)
        .ok_or_else(|| AppError::NotFound(format!("Project {project_id} not found")))?;

    let timeline = state.timeline();
    Ok(Html(render_page(&PageView {
        profile: state.profile,
        timeline: &timeline,
        current_year: state.current_year(),
        selected: Some(project),
    })))
}
