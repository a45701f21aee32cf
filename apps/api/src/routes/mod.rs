pub mod api;
pub mod assets;
pub mod health;
pub mod pages;

use axum::{routing::get, Router};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Pages
        .route("/", get(pages::handle_index))
        .route("/projects/:id", get(pages::handle_project_page))
        // JSON API
        .route("/api/v1/profile", get(api::handle_profile))
        .route("/api/v1/experience", get(api::handle_experience))
        .route("/api/v1/education", get(api::handle_education))
        .route("/api/v1/projects", get(api::handle_projects))
        .route("/api/v1/projects/:id", get(api::handle_project))
        .route("/api/v1/skills", get(api::handle_skills))
        .route("/api/v1/timeline", get(api::handle_timeline))
        // Static files
        .route("/assets/*path", get(assets::handle_asset))
        .with_state(state)
}
