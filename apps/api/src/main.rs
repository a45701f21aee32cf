mod assets;
mod chronology;
mod config;
mod content;
mod errors;
mod models;
mod render;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::assets::DiskAssets;
use crate::config::Config;
use crate::content::PROFILE;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Folio v{}", env!("CARGO_PKG_VERSION"));

    let assets = DiskAssets::new(&config.assets_dir);
    if assets.root().is_dir() {
        info!("Serving assets from {}", assets.root().display());
    } else {
        warn!(
            "Assets directory {} does not exist; local images will use the placeholder",
            assets.root().display()
        );
    }

    let state = AppState {
        profile: &PROFILE,
        config: config.clone(),
        assets: Arc::new(assets),
        pinned_year: None,
    };
    info!(
        "Profile loaded: {} experience, {} education, {} projects; timeline from {}",
        PROFILE.experience.len(),
        PROFILE.education.len(),
        PROFILE.projects.len(),
        config.timeline_start_year
    );

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = SocketAddr::new(config.bind_addr, config.port);
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
