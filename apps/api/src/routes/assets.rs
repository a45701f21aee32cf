use axum::{
    extract::{Path, State},
    http::{header, HeaderName},
    response::{IntoResponse, Response},
};
use tracing::warn;

use crate::assets::{resolve_asset, AssetOutcome, PLACEHOLDER_SVG};
use crate::errors::AppError;
use crate::state::AppState;

pub const ASSET_FALLBACK: HeaderName = HeaderName::from_static("x-asset-fallback");

fn content_type(path: &str) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .to_string()
}

fn is_image(path: &str) -> bool {
    mime_guess::from_path(path)
        .first()
        .is_some_and(|m| m.type_().as_str() == "image")
}

/// GET /assets/*path
///
/// Serves the file, else its `_1` alternate, else (for images only) the placeholder.
/// Non-image misses are 404.
pub async fn handle_asset(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> Result<Response, AppError> {
    let outcome = resolve_asset(state.assets.as_ref(), &path).await?;
    let label = outcome.label().to_string();

    let (mime, cache, bytes) = match outcome {
        AssetOutcome::Original(bytes) => (content_type(&path), "public, max-age=3600", bytes),
        AssetOutcome::Alternate { path: alt, bytes } => {
            (content_type(&alt), "public, max-age=3600", bytes)
        }
        AssetOutcome::Placeholder if is_image(&path) => {
            warn!("Image '{path}' unavailable, serving placeholder");
            (
                "image/svg+xml".to_string(),
                "no-cache",
                PLACEHOLDER_SVG.as_bytes().to_vec(),
            )
        }
        AssetOutcome::Placeholder => {
            return Err(AppError::NotFound(format!("Asset {path} not found")));
        }
    };

    Ok((
        [
            (header::CONTENT_TYPE, mime),
            (header::CACHE_CONTROL, cache.to_string()),
            (ASSET_FALLBACK, label),
        ],
        bytes,
    )
        .into_response())
}
