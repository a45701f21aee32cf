//! Asset serving — project images and downloadable files under `/assets`.
//!
//! A missing image gets exactly one retry under its alternate filename
//! (`photo.png` → `photo_1.png`) before the placeholder is used.
//!
//! `AppState` holds an `Arc<dyn AssetSource>`; the default is `DiskAssets`.

pub mod disk;
pub mod fallback;

use async_trait::async_trait;

use crate::errors::AppError;

pub use disk::DiskAssets;
pub use fallback::{resolve_asset, AssetOutcome, ImageRef};

/// Where asset bytes come from. `Ok(None)` means the file does not exist.
#[async_trait]
pub trait AssetSource: Send + Sync {
    async fn read(&self, path: &str) -> Result<Option<Vec<u8>>, AppError>;
}

/// Neutral gradient shown when an image cannot be loaded.
pub const PLACEHOLDER_SVG: &str = concat!(
    r##"<svg xmlns="http://www.w3.org/2000/svg" width="640" height="360" viewBox="0 0 640 360">"##,
    r##"<defs><linearGradient id="g" x1="0" y1="0" x2="1" y2="1">"##,
    r##"<stop offset="0" stop-color="#27272a"/><stop offset="1" stop-color="#18181b"/>"##,
    r##"</linearGradient></defs><rect width="640" height="360" fill="url(#g)"/></svg>"##,
);
