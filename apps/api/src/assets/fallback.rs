use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::AssetSource;
use crate::errors::AppError;

static EXTENSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\.[a-zA-Z0-9]+)$").expect("extension pattern is valid"));

const ALTERNATE_SUFFIX: &str = "_1";

/// The one alternate filename tried after a miss: `_1` inserted before the extension.
///
/// `None` when the path has no extension or is already an alternate, so a
/// lookup never retries more than once.
pub fn alternate_filename(path: &str) -> Option<String> {
    if path.contains(&format!("{ALTERNATE_SUFFIX}.")) {
        return None;
    }
    let ext = EXTENSION.find(path)?;
    Some(format!(
        "{}{ALTERNATE_SUFFIX}{}",
        &path[..ext.start()],
        ext.as_str()
    ))
}

#[derive(Debug, Clone, PartialEq)]
pub enum AssetOutcome {
    Original(Vec<u8>),
    /// Served from the alternate filename.
    Alternate { path: String, bytes: Vec<u8> },
    Placeholder,
}

impl AssetOutcome {
    /// Short label used in the `x-asset-fallback` response header.
    pub fn label(&self) -> &'static str {
        match self {
            AssetOutcome::Original(_) => "none",
            AssetOutcome::Alternate { .. } => "alternate",
            AssetOutcome::Placeholder => "placeholder",
        }
    }
}

/// Looks up `path`, then its alternate filename once, then gives up.
pub async fn resolve_asset(
    source: &dyn AssetSource,
    path: &str,
) -> Result<AssetOutcome, AppError> {
    if let Some(bytes) = source.read(path).await? {
        return Ok(AssetOutcome::Original(bytes));
    }

    if let Some(alt) = alternate_filename(path) {
        debug!("Asset '{path}' missing, trying '{alt}'");
        if let Some(bytes) = source.read(&alt).await? {
            return Ok(AssetOutcome::Alternate { path: alt, bytes });
        }
    }

    Ok(AssetOutcome::Placeholder)
}

/// How a project image is referenced from the rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageRef {
    /// Absolute URL, emitted as-is.
    Remote(&'static str),
    /// Path under the assets directory, emitted as `/assets/<path>`.
    Local(String),
    Placeholder,
}

impl ImageRef {
    pub fn classify(image: Option<&'static str>) -> Self {
        match image.map(str::trim) {
            None | Some("") => ImageRef::Placeholder,
            Some(url)
                if url.starts_with("http://")
                    || url.starts_with("https://")
                    || url.starts_with("//") =>
            {
                ImageRef::Remote(url)
            }
            Some(path) => {
                let relative = path.trim_start_matches('/');
                let relative = relative.strip_prefix("assets/").unwrap_or(relative);
                ImageRef::Local(format!("/assets/{relative}"))
            }
        }
    }

    pub fn src(&self) -> Option<&str> {
        match self {
            ImageRef::Remote(url) => Some(*url),
            ImageRef::Local(path) => Some(path.as_str()),
            ImageRef::Placeholder => None,
        }
    }
}
