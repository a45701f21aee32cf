use std::sync::Arc;

use chrono::{Datelike, Utc};

use crate::assets::AssetSource;
use crate::chronology::{build_timeline, Timeline};
use crate::config::Config;
use crate::models::profile::Profile;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub profile: &'static Profile,
    pub config: Config,
    /// Pluggable asset backend. Default: DiskAssets rooted at `config.assets_dir`.
    pub assets: Arc<dyn AssetSource>,
    /// Fixed "now" year. `None` reads the system clock on every request.
    pub pinned_year: Option<i32>,
}

impl AppState {
    pub fn current_year(&self) -> i32 {
        self.pinned_year.unwrap_or_else(|| Utc::now().year())
    }

    pub fn timeline(&self) -> Timeline {
        build_timeline(
            self.profile.education,
            self.profile.experience,
            self.config.timeline_start_year,
            self.current_year(),
        )
    }
}
