//! Global `site` data exposed to templates.

use chrono::{Datelike, Local};
use serde::Serialize;

/// Environment variable holding the host's run mode.
pub const RUN_MODE_ENV: &str = "BRICKS_RUN_MODE";

/// Run mode that counts as a production build.
const PRODUCTION_RUN_MODE: &str = "build";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SiteData {
    /// Current year, for copyright lines.
    pub year: i32,
    /// `true` for a one-off build, `false` under serve/watch.
    pub is_prod: bool,
}

impl SiteData {
    pub fn from_run_mode(run_mode: Option<&str>) -> Self {
        Self {
            year: Local::now().year(),
            is_prod: run_mode == Some(PRODUCTION_RUN_MODE),
        }
    }

    /// Read the run mode from [`RUN_MODE_ENV`].
    pub fn from_env() -> Self {
        Self::from_run_mode(std::env::var(RUN_MODE_ENV).ok().as_deref())
    }
}
