//! Plugin configuration for `bricks.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                          |
//! |-------------|--------------------------------------------------|
//! | `filters`   | Names of the template filters to enable          |
//! | `[plugins]` | Preprocessors, transforms and the brick registry |
//! | `[paths]`   | Input directory and fragments location           |
//!
//! # Example
//!
//! ```toml
//! filters = ["attr_set", "merge", "section"]
//!
//! [plugins]
//! md_auto_raw_tags = true
//! auto_link_favicons = true
//!
//! [paths]
//! input = "src"
//! ```

pub mod defaults;
mod error;

pub use error::ConfigError;

use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing bricks.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BricksConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Filters to expose to templates
    #[serde(default)]
    pub filters: Vec<FilterName>,

    /// Preprocessors, transforms and shortcodes
    #[serde(default)]
    pub plugins: PluginsConfig,

    /// Filesystem locations
    #[serde(default)]
    pub paths: PathsConfig,
}

/// `[plugins]` section - switches for each lifecycle integration.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct PluginsConfig {
    /// Escape template delimiters in markdown sources.
    #[serde(default)]
    pub md_auto_raw_tags: bool,

    /// Turn literal `\n` in markdown text into `<br>`.
    #[serde(default)]
    pub md_auto_nl2br: bool,

    /// Add favicons to links whose text is a plain URL.
    #[serde(default)]
    pub auto_link_favicons: bool,

    /// Expose `site.year` and `site.is_prod`.
    #[serde(default)]
    pub site_data: bool,

    /// Brick shortcodes and dependency injection.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = defaults::r#true())]
    pub bricks: bool,
}

/// `[paths]` section.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct PathsConfig {
    /// Input directory of the site.
    #[serde(default = "defaults::paths::input")]
    #[educe(Default = defaults::paths::input())]
    pub input: PathBuf,

    /// Fragments directory, relative to `input`.
    #[serde(default = "defaults::paths::fragments")]
    #[educe(Default = defaults::paths::fragments())]
    pub fragments: PathBuf,
}

/// Template filters shipped with the plugin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterName {
    AttrSet,
    AttrIncludes,
    AttrConcat,
    Merge,
    RemoveTag,
    StripTag,
    If,
    Section,
    Unindent,
    WhereIn,
}

impl FilterName {
    /// Name under which the filter is registered in templates.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AttrSet => "attr_set",
            Self::AttrIncludes => "attr_includes",
            Self::AttrConcat => "attr_concat",
            Self::Merge => "merge",
            Self::RemoveTag => "remove_tag",
            Self::StripTag => "strip_tag",
            Self::If => "if",
            Self::Section => "section",
            Self::Unindent => "unindent",
            Self::WhereIn => "where_in",
        }
    }
}

impl fmt::Display for FilterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl BricksConfig {
    /// Parse configuration from TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        let config: BricksConfig = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let mut config: Self = toml::from_str(&content)
            .map_err(|err| ConfigError::Parse(path.to_path_buf(), err))?;
        config.config_path = path.to_path_buf();
        Ok(config)
    }

    /// Directory that `fragment` shortcodes read from.
    pub fn fragments_dir(&self) -> PathBuf {
        self.paths.input.join(&self.paths.fragments)
    }

    /// Check whether a filter was requested.
    pub fn filter_enabled(&self, name: FilterName) -> bool {
        self.filters.contains(&name)
    }

    /// Validate configuration values that serde cannot check.
    pub fn validate(&self) -> Result<()> {
        if self.paths.input.as_os_str().is_empty() {
            bail!(ConfigError::Validation(
                "[paths.input] must not be empty".into()
            ));
        }
        if self.paths.fragments.is_absolute() {
            bail!(ConfigError::Validation(
                "[paths.fragments] must be relative to [paths.input]".into()
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
