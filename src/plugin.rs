//! The `Bricks` plugin: one config, one registry, all host hooks.
//!
//! A host creates a single [`Bricks`] per process and calls
//! [`Bricks::before_build`] at the start of every build, so that records
//! from a previous watch/serve rebuild never leak into the next one.

use crate::{
    config::{BricksConfig, FilterName},
    favicons, fragment, log, markdown,
    registry::{Brick, PageContext, RegistryStore, declare_dependency_point, inject_dependencies, register_brick},
    site_data::SiteData,
};
use anyhow::Result;
use std::{borrow::Cow, path::Path};

#[derive(Debug, Default)]
pub struct Bricks {
    config: BricksConfig,
    registry: RegistryStore,
}

impl Bricks {
    pub fn new(config: BricksConfig) -> Self {
        Self { config, registry: RegistryStore::new() }
    }

    /// Load and validate `bricks.toml`, then build the plugin.
    pub fn from_config_path(path: &Path) -> Result<Self> {
        let config = BricksConfig::from_path(path)?;
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &BricksConfig {
        &self.config
    }

    pub fn registry(&self) -> &RegistryStore {
        &self.registry
    }

    pub fn filter_enabled(&self, name: FilterName) -> bool {
        self.config.filter_enabled(name)
    }

    /// Start of a build: drop every page record.
    pub fn before_build(&self) {
        let dropped = self.registry.clear();
        if dropped > 0 {
            log!("bricks"; "cleared {dropped} page records from the previous build");
        }
    }

    /// Markdown source before parsing.
    pub fn preprocess_markdown<'a>(&self, content: &'a str) -> Cow<'a, str> {
        if self.config.plugins.md_auto_raw_tags {
            markdown::transform_auto_raw(content)
        } else {
            Cow::Borrowed(content)
        }
    }

    /// Markdown text tokens during rendering.
    pub fn render_markdown_text<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.config.plugins.md_auto_nl2br {
            markdown::transform_nl2br(text)
        } else {
            Cow::Borrowed(text)
        }
    }

    /// `brick` shortcode.
    ///
    /// With the registry disabled the brick still renders, but nothing
    /// is recorded.
    pub fn brick(&self, page: &PageContext, brick: Option<&Brick<'_>>) -> String {
        if self.config.plugins.bricks {
            register_brick(&self.registry, page, brick)
        } else {
            brick
                .and_then(|brick| brick.render.as_ref())
                .map(|render| render())
                .unwrap_or_default()
        }
    }

    /// `bricks_registry` shortcode; empty when the registry is disabled.
    pub fn bricks_registry<S: AsRef<str>>(&self, page: &PageContext, dependencies: &[S]) -> &'static str {
        if self.config.plugins.bricks {
            declare_dependency_point(&self.registry, page, dependencies)
        } else {
            ""
        }
    }

    /// Finished output: inject dependencies, then add favicon links.
    pub fn transform<'a>(
        &self,
        page: &PageContext,
        content: &'a str,
        output_path: Option<&str>,
    ) -> Cow<'a, str> {
        let content = if self.config.plugins.bricks {
            inject_dependencies(&self.registry, page, content, output_path)
        } else {
            Cow::Borrowed(content)
        };

        let is_html = output_path.is_some_and(|path| path.ends_with(".html"));
        if !(self.config.plugins.auto_link_favicons && is_html) {
            return content;
        }
        match content {
            Cow::Borrowed(content) => favicons::auto_link_favicons(content),
            Cow::Owned(content) => Cow::Owned(favicons::auto_link_favicons(&content).into_owned()),
        }
    }

    /// `fragment` shortcode.
    pub fn fragment(&self, path: &str) -> String {
        fragment::render_fragment(&self.config.fragments_dir(), path)
    }

    /// Global `site` data, if enabled.
    pub fn site_data(&self) -> Option<SiteData> {
        self.config.plugins.site_data.then(SiteData::from_env)
    }
}
