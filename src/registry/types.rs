//! Data types for the brick registry.

use rustc_hash::FxHashSet;
use std::{fmt, path::Path};

/// Key used when a page has neither a URL nor an output path.
///
/// All such pages share one record.
pub const FALLBACK_PAGE_KEY: &str = "default";

// ============================================================================
// Page identity
// ============================================================================

/// Identity of a page within one build.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageKey(String);

impl PageKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PageKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

/// What the host knows about the page being processed.
///
/// Empty strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageContext {
    /// Public URL (e.g., "/posts/hello/")
    pub url: Option<String>,
    /// Output file path (e.g., "_site/posts/hello/index.html")
    pub output_path: Option<String>,
}

impl PageContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_output_path(mut self, path: impl AsRef<Path>) -> Self {
        self.output_path = Some(path.as_ref().to_string_lossy().into_owned());
        self
    }

    /// Resolve the page key: URL, then output path, then [`FALLBACK_PAGE_KEY`].
    pub fn key(&self) -> PageKey {
        self.key_or(FALLBACK_PAGE_KEY)
    }

    /// Resolve the page key with a caller-supplied last resort.
    pub(crate) fn key_or(&self, fallback: &str) -> PageKey {
        let url = self.url.as_deref().filter(|s| !s.is_empty());
        let output_path = self.output_path.as_deref().filter(|s| !s.is_empty());
        PageKey::new(url.or(output_path).unwrap_or(fallback))
    }
}

// ============================================================================
// Insertion-ordered set
// ============================================================================

/// String set that iterates in first-insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InsertionSet {
    order: Vec<String>,
    seen: FxHashSet<String>,
}

impl InsertionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value. Returns `false` if it was already present.
    pub fn insert(&mut self, value: &str) -> bool {
        if self.seen.contains(value) {
            return false;
        }
        self.seen.insert(value.to_owned());
        self.order.push(value.to_owned());
        true
    }

    pub fn contains(&self, value: &str) -> bool {
        self.seen.contains(value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl<S: AsRef<str>> Extend<S> for InsertionSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value.as_ref());
        }
    }
}

// ============================================================================
// Page record
// ============================================================================

/// Dependencies collected for one page during a build.
///
/// Dependencies are stored raw; they are sorted into stylesheets and
/// scripts only when the page is injected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageRecord {
    /// Raw identifiers (URLs or paths)
    pub dependencies: InsertionSet,
    /// Inline `<style>` bodies
    pub inline_styles: InsertionSet,
    /// Inline `<script>` bodies
    pub inline_scripts: InsertionSet,
}

impl PageRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty() && self.inline_styles.is_empty() && self.inline_scripts.is_empty()
    }
}

// ============================================================================
// Brick
// ============================================================================

type RenderFn<'a> = Box<dyn Fn() -> String + 'a>;

/// A reusable component with its markup and what it needs on the page.
///
/// ```ignore
/// let brick = Brick::new()
///     .dependency("/css/card.css")
///     .style(".card { padding: 1rem }")
///     .render(|| "<div class=\"card\"></div>".to_string());
/// ```
#[derive(Default)]
pub struct Brick<'a> {
    pub dependencies: Vec<String>,
    pub style: Option<String>,
    pub script: Option<String>,
    pub render: Option<RenderFn<'a>>,
}

impl<'a> Brick<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dependency(mut self, dependency: impl Into<String>) -> Self {
        self.dependencies.push(dependency.into());
        self
    }

    pub fn dependencies<I, S>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies.extend(dependencies.into_iter().map(Into::into));
        self
    }

    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn script(mut self, script: impl Into<String>) -> Self {
        self.script = Some(script.into());
        self
    }

    pub fn render(mut self, render: impl Fn() -> String + 'a) -> Self {
        self.render = Some(Box::new(render));
        self
    }

    /// Inline style, if it has any non-whitespace content.
    pub(crate) fn registrable_style(&self) -> Option<&str> {
        self.style.as_deref().filter(|s| !s.trim().is_empty())
    }

    /// Inline script, if it has any non-whitespace content.
    pub(crate) fn registrable_script(&self) -> Option<&str> {
        self.script.as_deref().filter(|s| !s.trim().is_empty())
    }
}

impl fmt::Debug for Brick<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Brick")
            .field("dependencies", &self.dependencies)
            .field("style", &self.style)
            .field("script", &self.script)
            .field("render", &self.render.is_some())
            .finish()
    }
}
