//! Transform-pass entry point: replace the placeholder with collected markup.

use std::borrow::Cow;
use std::fmt::Write;

use super::collect::PLACEHOLDER;
use super::store::RegistryStore;
use super::types::{PageContext, PageRecord};

/// Kind of an external dependency, decided from its file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyKind {
    Stylesheet,
    Script,
}

impl DependencyKind {
    /// Classify a raw identifier. Returns `None` for anything that is
    /// neither a stylesheet nor a script.
    pub fn classify(dependency: &str) -> Option<Self> {
        if looks_like_stylesheet(dependency) {
            Some(Self::Stylesheet)
        } else if looks_like_script(dependency) {
            Some(Self::Script)
        } else {
            None
        }
    }
}

/// `foo.css` or `foo.css?v=2`
pub fn looks_like_stylesheet(dependency: &str) -> bool {
    has_extension(dependency, ".css")
}

/// `foo.js` or `foo.js?v=2`
pub fn looks_like_script(dependency: &str) -> bool {
    has_extension(dependency, ".js")
}

#[inline]
fn has_extension(dependency: &str, ext: &str) -> bool {
    dependency.ends_with(ext) || dependency.contains(&format!("{ext}?"))
}

/// Build the markup that replaces the placeholder.
///
/// Order is fixed: stylesheet links, inline styles, script links, inline
/// scripts. Within each group, items keep their registration order.
pub fn render_dependencies(record: &PageRecord) -> String {
    let (styles, scripts): (Vec<_>, Vec<_>) = record
        .dependencies
        .iter()
        .filter_map(|dep| DependencyKind::classify(dep).map(|kind| (kind, dep)))
        .partition(|(kind, _)| *kind == DependencyKind::Stylesheet);

    let mut html = String::from("\n");
    for (_, href) in &styles {
        let _ = writeln!(html, "  <link rel=\"stylesheet\" href=\"{href}\">");
    }
    for style in record.inline_styles.iter() {
        let _ = writeln!(html, "  <style>{style}</style>");
    }
    for (_, src) in &scripts {
        let _ = writeln!(html, "  <script src=\"{src}\"></script>");
    }
    for script in record.inline_scripts.iter() {
        let _ = writeln!(html, "  <script>{script}</script>");
    }
    html.push_str("  ");
    html
}

/// Replace the placeholder in a finished document with the page's dependencies.
///
/// Returns the input untouched when the output is not HTML, the page has
/// no record, or the placeholder is absent.
pub fn inject_dependencies<'a>(
    store: &RegistryStore,
    page: &PageContext,
    content: &'a str,
    output_path: Option<&str>,
) -> Cow<'a, str> {
    let Some(output_path) = output_path.filter(|path| path.ends_with(".html")) else {
        return Cow::Borrowed(content);
    };
    if !content.contains(PLACEHOLDER) {
        return Cow::Borrowed(content);
    }
    let Some(record) = store.get(&page.key_or(output_path)) else {
        return Cow::Borrowed(content);
    };

    Cow::Owned(content.replacen(PLACEHOLDER, &render_dependencies(&record), 1))
}
