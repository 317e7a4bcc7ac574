//! Render-pass entry points: brick registration and the injection point.

use super::store::RegistryStore;
use super::types::{Brick, PageContext};

/// Marker left in the page where collected dependencies are injected.
pub const PLACEHOLDER: &str = "<!-- BRICK_DEPENDENCIES_PLACEHOLDER -->";

/// Register a brick's dependencies for the current page and render it.
///
/// Returns the brick's own markup; dependency markup is only ever emitted
/// at the placeholder. A missing brick renders as an empty string and
/// leaves the registry untouched.
pub fn register_brick(store: &RegistryStore, page: &PageContext, brick: Option<&Brick<'_>>) -> String {
    let Some(brick) = brick else {
        return String::new();
    };

    store.with_page(&page.key(), |record| {
        record.dependencies.extend(&brick.dependencies);
        if let Some(style) = brick.registrable_style() {
            record.inline_styles.insert(style);
        }
        if let Some(script) = brick.registrable_script() {
            record.inline_scripts.insert(script);
        }
    });

    brick.render.as_ref().map(|render| render()).unwrap_or_default()
}

/// Declare where the page's dependencies go, seeding page-level ones.
///
/// Expected once per page; only the first placeholder in the finished
/// document is replaced.
pub fn declare_dependency_point<S: AsRef<str>>(
    store: &RegistryStore,
    page: &PageContext,
    dependencies: &[S],
) -> &'static str {
    store.with_page(&page.key(), |record| {
        record.dependencies.extend(dependencies);
    });
    PLACEHOLDER
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::PageKey;
    use std::cell::Cell;

    fn page_a() -> PageContext {
        PageContext::new().with_url("/a/")
    }

    #[test]
    fn test_register_returns_rendered_markup() {
        let store = RegistryStore::new();
        let brick = Brick::new()
            .dependency("card.css")
            .render(|| "<div class=\"card\"></div>".to_string());

        let html = register_brick(&store, &page_a(), Some(&brick));
        assert_eq!(html, "<div class=\"card\"></div>");
        assert!(!html.contains("card.css"));
    }

    #[test]
    fn test_register_without_render_returns_empty() {
        let store = RegistryStore::new();
        let brick = Brick::new().style("a{}");
        assert_eq!(register_brick(&store, &page_a(), Some(&brick)), "");
        assert_eq!(store.get(&PageKey::from("/a/")).unwrap().inline_styles.len(), 1);
    }

    #[test]
    fn test_register_missing_brick_is_noop() {
        let store = RegistryStore::new();
        assert_eq!(register_brick(&store, &page_a(), None), "");
        assert!(store.is_empty());
    }

    #[test]
    fn test_register_calls_render_once() {
        let store = RegistryStore::new();
        let calls = Cell::new(0);
        let brick = Brick::new().render(|| {
            calls.set(calls.get() + 1);
            "x".to_string()
        });

        register_brick(&store, &page_a(), Some(&brick));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_register_dedups_across_bricks() {
        let store = RegistryStore::new();
        let first = Brick::new().dependency("x.css").style("body{color:red}");
        let second = Brick::new()
            .dependencies(["x.css", "y.js"])
            .style("body{color:red}")
            .script("init()");

        register_brick(&store, &page_a(), Some(&first));
        register_brick(&store, &page_a(), Some(&second));

        let record = store.get(&PageKey::from("/a/")).unwrap();
        assert_eq!(record.dependencies.iter().collect::<Vec<_>>(), vec!["x.css", "y.js"]);
        assert_eq!(record.inline_styles.len(), 1);
        assert_eq!(record.inline_scripts.len(), 1);
    }

    #[test]
    fn test_register_skips_blank_inline_code() {
        let store = RegistryStore::new();
        let brick = Brick::new().style("   ").script("\n");
        register_brick(&store, &page_a(), Some(&brick));

        let record = store.get(&PageKey::from("/a/")).unwrap();
        assert!(record.is_empty());
    }

    #[test]
    fn test_declare_returns_placeholder_and_seeds_record() {
        let store = RegistryStore::new();
        let marker = declare_dependency_point(&store, &page_a(), &["base.css", "base.css"]);

        assert_eq!(marker, PLACEHOLDER);
        let record = store.get(&PageKey::from("/a/")).unwrap();
        assert_eq!(record.dependencies.len(), 1);
    }

    #[test]
    fn test_declare_without_dependencies_creates_record() {
        let store = RegistryStore::new();
        let none: &[&str] = &[];
        declare_dependency_point(&store, &page_a(), none);
        assert!(store.contains(&PageKey::from("/a/")));
    }
}
