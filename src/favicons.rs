//! Favicons for plain-URL links.
//!
//! A link whose text is just its URL (or contains its domain) gets the
//! site's favicon and a shortened label:
//!
//! ```html
//! <a href="https://example.com/docs">https://example.com/docs</a>
//! <!-- becomes -->
//! <a href="https://example.com/docs" class="whitespace-nowrap" target="_blank"><i><img src="https://www.google.com/s2/favicons?domain=example.com&sz=64"></i><span>/docs</span></a>
//! ```

use regex::{Captures, Regex};
use std::{borrow::Cow, sync::LazyLock};

/// Favicon service; `{domain}` is appended as a query parameter.
const FAVICON_SERVICE: &str = "https://www.google.com/s2/favicons";
/// Requested favicon size in pixels.
const FAVICON_SIZE: u32 = 64;
/// Class added so the icon never wraps away from its label.
const NOWRAP_CLASS: &str = "whitespace-nowrap";

/// Groups: 1 = attributes, 2 = href value, 3 = link text (no nested tags)
static RE_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<a\s+([^>]*href=["']([^"']+)["'][^>]*)>([^<]+)</a>"#).unwrap()
});
static RE_URL_HOST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[A-Za-z][A-Za-z0-9+.-]*:)?//(?:[^/?#@]*@)?([^/?#:]+)").unwrap()
});
static RE_PROTOCOL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^https?://").unwrap());
static RE_HAS_CLASS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"class\s*=\s*["']"#).unwrap());
static RE_CLASS_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)class\s*=\s*["']([^"']*)["']"#).unwrap());
static RE_HAS_TARGET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"target\s*=").unwrap());

/// Add favicons to every plain-URL link in `html`.
pub fn auto_link_favicons(html: &str) -> Cow<'_, str> {
    replace_links(html, transform_link)
}

/// Replace each `<a href=...>text</a>` using `transformer(whole, attrs, url, text)`.
pub fn replace_links<'a, F>(html: &'a str, transformer: F) -> Cow<'a, str>
where
    F: Fn(&str, &str, &str, &str) -> String,
{
    RE_LINK.replace_all(html, |caps: &Captures| {
        transformer(&caps[0], &caps[1], &caps[2], &caps[3])
    })
}

/// Transform one link, or return `whole` unchanged if it does not qualify.
pub fn transform_link(whole: &str, attrs: &str, url: &str, text: &str) -> String {
    match link_host(url) {
        Some(domain) if is_plain_url_text(text, &domain) => {
            build_favicon_link(attrs, &domain, &clean_link_text(text, &domain))
        }
        _ => whole.to_owned(),
    }
}

/// Lowercased host of an absolute or protocol-relative URL.
pub fn link_host(url: &str) -> Option<String> {
    RE_URL_HOST
        .captures(url.trim())
        .map(|caps| caps[1].to_ascii_lowercase())
        .filter(|host| !host.is_empty())
}

/// Whether the link text looks like a bare URL or domain.
pub fn is_plain_url_text(text: &str, domain: &str) -> bool {
    let text = text.trim();
    text.contains(domain) || RE_PROTOCOL.is_match(text)
}

/// Strip protocol, trailing slash and domain from link text.
///
/// Falls back to the text with its domain when too little would remain.
pub fn clean_link_text(text: &str, domain: &str) -> String {
    let cleaned = RE_PROTOCOL.replace(text.trim(), "");
    let cleaned = cleaned.strip_suffix('/').unwrap_or(&cleaned);
    let without_domain = cleaned.replacen(domain, "", 1);
    if without_domain.chars().count() > 2 {
        without_domain
    } else {
        cleaned.to_owned()
    }
}

/// Build the final `<a>` with favicon and label.
pub fn build_favicon_link(attrs: &str, domain: &str, text: &str) -> String {
    let mut updated = if RE_HAS_CLASS.is_match(attrs) {
        RE_CLASS_VALUE
            .replace(attrs, format!("class=\"${{1}} {NOWRAP_CLASS}\""))
            .into_owned()
    } else {
        format!("{attrs} class=\"{NOWRAP_CLASS}\"")
    };
    if !RE_HAS_TARGET.is_match(attrs) {
        updated.push_str(" target=\"_blank\"");
    }
    format!(
        "<a {updated}><i><img src=\"{FAVICON_SERVICE}?domain={domain}&sz={FAVICON_SIZE}\"></i><span>{text}</span></a>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_markdown(_: &str, _: &str, url: &str, text: &str) -> String {
        format!("[{text}]({url})")
    }

    #[test]
    fn test_is_plain_url_text() {
        assert!(is_plain_url_text("example.com", "example.com"));
        assert!(is_plain_url_text("http://foo.org", "example.com"));
        assert!(is_plain_url_text("  https://example.com/docs  ", "example.com"));
        assert!(!is_plain_url_text("Click here", "example.com"));
        assert!(!is_plain_url_text("", "example.com"));
    }

    #[test]
    fn test_clean_link_text() {
        assert_eq!(clean_link_text("https://example.com/docs", "example.com"), "/docs");
        assert_eq!(clean_link_text("example.com/path/to/page", "example.com"), "/path/to/page");
        assert_eq!(clean_link_text("\nhttps://example.com/docs\n", "example.com"), "/docs");
        assert_eq!(clean_link_text("https://example.com/search?q=test", "example.com"), "/search?q=test");
        assert_eq!(clean_link_text("https://example.com/page#section", "example.com"), "/page#section");
    }

    #[test]
    fn test_clean_link_text_short_path_keeps_domain() {
        assert_eq!(clean_link_text("example.com/", "example.com"), "example.com");
        assert_eq!(clean_link_text("https://example.com", "example.com"), "example.com");
        assert_eq!(clean_link_text("https://example.com/a", "example.com"), "example.com/a");
    }

    #[test]
    fn test_build_favicon_link() {
        assert_eq!(
            build_favicon_link(r#"href="https://example.com/docs""#, "example.com", "/docs"),
            r#"<a href="https://example.com/docs" class="whitespace-nowrap" target="_blank"><i><img src="https://www.google.com/s2/favicons?domain=example.com&sz=64"></i><span>/docs</span></a>"#
        );
    }

    #[test]
    fn test_build_favicon_link_existing_class_and_target() {
        let result = build_favicon_link(r#"href="https://example.com" class="link""#, "example.com", "text");
        assert!(result.starts_with(r#"<a href="https://example.com" class="link whitespace-nowrap" target="_blank">"#));

        let result = build_favicon_link(r#"href="https://example.com" target="_self""#, "example.com", "text");
        assert!(result.contains(r#"target="_self""#));
        assert!(!result.contains("_blank"));
    }

    #[test]
    fn test_link_host() {
        assert_eq!(link_host("https://Example.com/docs").as_deref(), Some("example.com"));
        assert_eq!(link_host("https://example.com:8080/page").as_deref(), Some("example.com"));
        assert_eq!(link_host("//cdn.example.com/x").as_deref(), Some("cdn.example.com"));
        assert_eq!(link_host("https://user@example.com").as_deref(), Some("example.com"));
        assert_eq!(link_host("/relative/path"), None);
        assert_eq!(link_host("not-a-url"), None);
    }

    #[test]
    fn test_transform_link() {
        let whole = r#"<a href="https://example.com/docs">https://example.com/docs</a>"#;
        let result = transform_link(whole, r#"href="https://example.com/docs""#, "https://example.com/docs", "https://example.com/docs");
        assert!(result.ends_with("<span>/docs</span></a>"));

        let whole = r#"<a href="https://example.com">example.com</a>"#;
        let result = transform_link(whole, r#"href="https://example.com""#, "https://example.com", "example.com");
        assert!(result.ends_with("<span>example.com</span></a>"));
    }

    #[test]
    fn test_transform_link_leaves_custom_text_and_invalid_urls() {
        let whole = r#"<a href="https://example.com/docs">Click here</a>"#;
        assert_eq!(transform_link(whole, r#"href="https://example.com/docs""#, "https://example.com/docs", "Click here"), whole);

        let whole = r#"<a href="not-a-url">not-a-url</a>"#;
        assert_eq!(transform_link(whole, r#"href="not-a-url""#, "not-a-url", "not-a-url"), whole);
    }

    #[test]
    fn test_replace_links_captures() {
        let html = r#"<a class="x" href='https://example.com'>Link1</a><A href="https://other.com" rel="me">Link2</A>"#;
        assert_eq!(
            replace_links(html, as_markdown),
            "[Link1](https://example.com)[Link2](https://other.com)"
        );
    }

    #[test]
    fn test_replace_links_skips_nested_markup() {
        let html = r#"<a href="https://example.com"><b>Bold</b></a>"#;
        assert_eq!(replace_links(html, as_markdown), html);
        assert_eq!(replace_links("", as_markdown), "");
    }

    #[test]
    fn test_auto_link_favicons_mixed() {
        let html = r#"<p><a href="https://github.com/repo">https://github.com/repo</a> and <a href="https://example.com">docs</a></p>"#;
        let result = auto_link_favicons(html);
        assert!(result.contains("domain=github.com&sz=64"));
        assert!(result.contains("<span>/repo</span>"));
        assert!(result.contains(r#"<a href="https://example.com">docs</a>"#));
    }
}
