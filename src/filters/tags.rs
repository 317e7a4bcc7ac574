//! HTML tag filters.

use regex::Regex;

/// Remove every `<tag>` / `</tag>`, keeping what is between them.
///
/// Case-insensitive; tags with attributes are matched too.
pub fn strip_tag(html: &str, tag: &str) -> String {
    if html.is_empty() || tag.is_empty() {
        return html.to_owned();
    }
    let tag = regex::escape(tag);
    let (Ok(opening), Ok(closing)) = (
        Regex::new(&format!(r"(?i)<{tag}(?:\s[^>]*)?>")),
        Regex::new(&format!(r"(?i)</{tag}>")),
    ) else {
        return html.to_owned();
    };

    let result = opening.replace_all(html, "");
    closing.replace_all(&result, "").into_owned()
}

/// Remove every `<tag>...</tag>` element together with its content, then
/// any remaining `<tag ... />`.
///
/// Case-insensitive. Elements are matched lazily, so nested elements of the
/// same name are not balanced.
pub fn remove_tag(html: &str, tag: &str) -> String {
    if html.is_empty() || tag.is_empty() {
        return html.to_owned();
    }
    let tag = regex::escape(tag);
    let (Ok(element), Ok(self_closing)) = (
        Regex::new(&format!(r"(?is)<{tag}(?:\s[^>]*)?>.*?</{tag}>")),
        Regex::new(&format!(r"(?i)<{tag}(?:\s[^>]*)?\s*/?>")),
    ) else {
        return html.to_owned();
    };

    let result = element.replace_all(html, "");
    self_closing.replace_all(&result, "").into_owned()
}
