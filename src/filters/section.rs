//! Named section extraction.
//!
//! Content format:
//!
//! ```text
//! <!--section:intro-->
//! This is the intro content
//! <!--section:footer,sidebar-->
//! This appears in both footer and sidebar sections
//! ```

use regex::Regex;
use std::sync::LazyLock;

/// Start of any section marker; also ends the previous section.
const SECTION_START: &str = "<!--section";

static RE_SECTION_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<!--section:([^>]+)-->").unwrap());

/// Extract every section named `name` (case-insensitive) and concatenate them.
///
/// A section runs from its marker to the next `<!--section` or the end of
/// the text.
pub fn section(content: &str, name: &str) -> String {
    if content.is_empty() || name.is_empty() {
        return String::new();
    }
    let target = name.trim().to_lowercase();

    let mut result = String::new();
    let mut pos = 0;
    while let Some(caps) = RE_SECTION_MARKER.captures_at(content, pos) {
        let body_start = caps.get(0).map_or(content.len(), |m| m.end());
        let body_end = content[body_start..]
            .find(SECTION_START)
            .map_or(content.len(), |offset| body_start + offset);

        let matches = caps[1]
            .split(',')
            .any(|n| n.trim().to_lowercase() == target);
        if matches {
            result.push_str(&content[body_start..body_end]);
        }
        pos = body_end;
    }
    result
}
