//! Markdown preprocessing.
//!
//! - [`transform_auto_raw`]: keep the template engine away from `{{ }}` and
//!   `{% %}` written in markdown sources
//! - [`transform_nl2br`]: literal `\n` in text (e.g., inside table cells)
//!   becomes `<br>`

use regex::Regex;
use std::{borrow::Cow, sync::LazyLock};

static RE_TEMPLATE_DELIMITER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\{\{|\}\}|\{%|%\})").unwrap());

/// Wrap each template delimiter individually in `{% raw %}...{% endraw %}`.
pub fn transform_auto_raw(content: &str) -> Cow<'_, str> {
    RE_TEMPLATE_DELIMITER.replace_all(content, "{% raw %}${1}{% endraw %}")
}

/// Convert literal `\n\n` and `\n` (backslash, then `n`) to `<br>`.
///
/// Real newlines are left alone.
pub fn transform_nl2br(content: &str) -> Cow<'_, str> {
    if !content.contains("\\n") {
        return Cow::Borrowed(content);
    }
    Cow::Owned(content.replace("\\n\\n", "<br>").replace("\\n", "<br>"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_raw_each_delimiter() {
        assert_eq!(transform_auto_raw("{{ name }}"), "{% raw %}{{{% endraw %} name {% raw %}}}{% endraw %}");
        assert_eq!(
            transform_auto_raw("Show {{ and }} and {% and %}"),
            "Show {% raw %}{{{% endraw %} and {% raw %}}}{% endraw %} and {% raw %}{%{% endraw %} and {% raw %}%}{% endraw %}"
        );
    }

    #[test]
    fn test_auto_raw_consecutive() {
        assert_eq!(
            transform_auto_raw("{{{{}}}}"),
            "{% raw %}{{{% endraw %}{% raw %}{{{% endraw %}{% raw %}}}{% endraw %}{% raw %}}}{% endraw %}"
        );
    }

    #[test]
    fn test_auto_raw_multiline() {
        let input = "# Title\n{% if x %}\nText\n{% endif %}";
        let result = transform_auto_raw(input);
        assert_eq!(result.matches("{% raw %}").count(), 4);
        assert!(result.starts_with("# Title\n{% raw %}{%{% endraw %} if x "));
    }

    #[test]
    fn test_auto_raw_passthrough() {
        assert!(matches!(transform_auto_raw("plain text"), Cow::Borrowed("plain text")));
        assert_eq!(transform_auto_raw(""), "");
    }

    #[test]
    fn test_nl2br() {
        assert_eq!(transform_nl2br("Line 1\\nLine 2"), "Line 1<br>Line 2");
        assert_eq!(transform_nl2br("Line 1\\n\\nLine 2"), "Line 1<br>Line 2");
        assert_eq!(transform_nl2br("A\\nB\\n\\nC\\nD"), "A<br>B<br>C<br>D");
        assert_eq!(transform_nl2br("\\n\\n\\n\\n"), "<br><br>");
        assert_eq!(transform_nl2br("\\n"), "<br>");
    }

    #[test]
    fn test_nl2br_keeps_real_newlines() {
        assert_eq!(transform_nl2br("Line 1\nLine 2"), "Line 1\nLine 2");
        assert_eq!(
            transform_nl2br("Text with\\nbackslash-n and\nreal newline"),
            "Text with<br>backslash-n and\nreal newline"
        );
        assert_eq!(transform_nl2br(""), "");
    }
}
