/// Remove the smallest leading-whitespace indent shared by all non-blank lines.
///
/// Relative indentation is preserved. Blank lines do not count towards the
/// minimum; when every line is blank, every line becomes empty.
pub fn unindent(content: &str) -> String {
    let min_indent = content
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.chars().take_while(|c| c.is_whitespace()).count())
        .min()
        .unwrap_or(usize::MAX);

    content
        .split('\n')
        .map(|line| skip_chars(line, min_indent))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Drop the first `n` characters of `line`.
fn skip_chars(line: &str, n: usize) -> &str {
    match line.char_indices().nth(n) {
        Some((idx, _)) => &line[idx..],
        None => "",
    }
}
