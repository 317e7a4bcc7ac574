//! Reusable content fragments under `<input>/_fragments/`.

use crate::log;
use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Read `path` relative to `fragments_dir`.
///
/// A leading `/` still resolves inside `fragments_dir`.
pub fn load_fragment(fragments_dir: &Path, path: &str) -> Result<String> {
    let fragment_path = fragments_dir.join(path.trim_start_matches(['/', '\\']));
    fs::read_to_string(&fragment_path)
        .with_context(|| format!("failed to read fragment {}", fragment_path.display()))
}

/// Fragment content, or an HTML comment marker if it cannot be read.
///
/// Never fails: a missing fragment should not abort the build.
pub fn render_fragment(fragments_dir: &Path, path: &str) -> String {
    load_fragment(fragments_dir, path).unwrap_or_else(|err| {
        log!("error"; "{err:#}");
        not_found_marker(path)
    })
}

fn not_found_marker(path: &str) -> String {
    format!("<!-- Fragment not found: {path} -->")
}
