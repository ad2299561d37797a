use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use glob::{Pattern, glob};

use crate::config::CATALOG_PATTERN;

/// Find every catalog below `root`, sorted by path.
///
/// Directories whose name happens to end in `.po` are skipped. An unreadable
/// directory below `root` aborts discovery.
pub fn discover_catalogs(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.exists() {
        bail!("Path '{}' does not exist.", root.display());
    }
    if !root.is_dir() {
        bail!("'{}' is not a directory.", root.display());
    }

    let escaped_root = Pattern::escape(&root.to_string_lossy());
    let full_pattern = Path::new(&escaped_root).join(CATALOG_PATTERN);
    let pattern_str = full_pattern.to_string_lossy();

    let entries = glob(&pattern_str)
        .with_context(|| format!("Invalid glob pattern: \"{}\"", pattern_str))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.context("Failed to search for .po files")?;
        if path.is_file() {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Render a catalog path relative to the project root for reports.
pub fn display_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .to_string()
}
