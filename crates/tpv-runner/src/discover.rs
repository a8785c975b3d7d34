use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use tracing::{debug, warn};
use walkdir::WalkDir;

const EXTENSIONS: &[&str] = &["yaml", "yml", "json"];

pub fn is_description_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| EXTENSIONS.contains(&e))
}

/// Expand the given paths into description files. Directories are walked
/// recursively in file-name order. Explicit files without a description
/// extension are skipped with a warning.
pub fn collect_description_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_file() {
            if is_description_file(path) {
                files.push(path.clone());
            } else {
                warn!(path = %path.display(), "skipping file without a yaml/json extension");
            }
            continue;
        }
        if !path.is_dir() {
            return Err(anyhow!("no such file or directory: {}", path.display()));
        }
        for entry in WalkDir::new(path).sort_by_file_name() {
            let entry = entry.with_context(|| format!("walk {}", path.display()))?;
            if entry.file_type().is_file() && is_description_file(entry.path()) {
                files.push(entry.into_path());
            }
        }
    }
    debug!(files = files.len(), "collected description files");
    Ok(files)
}
