use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiscoverError {
    #[error("invalid glob pattern: {0}")]
    Pattern(#[from] globset::Error),
    #[error(transparent)]
    Walk(#[from] walkdir::Error),
}

fn build_set(patterns: &[String]) -> Result<GlobSet, DiscoverError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        // Globs are matched against paths relative to the walk root, which
        // never carry a "./" prefix.
        builder.add(Glob::new(pattern.trim_start_matches("./"))?);
    }
    Ok(builder.build()?)
}

/// Walk `root` and return every file matching at least one include pattern
/// and no exclude pattern. Matching is against the path relative to `root`;
/// results are sorted for determinism.
pub fn discover_files(
    root: &Path,
    includes: &[String],
    excludes: &[String],
) -> Result<Vec<PathBuf>, DiscoverError> {
    let include = build_set(includes)?;
    let exclude = build_set(excludes)?;

    let mut files = Vec::new();
    for entry in walkdir::WalkDir::new(root) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let rel = entry.path().strip_prefix(root).unwrap_or(entry.path());
        if include.is_match(rel) && !exclude.is_match(rel) {
            files.push(entry.path().to_path_buf());
        }
    }
    files.sort();
    Ok(files)
}
