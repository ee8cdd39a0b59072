use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PackageError {
    #[error("couldn't find {0}")]
    NotFound(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("invalid JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("no \"name\" field in {0}")]
    MissingName(PathBuf),
}

/// Locate `filename` by walking upward from `start` until the filesystem
/// root is reached. `start` is canonicalized first so the walk always runs
/// over an absolute path.
pub fn find_file(filename: &str, start: &Path) -> Result<PathBuf, PackageError> {
    let mut dir = fs::canonicalize(start)?;
    loop {
        let candidate = dir.join(filename);
        if candidate.is_file() {
            return Ok(candidate);
        }
        if !dir.pop() {
            return Err(PackageError::NotFound(filename.to_string()));
        }
    }
}

/// Resolve the consuming package's name: find the nearest `package.json`
/// above `start` and read its `name` field.
pub fn package_name(start: &Path) -> Result<String, PackageError> {
    let file = find_file("package.json", start)?;
    let text = fs::read_to_string(&file)?;
    let json: serde_json::Value =
        serde_json::from_str(&text).map_err(|source| PackageError::Parse {
            path: file.clone(),
            source,
        })?;
    json.get("name")
        .and_then(|v| v.as_str())
        .map(str::to_owned)
        .ok_or(PackageError::MissingName(file))
}
