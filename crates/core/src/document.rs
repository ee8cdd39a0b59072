use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid sourcemap JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// The parsed body of a sourcemap file.
///
/// Only `sources` is interpreted; every other field (`version`, `mappings`,
/// `names`, `sourcesContent`, ...) is captured by the flattened map and
/// written back out unmodified, in its original key order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMapData {
    pub sources: Vec<String>,
    #[serde(flatten)]
    pub rest: serde_json::Map<String, serde_json::Value>,
}

impl SourceMapData {
    pub fn new(sources: Vec<String>) -> Self {
        Self {
            sources,
            rest: serde_json::Map::new(),
        }
    }
}

/// One sourcemap file: its on-disk location plus its parsed body.
///
/// Created once per input file at load time, mutated exactly once by the
/// rewrite engine, then either discarded (dry-run) or persisted.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    pub path: PathBuf,
    pub map: SourceMapData,
}

impl SourceDocument {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DocumentError> {
        let path = path.as_ref().to_path_buf();
        let text = fs::read_to_string(&path).map_err(|source| DocumentError::Read {
            path: path.clone(),
            source,
        })?;
        let map = serde_json::from_str(&text).map_err(|source| DocumentError::Parse {
            path: path.clone(),
            source,
        })?;
        Ok(Self { path, map })
    }

    /// Persist the document back to its originating location as
    /// pretty-printed JSON (2-space indentation).
    pub fn save(&self) -> Result<(), DocumentError> {
        let json =
            serde_json::to_string_pretty(&self.map).map_err(|source| DocumentError::Parse {
                path: self.path.clone(),
                source,
            })?;
        fs::write(&self.path, json).map_err(|source| DocumentError::Write {
            path: self.path.clone(),
            source,
        })
    }

    /// The document's path as a forward-slash string, used as the base for
    /// source-reference normalization.
    pub fn path_str(&self) -> String {
        self.path.to_string_lossy().replace('\\', "/")
    }
}
