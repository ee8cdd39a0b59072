use std::collections::HashMap;

use crate::document::SourceDocument;
use crate::normalize::normalize_join;

/// Flatten the `sources` of all documents in document order, duplicates
/// preserved.
pub fn collect_sources(documents: &[SourceDocument]) -> Vec<String> {
    documents
        .iter()
        .flat_map(|doc| doc.map.sources.iter().cloned())
        .collect()
}

/// Mapping from original source reference to its normalized form.
///
/// Identity variant: every reference maps to itself. Expanded variant: every
/// reference maps to the join of its owning document's path with the
/// reference, `.`/`..` segments collapsed. Which variant applies is a single
/// global decision made once from the union of all references; it is never
/// decided per document.
#[derive(Debug)]
pub struct NormalizedIndex {
    map: HashMap<String, String>,
    expanded: bool,
}

impl NormalizedIndex {
    /// Build the index. The expanded variant is used only in auto-detection
    /// mode, and only when at least one reference contains `..` — with an
    /// explicit prefix the caller is matching against the references as
    /// written, so they stay untouched.
    ///
    /// A reference appearing in several documents keeps the normalization of
    /// the last document that declared it.
    pub fn build(documents: &[SourceDocument], auto: bool) -> Self {
        let all = collect_sources(documents);
        let expanded = auto && all.iter().any(|s| s.contains(".."));

        let mut map = HashMap::new();
        if expanded {
            for doc in documents {
                let base = doc.path_str();
                for src in &doc.map.sources {
                    map.insert(src.clone(), normalize_join(&base, src));
                }
            }
        } else {
            for src in all {
                let value = src.clone();
                map.insert(src, value);
            }
        }

        Self { map, expanded }
    }

    /// Normalized form of `source`; references outside the index resolve to
    /// themselves.
    pub fn resolve<'a>(&'a self, source: &'a str) -> &'a str {
        self.map.get(source).map(String::as_str).unwrap_or(source)
    }

    pub fn expanded(&self) -> bool {
        self.expanded
    }

    /// The candidate set for prefix detection: the normalized forms, one per
    /// distinct source reference.
    pub fn values(&self) -> Vec<&str> {
        self.map.values().map(String::as_str).collect()
    }
}
