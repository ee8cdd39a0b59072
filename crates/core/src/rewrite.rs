use crate::collect::NormalizedIndex;
use crate::document::SourceDocument;

/// One `original -> result` pair recorded during a rewrite, including
/// entries the engine left unchanged. Used for dry-run display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteEntry {
    pub original: String,
    pub result: String,
}

/// Rewrite one document's sources in place.
///
/// Each reference is resolved through the index; if its normalized form
/// starts with `prefix` (plain string comparison, not segment-aware), the
/// prefix is stripped and the remainder is joined onto `package_name`.
/// Non-matching references are left byte-identical. Source count and order
/// never change.
///
/// An empty prefix rewrites nothing: every string starts with `""`, and
/// prepending the package name to every source when detection found no
/// dominant prefix would be a destructive no-op guess.
pub fn rewrite_document(
    doc: &mut SourceDocument,
    index: &NormalizedIndex,
    prefix: &str,
    package_name: &str,
) -> Vec<RewriteEntry> {
    let mut log = Vec::with_capacity(doc.map.sources.len());
    for src in &mut doc.map.sources {
        let normalized = index.resolve(src);
        let result = if !prefix.is_empty() && normalized.starts_with(prefix) {
            package_join(package_name, &normalized[prefix.len()..])
        } else {
            src.clone()
        };
        log.push(RewriteEntry {
            original: src.clone(),
            result: result.clone(),
        });
        *src = result;
    }
    log
}

fn package_join(name: &str, rest: &str) -> String {
    let name = name.trim_end_matches('/');
    let rest = rest.trim_start_matches('/');
    if rest.is_empty() {
        name.to_string()
    } else {
        format!("{name}/{rest}")
    }
}
