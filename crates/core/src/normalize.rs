/// Join `base` with `reference` and collapse `.`/`..` segments.
///
/// The canonical separator is `/`; callers are expected to hand in
/// forward-slash paths and get forward-slash paths back. `base` is the
/// sourcemap file's own path, joined as-is: the first `..` in the reference
/// consumes the map's filename, which is exactly how relative `sources`
/// entries are laid out on disk relative to the map that declares them.
pub fn normalize_join(base: &str, reference: &str) -> String {
    collapse(&format!("{}/{}", base.trim_end_matches('/'), reference))
}

/// Collapse `.`, `..`, and empty segments of a forward-slash path.
/// `..` above an absolute root is dropped; above a relative root it is kept.
fn collapse(path: &str) -> String {
    let absolute = path.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&"..") => segments.push(".."),
                Some(_) => {
                    segments.pop();
                }
                None if absolute => {}
                None => segments.push(".."),
            },
            other => segments.push(other),
        }
    }

    let body = segments.join("/");
    if absolute {
        format!("/{body}")
    } else if body.is_empty() {
        ".".to_string()
    } else {
        body
    }
}
