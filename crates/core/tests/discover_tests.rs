use maprebase_core::{discover_files, DiscoverError};
use tempfile::tempdir;

fn touch(path: &std::path::Path) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, "{}").unwrap();
}

#[test]
fn include_globs_select_matching_files_sorted() {
    let dir = tempdir().unwrap();
    touch(&dir.path().join("maps/b.js.map"));
    touch(&dir.path().join("maps/a.js.map"));
    touch(&dir.path().join("maps/readme.txt"));

    let files = discover_files(dir.path(), &["maps/*.js.map".to_string()], &[]).unwrap();
    assert_eq!(
        files,
        vec![
            dir.path().join("maps/a.js.map"),
            dir.path().join("maps/b.js.map")
        ]
    );
}

#[test]
fn exclude_globs_subtract_from_the_include_set() {
    let dir = tempdir().unwrap();
    touch(&dir.path().join("lib/a.js.map"));
    touch(&dir.path().join("lib/excluded.js.map"));
    touch(&dir.path().join("bundles/c.js.map"));

    let files = discover_files(
        dir.path(),
        &["lib/*.js.map".to_string(), "bundles/*.js.map".to_string()],
        &["lib/excluded.js.map".to_string()],
    )
    .unwrap();
    assert_eq!(
        files,
        vec![
            dir.path().join("bundles/c.js.map"),
            dir.path().join("lib/a.js.map")
        ]
    );
}

#[test]
fn leading_dot_slash_in_patterns_is_ignored() {
    let dir = tempdir().unwrap();
    touch(&dir.path().join("lib/a.js.map"));

    let files = discover_files(dir.path(), &["./lib/*.js.map".to_string()], &[]).unwrap();
    assert_eq!(files, vec![dir.path().join("lib/a.js.map")]);
}

#[test]
fn recursive_globs_descend_directories() {
    let dir = tempdir().unwrap();
    touch(&dir.path().join("lib/deep/nested/x.js.map"));
    touch(&dir.path().join("lib/y.js.map"));

    let files = discover_files(dir.path(), &["lib/**/*.js.map".to_string()], &[]).unwrap();
    assert_eq!(files.len(), 2);
}

#[test]
fn invalid_pattern_is_reported() {
    let dir = tempdir().unwrap();
    let err = discover_files(dir.path(), &["lib/[".to_string()], &[]).unwrap_err();
    assert!(matches!(err, DiscoverError::Pattern(_)));
}
