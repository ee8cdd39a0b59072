use std::path::PathBuf;

use maprebase_core::{rewrite_document, NormalizedIndex, SourceDocument, SourceMapData};

fn doc(path: &str, sources: &[&str]) -> SourceDocument {
    SourceDocument {
        path: PathBuf::from(path),
        map: SourceMapData::new(sources.iter().map(|s| s.to_string()).collect()),
    }
}

#[test]
fn matching_sources_become_package_relative() {
    let mut d = doc(
        "/home/u/proj/lib/bundle.js.map",
        &["../../src/a.js", "../../src/b.js"],
    );
    let index = NormalizedIndex::build(std::slice::from_ref(&d), true);

    let log = rewrite_document(&mut d, &index, "/home/u/proj/", "mylib");

    assert_eq!(d.map.sources, vec!["mylib/src/a.js", "mylib/src/b.js"]);
    assert_eq!(log[0].original, "../../src/a.js");
    assert_eq!(log[0].result, "mylib/src/a.js");
}

#[test]
fn non_matching_sources_are_left_byte_identical() {
    let mut d = doc("/p/a.js.map", &["/app/src/x.js", "/elsewhere/y.js"]);
    let index = NormalizedIndex::build(std::slice::from_ref(&d), true);

    rewrite_document(&mut d, &index, "/app/", "mylib");

    assert_eq!(d.map.sources, vec!["mylib/src/x.js", "/elsewhere/y.js"]);
}

#[test]
fn empty_prefix_rewrites_nothing() {
    let mut d = doc("/p/a.js.map", &["/app/src/x.js", "rel/y.js"]);
    let index = NormalizedIndex::build(std::slice::from_ref(&d), true);

    let log = rewrite_document(&mut d, &index, "", "mylib");

    assert_eq!(d.map.sources, vec!["/app/src/x.js", "rel/y.js"]);
    assert!(log.iter().all(|e| e.original == e.result));
}

#[test]
fn log_records_every_source_in_order() {
    let mut d = doc("/p/a.js.map", &["/app/a.js", "skip.js", "/app/b.js"]);
    let index = NormalizedIndex::build(std::slice::from_ref(&d), true);

    let log = rewrite_document(&mut d, &index, "/app/", "lib");

    let originals: Vec<&str> = log.iter().map(|e| e.original.as_str()).collect();
    assert_eq!(originals, vec!["/app/a.js", "skip.js", "/app/b.js"]);
    let results: Vec<&str> = log.iter().map(|e| e.result.as_str()).collect();
    assert_eq!(results, vec!["lib/a.js", "skip.js", "lib/b.js"]);
}

#[test]
fn source_count_and_order_never_change() {
    let mut d = doc("/p/a.js.map", &["/app/b.js", "/app/a.js", "/app/b.js"]);
    let index = NormalizedIndex::build(std::slice::from_ref(&d), true);

    rewrite_document(&mut d, &index, "/app/", "lib");

    assert_eq!(d.map.sources, vec!["lib/b.js", "lib/a.js", "lib/b.js"]);
}

#[test]
fn duplicate_separators_are_trimmed_at_the_join() {
    // A prefix without a trailing slash leaves one on the remainder; the
    // join must not produce "lib//src/x.js".
    let mut d = doc("/p/a.js.map", &["/app/src/x.js"]);
    let index = NormalizedIndex::build(std::slice::from_ref(&d), true);

    rewrite_document(&mut d, &index, "/app", "lib");

    assert_eq!(d.map.sources, vec!["lib/src/x.js"]);
}

#[test]
fn prefix_comparison_is_plain_string_based() {
    // "/app/s" is not a full path segment; the rewrite still applies.
    let mut d = doc("/p/a.js.map", &["/app/src/x.js"]);
    let index = NormalizedIndex::build(std::slice::from_ref(&d), true);

    rewrite_document(&mut d, &index, "/app/s", "lib");

    assert_eq!(d.map.sources, vec!["lib/rc/x.js"]);
}
