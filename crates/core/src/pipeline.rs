use std::path::PathBuf;

use log::info;
use rayon::prelude::*;
use thiserror::Error;

use crate::collect::NormalizedIndex;
use crate::discover::{discover_files, DiscoverError};
use crate::document::{DocumentError, SourceDocument};
use crate::package::{package_name, PackageError};
use crate::prefix::detect_prefix;
use crate::rewrite::{rewrite_document, RewriteEntry};

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Package(#[from] PackageError),
    #[error(transparent)]
    Discover(#[from] DiscoverError),
    #[error(transparent)]
    Document(#[from] DocumentError),
}

/// Where the prefix to strip comes from: supplied on the command line, or
/// auto-detected from the union of all source references.
#[derive(Debug, Clone)]
pub enum PrefixSource {
    Explicit(String),
    Auto,
}

#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Directory the glob patterns are resolved against and the
    /// `package.json` walk starts from.
    pub root: PathBuf,
    pub includes: Vec<String>,
    pub excludes: Vec<String>,
    pub prefix: PrefixSource,
    pub dry_run: bool,
}

#[derive(Debug)]
pub struct RunSummary {
    pub package: String,
    pub prefix: String,
    pub files: usize,
    pub sources: usize,
    pub rewritten: usize,
}

/// Run the full rewrite pipeline: resolve the package name, discover and
/// load all sourcemaps, resolve the prefix, rewrite every document, and
/// either print the rewrite log (dry-run) or persist the documents.
///
/// All-or-nothing per run: the first parse or write failure aborts, with no
/// rollback of files already written. Prefix detection needs the global
/// union of sources and completes before any rewriting; the per-document
/// rewrite and persist steps are independent and run in parallel.
pub fn run(opts: &RunOptions) -> Result<RunSummary, PipelineError> {
    let package = package_name(&opts.root)?;
    let files = discover_files(&opts.root, &opts.includes, &opts.excludes)?;
    let mut documents = files
        .iter()
        .map(SourceDocument::load)
        .collect::<Result<Vec<_>, _>>()?;

    let auto = matches!(opts.prefix, PrefixSource::Auto);
    let index = NormalizedIndex::build(&documents, auto);

    let prefix = match &opts.prefix {
        PrefixSource::Explicit(p) => p.clone(),
        PrefixSource::Auto => {
            let detected = detect_prefix(&index.values());
            info!(
                "auto detected {}prefix: '{}'",
                if index.expanded() { "normalized " } else { "" },
                detected
            );
            detected
        }
    };

    let logs: Vec<Vec<RewriteEntry>> = documents
        .par_iter_mut()
        .map(|doc| rewrite_document(doc, &index, &prefix, &package))
        .collect();

    if opts.dry_run {
        for entry in logs.iter().flatten() {
            println!("{} -> {}", entry.original, entry.result);
        }
    } else {
        documents.par_iter().try_for_each(|doc| doc.save())?;
    }

    let sources = logs.iter().map(Vec::len).sum();
    let rewritten = logs
        .iter()
        .flatten()
        .filter(|e| e.original != e.result)
        .count();

    Ok(RunSummary {
        package,
        prefix,
        files: documents.len(),
        sources,
        rewritten,
    })
}
