pub mod collect;
pub mod discover;
pub mod document;
pub mod normalize;
pub mod package;
pub mod pipeline;
pub mod prefix;
pub mod rewrite;
pub mod trie;

pub use collect::{collect_sources, NormalizedIndex};
pub use discover::{discover_files, DiscoverError};
pub use document::{DocumentError, SourceDocument, SourceMapData};
pub use normalize::normalize_join;
pub use package::{find_file, package_name, PackageError};
pub use pipeline::{run, PipelineError, PrefixSource, RunOptions, RunSummary};
pub use prefix::{detect_prefix, DOMINANCE_THRESHOLD};
pub use rewrite::{rewrite_document, RewriteEntry};
pub use trie::{PrefixTrie, TrieNode};
