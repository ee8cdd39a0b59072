use std::collections::BTreeMap;

/// One character position in the set of inserted strings.
///
/// `count` is the number of inserted strings whose prefix runs through this
/// node. The character itself is the key under which the node is stored in
/// its parent's `children` map.
#[derive(Debug, Default)]
pub struct TrieNode {
    pub count: usize,
    pub children: BTreeMap<char, TrieNode>,
}

/// Character-level trie with per-node occurrence counts.
///
/// Built once per detection run and discarded after the prefix is extracted.
#[derive(Debug, Default)]
pub struct PrefixTrie {
    root: TrieNode,
    total: usize,
}

impl PrefixTrie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a string character by character, creating child nodes on
    /// demand and incrementing `count` at every node visited.
    ///
    /// Iterative on purpose: pathological inputs (very long shared paths)
    /// must not be limited by call-stack depth. Duplicate strings increment
    /// counts without creating new nodes.
    pub fn insert(&mut self, string: &str) {
        self.total += 1;
        let mut node = &mut self.root;
        for ch in string.chars() {
            node = node.children.entry(ch).or_default();
            node.count += 1;
        }
    }

    /// Number of strings inserted so far, duplicates included.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn root(&self) -> &TrieNode {
        &self.root
    }
}
