use crate::trie::PrefixTrie;

/// Occurrence share a trie child must exceed for the detected prefix to be
/// extended by its character. Tolerates up to just under 10% outlier paths
/// (vendored or symlinked sources) that would defeat a strict
/// longest-common-prefix computation.
pub const DOMINANCE_THRESHOLD: f64 = 0.9;

/// Detect the dominant common prefix of a set of strings.
///
/// Builds a character trie over all inputs, then walks greedily from the
/// root: at each level the child with the highest count is selected (ties
/// break to the lexicographically smaller character, so insertion order is
/// irrelevant), and the walk continues only while that child's share of the
/// total string count exceeds [`DOMINANCE_THRESHOLD`].
///
/// Fewer than two strings yield the empty string: a single string has no
/// meaningful "common" prefix under the dominance test.
pub fn detect_prefix<S: AsRef<str>>(strings: &[S]) -> String {
    if strings.len() < 2 {
        return String::new();
    }

    let mut trie = PrefixTrie::new();
    for s in strings {
        trie.insert(s.as_ref());
    }
    let total = trie.total() as f64;

    let mut prefix = String::new();
    let mut node = trie.root();
    loop {
        let best = node
            .children
            .iter()
            .max_by(|a, b| a.1.count.cmp(&b.1.count).then_with(|| b.0.cmp(a.0)));
        match best {
            Some((&ch, child)) if child.count as f64 / total > DOMINANCE_THRESHOLD => {
                prefix.push(ch);
                node = child;
            }
            _ => break,
        }
    }
    prefix
}
