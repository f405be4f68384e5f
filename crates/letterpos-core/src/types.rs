//! Type/token aggregation of a word sample.

use std::collections::{BTreeMap, HashMap};

/// Word length → (word → token count).
pub type TypeCounts = BTreeMap<usize, HashMap<String, u64>>;

/// Group words by length and count occurrences of each distinct word.
///
/// Input is assumed to be normalized already; nothing is filtered here.
pub fn aggregate<S: AsRef<str>>(words: &[S]) -> TypeCounts {
    let mut types = TypeCounts::new();
    for word in words {
        let word = word.as_ref();
        *types
            .entry(word.len())
            .or_default()
            .entry(word.to_string())
            .or_insert(0) += 1;
    }
    types
}

/// Total tokens across every length.
pub fn token_count(types: &TypeCounts) -> u64 {
    types.values().flat_map(|words| words.values()).sum()
}
