//! Token normalization and dictionary membership.
//!
//! A raw token becomes a [`Word`] only if, after punctuation handling,
//! uppercasing and optional accent stripping, it is 3–7 ASCII capitals long
//! and (when a [`Dictionary`] is loaded) a member of that dictionary.
//! Rejected tokens are dropped silently.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// A normalized, accepted word: `A-Z` only, length in [`MIN_WORD_LEN`, `MAX_WORD_LEN`].
pub type Word = String;

/// Shortest word length that is tabulated.
pub const MIN_WORD_LEN: usize = 3;
/// Longest word length that is tabulated.
pub const MAX_WORD_LEN: usize = 7;

/// Characters trimmed from both ends of a token when punctuation is not ignored.
const EDGE_PUNCTUATION: &[char] = &[
    '\\', '/', '-', '.', ',', ';', ':', '?', '!', '(', ')', '\'', '"', '`', '—', '“', '”', '’',
];

/// How raw tokens are cleaned before the acceptance check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Drop every non-alphanumeric character (otherwise only edge punctuation).
    pub ignore_punctuation: bool,
    /// Decompose to NFD and drop combining marks.
    pub strip_accents: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            ignore_punctuation: true,
            strip_accents: true,
        }
    }
}

// ---------------------------------------------------------------------------
// Dictionary
// ---------------------------------------------------------------------------

/// Immutable set of valid uppercase words loaded from a word list.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from an iterator of words (uppercased on insert).
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_uppercase())
                .collect(),
        }
    }

    /// Load a line-oriented word list; the first whitespace field of each
    /// non-blank line is one word.
    pub fn load(path: &Path) -> std::io::Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let mut words = HashSet::new();
        for line in reader.lines() {
            let line = line?;
            if let Some(word) = line.split_whitespace().next() {
                words.insert(word.to_uppercase());
            }
        }
        log::info!("loaded {} dictionary words from {}", words.len(), path.display());
        Ok(Self { words })
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Normalize a raw token, returning `None` when it is rejected.
pub fn normalize(
    raw: &str,
    options: &NormalizeOptions,
    dictionary: Option<&Dictionary>,
) -> Option<Word> {
    let cleaned: String = if options.ignore_punctuation {
        raw.chars().filter(|c| c.is_alphanumeric()).collect()
    } else {
        raw.trim_matches(EDGE_PUNCTUATION).to_string()
    };
    let mut word = cleaned.to_uppercase();
    if options.strip_accents {
        word = strip_accents(&word);
    }
    accept(word, dictionary)
}

/// Canonical decomposition with combining marks removed (`É` → `E`).
pub fn strip_accents(s: &str) -> String {
    s.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// True for 3–7 ASCII capitals.
pub fn is_valid_shape(word: &str) -> bool {
    word.bytes().all(|b| b.is_ascii_uppercase())
        && (MIN_WORD_LEN..=MAX_WORD_LEN).contains(&word.len())
}

/// Apply the shape and dictionary checks to an already-cleaned word.
pub fn accept(word: String, dictionary: Option<&Dictionary>) -> Option<Word> {
    if !is_valid_shape(&word) {
        return None;
    }
    match dictionary {
        Some(dict) if !dict.contains(&word) => None,
        _ => Some(word),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(ignore_punctuation: bool, strip_accents: bool) -> NormalizeOptions {
        NormalizeOptions {
            ignore_punctuation,
            strip_accents,
        }
    }

    #[test]
    fn uppercases_plain_words() {
        assert_eq!(normalize("cat", &opts(true, true), None), Some("CAT".into()));
        assert_eq!(normalize("Example", &opts(false, false), None), Some("EXAMPLE".into()));
    }

    #[test]
    fn rejects_out_of_range_lengths() {
        let o = NormalizeOptions::default();
        assert_eq!(normalize("on", &o, None), None);
        assert_eq!(normalize("elephants", &o, None), None);
        assert_eq!(normalize("abc", &o, None), Some("ABC".into()));
        assert_eq!(normalize("abcdefg", &o, None), Some("ABCDEFG".into()));
    }

    #[test]
    fn ignore_punctuation_drops_inner_marks() {
        assert_eq!(normalize("don't", &opts(true, false), None), Some("DONT".into()));
        assert_eq!(normalize("(well-known)", &opts(true, false), None), None);
        assert_eq!(normalize("e-mail", &opts(true, false), None), Some("EMAIL".into()));
    }

    #[test]
    fn edge_trim_keeps_inner_punctuation() {
        // Inner apostrophe survives the trim and fails the A-Z check.
        assert_eq!(normalize("don't", &opts(false, false), None), None);
        assert_eq!(normalize("“cat,”", &opts(false, false), None), Some("CAT".into()));
        assert_eq!(normalize("(dog)!", &opts(false, false), None), Some("DOG".into()));
    }

    #[test]
    fn digits_are_rejected() {
        assert_eq!(normalize("abc1", &NormalizeOptions::default(), None), None);
    }

    #[test]
    fn accents_stripped_only_when_enabled() {
        assert_eq!(normalize("café", &opts(true, true), None), Some("CAFE".into()));
        assert_eq!(normalize("café", &opts(true, false), None), None);
        assert_eq!(normalize("naïve", &opts(false, true), None), Some("NAIVE".into()));
    }

    #[test]
    fn dictionary_membership_required() {
        let dict = Dictionary::from_words(["cat", "DOG"]);
        let o = NormalizeOptions::default();
        assert_eq!(normalize("cat", &o, Some(&dict)), Some("CAT".into()));
        assert_eq!(normalize("dog", &o, Some(&dict)), Some("DOG".into()));
        assert_eq!(normalize("cow", &o, Some(&dict)), None);
    }

    #[test]
    fn accepted_words_satisfy_invariant() {
        let dict = Dictionary::from_words(["THE", "QUICK", "BROWN", "JUMPS"]);
        let tokens = [
            "The", "quick,", "brown", "fox", "jumps", "over", "the", "lazy", "dog.", "Zoë", "x",
            "façade", "12345",
        ];
        for o in [opts(true, true), opts(false, false), opts(true, false), opts(false, true)] {
            for d in [None, Some(&dict)] {
                for t in tokens {
                    if let Some(w) = normalize(t, &o, d) {
                        assert!((3..=7).contains(&w.len()), "{w}");
                        assert!(w.bytes().all(|b| b.is_ascii_uppercase()), "{w}");
                        if let Some(d) = d {
                            assert!(d.contains(&w));
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn normalization_is_idempotent() {
        let o = NormalizeOptions::default();
        for t in ["Cat", "façade", "“quick”", "jump's"] {
            if let Some(w) = normalize(t, &o, None) {
                assert_eq!(normalize(&w, &o, None), Some(w.clone()));
                assert_eq!(normalize(&w, &opts(false, false), None), Some(w));
            }
        }
    }

    #[test]
    fn dictionary_load_reads_first_field() {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "aardvark 12").unwrap();
        writeln!(file, "CAT").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "dog\t3").unwrap();
        let dict = Dictionary::load(file.path()).unwrap();
        assert_eq!(dict.len(), 3);
        assert!(dict.contains("AARDVARK"));
        assert!(dict.contains("CAT"));
        assert!(dict.contains("DOG"));
    }

    #[test]
    fn dictionary_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Dictionary::load(&dir.path().join("missing.txt")).is_err());
    }
}
