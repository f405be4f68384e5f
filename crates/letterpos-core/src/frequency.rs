//! Word frequency counters and weighted sampling.
//!
//! A [`WordCounter`] maps accepted words to frequencies, either read from a
//! `<word> <frequency>` list or counted over a whole corpus. A
//! [`WeightedSource`] simulates many sources by drawing with replacement,
//! each draw proportional to the listed frequency.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use rand::RngCore;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;

use crate::normalize::{Dictionary, Word, accept};
use crate::source::{SamplingOptions, WordSource};

/// Word → frequency, ordered by word so seeded draws are reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordCounter {
    counts: BTreeMap<Word, u64>,
}

impl WordCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` occurrences of `word`.
    pub fn add(&mut self, word: &str, count: u64) {
        *self.counts.entry(word.to_string()).or_insert(0) += count;
    }

    /// Count one occurrence of each word.
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.add(word.as_ref(), 1);
        }
    }

    pub fn get(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words (types).
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all frequencies (tokens).
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.counts.iter().map(|(w, c)| (w.as_str(), *c))
    }

    /// Load a `<word> <frequency>` list, keeping only words the normalizer
    /// would accept. Blank lines are skipped; any other malformed line fails.
    pub fn load(path: &Path, dictionary: Option<&Dictionary>) -> io::Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let counter = Self::parse(reader, dictionary)?;
        log::info!(
            "loaded {} words ({} tokens) from {}",
            counter.len(),
            counter.total(),
            path.display()
        );
        Ok(counter)
    }

    /// Parse a frequency list from any reader.
    pub fn parse<R: BufRead>(reader: R, dictionary: Option<&Dictionary>) -> io::Result<Self> {
        let mut counter = Self::new();
        for (line_no, line) in reader.lines().enumerate() {
            let line = line?;
            let fields: Vec<&str> = line.split_whitespace().collect();
            let (word, frequency) = match fields.as_slice() {
                [] => continue,
                [word, frequency] => (*word, *frequency),
                _ => {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidData,
                        format!("line {}: expected `<word> <frequency>`, got {line:?}", line_no + 1),
                    ));
                }
            };
            let frequency: u64 = frequency.parse().map_err(|e| {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("line {}: bad frequency {frequency:?}: {e}", line_no + 1),
                )
            })?;
            if let Some(word) = accept(word.to_uppercase(), dictionary) {
                counter.add(&word, frequency);
            }
        }
        Ok(counter)
    }
}

// ---------------------------------------------------------------------------
// Weighted source
// ---------------------------------------------------------------------------

/// Draws `source_count * word_sample_count` words with replacement, weighted
/// by frequency.
pub struct WeightedSource {
    name: String,
    words: Vec<Word>,
    index: WeightedIndex<u64>,
    draws: usize,
}

impl WeightedSource {
    /// Fails when the counter is empty or every frequency is zero.
    pub fn new(name: &str, counter: &WordCounter, sampling: &SamplingOptions) -> io::Result<Self> {
        let words: Vec<Word> = counter.iter().map(|(w, _)| w.to_string()).collect();
        let index = WeightedIndex::new(counter.iter().map(|(_, c)| c)).map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("cannot sample from word list '{name}': {e}"),
            )
        })?;
        Ok(Self {
            name: name.to_string(),
            words,
            index,
            draws: sampling.sample_size(),
        })
    }
}

impl WordSource for WeightedSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn draw(&self, rng: &mut dyn RngCore) -> io::Result<Vec<Word>> {
        let sample = (0..self.draws)
            .map(|_| self.words[self.index.sample(rng)].clone())
            .collect();
        Ok(sample)
    }
}
