//! Console count report over a word counter.
//!
//! Counts are scaled from the counter's total to an equivalent sample of
//! `source_count * word_sample_count` words before printing.

use std::collections::HashMap;
use std::fmt;
use std::io;

use crate::frequency::WordCounter;
use crate::scatter::SCATTER_LETTER;

/// How many of the most common 4-letter `K` words are listed.
pub const COMMON_LIMIT: usize = 10;

/// Estimated count of one query word and of each adjacent-letter pair in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryCount {
    pub word: String,
    pub count: u64,
    /// `(digram, count)` in word order.
    pub digrams: Vec<(String, u64)>,
}

/// Everything the count report prints.
#[derive(Debug, Clone, PartialEq)]
pub struct CountReport {
    pub queries: Vec<QueryCount>,
    /// Most common 4-letter words with `K` first or third, scaled.
    pub common: Vec<(String, u64)>,
    pub types: usize,
    pub tokens: u64,
    pub sample_size: usize,
    pub scale: f64,
    pub first: u64,
    pub third: u64,
}

/// Scale and round half to even.
fn scaled(count: u64, scale: f64) -> u64 {
    (count as f64 * scale).round_ties_even() as u64
}

impl CountReport {
    /// Build the report; fails when the counter holds no tokens.
    pub fn build(counter: &WordCounter, queries: &[String], sample_size: usize) -> io::Result<Self> {
        let tokens = counter.total();
        if tokens == 0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "word counter has no tokens to scale from",
            ));
        }
        let scale = sample_size as f64 / tokens as f64;

        let queries: Vec<Vec<char>> = queries
            .iter()
            .map(|q| q.trim().to_uppercase().chars().collect())
            .filter(|q: &Vec<char>| !q.is_empty())
            .collect();
        // Per query, per adjacent pair: tokens of same-length types sharing that pair in place.
        let mut pair_tokens: Vec<Vec<u64>> = queries
            .iter()
            .map(|q| vec![0; q.len().saturating_sub(1)])
            .collect();

        let mut first = 0;
        let mut third = 0;
        let mut common: Vec<(String, u64)> = Vec::new();
        for (word, count) in counter.iter() {
            let letters: Vec<char> = word.chars().collect();
            if letters.first() == Some(&SCATTER_LETTER) {
                first += count;
            }
            if letters.get(2) == Some(&SCATTER_LETTER) {
                third += count;
            }
            if letters.len() == 4 && (letters[0] == SCATTER_LETTER || letters[2] == SCATTER_LETTER) {
                common.push((word.to_string(), count));
            }
            for (query, pairs) in queries.iter().zip(pair_tokens.iter_mut()) {
                if query.len() != letters.len() {
                    continue;
                }
                for (i, pair) in pairs.iter_mut().enumerate() {
                    if letters[i] == query[i] && letters[i + 1] == query[i + 1] {
                        *pair += count;
                    }
                }
            }
        }

        // A digram shared by several queries is one tally, as with a keyed counter.
        let mut digram_totals: HashMap<String, u64> = HashMap::new();
        for (query, pairs) in queries.iter().zip(&pair_tokens) {
            for (i, count) in pairs.iter().enumerate() {
                *digram_totals.entry(query[i..i + 2].iter().collect()).or_insert(0) += count;
            }
        }
        let queries = queries
            .iter()
            .map(|query| {
                let word: String = query.iter().collect();
                let digrams = query
                    .windows(2)
                    .map(|pair| {
                        let digram: String = pair.iter().collect();
                        let count = scaled(digram_totals[&digram], scale);
                        (digram, count)
                    })
                    .collect();
                QueryCount {
                    count: scaled(counter.get(&word), scale),
                    word,
                    digrams,
                }
            })
            .collect();

        common.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        common.truncate(COMMON_LIMIT);
        for entry in &mut common {
            entry.1 = scaled(entry.1, scale);
        }

        Ok(Self {
            queries,
            common,
            types: counter.len(),
            tokens,
            sample_size,
            scale,
            first: scaled(first, scale),
            third: scaled(third, scale),
        })
    }
}

impl fmt::Display for CountReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for query in &self.queries {
            writeln!(f, "{} {}", query.word, query.count)?;
            for (digram, count) in &query.digrams {
                writeln!(f, "{digram} {count}")?;
            }
        }
        for (word, count) in &self.common {
            writeln!(f, "{word} {count}")?;
        }
        write!(
            f,
            "Total types: {} tokens: {} Sample size {} First letter is {SCATTER_LETTER}: {}, Third letter is {SCATTER_LETTER}: {}",
            self.types, self.tokens, self.sample_size, self.first, self.third
        )
    }
}
