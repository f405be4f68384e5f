//! Word source trait and sampling parameters.
//!
//! Every source implements the [`WordSource`] trait: one call to
//! [`WordSource::draw`] produces the flat word sample for one trial.

use rand::RngCore;

use crate::normalize::Word;

/// Where a trial's words come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// Contiguous runs of words sampled from randomly chosen corpus files.
    Oanc,
    /// Weighted draws from a `<word> <frequency>` list file.
    Norvig,
    /// Weighted draws from word counts over the whole filtered corpus.
    OancList,
}

impl SourceKind {
    /// True when trials are drawn from a word → frequency counter.
    pub fn is_weighted(self) -> bool {
        matches!(self, Self::Norvig | Self::OancList)
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Oanc => write!(f, "oanc"),
            Self::Norvig => write!(f, "norvig"),
            Self::OancList => write!(f, "oanc-list"),
        }
    }
}

impl std::str::FromStr for SourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "oanc" => Ok(Self::Oanc),
            "norvig" => Ok(Self::Norvig),
            "oanc-list" | "oanc_list" => Ok(Self::OancList),
            _ => Err(format!("unknown source '{s}' (expected oanc, norvig or oanc-list)")),
        }
    }
}

/// Sample sizing shared by every source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplingOptions {
    /// Number of sources (files) contributing to one trial.
    pub source_count: usize,
    /// Words collected from each source.
    pub word_sample_count: usize,
    /// Start the window early enough that the whole sample fits in the file.
    pub bias_to_front: bool,
}

impl SamplingOptions {
    /// Words one trial should contain when no source falls short.
    pub fn sample_size(&self) -> usize {
        self.source_count * self.word_sample_count
    }
}

impl Default for SamplingOptions {
    fn default() -> Self {
        Self {
            source_count: 100,
            word_sample_count: 200,
            bias_to_front: true,
        }
    }
}

/// A producer of normalized word samples.
pub trait WordSource {
    /// Short name for logs.
    fn name(&self) -> &str;

    /// Draw the words for one trial using `rng`.
    fn draw(&self, rng: &mut dyn RngCore) -> std::io::Result<Vec<Word>>;
}
