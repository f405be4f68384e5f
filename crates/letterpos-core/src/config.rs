//! Run configuration.
//!
//! A [`RunConfig`] is built once from the command line, validated, and then
//! passed by reference into every stage of the run. The [`Mode`] is fixed
//! for the whole run.

use std::fmt;
use std::io;
use std::path::PathBuf;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::corpus::{CorpusSource, PathFilter, count_words, discover_files};
use crate::frequency::{WeightedSource, WordCounter};
use crate::normalize::{Dictionary, NormalizeOptions};
use crate::source::{SamplingOptions, SourceKind, WordSource};

/// Default corpus root.
pub const DEFAULT_CORPUS_DIR: &str = "OANC-GrAF";
/// Default `<word> <frequency>` list, also usable as the `common` word list.
pub const DEFAULT_FREQUENCY_LIST: &str = "google-books-common-words.txt";
/// Default Scrabble word list.
pub const DEFAULT_SCRABBLE_LIST: &str = "Scrabble-dictionary.txt";
/// Trials run by the Z-score comparison unless overridden.
pub const DEFAULT_COMPARE_TRIALS: usize = 100;

/// Named dictionaries restricting acceptable words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordListKind {
    Scrabble,
    Common,
}

impl WordListKind {
    pub fn default_path(self) -> &'static str {
        match self {
            Self::Scrabble => DEFAULT_SCRABBLE_LIST,
            Self::Common => DEFAULT_FREQUENCY_LIST,
        }
    }
}

impl fmt::Display for WordListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scrabble => write!(f, "scrabble"),
            Self::Common => write!(f, "common"),
        }
    }
}

impl std::str::FromStr for WordListKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "scrabble" => Ok(Self::Scrabble),
            "common" => Ok(Self::Common),
            _ => Err(format!("unknown word list '{s}' (expected scrabble or common)")),
        }
    }
}

/// A dictionary choice and the file it is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    pub kind: WordListKind,
    pub path: PathBuf,
}

/// What the run produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// One trial written as a frequency table.
    Generate { output: PathBuf },
    /// Z-scores of a stored reference table against `trials` fresh trials.
    CompareStats {
        reference: PathBuf,
        output: PathBuf,
        trials: usize,
    },
    /// First/third `K` counts for `trials` trials.
    ScatterPlot { output: PathBuf, trials: usize },
    /// Scaled counts printed from the word counter.
    ReportCounts { queries: Vec<String> },
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generate { .. } => write!(f, "generate"),
            Self::CompareStats { .. } => write!(f, "compare"),
            Self::ScatterPlot { .. } => write!(f, "scatter"),
            Self::ReportCounts { .. } => write!(f, "count"),
        }
    }
}

/// Rejected configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `source_count` or `word_sample_count` is zero.
    EmptySample,
    /// Fewer trials than the mode needs.
    TooFewTrials { mode: String, needed: usize, got: usize },
    /// Count reports need a word → frequency counter.
    ReportNeedsCounter(SourceKind),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySample => write!(f, "source count and word sample count must be positive"),
            Self::TooFewTrials { mode, needed, got } => {
                write!(f, "{mode} needs at least {needed} trials, got {got}")
            }
            Self::ReportNeedsCounter(kind) => write!(
                f,
                "count reports need a weighted source (norvig or oanc-list), not {kind}"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// `<base><suffix>.csv`
pub fn csv_path(base: &str, suffix: &str) -> PathBuf {
    PathBuf::from(format!("{base}{suffix}.csv"))
}

/// Everything one run needs.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub source: SourceKind,
    pub corpus_dir: PathBuf,
    pub filter: PathFilter,
    pub frequency_list: PathBuf,
    pub word_list: Option<WordList>,
    pub sampling: SamplingOptions,
    pub normalize: NormalizeOptions,
    pub seed: Option<u64>,
    pub mode: Mode,
}

impl RunConfig {
    /// A config with the tool's defaults for everything but the mode.
    pub fn new(mode: Mode) -> Self {
        Self {
            source: SourceKind::Oanc,
            corpus_dir: PathBuf::from(DEFAULT_CORPUS_DIR),
            filter: PathFilter::default(),
            frequency_list: PathBuf::from(DEFAULT_FREQUENCY_LIST),
            word_list: None,
            sampling: SamplingOptions::default(),
            normalize: NormalizeOptions::default(),
            seed: None,
            mode,
        }
    }

    /// Reject combinations that cannot produce meaningful output.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.sampling.source_count == 0 || self.sampling.word_sample_count == 0 {
            return Err(ConfigError::EmptySample);
        }
        let needed = match &self.mode {
            Mode::CompareStats { trials, .. } => Some((2, *trials)),
            Mode::ScatterPlot { trials, .. } => Some((1, *trials)),
            Mode::Generate { .. } => None,
            Mode::ReportCounts { .. } => {
                if !self.source.is_weighted() {
                    return Err(ConfigError::ReportNeedsCounter(self.source));
                }
                None
            }
        };
        if let Some((needed, got)) = needed {
            if got < needed {
                return Err(ConfigError::TooFewTrials {
                    mode: self.mode.to_string(),
                    needed,
                    got,
                });
            }
        }
        Ok(self)
    }

    /// The run's random generator: seeded when `seed` is set, otherwise from the OS.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    /// Load the configured dictionary, if any.
    pub fn load_dictionary(&self) -> io::Result<Option<Dictionary>> {
        self.word_list
            .as_ref()
            .map(|list| Dictionary::load(&list.path))
            .transpose()
    }

    /// The word → frequency counter for weighted sources; `None` for corpus sampling.
    pub fn load_counter(&self, dictionary: Option<&Dictionary>) -> io::Result<Option<WordCounter>> {
        match self.source {
            SourceKind::Oanc => Ok(None),
            SourceKind::Norvig => WordCounter::load(&self.frequency_list, dictionary).map(Some),
            SourceKind::OancList => {
                let files = discover_files(&self.corpus_dir, &self.filter)?;
                count_words(&files, &self.normalize, dictionary).map(Some)
            }
        }
    }

    /// Build the trial word source: weighted when a counter is given, corpus sampling otherwise.
    pub fn open_source<'a>(
        &self,
        counter: Option<&WordCounter>,
        dictionary: Option<&'a Dictionary>,
    ) -> io::Result<Box<dyn WordSource + 'a>> {
        match counter {
            Some(counter) => Ok(Box::new(WeightedSource::new(
                &self.source.to_string(),
                counter,
                &self.sampling,
            )?)),
            None => Ok(Box::new(CorpusSource::open(
                &self.corpus_dir,
                &self.filter,
                self.sampling,
                self.normalize,
                dictionary,
            )?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn generate() -> Mode {
        Mode::Generate {
            output: PathBuf::from("out.csv"),
        }
    }

    #[test]
    fn defaults_are_valid() {
        let config = RunConfig::new(generate()).validate().unwrap();
        assert_eq!(config.sampling.source_count, 100);
        assert_eq!(config.sampling.word_sample_count, 200);
        assert!(config.sampling.bias_to_front);
        assert!(config.normalize.ignore_punctuation);
        assert!(config.normalize.strip_accents);
        assert_eq!(config.source, SourceKind::Oanc);
    }

    #[test]
    fn zero_counts_rejected() {
        let mut config = RunConfig::new(generate());
        config.sampling.word_sample_count = 0;
        assert_eq!(config.validate().unwrap_err(), ConfigError::EmptySample);
    }

    #[test]
    fn report_requires_weighted_source() {
        let mode = Mode::ReportCounts { queries: vec![] };
        let err = RunConfig::new(mode.clone()).validate().unwrap_err();
        assert_eq!(err, ConfigError::ReportNeedsCounter(SourceKind::Oanc));

        let mut config = RunConfig::new(mode);
        config.source = SourceKind::Norvig;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn compare_needs_two_trials() {
        let mode = Mode::CompareStats {
            reference: PathBuf::from("ref.csv"),
            output: PathBuf::from("ref-z.csv"),
            trials: 1,
        };
        let err = RunConfig::new(mode).validate().unwrap_err();
        assert!(matches!(err, ConfigError::TooFewTrials { needed: 2, got: 1, .. }));
        assert_eq!(err.to_string(), "compare needs at least 2 trials, got 1");
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let mut config = RunConfig::new(generate());
        config.seed = Some(42);
        let a: u64 = config.rng().random();
        let b: u64 = config.rng().random();
        assert_eq!(a, b);
    }

    #[test]
    fn csv_paths() {
        assert_eq!(csv_path("counts", ""), PathBuf::from("counts.csv"));
        assert_eq!(csv_path("counts", "-z"), PathBuf::from("counts-z.csv"));
    }

    #[test]
    fn word_list_kinds() {
        assert_eq!("Scrabble".parse::<WordListKind>(), Ok(WordListKind::Scrabble));
        assert_eq!("common".parse::<WordListKind>(), Ok(WordListKind::Common));
        assert!("webster".parse::<WordListKind>().is_err());
        assert_eq!(WordListKind::Common.default_path(), DEFAULT_FREQUENCY_LIST);
    }
}
