//! # letterpos-core
//!
//! Positional letter-frequency statistics over sampled English words.
//!
//! A trial draws a sample of words from a [`WordSource`] (contiguous runs
//! from shuffled corpus files, or weighted draws from a frequency list),
//! groups them into types and tokens, and tabulates how often each letter
//! appears at each (word length, position) slot. Repeated trials form a
//! null distribution that a stored reference table is compared against.
//!
//! ## Quick Start
//!
//! ```no_run
//! use letterpos_core::{
//!     CorpusSource, NormalizeOptions, PathFilter, SamplingOptions, TrialEngine,
//!     write_table_file,
//! };
//! use std::path::Path;
//!
//! let source = CorpusSource::open(
//!     Path::new("OANC-GrAF"),
//!     &PathFilter::default(),
//!     SamplingOptions::default(),
//!     NormalizeOptions::default(),
//!     None,
//! )?;
//! let mut rng = rand::rng();
//! let table = TrialEngine::new(&source).run_trial(&mut rng)?;
//! write_table_file(Path::new("counts.csv"), &table)?;
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//! ## Pipeline
//!
//! Word source → normalize → type/token counts → position table → CSV
//!
//! Every table shares one schema: rows `A`–`Z`, one column per
//! `"{length} / {position}"` slot for lengths 3..=7, then the total `T`.

pub mod config;
pub mod corpus;
pub mod frequency;
pub mod normalize;
pub mod report;
pub mod scatter;
pub mod source;
pub mod stats;
pub mod table;
pub mod table_io;
pub mod tabulate;
pub mod trial;
pub mod types;

pub use config::{ConfigError, Mode, RunConfig, WordList, WordListKind, csv_path};
pub use corpus::{CorpusSource, PathFilter, count_words, discover_files, list_words, sample_window};
pub use frequency::{WeightedSource, WordCounter};
pub use normalize::{Dictionary, NormalizeOptions, Word, normalize};
pub use report::CountReport;
pub use scatter::ScatterRow;
pub use source::{SamplingOptions, SourceKind, WordSource};
pub use stats::{Comparison, DistributionSamples, compare};
pub use table::{Column, FrequencyTable, LetterTable, ZScoreTable};
pub use table_io::{read_table, read_table_file, write_table, write_table_file};
pub use tabulate::tabulate;
pub use trial::TrialEngine;
pub use types::{TypeCounts, aggregate};

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
