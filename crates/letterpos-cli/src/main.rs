//! CLI for letterpos: letter position frequencies in sampled English text.

mod commands;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use letterpos_core::config::{
    DEFAULT_COMPARE_TRIALS, DEFAULT_CORPUS_DIR, DEFAULT_FREQUENCY_LIST,
};
use letterpos_core::{
    Mode, NormalizeOptions, PathFilter, RunConfig, SamplingOptions, SourceKind, WordList,
    WordListKind, csv_path,
};

#[derive(Parser)]
#[command(name = "letterpos")]
#[command(about = "letterpos — counts letter frequencies by word length and letter position")]
#[command(version = letterpos_core::VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Sampling flags shared by every subcommand.
#[derive(Args, Debug, Clone)]
struct SamplingArgs {
    /// Source of text: oanc (corpus windows), norvig (frequency list), oanc-list (corpus word counts)
    #[arg(long, default_value = "oanc")]
    source: SourceKind,

    /// Sources (files) to sample per trial
    #[arg(long, default_value_t = 100)]
    source_count: usize,

    /// Words to collect from each source
    #[arg(long, default_value_t = 200)]
    word_sample_count: usize,

    /// Start each window early enough that the whole sample fits in the file
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    bias_to_front: bool,

    /// Restrict acceptable words: scrabble or common
    #[arg(long)]
    word_list: Option<WordListKind>,

    /// Override the file the word list is read from
    #[arg(long)]
    word_list_path: Option<PathBuf>,

    /// Only process texts whose path contains one of these (comma-separated, e.g. fiction,journal)
    #[arg(long)]
    filter_texts: Option<String>,

    /// Skip texts whose path contains one of these (comma-separated, e.g. spoken)
    #[arg(long)]
    exclude_texts: Option<String>,

    /// Ignore punctuation within words
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    ignore_punctuation: bool,

    /// Strip accents from letters in a word
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    strip_accents: bool,

    /// Corpus root directory (searched recursively for .txt files)
    #[arg(long, default_value = DEFAULT_CORPUS_DIR)]
    corpus_dir: PathBuf,

    /// `<word> <frequency>` list used by the norvig source
    #[arg(long, default_value = DEFAULT_FREQUENCY_LIST)]
    frequency_list: PathBuf,

    /// Seed the random generator for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Sample once and write the letter × position table to <OUTPUT>.csv
    Generate {
        /// Output name (".csv" is appended)
        #[arg(long)]
        output: String,

        #[command(flatten)]
        sampling: SamplingArgs,
    },

    /// Compare <STAT_TABLE>.csv against fresh trials and write Z-scores to <STAT_TABLE>-z.csv
    Compare {
        /// Reference table name (".csv" is appended)
        #[arg(long)]
        stat_table: String,

        /// Number of trials forming the null distribution
        #[arg(long, default_value_t = DEFAULT_COMPARE_TRIALS)]
        trials: usize,

        #[command(flatten)]
        sampling: SamplingArgs,
    },

    /// Write first/third-letter K counts per trial to <SCATTER_PLOT>.csv
    Scatter {
        /// Output name (".csv" is appended)
        #[arg(long)]
        scatter_plot: String,

        /// Number of trials
        #[arg(long, default_value_t = 100)]
        trials: usize,

        #[command(flatten)]
        sampling: SamplingArgs,
    },

    /// Print scaled type/token counts from a weighted source
    Count {
        /// Comma-separated words whose counts and digram counts are printed (e.g. KNOW,LIKE)
        #[arg(long)]
        count_types: Option<String>,

        #[command(flatten)]
        sampling: SamplingArgs,
    },
}

impl SamplingArgs {
    fn into_config(self, mode: Mode) -> RunConfig {
        let word_list = self.word_list.map(|kind| WordList {
            kind,
            path: self
                .word_list_path
                .clone()
                .unwrap_or_else(|| PathBuf::from(kind.default_path())),
        });
        RunConfig {
            source: self.source,
            corpus_dir: self.corpus_dir,
            filter: PathFilter::from_lists(
                self.filter_texts.as_deref(),
                self.exclude_texts.as_deref(),
            ),
            frequency_list: self.frequency_list,
            word_list,
            sampling: SamplingOptions {
                source_count: self.source_count,
                word_sample_count: self.word_sample_count,
                bias_to_front: self.bias_to_front,
            },
            normalize: NormalizeOptions {
                ignore_punctuation: self.ignore_punctuation,
                strip_accents: self.strip_accents,
            },
            seed: self.seed,
            mode,
        }
    }
}

impl Commands {
    fn into_config(self) -> RunConfig {
        match self {
            Commands::Generate { output, sampling } => sampling.into_config(Mode::Generate {
                output: csv_path(&output, ""),
            }),
            Commands::Compare {
                stat_table,
                trials,
                sampling,
            } => sampling.into_config(Mode::CompareStats {
                reference: csv_path(&stat_table, ""),
                output: csv_path(&stat_table, "-z"),
                trials,
            }),
            Commands::Scatter {
                scatter_plot,
                trials,
                sampling,
            } => sampling.into_config(Mode::ScatterPlot {
                output: csv_path(&scatter_plot, ""),
                trials,
            }),
            Commands::Count {
                count_types,
                sampling,
            } => sampling.into_config(Mode::ReportCounts {
                queries: count_types
                    .map(|list| {
                        list.split(',')
                            .map(str::trim)
                            .filter(|s| !s.is_empty())
                            .map(String::from)
                            .collect()
                    })
                    .unwrap_or_default(),
            }),
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = match cli.command.into_config().validate() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            std::process::exit(2);
        }
    };

    if let Err(e) = commands::run(&config) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
