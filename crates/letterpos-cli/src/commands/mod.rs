pub mod compare;
pub mod count;
pub mod generate;
pub mod scatter;

use letterpos_core::{Dictionary, Mode, RunConfig, WordCounter};

/// Inputs loaded once before any trial runs.
pub struct Prepared {
    pub dictionary: Option<Dictionary>,
    pub counter: Option<WordCounter>,
}

/// Load the dictionary and, for weighted sources, the word counter.
pub fn prepare(config: &RunConfig) -> std::io::Result<Prepared> {
    let dictionary = config.load_dictionary()?;
    let counter = config.load_counter(dictionary.as_ref())?;
    Ok(Prepared {
        dictionary,
        counter,
    })
}

/// Dispatch on the configured mode.
pub fn run(config: &RunConfig) -> std::io::Result<()> {
    log::info!(
        "mode {} from {} ({} sources x {} words)",
        config.mode,
        config.source,
        config.sampling.source_count,
        config.sampling.word_sample_count
    );
    let prepared = prepare(config)?;
    match &config.mode {
        Mode::Generate { output } => generate::run(config, &prepared, output),
        Mode::CompareStats {
            reference,
            output,
            trials,
        } => compare::run(config, &prepared, reference, output, *trials),
        Mode::ScatterPlot { output, trials } => scatter::run(config, &prepared, output, *trials),
        Mode::ReportCounts { queries } => count::run(config, &prepared, queries),
    }
}
