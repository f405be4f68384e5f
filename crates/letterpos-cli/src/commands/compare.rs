//! `letterpos compare`: Z-scores of a reference table against fresh trials.

use std::path::Path;

use letterpos_core::{
    DistributionSamples, FrequencyTable, RunConfig, TrialEngine, compare, read_table_file,
    write_table_file,
};

use super::Prepared;

pub fn run(
    config: &RunConfig,
    prepared: &Prepared,
    reference_path: &Path,
    output: &Path,
    trials: usize,
) -> std::io::Result<()> {
    let reference: FrequencyTable = read_table_file(reference_path)?;
    let source = config.open_source(prepared.counter.as_ref(), prepared.dictionary.as_ref())?;
    let engine = TrialEngine::new(&*source);
    let mut rng = config.rng();

    let tables = engine.run_trials(trials, &mut rng)?;
    let samples = DistributionSamples::from_tables(&tables);

    let result = compare(&reference, &samples)?;
    println!(
        "{}% are less than 2 standard deviations from the mean",
        result.within_threshold_percent()
    );
    write_table_file(output, &result.z_scores)?;
    println!("Wrote {}", output.display());
    Ok(())
}
