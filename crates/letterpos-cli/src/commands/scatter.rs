//! `letterpos scatter`: first vs third letter K counts per trial.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use letterpos_core::scatter::{reference_rows, write_header, write_row};
use letterpos_core::{RunConfig, ScatterRow, TrialEngine};

use super::Prepared;

pub fn run(
    config: &RunConfig,
    prepared: &Prepared,
    output: &Path,
    trials: usize,
) -> std::io::Result<()> {
    let source = config.open_source(prepared.counter.as_ref(), prepared.dictionary.as_ref())?;
    let engine = TrialEngine::new(&*source);
    let mut rng = config.rng();

    let mut writer = BufWriter::new(File::create(output)?);
    write_header(&mut writer)?;
    for row in reference_rows() {
        write_row(&mut writer, &row)?;
    }
    for trial in 0..trials {
        let table = engine.run_trial(&mut rng)?;
        write_row(&mut writer, &ScatterRow::for_trial(trial, &table))?;
    }
    writer.flush()?;

    println!("Wrote {} ({trials} trials)", output.display());
    Ok(())
}
