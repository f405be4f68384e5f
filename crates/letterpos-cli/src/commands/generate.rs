//! `letterpos generate`: one trial written as a frequency table.

use std::path::Path;

use letterpos_core::{Column, RunConfig, TrialEngine, write_table_file};

use super::Prepared;

pub fn run(config: &RunConfig, prepared: &Prepared, output: &Path) -> std::io::Result<()> {
    let source = config.open_source(prepared.counter.as_ref(), prepared.dictionary.as_ref())?;
    let mut rng = config.rng();
    let table = TrialEngine::new(&*source).run_trial(&mut rng)?;
    write_table_file(output, &table)?;

    let tokens: u64 = (3..=7)
        .map(|length| table.column_sum(Column::position(length, 0)))
        .sum();
    println!(
        "Wrote {} ({} tokens, {} letters)",
        output.display(),
        tokens,
        table.column_sum(Column::Total)
    );
    Ok(())
}
