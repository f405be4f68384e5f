//! Scaled type and token counts from the word counter.

use letterpos_core::{CountReport, RunConfig};

use super::Prepared;

pub fn run(config: &RunConfig, prepared: &Prepared, queries: &[String]) -> std::io::Result<()> {
    let Some(counter) = prepared.counter.as_ref() else {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("source {} has no word counter to report on", config.source),
        ));
    };
    let report = CountReport::build(counter, queries, config.sampling.sample_size())?;
    println!("{report}");
    Ok(())
}
