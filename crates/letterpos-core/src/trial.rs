//! Trial engine: word source → type aggregation → position tabulation.

use rand::RngCore;

use crate::source::WordSource;
use crate::table::FrequencyTable;
use crate::tabulate::tabulate;
use crate::types::{aggregate, token_count};

/// Runs independent trials against one word source.
pub struct TrialEngine<'a> {
    source: &'a dyn WordSource,
}

impl<'a> TrialEngine<'a> {
    pub fn new(source: &'a dyn WordSource) -> Self {
        Self { source }
    }

    /// One full pipeline pass producing one frequency table.
    pub fn run_trial(&self, rng: &mut dyn RngCore) -> std::io::Result<FrequencyTable> {
        let words = self.source.draw(rng)?;
        let types = aggregate(&words);
        log::debug!(
            "{}: {} tokens, {} types",
            self.source.name(),
            token_count(&types),
            types.values().map(|w| w.len()).sum::<usize>()
        );
        Ok(tabulate(&types))
    }

    /// `trials` sequential trials, each with fresh draws from `rng`.
    pub fn run_trials(
        &self,
        trials: usize,
        rng: &mut dyn RngCore,
    ) -> std::io::Result<Vec<FrequencyTable>> {
        let mut tables = Vec::with_capacity(trials);
        for trial in 0..trials {
            log::debug!("trial {}/{trials}", trial + 1);
            tables.push(self.run_trial(rng)?);
        }
        Ok(tables)
    }
}
