//! Reference-vs-simulation comparison via per-cell Z-scores.
//!
//! For each (letter, column) cell the trial values form an empirical null
//! distribution; the reference value is standardized against its sample
//! mean and Bessel-corrected standard deviation.

use statrs::statistics::Statistics;

use crate::table::{
    ALPHABET, COLUMN_COUNT, Column, FrequencyTable, LETTER_COUNT, LetterTable, ZScoreTable,
    letter_index,
};

/// Cells with `|Z|` below this are considered typical.
pub const Z_THRESHOLD: f64 = 2.0;

/// Per-cell trial values, appended one table at a time.
#[derive(Debug, Clone)]
pub struct DistributionSamples {
    cells: Vec<Vec<f64>>,
    trials: usize,
}

impl Default for DistributionSamples {
    fn default() -> Self {
        Self {
            cells: vec![Vec::new(); LETTER_COUNT * COLUMN_COUNT],
            trials: 0,
        }
    }
}

impl DistributionSamples {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append every cell of one trial table.
    pub fn push(&mut self, table: &FrequencyTable) {
        for (slot, (_, _, value)) in self.cells.iter_mut().zip(table.iter()) {
            slot.push(value as f64);
        }
        self.trials += 1;
    }

    pub fn from_tables<'t, I>(tables: I) -> Self
    where
        I: IntoIterator<Item = &'t FrequencyTable>,
    {
        let mut samples = Self::new();
        for table in tables {
            samples.push(table);
        }
        samples
    }

    /// Number of trials recorded.
    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Trial values of one cell, in trial order.
    pub fn values(&self, letter: char, column: Column) -> &[f64] {
        match (letter_index(letter), column.index()) {
            (Some(row), Some(col)) => &self.cells[row * COLUMN_COUNT + col],
            _ => &[],
        }
    }
}

/// Result of comparing a reference table against trial distributions.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub means: LetterTable<f64>,
    pub std_devs: LetterTable<f64>,
    pub z_scores: ZScoreTable,
    /// Cells with `|Z| < 2`.
    pub within_threshold: usize,
    pub cells: usize,
}

impl Comparison {
    /// Share of cells with `|Z| < 2`, as a whole percentage rounded down.
    pub fn within_threshold_percent(&self) -> usize {
        self.within_threshold * 100 / self.cells
    }
}

/// Z-score of `value` against a mean/stdev pair; zero when the stdev is zero.
pub fn z_score(value: f64, mean: f64, std_dev: f64) -> f64 {
    if std_dev == 0.0 {
        0.0
    } else {
        (value - mean) / std_dev
    }
}

/// Compare `reference` against the trial distributions in `samples`.
///
/// At least two trials are required for a sample standard deviation.
pub fn compare(
    reference: &FrequencyTable,
    samples: &DistributionSamples,
) -> std::io::Result<Comparison> {
    if samples.trials() < 2 {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!(
                "at least 2 trials are needed for a standard deviation, got {}",
                samples.trials()
            ),
        ));
    }

    let mut means = LetterTable::new();
    let mut std_devs = LetterTable::new();
    let mut z_scores = ZScoreTable::new();
    let mut within_threshold = 0;
    let mut cells = 0;

    for letter in ALPHABET.chars() {
        for column in Column::all() {
            let values = samples.values(letter, column);
            let mean = values.mean();
            let std_dev = values.std_dev();
            let z = z_score(reference.get(letter, column) as f64, mean, std_dev);

            means.set(letter, column, mean);
            std_devs.set(letter, column, std_dev);
            z_scores.set(letter, column, z);
            if z.abs() < Z_THRESHOLD {
                within_threshold += 1;
            }
            cells += 1;
        }
    }

    log::info!(
        "compared {cells} cells over {} trials, {within_threshold} within {Z_THRESHOLD} sd",
        samples.trials()
    );
    Ok(Comparison {
        means,
        std_devs,
        z_scores,
        within_threshold,
        cells,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_with(letter: char, column: Column, value: u64) -> FrequencyTable {
        let mut table = FrequencyTable::new();
        table.add(letter, column, value);
        table
    }

    #[test]
    fn z_score_zero_stdev_is_zero() {
        assert_eq!(z_score(100.0, 3.0, 0.0), 0.0);
        assert_eq!(z_score(5.0, 3.0, 2.0), 1.0);
        assert_eq!(z_score(-1.0, 3.0, 2.0), -2.0);
    }

    #[test]
    fn identical_trials_give_zero_z() {
        let col = Column::position(4, 0);
        let trials: Vec<_> = (0..5).map(|_| table_with('K', col, 7)).collect();
        let samples = DistributionSamples::from_tables(&trials);
        let reference = table_with('K', col, 1_000);
        let result = compare(&reference, &samples).unwrap();
        assert_eq!(result.z_scores.get('K', col), 0.0);
        assert_eq!(result.std_devs.get('K', col), 0.0);
        assert_eq!(result.means.get('K', col), 7.0);
        assert_eq!(result.within_threshold, result.cells);
        assert_eq!(result.within_threshold_percent(), 100);
    }

    #[test]
    fn sample_stdev_is_bessel_corrected() {
        let col = Column::Total;
        let trials: Vec<_> = [2, 4, 4, 4, 5, 5, 7, 9]
            .into_iter()
            .map(|v| table_with('E', col, v))
            .collect();
        let samples = DistributionSamples::from_tables(&trials);
        assert_eq!(samples.trials(), 8);
        assert_eq!(samples.values('E', col).len(), 8);

        let reference = table_with('E', col, 13);
        let result = compare(&reference, &samples).unwrap();
        // mean 5, sample variance 32/7
        let sd = (32.0f64 / 7.0).sqrt();
        assert!((result.means.get('E', col) - 5.0).abs() < 1e-12);
        assert!((result.std_devs.get('E', col) - sd).abs() < 1e-12);
        assert!((result.z_scores.get('E', col) - 8.0 / sd).abs() < 1e-12);
        assert_eq!(result.within_threshold, result.cells - 1);
    }

    #[test]
    fn percent_rounds_down() {
        let col = Column::position(3, 0);
        let trials = vec![table_with('A', col, 1), table_with('A', col, 3)];
        let samples = DistributionSamples::from_tables(&trials);
        // mean 2, sd sqrt(2); reference 10 → z ≈ 5.66
        let result = compare(&table_with('A', col, 10), &samples).unwrap();
        assert_eq!(result.cells, LETTER_COUNT * COLUMN_COUNT);
        assert_eq!(result.within_threshold, result.cells - 1);
        // 675 * 100 / 676 = 99.85…
        assert_eq!(result.within_threshold_percent(), 99);
    }

    #[test]
    fn single_trial_is_rejected() {
        let samples = DistributionSamples::from_tables(&[FrequencyTable::new()]);
        assert!(compare(&FrequencyTable::new(), &samples).is_err());
    }
}
