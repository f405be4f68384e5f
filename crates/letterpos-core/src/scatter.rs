//! First-vs-third letter position scatter data.
//!
//! Each trial contributes one point: how often `K` was the first letter and
//! how often it was the third letter, summed over every word length. Two
//! published reference points lead the file.

use std::io::{self, Write};

use crate::table::FrequencyTable;
use crate::table_io::LINE_END;

/// Letter whose first/third position counts are plotted.
pub const SCATTER_LETTER: char = 'K';

/// One labelled point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScatterRow {
    pub sample: String,
    pub first: u64,
    pub third: u64,
}

impl ScatterRow {
    /// The point for trial `index`.
    pub fn for_trial(index: usize, table: &FrequencyTable) -> Self {
        let (first, third) = first_and_third(table, SCATTER_LETTER);
        Self {
            sample: format!("Trial-{index}"),
            first,
            third,
        }
    }
}

/// Published first/third counts the trials are plotted against.
pub fn reference_rows() -> Vec<ScatterRow> {
    vec![
        ScatterRow {
            sample: "Mayzner & Tresselt 1965".to_string(),
            first: 152,
            third: 221,
        },
        ScatterRow {
            sample: "Norvig 2012".to_string(),
            first: 124,
            third: 149,
        },
    ]
}

/// `letter` at position 1 and at position 3, each summed over lengths 3..=7.
pub fn first_and_third(table: &FrequencyTable, letter: char) -> (u64, u64) {
    (table.position_sum(letter, 0), table.position_sum(letter, 2))
}

/// `Sample,First,Third`
pub fn write_header<W: Write>(writer: &mut W) -> io::Result<()> {
    write!(writer, "Sample,First,Third{LINE_END}")
}

pub fn write_row<W: Write>(writer: &mut W, row: &ScatterRow) -> io::Result<()> {
    write!(writer, "{},{},{}{LINE_END}", row.sample, row.first, row.third)
}
