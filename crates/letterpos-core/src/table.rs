//! Fixed letter × column table schema.
//!
//! Every table has the same 26 rows (`A`–`Z`) and the same 26 columns: one
//! per (word length, letter position) slot for lengths 3..=7, ordered by
//! length then position, followed by the total column `T`.

use std::fmt;

use crate::normalize::{MAX_WORD_LEN, MIN_WORD_LEN};

/// Row labels, in table order.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

pub const LETTER_COUNT: usize = 26;

/// 3 + 4 + 5 + 6 + 7 position columns plus `T`.
pub const COLUMN_COUNT: usize = 26;

/// A column of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Column {
    /// Letter observed at 0-based `position` of a word of `length` letters.
    Position { length: usize, position: usize },
    /// Letter total across every length and position.
    Total,
}

impl Column {
    pub fn position(length: usize, position: usize) -> Self {
        Self::Position { length, position }
    }

    /// The fixed column universe in header order.
    pub fn all() -> impl Iterator<Item = Column> {
        (MIN_WORD_LEN..=MAX_WORD_LEN)
            .flat_map(|length| (0..length).map(move |position| Column::Position { length, position }))
            .chain(std::iter::once(Column::Total))
    }

    /// Index of this column in header order, or `None` outside the schema.
    pub fn index(self) -> Option<usize> {
        match self {
            Self::Total => Some(COLUMN_COUNT - 1),
            Self::Position { length, position } => {
                if !(MIN_WORD_LEN..=MAX_WORD_LEN).contains(&length) || position >= length {
                    return None;
                }
                let before: usize = (MIN_WORD_LEN..length).sum();
                Some(before + position)
            }
        }
    }

    /// Parse a header label (`"4 / 2"` or `"T"`).
    pub fn parse(label: &str) -> Option<Self> {
        let label = label.trim();
        if label == "T" {
            return Some(Self::Total);
        }
        let (length, position) = label.split_once('/')?;
        let length: usize = length.trim().parse().ok()?;
        let position: usize = position.trim().parse().ok()?;
        let column = Self::Position {
            length,
            position: position.checked_sub(1)?,
        };
        column.index().map(|_| column)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Position { length, position } => write!(f, "{length} / {}", position + 1),
            Self::Total => write!(f, "T"),
        }
    }
}

/// Row index for an uppercase ASCII letter.
pub fn letter_index(letter: char) -> Option<usize> {
    letter
        .is_ascii_uppercase()
        .then(|| (letter as u8 - b'A') as usize)
}

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

/// A letter × column grid of values.
#[derive(Debug, Clone, PartialEq)]
pub struct LetterTable<T> {
    cells: Vec<[T; COLUMN_COUNT]>,
}

/// Integer counts per (letter, column).
pub type FrequencyTable = LetterTable<u64>;

/// Z-score per (letter, column).
pub type ZScoreTable = LetterTable<f64>;

impl<T: Copy + Default> Default for LetterTable<T> {
    fn default() -> Self {
        Self {
            cells: vec![[T::default(); COLUMN_COUNT]; LETTER_COUNT],
        }
    }
}

impl<T: Copy + Default> LetterTable<T> {
    /// A table with every cell at its zero value.
    pub fn new() -> Self {
        Self::default()
    }

    /// Value at `(letter, column)`; letters or columns outside the schema read as zero.
    pub fn get(&self, letter: char, column: Column) -> T {
        match (letter_index(letter), column.index()) {
            (Some(row), Some(col)) => self.cells[row][col],
            _ => T::default(),
        }
    }

    /// Mutable cell; `None` outside the schema.
    pub fn cell_mut(&mut self, letter: char, column: Column) -> Option<&mut T> {
        let row = letter_index(letter)?;
        let col = column.index()?;
        Some(&mut self.cells[row][col])
    }

    pub fn set(&mut self, letter: char, column: Column, value: T) {
        if let Some(cell) = self.cell_mut(letter, column) {
            *cell = value;
        }
    }

    /// One row in header order.
    pub fn row(&self, letter: char) -> Option<&[T; COLUMN_COUNT]> {
        letter_index(letter).map(|row| &self.cells[row])
    }

    /// `(letter, column, value)` for every cell in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (char, Column, T)> + '_ {
        ALPHABET.chars().zip(&self.cells).flat_map(|(letter, row)| {
            Column::all()
                .zip(row.iter())
                .map(move |(column, value)| (letter, column, *value))
        })
    }
}

impl FrequencyTable {
    /// Add `count` to a cell.
    pub fn add(&mut self, letter: char, column: Column, count: u64) {
        if let Some(cell) = self.cell_mut(letter, column) {
            *cell += count;
        }
    }

    /// Sum of `letter` over the position columns selected by `position` for every length.
    pub fn position_sum(&self, letter: char, position: usize) -> u64 {
        (MIN_WORD_LEN..=MAX_WORD_LEN)
            .map(|length| self.get(letter, Column::position(length, position)))
            .sum()
    }

    /// Sum of a column over all letters.
    pub fn column_sum(&self, column: Column) -> u64 {
        ALPHABET.chars().map(|letter| self.get(letter, column)).sum()
    }
}
