//! CSV persistence for letter tables.
//!
//! # Format
//!
//! - header: an empty cell, one `"{length} / {position}"` cell per slot, then `T`
//! - 26 data rows `A`..`Z`, letter first
//! - a zero cell is written as an empty string, never `0`
//!
//! Rows end in `\r\n` like the spreadsheet-style CSV this tool has always
//! produced; readers accept either line ending.

use std::fmt::Display;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use crate::table::{ALPHABET, COLUMN_COUNT, Column, LetterTable};

pub(crate) const LINE_END: &str = "\r\n";

/// Header row cells, including the leading empty cell.
pub fn header_cells() -> Vec<String> {
    std::iter::once(String::new())
        .chain(Column::all().map(|c| c.to_string()))
        .collect()
}

fn display_cell<T: Copy + Default + PartialEq + Display>(value: T) -> String {
    if value == T::default() {
        String::new()
    } else {
        value.to_string()
    }
}

/// Write a table as CSV.
pub fn write_table<T, W>(writer: &mut W, table: &LetterTable<T>) -> io::Result<()>
where
    T: Copy + Default + PartialEq + Display,
    W: Write,
{
    write!(writer, "{}{LINE_END}", header_cells().join(","))?;
    for letter in ALPHABET.chars() {
        let mut row = Vec::with_capacity(COLUMN_COUNT + 1);
        row.push(letter.to_string());
        for column in Column::all() {
            row.push(display_cell(table.get(letter, column)));
        }
        write!(writer, "{}{LINE_END}", row.join(","))?;
    }
    writer.flush()
}

/// Write a table to `path`, replacing any existing file.
pub fn write_table_file<T>(path: &Path, table: &LetterTable<T>) -> io::Result<()>
where
    T: Copy + Default + PartialEq + Display,
{
    let mut writer = BufWriter::new(File::create(path)?);
    write_table(&mut writer, table)?;
    log::info!("wrote table {}", path.display());
    Ok(())
}

fn invalid(msg: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, msg)
}

/// Read a table written by [`write_table`].
///
/// The header must name the canonical columns in order. Rows whose first
/// cell is empty are skipped, empty cells read as zero, and cells past the
/// `T` column are ignored.
pub fn read_table<T, R>(reader: R) -> io::Result<LetterTable<T>>
where
    T: Copy + Default + FromStr,
    T::Err: Display,
    R: BufRead,
{
    let mut lines = reader.lines();
    let header = lines
        .next()
        .transpose()?
        .ok_or_else(|| invalid("table is empty".to_string()))?;
    let header: Vec<&str> = header.trim_end_matches('\r').split(',').collect();
    let columns: Vec<Column> = Column::all().collect();
    if header.len() < columns.len() + 1
        || columns
            .iter()
            .zip(&header[1..])
            .any(|(column, label)| Column::parse(label) != Some(*column))
    {
        return Err(invalid(format!(
            "unexpected table header: {}",
            header.join(",")
        )));
    }

    let mut table = LetterTable::new();
    for (line_no, line) in lines.enumerate() {
        let line = line?;
        let cells: Vec<&str> = line.trim_end_matches('\r').split(',').collect();
        let letter = cells[0].trim();
        if letter.is_empty() {
            continue;
        }
        let mut chars = letter.chars();
        let (Some(letter), None) = (chars.next(), chars.next()) else {
            return Err(invalid(format!("line {}: bad row label {letter:?}", line_no + 2)));
        };
        if !ALPHABET.contains(letter) {
            return Err(invalid(format!("line {}: bad row label {letter:?}", line_no + 2)));
        }
        for (column, cell) in columns.iter().zip(cells.iter().skip(1)) {
            let cell = cell.trim();
            if cell.is_empty() {
                continue;
            }
            let value = cell.parse::<T>().map_err(|e| {
                invalid(format!("line {}: bad value {cell:?} in {column}: {e}", line_no + 2))
            })?;
            table.set(letter, *column, value);
        }
    }
    Ok(table)
}

/// Read a table from `path`.
pub fn read_table_file<T>(path: &Path) -> io::Result<LetterTable<T>>
where
    T: Copy + Default + FromStr,
    T::Err: Display,
{
    let file = File::open(path)?;
    read_table(BufReader::new(file))
}
