//! CSV result tables: `N,Iterative,Dynamic Programming,Recursive`.

use std::io::{Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use fibbench_core::algorithms::Algorithm;
use fibbench_core::cell::Cell;
use fibbench_core::constants::CSV_HEADER;

/// Errors reading or writing a table.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("unexpected header {found:?} (expected {expected:?})")]
    Header { found: String, expected: String },
}

/// One surveyed input size with a value per algorithm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    #[serde(rename = "N")]
    pub n: u64,
    #[serde(rename = "Iterative")]
    pub iterative: Cell,
    #[serde(rename = "Dynamic Programming")]
    pub dynamic_programming: Cell,
    #[serde(rename = "Recursive")]
    pub recursive: Cell,
}

impl TableRow {
    /// Build a row from values in algorithm order, padding absent trailing
    /// algorithms with the placeholder.
    #[must_use]
    pub fn from_cells(n: u64, cells: &[Cell]) -> Self {
        let at = |i: usize| cells.get(i).copied().unwrap_or(Cell::Missing);
        Self {
            n,
            iterative: at(0),
            dynamic_programming: at(1),
            recursive: at(2),
        }
    }

    #[must_use]
    pub fn get(&self, algorithm: Algorithm) -> Cell {
        match algorithm {
            Algorithm::Iterative => self.iterative,
            Algorithm::DynamicProgramming => self.dynamic_programming,
            Algorithm::Recursive => self.recursive,
        }
    }
}

/// Write the header and `rows` as CSV.
pub fn write_table<W: Write>(writer: W, rows: &[TableRow]) -> Result<(), TableError> {
    // Header is written by hand so an empty table still carries it.
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(CSV_HEADER)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Read a table, checking the header.
pub fn read_table<R: Read>(reader: R) -> Result<Vec<TableRow>, TableError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    if !headers.iter().eq(CSV_HEADER.iter().copied()) {
        return Err(TableError::Header {
            found: headers.iter().collect::<Vec<_>>().join(","),
            expected: CSV_HEADER.join(","),
        });
    }

    rdr.deserialize()
        .collect::<Result<Vec<TableRow>, _>>()
        .map_err(TableError::from)
}

/// Write a table to `path`, replacing any existing file.
pub fn save_table(path: &Path, rows: &[TableRow]) -> Result<(), TableError> {
    let file = std::fs::File::create(path)?;
    write_table(std::io::BufWriter::new(file), rows)?;
    tracing::info!(path = %path.display(), rows = rows.len(), "table written");
    Ok(())
}

/// Read a table from `path`.
pub fn load_table(path: &Path) -> Result<Vec<TableRow>, TableError> {
    let file = std::fs::File::open(path)?;
    read_table(std::io::BufReader::new(file))
}
