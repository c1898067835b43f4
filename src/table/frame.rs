//! In-memory representation of the summarized abundance table.

use crate::error::Result;
use std::path::Path;

/// A rectangular tab-delimited table held in memory.
///
/// The first file row is the header. Cell values are kept as strings and
/// only parsed numerically where a decision depends on them, since metadata
/// and abundance columns share the same table.
#[derive(Debug, Clone)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Reads a tab-delimited table with a header row.
    pub fn read_tsv(path: &Path) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .from_path(path)?;
        let columns = reader.headers()?.iter().map(str::to_string).collect();
        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }
        Ok(Self { columns, rows })
    }

    /// Builds a table from a header and data rows.
    #[cfg(test)]
    pub fn from_parts(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { columns, rows }
    }

    /// Column names in file order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Data rows, excluding the header.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows.
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// Position of the named column, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cell value at `(row, column)`.
    ///
    /// Short rows read as empty cells, mirroring how missing trailing
    /// fields behave in loosely written mapping files.
    pub fn value(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .map_or("", String::as_str)
    }

    /// Rewrites every column name through `rename`.
    pub fn rename_columns(&mut self, rename: impl Fn(&str) -> String) {
        for column in &mut self.columns {
            *column = rename(column);
        }
    }

    /// Keeps only the rows whose index satisfies `keep`.
    pub fn retain_rows(&mut self, keep: impl Fn(usize) -> bool) {
        let mut index = 0;
        self.rows.retain(|_| {
            let kept = keep(index);
            index += 1;
            kept
        });
    }
}
