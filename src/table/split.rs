//! Column selection, sample partitioning, and split table output.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::table::Table;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::warn;

/// Column positions kept in every split table, in output order.
///
/// The LEfSe format step addresses identifier rows by position, so the
/// subject column always comes first and the class column second, with the
/// subclass column third when one is configured. Feature columns are
/// everything past the metadata block inherited from the mapping file.
#[derive(Debug, Clone)]
pub struct ColumnSelection {
    indices: Vec<usize>,
    class: usize,
}

impl ColumnSelection {
    /// Locates the configured identifier columns in the summarized table.
    ///
    /// `metadata_len` is the number of mapping file columns, which all sit
    /// before the first feature column. Error messages list only those,
    /// since feature columns are never valid identifier choices.
    pub fn resolve(
        table: &Table,
        config: &Config,
        metadata_len: usize,
        path: &Path,
    ) -> Result<Self> {
        let locate = |column: &str| {
            table.column_index(column).ok_or_else(|| Error::MissingColumn {
                column: column.to_string(),
                path: path.to_path_buf(),
                available: table.columns().iter().take(metadata_len).cloned().collect(),
            })
        };

        let subject = locate(&config.subject)?;
        let class = locate(&config.class)?;
        let mut indices = vec![subject, class];
        if let Some(subclass) = &config.subclass {
            indices.push(locate(subclass)?);
        }
        indices.extend(metadata_len..table.n_columns());

        Ok(Self { indices, class })
    }

    /// Kept column positions in output order.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Position of the class column in the summarized table.
    pub fn class_index(&self) -> usize {
        self.class
    }
}

/// Drops sample rows whose class value is not in `keep`.
///
/// Returns the number of rows remaining.
pub fn filter_classes(table: &mut Table, class_index: usize, keep: &[String]) -> usize {
    let kept: Vec<bool> = (0..table.n_rows())
        .map(|row| keep.iter().any(|v| table.value(row, class_index) == v))
        .collect();
    table.retain_rows(|row| kept[row]);
    table.n_rows()
}

/// Groups sample rows by their value in the split column.
///
/// Groups come back in lexicographic order of the split value. Samples with
/// an empty split value belong to no group and are skipped.
pub fn partition_rows(
    table: &Table,
    split_column: &str,
    metadata_len: usize,
    path: &Path,
) -> Result<BTreeMap<String, Vec<usize>>> {
    let split = table
        .column_index(split_column)
        .ok_or_else(|| Error::MissingColumn {
            column: split_column.to_string(),
            path: path.to_path_buf(),
            available: table.columns().iter().take(metadata_len).cloned().collect(),
        })?;

    let mut groups: BTreeMap<String, Vec<usize>> = BTreeMap::new();
    let mut skipped = 0usize;
    for row in 0..table.n_rows() {
        let value = table.value(row, split);
        if value.is_empty() {
            skipped += 1;
            continue;
        }
        groups.entry(value.to_string()).or_default().push(row);
    }
    if skipped > 0 {
        warn!("Skipped {skipped} samples with no '{split_column}' value");
    }

    Ok(groups)
}

/// Writes the selected columns of the given rows as a transposed table.
///
/// Each output line is a kept column: its label first, then one value per
/// sample. No header line is written. With `drop_zero_rows` set, lines
/// whose values are all numerically zero are left out, which keeps features
/// absent from a group out of that group's LEfSe run.
pub fn write_split_table(
    table: &Table,
    selection: &ColumnSelection,
    rows: &[usize],
    path: &Path,
    drop_zero_rows: bool,
) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b'\t').from_path(path)?;

    for &column in selection.indices() {
        if drop_zero_rows && is_zero_row(table, rows, column) {
            continue;
        }
        let label = table.columns()[column].as_str();
        let values = rows.iter().map(|&row| table.value(row, column));
        writer.write_record(std::iter::once(label).chain(values))?;
    }

    writer.flush()?;
    Ok(())
}

/// Whether every value of this column across the given rows parses as zero.
///
/// Non-numeric cells count as nonzero, so identifier rows are never dropped.
#[allow(clippy::float_cmp)]
fn is_zero_row(table: &Table, rows: &[usize], column: usize) -> bool {
    !rows.is_empty()
        && rows.iter().all(|&row| {
            table
                .value(row, column)
                .parse::<f64>()
                .is_ok_and(|v| v == 0.0)
        })
}
