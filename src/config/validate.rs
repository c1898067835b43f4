//! Configuration validation against the mapping file.

use crate::config::{Config, InputFormat};
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Header row of the sample metadata mapping file.
///
/// Only the header is read here. The mapping file itself is consumed by the
/// external summarize step, but the column names decide where metadata ends
/// and abundance values begin in the summarized table.
#[derive(Debug, Clone)]
pub struct MappingHeader {
    /// Path the header was read from.
    path: PathBuf,
    /// Column names in file order.
    columns: Vec<String>,
}

impl MappingHeader {
    /// Reads the header row of a tab-delimited mapping file.
    pub fn read(path: &Path) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .flexible(true)
            .from_path(path)?;
        let columns = reader.headers()?.iter().map(str::to_string).collect();
        Ok(Self {
            path: path.to_path_buf(),
            columns,
        })
    }

    /// Number of metadata columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the header has no columns at all.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Fails with [`Error::MissingColumn`] unless `column` is present.
    pub fn require(&self, column: &str) -> Result<()> {
        if self.columns.iter().any(|c| c == column) {
            Ok(())
        } else {
            Err(Error::MissingColumn {
                column: column.to_string(),
                path: self.path.clone(),
                available: self.columns.clone(),
            })
        }
    }
}

/// Validates the resolved configuration against the mapping file header.
///
/// Runs before any output directory is created so that misconfigured runs
/// fail without side effects.
pub fn validate(config: &Config) -> Result<MappingHeader> {
    if config.format == InputFormat::Humann2 {
        return Err(Error::UnsupportedInputKind {
            format: config.format,
        });
    }

    if !config.no_split && config.split.is_none() {
        return Err(Error::SplitColumnUnset);
    }

    if config.compare.len() == 1 {
        return Err(Error::MalformedComparison {
            count: config.compare.len(),
        });
    }

    let header = MappingHeader::read(&config.mapping)?;
    header.require(&config.subject)?;
    header.require(&config.class)?;
    if let Some(subclass) = &config.subclass {
        header.require(subclass)?;
    }
    if let Some(split) = &config.split {
        header.require(split)?;
    }

    Ok(header)
}
