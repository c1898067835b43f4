//! Error types for koeken.

use crate::config::InputFormat;
use crate::tools::Stage;

/// Result type alias for koeken operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for koeken.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A delimited table could not be read or parsed.
    #[error("table error: {0}")]
    Table(#[from] csv::Error),

    /// A required column was not found in a table header.
    #[error("no column named '{column}' in '{path}' (available: {})", .available.join(", "))]
    MissingColumn {
        /// Name of the missing column.
        column: String,
        /// Path to the table that was searched.
        path: std::path::PathBuf,
        /// Column names the table actually has.
        available: Vec<String>,
    },

    /// Fewer than two values were given for a group comparison.
    #[error("--compare needs at least two values to compare, got {count}")]
    MalformedComparison {
        /// Number of values that were given.
        count: usize,
    },

    /// Splitting was requested but no split column was named.
    #[error("no split column given; pass --split VARIABLE or --no-split")]
    SplitColumnUnset,

    /// The input format has no batch support.
    #[error("input format '{format}' is not supported for batch analysis")]
    UnsupportedInputKind {
        /// The rejected input format.
        format: InputFormat,
    },

    /// An external program could not be started.
    #[error("could not launch {stage} ({command})")]
    ToolLaunch {
        /// Pipeline stage that was being run.
        stage: Stage,
        /// Rendered command line.
        command: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// An external program exited unsuccessfully.
    #[error("{stage} failed with {status}: {command}")]
    ToolFailed {
        /// Pipeline stage that was being run.
        stage: Stage,
        /// Exit status reported by the operating system.
        status: std::process::ExitStatus,
        /// Rendered command line.
        command: String,
    },

    /// An external program exited cleanly but did not produce its output file.
    #[error("{stage} did not produce expected output file '{path}'")]
    ToolOutputMissing {
        /// Pipeline stage that was being run.
        stage: Stage,
        /// Path the stage was expected to write.
        path: std::path::PathBuf,
    },
}
