//! Application-wide constants.
//!
//! Fixed names, external program names, and default parameter values are
//! defined here to keep them consistent between the pipeline and its tests.

/// Application name used in user-facing messages.
pub const APP_NAME: &str = "koeken";

/// Subdirectory names created under the output root.
pub mod dirs {
    /// Formatted LEfSe input tables.
    pub const FORMATTED: &str = "formatted";
    /// LEfSe statistical result tables.
    pub const RESULTS: &str = "results";
    /// Per-group transposed split tables.
    pub const SPLIT_TABLES: &str = "split_tables";
    /// Rendered cladogram images.
    pub const CLADOGRAMS: &str = "cladograms";
}

/// Fixed file names inside the output tree.
pub mod files {
    /// Flat summarized table produced by the summarize step.
    pub const SUMMARIZED_TABLE: &str = "summarize_table.txt";
    /// Artifact base name for the merged all-samples group.
    pub const MERGED_BASENAME: &str = "all_timepoints";
}

/// Names of the external programs this tool orchestrates.
pub mod programs {
    /// QIIME taxa summarization script.
    pub const SUMMARIZE_TAXA: &str = "summarize_taxa.py";
    /// LEfSe input formatter.
    pub const FORMAT_INPUT: &str = "lefse-format_input.py";
    /// LEfSe statistical analysis.
    pub const RUN_LEFSE: &str = "run_lefse.py";
    /// LEfSe cladogram plotter.
    pub const PLOT_CLADOGRAM: &str = "lefse-plot_cladogram.py";
}

/// Identifier row indices passed to the LEfSe format step.
///
/// Split tables are feature-major: row 1 holds subject identifiers, row 2
/// the class labels, and row 3 (when configured) the subclass labels.
pub mod format_rows {
    /// Subject identifier row.
    pub const SUBJECT: u8 = 1;
    /// Class label row.
    pub const CLASS: u8 = 2;
    /// Optional subclass label row.
    pub const SUBCLASS: u8 = 3;
}

/// Per-sample normalization target passed to the LEfSe format step.
pub const FORMAT_NORMALIZATION: u32 = 1_000_000;

/// Display name of the merged all-samples group.
pub const MERGED_GROUP_NAME: &str = "all samples";

/// Delimiter separating hierarchy levels in summarized column labels.
pub const LEVEL_DELIMITER: &str = "|";

/// Default subject identifier column in QIIME mapping files.
pub const DEFAULT_SUBJECT: &str = "#SampleID";

/// Default taxonomic level at which QIIME tables are collapsed (genus).
pub const DEFAULT_LEVEL: u8 = 6;

/// Fixed KEGG hierarchy level at which functional tables are collapsed.
pub const PICRUST_LEVEL: u8 = 3;

/// Observation metadata keys understood by the summarize script.
pub mod metadata_keys {
    /// Taxonomy assignments on QIIME OTU tables.
    pub const QIIME: &str = "taxonomy";
    /// KEGG pathway annotations on PICRUSt tables.
    pub const PICRUST: &str = "KEGG_Pathways";
}

/// Default alpha value for the LEfSe significance tests.
pub const DEFAULT_PVALUE: f64 = 0.05;

/// Default threshold on the logarithmic LDA score.
pub const DEFAULT_LDA: f64 = 2.0;

/// Default multi-class strategy (0 = one-against-all).
pub const DEFAULT_STRICTNESS: u8 = 0;

/// Default cladogram resolution in dots per inch.
pub const DEFAULT_DPI: u32 = 300;
