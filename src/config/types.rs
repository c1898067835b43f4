//! Configuration type definitions.

use crate::cli::Cli;
use crate::constants::{PICRUST_LEVEL, metadata_keys};
use std::path::PathBuf;

/// Format of the input abundance table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum InputFormat {
    /// QIIME OTU table with taxonomy metadata.
    Qiime,
    /// PICRUSt functional prediction table with KEGG pathway metadata.
    Picrust,
    /// HUMAnN2 gene family table (recognized but not supported).
    Humann2,
}

impl InputFormat {
    /// Observation metadata key the summarize step collapses on.
    pub fn metadata_key(self) -> &'static str {
        match self {
            Self::Qiime => metadata_keys::QIIME,
            Self::Picrust | Self::Humann2 => metadata_keys::PICRUST,
        }
    }
}

impl std::fmt::Display for InputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Qiime => write!(f, "qiime"),
            Self::Picrust => write!(f, "picrust"),
            Self::Humann2 => write!(f, "humann2"),
        }
    }
}

/// Image format for rendered cladograms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ImageFormat {
    /// Portable Network Graphics.
    Png,
    /// Portable Document Format.
    Pdf,
    /// Scalable Vector Graphics.
    Svg,
}

impl ImageFormat {
    /// File extension without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Pdf => "pdf",
            Self::Svg => "svg",
        }
    }
}

impl std::fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// Parameters forwarded to the LEfSe analysis step.
#[derive(Debug, Clone, Copy)]
pub struct LefseOptions {
    /// Alpha value for the Kruskal-Wallis and Wilcoxon tests.
    pub pvalue: f64,
    /// Minimum absolute logarithmic LDA score to report.
    pub lda: f64,
    /// Multi-class strategy (0 = one-against-all, 1 = all-against-all).
    pub strictness: u8,
}

/// Parameters forwarded to the cladogram plotting step.
#[derive(Debug, Clone, Copy)]
pub struct PlotOptions {
    /// Output image format.
    pub image_type: ImageFormat,
    /// Image resolution in dots per inch.
    pub dpi: u32,
}

/// Complete resolved application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Input abundance table (BIOM format).
    pub input: PathBuf,
    /// Output directory root.
    pub output: PathBuf,
    /// Tab-delimited sample metadata mapping file.
    pub mapping: PathBuf,
    /// Format of the input table.
    pub format: InputFormat,
    /// Metadata column holding the class label.
    pub class: String,
    /// Optional metadata column holding the subclass label.
    pub subclass: Option<String>,
    /// Metadata column holding the subject identifier.
    pub subject: String,
    /// Restrict the analysis to these class values (empty = keep all).
    pub compare: Vec<String>,
    /// Metadata column whose values partition the samples.
    pub split: Option<String>,
    /// Analyze all samples together instead of splitting.
    pub no_split: bool,
    /// Hierarchy level at which the input table is collapsed.
    pub level: u8,
    /// LEfSe analysis parameters.
    pub lefse: LefseOptions,
    /// Cladogram plotting parameters.
    pub plot: PlotOptions,
}

impl Config {
    /// Builds a configuration from parsed command line arguments.
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            input: cli.input,
            output: cli.output,
            mapping: cli.mapping,
            format: cli.format,
            class: cli.class,
            subclass: cli.subclass,
            subject: cli.subject,
            compare: cli.compare,
            split: cli.split,
            no_split: cli.no_split,
            level: cli.level,
            lefse: LefseOptions {
                pvalue: cli.pvalue,
                lda: cli.lda,
                strictness: cli.strictness,
            },
            plot: PlotOptions {
                image_type: cli.image_type,
                dpi: cli.dpi,
            },
        }
    }

    /// Hierarchy level the summarize step collapses to.
    ///
    /// Functional tables are always collapsed at the KEGG pathway level,
    /// regardless of the configured taxonomic level.
    pub fn summarize_level(&self) -> u8 {
        match self.format {
            InputFormat::Qiime => self.level,
            InputFormat::Picrust | InputFormat::Humann2 => PICRUST_LEVEL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_format_metadata_key() {
        assert_eq!(InputFormat::Qiime.metadata_key(), "taxonomy");
        assert_eq!(InputFormat::Picrust.metadata_key(), "KEGG_Pathways");
    }

    #[test]
    fn test_input_format_display() {
        assert_eq!(InputFormat::Qiime.to_string(), "qiime");
        assert_eq!(InputFormat::Picrust.to_string(), "picrust");
        assert_eq!(InputFormat::Humann2.to_string(), "humann2");
    }

    #[test]
    fn test_image_format_extension() {
        assert_eq!(ImageFormat::Png.extension(), "png");
        assert_eq!(ImageFormat::Pdf.extension(), "pdf");
        assert_eq!(ImageFormat::Svg.extension(), "svg");
    }
}
