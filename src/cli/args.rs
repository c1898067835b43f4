//! CLI argument definitions.

use crate::config::{ImageFormat, InputFormat};
use crate::constants::{
    DEFAULT_DPI, DEFAULT_LDA, DEFAULT_LEVEL, DEFAULT_PVALUE, DEFAULT_STRICTNESS, DEFAULT_SUBJECT,
};
use clap::Parser;
use std::path::PathBuf;

/// Batch LEfSe analysis across metadata-defined sample groups.
#[derive(Debug, Parser)]
#[command(name = "koeken")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input abundance table (BIOM format).
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output directory for all generated artifacts.
    #[arg(short, long)]
    pub output: PathBuf,

    /// Tab-delimited sample metadata mapping file.
    #[arg(short, long)]
    pub mapping: PathBuf,

    /// Input table format.
    #[arg(short, long, value_enum)]
    pub format: InputFormat,

    /// Metadata column holding the class label to discriminate on.
    #[arg(long)]
    pub class: String,

    /// Metadata column holding an optional subclass label.
    #[arg(long)]
    pub subclass: Option<String>,

    /// Metadata column holding the subject identifier.
    #[arg(long, default_value = DEFAULT_SUBJECT)]
    pub subject: String,

    /// Restrict the analysis to these class values (two or more).
    #[arg(long, num_args = 1..)]
    pub compare: Vec<String>,

    /// Metadata column whose values partition the samples into groups.
    #[arg(long, required_unless_present = "no_split")]
    pub split: Option<String>,

    /// Analyze all samples as a single group instead of splitting.
    #[arg(long)]
    pub no_split: bool,

    /// Taxonomic level at which to collapse the input table (2-7).
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(2..=7),
          default_value_t = DEFAULT_LEVEL)]
    pub level: u8,

    /// Alpha value for the LEfSe significance tests.
    #[arg(long, value_parser = parse_pvalue, default_value_t = DEFAULT_PVALUE)]
    pub pvalue: f64,

    /// Minimum absolute logarithmic LDA score to report.
    #[arg(long, default_value_t = DEFAULT_LDA)]
    pub lda: f64,

    /// Multi-class strategy (0 = one-against-all, 1 = all-against-all).
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=1),
          default_value_t = DEFAULT_STRICTNESS)]
    pub strictness: u8,

    /// Image format for rendered cladograms.
    #[arg(long, value_enum, default_value_t = ImageFormat::Pdf)]
    pub image_type: ImageFormat,

    /// Cladogram resolution in dots per inch.
    #[arg(long, default_value_t = DEFAULT_DPI)]
    pub dpi: u32,

    /// Suppress progress output.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Increase verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parse and validate an alpha value.
fn parse_pvalue(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    if !(0.0..=1.0).contains(&value) {
        return Err(format!("p-value must be between 0.0 and 1.0, got {value}"));
    }

    Ok(value)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    fn base_args() -> Vec<&'static str> {
        vec![
            "koeken",
            "-i",
            "otu_table.biom",
            "-o",
            "out",
            "-m",
            "map.txt",
            "-f",
            "qiime",
            "--class",
            "Treatment",
        ]
    }

    #[test]
    fn test_parse_pvalue_valid() {
        assert_eq!(parse_pvalue("0.05").ok(), Some(0.05));
        assert_eq!(parse_pvalue("0.0").ok(), Some(0.0));
        assert_eq!(parse_pvalue("1.0").ok(), Some(1.0));
    }

    #[test]
    fn test_parse_pvalue_invalid() {
        assert!(parse_pvalue("1.5").is_err());
        assert!(parse_pvalue("-0.1").is_err());
        assert!(parse_pvalue("abc").is_err());
    }

    #[test]
    fn test_cli_parse_with_split() {
        let mut args = base_args();
        args.extend(["--split", "Timepoint"]);
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.split, Some("Timepoint".to_string()));
        assert!(!cli.no_split);
        assert_eq!(cli.level, 6);
        assert_eq!(cli.subject, "#SampleID");
        assert_eq!(cli.pvalue, 0.05);
        assert_eq!(cli.lda, 2.0);
        assert_eq!(cli.dpi, 300);
    }

    #[test]
    fn test_cli_parse_no_split() {
        let mut args = base_args();
        args.push("--no-split");
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(cli.no_split);
        assert_eq!(cli.split, None);
    }

    #[test]
    fn test_cli_requires_split_or_no_split() {
        let cli = Cli::try_parse_from(base_args());
        assert!(cli.is_err());
    }

    #[test]
    fn test_cli_parse_compare_values() {
        let mut args = base_args();
        args.extend(["--split", "Day", "--compare", "Control", "Treated"]);
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.compare, vec!["Control", "Treated"]);
    }

    #[test]
    fn test_cli_level_range_enforced() {
        let mut args = base_args();
        args.extend(["--split", "Day", "-l", "9"]);
        assert!(Cli::try_parse_from(args).is_err());

        let mut args = base_args();
        args.extend(["--split", "Day", "-l", "1"]);
        assert!(Cli::try_parse_from(args).is_err());

        let mut args = base_args();
        args.extend(["--split", "Day", "-l", "2"]);
        assert!(Cli::try_parse_from(args).is_ok());
    }

    #[test]
    fn test_cli_quiet_conflicts_verbose() {
        let mut args = base_args();
        args.extend(["--split", "Day", "-q", "-v"]);
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_cli_parse_formats() {
        let args = vec![
            "koeken",
            "-i",
            "functions.biom",
            "-o",
            "out",
            "-m",
            "map.txt",
            "-f",
            "picrust",
            "--class",
            "Treatment",
            "--split",
            "Day",
            "--image-type",
            "svg",
        ];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.format, InputFormat::Picrust);
        assert_eq!(cli.image_type, ImageFormat::Svg);
    }

    #[test]
    fn test_cli_requires_format() {
        let args = vec![
            "koeken",
            "-i",
            "otu_table.biom",
            "-o",
            "out",
            "-m",
            "map.txt",
            "--class",
            "Treatment",
            "--split",
            "Day",
        ];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_cli_strictness_range_enforced() {
        let mut args = base_args();
        args.extend(["--split", "Day", "--strictness", "2"]);
        assert!(Cli::try_parse_from(args).is_err());
    }
}
