//! LEfSe command construction.

use crate::config::{LefseOptions, PlotOptions};
use crate::constants::{FORMAT_NORMALIZATION, format_rows, programs};
use crate::error::Result;
use crate::tools::{Stage, ToolCommand};
use std::path::Path;

/// Rewrites a transposed split table into LEfSe's internal format.
///
/// Row positions follow the split table layout: subject first, class
/// second, subclass third when present. Abundances are normalized to
/// per-million within each sample, and features are read from rows.
pub fn format_input(split_table: &Path, formatted: &Path, with_subclass: bool) -> Result<()> {
    format_command(split_table, formatted, with_subclass).run(Stage::Format)
}

/// Runs the LEfSe analysis on a formatted table.
pub fn run_analysis(formatted: &Path, results: &Path, options: &LefseOptions) -> Result<()> {
    analysis_command(formatted, results, options).run(Stage::Analyze)
}

/// Renders the cladogram for a LEfSe result table.
pub fn plot_cladogram(
    results: &Path,
    image: &Path,
    title: &str,
    options: &PlotOptions,
) -> Result<()> {
    plot_command(results, image, title, options).run(Stage::Plot)
}

fn format_command(split_table: &Path, formatted: &Path, with_subclass: bool) -> ToolCommand {
    let mut command = ToolCommand::new(programs::FORMAT_INPUT)
        .arg_path(split_table)
        .arg_path(formatted)
        .arg("-u")
        .arg(format_rows::SUBJECT.to_string())
        .arg("-c")
        .arg(format_rows::CLASS.to_string());
    if with_subclass {
        command = command.arg("-s").arg(format_rows::SUBCLASS.to_string());
    }
    command
        .arg("-o")
        .arg(FORMAT_NORMALIZATION.to_string())
        .arg("-f")
        .arg("r")
}

fn analysis_command(formatted: &Path, results: &Path, options: &LefseOptions) -> ToolCommand {
    ToolCommand::new(programs::RUN_LEFSE)
        .arg_path(formatted)
        .arg_path(results)
        .arg("-a")
        .arg(options.pvalue.to_string())
        .arg("-l")
        .arg(options.lda.to_string())
        .arg("-y")
        .arg(options.strictness.to_string())
}

fn plot_command(results: &Path, image: &Path, title: &str, options: &PlotOptions) -> ToolCommand {
    ToolCommand::new(programs::PLOT_CLADOGRAM)
        .arg_path(results)
        .arg_path(image)
        .arg("--format")
        .arg(options.image_type.to_string())
        .arg("--dpi")
        .arg(options.dpi.to_string())
        .arg("--title")
        .arg(title)
}
