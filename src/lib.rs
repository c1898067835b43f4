//! Koeken - batch LEfSe runner.
//!
//! Collapses an abundance table against its sample metadata, then runs the
//! LEfSe discriminant analysis once over all samples and once per group
//! defined by a metadata variable, collecting the formatted tables, result
//! tables, and cladograms under a single output tree.

#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod pipeline;
pub mod table;
pub mod tools;

use clap::Parser;
use cli::Cli;
use config::{Config, InputFormat, OutputLayout};
use table::{ColumnSelection, Table, clean_taxonomy_label, filter_classes};
use tracing::{debug, info, warn};

pub use error::{Error, Result};

/// Main entry point for the koeken CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    info!("{} v{}", constants::APP_NAME, env!("CARGO_PKG_VERSION"));
    info!("LEfSe publication: \"Metagenomic biomarker discovery and explanation\"");
    info!("Segata et al., Genome Biology 12:R60, 2011");

    let quiet = cli.quiet;
    let config = Config::from_cli(cli);
    debug!("Configuration: {config:?}");

    // Fail on bad metadata choices before anything is written to disk.
    let header = config::validate(&config)?;

    let layout = OutputLayout::create(&config.output)?;
    let summarized = tools::summarize::run(&config, &layout)?;

    let mut table = Table::read_tsv(&summarized)?;
    let selection = ColumnSelection::resolve(&table, &config, header.len(), &summarized)?;

    if !config.compare.is_empty() {
        let kept = filter_classes(&mut table, selection.class_index(), &config.compare);
        if kept == 0 {
            warn!(
                "No samples match the requested class values: {}",
                config.compare.join(", ")
            );
        } else {
            info!("Comparing {kept} samples across: {}", config.compare.join(", "));
        }
    }

    if config.format == InputFormat::Qiime {
        table.rename_columns(clean_taxonomy_label);
    }

    pipeline::run(&config, &layout, &table, &selection, header.len(), quiet)?;

    info!("Analysis complete: {}", layout.root().display());
    Ok(())
}

fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter_str = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    fmt().with_env_filter(filter).init();
}
