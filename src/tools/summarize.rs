//! Taxa summarization step.

use crate::config::{Config, InputFormat, OutputLayout};
use crate::constants::{LEVEL_DELIMITER, programs};
use crate::error::{Error, Result};
use crate::tools::{Stage, ToolCommand};
use std::path::{Path, PathBuf};
use tracing::info;

/// Collapses the input table at the configured level and attaches the
/// sample metadata, leaving a flat tab-delimited table at the output root.
///
/// The summarize script names its product after the mapping file. That
/// product is renamed to its fixed location so later steps do not depend
/// on the mapping file name. Returns the path of the summarized table.
pub fn run(config: &Config, layout: &OutputLayout) -> Result<PathBuf> {
    match config.format {
        InputFormat::Qiime => info!("Summarizing OTU table..."),
        InputFormat::Picrust => info!("Summarizing PICRUSt functions..."),
        InputFormat::Humann2 => {
            return Err(Error::UnsupportedInputKind {
                format: config.format,
            });
        }
    }

    let level = config.summarize_level();
    let mut command = ToolCommand::new(programs::SUMMARIZE_TAXA)
        .arg("-i")
        .arg_path(&config.input)
        .arg("-o")
        .arg_path(layout.root())
        .arg("-m")
        .arg_path(&config.mapping)
        .arg("-L")
        .arg(level.to_string())
        .arg("-d")
        .arg(LEVEL_DELIMITER)
        .arg("--md_identifier")
        .arg(config.format.metadata_key());
    if config.format == InputFormat::Picrust {
        // Functional predictions stay as absolute counts; OTU tables are
        // reported as relative abundances.
        command = command.arg("-a");
    }
    command.run(Stage::Summarize)?;

    let produced = layout.root().join(product_name(&config.mapping, level));
    if !produced.is_file() {
        return Err(Error::ToolOutputMissing {
            stage: Stage::Summarize,
            path: produced,
        });
    }
    let summarized = layout.summarized_table();
    std::fs::rename(&produced, &summarized)?;
    Ok(summarized)
}

/// File name the summarize script gives its product.
fn product_name(mapping: &Path, level: u8) -> String {
    let stem = mapping.file_stem().map_or_else(
        || "mapping".to_string(),
        |s| s.to_string_lossy().into_owned(),
    );
    format!("{stem}_L{level}.txt")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_name_uses_mapping_stem() {
        assert_eq!(product_name(Path::new("map.txt"), 6), "map_L6.txt");
        assert_eq!(
            product_name(Path::new("/data/study/mapping_file.txt"), 3),
            "mapping_file_L3.txt"
        );
    }

    #[test]
    fn test_product_name_without_extension() {
        assert_eq!(product_name(Path::new("metadata"), 2), "metadata_L2.txt");
    }
}
