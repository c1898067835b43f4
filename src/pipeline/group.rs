//! Per-group artifact paths.

use crate::config::{ImageFormat, OutputLayout};
use crate::constants::{MERGED_GROUP_NAME, files};
use std::path::PathBuf;

/// One LEfSe run: a named sample group and where its artifacts live.
#[derive(Debug, Clone)]
pub struct Group {
    /// Display name used in progress output and as the cladogram title.
    pub name: String,
    /// Transposed split table consumed by the format step.
    pub split_table: PathBuf,
    /// Formatted LEfSe input.
    pub formatted: PathBuf,
    /// LEfSe result table.
    pub results: PathBuf,
    /// Rendered cladogram image.
    pub cladogram: PathBuf,
}

impl Group {
    /// The merged group covering every sample at once.
    pub fn merged(layout: &OutputLayout, image: ImageFormat) -> Self {
        let base = files::MERGED_BASENAME;
        Self {
            name: MERGED_GROUP_NAME.to_string(),
            split_table: layout.split_tables_dir().join(format!("{base}.txt")),
            formatted: layout.formatted_dir().join(format!("{base}.txt")),
            results: layout.results_dir().join(format!("{base}.txt")),
            cladogram: layout
                .cladograms_dir()
                .join(format!("{base}.{}", image.extension())),
        }
    }

    /// A split group named after its split column value.
    pub fn split(layout: &OutputLayout, value: &str, image: ImageFormat) -> Self {
        Self {
            name: value.to_string(),
            split_table: layout
                .split_tables_dir()
                .join(format!("{value}_split.txt")),
            formatted: layout.formatted_dir().join(format!("{value}_format.txt")),
            results: layout.results_dir().join(format!("{value}.txt")),
            cladogram: layout
                .cladograms_dir()
                .join(format!("{value}.{}", image.extension())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_merged_group_paths() {
        let dir = tempfile::tempdir().unwrap();
        let layout = OutputLayout::create(dir.path()).unwrap();
        let group = Group::merged(&layout, ImageFormat::Pdf);

        assert_eq!(group.name, "all samples");
        assert_eq!(
            group.split_table,
            dir.path().join("split_tables/all_timepoints.txt")
        );
        assert_eq!(
            group.formatted,
            dir.path().join("formatted/all_timepoints.txt")
        );
        assert_eq!(group.results, dir.path().join("results/all_timepoints.txt"));
        assert_eq!(
            group.cladogram,
            dir.path().join("cladograms/all_timepoints.pdf")
        );
    }

    #[test]
    fn test_split_group_paths() {
        let dir = tempfile::tempdir().unwrap();
        let layout = OutputLayout::create(dir.path()).unwrap();
        let group = Group::split(&layout, "Day0", ImageFormat::Svg);

        assert_eq!(group.name, "Day0");
        assert_eq!(
            group.split_table,
            dir.path().join("split_tables/Day0_split.txt")
        );
        assert_eq!(group.formatted, dir.path().join("formatted/Day0_format.txt"));
        assert_eq!(group.results, dir.path().join("results/Day0.txt"));
        assert_eq!(group.cladogram, dir.path().join("cladograms/Day0.svg"));
    }
}
