//! Output directory layout.

use crate::constants::{dirs, files};
use crate::error::Result;
use std::path::{Path, PathBuf};
use tracing::info;

/// Fixed directory layout under the output root.
///
/// ```text
/// <root>/
///   summarize_table.txt
///   split_tables/
///   formatted/
///   results/
///   cladograms/
/// ```
#[derive(Debug, Clone)]
pub struct OutputLayout {
    root: PathBuf,
}

impl OutputLayout {
    /// Creates the output root and its subdirectories.
    ///
    /// Existing directories are reused, so reruns into the same output
    /// root overwrite earlier artifacts in place.
    pub fn create(root: &Path) -> Result<Self> {
        if !root.exists() {
            info!("Creating output directory {}", root.display());
        }
        let layout = Self {
            root: root.to_path_buf(),
        };
        std::fs::create_dir_all(layout.formatted_dir())?;
        std::fs::create_dir_all(layout.results_dir())?;
        std::fs::create_dir_all(layout.split_tables_dir())?;
        std::fs::create_dir_all(layout.cladograms_dir())?;
        Ok(layout)
    }

    /// Output root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding formatted LEfSe input tables.
    pub fn formatted_dir(&self) -> PathBuf {
        self.root.join(dirs::FORMATTED)
    }

    /// Directory holding LEfSe result tables.
    pub fn results_dir(&self) -> PathBuf {
        self.root.join(dirs::RESULTS)
    }

    /// Directory holding per-group transposed split tables.
    pub fn split_tables_dir(&self) -> PathBuf {
        self.root.join(dirs::SPLIT_TABLES)
    }

    /// Directory holding rendered cladogram images.
    pub fn cladograms_dir(&self) -> PathBuf {
        self.root.join(dirs::CLADOGRAMS)
    }

    /// Path of the flat summarized table.
    pub fn summarized_table(&self) -> PathBuf {
        self.root.join(files::SUMMARIZED_TABLE)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_create_builds_all_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("analysis");
        let layout = OutputLayout::create(&root).unwrap();

        assert!(layout.formatted_dir().is_dir());
        assert!(layout.results_dir().is_dir());
        assert!(layout.split_tables_dir().is_dir());
        assert!(layout.cladograms_dir().is_dir());
    }

    #[test]
    fn test_create_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("analysis");
        OutputLayout::create(&root).unwrap();
        assert!(OutputLayout::create(&root).is_ok());
    }

    #[test]
    fn test_summarized_table_lives_at_root() {
        let dir = tempfile::tempdir().unwrap();
        let layout = OutputLayout::create(dir.path()).unwrap();
        assert_eq!(
            layout.summarized_table(),
            dir.path().join("summarize_table.txt")
        );
    }
}
