//! Sequential LEfSe execution across sample groups.

use crate::config::{Config, OutputLayout};
use crate::error::{Error, Result};
use crate::table::{ColumnSelection, Table, partition_rows, write_split_table};
use crate::tools::lefse;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use super::Group;

/// One planned LEfSe run.
struct GroupRun {
    group: Group,
    rows: Vec<usize>,
    drop_zero_rows: bool,
}

/// Runs the merged group and, unless splitting is disabled, one group per
/// split value.
///
/// Groups run sequentially. The first failing stage aborts the whole run
/// and leaves the artifacts of earlier groups in place.
pub fn run(
    config: &Config,
    layout: &OutputLayout,
    table: &Table,
    selection: &ColumnSelection,
    metadata_len: usize,
    quiet: bool,
) -> Result<()> {
    let runs = plan(config, layout, table, metadata_len)?;
    let progress = make_progress(runs.len() as u64, quiet);

    for group_run in &runs {
        progress.set_message(group_run.group.name.clone());
        run_group(config, table, selection, group_run)?;
        progress.inc(1);
    }

    progress.finish_and_clear();
    Ok(())
}

/// Decides which groups to run and which sample rows belong to each.
///
/// The merged group always comes first and keeps zero-sum features, so the
/// all-samples artifacts reflect the complete summarized table. Split
/// groups drop features absent from the whole group.
fn plan(
    config: &Config,
    layout: &OutputLayout,
    table: &Table,
    metadata_len: usize,
) -> Result<Vec<GroupRun>> {
    let mut runs = vec![GroupRun {
        group: Group::merged(layout, config.plot.image_type),
        rows: (0..table.n_rows()).collect(),
        drop_zero_rows: false,
    }];

    if !config.no_split {
        let split = config.split.as_deref().ok_or(Error::SplitColumnUnset)?;
        let groups = partition_rows(table, split, metadata_len, &layout.summarized_table())?;
        for (value, rows) in groups {
            runs.push(GroupRun {
                group: Group::split(layout, &value, config.plot.image_type),
                rows,
                drop_zero_rows: true,
            });
        }
    }

    Ok(runs)
}

/// Writes the split table for one group and takes it through the format,
/// analysis, and plot stages.
fn run_group(
    config: &Config,
    table: &Table,
    selection: &ColumnSelection,
    run: &GroupRun,
) -> Result<()> {
    let group = &run.group;
    write_split_table(
        table,
        selection,
        &run.rows,
        &group.split_table,
        run.drop_zero_rows,
    )?;

    info!("Formatting data for: {}", group.name);
    lefse::format_input(&group.split_table, &group.formatted, config.subclass.is_some())?;

    info!("Running LEfSe on: {}", group.name);
    lefse::run_analysis(&group.formatted, &group.results, &config.lefse)?;

    info!("Plotting cladogram for: {}", group.name);
    lefse::plot_cladogram(&group.results, &group.cladogram, &group.name, &config.plot)?;

    Ok(())
}

fn make_progress(len: u64, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let progress = ProgressBar::new(len);
    // Template is hardcoded and known to be valid
    #[allow(clippy::expect_used)]
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} groups ({msg})")
            .expect("valid progress template")
            .progress_chars("#>-"),
    );
    progress
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::{ImageFormat, InputFormat, LefseOptions, PlotOptions};
    use std::path::PathBuf;

    fn test_config() -> Config {
        Config {
            input: PathBuf::from("otu_table.biom"),
            output: PathBuf::from("out"),
            mapping: PathBuf::from("map.txt"),
            format: InputFormat::Qiime,
            class: "Treatment".to_string(),
            subclass: None,
            subject: "#SampleID".to_string(),
            compare: Vec::new(),
            split: Some("Timepoint".to_string()),
            no_split: false,
            level: 6,
            lefse: LefseOptions {
                pvalue: 0.05,
                lda: 2.0,
                strictness: 0,
            },
            plot: PlotOptions {
                image_type: ImageFormat::Pdf,
                dpi: 300,
            },
        }
    }

    fn test_table() -> Table {
        Table::from_parts(
            vec![
                "#SampleID".into(),
                "Treatment".into(),
                "Timepoint".into(),
                "Bacteria|Firmicutes".into(),
            ],
            vec![
                vec!["S1".into(), "Control".into(), "Day7".into(), "0.6".into()],
                vec!["S2".into(), "Treated".into(), "Day0".into(), "0.9".into()],
            ],
        )
    }

    #[test]
    fn test_plan_merged_first_then_splits_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let layout = OutputLayout::create(dir.path()).unwrap();
        let config = test_config();
        let table = test_table();

        let runs = plan(&config, &layout, &table, 3).unwrap();
        let names: Vec<&str> = runs.iter().map(|r| r.group.name.as_str()).collect();
        assert_eq!(names, ["all samples", "Day0", "Day7"]);

        assert!(!runs[0].drop_zero_rows);
        assert_eq!(runs[0].rows, vec![0, 1]);
        assert!(runs[1].drop_zero_rows);
        assert_eq!(runs[1].rows, vec![1]);
    }

    #[test]
    fn test_plan_no_split_runs_merged_only() {
        let dir = tempfile::tempdir().unwrap();
        let layout = OutputLayout::create(dir.path()).unwrap();
        let mut config = test_config();
        config.split = None;
        config.no_split = true;

        let runs = plan(&config, &layout, &test_table(), 3).unwrap();
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].group.name, "all samples");
    }
}
