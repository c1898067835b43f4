//! Summarized table handling: loading, cleanup, and per-group splitting.

mod clean;
mod frame;
mod split;

pub use clean::clean_taxonomy_label;
pub use frame::Table;
pub use split::{ColumnSelection, filter_classes, partition_rows, write_split_table};
