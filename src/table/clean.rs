//! Greengenes-style taxonomy label cleanup.

use regex::Regex;
use std::sync::LazyLock;

/// Matches a single-letter rank marker such as `k__` or `p__`.
#[allow(clippy::expect_used)]
static RANK_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r".__").expect("valid regex literal"));

/// Rewrites a Greengenes lineage label into a plain one.
///
/// A trailing empty rank (`g__`) marks an unresolved assignment and becomes
/// `unclassified`. Rank markers are then stripped from every level, so
/// `k__Bacteria|p__Firmicutes` reads `Bacteria|Firmicutes`. Labels without
/// rank markers, metadata column names included, pass through unchanged.
pub fn clean_taxonomy_label(label: &str) -> String {
    let label = if label.ends_with("__") {
        format!("{label}unclassified")
    } else {
        label.to_string()
    };
    RANK_PREFIX.replace_all(&label, "").into_owned()
}
