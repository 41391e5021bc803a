use crate::error::Result;
use crate::types::{ColumnStats, DatasetSummary};
use polars::prelude::*;

/// Flatten a dataset summary into one row per column for display.
///
/// Columns: `name, dtype, kind, count, missing_count, missing_share,
/// unique_count, min, max, mean, std, top_value, top_freq, example_values`.
/// Statistics that do not apply to a column's kind are null.
pub fn flatten_summary_for_print(summary: &DatasetSummary) -> Result<DataFrame> {
    let n = summary.columns.len();
    let mut names = Vec::with_capacity(n);
    let mut dtypes = Vec::with_capacity(n);
    let mut kinds = Vec::with_capacity(n);
    let mut counts = Vec::with_capacity(n);
    let mut missing_counts = Vec::with_capacity(n);
    let mut missing_shares = Vec::with_capacity(n);
    let mut unique_counts = Vec::with_capacity(n);
    let mut mins = Vec::with_capacity(n);
    let mut maxs = Vec::with_capacity(n);
    let mut means = Vec::with_capacity(n);
    let mut stds = Vec::with_capacity(n);
    let mut top_values: Vec<Option<String>> = Vec::with_capacity(n);
    let mut top_freqs: Vec<Option<u64>> = Vec::with_capacity(n);
    let mut examples = Vec::with_capacity(n);

    for col in &summary.columns {
        names.push(col.name.clone());
        dtypes.push(col.dtype.clone());
        kinds.push(col.kind.as_str());
        counts.push(col.count as u64);
        missing_counts.push(col.missing_count as u64);
        missing_shares.push(col.missing_share);
        unique_counts.push(col.unique_count as u64);
        examples.push(col.example_values.join(", "));

        let (min, max, mean, std) = match &col.stats {
            ColumnStats::Numeric(s) => (s.min, s.max, s.mean, s.std),
            _ => (None, None, None, None),
        };
        mins.push(min);
        maxs.push(max);
        means.push(mean);
        stds.push(std);

        match &col.stats {
            ColumnStats::Categorical(s) => {
                top_values.push(s.most_frequent.clone());
                top_freqs.push(s.most_frequent.as_ref().map(|_| s.most_frequent_count as u64));
            }
            _ => {
                top_values.push(None);
                top_freqs.push(None);
            }
        }
    }

    Ok(DataFrame::new(vec![
        Column::new("name".into(), names),
        Column::new("dtype".into(), dtypes),
        Column::new("kind".into(), kinds),
        Column::new("count".into(), counts),
        Column::new("missing_count".into(), missing_counts),
        Column::new("missing_share".into(), missing_shares),
        Column::new("unique_count".into(), unique_counts),
        Column::new("min".into(), mins),
        Column::new("max".into(), maxs),
        Column::new("mean".into(), means),
        Column::new("std".into(), stds),
        Column::new("top_value".into(), top_values),
        Column::new("top_freq".into(), top_freqs),
        Column::new("example_values".into(), examples),
    ])?)
}
