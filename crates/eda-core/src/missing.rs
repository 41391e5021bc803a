//! Missing-value accounting, independent of column kind.

use crate::error::Result;
use crate::types::{MissingEntry, MissingTable};
use polars::prelude::*;

/// Count missing values in every column.
///
/// Does not depend on [`crate::summarize_dataset`]; the counts agree with the
/// ones found in a summary of the same dataset.
pub fn missing_table(df: &DataFrame) -> MissingTable {
    let n_rows = df.height();
    let entries = df
        .get_columns()
        .iter()
        .map(|col| {
            let missing_count = col.null_count();
            MissingEntry {
                name: col.name().to_string(),
                missing_count,
                missing_share: if n_rows > 0 {
                    missing_count as f64 / n_rows as f64
                } else {
                    0.0
                },
            }
        })
        .collect();

    MissingTable { n_rows, entries }
}

impl MissingTable {
    /// Render as a dataframe with columns `name`, `missing_count`, `missing_share`.
    pub fn to_dataframe(&self) -> Result<DataFrame> {
        let names: Vec<&str> = self.entries.iter().map(|e| e.name.as_str()).collect();
        let counts: Vec<u64> = self.entries.iter().map(|e| e.missing_count as u64).collect();
        let shares: Vec<f64> = self.entries.iter().map(|e| e.missing_share).collect();

        Ok(DataFrame::new(vec![
            Column::new("name".into(), names),
            Column::new("missing_count".into(), counts),
            Column::new("missing_share".into(), shares),
        ])?)
    }
}
