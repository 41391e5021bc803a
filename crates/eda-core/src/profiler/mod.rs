//! Column classification and per-column summaries.
//!
//! Each column is classified once into a [`ColumnKind`] from its storage
//! dtype; the summary statistics then branch on that tag.

mod statistics;

use crate::config::ProfilingConfig;
use crate::error::{ProfilingError, Result, ResultExt};
use crate::types::{ColumnSummary, DatasetSummary};
use crate::utils::{collect_example_values, column_kind, distinct_non_null};
use polars::prelude::*;
use std::collections::HashSet;
use tracing::debug;

/// Builds [`DatasetSummary`] values from a dataframe.
#[derive(Debug, Clone)]
pub struct DataProfiler {
    example_values: usize,
}

impl Default for DataProfiler {
    fn default() -> Self {
        Self::new(&ProfilingConfig::default())
    }
}

impl DataProfiler {
    pub fn new(config: &ProfilingConfig) -> Self {
        Self {
            example_values: config.example_values,
        }
    }

    /// Summarize every column of the dataset, in column order.
    ///
    /// A dataset without columns yields `n_cols = 0` and no summaries.
    pub fn summarize_dataset(&self, df: &DataFrame) -> Result<DatasetSummary> {
        let n_rows = df.height();
        debug!("Summarizing {} columns over {} rows", df.width(), n_rows);

        let columns = df
            .get_columns()
            .iter()
            .map(|col| {
                self.summarize_series(col.as_materialized_series(), n_rows)
                    .context(format!("Summarizing column '{}'", col.name()))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(DatasetSummary {
            n_rows,
            n_cols: df.width(),
            columns,
        })
    }

    /// Summarize a single named column.
    pub fn summarize_column(&self, df: &DataFrame, name: &str) -> Result<ColumnSummary> {
        let col = df
            .column(name)
            .map_err(|_| ProfilingError::ColumnNotFound(name.to_string()))?;
        self.summarize_series(col.as_materialized_series(), df.height())
    }

    fn summarize_series(&self, series: &Series, n_rows: usize) -> Result<ColumnSummary> {
        let kind = column_kind(series.dtype());
        let missing_count = series.null_count();
        let count = series.len() - missing_count;
        let missing_share = if n_rows > 0 {
            missing_count as f64 / n_rows as f64
        } else {
            0.0
        };

        let stats = statistics::extract_column_stats(series, kind)?;

        Ok(ColumnSummary {
            name: series.name().to_string(),
            dtype: format!("{:?}", series.dtype()),
            kind,
            count,
            missing_count,
            missing_share,
            unique_count: distinct_non_null(series)?,
            example_values: collect_example_values(series, self.example_values)?,
            stats,
        })
    }
}

/// Summarize a dataset with default settings.
pub fn summarize_dataset(df: &DataFrame) -> Result<DatasetSummary> {
    DataProfiler::default().summarize_dataset(df)
}

/// Summarize one named column with default settings.
pub fn summarize_column(df: &DataFrame, name: &str) -> Result<ColumnSummary> {
    DataProfiler::default().summarize_column(df, name)
}

/// Assemble a dataset from columns, rejecting ragged or duplicated input.
///
/// An empty column list produces an empty dataset.
pub fn build_dataset(columns: Vec<Column>) -> Result<DataFrame> {
    let Some(first) = columns.first() else {
        return Ok(DataFrame::empty());
    };
    let expected = first.len();

    let mut seen = HashSet::new();
    for col in &columns {
        if !seen.insert(col.name().to_string()) {
            return Err(ProfilingError::DuplicateColumn(col.name().to_string()));
        }
        if col.len() != expected {
            return Err(ProfilingError::ShapeMismatch {
                column: col.name().to_string(),
                expected,
                found: col.len(),
            });
        }
    }

    Ok(DataFrame::new(columns)?)
}
