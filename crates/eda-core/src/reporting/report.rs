use crate::categories::top_categories;
use crate::config::ProfilingConfig;
use crate::correlation::correlation_matrix;
use crate::error::{Result, ResultExt};
use crate::missing::missing_table;
use crate::profiler::DataProfiler;
use crate::quality::QualityAnalyzer;
use crate::types::{CorrelationMatrix, DatasetSummary, MissingTable, QualityFlags, TopCategories};
use chrono::Local;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Every profiling result for one dataset, bundled for JSON output.
///
/// The report is built in memory and handed back to the caller; writing it
/// anywhere is the caller's business.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileReport {
    /// Timestamp when the report was generated
    pub generated_at: String,
    /// Settings the report was produced with
    pub config: ProfilingConfig,
    pub summary: DatasetSummary,
    pub missing: MissingTable,
    pub correlation: CorrelationMatrix,
    pub top_categories: TopCategories,
    pub quality_flags: QualityFlags,
}

impl ProfileReport {
    /// Run every component over `df` with the given configuration.
    ///
    /// Top categories use `config.max_categories` and `config.top_k`.
    pub fn build(df: &DataFrame, config: &ProfilingConfig) -> Result<Self> {
        let analyzer = QualityAnalyzer::new(config.clone())?;

        let summary = DataProfiler::new(config)
            .summarize_dataset(df)
            .context("Building dataset summary")?;
        let missing = missing_table(df);
        let correlation = correlation_matrix(df).context("Computing correlations")?;
        let top_categories = top_categories(df, config.max_categories, config.top_k)
            .context("Ranking categories")?;
        let quality_flags = analyzer
            .compute_flags(&summary, &missing, Some(df))
            .context("Computing quality flags")?;

        info!(
            "Profiled {} rows x {} columns",
            summary.n_rows, summary.n_cols
        );

        Ok(Self {
            generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            config: config.clone(),
            summary,
            missing,
            correlation,
            top_categories,
            quality_flags,
        })
    }

    /// Serialize the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
