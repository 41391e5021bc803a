use crate::config::ProfilingConfig;
use crate::error::{ProfilingError, Result};
use crate::quality::scoring::quality_score;
use crate::types::{DatasetSummary, MissingTable, QualityFlags};
use crate::utils::{distinct_non_null, float_values};
use polars::prelude::*;
use regex::Regex;
use tracing::{debug, info};

/// Derives quality flags from a summary, a missing table and, optionally,
/// the raw dataset.
#[derive(Debug, Clone)]
pub struct QualityAnalyzer {
    config: ProfilingConfig,
    id_pattern: Regex,
}

/// Offending columns found by the checks that need row-level data.
#[derive(Debug, Default)]
struct RowLevelFindings {
    constant: Vec<String>,
    high_cardinality: Vec<String>,
    zero_heavy: Vec<String>,
    id_duplicates: Vec<String>,
}

impl QualityAnalyzer {
    /// Create an analyzer, validating the configuration first.
    pub fn new(config: ProfilingConfig) -> Result<Self> {
        config.validate()?;
        let id_pattern = Regex::new(&config.id_name_pattern)
            .map_err(|e| ProfilingError::InvalidConfig(e.to_string()))?;
        Ok(Self { config, id_pattern })
    }

    pub fn config(&self) -> &ProfilingConfig {
        &self.config
    }

    /// Whether a column name looks like an identifier (`id`, `user_id`, ...).
    pub fn is_id_like(&self, name: &str) -> bool {
        self.id_pattern.is_match(name)
    }

    /// Compute every quality flag and the composite score.
    ///
    /// Without a dataset, the constant, cardinality, zero and identifier
    /// checks are skipped and reported as `false` with no columns.
    ///
    /// # Errors
    ///
    /// Returns [`ProfilingError::ColumnNotFound`] when the dataset lacks a
    /// column named in the summary.
    pub fn compute_flags(
        &self,
        summary: &DatasetSummary,
        missing: &MissingTable,
        dataset: Option<&DataFrame>,
    ) -> Result<QualityFlags> {
        let max_missing_share = missing.max_share();

        let findings = match dataset {
            Some(df) => self.row_level_checks(summary, df)?,
            None => {
                debug!("No dataset supplied, skipping row-level quality checks");
                RowLevelFindings::default()
            }
        };

        let mut flags = QualityFlags {
            quality_score: 0.0,
            too_few_rows: summary.n_rows < self.config.min_rows,
            too_many_columns: summary.n_cols > self.config.max_columns,
            max_missing_share,
            too_many_missing: max_missing_share > self.config.too_many_missing_threshold,
            has_constant_columns: !findings.constant.is_empty(),
            constant_columns: findings.constant,
            has_high_cardinality_categoricals: !findings.high_cardinality.is_empty(),
            high_cardinality_categoricals: findings.high_cardinality,
            has_many_zero_values: !findings.zero_heavy.is_empty(),
            zero_heavy_columns: findings.zero_heavy,
            has_suspicious_id_duplicates: !findings.id_duplicates.is_empty(),
            suspicious_id_duplicates: findings.id_duplicates,
        };

        let raised = flags.raised_count();
        flags.quality_score = quality_score(missing.mean_share(), raised, self.config.flag_penalty);
        info!(
            "Quality score {:.3} ({} flag(s) raised)",
            flags.quality_score, raised
        );

        Ok(flags)
    }

    fn row_level_checks(&self, summary: &DatasetSummary, df: &DataFrame) -> Result<RowLevelFindings> {
        let mut findings = RowLevelFindings::default();

        for col_summary in &summary.columns {
            let name = &col_summary.name;
            let col = df
                .column(name)
                .map_err(|_| ProfilingError::ColumnNotFound(name.clone()))?;
            let non_null = col.as_materialized_series().drop_nulls();
            let count = non_null.len();
            let distinct = distinct_non_null(&non_null)?;
            let kind = col_summary.kind;

            if (kind.is_numeric() || kind.is_categorical()) && distinct == 1 {
                debug!("'{}' holds a single distinct value", name);
                findings.constant.push(name.clone());
            }

            if kind.is_categorical() && self.is_high_cardinality(distinct, count) {
                debug!("'{}' is high-cardinality: {} of {} distinct", name, distinct, count);
                findings.high_cardinality.push(name.clone());
            }

            if kind.is_numeric()
                && let Some(share) = zero_share(&float_values(&non_null)?)
                && share > self.config.zero_share_threshold
            {
                debug!("'{}' is zero-heavy: {:.1}% zeros", name, share * 100.0);
                findings.zero_heavy.push(name.clone());
            }

            if self.is_id_like(name) && distinct < count {
                debug!(
                    "'{}' looks like an identifier but has {} duplicate value(s)",
                    name,
                    count - distinct
                );
                findings.id_duplicates.push(name.clone());
            }
        }

        Ok(findings)
    }

    fn is_high_cardinality(&self, distinct: usize, count: usize) -> bool {
        count > 0
            && count >= self.config.high_cardinality_min_count
            && distinct as f64 / count as f64 > self.config.high_cardinality_ratio
    }
}

/// Share of exact zeros among present values; `None` when nothing is present.
fn zero_share(values: &[Option<f64>]) -> Option<f64> {
    let present: Vec<f64> = values.iter().flatten().copied().collect();
    if present.is_empty() {
        return None;
    }
    let zeros = present.iter().filter(|v| **v == 0.0).count();
    Some(zeros as f64 / present.len() as f64)
}
