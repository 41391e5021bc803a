//! Data quality heuristics.
//!
//! This module derives boolean quality flags from a dataset summary, its
//! missing table and (optionally) the raw data:
//! - constant columns
//! - high-cardinality categoricals
//! - zero-heavy numeric columns
//! - duplicated values in identifier-like columns
//! - dataset-level size and missingness flags
//!
//! and folds them into a single quality score.

mod analyzer;
mod scoring;

pub use analyzer::QualityAnalyzer;
pub use scoring::quality_score;

use crate::config::ProfilingConfig;
use crate::error::Result;
use crate::types::{DatasetSummary, MissingTable, QualityFlags};
use once_cell::sync::Lazy;
use polars::prelude::*;

static DEFAULT_ANALYZER: Lazy<QualityAnalyzer> = Lazy::new(|| {
    QualityAnalyzer::new(ProfilingConfig::default()).expect("Invalid default profiling config")
});

/// Compute quality flags with the default thresholds.
///
/// See [`QualityAnalyzer::compute_flags`] for the behaviour when `dataset`
/// is `None`.
pub fn compute_quality_flags(
    summary: &DatasetSummary,
    missing: &MissingTable,
    dataset: Option<&DataFrame>,
) -> Result<QualityFlags> {
    DEFAULT_ANALYZER.compute_flags(summary, missing, dataset)
}
