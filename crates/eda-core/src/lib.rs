//! Tabular Data Profiling Library
//!
//! Exploratory data analysis for in-memory tables, built with Rust and Polars.
//!
//! # Overview
//!
//! Given a [`polars::prelude::DataFrame`], this library produces:
//!
//! - **Column Summaries**: Per-column kind, counts, missingness and descriptive statistics
//! - **Missing Table**: Missing count and share for every column
//! - **Correlations**: Pairwise Pearson correlation across numeric columns
//! - **Top Categories**: Most frequent values of low-cardinality text columns
//! - **Quality Flags**: Heuristic flags folded into a single quality score
//!
//! All operations are read-only over the input and deterministic.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use eda_core::{
//!     compute_quality_flags, correlation_matrix, missing_table, summarize_dataset,
//!     top_categories,
//! };
//! use polars::prelude::*;
//!
//! let df = df![
//!     "age" => [Some(10i64), Some(20), Some(30), None],
//!     "height" => [140i64, 150, 160, 170],
//!     "city" => [Some("A"), Some("B"), Some("A"), None],
//! ]?;
//!
//! let summary = summarize_dataset(&df)?;
//! let missing = missing_table(&df);
//! let corr = correlation_matrix(&df)?;
//! let top = top_categories(&df, 20, 5)?;
//! let flags = compute_quality_flags(&summary, &missing, Some(&df))?;
//!
//! println!("Quality score: {:.2}", flags.quality_score);
//! ```
//!
//! # Configuration
//!
//! Use [`ProfilingConfig`] to tune the quality heuristics:
//!
//! ```rust,ignore
//! use eda_core::{ProfileReport, ProfilingConfig, QualityAnalyzer};
//!
//! let config = ProfilingConfig::builder()
//!     .high_cardinality_ratio(0.8)   // Flag categoricals with >80% distinct values
//!     .zero_share_threshold(0.6)     // Flag numerics with >60% zeros
//!     .min_rows(50)
//!     .top_k(10)
//!     .build()?;
//!
//! let flags = QualityAnalyzer::new(config.clone())?.compute_flags(&summary, &missing, Some(&df))?;
//! let report = ProfileReport::build(&df, &config)?;
//! ```

pub mod categories;
pub mod config;
pub mod correlation;
pub mod error;
pub mod missing;
pub mod profiler;
pub mod quality;
pub mod reporting;
pub mod types;
pub mod utils;

// Re-exports for convenient access
pub use categories::top_categories;
pub use config::{ConfigValidationError, ProfilingConfig, ProfilingConfigBuilder};
pub use correlation::{correlation_matrix, pearson_pairwise};
pub use error::{ProfilingError, Result as ProfilingResult, ResultExt};
pub use missing::missing_table;
pub use profiler::{DataProfiler, build_dataset, summarize_column, summarize_dataset};
pub use quality::{QualityAnalyzer, compute_quality_flags, quality_score};
pub use reporting::{ProfileReport, flatten_summary_for_print};
pub use types::{
    BooleanStats, CategoricalStats, CategoryCount, CategoryRanking, ColumnKind, ColumnStats,
    ColumnSummary, CorrelationMatrix, DatasetSummary, MissingEntry, MissingTable, NumericStats,
    QualityFlags, TopCategories,
};
pub use utils::{column_kind, is_boolean_dtype, is_datetime_dtype, is_numeric_dtype, is_text_dtype};
