//! Configuration for the profiling engine.
//!
//! The quality heuristics are threshold-driven. Every threshold lives here so
//! callers can tune them; the defaults are what [`ProfilingConfig::default`]
//! and the free functions in this crate use.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Default regex for identifier-like column names (`id`, `user_id`, `ORDER_ID`).
pub const DEFAULT_ID_NAME_PATTERN: &str = r"(?i)^(id|.*_id)$";

/// Thresholds and limits used by the profiler and the quality-flag engine.
///
/// Use [`ProfilingConfig::builder()`] to create a configuration with a fluent API.
///
/// # Example
///
/// ```rust,ignore
/// use eda_core::config::ProfilingConfig;
///
/// let config = ProfilingConfig::builder()
///     .zero_share_threshold(0.7)
///     .min_rows(20)
///     .build()?;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfilingConfig {
    /// A categorical column is high-cardinality when `distinct / count`
    /// exceeds this ratio.
    /// Default: 0.9
    pub high_cardinality_ratio: f64,

    /// Minimum non-null count before the high-cardinality rule applies.
    /// Default: 10
    pub high_cardinality_min_count: usize,

    /// A numeric column is zero-heavy when its share of zeros among non-null
    /// values exceeds this threshold.
    /// Default: 0.5
    pub zero_share_threshold: f64,

    /// The dataset is flagged when the largest column missing share exceeds
    /// this threshold.
    /// Default: 0.5
    pub too_many_missing_threshold: f64,

    /// `too_few_rows` is raised when the dataset has fewer rows than this.
    /// Default: 100
    pub min_rows: usize,

    /// `too_many_columns` is raised when the dataset has more columns than this.
    /// Default: 100
    pub max_columns: usize,

    /// Score deduction for every raised flag (0.0 - 1.0).
    /// Default: 0.1
    pub flag_penalty: f64,

    /// Regex matched against column names to find identifier columns.
    /// Default: [`DEFAULT_ID_NAME_PATTERN`]
    pub id_name_pattern: String,

    /// Ranking length used by the report for top categories.
    /// Default: 5
    pub top_k: usize,

    /// Distinct-value cap used by the report for top categories.
    /// Default: 20
    pub max_categories: usize,

    /// Number of example values kept on each column summary.
    /// Default: 3
    pub example_values: usize,
}

impl Default for ProfilingConfig {
    fn default() -> Self {
        Self {
            high_cardinality_ratio: 0.9,
            high_cardinality_min_count: 10,
            zero_share_threshold: 0.5,
            too_many_missing_threshold: 0.5,
            min_rows: 100,
            max_columns: 100,
            flag_penalty: 0.1,
            id_name_pattern: DEFAULT_ID_NAME_PATTERN.to_string(),
            top_k: 5,
            max_categories: 20,
            example_values: 3,
        }
    }
}

impl ProfilingConfig {
    /// Create a new configuration builder.
    pub fn builder() -> ProfilingConfigBuilder {
        ProfilingConfigBuilder::default()
    }

    /// Validate the configuration and return errors if invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let ratios = [
            ("high_cardinality_ratio", self.high_cardinality_ratio),
            ("zero_share_threshold", self.zero_share_threshold),
            ("too_many_missing_threshold", self.too_many_missing_threshold),
            ("flag_penalty", self.flag_penalty),
        ];
        for (field, value) in ratios {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigValidationError::InvalidThreshold {
                    field: field.to_string(),
                    value,
                });
            }
        }

        if self.max_categories == 0 {
            return Err(ConfigValidationError::InvalidMaxCategories(
                self.max_categories,
            ));
        }

        if let Err(e) = Regex::new(&self.id_name_pattern) {
            return Err(ConfigValidationError::InvalidIdPattern {
                pattern: self.id_name_pattern.clone(),
                reason: e.to_string(),
            });
        }

        Ok(())
    }

    /// Parse a configuration from JSON and validate it.
    ///
    /// Missing fields fall back to their defaults.
    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        let config: ProfilingConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

/// Errors that can occur during configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid threshold for '{field}': {value} (must be between 0.0 and 1.0)")]
    InvalidThreshold { field: String, value: f64 },

    #[error("Invalid max categories: {0} (must be at least 1)")]
    InvalidMaxCategories(usize),

    #[error("Invalid identifier pattern '{pattern}': {reason}")]
    InvalidIdPattern { pattern: String, reason: String },
}

/// Builder for [`ProfilingConfig`] with fluent API.
#[derive(Debug, Default)]
pub struct ProfilingConfigBuilder {
    high_cardinality_ratio: Option<f64>,
    high_cardinality_min_count: Option<usize>,
    zero_share_threshold: Option<f64>,
    too_many_missing_threshold: Option<f64>,
    min_rows: Option<usize>,
    max_columns: Option<usize>,
    flag_penalty: Option<f64>,
    id_name_pattern: Option<String>,
    top_k: Option<usize>,
    max_categories: Option<usize>,
    example_values: Option<usize>,
}

impl ProfilingConfigBuilder {
    /// Set the distinct/count ratio above which a categorical column is
    /// considered high-cardinality.
    ///
    /// # Arguments
    /// * `ratio` - Value between 0.0 and 1.0 (e.g., 0.9 = 90% unique)
    pub fn high_cardinality_ratio(mut self, ratio: f64) -> Self {
        self.high_cardinality_ratio = Some(ratio);
        self
    }

    /// Set the minimum non-null count for the high-cardinality rule.
    pub fn high_cardinality_min_count(mut self, count: usize) -> Self {
        self.high_cardinality_min_count = Some(count);
        self
    }

    /// Set the share of zeros above which a numeric column is zero-heavy.
    pub fn zero_share_threshold(mut self, threshold: f64) -> Self {
        self.zero_share_threshold = Some(threshold);
        self
    }

    /// Set the largest tolerated missing share before `too_many_missing` is raised.
    pub fn too_many_missing_threshold(mut self, threshold: f64) -> Self {
        self.too_many_missing_threshold = Some(threshold);
        self
    }

    /// Set the row count below which `too_few_rows` is raised.
    pub fn min_rows(mut self, rows: usize) -> Self {
        self.min_rows = Some(rows);
        self
    }

    /// Set the column count above which `too_many_columns` is raised.
    pub fn max_columns(mut self, columns: usize) -> Self {
        self.max_columns = Some(columns);
        self
    }

    /// Set the score deduction applied per raised flag.
    pub fn flag_penalty(mut self, penalty: f64) -> Self {
        self.flag_penalty = Some(penalty);
        self
    }

    /// Set the regex used to recognise identifier columns by name.
    pub fn id_name_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.id_name_pattern = Some(pattern.into());
        self
    }

    /// Set the ranking length for top categories in reports.
    pub fn top_k(mut self, k: usize) -> Self {
        self.top_k = Some(k);
        self
    }

    /// Set the distinct-value cap for top categories in reports.
    pub fn max_categories(mut self, max: usize) -> Self {
        self.max_categories = Some(max);
        self
    }

    /// Set how many example values each column summary keeps.
    pub fn example_values(mut self, n: usize) -> Self {
        self.example_values = Some(n);
        self
    }

    /// Build the configuration.
    ///
    /// Returns a validated `ProfilingConfig` or an error if validation fails.
    pub fn build(self) -> Result<ProfilingConfig, ConfigValidationError> {
        let defaults = ProfilingConfig::default();
        let config = ProfilingConfig {
            high_cardinality_ratio: self
                .high_cardinality_ratio
                .unwrap_or(defaults.high_cardinality_ratio),
            high_cardinality_min_count: self
                .high_cardinality_min_count
                .unwrap_or(defaults.high_cardinality_min_count),
            zero_share_threshold: self
                .zero_share_threshold
                .unwrap_or(defaults.zero_share_threshold),
            too_many_missing_threshold: self
                .too_many_missing_threshold
                .unwrap_or(defaults.too_many_missing_threshold),
            min_rows: self.min_rows.unwrap_or(defaults.min_rows),
            max_columns: self.max_columns.unwrap_or(defaults.max_columns),
            flag_penalty: self.flag_penalty.unwrap_or(defaults.flag_penalty),
            id_name_pattern: self.id_name_pattern.unwrap_or(defaults.id_name_pattern),
            top_k: self.top_k.unwrap_or(defaults.top_k),
            max_categories: self.max_categories.unwrap_or(defaults.max_categories),
            example_values: self.example_values.unwrap_or(defaults.example_values),
        };

        config.validate()?;
        Ok(config)
    }
}
