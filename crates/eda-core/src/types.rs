use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Column classification
// ============================================================================

/// Semantic kind of a column, assigned once from its storage dtype.
///
/// Every downstream component branches on this tag instead of re-probing
/// the column's dtype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// Integer or floating point numbers
    Numeric,
    /// String or categorical text
    Categorical,
    /// Boolean values
    Boolean,
    /// Date, datetime or time values
    Datetime,
    /// Anything else (lists, structs, binary, ...)
    Other,
}

impl ColumnKind {
    /// Lowercase name used in tables and reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnKind::Numeric => "numeric",
            ColumnKind::Categorical => "categorical",
            ColumnKind::Boolean => "boolean",
            ColumnKind::Datetime => "datetime",
            ColumnKind::Other => "other",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnKind::Numeric)
    }

    pub fn is_categorical(&self) -> bool {
        matches!(self, ColumnKind::Categorical)
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Column and dataset summaries
// ============================================================================

/// Descriptive statistics of a numeric column, over non-null values only.
///
/// All fields are `None` when the column has no non-null values. `std` is the
/// sample standard deviation and also needs at least two values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericStats {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
    pub std: Option<f64>,
}

/// Most frequent value of a categorical column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoricalStats {
    /// `None` when the column has no non-null values.
    pub most_frequent: Option<String>,
    pub most_frequent_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BooleanStats {
    pub true_count: usize,
    pub false_count: usize,
}

/// Kind-specific statistics attached to a [`ColumnSummary`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ColumnStats {
    Numeric(NumericStats),
    Categorical(CategoricalStats),
    Boolean(BooleanStats),
    /// Datetime and other columns carry no extra statistics.
    NotApplicable,
}

/// Summary of a single column.
///
/// Invariant: `count + missing_count` equals the dataset's row count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSummary {
    pub name: String,
    /// Storage dtype as reported by polars (e.g. `Int64`, `String`).
    pub dtype: String,
    pub kind: ColumnKind,
    /// Number of non-null values.
    pub count: usize,
    pub missing_count: usize,
    /// `missing_count / n_rows`, or 0.0 for an empty dataset.
    pub missing_share: f64,
    /// Number of distinct non-null values.
    pub unique_count: usize,
    /// First non-null values, rendered as strings.
    pub example_values: Vec<String>,
    pub stats: ColumnStats,
}

impl ColumnSummary {
    pub fn numeric_stats(&self) -> Option<&NumericStats> {
        match &self.stats {
            ColumnStats::Numeric(stats) => Some(stats),
            _ => None,
        }
    }

    pub fn categorical_stats(&self) -> Option<&CategoricalStats> {
        match &self.stats {
            ColumnStats::Categorical(stats) => Some(stats),
            _ => None,
        }
    }
}

/// Summary of a whole dataset; columns keep the dataset's column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub n_rows: usize,
    pub n_cols: usize,
    pub columns: Vec<ColumnSummary>,
}

impl DatasetSummary {
    /// Look up a column summary by name.
    pub fn column(&self, name: &str) -> Option<&ColumnSummary> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }
}

// ============================================================================
// Missing values
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingEntry {
    pub name: String,
    pub missing_count: usize,
    pub missing_share: f64,
}

/// Per-column missing counts, one entry per column in dataset order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingTable {
    pub n_rows: usize,
    pub entries: Vec<MissingEntry>,
}

impl MissingTable {
    pub fn get(&self, name: &str) -> Option<&MissingEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn missing_count(&self, name: &str) -> Option<usize> {
        self.get(name).map(|e| e.missing_count)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Mean missing share across columns; 0.0 when there are no columns.
    pub fn mean_share(&self) -> f64 {
        if self.entries.is_empty() {
            return 0.0;
        }
        self.entries.iter().map(|e| e.missing_share).sum::<f64>() / self.entries.len() as f64
    }

    /// Largest missing share across columns; 0.0 when there are no columns.
    pub fn max_share(&self) -> f64 {
        self.entries
            .iter()
            .map(|e| e.missing_share)
            .fold(0.0, f64::max)
    }
}

// ============================================================================
// Correlation
// ============================================================================

/// Symmetric Pearson correlation matrix over numeric columns.
///
/// `values[i][j]` is the correlation between `columns[i]` and `columns[j]`,
/// or `None` where it is undefined. Empty when fewer than two numeric
/// columns exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    pub values: Vec<Vec<Option<f64>>>,
}

impl CorrelationMatrix {
    pub fn empty() -> Self {
        Self {
            columns: Vec::new(),
            values: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Correlation between two columns, `None` if undefined or unknown.
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.columns.iter().position(|c| c == a)?;
        let j = self.columns.iter().position(|c| c == b)?;
        self.values.get(i)?.get(j).copied().flatten()
    }
}

// ============================================================================
// Top categories
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub value: String,
    pub count: usize,
    /// `count` divided by the column's non-null count.
    pub share: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRanking {
    pub column: String,
    /// Descending by count; ties keep first-appearance order.
    pub entries: Vec<CategoryCount>,
}

/// Ranked values per categorical column, in dataset column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopCategories {
    pub rankings: Vec<CategoryRanking>,
}

impl TopCategories {
    pub fn get(&self, column: &str) -> Option<&CategoryRanking> {
        self.rankings.iter().find(|r| r.column == column)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.get(column).is_some()
    }

    pub fn len(&self) -> usize {
        self.rankings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rankings.is_empty()
    }
}

// ============================================================================
// Quality flags
// ============================================================================

/// Heuristic data-quality flags and the composite quality score.
///
/// Each `has_*` flag is paired with the list of offending columns. Flags that
/// need row-level access are `false` with an empty list when no dataset was
/// supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityFlags {
    pub quality_score: f64,

    pub too_few_rows: bool,
    pub too_many_columns: bool,
    pub max_missing_share: f64,
    pub too_many_missing: bool,

    pub has_constant_columns: bool,
    pub constant_columns: Vec<String>,

    pub has_high_cardinality_categoricals: bool,
    pub high_cardinality_categoricals: Vec<String>,

    pub has_many_zero_values: bool,
    pub zero_heavy_columns: Vec<String>,

    pub has_suspicious_id_duplicates: bool,
    pub suspicious_id_duplicates: Vec<String>,
}

impl QualityFlags {
    /// Number of raised boolean flags.
    pub fn raised_count(&self) -> usize {
        [
            self.too_few_rows,
            self.too_many_columns,
            self.too_many_missing,
            self.has_constant_columns,
            self.has_high_cardinality_categoricals,
            self.has_many_zero_values,
            self.has_suspicious_id_duplicates,
        ]
        .iter()
        .filter(|&&raised| raised)
        .count()
    }
}

// Results are plain data, shareable across threads.
static_assertions::assert_impl_all!(DatasetSummary: Send, Sync);
static_assertions::assert_impl_all!(MissingTable: Send, Sync);
static_assertions::assert_impl_all!(CorrelationMatrix: Send, Sync);
static_assertions::assert_impl_all!(TopCategories: Send, Sync);
static_assertions::assert_impl_all!(QualityFlags: Send, Sync);
