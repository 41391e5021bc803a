//! Top-K value ranking for categorical columns.

use crate::error::{ProfilingError, Result};
use crate::types::{CategoryCount, CategoryRanking, TopCategories};
use crate::utils::{column_kind, string_values, value_frequencies};
use polars::prelude::*;
use tracing::debug;

/// Rank the most frequent values of every categorical column.
///
/// Columns with more than `max_columns` distinct non-null values are left out
/// of the result entirely. Each ranking holds at most `top_k` entries, sorted
/// by descending count with ties in first-appearance order; `top_k == 0`
/// yields empty rankings.
///
/// # Errors
///
/// Returns [`ProfilingError::InvalidConfig`] when `max_columns` is zero.
pub fn top_categories(df: &DataFrame, max_columns: usize, top_k: usize) -> Result<TopCategories> {
    if max_columns == 0 {
        return Err(ProfilingError::InvalidConfig(
            "max_columns must be at least 1".to_string(),
        ));
    }

    let mut rankings = Vec::new();
    for col in df.get_columns() {
        let series = col.as_materialized_series();
        if !column_kind(series.dtype()).is_categorical() {
            continue;
        }

        let freqs = value_frequencies(string_values(series)?);
        if freqs.len() > max_columns {
            debug!(
                "Skipping '{}': {} distinct values exceed limit of {}",
                col.name(),
                freqs.len(),
                max_columns
            );
            continue;
        }

        let total: usize = freqs.iter().map(|(_, count)| count).sum();
        let entries = freqs
            .into_iter()
            .take(top_k)
            .map(|(value, count)| CategoryCount {
                value,
                count,
                share: count as f64 / total as f64,
            })
            .collect();

        rankings.push(CategoryRanking {
            column: col.name().to_string(),
            entries,
        });
    }

    Ok(TopCategories { rankings })
}

impl TopCategories {
    /// Render each ranking as a dataframe with columns `value`, `count`, `share`.
    pub fn to_dataframes(&self) -> Result<Vec<(String, DataFrame)>> {
        self.rankings
            .iter()
            .map(|ranking| {
                let values: Vec<&str> = ranking.entries.iter().map(|e| e.value.as_str()).collect();
                let counts: Vec<u64> = ranking.entries.iter().map(|e| e.count as u64).collect();
                let shares: Vec<f64> = ranking.entries.iter().map(|e| e.share).collect();
                let df = DataFrame::new(vec![
                    Column::new("value".into(), values),
                    Column::new("count".into(), counts),
                    Column::new("share".into(), shares),
                ])?;
                Ok((ranking.column.clone(), df))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_df() -> DataFrame {
        df![
            "age" => [Some(10i64), Some(20), Some(30), None],
            "height" => [140i64, 150, 160, 170],
            "city" => [Some("A"), Some("B"), Some("A"), None],
        ]
        .unwrap()
    }

    #[test]
    fn test_city_is_ranked() {
        let top = top_categories(&sample_df(), 5, 2).unwrap();
        assert!(top.contains("city"));
        assert!(!top.contains("age"));

        let city = top.get("city").unwrap();
        assert!(city.entries.len() <= 2);
        assert_eq!(city.entries[0].value, "A");
        assert_eq!(city.entries[0].count, 2);
        assert!((city.entries[0].share - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(city.entries[1].value, "B");
    }

    #[test]
    fn test_truncates_to_top_k() {
        let df = df!["c" => ["a", "b", "c", "d", "a", "b", "a"]].unwrap();
        let top = top_categories(&df, 10, 2).unwrap();
        let ranking = top.get("c").unwrap();
        let values: Vec<_> = ranking.entries.iter().map(|e| e.value.as_str()).collect();
        assert_eq!(values, vec!["a", "b"]);
    }

    #[test]
    fn test_ties_keep_first_appearance() {
        let df = df!["c" => ["z", "y", "x", "y", "z", "x"]].unwrap();
        let top = top_categories(&df, 10, 3).unwrap();
        let values: Vec<_> = top
            .get("c")
            .unwrap()
            .entries
            .iter()
            .map(|e| e.value.as_str())
            .collect();
        assert_eq!(values, vec!["z", "y", "x"]);
    }

    #[test]
    fn test_excludes_high_distinct_columns() {
        let df = df![
            "few" => ["a", "b", "a", "b"],
            "many" => ["a", "b", "c", "d"],
        ]
        .unwrap();
        let top = top_categories(&df, 3, 5).unwrap();
        assert!(top.contains("few"));
        assert!(!top.contains("many"));
    }

    #[test]
    fn test_top_k_zero_gives_empty_rankings() {
        let top = top_categories(&sample_df(), 5, 0).unwrap();
        assert!(top.get("city").unwrap().entries.is_empty());
    }

    #[test]
    fn test_max_columns_zero_is_error() {
        let err = top_categories(&sample_df(), 0, 5).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CONFIG");
    }

    #[test]
    fn test_all_null_categorical_column() {
        let df = df!["c" => [None::<&str>, None]].unwrap();
        let top = top_categories(&df, 5, 5).unwrap();
        assert!(top.get("c").unwrap().entries.is_empty());
    }

    #[test]
    fn test_to_dataframes() {
        let frames = top_categories(&sample_df(), 5, 2)
            .unwrap()
            .to_dataframes()
            .unwrap();
        assert_eq!(frames.len(), 1);
        let (name, df) = &frames[0];
        assert_eq!(name, "city");
        assert!(df.column("value").is_ok());
        assert_eq!(df.height(), 2);
    }
}
