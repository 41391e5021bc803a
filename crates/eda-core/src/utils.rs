//! Shared helpers for dtype classification and value extraction.

use crate::types::ColumnKind;
use polars::prelude::*;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

// =============================================================================
// Data Type Utilities
// =============================================================================

/// Check if a DataType is numeric (integer or float).
#[inline]
pub fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Int128
            | DataType::Float32
            | DataType::Float64
            | DataType::Decimal(_, _)
    )
}

/// Check if a DataType is a datetime type.
#[inline]
pub fn is_datetime_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Datetime(_, _) | DataType::Date | DataType::Time | DataType::Duration(_)
    )
}

/// Check if a DataType is boolean.
#[inline]
pub fn is_boolean_dtype(dtype: &DataType) -> bool {
    matches!(dtype, DataType::Boolean)
}

/// Check if a DataType holds text.
#[inline]
pub fn is_text_dtype(dtype: &DataType) -> bool {
    matches!(dtype, DataType::String | DataType::Categorical(_, _))
}

/// Classify a storage dtype into a [`ColumnKind`].
///
/// A column of all nulls keeps the kind of its declared dtype; a `Null`
/// dtype (no declared type at all) is `Other`.
pub fn column_kind(dtype: &DataType) -> ColumnKind {
    if is_numeric_dtype(dtype) {
        ColumnKind::Numeric
    } else if is_text_dtype(dtype) {
        ColumnKind::Categorical
    } else if is_boolean_dtype(dtype) {
        ColumnKind::Boolean
    } else if is_datetime_dtype(dtype) {
        ColumnKind::Datetime
    } else {
        ColumnKind::Other
    }
}

// =============================================================================
// Series Extraction Utilities
// =============================================================================

/// Values of a series as `f64`, nulls preserved in position.
pub fn float_values(series: &Series) -> PolarsResult<Vec<Option<f64>>> {
    let casted = series.cast(&DataType::Float64)?;
    Ok(casted.f64()?.into_iter().collect())
}

/// Values of a series rendered as strings, nulls preserved in position.
pub fn string_values(series: &Series) -> PolarsResult<Vec<Option<String>>> {
    let casted = series.cast(&DataType::String)?;
    Ok(casted
        .str()?
        .into_iter()
        .map(|v| v.map(str::to_owned))
        .collect())
}

/// Number of distinct non-null values.
///
/// Dtypes without a native unique kernel are counted by their rendered form.
pub fn distinct_non_null(series: &Series) -> PolarsResult<usize> {
    let non_null = series.drop_nulls();
    if non_null.is_empty() {
        return Ok(0);
    }
    match non_null.n_unique() {
        Ok(n) => Ok(n),
        Err(_) => {
            let rendered = render_values(&non_null)?;
            Ok(rendered.iter().collect::<HashSet<_>>().len())
        }
    }
}

/// Collect the first `max_samples` non-null values as strings.
pub fn collect_example_values(series: &Series, max_samples: usize) -> PolarsResult<Vec<String>> {
    if max_samples == 0 {
        return Ok(Vec::new());
    }
    let head = series.drop_nulls();
    let head = head.head(Some(max_samples));
    match head.cast(&DataType::String) {
        Ok(casted) => Ok(casted
            .str()?
            .into_iter()
            .flatten()
            .map(str::to_owned)
            .collect()),
        // durations and nested types have no string cast
        Err(_) => render_values(&head),
    }
}

/// Render every value with its display form, element by element.
fn render_values(series: &Series) -> PolarsResult<Vec<String>> {
    (0..series.len())
        .map(|i| series.get(i).map(|v| v.to_string()))
        .collect()
}

// =============================================================================
// Frequency Utilities
// =============================================================================

/// Count non-null values, most frequent first.
///
/// Ties keep the order in which values first appear.
pub fn value_frequencies<K, I>(values: I) -> Vec<(K, usize)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = Option<K>>,
{
    let mut positions: HashMap<K, usize> = HashMap::new();
    let mut counts: Vec<(K, usize)> = Vec::new();

    for value in values.into_iter().flatten() {
        match positions.get(&value) {
            Some(&idx) => counts[idx].1 += 1,
            None => {
                positions.insert(value.clone(), counts.len());
                counts.push((value, 1));
            }
        }
    }

    // stable sort: equal counts stay in first-appearance order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_numeric_dtype() {
        assert!(is_numeric_dtype(&DataType::Int64));
        assert!(is_numeric_dtype(&DataType::Float32));
        assert!(!is_numeric_dtype(&DataType::String));
        assert!(!is_numeric_dtype(&DataType::Boolean));
    }

    #[test]
    fn test_wide_numeric_dtypes() {
        assert!(is_numeric_dtype(&DataType::Int128));
        assert_eq!(column_kind(&DataType::Int128), ColumnKind::Numeric);
    }

    #[test]
    fn test_is_datetime_dtype() {
        assert!(is_datetime_dtype(&DataType::Date));
        assert!(is_datetime_dtype(&DataType::Datetime(
            TimeUnit::Milliseconds,
            None
        )));
        assert!(!is_datetime_dtype(&DataType::String));
    }

    #[test]
    fn test_column_kind() {
        assert_eq!(column_kind(&DataType::Int32), ColumnKind::Numeric);
        assert_eq!(column_kind(&DataType::Float64), ColumnKind::Numeric);
        assert_eq!(column_kind(&DataType::String), ColumnKind::Categorical);
        assert_eq!(column_kind(&DataType::Boolean), ColumnKind::Boolean);
        assert_eq!(column_kind(&DataType::Date), ColumnKind::Datetime);
        assert_eq!(column_kind(&DataType::Null), ColumnKind::Other);
        assert_eq!(
            column_kind(&DataType::List(Box::new(DataType::Int64))),
            ColumnKind::Other
        );
    }

    #[test]
    fn test_float_values_keeps_nulls() {
        let series = Series::new("age".into(), &[Some(10i64), None, Some(30)]);
        let values = float_values(&series).unwrap();
        assert_eq!(values, vec![Some(10.0), None, Some(30.0)]);
    }

    #[test]
    fn test_string_values_from_numbers() {
        let series = Series::new("n".into(), &[Some(1i64), None]);
        let values = string_values(&series).unwrap();
        assert_eq!(values, vec![Some("1".to_string()), None]);
    }

    #[test]
    fn test_distinct_non_null_ignores_nulls() {
        let series = Series::new("c".into(), &[Some("a"), None, Some("a"), Some("b")]);
        assert_eq!(distinct_non_null(&series).unwrap(), 2);

        let all_null = Series::new("c".into(), &[None::<i64>, None]);
        assert_eq!(distinct_non_null(&all_null).unwrap(), 0);
    }

    #[test]
    fn test_collect_example_values() {
        let series = Series::new("c".into(), &[None, Some("x"), Some("y"), Some("z"), Some("w")]);
        let samples = collect_example_values(&series, 3).unwrap();
        assert_eq!(samples, vec!["x", "y", "z"]);
        assert!(collect_example_values(&series, 0).unwrap().is_empty());
    }

    #[test]
    fn test_collect_example_values_without_string_cast() {
        let durations = Series::new("d".into(), &[Some(1_000i64), None, Some(2_000)])
            .cast(&DataType::Duration(TimeUnit::Milliseconds))
            .unwrap();
        let samples = collect_example_values(&durations, 5).unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(distinct_non_null(&durations).unwrap(), 2);
    }

    #[test]
    fn test_value_frequencies_tie_break_first_appearance() {
        let values = vec![Some("b"), Some("a"), None, Some("a"), Some("b"), Some("c")];
        let freqs = value_frequencies(values);
        assert_eq!(freqs, vec![("b", 2), ("a", 2), ("c", 1)]);
    }

    #[test]
    fn test_value_frequencies_descending() {
        let values = vec![Some(1), Some(2), Some(2), Some(3), Some(2), Some(3)];
        let freqs = value_frequencies(values);
        assert_eq!(freqs, vec![(2, 3), (3, 2), (1, 1)]);
    }

    #[test]
    fn test_value_frequencies_all_null() {
        let freqs = value_frequencies(vec![None::<&str>, None]);
        assert!(freqs.is_empty());
    }
}
