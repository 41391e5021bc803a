//! Kind-specific statistics for column summaries.

use crate::types::{BooleanStats, CategoricalStats, ColumnKind, ColumnStats, NumericStats};
use crate::utils::{float_values, string_values, value_frequencies};
use polars::prelude::*;

/// Compute the statistics block for a column of the given kind.
pub(crate) fn extract_column_stats(series: &Series, kind: ColumnKind) -> PolarsResult<ColumnStats> {
    let stats = match kind {
        ColumnKind::Numeric => {
            // NaN and infinities count as present but carry no magnitude
            let values: Vec<f64> = float_values(series)?
                .into_iter()
                .flatten()
                .filter(|v| v.is_finite())
                .collect();
            ColumnStats::Numeric(numeric_stats(&values))
        }
        ColumnKind::Categorical => ColumnStats::Categorical(categorical_stats(series)?),
        ColumnKind::Boolean => ColumnStats::Boolean(boolean_stats(series)?),
        ColumnKind::Datetime | ColumnKind::Other => ColumnStats::NotApplicable,
    };
    Ok(stats)
}

/// Min, max, mean and sample standard deviation of non-null values.
pub(crate) fn numeric_stats(values: &[f64]) -> NumericStats {
    if values.is_empty() {
        return NumericStats {
            min: None,
            max: None,
            mean: None,
            std: None,
        };
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mean = values.iter().sum::<f64>() / values.len() as f64;

    NumericStats {
        min: Some(min),
        max: Some(max),
        mean: Some(mean),
        std: calculate_std(values, mean),
    }
}

/// Sample standard deviation (n - 1 denominator); undefined below two values.
pub(crate) fn calculate_std(values: &[f64], mean: f64) -> Option<f64> {
    let n = values.len();
    if n < 2 {
        return None;
    }

    let variance: f64 =
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n as f64 - 1.0);

    Some(variance.sqrt())
}

/// Most frequent value, ties broken by first appearance.
pub(crate) fn categorical_stats(series: &Series) -> PolarsResult<CategoricalStats> {
    let freqs = value_frequencies(string_values(series)?);
    let stats = match freqs.into_iter().next() {
        Some((value, count)) => CategoricalStats {
            most_frequent: Some(value),
            most_frequent_count: count,
        },
        None => CategoricalStats {
            most_frequent: None,
            most_frequent_count: 0,
        },
    };
    Ok(stats)
}

pub(crate) fn boolean_stats(series: &Series) -> PolarsResult<BooleanStats> {
    let ca = series.bool()?;
    let (mut true_count, mut false_count) = (0, 0);
    for value in ca.into_iter().flatten() {
        if value {
            true_count += 1;
        } else {
            false_count += 1;
        }
    }
    Ok(BooleanStats {
        true_count,
        false_count,
    })
}
