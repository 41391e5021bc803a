//! Pairwise Pearson correlation over numeric columns.
//!
//! Each pair uses only the rows where both columns are non-null
//! (pairwise-complete observations).

use crate::error::Result;
use crate::types::CorrelationMatrix;
use crate::utils::{column_kind, float_values};
use polars::prelude::*;
use tracing::debug;

/// Compute the correlation matrix of all numeric columns.
///
/// Returns an empty matrix when fewer than two numeric columns exist.
pub fn correlation_matrix(df: &DataFrame) -> Result<CorrelationMatrix> {
    let mut columns = Vec::new();
    let mut values = Vec::new();
    for col in df.get_columns() {
        let series = col.as_materialized_series();
        if column_kind(series.dtype()).is_numeric() {
            columns.push(col.name().to_string());
            values.push(float_values(series)?);
        }
    }

    if columns.len() < 2 {
        debug!(
            "Skipping correlation: {} numeric column(s) found",
            columns.len()
        );
        return Ok(CorrelationMatrix::empty());
    }

    let n = columns.len();
    let mut matrix = vec![vec![None; n]; n];
    for i in 0..n {
        let observed = values[i].iter().flatten().filter(|v| v.is_finite()).count();
        matrix[i][i] = (observed >= 2).then_some(1.0);

        for j in (i + 1)..n {
            let r = pearson_pairwise(&values[i], &values[j]);
            matrix[i][j] = r;
            matrix[j][i] = r;
        }
    }

    Ok(CorrelationMatrix {
        columns,
        values: matrix,
    })
}

/// Pearson correlation over rows where both sides are present and finite.
///
/// `None` when fewer than two joint rows exist or either side is constant
/// over those rows.
pub fn pearson_pairwise(x: &[Option<f64>], y: &[Option<f64>]) -> Option<f64> {
    let pairs: Vec<(f64, f64)> = x
        .iter()
        .zip(y)
        .filter_map(|(a, b)| Some(((*a)?, (*b)?)))
        .filter(|(a, b)| a.is_finite() && b.is_finite())
        .collect();

    if pairs.len() < 2 {
        return None;
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(a, _)| a).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, b)| b).sum::<f64>() / n;

    let (mut cov, mut var_x, mut var_y) = (0.0, 0.0, 0.0);
    for (a, b) in &pairs {
        let dx = a - mean_x;
        let dy = b - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }

    let r = cov / (var_x.sqrt() * var_y.sqrt());
    r.is_finite().then(|| r.clamp(-1.0, 1.0))
}

impl CorrelationMatrix {
    /// Render as a dataframe: a label column followed by one column per
    /// numeric column.
    ///
    /// The label column is named `column`, prefixed with underscores until it
    /// no longer clashes with a numeric column name.
    pub fn to_dataframe(&self) -> Result<DataFrame> {
        let mut label = String::from("column");
        while self.contains(&label) {
            label.insert(0, '_');
        }

        let mut out = Vec::with_capacity(self.columns.len() + 1);
        out.push(Column::new(label.as_str().into(), self.columns.clone()));
        for (j, name) in self.columns.iter().enumerate() {
            let col: Vec<Option<f64>> = self.values.iter().map(|row| row[j]).collect();
            out.push(Column::new(name.as_str().into(), col));
        }
        Ok(DataFrame::new(out)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_correlations() {
        let df = df![
            "a" => [1.0f64, 2.0, 3.0],
            "b" => [2.0f64, 4.0, 6.0],
            "c" => [3.0f64, 2.0, 1.0],
        ]
        .unwrap();

        let matrix = correlation_matrix(&df).unwrap();
        assert_eq!(matrix.columns, vec!["a", "b", "c"]);
        assert!((matrix.get("a", "b").unwrap() - 1.0).abs() < 1e-12);
        assert!((matrix.get("a", "c").unwrap() + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_symmetric_with_unit_diagonal() {
        let df = df![
            "age" => [Some(10i64), Some(20), Some(30), None],
            "height" => [140i64, 150, 165, 170],
            "weight" => [Some(40.0f64), None, Some(55.0), Some(60.0)],
        ]
        .unwrap();

        let matrix = correlation_matrix(&df).unwrap();
        for a in &matrix.columns {
            assert_eq!(matrix.get(a, a), Some(1.0));
            for b in &matrix.columns {
                assert_eq!(matrix.get(a, b), matrix.get(b, a));
            }
        }
    }

    #[test]
    fn test_excludes_non_numeric_columns() {
        let df = df![
            "age" => [10i64, 20, 30],
            "height" => [140i64, 150, 160],
            "city" => ["A", "B", "A"],
        ]
        .unwrap();

        let matrix = correlation_matrix(&df).unwrap();
        assert!(matrix.contains("age"));
        assert!(!matrix.contains("city"));
    }

    #[test]
    fn test_fewer_than_two_numeric_is_empty() {
        let df = df!["age" => [1i64, 2, 3], "city" => ["A", "B", "C"]].unwrap();
        assert!(correlation_matrix(&df).unwrap().is_empty());
        assert!(correlation_matrix(&DataFrame::empty()).unwrap().is_empty());
    }

    #[test]
    fn test_pairwise_complete_observations() {
        // Only rows 0, 1 and 3 are jointly observed, and they are perfectly correlated.
        let x = [Some(1.0), Some(2.0), None, Some(4.0)];
        let y = [Some(10.0), Some(20.0), Some(-99.0), Some(40.0)];
        assert!((pearson_pairwise(&x, &y).unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_insufficient_joint_rows_is_absent() {
        let x = [Some(1.0), None, Some(3.0)];
        let y = [None, Some(2.0), Some(3.0)];
        assert_eq!(pearson_pairwise(&x, &y), None);
    }

    #[test]
    fn test_constant_side_is_absent() {
        let x = [Some(1.0), Some(1.0), Some(1.0)];
        let y = [Some(1.0), Some(2.0), Some(3.0)];
        assert_eq!(pearson_pairwise(&x, &y), None);
    }

    #[test]
    fn test_all_null_column_diagonal_absent() {
        let df = df![
            "a" => [Some(1.0f64), Some(2.0), Some(3.0)],
            "b" => [None::<f64>, None, None],
        ]
        .unwrap();
        let matrix = correlation_matrix(&df).unwrap();
        assert_eq!(matrix.get("b", "b"), None);
        assert_eq!(matrix.get("a", "b"), None);
        assert_eq!(matrix.get("a", "a"), Some(1.0));
    }

    #[test]
    fn test_non_finite_values_are_skipped() {
        let df = df![
            "x" => [1.0f64, 2.0, f64::NAN, 4.0],
            "y" => [2.0f64, 4.0, 6.0, 8.0],
            "z" => [f64::INFINITY, 1.0, 2.0, 3.0],
        ]
        .unwrap();

        let matrix = correlation_matrix(&df).unwrap();
        let r = matrix.get("x", "y").unwrap();
        assert!((r - 1.0).abs() < 1e-12);
        for a in &matrix.columns {
            for b in &matrix.columns {
                if let Some(r) = matrix.get(a, b) {
                    assert!((-1.0..=1.0).contains(&r), "{a}/{b} = {r}");
                }
            }
        }
    }

    #[test]
    fn test_all_nan_side_is_absent() {
        let x = [Some(f64::NAN), Some(f64::NAN), Some(f64::NAN)];
        let y = [Some(1.0), Some(2.0), Some(3.0)];
        assert_eq!(pearson_pairwise(&x, &y), None);
    }

    #[test]
    fn test_to_dataframe_label_avoids_clash() {
        let df = df!["column" => [1.0f64, 2.0, 3.0], "y" => [3.0f64, 1.0, 2.0]].unwrap();
        let out = correlation_matrix(&df).unwrap().to_dataframe().unwrap();
        assert_eq!(out.shape(), (2, 3));
        assert_eq!(out.get_column_names()[0].as_str(), "_column");
        assert!(out.column("column").is_ok());
    }

    #[test]
    fn test_to_dataframe_shape() {
        let df = df!["x" => [1.0f64, 2.0, 3.0], "y" => [3.0f64, 1.0, 2.0]].unwrap();
        let out = correlation_matrix(&df).unwrap().to_dataframe().unwrap();
        assert_eq!(out.shape(), (2, 3));
        assert_eq!(out.get_column_names()[0].as_str(), "column");
    }
}
